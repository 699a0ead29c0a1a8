//! Data models for ledger entries

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// Transfer record status
///
/// Stored as SMALLINT. `Success` is terminal: a successful entry is
/// immutable. The engine never persists `Failed` (aborted units roll the
/// whole transaction back); the variant exists because the status column
/// domain and the query filter include it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i16)]
pub enum TransferStatus {
    Pending = 0,
    Success = 1,
    Failed = 2,
}

impl TransferStatus {
    /// Numeric id for SMALLINT storage
    #[inline]
    pub fn id(&self) -> i16 {
        *self as i16
    }

    /// Convert from a stored SMALLINT id
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            0 => Some(TransferStatus::Pending),
            1 => Some(TransferStatus::Success),
            2 => Some(TransferStatus::Failed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransferStatus::Pending => "Pending",
            TransferStatus::Success => "Success",
            TransferStatus::Failed => "Failed",
        }
    }
}

impl fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<i16> for TransferStatus {
    type Error = String;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        TransferStatus::from_id(value).ok_or_else(|| format!("invalid status id: {}", value))
    }
}

/// One immutable audit record of a money movement
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    pub transfer_id: String,
    pub sender_wallet: String,
    pub recipient_wallet: String,
    /// Snapshot of the recipient's display name at transfer time
    pub recipient_name: String,
    pub sender_currency: String,
    pub recipient_currency: String,
    pub amount_sent: Decimal,
    pub amount_received: Decimal,
    pub conversion_rate: Decimal,
    #[sqlx(try_from = "i16")]
    pub status: TransferStatus,
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Fields for a new (Pending) ledger entry; the store assigns the timestamp
#[derive(Debug, Clone)]
pub struct NewLedgerEntry {
    pub transfer_id: String,
    pub sender_wallet: String,
    pub recipient_wallet: String,
    pub recipient_name: String,
    pub sender_currency: String,
    pub recipient_currency: String,
    pub amount_sent: Decimal,
    pub amount_received: Decimal,
    pub conversion_rate: Decimal,
}

/// Optional conjunctive filters for the user ledger query
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerFilter {
    pub sender_wallet: Option<String>,
    pub recipient_wallet: Option<String>,
    /// Inclusive lower bound on the entry timestamp
    pub start_date: Option<DateTime<Utc>>,
    /// Inclusive upper bound on the entry timestamp
    pub end_date: Option<DateTime<Utc>>,
    /// Bounds apply to the sent amount
    pub min_amount: Option<Decimal>,
    pub max_amount: Option<Decimal>,
    pub status: Option<TransferStatus>,
}

/// One page of query results plus the total match count
#[derive(Debug, Clone, Serialize)]
pub struct LedgerPage {
    pub entries: Vec<LedgerEntry>,
    pub total: i64,
    pub page: u32,
    pub limit: u32,
}

/// Offset pagination; both fields are clamped to at least 1
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Page {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    10
}

impl Default for Page {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

impl Page {
    /// Clamp page and limit to their minimums
    pub fn normalized(self) -> Self {
        Self {
            page: self.page.max(1),
            limit: self.limit.max(1),
        }
    }

    /// Rows to skip
    pub fn offset(&self) -> i64 {
        let n = self.normalized();
        i64::from(n.page - 1) * i64::from(n.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_id_roundtrip() {
        for status in [
            TransferStatus::Pending,
            TransferStatus::Success,
            TransferStatus::Failed,
        ] {
            assert_eq!(TransferStatus::from_id(status.id()), Some(status));
        }
    }

    #[test]
    fn test_invalid_status_id() {
        assert!(TransferStatus::from_id(99).is_none());
        assert!(TransferStatus::from_id(-1).is_none());
        assert!(TransferStatus::try_from(3i16).is_err());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(TransferStatus::Pending.to_string(), "Pending");
        assert_eq!(TransferStatus::Success.to_string(), "Success");
    }

    #[test]
    fn test_page_normalization() {
        let page = Page { page: 0, limit: 0 }.normalized();
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 1);

        assert_eq!(Page::default().offset(), 0);
        assert_eq!(Page { page: 3, limit: 10 }.offset(), 20);
    }

    #[test]
    fn test_filter_wire_shape() {
        let filter: LedgerFilter = serde_json::from_str(
            r#"{"senderWallet": "W-1", "minAmount": "5.00", "status": "Success"}"#,
        )
        .unwrap();
        assert_eq!(filter.sender_wallet.as_deref(), Some("W-1"));
        assert_eq!(filter.min_amount, Some(Decimal::new(500, 2)));
        assert_eq!(filter.status, Some(TransferStatus::Success));
        assert!(filter.recipient_wallet.is_none());
    }

    #[test]
    fn test_entry_serializes_timestamp_field() {
        let entry = LedgerEntry {
            transfer_id: "t-1".into(),
            sender_wallet: "W-1".into(),
            recipient_wallet: "W-2".into(),
            recipient_name: "Bob".into(),
            sender_currency: "SAR".into(),
            recipient_currency: "USD".into(),
            amount_sent: Decimal::new(5000, 2),
            amount_received: Decimal::new(1350, 2),
            conversion_rate: Decimal::new(27, 2),
            status: TransferStatus::Success,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("timestamp").is_some(), "created_at -> timestamp");
        assert_eq!(json["status"], "Success");
        assert_eq!(json["amountReceived"], "13.50");
    }
}
