//! Transfer request/response DTOs

use crate::money::StrictAmount;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A transfer request as presented by the caller
///
/// The declared currencies are pinned against the wallets' actual
/// currencies during validation; `recipient_name` is the caller's claim
/// about who they are paying.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub from_wallet: String,
    pub to_wallet: String,
    pub amount: StrictAmount,
    pub from_currency: String,
    pub to_currency: String,
    pub recipient_name: String,
}

/// Result of a committed transfer
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferResponse {
    pub transfer_id: String,
    pub from_wallet: String,
    pub to_wallet: String,
    pub amount_sent: Decimal,
    pub amount_received: Decimal,
    pub from_currency: String,
    pub to_currency: String,
    pub conversion_rate: Decimal,
    pub timestamp: DateTime<Utc>,
}
