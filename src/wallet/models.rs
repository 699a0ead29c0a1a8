//! Data models for wallets

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Currency assigned to wallets created without an explicit one
pub const DEFAULT_CURRENCY: &str = "SAR";

/// A named, currency-tagged balance owned by a user
///
/// `wallet_number` is the user-facing identifier and is globally unique;
/// `currency` is immutable after creation; `balance` is never observed
/// negative by any reader.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    #[serde(skip_serializing)]
    pub wallet_id: i64,
    pub wallet_number: String,
    pub user_id: i64,
    pub balance: Decimal,
    pub currency: String,
    #[serde(rename = "name")]
    pub display_name: String,
    pub created_at: DateTime<Utc>,
}

/// Wallet creation request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWallet {
    pub wallet_number: String,
    pub initial_balance: Decimal,
    /// Defaults to the wallet number when absent
    #[serde(default, rename = "name")]
    pub display_name: Option<String>,
    /// Defaults to [`DEFAULT_CURRENCY`] when absent
    #[serde(default)]
    pub currency: Option<String>,
}
