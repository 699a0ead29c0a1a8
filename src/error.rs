//! Failure taxonomy for the wallet engine
//!
//! Every operation surfaces one of these kinds; the machine `code()` and
//! `http_status()` let callers distinguish "fix your input" from
//! "try again later" without seeing store internals.

use thiserror::Error;

/// Wallet engine error kinds
#[derive(Error, Debug)]
pub enum WalletError {
    /// Wallet, user or ledger entry absent
    #[error("{0}")]
    NotFound(String),

    /// Duplicate wallet number or transfer id
    #[error("{0}")]
    Conflict(String),

    /// Declared currency does not match the wallet's actual currency
    #[error("currency mismatch: {0}")]
    CurrencyMismatch(String),

    /// Recipient name claim does not match the wallet owner's display name
    #[error("recipient name and wallet number do not match")]
    RecipientMismatch,

    /// Sender balance does not cover the requested amount
    #[error("insufficient balance")]
    InsufficientFunds,

    /// Amount is zero, negative, or finer than the ledger scale
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Upstream has no usable rate for the currency pair
    #[error("no conversion rate for {from}->{to}")]
    RateUnavailable { from: String, to: String },

    /// Transient store failure; the whole unit was aborted, resubmit is safe
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
}

impl WalletError {
    /// Stable machine code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            WalletError::NotFound(_) => "NOT_FOUND",
            WalletError::Conflict(_) => "CONFLICT",
            WalletError::CurrencyMismatch(_) => "CURRENCY_MISMATCH",
            WalletError::RecipientMismatch => "RECIPIENT_MISMATCH",
            WalletError::InsufficientFunds => "INSUFFICIENT_FUNDS",
            WalletError::InvalidAmount(_) => "INVALID_AMOUNT",
            WalletError::RateUnavailable { .. } => "RATE_UNAVAILABLE",
            WalletError::StoreUnavailable(_) => "STORE_UNAVAILABLE",
        }
    }

    /// HTTP status code suggestion
    pub fn http_status(&self) -> u16 {
        match self {
            WalletError::NotFound(_) => 404,
            WalletError::Conflict(_) => 409,
            WalletError::CurrencyMismatch(_)
            | WalletError::RecipientMismatch
            | WalletError::InvalidAmount(_) => 400,
            WalletError::InsufficientFunds => 422,
            WalletError::RateUnavailable { .. } | WalletError::StoreUnavailable(_) => 503,
        }
    }

    /// Whether the caller may resubmit the same request unchanged
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            WalletError::RateUnavailable { .. } | WalletError::StoreUnavailable(_)
        )
    }
}

/// True when the driver error is a unique-key violation (PostgreSQL 23505).
///
/// Repositories use this to attach a domain message before the generic
/// `From<sqlx::Error>` mapping kicks in.
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    match e {
        sqlx::Error::Database(db) => db.is_unique_violation(),
        _ => false,
    }
}

impl From<sqlx::Error> for WalletError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::RowNotFound => WalletError::NotFound("record not found".to_string()),
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                WalletError::Conflict("duplicate key".to_string())
            }
            _ => WalletError::StoreUnavailable(e.to_string()),
        }
    }
}
