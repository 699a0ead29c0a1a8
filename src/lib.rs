//! walletcore - Multi-Currency Wallet Transfer Engine
//!
//! Registered users hold multiple named, currency-tagged balances and
//! move value between them, including cross-currency transfers at a
//! fetched conversion rate, with an auditable append-only ledger. The
//! core guarantee: partial failure never leaves money created, destroyed
//! or duplicated.
//!
//! # Modules
//!
//! - [`account`] - User identity lookup (referenced, not owned)
//! - [`wallet`] - Wallet store: balances, atomic conditional adjustment
//! - [`ledger`] - Append-only transfer records with CAS status transition
//! - [`transfer`] - The transfer engine (validation + atomic unit)
//! - [`rates`] - Conversion rate provider with a per-pair TTL cache
//! - [`reporting`] - Monthly and 7-day summaries in a settlement currency
//! - [`money`] - Strict amounts and fixed-precision conversion
//! - [`error`] - Failure taxonomy
//! - [`db`] - PostgreSQL pool wrapper
//! - [`config`] / [`logging`] - YAML config and tracing setup

pub mod account;
pub mod config;
pub mod db;
pub mod error;
pub mod ledger;
pub mod logging;
pub mod money;
pub mod rates;
pub mod reporting;
pub mod transfer;
pub mod wallet;

// Convenient re-exports at crate root
pub use account::{User, UserRepository};
pub use config::AppConfig;
pub use db::Database;
pub use error::WalletError;
pub use ledger::{LedgerEntry, LedgerFilter, LedgerPage, LedgerRepository, Page, TransferStatus};
pub use money::StrictAmount;
pub use rates::RateProvider;
pub use reporting::{DayOverview, FinancialOverview, ReportingService};
pub use transfer::{TransferRequest, TransferResponse, TransferService};
pub use wallet::{CreateWallet, Wallet, WalletRepository};
