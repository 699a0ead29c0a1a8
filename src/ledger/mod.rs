//! Append-only transfer ledger
//!
//! Every money movement leaves exactly one record, created `Pending`
//! inside the transfer transaction and flipped to `Success` before
//! commit. An aborted transfer leaves no row at all.

pub mod models;
pub mod repository;

pub use models::{LedgerEntry, LedgerFilter, LedgerPage, NewLedgerEntry, Page, TransferStatus};
pub use repository::LedgerRepository;
