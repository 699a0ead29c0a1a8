//! Transfer engine
//!
//! Orchestrates validation, currency conversion and the atomic
//! debit/credit/ledger-write unit. This is the only component with
//! business-invariant responsibility: money is never created, destroyed
//! or duplicated, and a partial failure leaves no observable state.

pub mod service;
pub mod types;

pub use service::TransferService;
pub use types::{TransferRequest, TransferResponse};
