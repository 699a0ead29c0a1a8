//! Read-side reporting over the ledger
//!
//! Time-windowed summaries normalized into one settlement currency:
//! a monthly financial overview and a trailing-7-day daily breakdown.
//! The arithmetic lives in [`aggregate`] as pure functions; the service
//! fetches rows and rates and hands them over.

pub mod aggregate;
pub mod service;

pub use aggregate::DayOverview;
pub use service::{FinancialOverview, ReportingService};
