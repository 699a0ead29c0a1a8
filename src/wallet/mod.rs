//! Wallet store
//!
//! Authoritative mapping from wallet number to owning user and balance.
//! Balances only move through the transfer engine's atomic adjustment;
//! wallets are never deleted.

pub mod models;
pub mod repository;

pub use models::{CreateWallet, DEFAULT_CURRENCY, Wallet};
pub use repository::WalletRepository;
