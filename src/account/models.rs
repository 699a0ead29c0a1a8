//! Data models for user identity

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A registered user
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub user_id: i64,
    /// Name shown to counterparties; transfers verify the recipient-name
    /// claim against this field
    pub display_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}
