//! User identity lookup
//!
//! Users are referenced by wallets but owned by an external collaborator
//! (registration, login and tokens are out of scope). The engine only
//! needs to resolve a user id to a display name for the recipient-name
//! check, plus a create for seeding stores in tests.

pub mod models;
pub mod repository;

pub use models::User;
pub use repository::UserRepository;
