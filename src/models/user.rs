//! User model for authentication.
//!
//! Each user owns a set of credit card records and authenticates with an API
//! key. Keys are stored as SHA-256 hashes, never in plaintext.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Represents a user record from the database.
///
/// # Database Table
///
/// Maps to the `users` table with columns:
/// - `id`: Unique identifier (UUID)
/// - `api_key_hash`: SHA-256 hash of the user's API key
/// - `display_name`: Name shown on the dashboard
/// - `created_at`: When the user was created
/// - `is_active`: Whether the key is currently valid
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,

    /// SHA-256 hash of the API key (64 hex characters)
    ///
    /// A request carrying "Bearer abc123" is matched by hashing "abc123"
    /// and looking the digest up here.
    pub api_key_hash: String,

    pub display_name: String,

    pub created_at: DateTime<Utc>,

    /// Inactive users are rejected during authentication.
    pub is_active: bool,
}
