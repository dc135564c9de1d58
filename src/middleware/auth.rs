//! API key authentication middleware.
//!
//! This middleware intercepts every protected request to:
//! 1. Extract the API key from the Authorization header
//! 2. Hash it and find the active user it belongs to
//! 3. Inject the user scope into the request
//! 4. Reject unauthorized requests with HTTP 401

use crate::{db::DbPool, error::AppError, models::user::User};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Authentication context attached to authenticated requests.
///
/// Every record store query is filtered by `user_id`, so a request only
/// ever sees and analyzes its own cards.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user_id: Uuid,
    pub display_name: String,
}

/// SHA-256 hex digest of an API key, as stored in `users.api_key_hash`.
pub fn hash_api_key(api_key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(api_key.as_bytes());
    hex::encode(hasher.finalize())
}

/// API key authentication middleware function.
///
/// # Flow
///
/// 1. Extract `Authorization: Bearer <key>` header from request
/// 2. Hash the `<key>` using SHA-256
/// 3. Query `users` for a matching hash where `is_active = true`
/// 4. If found: inject `AuthContext` into request, call next handler
/// 5. If not found: return 401 Unauthorized error
///
/// A missing or malformed header is rejected before the database is touched.
pub async fn auth_middleware(
    State(pool): State<DbPool>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::InvalidApiKey)?;

    let api_key = auth_header
        .strip_prefix("Bearer ")
        .filter(|key| !key.is_empty())
        .ok_or(AppError::InvalidApiKey)?;

    let key_hash = hash_api_key(api_key);

    let user = sqlx::query_as::<_, User>(
        "SELECT id, api_key_hash, display_name, created_at, is_active
         FROM users
         WHERE api_key_hash = $1 AND is_active = true",
    )
    .bind(&key_hash)
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| {
        tracing::warn!("Rejected request with unknown API key");
        AppError::InvalidApiKey
    })?;

    // Route handlers extract this with Extension<AuthContext>
    request.extensions_mut().insert(AuthContext {
        user_id: user.id,
        display_name: user.display_name,
    });

    Ok(next.run(request).await)
}
