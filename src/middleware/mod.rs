//! HTTP middleware components.
//!
//! Middleware run before route handlers and can short-circuit a request,
//! as authentication does for unknown API keys.

/// API key authentication middleware
pub mod auth;
