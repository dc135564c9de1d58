//! HTTP request handlers (route handlers).
//!
//! Handlers extract request data, call into the record store or the
//! analytics engine, and return JSON.

/// Credit card record management endpoints
pub mod credit_cards;
/// Service health endpoint
pub mod health;
/// Portfolio report endpoints
pub mod portfolio;
