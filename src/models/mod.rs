//! Data models for stored records, API bodies, and analytics output.

/// Credit card records in their stored, raw, and validated forms
pub mod credit_card;
/// Portfolio report produced by the analytics engine
pub mod report;
/// Authenticated user model
pub mod user;
