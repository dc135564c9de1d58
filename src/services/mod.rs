//! Business logic services.
//!
//! Services sit between HTTP handlers and the database. Handlers stay thin;
//! record access and batch validation live here.

pub mod card_store;
