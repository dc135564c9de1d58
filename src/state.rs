//! Shared state handed to every handler.

use axum::extract::FromRef;

use crate::{analytics::AnalyticsRules, db::DbPool};

#[derive(Debug, Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub rules: AnalyticsRules,
}

/// Lets handlers and middleware that only touch the database extract `State<DbPool>`.
impl FromRef<AppState> for DbPool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}
