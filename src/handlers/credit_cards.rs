//! Credit card record HTTP handlers.
//!
//! This module implements the record management endpoints:
//! - GET /api/v1/credit-cards - List the caller's cards
//! - POST /api/v1/credit-cards - Store a batch of extracted cards
//! - DELETE /api/v1/credit-cards/{id} - Delete one card
//! - DELETE /api/v1/credit-cards - Delete all of the caller's cards

use axum::{
    Extension, Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    db::DbPool,
    error::AppError,
    middleware::auth::AuthContext,
    models::credit_card::{CreateCreditCardRequest, CreditCardResponse},
    services::card_store,
};

/// Response body after a batch was stored.
#[derive(Debug, Serialize)]
pub struct StoredCardsResponse {
    pub cards_stored: usize,
    pub credit_cards: Vec<CreditCardResponse>,
}

/// Response body after clearing a portfolio.
#[derive(Debug, Serialize)]
pub struct ClearedCardsResponse {
    pub cards_deleted: u64,
}

/// List all cards for the authenticated user, newest first.
///
/// # Response
///
/// - **Success (200 OK)**: Array of cards (may be empty)
/// - **Error (401)**: Invalid API key
pub async fn list_cards(
    State(pool): State<DbPool>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<Vec<CreditCardResponse>>, AppError> {
    let cards = card_store::list_cards(&pool, auth.user_id).await?;

    Ok(Json(cards.into_iter().map(Into::into).collect()))
}

/// Store the cards extracted from one credit report.
///
/// # Request Body
///
/// ```json
/// [
///   {
///     "card_name": "Chase Sapphire Preferred",
///     "issuer": "Chase",
///     "account_number": "1234",
///     "open_date": "2024-03-15",
///     "status": "Active",
///     "credit_limit_cents": 1000000,
///     "current_balance_cents": 250000,
///     "annual_fee_cents": 9500
///   }
/// ]
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: The stored cards with their new ids
/// - **Error (422)**: At least one card is invalid or has a field of the
///   wrong JSON type; every issue is listed and nothing is stored
/// - **Error (401)**: Invalid API key
pub async fn create_cards(
    State(pool): State<DbPool>,
    Extension(auth): Extension<AuthContext>,
    payload: Result<Json<Vec<CreateCreditCardRequest>>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(requests) = payload?;
    let stored = card_store::insert_cards(&pool, auth.user_id, requests).await?;

    let response = StoredCardsResponse {
        cards_stored: stored.len(),
        credit_cards: stored.into_iter().map(Into::into).collect(),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Delete one card.
///
/// # Response
///
/// - **Success (204 No Content)**
/// - **Error (404)**: Card not found or owned by another user
pub async fn delete_card(
    State(pool): State<DbPool>,
    Extension(auth): Extension<AuthContext>,
    Path(card_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    card_store::delete_card(&pool, auth.user_id, card_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete every card owned by the authenticated user.
pub async fn clear_cards(
    State(pool): State<DbPool>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<ClearedCardsResponse>, AppError> {
    let cards_deleted = card_store::clear_cards(&pool, auth.user_id).await?;

    Ok(Json(ClearedCardsResponse { cards_deleted }))
}
