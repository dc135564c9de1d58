//! Record store for credit cards.
//!
//! The store hands out a user's records and accepts batches from the
//! extractor. It never interprets them: status and open date are stored as
//! text and only checked when a batch is submitted or a report is built.
//!
//! # Ownership
//!
//! Every query filters on `user_id`. A card that belongs to someone else is
//! indistinguishable from a card that does not exist.

use uuid::Uuid;

use crate::{
    analytics::validation::validate_records,
    db::DbPool,
    error::AppError,
    models::credit_card::{CreateCreditCardRequest, CreditCardRow, RawCardRecord},
};

const CARD_COLUMNS: &str = "id, card_name, issuer, account_number, open_date, status, \
     credit_limit_cents, current_balance_cents, annual_fee_cents, account_type, created_at";

/// All cards owned by `user_id`, newest first.
pub async fn list_cards(pool: &DbPool, user_id: Uuid) -> Result<Vec<CreditCardRow>, AppError> {
    let cards = sqlx::query_as::<_, CreditCardRow>(&format!(
        "SELECT {CARD_COLUMNS} FROM credit_cards WHERE user_id = $1 ORDER BY created_at DESC, id"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    tracing::debug!(%user_id, count = cards.len(), "Loaded credit cards");
    Ok(cards)
}

/// The user's cards in the loose shape the analytics engine validates.
pub async fn list_records(pool: &DbPool, user_id: Uuid) -> Result<Vec<RawCardRecord>, AppError> {
    let rows = list_cards(pool, user_id).await?;
    Ok(rows.into_iter().map(RawCardRecord::from).collect())
}

/// Store a batch of extracted cards for `user_id`.
///
/// # Process
///
/// 1. Assign an id to every card
/// 2. Validate the whole batch, rejecting it if any card is invalid
/// 3. Insert every card inside one database transaction
///
/// # Errors
///
/// - `Validation`: at least one card broke the record contract; nothing is stored
/// - `Database`: the insert failed; nothing is stored
pub async fn insert_cards(
    pool: &DbPool,
    user_id: Uuid,
    requests: Vec<CreateCreditCardRequest>,
) -> Result<Vec<CreditCardRow>, AppError> {
    let ids: Vec<Uuid> = requests.iter().map(|_| Uuid::new_v4()).collect();
    let raw: Vec<RawCardRecord> = requests
        .iter()
        .zip(&ids)
        .map(|(request, id)| request.to_raw(*id))
        .collect();
    validate_records(&raw)?;

    let mut tx = pool.begin().await?;
    let mut stored = Vec::with_capacity(requests.len());

    for (request, id) in requests.into_iter().zip(ids) {
        let row = sqlx::query_as::<_, CreditCardRow>(&format!(
            r#"
            INSERT INTO credit_cards (
                id, user_id, card_name, issuer, account_number, open_date, status,
                credit_limit_cents, current_balance_cents, annual_fee_cents, account_type
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {CARD_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(user_id)
        .bind(request.card_name.unwrap_or_default())
        .bind(request.issuer.unwrap_or_default())
        .bind(request.account_number)
        .bind(request.open_date)
        .bind(request.status.unwrap_or_default())
        .bind(request.credit_limit_cents)
        .bind(request.current_balance_cents)
        .bind(request.annual_fee_cents)
        .bind(request.account_type)
        .fetch_one(&mut *tx)
        .await?;

        stored.push(row);
    }

    tx.commit().await?;

    tracing::info!(%user_id, count = stored.len(), "Stored extracted credit cards");
    Ok(stored)
}

/// Delete one card.
///
/// # Errors
///
/// - `CardNotFound`: no card with this id belongs to `user_id`
pub async fn delete_card(pool: &DbPool, user_id: Uuid, card_id: Uuid) -> Result<(), AppError> {
    let deleted = sqlx::query("DELETE FROM credit_cards WHERE id = $1 AND user_id = $2")
        .bind(card_id)
        .bind(user_id)
        .execute(pool)
        .await?
        .rows_affected();

    if deleted == 0 {
        return Err(AppError::CardNotFound);
    }

    tracing::info!(%user_id, %card_id, "Deleted credit card");
    Ok(())
}

/// Delete every card owned by `user_id`. Returns how many were removed.
pub async fn clear_cards(pool: &DbPool, user_id: Uuid) -> Result<u64, AppError> {
    let deleted = sqlx::query("DELETE FROM credit_cards WHERE user_id = $1")
        .bind(user_id)
        .execute(pool)
        .await?
        .rows_affected();

    tracing::info!(%user_id, deleted, "Cleared credit cards");
    Ok(deleted)
}
