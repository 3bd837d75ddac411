use axum::{extract::State, Json};
use tracing::info;

use crate::billing::models::{SubscribeRequest, SubscribeResponse};
use crate::errors::AppError;
use crate::state::AppState;
use crate::store::NewSubscription;

/// POST /subscribe
///
/// Records one subscription row. A failed insert keeps its reason for the
/// logs and maps to a fixed 500 message; "ok" is only returned once the
/// store has confirmed the row.
pub async fn handle_subscribe(
    State(state): State<AppState>,
    Json(req): Json<SubscribeRequest>,
) -> Result<Json<SubscribeResponse>, AppError> {
    let (Some(user_id), Some(plan)) = (req.user_id, req.plan) else {
        return Err(AppError::Validation(
            "user_id and plan are required".to_string(),
        ));
    };
    let amount = req.amount.unwrap_or(0);

    let row = state
        .store
        .insert_subscription(NewSubscription::active(user_id, plan, amount))
        .await
        .map_err(AppError::SubscriptionWrite)?;

    info!(
        "Recorded subscription {} (plan={}, amount={})",
        row.id, row.plan, row.amount
    );

    Ok(Json(SubscribeResponse::ok()))
}
