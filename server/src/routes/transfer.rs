//! Money transfer route.

use axum::extract::State;
use axum::response::Json;
use models::{Role, TransferRequest};

use super::ApiResult;
use super::auth::AuthUser;
use crate::state::{AppState, StoreError};

/// `POST /api/transfer` — authenticated customers only, and only from the
/// account linked to their own session.
pub async fn transfer(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<TransferRequest>,
) -> ApiResult<String> {
    auth.0.require(Role::Customer)?;
    if auth.0.account_number.as_deref() != Some(request.sender_account_number.as_str()) {
        return Err(StoreError::Forbidden.into());
    }
    let confirmation = state
        .transfer(
            &request.sender_account_number,
            &request.receiver_account_number,
            request.amount,
            &request.purpose,
        )
        .await?;
    tracing::info!(
        from = %request.sender_account_number,
        to = %request.receiver_account_number,
        amount = request.amount,
        "transfer"
    );
    Ok(confirmation)
}
