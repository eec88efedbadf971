//! Teller routes: account provisioning and money movement, BANK role only.

use axum::extract::{Query, State};
use axum::response::Json;
use models::{AccountInfo, AddAccountRequest, AmountRequest, CustomerAccountInfo, Role, Transaction};
use serde::Deserialize;

use super::ApiResult;
use super::auth::AuthUser;
use super::customer::EmailQuery;
use crate::state::{AppState, StoreError};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankQuery {
    pub bank_id: i64,
}

/// `GET /api/bank/account/exists?email=`.
pub async fn exists(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<EmailQuery>,
) -> ApiResult<Json<bool>> {
    auth.0.require(Role::Bank)?;
    Ok(Json(state.account_exists(&query.email).await))
}

/// `GET /api/bank/account/status?email=` — plain-text ACTIVE/INACTIVE.
pub async fn status(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<EmailQuery>,
) -> ApiResult<String> {
    auth.0.require(Role::Bank)?;
    Ok(state.account_status(&query.email).await?)
}

/// `GET /api/bank/account/customer-info?email=`.
pub async fn customer_info(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<EmailQuery>,
) -> ApiResult<Json<CustomerAccountInfo>> {
    auth.0.require(Role::Bank)?;
    Ok(Json(state.customer_info(&query.email).await?))
}

/// `POST /api/bank/account/add`.
pub async fn add_account(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<AddAccountRequest>,
) -> ApiResult<&'static str> {
    auth.0.require(Role::Bank)?;
    state.add_account(request).await?;
    Ok("Account created")
}

/// `GET /api/bank/account/detail?email=` — flattened teller view.
pub async fn detail(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<EmailQuery>,
) -> ApiResult<Json<AccountInfo>> {
    auth.0.require(Role::Bank)?;
    Ok(Json(state.account_detail(&query.email).await?))
}

/// `GET /api/bank/account/transactions?email=`.
pub async fn account_transactions(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<EmailQuery>,
) -> ApiResult<Json<Vec<Transaction>>> {
    auth.0.require(Role::Bank)?;
    Ok(Json(state.transactions_for_email(&query.email).await))
}

/// `POST /api/bank/account/deposit`.
pub async fn deposit(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<AmountRequest>,
) -> ApiResult<&'static str> {
    auth.0.require(Role::Bank)?;
    state.deposit(&request.email, request.amount).await?;
    Ok("Deposit recorded")
}

/// `POST /api/bank/account/withdraw`.
pub async fn withdraw(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<AmountRequest>,
) -> ApiResult<&'static str> {
    auth.0.require(Role::Bank)?;
    state.withdraw(&request.email, request.amount).await?;
    Ok("Withdrawal recorded")
}

/// `GET /api/bank/transactions?bankId=` — one bank's full ledger. The id
/// must match the bank linked to the calling session.
pub async fn bank_transactions(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<BankQuery>,
) -> ApiResult<Json<Vec<Transaction>>> {
    auth.0.require(Role::Bank)?;
    if auth.0.bank_id != Some(query.bank_id) {
        return Err(StoreError::Forbidden.into());
    }
    Ok(Json(state.transactions_for_bank(query.bank_id).await))
}
