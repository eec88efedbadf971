//! Customer resource routes, shared between roles.
//!
//! Registration, listing and deletion act on the calling bank manager's
//! own bank. The account and transaction reads are also used by admins
//! (any account) and customers (their own account only).

use axum::extract::{Path, Query, State};
use axum::response::Json;
use models::{Account, Customer, RegisterCustomerRequest, Role, Transaction};
use serde::Deserialize;

use super::ApiResult;
use super::auth::AuthUser;
use crate::state::{AppState, StoreError};

#[derive(Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionsQuery {
    #[serde(default)]
    pub account_number: Option<String>,
}

fn session_bank(auth: &AuthUser) -> Result<i64, StoreError> {
    auth.0.require(Role::Bank)?;
    auth.0.bank_id.ok_or(StoreError::Forbidden)
}

/// `POST /api/customer/register` — bank manager creates a customer.
pub async fn register(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<RegisterCustomerRequest>,
) -> ApiResult<&'static str> {
    let bank_id = session_bank(&auth)?;
    state.register_customer(bank_id, request).await?;
    Ok("Customer registered")
}

/// `GET /api/customer/all` — the calling bank's customers.
pub async fn list(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Json<Vec<Customer>>> {
    let bank_id = session_bank(&auth)?;
    Ok(Json(state.list_bank_customers(bank_id).await))
}

/// `DELETE /api/customer/delete?email=`.
pub async fn remove(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<EmailQuery>,
) -> ApiResult<&'static str> {
    let bank_id = session_bank(&auth)?;
    state.delete_customer(bank_id, &query.email).await?;
    Ok("Customer deleted")
}

/// `GET /api/customer/account/{accountNumber}` — one account's detail.
/// Customers may only read their own account.
pub async fn account(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(account_number): Path<String>,
) -> ApiResult<Json<Account>> {
    if auth.0.role == Role::Customer && auth.0.account_number.as_deref() != Some(account_number.as_str()) {
        return Err(StoreError::Forbidden.into());
    }
    Ok(Json(state.account_by_number(&account_number).await?))
}

/// `GET /api/customer/transactions[?accountNumber=]`.
///
/// Admins read any account, or the whole ledger with no query; customers
/// always read their own account regardless of the query.
pub async fn transactions(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<TransactionsQuery>,
) -> ApiResult<Json<Vec<Transaction>>> {
    match auth.0.role {
        Role::Admin => match query.account_number {
            Some(number) => Ok(Json(state.transactions_for_account(&number).await)),
            None => Ok(Json(state.transactions_all().await)),
        },
        Role::Customer => {
            let number = auth.0.account_number.ok_or(StoreError::Forbidden)?;
            Ok(Json(state.transactions_for_account(&number).await))
        }
        Role::Bank => Err(StoreError::Forbidden.into()),
    }
}
