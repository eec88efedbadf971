//! Admin routes: banks, managers, and system-wide listings.

use axum::extract::{Path, State};
use axum::response::Json;
use models::{Account, AddBankRequest, Bank, BankManager, Customer, RegisterManagerRequest, Role};

use super::ApiResult;
use super::auth::AuthUser;
use crate::state::AppState;

/// `GET /api/admin/banks`.
pub async fn list_banks(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Json<Vec<Bank>>> {
    auth.0.require(Role::Admin)?;
    Ok(Json(state.list_banks().await))
}

/// `POST /api/admin/bank/add`.
pub async fn add_bank(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<AddBankRequest>,
) -> ApiResult<&'static str> {
    auth.0.require(Role::Admin)?;
    let bank = state.add_bank(request).await?;
    tracing::info!(bank = %bank.bank_name, "bank registered");
    Ok("Bank registered")
}

/// `GET /api/admin/bank-managers`.
pub async fn list_managers(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Json<Vec<BankManager>>> {
    auth.0.require(Role::Admin)?;
    Ok(Json(state.list_managers().await))
}

/// `POST /api/admin/bank-manager/register`.
pub async fn register_manager(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<RegisterManagerRequest>,
) -> ApiResult<&'static str> {
    auth.0.require(Role::Admin)?;
    let manager = state.register_manager(request).await?;
    tracing::info!(manager = %manager.email, "bank manager registered");
    Ok("Bank manager registered")
}

/// `GET /api/admin/customers` — every customer across all banks.
pub async fn list_customers(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Json<Vec<Customer>>> {
    auth.0.require(Role::Admin)?;
    Ok(Json(state.list_all_customers().await))
}

/// `GET /api/admin/accounts` — every account across all banks.
pub async fn list_accounts(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Json<Vec<Account>>> {
    auth.0.require(Role::Admin)?;
    Ok(Json(state.list_all_accounts().await))
}

/// `PUT /api/admin/lock/{accountNumber}`.
pub async fn lock(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(account_number): Path<String>,
) -> ApiResult<&'static str> {
    auth.0.require(Role::Admin)?;
    state.set_lock(&account_number, true).await?;
    Ok("Account locked")
}

/// `PUT /api/admin/unlock/{accountNumber}`.
pub async fn unlock(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(account_number): Path<String>,
) -> ApiResult<&'static str> {
    auth.0.require(Role::Admin)?;
    state.set_lock(&account_number, false).await?;
    Ok("Account unlocked")
}
