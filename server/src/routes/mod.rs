//! Router assembly.
//!
//! Every endpoint the browser client calls is registered here. The CORS
//! layer is wide open; this backend only exists for local development
//! against the SPA.

pub mod admin;
pub mod auth;
pub mod bank;
pub mod customer;
pub mod transfer;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::{AppState, StoreError};

/// Handler result carrying the store's error text to the browser.
pub type ApiResult<T> = Result<T, ApiFailure>;

/// Wrapper mapping [`StoreError`] onto an HTTP response. The body is the
/// plain error message; the client surfaces it verbatim.
pub struct ApiFailure(pub StoreError);

impl From<StoreError> for ApiFailure {
    fn from(err: StoreError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        let status = match self.0 {
            StoreError::BadCredentials => StatusCode::UNAUTHORIZED,
            StoreError::Forbidden => StatusCode::FORBIDDEN,
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
            StoreError::Duplicate | StoreError::AccountExists => StatusCode::CONFLICT,
            StoreError::Inactive | StoreError::InsufficientBalance => StatusCode::BAD_REQUEST,
        };
        (status, self.0.to_string()).into_response()
    }
}

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/register", post(auth::register))
        .route("/api/admin/banks", get(admin::list_banks))
        .route("/api/admin/bank/add", post(admin::add_bank))
        .route("/api/admin/bank-managers", get(admin::list_managers))
        .route("/api/admin/bank-manager/register", post(admin::register_manager))
        .route("/api/admin/customers", get(admin::list_customers))
        .route("/api/admin/accounts", get(admin::list_accounts))
        .route("/api/admin/lock/{account_number}", put(admin::lock))
        .route("/api/admin/unlock/{account_number}", put(admin::unlock))
        .route("/api/customer/register", post(customer::register))
        .route("/api/customer/all", get(customer::list))
        .route("/api/customer/delete", delete(customer::remove))
        .route("/api/customer/account/{account_number}", get(customer::account))
        .route("/api/customer/transactions", get(customer::transactions))
        .route("/api/bank/account/exists", get(bank::exists))
        .route("/api/bank/account/status", get(bank::status))
        .route("/api/bank/account/customer-info", get(bank::customer_info))
        .route("/api/bank/account/add", post(bank::add_account))
        .route("/api/bank/account/detail", get(bank::detail))
        .route("/api/bank/account/transactions", get(bank::account_transactions))
        .route("/api/bank/account/deposit", post(bank::deposit))
        .route("/api/bank/account/withdraw", post(bank::withdraw))
        .route("/api/bank/transactions", get(bank::bank_transactions))
        .route("/api/transfer", post(transfer::transfer))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}
