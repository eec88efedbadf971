//! Typed REST helpers for the banking backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side: stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every wrapper that needs auth resolves the bearer token BEFORE building
//! a request; a missing/empty token short-circuits to
//! [`ApiError::NoSession`] and no network call is dispatched. Non-2xx
//! responses map to the structured [`ApiError`] taxonomy with the body text
//! carried verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use models::{
    Account, AccountInfo, AddAccountRequest, AddBankRequest, AmountRequest, ApiError, Bank, BankManager, Customer,
    CustomerAccountInfo, LoginRequest, LoginResponse, RegisterAdminRequest, RegisterCustomerRequest,
    RegisterManagerRequest, Session, Transaction, TransferRequest,
};
#[cfg(feature = "hydrate")]
use serde::Serialize;
use serde::de::DeserializeOwned;

// =============================================================================
// PATH BUILDERS
// =============================================================================

/// Percent-encode a query value (RFC 3986 unreserved set kept literal).
fn encode_query(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => out.push(byte as char),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

fn transactions_path(account_number: Option<&str>) -> String {
    match account_number {
        Some(number) if !number.trim().is_empty() => {
            format!("/api/customer/transactions?accountNumber={}", encode_query(number.trim()))
        }
        _ => "/api/customer/transactions".to_owned(),
    }
}

fn account_path(account_number: &str) -> String {
    format!("/api/customer/account/{}", encode_query(account_number))
}

fn lock_path(account_number: &str, lock: bool) -> String {
    let action = if lock { "lock" } else { "unlock" };
    format!("/api/admin/{action}/{}", encode_query(account_number))
}

fn email_query_path(base: &str, email: &str) -> String {
    format!("{base}?email={}", encode_query(email))
}

fn bank_transactions_path(bank_id: i64) -> String {
    format!("/api/bank/transactions?bankId={bank_id}")
}

/// Resolve the bearer token or fail without touching the network.
fn bearer(session: &Session) -> Result<String, ApiError> {
    session.bearer().map(str::to_owned).ok_or(ApiError::NoSession)
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[cfg(feature = "hydrate")]
fn apply_auth(builder: gloo_net::http::RequestBuilder, token: Option<&str>) -> gloo_net::http::RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn read_response<T: DeserializeOwned>(response: gloo_net::http::Response) -> Result<T, ApiError> {
    let status = response.status();
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_status(status, body));
    }
    response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn read_text_response(response: gloo_net::http::Response) -> Result<String, ApiError> {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    if !response.ok() {
        return Err(ApiError::from_status(status, body));
    }
    Ok(body)
}

async fn get_json<T: DeserializeOwned>(path: &str, token: Option<&str>) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = apply_auth(gloo_net::http::Request::get(path), token)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_response(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token);
        Err(ApiError::Unavailable)
    }
}

async fn get_text(path: &str, token: Option<&str>) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = apply_auth(gloo_net::http::Request::get(path), token)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_text_response(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token);
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn post_json_request<B: Serialize>(
    path: &str,
    token: Option<&str>,
    body: &B,
) -> Result<gloo_net::http::Response, ApiError> {
    apply_auth(gloo_net::http::Request::post(path), token)
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

/// POST a JSON body and decode a JSON response.
async fn post_json<B: serde::Serialize, T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = post_json_request(path, token, body).await?;
        read_response(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token, body);
        Err(ApiError::Unavailable)
    }
}

/// POST a JSON body; treat any 2xx as success, keeping the body as text.
async fn post_for_text<B: serde::Serialize>(path: &str, token: Option<&str>, body: &B) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = post_json_request(path, token, body).await?;
        read_text_response(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token, body);
        Err(ApiError::Unavailable)
    }
}

async fn put_empty(path: &str, token: Option<&str>) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = apply_auth(gloo_net::http::Request::put(path), token)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_text_response(response).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token);
        Err(ApiError::Unavailable)
    }
}

async fn delete_empty(path: &str, token: Option<&str>) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = apply_auth(gloo_net::http::Request::delete(path), token)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_text_response(response).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token);
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// AUTH
// =============================================================================

/// `POST /api/auth/login` — obtain a session token.
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    post_json("/api/auth/login", None, request).await
}

/// `POST /api/auth/register` — open admin signup.
pub async fn register_admin(request: &RegisterAdminRequest) -> Result<(), ApiError> {
    post_for_text("/api/auth/register", None, request).await.map(|_| ())
}

// =============================================================================
// ADMIN RESOURCES
// =============================================================================

/// `GET /api/admin/banks` — list every registered bank.
pub async fn fetch_banks(session: &Session) -> Result<Vec<Bank>, ApiError> {
    let token = bearer(session)?;
    get_json("/api/admin/banks", Some(&token)).await
}

/// `POST /api/admin/bank/add` — register a bank under a manager.
pub async fn add_bank(session: &Session, request: &AddBankRequest) -> Result<(), ApiError> {
    let token = bearer(session)?;
    post_for_text("/api/admin/bank/add", Some(&token), request).await.map(|_| ())
}

/// `GET /api/admin/bank-managers` — list bank managers.
pub async fn fetch_bank_managers(session: &Session) -> Result<Vec<BankManager>, ApiError> {
    let token = bearer(session)?;
    get_json("/api/admin/bank-managers", Some(&token)).await
}

/// `POST /api/admin/bank-manager/register` — create a bank manager.
pub async fn register_bank_manager(session: &Session, request: &RegisterManagerRequest) -> Result<(), ApiError> {
    let token = bearer(session)?;
    post_for_text("/api/admin/bank-manager/register", Some(&token), request).await.map(|_| ())
}

/// `GET /api/admin/customers` — every customer across all banks.
pub async fn fetch_all_customers(session: &Session) -> Result<Vec<Customer>, ApiError> {
    let token = bearer(session)?;
    get_json("/api/admin/customers", Some(&token)).await
}

/// `GET /api/admin/accounts` — every account across all banks.
pub async fn fetch_all_accounts(session: &Session) -> Result<Vec<Account>, ApiError> {
    let token = bearer(session)?;
    get_json("/api/admin/accounts", Some(&token)).await
}

/// `PUT /api/admin/lock/{accountNumber}` or `/unlock/{accountNumber}`.
pub async fn set_account_lock(session: &Session, account_number: &str, lock: bool) -> Result<(), ApiError> {
    let token = bearer(session)?;
    put_empty(&lock_path(account_number, lock), Some(&token)).await
}

// =============================================================================
// CUSTOMER RESOURCES (bank-manager and customer roles)
// =============================================================================

/// `POST /api/customer/register` — bank manager creates a customer.
pub async fn register_customer(session: &Session, request: &RegisterCustomerRequest) -> Result<(), ApiError> {
    let token = bearer(session)?;
    post_for_text("/api/customer/register", Some(&token), request).await.map(|_| ())
}

/// `GET /api/customer/all` — the calling bank's customers.
pub async fn fetch_bank_customers(session: &Session) -> Result<Vec<Customer>, ApiError> {
    let token = bearer(session)?;
    get_json("/api/customer/all", Some(&token)).await
}

/// `DELETE /api/customer/delete?email=` — remove a customer.
pub async fn delete_customer(session: &Session, email: &str) -> Result<(), ApiError> {
    let token = bearer(session)?;
    delete_empty(&email_query_path("/api/customer/delete", email), Some(&token)).await
}

/// `GET /api/customer/account/{accountNumber}` — one account's detail.
pub async fn fetch_account(session: &Session, account_number: &str) -> Result<Account, ApiError> {
    let token = bearer(session)?;
    get_json(&account_path(account_number), Some(&token)).await
}

/// `GET /api/customer/transactions[?accountNumber=]` — ledger rows, either
/// for one account or (admin) for every account.
pub async fn fetch_transactions(session: &Session, account_number: Option<&str>) -> Result<Vec<Transaction>, ApiError> {
    let token = bearer(session)?;
    get_json(&transactions_path(account_number), Some(&token)).await
}

// =============================================================================
// ACCOUNT PROVISIONING AND TELLER OPERATIONS (BANK role)
// =============================================================================

/// `GET /api/bank/account/exists?email=`.
pub async fn account_exists(session: &Session, email: &str) -> Result<bool, ApiError> {
    let token = bearer(session)?;
    get_json(&email_query_path("/api/bank/account/exists", email), Some(&token)).await
}

/// `GET /api/bank/account/status?email=` — plain-text ACTIVE/INACTIVE.
pub async fn account_status(session: &Session, email: &str) -> Result<String, ApiError> {
    let token = bearer(session)?;
    get_text(&email_query_path("/api/bank/account/status", email), Some(&token)).await
}

/// `GET /api/bank/account/customer-info?email=`.
pub async fn fetch_customer_info(session: &Session, email: &str) -> Result<CustomerAccountInfo, ApiError> {
    let token = bearer(session)?;
    get_json(&email_query_path("/api/bank/account/customer-info", email), Some(&token)).await
}

/// `POST /api/bank/account/add` — provision an account for a customer.
pub async fn add_account(session: &Session, request: &AddAccountRequest) -> Result<(), ApiError> {
    let token = bearer(session)?;
    post_for_text("/api/bank/account/add", Some(&token), request).await.map(|_| ())
}

/// `GET /api/bank/account/detail?email=` — flattened teller view.
pub async fn fetch_account_detail(session: &Session, email: &str) -> Result<AccountInfo, ApiError> {
    let token = bearer(session)?;
    get_json(&email_query_path("/api/bank/account/detail", email), Some(&token)).await
}

/// `GET /api/bank/account/transactions?email=`.
pub async fn fetch_account_transactions(session: &Session, email: &str) -> Result<Vec<Transaction>, ApiError> {
    let token = bearer(session)?;
    get_json(&email_query_path("/api/bank/account/transactions", email), Some(&token)).await
}

/// `POST /api/bank/account/deposit`.
pub async fn deposit(session: &Session, request: &AmountRequest) -> Result<(), ApiError> {
    let token = bearer(session)?;
    post_for_text("/api/bank/account/deposit", Some(&token), request).await.map(|_| ())
}

/// `POST /api/bank/account/withdraw`.
pub async fn withdraw(session: &Session, request: &AmountRequest) -> Result<(), ApiError> {
    let token = bearer(session)?;
    post_for_text("/api/bank/account/withdraw", Some(&token), request).await.map(|_| ())
}

/// `GET /api/bank/transactions?bankId=` — one bank's full ledger.
pub async fn fetch_bank_transactions(session: &Session, bank_id: i64) -> Result<Vec<Transaction>, ApiError> {
    let token = bearer(session)?;
    get_json(&bank_transactions_path(bank_id), Some(&token)).await
}

// =============================================================================
// TRANSFER
// =============================================================================

/// `POST /api/transfer` — inter-account transfer.
///
/// Authenticated like every other mutation; there is no anonymous
/// transfer path.
pub async fn transfer(session: &Session, request: &TransferRequest) -> Result<String, ApiError> {
    let token = bearer(session)?;
    post_for_text("/api/transfer", Some(&token), request).await
}
