//! Session and authentication DTOs.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// User role carried by the session token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// System administrator: registers banks and bank managers.
    Admin,
    /// Bank manager: manages a bank's customers and accounts.
    Bank,
    /// Account holder: views statements and transfers money.
    Customer,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Bank => "BANK",
            Self::Customer => "CUSTOMER",
        }
    }

    /// Parse a role string as the backend emits it.
    #[must_use]
    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Some(Self::Admin),
            "BANK" => Some(Self::Bank),
            "CUSTOMER" => Some(Self::Customer),
            _ => None,
        }
    }
}

/// `POST /api/auth/login` request body.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub role: Role,
    pub email: String,
    pub password: String,
}

/// `POST /api/auth/login` response.
///
/// `account_number` is set for CUSTOMER logins, `bank_id` for BANK logins.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub role: Role,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_id: Option<i64>,
}

/// `POST /api/auth/register` request body (open admin signup).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterAdminRequest {
    pub email: String,
    pub password: String,
}

/// The client-side session: everything persisted across page views.
///
/// Held in browser localStorage between logins; the `client` crate owns the
/// single read/write boundary over that storage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    pub role: Role,
    pub email: String,
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default)]
    pub bank_id: Option<i64>,
    #[serde(default)]
    pub customer_name: Option<String>,
}

impl Session {
    /// Build a session from a successful login response.
    #[must_use]
    pub fn from_login(response: LoginResponse) -> Self {
        Self {
            token: response.token,
            role: response.role,
            email: response.email,
            account_number: response.account_number,
            bank_id: response.bank_id,
            customer_name: None,
        }
    }

    /// The bearer token, if one is present and non-empty.
    ///
    /// Pages must gate on this before dispatching any authenticated request
    /// rather than sending an empty `Authorization` header.
    #[must_use]
    pub fn bearer(&self) -> Option<&str> {
        let token = self.token.trim();
        if token.is_empty() { None } else { Some(token) }
    }
}
