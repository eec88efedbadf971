//! Customer DTOs (bank-manager-owned resources).

use serde::{Deserialize, Serialize};

use crate::account::AccountStatus;

/// A customer, as returned by `GET /api/customer/all` (one bank's customers)
/// or `GET /api/admin/customers` (all banks, with account linkage).
///
/// The backend emits the linked account number as either `accountNumber` or
/// `accountNo` depending on the endpoint; both land in `account_number`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub pincode: Option<String>,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default, alias = "accountNo")]
    pub account_number: Option<String>,
    #[serde(default)]
    pub status: Option<AccountStatus>,
}

/// `POST /api/customer/register` request body (sent by a bank manager).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterCustomerRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub gender: String,
    pub contact: String,
    pub age: u32,
    pub street: String,
    pub city: String,
    pub pincode: String,
}
