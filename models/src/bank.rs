//! Bank and bank-manager DTOs (admin-owned resources).

use serde::{Deserialize, Serialize};

/// A registered bank, as returned by `GET /api/admin/banks`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bank {
    #[serde(default)]
    pub id: Option<i64>,
    pub bank_name: String,
    pub bank_code: String,
    #[serde(default)]
    pub bank_address: Option<String>,
    #[serde(default)]
    pub bank_email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub bank_manager_id: Option<i64>,
}

/// `POST /api/admin/bank/add` request body. All fields required by the form.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddBankRequest {
    pub bank_name: String,
    pub bank_code: String,
    pub website: String,
    pub bank_address: String,
    pub bank_email: String,
    pub phone_number: String,
    pub country: String,
    pub currency: String,
    pub bank_manager_id: i64,
}

/// A bank manager, as returned by `GET /api/admin/bank-managers`.
/// Authenticates with role BANK.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankManager {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub contact_no: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub pincode: Option<String>,
    /// Name of the bank this manager runs, once one is assigned.
    #[serde(default)]
    pub bank_name: Option<String>,
}

/// `POST /api/admin/bank-manager/register` request body.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterManagerRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub gender: String,
    pub contact_no: String,
    pub age: u32,
    pub street: String,
    pub city: String,
    pub pincode: String,
}
