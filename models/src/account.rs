//! Account DTOs: the customer-facing detail view, the bank-manager
//! drill-down view, and the provisioning request/response shapes.

use serde::{Deserialize, Serialize};

/// Whether an account may move money. Toggled by admin lock/unlock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    Active,
    Inactive,
}

impl AccountStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
        }
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

/// Bank fields nested inside an account detail response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankSummary {
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub bank_code: Option<String>,
    #[serde(default)]
    pub bank_email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

/// Customer fields nested inside an account detail response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSummary {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// An account as returned by `GET /api/customer/account/{accountNumber}`
/// and listed by `GET /api/admin/accounts`.
///
/// `balance` is always the server-computed figure; the client displays it
/// and never derives it from transactions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(alias = "accountNo")]
    pub account_number: String,
    #[serde(default, alias = "ifsc")]
    pub ifsc_code: Option<String>,
    #[serde(default)]
    pub account_type: Option<String>,
    #[serde(default)]
    pub balance: f64,
    pub status: AccountStatus,
    #[serde(default)]
    pub created_on: Option<String>,
    #[serde(default)]
    pub bank: Option<BankSummary>,
    #[serde(default)]
    pub customer: Option<CustomerSummary>,
}

/// Flattened account view for the bank manager's deposit/withdraw screen,
/// from `GET /api/bank/account/detail?email=`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(alias = "accountNumber")]
    pub account_no: String,
    #[serde(default, alias = "ifscCode")]
    pub ifsc: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub created_on: Option<String>,
    #[serde(default)]
    pub balance: f64,
    pub status: AccountStatus,
}

/// Customer/bank info shown while provisioning an account, from
/// `GET /api/bank/account/customer-info?email=`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerAccountInfo {
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub bank_code: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub customer_contact: Option<String>,
    #[serde(default)]
    pub status: Option<AccountStatus>,
}

/// `POST /api/bank/account/add` request body.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddAccountRequest {
    pub customer_email: String,
    pub account_number: String,
    pub ifsc_code: String,
    pub account_type: String,
}

/// `POST /api/bank/account/deposit` and `/withdraw` request body.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AmountRequest {
    pub email: String,
    pub amount: f64,
}
