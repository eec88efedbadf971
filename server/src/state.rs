//! Shared application state: the in-memory development store.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! wraps a single `RwLock` around all records, which is plenty for a dev
//! backend serving one browser. Balances live on the account record and
//! every money movement appends a ledger row carrying the post-transaction
//! balance; the client never derives balances itself.

use std::collections::HashMap;
use std::sync::Arc;

use models::{
    Account, AccountInfo, AccountStatus, AddAccountRequest, AddBankRequest, Bank, BankManager, BankSummary, Customer,
    CustomerAccountInfo, CustomerSummary, LoginResponse, RegisterAdminRequest, RegisterCustomerRequest,
    RegisterManagerRequest, Role, Transaction, TransactionKind,
};
use rand::Rng;
use rand::distr::Alphanumeric;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tokio::sync::RwLock;
use uuid::Uuid;

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

// =============================================================================
// ERRORS
// =============================================================================

/// Error from a store operation. The message text is what the browser
/// shows, so the inactive/insufficient phrasings are load-bearing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Invalid email or password")]
    BadCredentials,
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Email is already registered")]
    Duplicate,
    #[error("Customer already holds an account")]
    AccountExists,
    #[error("Account is inactive")]
    Inactive,
    #[error("Insufficient balance")]
    InsufficientBalance,
    #[error("Access denied")]
    Forbidden,
}

// =============================================================================
// RECORDS
// =============================================================================

#[derive(Debug, Clone)]
struct ManagerRecord {
    manager: BankManager,
    password: String,
}

#[derive(Debug, Clone)]
struct CustomerRecord {
    id: i64,
    name: String,
    email: String,
    password: String,
    gender: String,
    contact: String,
    age: u32,
    street: String,
    city: String,
    pincode: String,
    bank_id: i64,
}

#[derive(Debug, Clone)]
struct AccountRecord {
    account_number: String,
    ifsc_code: String,
    account_type: String,
    balance: f64,
    status: AccountStatus,
    customer_email: String,
    bank_id: i64,
    created_on: String,
}

/// Everything attached to a minted bearer token.
#[derive(Debug, Clone)]
pub struct SessionInfo {
    pub role: Role,
    pub email: String,
    pub account_number: Option<String>,
    pub bank_id: Option<i64>,
}

impl SessionInfo {
    /// Require the session to carry the given role.
    pub fn require(&self, role: Role) -> Result<(), StoreError> {
        if self.role == role { Ok(()) } else { Err(StoreError::Forbidden) }
    }
}

#[derive(Default)]
struct Store {
    admins: HashMap<String, String>,
    managers: Vec<ManagerRecord>,
    banks: Vec<Bank>,
    customers: Vec<CustomerRecord>,
    accounts: Vec<AccountRecord>,
    ledger: Vec<Transaction>,
    sessions: HashMap<String, SessionInfo>,
    next_id: i64,
}

impl Store {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn bank_name(&self, bank_id: i64) -> Option<String> {
        self.banks.iter().find(|b| b.id == Some(bank_id)).map(|b| b.bank_name.clone())
    }

    fn account_for_email(&self, email: &str) -> Option<&AccountRecord> {
        self.accounts.iter().find(|a| a.customer_email == email)
    }

    fn customer_view(&self, record: &CustomerRecord) -> Customer {
        let account = self.account_for_email(&record.email);
        Customer {
            id: Some(record.id),
            name: record.name.clone(),
            email: record.email.clone(),
            gender: Some(record.gender.clone()),
            contact: Some(record.contact.clone()),
            age: Some(record.age),
            street: Some(record.street.clone()),
            city: Some(record.city.clone()),
            pincode: Some(record.pincode.clone()),
            bank_name: self.bank_name(record.bank_id),
            account_number: account.map(|a| a.account_number.clone()),
            status: account.map(|a| a.status),
        }
    }

    fn account_view(&self, record: &AccountRecord) -> Account {
        let customer = self.customers.iter().find(|c| c.email == record.customer_email);
        let bank = self.banks.iter().find(|b| b.id == Some(record.bank_id));
        Account {
            account_number: record.account_number.clone(),
            ifsc_code: Some(record.ifsc_code.clone()),
            account_type: Some(record.account_type.clone()),
            balance: record.balance,
            status: record.status,
            created_on: Some(record.created_on.clone()),
            bank: bank.map(|b| BankSummary {
                bank_name: Some(b.bank_name.clone()),
                bank_code: Some(b.bank_code.clone()),
                bank_email: b.bank_email.clone(),
                website: b.website.clone(),
            }),
            customer: customer.map(|c| CustomerSummary {
                name: Some(c.name.clone()),
                contact: Some(c.contact.clone()),
                email: Some(c.email.clone()),
            }),
        }
    }

    /// Append a ledger row for the account owned by `email`, carrying the
    /// post-transaction balance. Transfer legs name their counterparty via
    /// the recipient fields; plain deposits and withdrawals leave them unset.
    fn record_movement(
        &mut self,
        email: &str,
        kind: TransactionKind,
        amount: f64,
        purpose: &str,
        recipient_account: Option<String>,
        recipient_bank: Option<String>,
    ) -> Transaction {
        let (account_number, balance, bank_id) = self
            .account_for_email(email)
            .map(|a| (a.account_number.clone(), a.balance, a.bank_id))
            .unwrap_or((String::new(), 0.0, 0));
        let customer_name = self.customers.iter().find(|c| c.email == email).map(|c| c.name.clone());
        let entry = Transaction {
            transaction_id: Some(Uuid::new_v4().to_string()),
            bank_name: self.bank_name(bank_id),
            customer_name,
            account_number: Some(account_number),
            kind: Some(kind),
            amount: Some(amount),
            balance: Some(balance),
            recipient_bank,
            recipient_account,
            purpose: Some(purpose.to_owned()),
            date: Some(now_rfc3339()),
            ..Transaction::default()
        };
        self.ledger.push(entry.clone());
        entry
    }
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_default()
}

fn generate_token() -> String {
    rand::rng().sample_iter(&Alphanumeric).take(32).map(char::from).collect()
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared handle over the store, cloned into every handler.
#[derive(Clone, Default)]
pub struct AppState {
    inner: Arc<RwLock<Store>>,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Auth
    // -------------------------------------------------------------------------

    pub async fn register_admin(&self, request: RegisterAdminRequest) -> Result<(), StoreError> {
        let mut store = self.inner.write().await;
        if store.admins.contains_key(&request.email) {
            return Err(StoreError::Duplicate);
        }
        store.admins.insert(request.email, request.password);
        Ok(())
    }

    /// Verify credentials for the given role and mint a bearer token.
    pub async fn login(&self, role: Role, email: &str, password: &str) -> Result<LoginResponse, StoreError> {
        let mut store = self.inner.write().await;
        let info = match role {
            Role::Admin => {
                let stored = store.admins.get(email).ok_or(StoreError::BadCredentials)?;
                if stored != password {
                    return Err(StoreError::BadCredentials);
                }
                SessionInfo { role, email: email.to_owned(), account_number: None, bank_id: None }
            }
            Role::Bank => {
                let manager = store
                    .managers
                    .iter()
                    .find(|m| m.manager.email == email && m.password == password)
                    .ok_or(StoreError::BadCredentials)?;
                let manager_id = manager.manager.id;
                let bank_id = store.banks.iter().find(|b| b.bank_manager_id == manager_id).and_then(|b| b.id);
                SessionInfo { role, email: email.to_owned(), account_number: None, bank_id }
            }
            Role::Customer => {
                let customer = store
                    .customers
                    .iter()
                    .find(|c| c.email == email && c.password == password)
                    .ok_or(StoreError::BadCredentials)?;
                let account_number = store.account_for_email(&customer.email).map(|a| a.account_number.clone());
                SessionInfo { role, email: email.to_owned(), account_number, bank_id: None }
            }
        };
        let token = generate_token();
        let response = LoginResponse {
            token: token.clone(),
            role,
            email: info.email.clone(),
            account_number: info.account_number.clone(),
            bank_id: info.bank_id,
        };
        store.sessions.insert(token, info);
        Ok(response)
    }

    pub async fn session(&self, token: &str) -> Option<SessionInfo> {
        self.inner.read().await.sessions.get(token).cloned()
    }

    // -------------------------------------------------------------------------
    // Admin resources
    // -------------------------------------------------------------------------

    pub async fn register_manager(&self, request: RegisterManagerRequest) -> Result<BankManager, StoreError> {
        let mut store = self.inner.write().await;
        if store.managers.iter().any(|m| m.manager.email == request.email) {
            return Err(StoreError::Duplicate);
        }
        let id = store.next_id();
        let manager = BankManager {
            id: Some(id),
            name: request.name,
            email: request.email,
            gender: Some(request.gender),
            contact_no: Some(request.contact_no),
            age: Some(request.age),
            street: Some(request.street),
            city: Some(request.city),
            pincode: Some(request.pincode),
            bank_name: None,
        };
        store.managers.push(ManagerRecord { manager: manager.clone(), password: request.password });
        Ok(manager)
    }

    pub async fn list_managers(&self) -> Vec<BankManager> {
        let store = self.inner.read().await;
        store
            .managers
            .iter()
            .map(|record| {
                let mut manager = record.manager.clone();
                manager.bank_name = store
                    .banks
                    .iter()
                    .find(|b| b.bank_manager_id == manager.id)
                    .map(|b| b.bank_name.clone());
                manager
            })
            .collect()
    }

    pub async fn add_bank(&self, request: AddBankRequest) -> Result<Bank, StoreError> {
        let mut store = self.inner.write().await;
        if !store.managers.iter().any(|m| m.manager.id == Some(request.bank_manager_id)) {
            return Err(StoreError::NotFound("Bank manager"));
        }
        if store.banks.iter().any(|b| b.bank_code == request.bank_code) {
            return Err(StoreError::Duplicate);
        }
        let id = store.next_id();
        let bank = Bank {
            id: Some(id),
            bank_name: request.bank_name,
            bank_code: request.bank_code,
            bank_address: Some(request.bank_address),
            bank_email: Some(request.bank_email),
            phone_number: Some(request.phone_number),
            website: Some(request.website),
            country: Some(request.country),
            currency: Some(request.currency),
            bank_manager_id: Some(request.bank_manager_id),
        };
        store.banks.push(bank.clone());
        Ok(bank)
    }

    pub async fn list_banks(&self) -> Vec<Bank> {
        self.inner.read().await.banks.clone()
    }

    pub async fn list_all_customers(&self) -> Vec<Customer> {
        let store = self.inner.read().await;
        store.customers.iter().map(|c| store.customer_view(c)).collect()
    }

    pub async fn list_all_accounts(&self) -> Vec<Account> {
        let store = self.inner.read().await;
        store.accounts.iter().map(|a| store.account_view(a)).collect()
    }

    pub async fn set_lock(&self, account_number: &str, lock: bool) -> Result<(), StoreError> {
        let mut store = self.inner.write().await;
        let account = store
            .accounts
            .iter_mut()
            .find(|a| a.account_number == account_number)
            .ok_or(StoreError::NotFound("Account"))?;
        account.status = if lock { AccountStatus::Inactive } else { AccountStatus::Active };
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Customers (bank-manager owned)
    // -------------------------------------------------------------------------

    pub async fn register_customer(&self, bank_id: i64, request: RegisterCustomerRequest) -> Result<(), StoreError> {
        let mut store = self.inner.write().await;
        if store.customers.iter().any(|c| c.email == request.email) {
            return Err(StoreError::Duplicate);
        }
        let id = store.next_id();
        store.customers.push(CustomerRecord {
            id,
            name: request.name,
            email: request.email,
            password: request.password,
            gender: request.gender,
            contact: request.contact,
            age: request.age,
            street: request.street,
            city: request.city,
            pincode: request.pincode,
            bank_id,
        });
        Ok(())
    }

    pub async fn list_bank_customers(&self, bank_id: i64) -> Vec<Customer> {
        let store = self.inner.read().await;
        store
            .customers
            .iter()
            .filter(|c| c.bank_id == bank_id)
            .map(|c| store.customer_view(c))
            .collect()
    }

    /// Remove a customer and the account attached to them.
    pub async fn delete_customer(&self, bank_id: i64, email: &str) -> Result<(), StoreError> {
        let mut store = self.inner.write().await;
        let before = store.customers.len();
        store.customers.retain(|c| !(c.email == email && c.bank_id == bank_id));
        if store.customers.len() == before {
            return Err(StoreError::NotFound("Customer"));
        }
        store.accounts.retain(|a| a.customer_email != email);
        Ok(())
    }

    pub async fn account_by_number(&self, account_number: &str) -> Result<Account, StoreError> {
        let store = self.inner.read().await;
        store
            .accounts
            .iter()
            .find(|a| a.account_number == account_number)
            .map(|a| store.account_view(a))
            .ok_or(StoreError::NotFound("Account"))
    }

    // -------------------------------------------------------------------------
    // Teller operations (bank role)
    // -------------------------------------------------------------------------

    pub async fn account_exists(&self, email: &str) -> bool {
        self.inner.read().await.account_for_email(email).is_some()
    }

    pub async fn account_status(&self, email: &str) -> Result<String, StoreError> {
        let store = self.inner.read().await;
        store
            .account_for_email(email)
            .map(|a| a.status.as_str().to_owned())
            .ok_or(StoreError::NotFound("Account"))
    }

    pub async fn customer_info(&self, email: &str) -> Result<CustomerAccountInfo, StoreError> {
        let store = self.inner.read().await;
        let customer = store.customers.iter().find(|c| c.email == email).ok_or(StoreError::NotFound("Customer"))?;
        let bank = store.banks.iter().find(|b| b.id == Some(customer.bank_id));
        Ok(CustomerAccountInfo {
            bank_name: bank.map(|b| b.bank_name.clone()),
            bank_code: bank.map(|b| b.bank_code.clone()),
            customer_name: Some(customer.name.clone()),
            customer_email: Some(customer.email.clone()),
            customer_contact: Some(customer.contact.clone()),
            status: store.account_for_email(email).map(|a| a.status),
        })
    }

    pub async fn add_account(&self, request: AddAccountRequest) -> Result<(), StoreError> {
        let mut store = self.inner.write().await;
        let bank_id = store
            .customers
            .iter()
            .find(|c| c.email == request.customer_email)
            .map(|c| c.bank_id)
            .ok_or(StoreError::NotFound("Customer"))?;
        if store.account_for_email(&request.customer_email).is_some() {
            return Err(StoreError::AccountExists);
        }
        if store.accounts.iter().any(|a| a.account_number == request.account_number) {
            return Err(StoreError::Duplicate);
        }
        store.accounts.push(AccountRecord {
            account_number: request.account_number,
            ifsc_code: request.ifsc_code,
            account_type: request.account_type,
            balance: 0.0,
            status: AccountStatus::Active,
            customer_email: request.customer_email,
            bank_id,
            created_on: now_rfc3339(),
        });
        Ok(())
    }

    pub async fn account_detail(&self, email: &str) -> Result<AccountInfo, StoreError> {
        let store = self.inner.read().await;
        let account = store.account_for_email(email).ok_or(StoreError::NotFound("Account"))?;
        let customer = store.customers.iter().find(|c| c.email == email);
        Ok(AccountInfo {
            bank_name: store.bank_name(account.bank_id),
            account_no: account.account_number.clone(),
            ifsc: Some(account.ifsc_code.clone()),
            customer_name: customer.map(|c| c.name.clone()),
            contact: customer.map(|c| c.contact.clone()),
            created_on: Some(account.created_on.clone()),
            balance: account.balance,
            status: account.status,
        })
    }

    pub async fn deposit(&self, email: &str, amount: f64) -> Result<(), StoreError> {
        let mut store = self.inner.write().await;
        let account = store.account_for_email(email).ok_or(StoreError::NotFound("Account"))?;
        if !account.status.is_active() {
            return Err(StoreError::Inactive);
        }
        let account_number = account.account_number.clone();
        if let Some(record) = store.accounts.iter_mut().find(|a| a.account_number == account_number) {
            record.balance += amount;
        }
        store.record_movement(email, TransactionKind::Deposit, amount, "Cash deposit", None, None);
        Ok(())
    }

    pub async fn withdraw(&self, email: &str, amount: f64) -> Result<(), StoreError> {
        let mut store = self.inner.write().await;
        let account = store.account_for_email(email).ok_or(StoreError::NotFound("Account"))?;
        if !account.status.is_active() {
            return Err(StoreError::Inactive);
        }
        if account.balance < amount {
            return Err(StoreError::InsufficientBalance);
        }
        let account_number = account.account_number.clone();
        if let Some(record) = store.accounts.iter_mut().find(|a| a.account_number == account_number) {
            record.balance -= amount;
        }
        store.record_movement(email, TransactionKind::Withdraw, amount, "Cash withdrawal", None, None);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Transfer
    // -------------------------------------------------------------------------

    /// Move money between two accounts, appending a ledger row on each
    /// side. The debited leg is a TRANSFER naming the receiver as its
    /// recipient; the credited leg is a DEPOSIT naming the sender, so a
    /// receiver's statement reads as incoming money, not an outgoing
    /// transfer. Returns a confirmation line with the transfer id.
    pub async fn transfer(
        &self,
        sender_number: &str,
        receiver_number: &str,
        amount: f64,
        purpose: &str,
    ) -> Result<String, StoreError> {
        let mut store = self.inner.write().await;
        let sender = store
            .accounts
            .iter()
            .find(|a| a.account_number == sender_number)
            .ok_or(StoreError::NotFound("Sender account"))?;
        if !sender.status.is_active() {
            return Err(StoreError::Inactive);
        }
        if sender.balance < amount {
            return Err(StoreError::InsufficientBalance);
        }
        let sender_email = sender.customer_email.clone();
        let sender_bank = store.bank_name(sender.bank_id);
        let receiver = store
            .accounts
            .iter()
            .find(|a| a.account_number == receiver_number)
            .ok_or(StoreError::NotFound("Receiver account"))?;
        if !receiver.status.is_active() {
            return Err(StoreError::Inactive);
        }
        let receiver_email = receiver.customer_email.clone();
        let receiver_bank = store.bank_name(receiver.bank_id);

        for (number, delta) in [(sender_number, -amount), (receiver_number, amount)] {
            if let Some(record) = store.accounts.iter_mut().find(|a| a.account_number == number) {
                record.balance += delta;
            }
        }
        let out = store.record_movement(
            &sender_email,
            TransactionKind::Transfer,
            amount,
            purpose,
            Some(receiver_number.to_owned()),
            receiver_bank,
        );
        store.record_movement(
            &receiver_email,
            TransactionKind::Deposit,
            amount,
            &format!("Received from {sender_number}"),
            Some(sender_number.to_owned()),
            sender_bank,
        );
        let id = out.transaction_id.unwrap_or_default();
        Ok(format!("Transfer of {amount:.2} to {receiver_number} completed. Reference: {id}"))
    }

    // -------------------------------------------------------------------------
    // Ledger queries
    // -------------------------------------------------------------------------

    pub async fn transactions_all(&self) -> Vec<Transaction> {
        self.inner.read().await.ledger.clone()
    }

    pub async fn transactions_for_account(&self, account_number: &str) -> Vec<Transaction> {
        self.inner
            .read()
            .await
            .ledger
            .iter()
            .filter(|t| t.account_number.as_deref() == Some(account_number))
            .cloned()
            .collect()
    }

    pub async fn transactions_for_email(&self, email: &str) -> Vec<Transaction> {
        let store = self.inner.read().await;
        let Some(number) = store.account_for_email(email).map(|a| a.account_number.clone()) else {
            return Vec::new();
        };
        store
            .ledger
            .iter()
            .filter(|t| t.account_number.as_deref() == Some(number.as_str()))
            .cloned()
            .collect()
    }

    pub async fn transactions_for_bank(&self, bank_id: i64) -> Vec<Transaction> {
        let store = self.inner.read().await;
        let numbers: Vec<String> = store
            .accounts
            .iter()
            .filter(|a| a.bank_id == bank_id)
            .map(|a| a.account_number.clone())
            .collect();
        store
            .ledger
            .iter()
            .filter(|t| t.account_number.as_ref().is_some_and(|n| numbers.contains(n)))
            .cloned()
            .collect()
    }
}
