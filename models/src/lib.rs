//! Shared data model for the webbank client/server boundary.
//!
//! This crate owns every JSON shape exchanged with the banking backend.
//! The backend is the source of truth for all balances and ledger state;
//! these types only mirror what it sends. Response shapes are normalized
//! here, once, at the boundary, so pages never do per-field fallback lookups.

pub mod account;
pub mod bank;
pub mod customer;
pub mod error;
pub mod session;
pub mod transaction;

pub use account::{Account, AccountInfo, AccountStatus, AddAccountRequest, AmountRequest, BankSummary, CustomerAccountInfo, CustomerSummary};
pub use bank::{AddBankRequest, Bank, BankManager, RegisterManagerRequest};
pub use customer::{Customer, RegisterCustomerRequest};
pub use error::ApiError;
pub use session::{LoginRequest, LoginResponse, RegisterAdminRequest, Role, Session};
pub use transaction::{Transaction, TransactionKind, TransferRequest, parse_timestamp};
