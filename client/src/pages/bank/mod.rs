pub mod account_add;
pub mod account_detail;
pub mod customer_register;
pub mod customers;
pub mod transactions;
