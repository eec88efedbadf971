pub mod accounts;
pub mod add_bank;
pub mod banks;
pub mod customers;
pub mod manager_register;
pub mod managers;
pub mod transactions;
