pub mod account;
pub mod statement;
pub mod transfer;
