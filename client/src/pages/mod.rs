pub mod admin;
pub mod admin_register;
pub mod bank;
pub mod customer;
pub mod home;
pub mod login;
