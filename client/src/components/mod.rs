pub mod navbar;
pub mod transaction_table;
