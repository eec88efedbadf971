//! Shared client-side state: the session context and the fetch lifecycle.

pub mod remote;
pub mod session;
