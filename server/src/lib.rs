//! Development backend for the banking SPA: an in-memory store behind the
//! same REST surface the production service exposes.

pub mod routes;
pub mod state;
