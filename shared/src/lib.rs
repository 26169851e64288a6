//! Shared types for the site server and its API clients
//!
//! - [`models`]: entity rows, DTOs and config blob types (the REST contract)
//! - [`util`]: timestamp helpers
//!
//! DB row types derive `sqlx::FromRow` behind the `db` feature so API
//! clients can depend on this crate without pulling in sqlx.

pub mod models;
pub mod request;
pub mod util;
