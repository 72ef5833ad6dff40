//! Request-scoped domain types.
//!
//! Nothing here outlives a single request:
//!
//! - [`ProjectDescription`]: validated, trimmed free-text input (10-5000 characters).
//! - [`GenerateResponse`]: JSON body returned by `POST /generate`.
//! - [`HealthResponse`]: JSON body returned by `GET /healthz`.

mod description;
mod response;

pub use description::*;
pub use response::*;
