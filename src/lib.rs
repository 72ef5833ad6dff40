//! Google Cloud architecture recommendations from a free-text project description.
//!
//! A stateless HTTP façade over one external model call: validate the
//! description, template a prompt, call Gemini with bounded retry, and map
//! the outcome to an HTTP response.

pub mod api;
pub mod config;
pub mod gemini;
pub mod generator;
pub mod models;
