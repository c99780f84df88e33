//! HTTP access to the clinic backend.
//!
//! `api` issues the dashboard requests and decodes their bodies;
//! `config` resolves which backend to talk to.

pub mod api;
pub mod config;

pub use api::{decode_response, ApiClient};
