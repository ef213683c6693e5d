//! # airlens-airtable
//!
//! Airtable backend for `airlens-query`: lists bases and table schemas through the
//! metadata API and reads records through the offset-paginated records API.

mod client;
pub mod config;
mod models;

pub use client::AirtableClient;
pub use config::{AirtableConfig, AIRTABLE_API_BASE};
