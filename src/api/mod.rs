//! Launch-data API client and JSON ingestion.
//!
//! This module provides the interface for fetching the launch dataset from
//! the remote endpoint.

mod client;
mod types;

pub mod error;

pub use client::LaunchClient;
pub use error::ApiError;
pub use types::{record_from_json, records_from_json};
