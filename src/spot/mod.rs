//! Bitget spot API clients.
//!
//! This module provides:
//! - [`rest`] - REST API client for signed HTTP requests

pub mod rest;

pub use rest::SpotRestClient;
