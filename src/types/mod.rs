//! Common types used across the Bitget client library.

pub mod common;
pub mod serde_helpers;

pub use common::*;
