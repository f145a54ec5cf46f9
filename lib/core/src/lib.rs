//! Core types and utilities shared by the beacon crates.
//!
//! This crate provides the `Result` alias used by fallible operations and
//! strongly-typed identifiers.

pub mod error;
pub mod id;

pub use error::Result;
pub use id::{EventId, ParseIdError};
