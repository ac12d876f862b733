//! Core types and utilities

pub mod types;
pub mod error;
pub mod logging;
pub mod viewport;

pub use types::*;
pub use error::Error;
