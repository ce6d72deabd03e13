#![forbid(unsafe_code)]

//! Shared constants and error type for the Sigtuna XML Security object model.

pub mod algorithm;
pub mod error;
pub mod ns;

pub use error::{Error, Result};
