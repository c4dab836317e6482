//! Common utilities module
//!
//! This module contains the error type shared by every stage of the banner pipeline.

pub mod error;

pub use error::{BannerError, Result};
