#![deny(clippy::all)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Shared utilities used across the tripgrid crates.

mod color;
pub mod error_codes;
pub mod telemetry;

pub use color::Colors;
pub use color::init as color_init;
pub use error_codes::ErrorCategory;
