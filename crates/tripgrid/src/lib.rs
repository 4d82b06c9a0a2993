#![deny(clippy::all)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Verify a triplet file, fingerprint it, and render it onto a text grid.

mod adapters;
mod app;
mod infra;
mod usecases;

#[cfg(test)]
mod test_support;

pub use app::Application;
pub use usecases::RenderConfig;
pub use usecases::WriteMode;
