#![deny(clippy::all)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Domain layer: turning raw triplet text into a rendered glyph grid.
//!
//! The pipeline is `tokenize` -> `parse_triplets` -> `GlyphGrid::from_triplets`
//! -> `GlyphGrid::render`. [`Fingerprint`] hashes the raw text for audit output.

mod error;
mod fingerprint;
mod grid;
mod parser;
mod tokenizer;
mod triplet;

pub use error::Axis;
pub use error::GridError;
pub use fingerprint::Fingerprint;
pub use grid::DEFAULT_FILLER;
pub use grid::GlyphGrid;
pub use grid::Rendered;
pub use parser::GROUP_SIZE;
pub use parser::parse_triplets;
pub use tokenizer::tokenize;
pub use triplet::Triplet;
pub use triplet::TripletList;
