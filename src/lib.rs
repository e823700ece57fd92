//! Converts a graph given as two ASCII text files (a vertex list and an
//! edge list) into a single binary ordered edge list (`.boel`) file.
//!
//! The pipeline is strictly linear: [`ingest`] populates a [`table::VertexTable`]
//! from the text files, then [`encode`] serializes the table into fixed-layout
//! big-endian records. [`convert`] ties the passes together behind a single
//! configuration struct for callers such as the CLI binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod convert;
pub mod encode;
pub mod error;
pub mod ingest;
pub mod table;

pub use error::{ConvertError, Result};
