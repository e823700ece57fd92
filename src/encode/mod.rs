#![forbid(unsafe_code)]

//! Binary encoder for the ordered edge list output format.
//!
//! Each vertex record is laid out as `vertex_id: i64` followed by
//! `neighbor_count: i32` and `neighbor_count` further `i64` neighbor
//! identifiers, all big-endian two's complement. There is no file header,
//! no record count prefix, and no terminator: the file ends where the last
//! neighbor list ends, so readers either know the vertex count out-of-band
//! or scan to end-of-file.

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::{ConvertError, Result};
use crate::table::VertexTable;

/// Diagnostic counters produced by the encoding pass.
///
/// Reported for operator visibility only; none of this is part of the
/// binary file.
#[derive(Debug, Clone, Copy, Default)]
pub struct EncodeSummary {
    /// Number of vertex records written.
    pub vertices: u64,
    /// Number of vertices written with an empty neighbor list.
    pub isolated: u64,
}

impl EncodeSummary {
    /// Percentage of written vertices whose neighbor list is empty.
    pub fn isolated_pct(&self) -> f64 {
        if self.vertices == 0 {
            0.0
        } else {
            self.isolated as f64 * 100.0 / self.vertices as f64
        }
    }
}

/// Serializes the table into a new file at `path` in a single forward pass.
///
/// Fails with [`ConvertError::OutputExists`] if `path` is already occupied;
/// an existing file is never truncated. A write failure mid-pass is fatal
/// and leaves the partially written file on disk (no atomic rename, no
/// cleanup). Record order follows the table's traversal order, which is
/// unspecified.
pub fn encode(table: VertexTable, path: &Path) -> Result<EncodeSummary> {
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|err| {
            if err.kind() == io::ErrorKind::AlreadyExists {
                ConvertError::OutputExists(path.to_path_buf())
            } else {
                ConvertError::Io(err)
            }
        })?;
    let mut writer = BufWriter::new(file);

    let mut summary = EncodeSummary::default();
    for (vertex, neighbors) in table.into_records() {
        let count =
            i32::try_from(neighbors.len()).map_err(|_| ConvertError::TooManyNeighbors {
                vertex,
                count: neighbors.len(),
            })?;
        writer.write_all(&vertex.to_be_bytes())?;
        writer.write_all(&count.to_be_bytes())?;
        for neighbor in &neighbors {
            writer.write_all(&neighbor.to_be_bytes())?;
        }
        summary.vertices += 1;
        if neighbors.is_empty() {
            summary.isolated += 1;
        }
    }
    writer.flush()?;

    info!(
        path = %path.display(),
        vertices = summary.vertices,
        isolated_pct = summary.isolated_pct(),
        "encode pass complete"
    );
    Ok(summary)
}
