#![forbid(unsafe_code)]

//! End-to-end conversion pipeline driving ingestion and encoding.

use std::path::PathBuf;

use serde::Serialize;

use crate::encode::encode;
use crate::error::Result;
use crate::ingest::{load_edges, load_vertices, Directedness, Progress};
use crate::table::VertexTable;

/// Configuration for one conversion run.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Path to the vertex list (`<name>.v`).
    pub vertex_path: PathBuf,
    /// Path to the edge list (`<name>.e`).
    pub edge_path: PathBuf,
    /// Path for the binary output (`<name>.boel`); must not exist yet.
    pub output_path: PathBuf,
    /// Advisory estimate of the number of vertices, used to pre-size the
    /// table.
    pub vertex_count_hint: usize,
    /// Whether edge lines are directed or symmetrized.
    pub directedness: Directedness,
}

/// Summary statistics from a completed conversion.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ConvertSummary {
    /// Distinct vertices declared and encoded.
    pub vertices: u64,
    /// Edge lines ingested from the edge file.
    pub edges: u64,
    /// Percentage of encoded vertices with no outgoing neighbors.
    pub isolated_pct: f64,
}

/// Runs the full pipeline: vertex pass, edge pass, encode pass.
///
/// The passes are strictly sequential and the table lives only for the
/// duration of the call; on any error the run aborts with no cleanup of a
/// partially written output file.
pub fn run_convert(cfg: &ConvertConfig, progress: &mut dyn Progress) -> Result<ConvertSummary> {
    let mut table = VertexTable::with_capacity(cfg.vertex_count_hint);
    load_vertices(&cfg.vertex_path, &mut table, progress)?;
    let edges = load_edges(&cfg.edge_path, &mut table, cfg.directedness, progress)?;
    let encoded = encode(table, &cfg.output_path)?;
    Ok(ConvertSummary {
        vertices: encoded.vertices,
        edges,
        isolated_pct: encoded.isolated_pct(),
    })
}
