#![forbid(unsafe_code)]

//! Text ingestion: turns the `.v` and `.e` files into vertex-table mutations.
//!
//! The two passes are strictly ordered. The vertex pass declares every
//! vertex with an empty neighbor list; only then does the edge pass append
//! neighbors, so an edge naming an undeclared vertex is always a hard
//! failure rather than an implicit insert.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::info;

use crate::error::{ConvertError, Result};
use crate::table::VertexTable;

/// Number of input lines between two progress callbacks.
pub const PROGRESS_INTERVAL: u64 = 1_000_000;

/// Whether each edge line contributes one or two directed relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directedness {
    /// Each line `a b` appends `b` to `a`'s neighbors only.
    Directed,
    /// Each line `a b` appends `b` to `a`'s neighbors and `a` to `b`'s.
    Undirected,
}

/// Side-channel observer for ingestion progress.
///
/// Invoked at a fixed line cadence purely for operator visibility; it must
/// never influence the ingested data. Pass `&mut ()` to disable reporting.
pub trait Progress {
    /// Called every [`PROGRESS_INTERVAL`] lines with the running line total
    /// of the current pass.
    fn lines_read(&mut self, lines: u64);
}

impl Progress for () {
    fn lines_read(&mut self, _lines: u64) {}
}

/// Runs the vertex-file pass: declares every vertex listed in `path`.
///
/// Each non-empty line's first whitespace-delimited token is parsed as a
/// 64-bit vertex identifier; trailing tokens (declared "properties") are
/// ignored. Repeated identifiers are no-ops. Returns the number of lines
/// consumed.
pub fn load_vertices(
    path: &Path,
    table: &mut VertexTable,
    progress: &mut dyn Progress,
) -> Result<u64> {
    let reader = open_input(path)?;
    let mut lines = 0u64;
    for line in reader.lines() {
        let line = line?;
        lines += 1;
        let Some(token) = line.split_whitespace().next() else {
            continue;
        };
        let id = parse_id(token, path, lines)?;
        table.ensure_vertex(id);
        if lines % PROGRESS_INTERVAL == 0 {
            progress.lines_read(lines);
        }
    }
    info!(path = %path.display(), lines, vertices = table.len(), "vertex pass complete");
    Ok(lines)
}

/// Runs the edge-file pass: appends one neighbor per directed relation.
///
/// The first two whitespace-delimited tokens of each non-empty line are
/// parsed as source and target identifiers; trailing tokens are ignored.
/// Under [`Directedness::Undirected`] the symmetric relation
/// `target -> source` is recorded as well, so the target vertex must also
/// have been declared. Returns the number of edge lines ingested.
pub fn load_edges(
    path: &Path,
    table: &mut VertexTable,
    directedness: Directedness,
    progress: &mut dyn Progress,
) -> Result<u64> {
    let reader = open_input(path)?;
    let mut lines = 0u64;
    let mut edges = 0u64;
    for line in reader.lines() {
        let line = line?;
        lines += 1;
        let mut fields = line.split_whitespace();
        let Some(first) = fields.next() else {
            continue;
        };
        let source = parse_id(first, path, lines)?;
        let target = match fields.next() {
            Some(token) => parse_id(token, path, lines)?,
            None => {
                return Err(ConvertError::MalformedLine {
                    path: path.to_path_buf(),
                    line: lines,
                    reason: "expected two integer fields".into(),
                })
            }
        };
        table.append_neighbor(source, target)?;
        if directedness == Directedness::Undirected {
            table.append_neighbor(target, source)?;
        }
        edges += 1;
        if lines % PROGRESS_INTERVAL == 0 {
            progress.lines_read(lines);
        }
    }
    info!(path = %path.display(), lines, edges, "edge pass complete");
    Ok(edges)
}

fn open_input(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|source| ConvertError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

fn parse_id(token: &str, path: &Path, line: u64) -> Result<i64> {
    token.parse::<i64>().map_err(|err| ConvertError::MalformedLine {
        path: path.to_path_buf(),
        line,
        reason: format!("invalid vertex id {token:?}: {err}"),
    })
}
