#![forbid(unsafe_code)]

//! In-memory adjacency table keyed by vertex identifier.

use rustc_hash::FxHashMap;

use crate::error::{ConvertError, Result};

/// Mapping from vertex identifier to its ordered outgoing-neighbor list.
///
/// The table is populated monotonically (no removals, no truncation) and
/// consumed exactly once via [`VertexTable::into_records`]. Iteration order
/// is the backing map's native order and is not stable across runs; the
/// binary format carries no index, so readers must not rely on it.
#[derive(Debug, Default)]
pub struct VertexTable {
    adjacency: FxHashMap<i64, Vec<i64>>,
}

impl VertexTable {
    /// Creates a table pre-sized for roughly `expected_vertices` entries.
    ///
    /// The hint is advisory: it bounds incremental rehashing cost during
    /// population but does not cap the table.
    pub fn with_capacity(expected_vertices: usize) -> Self {
        Self {
            adjacency: FxHashMap::with_capacity_and_hasher(
                expected_vertices,
                Default::default(),
            ),
        }
    }

    /// Inserts `id` with an empty neighbor list if it is not already present.
    ///
    /// Idempotent: re-declaring a vertex is a no-op and never clears
    /// neighbors appended earlier.
    pub fn ensure_vertex(&mut self, id: i64) {
        self.adjacency.entry(id).or_default();
    }

    /// Appends `neighbor` to the neighbor list of `id`.
    ///
    /// There is no implicit vertex creation: if `id` was never declared the
    /// call fails with [`ConvertError::MissingVertex`]. Duplicates are kept;
    /// insertion order is preserved.
    pub fn append_neighbor(&mut self, id: i64, neighbor: i64) -> Result<()> {
        match self.adjacency.get_mut(&id) {
            Some(neighbors) => {
                neighbors.push(neighbor);
                Ok(())
            }
            None => Err(ConvertError::MissingVertex(id)),
        }
    }

    /// Number of distinct vertex identifiers currently present.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns true if no vertex has been declared yet.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns the neighbor list of `id`, if declared.
    pub fn neighbors(&self, id: i64) -> Option<&[i64]> {
        self.adjacency.get(&id).map(Vec::as_slice)
    }

    /// Consumes the table into a lazy single-pass traversal over
    /// `(vertex_id, neighbors)` pairs.
    ///
    /// Each pair is visited exactly once; the traversal order is unspecified.
    pub fn into_records(self) -> impl Iterator<Item = (i64, Vec<i64>)> {
        self.adjacency.into_iter()
    }
}
