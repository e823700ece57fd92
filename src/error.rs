use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Error type for the conversion pipeline.
///
/// Every variant is fatal at the point of detection: the run aborts, the
/// failure is surfaced to the operator, and any partially written output
/// file is left on disk as-is.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// An input file is missing or could not be opened.
    #[error("cannot open {}: {source}", .path.display())]
    OpenInput {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A required numeric token failed to parse.
    #[error("{}:{line}: malformed line: {reason}", .path.display())]
    MalformedLine {
        /// File the bad line came from.
        path: PathBuf,
        /// 1-based line number.
        line: u64,
        /// What the parser objected to.
        reason: String,
    },
    /// An edge references a vertex that was never declared in the vertex file.
    #[error("edge references undeclared vertex {0}")]
    MissingVertex(i64),
    /// The output path is already occupied; existing files are never truncated.
    #[error("output file {} already exists", .0.display())]
    OutputExists(PathBuf),
    /// A neighbor list does not fit the signed 32-bit count field of a record.
    #[error("vertex {vertex} has {count} neighbors, exceeding the record limit")]
    TooManyNeighbors {
        /// Vertex whose adjacency overflowed.
        vertex: i64,
        /// Actual neighbor count.
        count: usize,
    },
    /// I/O failure while reading an input or writing the output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
