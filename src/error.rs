use thiserror::Error;

use crate::color::VertexId;

/** errors raised while building, coloring or exporting a graph */
#[derive(Error, Debug)]
pub enum ColoringError {
    /// malformed adjacency matrix or palette size
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// vertex index outside [0, n)
    #[error("vertex {vertex} out of range (graph has {n} vertices)")]
    OutOfRange { vertex: VertexId, n: usize },

    /// vertex already colored, or a neighbor already holds the color
    #[error("cannot color vertex {vertex} with {color}")]
    ColorConflict { vertex: VertexId, color: String },

    /// color token absent from the palette
    #[error("color '{0}' is not available for this graph")]
    InvalidColor(String),

    /// instance or prompt text that could not be parsed
    #[error("parse error: {0}")]
    Parse(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON export error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/** result type used throughout the crate */
pub type Result<T> = std::result::Result<T, ColoringError>;
