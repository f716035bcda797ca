//! Exact graph coloring with at most k colors, by ordered backtracking

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// vertex and color types, palettes, solution checker
pub mod color;

/// error type of the crate
pub mod error;

/// graph with a (partial) coloring of its vertices
pub mod graph;

/// read/write DIMACS formats
pub mod dimacs;

/// interactive input of a graph
pub mod input;

/// Graphviz rendering of a colored graph
pub mod render;

/// helper and utility methods for executables
pub mod util;

/// search algorithms for the graph coloring problem
pub mod search;

pub use error::{ColoringError, Result};
pub use graph::ColouredGraph;
pub use search::color_graph;
