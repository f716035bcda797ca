//! Search algorithms for the graph coloring problem.

/// ordered backtracking over the palette
pub mod backtracking;

pub use backtracking::{color_graph, color_graph_with_stop, BacktrackingSearch, SearchOutcome, SearchStats};
