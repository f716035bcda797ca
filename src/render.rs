/*
Renders a colored graph as a Graphviz DOT document:
 - one node per vertex, labelled by its index and filled with its color (white if uncolored)
 - one undirected edge per adjacency
The graph is only read.
*/
use std::fs;
use std::path::Path;

use crate::color::{ColoringInstance, UNCOLORED};
use crate::error::Result;
use crate::graph::ColouredGraph;

/// edge color used in the drawing
pub const EDGE_COLOR: &str = "#888888";

/** builds the DOT representation of the graph and its current coloring */
pub fn to_dot(graph:&ColouredGraph) -> String {
    let mut res = String::from("graph G {\n");
    res += "    node [shape=circle, style=filled, width=0.5, fontsize=20];\n";
    res += format!("    edge [color=\"{}\", penwidth=2];\n", EDGE_COLOR).as_str();
    for (v,colour) in graph.colour_tokens().iter().enumerate() {
        res += format!(
            "    {} [label=\"{}\", fillcolor=\"{}\"];\n", v, v, colour.unwrap_or(UNCOLORED)
        ).as_str();
    }
    for (a,b) in graph.edges() {
        res += format!("    {} -- {};\n", a, b).as_str();
    }
    res += "}\n";
    res
}

/** writes the DOT representation of the graph in a file */
pub fn write_dot<P:AsRef<Path>>(graph:&ColouredGraph, filename:P) -> Result<()> {
    fs::write(filename, to_dot(graph))?;
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::color_graph;

    fn path3(k:usize) -> ColouredGraph {
        ColouredGraph::build_graph(&[vec![0,1,0], vec![1,0,1], vec![0,1,0]], k).unwrap()
    }

    #[test]
    fn test_uncolored_vertices_are_white() {
        let g = path3(1);
        let dot = to_dot(&g);
        assert_eq!(dot.matches("fillcolor=\"#FFFFFF\"").count(), 3);
        assert!(dot.contains("0 -- 1;"));
        assert!(dot.contains("1 -- 2;"));
        assert!(!dot.contains("0 -- 2;"));
    }

    #[test]
    fn test_colored_vertices() {
        let mut g = path3(2);
        assert!(color_graph(&mut g));
        let dot = to_dot(&g);
        assert!(dot.contains("0 [label=\"0\", fillcolor=\"#FC4040\"];"));
        assert!(dot.contains("1 [label=\"1\", fillcolor=\"#40FC40\"];"));
        assert!(dot.starts_with("graph G {"));
        assert!(dot.ends_with("}\n"));
    }

    #[test]
    fn test_write_dot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.dot");
        let g = path3(2);
        write_dot(&g, &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), to_dot(&g));
    }
}
