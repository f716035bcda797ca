use bit_set::BitSet;

use crate::error::{ColoringError, Result};

/** Vertex Id */
pub type VertexId = usize;

/** Color Id (position of the color token in the palette) */
pub type ColorId = usize;

/** Solution of a graph coloring problem
(represented as a partition: solution[c] lists the vertices colored with c).
*/
pub type Solution = Vec<Vec<VertexId>>;

/// color tokens available by default (a graph uses a prefix of this list)
pub const DEFAULT_COLORS: [&str; 7] = [
    "#FC4040", "#40FC40", "#4040FC", "#FCFC40", "#FC40FC", "#40FCFC", "#B57955"
];

/// marker used when displaying an uncolored vertex
pub const UNCOLORED: &str = "#FFFFFF";


/** models a graph on which colors can be assigned */
pub trait ColoringInstance {
    /// number of vertices
    fn nb_vertices(&self) -> usize;

    /// list of vertices adjacent to u
    fn neighbors(&self, u:VertexId) -> Vec<VertexId>;

    /// degree of vertex u
    fn degree(&self, u:VertexId) -> usize;

    /// true iff u and v are adjacent
    fn are_adjacent(&self, u:VertexId, v:VertexId) -> bool;

    /// edge list (u < v for each edge)
    fn edges(&self) -> &[(VertexId, VertexId)];

    /// vertices of the instance
    fn vertices(&self) -> std::ops::Range<VertexId> { 0..self.nb_vertices() }

    /// number of edges
    fn nb_edges(&self) -> usize { self.edges().len() }
}


/** ordered set of color tokens. The order is the order in which the search tries them. */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    tokens: Vec<String>,
}

impl Palette {
    /** creates a palette. Fails if it is empty or contains duplicates. */
    pub fn new<S:Into<String>>(tokens:Vec<S>) -> Result<Self> {
        let tokens:Vec<String> = tokens.into_iter().map(Into::into).collect();
        if tokens.is_empty() {
            return Err(ColoringError::InvalidInput("the palette is empty".to_string()));
        }
        for (i,t) in tokens.iter().enumerate() {
            if tokens[..i].contains(t) {
                return Err(ColoringError::InvalidInput(format!("color '{}' appears twice in the palette", t)));
            }
        }
        Ok(Self { tokens })
    }

    /** first `size` colors of DEFAULT_COLORS */
    pub fn with_size(size:usize) -> Result<Self> {
        if size == 0 || size > DEFAULT_COLORS.len() {
            return Err(ColoringError::InvalidInput(format!(
                "palette size must be in 1..={} (got {})", DEFAULT_COLORS.len(), size
            )));
        }
        Self::new(DEFAULT_COLORS[..size].to_vec())
    }

    /// number of colors
    pub fn len(&self) -> usize { self.tokens.len() }

    /// always false (a palette holds at least one color)
    pub fn is_empty(&self) -> bool { self.tokens.is_empty() }

    /// color id of a token, if it belongs to the palette
    pub fn id_of(&self, token:&str) -> Option<ColorId> {
        self.tokens.iter().position(|t| t == token)
    }

    /// token of color c
    pub fn token(&self, c:ColorId) -> &str { &self.tokens[c] }

    /// tokens in search order
    pub fn tokens(&self) -> &[String] { &self.tokens }
}


/// result of the solution checker
#[derive(Debug, PartialEq, Eq)]
pub enum CheckerResult {
    /// feasible solution, returns the number of colors used
    Ok(usize),
    /// vertex added to two color classes
    VertexAddedTwice(VertexId),
    /// vertex missing from every color class
    VertexNotColored(VertexId),
    /// two adjacent vertices share a color
    ConflictingEdge(VertexId, VertexId),
}

/**
checks that a solution is a proper coloring of the instance.
returns the number of non-empty color classes if it is.
*/
pub fn checker<Inst:ColoringInstance + ?Sized>(inst:&Inst, sol:&[Vec<VertexId>]) -> CheckerResult {
    // check that all vertices are added exactly once
    let mut visited = BitSet::new();
    for c in sol {
        for v in c {
            if visited.contains(*v) { return CheckerResult::VertexAddedTwice(*v); }
            visited.insert(*v);
        }
    }
    if let Some(v) = inst.vertices().find(|v| !visited.contains(*v)) {
        return CheckerResult::VertexNotColored(v);
    }
    // check conflicts
    for c in sol {
        for (i,v1) in c.iter().enumerate() {
            for v2 in &c[i+1..] {
                if inst.are_adjacent(*v1, *v2) {
                    return CheckerResult::ConflictingEdge(*v1, *v2);
                }
            }
        }
    }
    CheckerResult::Ok(sol.iter().filter(|c| !c.is_empty()).count())
}
