use std::path::Path;

use bit_set::BitSet;
use log::{info, warn};

use crate::color::{ColorId, ColoringInstance, Palette, Solution, VertexId};
use crate::dimacs::read_from_file;
use crate::error::{ColoringError, Result};


/** read-only view on a vertex: its neighbors and its current color */
#[derive(Debug, Clone, Copy)]
pub struct VertexView<'a> {
    /// neighbors of the vertex
    pub adjacent: &'a BitSet,
    /// color token, None if uncolored
    pub colour: Option<&'a str>,
}


/** models a graph together with a (partial) coloring of its vertices.
The adjacency is fixed at construction, only the colors change afterwards.
*/
#[derive(Debug, Clone)]
pub struct ColouredGraph {
    /// adjacent[v]: bitset of the neighbors of v
    adjacent: Vec<BitSet>,
    /// edges of the graph (u < v)
    edges: Vec<(VertexId,VertexId)>,
    /// colours[v]: color assigned to v
    colours: Vec<Option<ColorId>>,
    /// colors that may be assigned
    palette: Palette,
}

impl ColoringInstance for ColouredGraph {
    fn nb_vertices(&self) -> usize { self.adjacent.len() }

    fn neighbors(&self, u:VertexId) -> Vec<VertexId> { self.adjacent[u].iter().collect() }

    fn degree(&self, u:VertexId) -> usize { self.adjacent[u].len() }

    fn are_adjacent(&self, u:VertexId, v:VertexId) -> bool { self.adjacent[u].contains(v) }

    fn edges(&self) -> &[(VertexId, VertexId)] { &self.edges }
}


impl ColouredGraph {

    /** builds a graph from an adjacency matrix (n×n, values in {0,1}, symmetric).
    Diagonal entries are ignored: a vertex is never its own neighbor.
    */
    pub fn new(matrix:&[Vec<u8>], palette:Palette) -> Result<Self> {
        let n = matrix.len();
        let mut edges = Vec::new();
        for (i,row) in matrix.iter().enumerate() {
            if row.len() != n {
                return Err(ColoringError::InvalidInput(format!(
                    "row {} has {} entries, expected {}", i, row.len(), n
                )));
            }
            for (j,&value) in row.iter().enumerate() {
                if value > 1 {
                    return Err(ColoringError::InvalidInput(format!(
                        "entry ({},{}) is {}, expected 0 or 1", i, j, value
                    )));
                }
                if j < i && value != matrix[j][i] {
                    return Err(ColoringError::InvalidInput(format!(
                        "matrix is not symmetric at ({},{})", i, j
                    )));
                }
                if i == j && value == 1 {
                    warn!("ignoring self loop on vertex {}", i);
                } else if j < i && value == 1 {
                    edges.push((j,i));
                }
            }
        }
        Self::from_edges(n, &edges, palette)
    }

    /** builds a graph from an adjacency matrix, using the first palette_size default colors */
    pub fn build_graph(matrix:&[Vec<u8>], palette_size:usize) -> Result<Self> {
        Self::new(matrix, Palette::with_size(palette_size)?)
    }

    /** builds a graph with n vertices from an edge list (self loops and repeated edges are ignored) */
    pub fn from_edges(n:usize, edges:&[(VertexId,VertexId)], palette:Palette) -> Result<Self> {
        let mut adjacent = vec![BitSet::with_capacity(n) ; n];
        for &(a,b) in edges {
            if a >= n || b >= n {
                return Err(ColoringError::InvalidInput(format!(
                    "edge ({},{}) refers to a vertex outside 0..{}", a, b, n
                )));
            }
            if a != b {
                adjacent[a].insert(b);
                adjacent[b].insert(a);
            }
        }
        let mut res_edges = Vec::new();
        for (a,adj) in adjacent.iter().enumerate() {
            res_edges.extend(adj.iter().filter(|b| a < *b).map(|b| (a,b)));
        }
        Ok(Self { adjacent, edges:res_edges, colours:vec![None ; n], palette })
    }

    /// creates a graph from a DIMACS file
    pub fn from_dimacs_file<P:AsRef<Path>>(filename:P, palette:Palette) -> Result<Self> {
        let (n,_,edges) = read_from_file(filename)?;
        Self::from_edges(n, &edges, palette)
    }

    /// colors that may be assigned to vertices
    pub fn palette(&self) -> &Palette { &self.palette }

    fn check_vertex(&self, vertex:VertexId) -> Result<()> {
        if vertex >= self.nb_vertices() {
            return Err(ColoringError::OutOfRange { vertex, n:self.nb_vertices() });
        }
        Ok(())
    }

    /** neighbors and current color of a vertex */
    pub fn get(&self, vertex:VertexId) -> Result<VertexView<'_>> {
        self.check_vertex(vertex)?;
        Ok(VertexView {
            adjacent: &self.adjacent[vertex],
            colour: self.colours[vertex].map(|c| self.palette.token(c)),
        })
    }

    /// color id currently assigned to a vertex
    pub fn color_of(&self, vertex:VertexId) -> Result<Option<ColorId>> {
        self.check_vertex(vertex)?;
        Ok(self.colours[vertex])
    }

    /// color id of a vertex known to be in range
    pub(crate) fn colour_id(&self, vertex:VertexId) -> Option<ColorId> { self.colours[vertex] }

    /** assigns a color token to a vertex.
    Fails if the token is not in the palette, if the vertex is already colored,
    or if one of its neighbors holds the color.
    */
    pub fn try_color(&mut self, vertex:VertexId, color:&str) -> Result<()> {
        self.check_vertex(vertex)?;
        let c = self.palette.id_of(color)
            .ok_or_else(|| ColoringError::InvalidColor(color.to_string()))?;
        self.try_color_id(vertex, c)
    }

    /** assigns a palette color (by id) to a vertex. Same rules as try_color. */
    pub fn try_color_id(&mut self, vertex:VertexId, c:ColorId) -> Result<()> {
        self.check_vertex(vertex)?;
        if c >= self.palette.len() {
            return Err(ColoringError::InvalidColor(format!("#{}", c)));
        }
        if self.colours[vertex].is_some()
        || self.adjacent[vertex].iter().any(|u| self.colours[u] == Some(c)) {
            return Err(ColoringError::ColorConflict {
                vertex, color:self.palette.token(c).to_string()
            });
        }
        self.colours[vertex] = Some(c);
        Ok(())
    }

    /// makes the vertex uncolored
    pub fn clear_color(&mut self, vertex:VertexId) -> Result<()> {
        self.check_vertex(vertex)?;
        self.colours[vertex] = None;
        Ok(())
    }

    /// uncolors a vertex known to be in range
    pub(crate) fn unset(&mut self, vertex:VertexId) {
        self.colours[vertex] = None;
    }

    /// true iff every vertex holds a color
    pub fn all_colored(&self) -> bool {
        self.colours.iter().all(Option::is_some)
    }

    /// number of colored vertices
    pub fn nb_colored(&self) -> usize {
        self.colours.iter().filter(|c| c.is_some()).count()
    }

    /** color classes of the current coloring (res[c]: vertices colored with c).
    uncolored vertices are left out.
    */
    pub fn to_solution(&self) -> Solution {
        let mut res = vec![vec![] ; self.palette.len()];
        for (v,c) in self.colours.iter().enumerate() {
            if let Some(c) = c { res[*c].push(v); }
        }
        res
    }

    /// color token of each vertex (None if uncolored)
    pub fn colour_tokens(&self) -> Vec<Option<&str>> {
        self.colours.iter().map(|c| c.map(|c| self.palette.token(c))).collect()
    }

    /// logs statistics of the graph
    pub fn display_statistics(&self) {
        info!("{:>25}{:>10}", "nb vertices:", self.nb_vertices());
        info!("{:>25}{:>10}", "nb edges:", self.nb_edges());
        info!("{:>25}{:>10}", "nb colors:", self.palette.len());
        let degrees = self.vertices().map(|v| self.degree(v));
        if let (Some(min), Some(max)) = (degrees.clone().min(), degrees.max()) {
            info!("{:>25}{:>10}", "min degree:", min);
            info!("{:>25}{:>10}", "max degree:", max);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn triangle(k:usize) -> ColouredGraph {
        ColouredGraph::build_graph(&[vec![0,1,1], vec![1,0,1], vec![1,1,0]], k).unwrap()
    }

    #[test]
    fn test_build_graph() {
        let g = triangle(3);
        assert_eq!(g.nb_vertices(), 3);
        assert_eq!(g.nb_edges(), 3);
        assert_eq!(g.edges(), &[(0,1), (0,2), (1,2)]);
        assert_eq!(g.neighbors(1), vec![0,2]);
        assert!(g.vertices().all(|v| g.get(v).unwrap().colour.is_none()));
        assert!(!g.all_colored());
    }

    #[test]
    fn test_non_symmetric_matrix() {
        let res = ColouredGraph::build_graph(&[vec![0,1], vec![0,0]], 2);
        assert!(matches!(res, Err(ColoringError::InvalidInput(_))));
    }

    #[test]
    fn test_invalid_matrix() {
        let not_square = ColouredGraph::build_graph(&[vec![0,1,0], vec![1,0]], 2);
        assert!(matches!(not_square, Err(ColoringError::InvalidInput(_))));
        let not_binary = ColouredGraph::build_graph(&[vec![0,2], vec![2,0]], 2);
        assert!(matches!(not_binary, Err(ColoringError::InvalidInput(_))));
    }

    #[test]
    fn test_invalid_palette_size() {
        let matrix = vec![vec![0,1], vec![1,0]];
        assert!(matches!(ColouredGraph::build_graph(&matrix, 0), Err(ColoringError::InvalidInput(_))));
        assert!(matches!(ColouredGraph::build_graph(&matrix, 8), Err(ColoringError::InvalidInput(_))));
    }

    #[test]
    fn test_diagonal_ignored() {
        let g = ColouredGraph::build_graph(&[vec![1,1], vec![1,1]], 2).unwrap();
        assert_eq!(g.nb_edges(), 1);
        assert!(!g.are_adjacent(0, 0));
    }

    #[test]
    fn test_get_out_of_range() {
        let g = triangle(2);
        assert!(matches!(g.get(3), Err(ColoringError::OutOfRange { vertex:3, n:3 })));
        assert!(matches!(g.color_of(3), Err(ColoringError::OutOfRange { vertex:3, n:3 })));
    }

    #[test]
    fn test_color_of() {
        let mut g = triangle(3);
        assert_eq!(g.color_of(1).unwrap(), None);
        g.try_color(1, "#4040FC").unwrap();
        assert_eq!(g.color_of(1).unwrap(), Some(2));
    }

    #[test]
    fn test_try_color() {
        let mut g = triangle(3);
        g.try_color(0, "#FC4040").unwrap();
        assert_eq!(g.get(0).unwrap().colour, Some("#FC4040"));
        // neighbor holds the color
        assert!(matches!(g.try_color(1, "#FC4040"), Err(ColoringError::ColorConflict { vertex:1, .. })));
        assert_eq!(g.get(1).unwrap().colour, None);
        g.try_color(1, "#40FC40").unwrap();
        assert_eq!(g.nb_colored(), 2);
    }

    #[test]
    fn test_try_color_already_colored() {
        let mut g = triangle(3);
        g.try_color(0, "#FC4040").unwrap();
        for token in ["#FC4040", "#40FC40", "#4040FC"].iter() {
            assert!(matches!(g.try_color(0, token), Err(ColoringError::ColorConflict { .. })));
        }
        assert_eq!(g.get(0).unwrap().colour, Some("#FC4040"));
    }

    #[test]
    fn test_try_color_invalid_color() {
        let mut g = triangle(2);
        // not in a 2-color palette even though it is a default color
        assert!(matches!(g.try_color(0, "#4040FC"), Err(ColoringError::InvalidColor(_))));
        g.try_color(0, "#FC4040").unwrap();
        assert!(matches!(g.try_color(0, "purple"), Err(ColoringError::InvalidColor(_))));
        assert!(matches!(g.try_color(1, "purple"), Err(ColoringError::InvalidColor(_))));
    }

    #[test]
    fn test_clear_color() {
        let mut g = triangle(3);
        g.try_color(2, "#4040FC").unwrap();
        g.clear_color(2).unwrap();
        assert_eq!(g.get(2).unwrap().colour, None);
        g.try_color(2, "#FC4040").unwrap();
        assert!(g.clear_color(5).is_err());
    }

    #[test]
    fn test_all_colored() {
        let mut g = triangle(3);
        g.try_color(0, "#FC4040").unwrap();
        g.try_color(1, "#40FC40").unwrap();
        assert!(!g.all_colored());
        g.try_color(2, "#4040FC").unwrap();
        assert!(g.all_colored());
        assert_eq!(g.to_solution(), vec![vec![0], vec![1], vec![2]]);
    }

    #[test]
    fn test_from_edges_out_of_range() {
        let palette = Palette::with_size(2).unwrap();
        assert!(ColouredGraph::from_edges(2, &[(0,2)], palette).is_err());
    }
}
