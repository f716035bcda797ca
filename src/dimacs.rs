use std::fs;
use std::path::Path;

use log::debug;
use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{digit1, space0, space1, not_line_ending};
use nom::combinator::{map_res, all_consuming};
use nom::sequence::{preceded, separated_pair, tuple, terminated};

use crate::color::VertexId;
use crate::error::{ColoringError, Result};


/// reads an instance from file, returns (n,m,edges) with 0-based vertices
pub fn read_from_file<P:AsRef<Path>>(filename:P) -> Result<(usize, usize, Vec<(VertexId,VertexId)>)> {
    let s = fs::read_to_string(filename.as_ref())?;
    debug!("read {} bytes from {}", s.len(), filename.as_ref().display());
    read_from_str(&s)
}

/** reads a DIMACS instance (WARNING: indices start at 1 in the DIMACS format).
returns (n,m,edges) with 0-based vertices.
*/
pub fn read_from_str(s:&str) -> Result<(usize, usize, Vec<(VertexId,VertexId)>)> {
    let mut header:Option<(usize,usize)> = None;
    let mut edges = Vec::new();
    for (i,line) in s.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || skip_comment(line).is_ok() { continue; }
        let parse_error = || ColoringError::Parse(format!("line {}: unexpected '{}'", i+1, line));
        match header {
            None => {
                let (_,(n,m)) = all_consuming(read_header)(line).map_err(|_| parse_error())?;
                header = Some((n,m));
            },
            Some((n,_)) => {
                let (_,(a,b)) = all_consuming(read_edge)(line).map_err(|_| parse_error())?;
                if a == 0 || b == 0 || a > n || b > n {
                    return Err(ColoringError::Parse(format!(
                        "line {}: edge ({},{}) outside 1..={}", i+1, a, b, n
                    )));
                }
                edges.push((a-1, b-1));
            }
        }
    }
    let (n,m) = header.ok_or_else(|| ColoringError::Parse("missing 'p edge' header".to_string()))?;
    // some generators count each edge twice
    if edges.len() != m && 2*edges.len() != m {
        return Err(ColoringError::Parse(format!(
            "header announces {} edges, found {}", m, edges.len()
        )));
    }
    Ok((n, m, edges))
}

/// recognizes a comment line
pub fn skip_comment(s:&str) -> IResult<&str, &str> {
    preceded(tag("c"), not_line_ending)(s)
}

/// reads two numbers separated by spaces
fn read_two_integers(s:&str) -> IResult<&str, (usize,usize)> {
    terminated(
        separated_pair(
            map_res(digit1, |d:&str| d.parse::<usize>()),
            space1,
            map_res(digit1, |d:&str| d.parse::<usize>()),
        ),
        space0,
    )(s)
}

/// reads header containing (n,m)
pub fn read_header(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(
        tuple((tag("p"), space1, alt((tag("edge"), tag("col"))), space1)),
        read_two_integers
    )(s)
}

/// reads edge line (WARNING: indices start at 1 in the DIMACS format)
pub fn read_edge(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(tuple((tag("e"), space1)), read_two_integers)(s)
}

/// writes a graph in the DIMACS format
pub fn to_dimacs_string(n:usize, edges:&[(VertexId,VertexId)], comment:Option<&str>) -> String {
    let mut res = String::default();
    for c in comment.iter().flat_map(|c| c.lines()) {
        res += format!("c {}\n", c).as_str();
    }
    res += format!("p edge {} {}\n", n, edges.len()).as_str();
    for (a,b) in edges {
        res += format!("e {} {}\n", a+1, b+1).as_str();
    }
    res
}
