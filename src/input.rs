/*
Implements the interactive input of a graph:
 - number of vertices
 - pairs of connected vertices (one pair per line, an empty line ends the prompt)
 - number of colors
Every prompt is repeated until a valid answer is given.
*/
use std::io::{BufRead, Write};

use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::take_till;
use nom::character::complete::digit1;
use nom::combinator::{map, verify};
use nom::sequence::{pair, preceded};

use crate::color::{DEFAULT_COLORS, VertexId};
use crate::error::{ColoringError, Result};


/// prints a prompt and reads one line (without its line ending). None at the end of the input.
fn prompt<R:BufRead, W:Write>(input:&mut R, output:&mut W, message:&str) -> Result<Option<String>> {
    write!(output, "{}", message)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
}

fn end_of_input() -> ColoringError {
    ColoringError::Parse("unexpected end of input".to_string())
}

/** asks for a positive integer until one in [min, max] is given */
fn read_bounded<R:BufRead, W:Write>(
    input:&mut R, output:&mut W, message:&str, min:usize, max:usize
) -> Result<usize> {
    loop {
        let line = prompt(input, output, message)?.ok_or_else(end_of_input)?;
        match line.trim().parse::<usize>() {
            Ok(v) if v >= min && v <= max => return Ok(v),
            _ => continue,
        }
    }
}

/** asks for the number of vertices (> 0) */
pub fn read_vertex_count<R:BufRead, W:Write>(input:&mut R, output:&mut W) -> Result<usize> {
    let n = read_bounded(input, output, "Enter the number of vertices in graph ( > 0): ", 1, usize::MAX)?;
    let names:Vec<String> = (0..n).map(|v| v.to_string()).collect();
    writeln!(output, "Added vertices {}", names.join(", "))?;
    Ok(n)
}

/** asks for the number of colors (0 < colors <= number of default colors) */
pub fn read_color_count<R:BufRead, W:Write>(input:&mut R, output:&mut W) -> Result<usize> {
    let message = format!(
        "Enter the number of colors of the graph (0 < colors < {}): ", DEFAULT_COLORS.len()+1
    );
    read_bounded(input, output, &message, 1, DEFAULT_COLORS.len())
}

/** finds the first two numbers of a line (anything may surround them).
A line holding a single number of several digits is read as that number
without its last digit, followed by the last digit ("123" gives 12 and 3).
*/
pub fn parse_pair(s:&str) -> IResult<&str, (&str,&str)> {
    alt((
        pair(
            preceded(take_till(is_digit), digit1),
            preceded(take_till(is_digit), digit1),
        ),
        map(
            verify(preceded(take_till(is_digit), digit1), |d:&str| d.len() > 1),
            |d:&str| d.split_at(d.len()-1)
        ),
    ))(s)
}

fn is_digit(c:char) -> bool { c.is_ascii_digit() }

/** asks for pairs of connected vertices until a line without a pair is given.
pairs referring to unknown vertices are reported and skipped.
*/
pub fn read_pairs<R:BufRead, W:Write>(
    input:&mut R, output:&mut W, n:usize
) -> Result<Vec<(VertexId,VertexId)>> {
    let message = "Enter the pair of connected vertices(e.g. '0 2'(without quotes)) or press return to finish prompt: ";
    let mut res = Vec::new();
    while let Some(line) = prompt(input, output, message)? {
        let (a,b) = match parse_pair(&line) {
            Ok((_,p)) => p,
            Err(_) => break,
        };
        match (a.parse::<usize>(), b.parse::<usize>()) {
            (Ok(a), Ok(b)) if a < n && b < n => res.push((a,b)),
            _ => writeln!(output, "Wrong input")?,
        }
    }
    Ok(res)
}

/** builds a symmetric adjacency matrix from pairs of connected vertices */
pub fn matrix_from_pairs(n:usize, pairs:&[(VertexId,VertexId)]) -> Result<Vec<Vec<u8>>> {
    let mut matrix = vec![vec![0 ; n] ; n];
    for &(a,b) in pairs {
        if a >= n || b >= n {
            return Err(ColoringError::InvalidInput(format!(
                "pair ({},{}) refers to a vertex outside 0..{}", a, b, n
            )));
        }
        matrix[a][b] = 1;
        matrix[b][a] = 1;
    }
    Ok(matrix)
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_pair() {
        assert_eq!(parse_pair("0 2").unwrap().1, ("0","2"));
        assert_eq!(parse_pair("(12, 3)").unwrap().1, ("12","3"));
        assert_eq!(parse_pair("edge 4-5 please").unwrap().1, ("4","5"));
        assert!(parse_pair("").is_err());
        assert!(parse_pair("7").is_err());
        assert!(parse_pair("a 7 b").is_err());
    }

    #[test]
    fn test_parse_pair_single_number() {
        assert_eq!(parse_pair("12").unwrap().1, ("1","2"));
        assert_eq!(parse_pair("123").unwrap().1, ("12","3"));
        assert_eq!(parse_pair(" 40 ").unwrap().1, ("4","0"));
    }

    #[test]
    fn test_read_pairs_single_number_line() {
        let mut input = Cursor::new("12\n0 1\n\n");
        let pairs = read_pairs(&mut input, &mut std::io::sink(), 3).unwrap();
        assert_eq!(pairs, vec![(1,2), (0,1)]);
    }

    #[test]
    fn test_read_vertex_count_retries() {
        let mut input = Cursor::new("abc\n0\n-3\n3\n");
        let mut output = Vec::new();
        assert_eq!(read_vertex_count(&mut input, &mut output).unwrap(), 3);
        let printed = String::from_utf8(output).unwrap();
        assert_eq!(printed.matches("Enter the number of vertices").count(), 4);
        assert!(printed.ends_with("Added vertices 0, 1, 2\n"));
    }

    #[test]
    fn test_read_color_count_bounds() {
        let mut input = Cursor::new("0\n8\n7\n");
        let mut output = Vec::new();
        assert_eq!(read_color_count(&mut input, &mut output).unwrap(), 7);
        let mut input = Cursor::new("9\n");
        assert!(read_color_count(&mut input, &mut std::io::sink()).is_err());
    }

    #[test]
    fn test_read_pairs() {
        let mut input = Cursor::new("0 1\n1,2\n0 9\n2 3\n\n1 0\n");
        let mut output = Vec::new();
        let pairs = read_pairs(&mut input, &mut output, 3).unwrap();
        assert_eq!(pairs, vec![(0,1), (1,2)]);
        let printed = String::from_utf8(output).unwrap();
        assert_eq!(printed.matches("Wrong input").count(), 2);
    }

    #[test]
    fn test_read_pairs_end_of_input() {
        let mut input = Cursor::new("0 1");
        let pairs = read_pairs(&mut input, &mut std::io::sink(), 2).unwrap();
        assert_eq!(pairs, vec![(0,1)]);
    }

    #[test]
    fn test_matrix_from_pairs() {
        let matrix = matrix_from_pairs(3, &[(0,1), (2,1)]).unwrap();
        assert_eq!(matrix, vec![vec![0,1,0], vec![1,0,1], vec![0,1,0]]);
        assert!(matrix_from_pairs(2, &[(0,2)]).is_err());
    }
}
