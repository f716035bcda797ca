use std::fs;
use std::io::{BufRead, Write};

use clap::ArgMatches;
use log::info;
use serde::Serialize;
use serde_json::json;

use crate::{
    color::Palette,
    error::{ColoringError, Result},
    graph::ColouredGraph,
    input::{matrix_from_pairs, read_color_count, read_pairs, read_vertex_count},
    render::write_dot,
    search::{SearchOutcome, SearchStats},
};


/** parameters of a coloring run, read from the command line (and the prompt if no instance is given) */
#[derive(Debug)]
pub struct Params {
    /// instance name ("stdin" for a graph entered interactively)
    pub inst_name: String,
    /// graph to color
    pub graph: ColouredGraph,
    /// time limit (in seconds)
    pub time_limit: Option<f32>,
    /// where to write the solution
    pub sol_file: Option<String>,
    /// where to write the search statistics
    pub perf_file: Option<String>,
    /// where to write the DOT drawing
    pub dot_file: Option<String>,
}

/// parses an optional numeric argument
fn parse_arg<T:std::str::FromStr>(main_args:&ArgMatches, name:&str) -> Result<Option<T>> {
    match main_args.value_of(name) {
        None => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(|_|
            ColoringError::InvalidInput(format!("unable to parse --{} '{}'", name, s))
        ),
    }
}

/** reads command line input and builds the graph to color.
If no instance file is given, the graph and the number of colors are asked on the prompt.
*/
pub fn read_params<R:BufRead, W:Write>(main_args:&ArgMatches, input:&mut R, output:&mut W) -> Result<Params> {
    let nb_colors:Option<usize> = parse_arg(main_args, "colors")?;
    let time_limit:Option<f32> = parse_arg(main_args, "time")?;
    let optional_file = |name:&str| main_args.value_of(name).map(|e| {
        info!("printing {} in: {}", name, e);
        e.to_string()
    });
    let sol_file = optional_file("solution");
    let perf_file = optional_file("perf");
    let dot_file = optional_file("dot");
    let (inst_name, graph) = match main_args.value_of("instance") {
        Some(inst_filename) => { // read DIMACS instance
            let k = nb_colors.ok_or_else(||
                ColoringError::InvalidInput("--colors is required with --instance".to_string())
            )?;
            let graph = ColouredGraph::from_dimacs_file(inst_filename, Palette::with_size(k)?)?;
            (inst_filename.to_string(), graph)
        },
        None => { // ask the graph on the prompt
            let n = read_vertex_count(input, output)?;
            let pairs = read_pairs(input, output, n)?;
            let k = match nb_colors {
                Some(k) => k,
                None => read_color_count(input, output)?,
            };
            ("stdin".to_string(), ColouredGraph::build_graph(&matrix_from_pairs(n, &pairs)?, k)?)
        }
    };
    graph.display_statistics();
    Ok(Params { inst_name, graph, time_limit, sol_file, perf_file, dot_file })
}

/// colors of a graph, as exported in the solution file
#[derive(Debug, Serialize)]
pub struct ColoringExport<'a> {
    /// number of colors used
    pub nb_colors: usize,
    /// colors available
    pub palette: &'a [String],
    /// colors[v]: color of vertex v (null if uncolored)
    pub colors: Vec<Option<&'a str>>,
}

impl<'a> ColoringExport<'a> {
    /// snapshot of the current coloring
    pub fn new(graph:&'a ColouredGraph) -> Self {
        let nb_colors = graph.to_solution().iter().filter(|c| !c.is_empty()).count();
        Self { nb_colors, palette: graph.palette().tokens(), colors: graph.colour_tokens() }
    }
}

/// search statistics, as exported in the perf file
pub fn stats_to_json(inst_name:&str, outcome:SearchOutcome, stats:&SearchStats) -> serde_json::Value {
    json!({
        "outcome": outcome,
        "nb_commits": stats.nb_commits,
        "nb_conflicts": stats.nb_conflicts,
        "nb_backtracks": stats.nb_backtracks,
        "nb_expanded": stats.nb_expanded,
        "time_searched": stats.time_searched,
        "inst_name": inst_name,
    })
}

/// exports search results to files
pub fn export_results(
    params:&Params,
    outcome:SearchOutcome,
    stats:&SearchStats,
) -> Result<()> {
    if let Some(filename) = &params.perf_file {
        let stats = stats_to_json(&params.inst_name, outcome, stats);
        fs::write(filename, serde_json::to_string(&stats)?)?;
    }
    if let Some(filename) = &params.sol_file {
        fs::write(filename, serde_json::to_string_pretty(&ColoringExport::new(&params.graph))?)?;
    }
    if let Some(filename) = &params.dot_file {
        write_dot(&params.graph, filename)?;
    }
    Ok(())
}
