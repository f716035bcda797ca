use std::io;
use std::process;

use clap::{App, load_yaml};
use dogs::search_algorithm::{NeverStoppingCriterion, TimeStoppingCriterion};

use backtrack_color::color::{checker, CheckerResult};
use backtrack_color::search::color_graph_with_stop;
use backtrack_color::search::{SearchOutcome, SearchStats};
use backtrack_color::util::{read_params, export_results, Params};
use backtrack_color::Result;


/// colors the graph, within the time limit if any
fn solve(params:&mut Params) -> (SearchOutcome, SearchStats) {
    match params.time_limit {
        None => color_graph_with_stop(&mut params.graph, &NeverStoppingCriterion::default()),
        Some(t) => color_graph_with_stop(&mut params.graph, &TimeStoppingCriterion::new(t)),
    }
}

fn run() -> Result<()> {
    // parse arguments
    let yaml = load_yaml!("color_graph.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let stdin = io::stdin();
    let mut params = read_params(&main_args, &mut stdin.lock(), &mut io::stdout())?;
    let k = params.graph.palette().len();

    // solve it
    let (outcome, stats) = solve(&mut params);
    match outcome {
        SearchOutcome::Solved => {
            match checker(&params.graph, &params.graph.to_solution()) {
                CheckerResult::Ok(nb_colors) => println!(
                    "colored with {} colors in {:.3} seconds", nb_colors, stats.time_searched
                ),
                res => println!("invalid solution (reason: {:?})", res),
            }
            for (v,colour) in params.graph.colour_tokens().iter().enumerate() {
                println!("{}: {}", v, colour.unwrap_or("-"));
            }
        },
        SearchOutcome::Infeasible => println!("Cant colour this graph into {} colors", k),
        SearchOutcome::Stopped => println!(
            "time limit reached after {:.3} seconds, no coloring found", stats.time_searched
        ),
    }

    // export results
    export_results(&params, outcome, &stats)
}

/** reads a graph, colors it with at most k colors and exports the result */
pub fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
