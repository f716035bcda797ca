use std::time::Instant;

use dogs::search_algorithm::{NeverStoppingCriterion, StoppingCriterion};
use log::{debug, info};
use serde::Serialize;

use crate::color::{ColorId, ColoringInstance, VertexId};
use crate::graph::ColouredGraph;


/** represents a decision (assigning color c to vertex v) */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Decision {
    v: VertexId,
    c: ColorId,
}

/// either a decision to try, either a decision to undo
#[derive(Debug)]
enum BacktrackEvent {
    Commit(Decision), // decision to try
    Restore(Decision) // decision taken, undone when popped
}

/// how a backtracking search ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchOutcome {
    /// every vertex is colored
    Solved,
    /// no coloring exists with this palette
    Infeasible,
    /// the stopping criterion was met before the search completed
    Stopped,
}

/// counters collected during a search
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchStats {
    /// successful color assignments
    pub nb_commits: usize,
    /// assignments rejected because of a neighbor or an already colored vertex
    pub nb_conflicts: usize,
    /// assignments undone
    pub nb_backtracks: usize,
    /// vertices whose candidate colors were pushed on the stack
    pub nb_expanded: usize,
    /// search time (in seconds)
    pub time_searched: f32,
}


/**
Implements an ordered backtracking search.

Vertices are visited in increasing order, colors in palette order.
The search works on the graph directly: every assignment it makes is
recorded on the decision stack and undone when backtracking, so that an
unsuccessful search leaves the graph as it found it.
Vertices colored before the search starts are kept as they are.
*/
#[derive(Debug)]
pub struct BacktrackingSearch<'a> {
    /// graph being colored
    graph: &'a mut ColouredGraph,
    /// decision stack
    decisions: Vec<BacktrackEvent>,
    /// search statistics
    stats: SearchStats,
}

impl<'a> BacktrackingSearch<'a> {
    /** creates a new backtracking search over a graph */
    pub fn new(graph:&'a mut ColouredGraph) -> Self {
        let capacity = graph.nb_vertices() * graph.palette().len();
        Self { graph, decisions: Vec::with_capacity(capacity), stats: SearchStats::default() }
    }

    /// statistics of the last run
    pub fn stats(&self) -> &SearchStats { &self.stats }

    /// first uncolored vertex, starting from `from`
    fn next_vertex(&self, from:VertexId) -> Option<VertexId> {
        (from..self.graph.nb_vertices()).find(|v| self.graph.colour_id(*v).is_none())
    }

    /// pushes the candidate colors of v (the first color ends on top of the stack)
    fn push_next_decisions(&mut self, v:VertexId) {
        for c in (0..self.graph.palette().len()).rev() {
            self.decisions.push(BacktrackEvent::Commit(Decision { v, c }));
        }
        self.stats.nb_expanded += 1;
    }

    /// tries to apply a decision. If it succeeds, prepares to undo it.
    fn commit(&mut self, decision:Decision) -> bool {
        if self.graph.try_color_id(decision.v, decision.c).is_ok() {
            self.stats.nb_commits += 1;
            self.decisions.push(BacktrackEvent::Restore(decision));
            true
        } else {
            self.stats.nb_conflicts += 1;
            false
        }
    }

    /// undoes a decision
    fn restore(&mut self, decision:Decision) {
        debug_assert_eq!(self.graph.colour_id(decision.v), Some(decision.c));
        self.graph.unset(decision.v);
        self.stats.nb_backtracks += 1;
    }

    /// pops the remaining events, undoing every decision still applied
    fn unwind(&mut self) {
        while let Some(event) = self.decisions.pop() {
            if let BacktrackEvent::Restore(decision) = event {
                self.restore(decision);
            }
        }
    }

    /**
    runs the search until a coloring is found, the search space is exhausted,
    or the stopping criterion is met.
    The graph holds a complete coloring iff the outcome is Solved. Otherwise it
    is left unchanged.
    */
    pub fn run<Stop:StoppingCriterion>(&mut self, stopping_criterion:&Stop) -> SearchOutcome {
        let t_start = Instant::now();
        self.stats = SearchStats::default();
        self.decisions.clear();
        let mut outcome = SearchOutcome::Infeasible;
        match self.next_vertex(0) {
            None => outcome = SearchOutcome::Solved,
            Some(v) => self.push_next_decisions(v),
        }
        while let Some(event) = self.decisions.pop() {
            if stopping_criterion.is_finished() {
                self.decisions.push(event);
                outcome = SearchOutcome::Stopped;
                break;
            }
            match event {
                BacktrackEvent::Restore(decision) => self.restore(decision),
                BacktrackEvent::Commit(decision) => {
                    if !self.commit(decision) { continue; }
                    // vertices after decision.v that are colored were colored before the search
                    match self.next_vertex(decision.v + 1) {
                        None => {
                            outcome = SearchOutcome::Solved;
                            break;
                        },
                        Some(v) => {
                            if self.stats.nb_expanded % 100_000 == 0 {
                                debug!("expanded {} nodes, depth {}", self.stats.nb_expanded, v);
                            }
                            self.push_next_decisions(v);
                        }
                    }
                }
            }
        }
        match outcome {
            SearchOutcome::Solved => self.decisions.clear(), // keep the coloring
            _ => self.unwind(),
        }
        self.stats.time_searched = t_start.elapsed().as_secs_f32();
        info!(
            "search {:?}: {} commits, {} conflicts, {} backtracks in {:.3}s",
            outcome, self.stats.nb_commits, self.stats.nb_conflicts,
            self.stats.nb_backtracks, self.stats.time_searched
        );
        outcome
    }
}


/**
colors the graph with its palette.
returns true and leaves a complete proper coloring in the graph if one exists,
returns false and leaves the graph unchanged otherwise.
*/
pub fn color_graph(graph:&mut ColouredGraph) -> bool {
    color_graph_with_stop(graph, &NeverStoppingCriterion::default()).0 == SearchOutcome::Solved
}

/** colors the graph with its palette, giving up when the stopping criterion is met */
pub fn color_graph_with_stop<Stop:StoppingCriterion>(
    graph:&mut ColouredGraph, stopping_criterion:&Stop
) -> (SearchOutcome, SearchStats) {
    let mut search = BacktrackingSearch::new(graph);
    let outcome = search.run(stopping_criterion);
    (outcome, search.stats().clone())
}
