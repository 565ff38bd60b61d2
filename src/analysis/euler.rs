//! Euler circuit analysis
//!
//! Two layers:
//! 1. the existence test, Euler's theorem applied vertex by vertex
//!    (connected and every degree even);
//! 2. the circuit builder, a backtracking trail search over a private copy
//!    of the edge multiplicities.

use std::fmt;

use itertools::Itertools;
use thiserror::Error;

use crate::analysis::connectivity::{is_connected, unreachable_vertices};
use crate::graph::matrix::AdjMatrix;
use crate::graph::{Graph, VertexId, Walk, WalkError};

/// Existence-test outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EulerVerdict {
    /// Connected with every degree even: an Euler circuit exists.
    Circuit,
    /// Some vertices cannot be reached from vertex 0.
    Disconnected { unreachable: Vec<VertexId> },
    /// Connected, but the listed vertices have odd degree.
    OddDegree { vertices: Vec<VertexId> },
}

impl EulerVerdict {
    pub fn holds(&self) -> bool {
        matches!(self, EulerVerdict::Circuit)
    }
}

impl fmt::Display for EulerVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EulerVerdict::Circuit => write!(
                f,
                "Graph has an Euler Circuit, because it is connected and all vertices are of even degree."
            ),
            EulerVerdict::Disconnected { unreachable } => write!(
                f,
                "Graph has no Euler Circuit, because it is not connected (unreachable: {}).",
                unreachable.iter().format(", ")
            ),
            EulerVerdict::OddDegree { vertices } => write!(
                f,
                "Graph has no Euler Circuit, because vertices {} are of odd degree.",
                vertices.iter().format(", ")
            ),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CircuitError {
    #[error("existence test failed: {verdict}")]
    NoCircuit { verdict: EulerVerdict },
    #[error("start vertex {start} is out of range for {vertices} vertices")]
    StartOutOfRange { start: VertexId, vertices: usize },
    #[error("search exhausted all branches although the existence test holds")]
    SearchInvariant,
    #[error("walk error: {0}")]
    Walk(#[from] WalkError),
}

/// Applies Euler's theorem. Pure and idempotent: repeated calls on the same
/// graph return the same verdict.
pub fn euler_verdict(graph: &Graph) -> EulerVerdict {
    if !is_connected(graph) {
        return EulerVerdict::Disconnected {
            unreachable: unreachable_vertices(graph),
        };
    }
    let odd = graph
        .vertex_ids()
        .filter(|&v| graph.degree(v) % 2 == 1)
        .collect::<Vec<_>>();
    if odd.is_empty() {
        EulerVerdict::Circuit
    } else {
        EulerVerdict::OddDegree { vertices: odd }
    }
}

pub fn has_euler_circuit(graph: &Graph) -> bool {
    euler_verdict(graph).holds()
}

/// Per-build consumption state: a copy of the multiplicities plus the live
/// count of edges not yet traversed. The graph itself stays untouched.
#[derive(Debug)]
struct RemainingEdges {
    multiplicities: AdjMatrix,
    remaining: u64,
}

impl RemainingEdges {
    fn of(graph: &Graph) -> Self {
        Self {
            multiplicities: graph.matrix().clone(),
            remaining: graph.edge_count(),
        }
    }

    fn multiplicity(&self, u: VertexId, v: VertexId) -> u64 {
        self.multiplicities.get(u.index(), v.index())
    }

    /// Consumes one edge `{u, v}`: both mirror cells for distinct
    /// endpoints, the single diagonal cell for a loop, and the live total
    /// drops by one.
    fn consume(&mut self, u: VertexId, v: VertexId) {
        let left = self.multiplicities.get(u.index(), v.index());
        self.multiplicities
            .set_symmetric(u.index(), v.index(), left - 1);
        self.remaining -= 1;
    }

    fn restore(&mut self, u: VertexId, v: VertexId) {
        let left = self.multiplicities.get(u.index(), v.index());
        self.multiplicities
            .set_symmetric(u.index(), v.index(), left + 1);
        self.remaining += 1;
    }

    fn exhausted(&self) -> bool {
        self.remaining == 0
    }
}

/// Builds an Euler circuit by trail extension with exhaustive backtracking.
///
/// Destinations are tried in ascending numeric order, so repeated builds on
/// the same graph return the identical walk.
pub struct CircuitBuilder<'g> {
    graph: &'g Graph,
    start: VertexId,
}

impl<'g> CircuitBuilder<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            start: VertexId::new(0),
        }
    }

    pub fn with_start(mut self, start: VertexId) -> Self {
        self.start = start;
        self
    }

    /// The circuit as a walk of exactly `edge_count + 1` vertices, beginning
    /// and ending at the start vertex. A zero-edge graph yields the start
    /// vertex alone.
    pub fn build(&self) -> Result<Walk, CircuitError> {
        if self.start.index() >= self.graph.vertex_count() {
            return Err(CircuitError::StartOutOfRange {
                start: self.start,
                vertices: self.graph.vertex_count(),
            });
        }
        let verdict = euler_verdict(self.graph);
        log::debug!("existence test: {}", verdict);
        if !verdict.holds() {
            return Err(CircuitError::NoCircuit { verdict });
        }

        log::debug!(
            "searching for a circuit from {} over {} edges",
            self.start,
            self.graph.edge_count()
        );
        let mut remaining = RemainingEdges::of(self.graph);
        let mut trail = Vec::with_capacity(self.graph.edge_count() as usize + 1);
        trail.push(self.start);
        if !self.extend(&mut remaining, &mut trail, self.start) {
            log::warn!("no circuit found although the existence test holds");
            return Err(CircuitError::SearchInvariant);
        }

        let mut walk = Walk::with_capacity(self.graph.edge_count() as usize + 1);
        for vertex in trail {
            walk.append(vertex)?;
        }
        Ok(walk)
    }

    /// One search step. Success only bubbles up from a state where every
    /// edge is consumed and the trail is back at the start; each failed
    /// branch is undone before the next destination is tried.
    fn extend(
        &self,
        remaining: &mut RemainingEdges,
        trail: &mut Vec<VertexId>,
        current: VertexId,
    ) -> bool {
        if remaining.exhausted() {
            return current == self.start;
        }
        for next in self.graph.vertex_ids() {
            if remaining.multiplicity(current, next) == 0 {
                continue;
            }
            remaining.consume(current, next);
            trail.push(next);
            if self.extend(remaining, trail, next) {
                return true;
            }
            trail.pop();
            remaining.restore(current, next);
        }
        false
    }
}

/// Existence gate plus construction from vertex 0.
pub fn build_circuit(graph: &Graph) -> Result<Walk, CircuitError> {
    CircuitBuilder::new(graph).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_triangle() -> Graph {
        Graph::from_rows(vec![vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 0]]).unwrap()
    }

    fn build_single_edge() -> Graph {
        Graph::from_rows(vec![vec![0, 1], vec![1, 0]]).unwrap()
    }

    #[test]
    fn triangle_has_a_circuit() {
        let graph = build_triangle();
        assert!(has_euler_circuit(&graph));
        let walk = build_circuit(&graph).unwrap();
        assert_eq!(walk.to_string(), "0 -> 1 -> 2 -> 0");
    }

    #[test]
    fn single_edge_reports_odd_endpoints() {
        let graph = build_single_edge();
        assert_eq!(
            euler_verdict(&graph),
            EulerVerdict::OddDegree {
                vertices: vec![VertexId::new(0), VertexId::new(1)],
            }
        );
        let err = CircuitBuilder::new(&graph).build().unwrap_err();
        assert!(matches!(err, CircuitError::NoCircuit { .. }));
    }

    #[test]
    fn verdict_sentences_name_the_offending_vertices() {
        assert_eq!(
            EulerVerdict::Circuit.to_string(),
            "Graph has an Euler Circuit, because it is connected and all vertices are of even degree."
        );
        let disconnected = EulerVerdict::Disconnected {
            unreachable: vec![VertexId::new(2)],
        };
        assert_eq!(
            disconnected.to_string(),
            "Graph has no Euler Circuit, because it is not connected (unreachable: 2)."
        );
        let odd = EulerVerdict::OddDegree {
            vertices: vec![VertexId::new(0), VertexId::new(1)],
        };
        assert_eq!(
            odd.to_string(),
            "Graph has no Euler Circuit, because vertices 0, 1 are of odd degree."
        );
    }

    #[test]
    fn loop_with_isolated_vertex_is_disconnected() {
        let graph = Graph::from_rows(vec![vec![1, 0], vec![0, 0]]).unwrap();
        assert_eq!(
            euler_verdict(&graph),
            EulerVerdict::Disconnected {
                unreachable: vec![VertexId::new(1)],
            }
        );
    }

    #[test]
    fn start_vertex_must_exist() {
        let graph = build_triangle();
        let err = CircuitBuilder::new(&graph)
            .with_start(VertexId::new(5))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            CircuitError::StartOutOfRange {
                start: VertexId::new(5),
                vertices: 3,
            }
        );
    }

    #[test]
    fn custom_start_closes_at_that_vertex() {
        let graph = build_triangle();
        let walk = CircuitBuilder::new(&graph)
            .with_start(VertexId::new(1))
            .build()
            .unwrap();
        assert_eq!(walk.to_string(), "1 -> 0 -> 2 -> 1");
    }

    #[test]
    fn loops_and_parallels_are_traversed_once_each() {
        let graph = Graph::from_rows(vec![vec![1, 2], vec![2, 1]]).unwrap();
        let walk = build_circuit(&graph).unwrap();
        assert_eq!(walk.len() as u64, graph.edge_count() + 1);
        assert_eq!(walk.to_string(), "0 -> 0 -> 1 -> 1 -> 0");
    }
}
