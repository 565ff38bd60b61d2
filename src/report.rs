use std::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::analysis::euler::{CircuitBuilder, CircuitError, euler_verdict};
use crate::graph::{Graph, VertexId};

/// One processed graph, ready for printing or serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircuitReport {
    pub vertices: usize,
    pub edges: u64,
    pub matrix: String,
    pub explanation: String,
    pub has_circuit: bool,
    pub circuit: Option<Vec<u32>>,
}

impl CircuitReport {
    /// Runs the existence test and, when it holds, the builder.
    pub fn analyze(graph: &Graph, start: VertexId) -> Result<Self, CircuitError> {
        let verdict = euler_verdict(graph);
        let circuit = if verdict.holds() {
            let walk = CircuitBuilder::new(graph).with_start(start).build()?;
            Some(walk.iter().map(|v| v.raw()).collect())
        } else {
            None
        };
        Ok(CircuitReport {
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            matrix: graph.to_string(),
            explanation: verdict.to_string(),
            has_circuit: circuit.is_some(),
            circuit,
        })
    }

    /// Writes the report as pretty JSON.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let mut file = fs::File::create(path)?;
        let content = serde_json::to_string_pretty(self)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

impl fmt::Display for CircuitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Graph has {} vertices, and {} edges.",
            self.vertices, self.edges
        )?;
        write!(f, "{}", self.matrix)?;
        writeln!(f, "{}", self.explanation)?;
        if let Some(circuit) = &self.circuit {
            writeln!(f, "Graph has the following Euler Circuit:")?;
            writeln!(f, "{}", circuit.iter().format(" -> "))?;
        }
        Ok(())
    }
}
