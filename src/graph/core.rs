//! Undirected multigraphs: construction, queries and rendering.
use std::fmt::{self, Write as FmtWrite};
use std::fs;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graph::ids::VertexId;
use crate::graph::matrix::AdjMatrix;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    #[error("graph must have at least one vertex")]
    NoVertices,
    #[error("adjacency matrix is not symmetric at ({row}, {col})")]
    Asymmetric { row: usize, col: usize },
    #[error("row {row} has {found} entries, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("number of edges cannot be negative: {value} at ({row}, {col})")]
    NegativeMultiplicity { row: usize, col: usize, value: i64 },
}

/// An undirected multigraph with parallel edges and self-loops, immutable
/// once constructed. `edges` holds multiplicities; a self-loop occupies one
/// diagonal cell, counts once toward the edge total, and contributes 2 to
/// the degree of its vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    vertices: usize,
    edges: AdjMatrix,
    total_edges: u64,
}

impl Graph {
    pub fn from_matrix(edges: AdjMatrix) -> Result<Self, GraphError> {
        if edges.size() == 0 {
            return Err(GraphError::NoVertices);
        }
        if let Some((row, col)) = edges.symmetry_violation() {
            return Err(GraphError::Asymmetric { row, col });
        }
        let total_edges = edges.upper_triangle_sum();
        Ok(Self {
            vertices: edges.size(),
            edges,
            total_edges,
        })
    }

    pub fn from_rows(rows: Vec<Vec<u64>>) -> Result<Self, GraphError> {
        Self::from_matrix(AdjMatrix::from_rows(rows)?)
    }

    /// Uniform random multigraph: every unordered vertex pair, the diagonal
    /// included, draws a multiplicity in `0..=max_parallel`.
    pub fn random(vertices: usize, max_parallel: u64) -> Result<Self, GraphError> {
        Self::random_with_rng(vertices, max_parallel, &mut rand::rng())
    }

    pub fn random_with_rng<R: Rng>(
        vertices: usize,
        max_parallel: u64,
        rng: &mut R,
    ) -> Result<Self, GraphError> {
        if vertices == 0 {
            return Err(GraphError::NoVertices);
        }
        let mut edges = AdjMatrix::zeroed(vertices);
        for i in 0..vertices {
            for j in i..vertices {
                edges.set_symmetric(i, j, rng.random_range(0..=max_parallel));
            }
        }
        Ok(Self {
            vertices,
            total_edges: edges.upper_triangle_sum(),
            edges,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices
    }

    /// Total number of edges: parallel edges and self-loops each count once
    /// per occurrence.
    pub fn edge_count(&self) -> u64 {
        self.total_edges
    }

    /// Multiplicity of the edge `{u, v}`. Out-of-range vertices have no
    /// edges, so the lookup answers 0 rather than panicking.
    pub fn multiplicity(&self, u: VertexId, v: VertexId) -> u64 {
        self.edges.get_checked(u.index(), v.index()).unwrap_or(0)
    }

    /// Degree of `v`, a self-loop contributing 2.
    pub fn degree(&self, v: VertexId) -> u64 {
        let row = self.edges.row(v.index());
        row.iter().sum::<u64>() + row[v.index()]
    }

    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertices).map(VertexId::from_usize)
    }

    pub fn matrix(&self) -> &AdjMatrix {
        &self.edges
    }

    pub fn to_dot(&self) -> String {
        let mut dot = String::new();
        let _ = writeln!(&mut dot, "graph G {{");
        let _ = writeln!(&mut dot, "    node [shape=circle, fontname=\"Helvetica\"];");
        for v in 0..self.vertices {
            let _ = writeln!(&mut dot, "    {};", v);
        }
        for u in 0..self.vertices {
            for v in u..self.vertices {
                for _ in 0..self.edges.get(u, v) {
                    let _ = writeln!(&mut dot, "    {} -- {};", u, v);
                }
            }
        }
        let _ = writeln!(&mut dot, "}}");
        dot
    }

    pub fn write_dot<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_dot())
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.vertices {
            for col in 0..self.vertices {
                write!(f, "{} ", self.edges.get(row, col))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_triangle() -> Graph {
        Graph::from_rows(vec![vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 0]]).unwrap()
    }

    #[test]
    fn from_rows_validates_shape() {
        let err = Graph::from_rows(vec![vec![0, 1], vec![1]]).unwrap_err();
        assert_eq!(
            err,
            GraphError::Ragged {
                row: 1,
                expected: 2,
                found: 1,
            }
        );

        let err = Graph::from_rows(Vec::new()).unwrap_err();
        assert_eq!(err, GraphError::NoVertices);

        let err = Graph::from_rows(vec![vec![0, 2], vec![1, 0]]).unwrap_err();
        assert_eq!(err, GraphError::Asymmetric { row: 0, col: 1 });
    }

    #[test]
    fn degree_counts_loops_twice() {
        let graph = Graph::from_rows(vec![vec![1, 1], vec![1, 0]]).unwrap();
        assert_eq!(graph.degree(VertexId::new(0)), 3);
        assert_eq!(graph.degree(VertexId::new(1)), 1);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn multiplicity_is_zero_out_of_range() {
        let graph = build_triangle();
        assert_eq!(graph.multiplicity(VertexId::new(0), VertexId::new(7)), 0);
        assert_eq!(graph.multiplicity(VertexId::new(7), VertexId::new(0)), 0);
        assert_eq!(graph.multiplicity(VertexId::new(0), VertexId::new(1)), 1);
    }

    #[test]
    fn display_renders_row_major_grid() {
        let graph = Graph::from_rows(vec![vec![0, 2], vec![2, 0]]).unwrap();
        assert_eq!(graph.to_string(), "0 2 \n2 0 \n");
    }

    #[test]
    fn random_graphs_are_symmetric_and_bounded() {
        use rand::SeedableRng;
        use rand::rngs::StdRng;

        let mut rng = StdRng::seed_from_u64(7);
        let graph = Graph::random_with_rng(6, 5, &mut rng).unwrap();
        assert_eq!(graph.vertex_count(), 6);
        assert!(graph.matrix().symmetry_violation().is_none());
        for u in graph.vertex_ids() {
            for v in graph.vertex_ids() {
                assert!(graph.multiplicity(u, v) <= 5);
            }
        }
    }

    #[test]
    fn dot_lists_one_line_per_parallel_edge() {
        let graph = Graph::from_rows(vec![vec![1, 2], vec![2, 0]]).unwrap();
        let dot = graph.to_dot();
        assert!(dot.starts_with("graph G {"));
        assert_eq!(dot.matches("0 -- 1;").count(), 2);
        assert_eq!(dot.matches("0 -- 0;").count(), 1);
    }
}
