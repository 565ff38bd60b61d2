//! # Undirected multigraphs over dense symmetric adjacency matrices
//!
//! A graph on `n` vertices is stored as an `n x n` matrix of edge
//! multiplicities with `m[u][v] == m[v][u]`. Parallel edges are first-class:
//! `m[u][v] = k` means `k` distinct traversable edges between `u` and `v`.
//! A self-loop occupies one diagonal cell, counts once toward the edge
//! total, and contributes 2 to the degree of its vertex.
//!
//! ## Example
//!
//! ```rust
//! use RustECT::graph::*;
//!
//! let graph = Graph::from_rows(vec![
//!     vec![0, 2, 0],
//!     vec![2, 0, 2],
//!     vec![0, 2, 0],
//! ]).unwrap();
//!
//! assert_eq!(graph.vertex_count(), 3);
//! assert_eq!(graph.edge_count(), 4);
//! assert_eq!(graph.degree(VertexId::new(1)), 4);
//! ```

pub mod core;
pub mod ids;
pub mod io;
pub mod matrix;
pub mod walk;

pub use self::core::{Graph, GraphError};
pub use ids::VertexId;
pub use matrix::AdjMatrix;
pub use walk::{Walk, WalkError};
