//! # RustECT - Euler circuits over dense adjacency matrices
//!
//! Decides whether an undirected multigraph, stored as a dense symmetric
//! adjacency matrix with parallel edges and self-loops, contains an Euler
//! circuit (a closed walk traversing every edge exactly once), and
//! constructs one explicitly when it does.
//!
//! ```rust
//! use RustECT::analysis::{CircuitBuilder, euler_verdict};
//! use RustECT::graph::Graph;
//!
//! let triangle = Graph::from_rows(vec![
//!     vec![0, 1, 1],
//!     vec![1, 0, 1],
//!     vec![1, 1, 0],
//! ]).unwrap();
//!
//! assert!(euler_verdict(&triangle).holds());
//! let walk = CircuitBuilder::new(&triangle).build().unwrap();
//! assert_eq!(walk.to_string(), "0 -> 1 -> 2 -> 0");
//! ```

pub mod analysis;
pub mod config;
pub mod graph;
pub mod report;
