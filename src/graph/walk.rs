//! Append-only vertex sequences produced by the circuit builder.
use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graph::ids::VertexId;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WalkError {
    #[error("walk is full: capacity {capacity} reached")]
    CapacityExceeded { capacity: usize },
}

/// A recorded walk: vertices are only ever appended, and the capacity is
/// fixed when the walk is created. A circuit over `E` edges occupies
/// exactly `E + 1` slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Walk {
    vertices: Vec<VertexId>,
    capacity: usize,
}

impl Walk {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn append(&mut self, vertex: VertexId) -> Result<(), WalkError> {
        if self.vertices.len() == self.capacity {
            return Err(WalkError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.vertices.push(vertex);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn first(&self) -> Option<VertexId> {
        self.vertices.first().copied()
    }

    pub fn last(&self) -> Option<VertexId> {
        self.vertices.last().copied()
    }

    pub fn get(&self, index: usize) -> Option<VertexId> {
        self.vertices.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.iter().copied()
    }

    pub fn as_slice(&self) -> &[VertexId] {
        &self.vertices
    }
}

impl fmt::Display for Walk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.vertices.iter().format(" -> "))
    }
}
