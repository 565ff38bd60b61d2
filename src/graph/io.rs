//! I/O support: whitespace-separated matrix text plus JSON/RON interfaces.
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use ron::ser::PrettyConfig;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

use crate::graph::core::{Graph, GraphError};

#[derive(Debug, Error)]
pub enum TextError {
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: String },
    #[error("invalid token {token:?}, expected an integer")]
    InvalidToken { token: String },
    #[error("number of vertices must be positive, got {value}")]
    VertexCount { value: i64 },
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),
}

/// Reader for the textual graph format: the vertex count `n`, then `n * n`
/// multiplicities in row-major order, all whitespace-separated. A source
/// may carry several graphs back to back.
pub struct GraphText<'a> {
    tokens: std::str::SplitWhitespace<'a>,
}

impl<'a> GraphText<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            tokens: source.split_whitespace(),
        }
    }

    /// Next graph in the stream, or `None` once the source is drained.
    pub fn next_graph(&mut self) -> Result<Option<Graph>, TextError> {
        let Some(token) = self.tokens.next() else {
            return Ok(None);
        };
        let count = parse_int(token)?;
        if count <= 0 {
            return Err(TextError::VertexCount { value: count });
        }
        let vertices = count as usize;
        let mut rows = Vec::with_capacity(vertices);
        for row in 0..vertices {
            let mut entries = Vec::with_capacity(vertices);
            for col in 0..vertices {
                let token = self.tokens.next().ok_or_else(|| TextError::UnexpectedEof {
                    expected: format!("matrix entry ({}, {})", row, col),
                })?;
                let value = parse_int(token)?;
                if value < 0 {
                    return Err(TextError::Graph(GraphError::NegativeMultiplicity {
                        row,
                        col,
                        value,
                    }));
                }
                entries.push(value as u64);
            }
            rows.push(entries);
        }
        Ok(Some(Graph::from_rows(rows)?))
    }

    pub fn parse_all(source: &str) -> Result<Vec<Graph>, TextError> {
        let mut reader = GraphText::new(source);
        let mut graphs = Vec::new();
        while let Some(graph) = reader.next_graph()? {
            graphs.push(graph);
        }
        Ok(graphs)
    }

    /// Writes a graph back in the same format: the vertex count, then the
    /// matrix row by row.
    pub fn render(graph: &Graph) -> String {
        format!("{}\n{}", graph.vertex_count(), graph)
    }
}

fn parse_int(token: &str) -> Result<i64, TextError> {
    token.parse::<i64>().map_err(|_| TextError::InvalidToken {
        token: token.to_string(),
    })
}

#[derive(Debug, Error)]
pub enum IoError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("ron error: {0}")]
    Ron(#[from] ron::Error),
    #[error("ron parse error: {0}")]
    RonParse(#[from] ron::error::SpannedError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn to_json_string<T>(value: &T) -> Result<String, IoError>
where
    T: Serialize,
{
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn from_json_str<T>(s: &str) -> Result<T, IoError>
where
    T: DeserializeOwned,
{
    Ok(serde_json::from_str(s)?)
}

pub fn write_json<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> Result<(), IoError> {
    let mut file = File::create(path)?;
    let content = to_json_string(value)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

pub fn read_json<P: AsRef<Path>, T: DeserializeOwned>(path: P) -> Result<T, IoError> {
    let mut file = File::open(path)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    from_json_str(&content)
}

pub fn to_ron_string<T>(value: &T) -> Result<String, IoError>
where
    T: Serialize,
{
    let mut pretty = PrettyConfig::default();
    pretty.new_line = "\n".into();
    Ok(ron::ser::to_string_pretty(value, pretty)?)
}

pub fn from_ron_str<T>(s: &str) -> Result<T, IoError>
where
    T: DeserializeOwned,
{
    Ok(ron::from_str(s)?)
}

pub fn write_ron<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> Result<(), IoError> {
    let mut file = File::create(path)?;
    let content = to_ron_string(value)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

pub fn read_ron<P: AsRef<Path>, T: DeserializeOwned>(path: P) -> Result<T, IoError> {
    let mut file = File::open(path)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    from_ron_str(&content)
}
