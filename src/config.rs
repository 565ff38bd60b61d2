use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EcConfig {
    #[serde(default = "default_start_vertex")]
    pub start_vertex: u32,
    #[serde(default)]
    pub random: RandomConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RandomConfig {
    #[serde(default = "default_vertices")]
    pub vertices: usize,
    #[serde(default = "default_max_parallel")]
    pub max_parallel: u64,
    #[serde(default = "default_rounds")]
    pub rounds: usize,
}

impl Default for EcConfig {
    fn default() -> Self {
        Self {
            start_vertex: default_start_vertex(),
            random: RandomConfig::default(),
        }
    }
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            vertices: default_vertices(),
            max_parallel: default_max_parallel(),
            rounds: default_rounds(),
        }
    }
}

impl EcConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: EcConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }
}

// Defaults for the random mode: 6-vertex graphs, multiplicities swept
// up to 5, five graphs per step.
fn default_start_vertex() -> u32 {
    0
}

fn default_vertices() -> usize {
    6
}

fn default_max_parallel() -> u64 {
    5
}

fn default_rounds() -> usize {
    5
}
