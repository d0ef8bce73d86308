//! Simulation parameters.

use serde::{Deserialize, Serialize};

/// Startup configuration for the simulation world.
///
/// Every field has a default, so a JSON file only needs to name the fields
/// it changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Simulation area width.
    pub width: f32,
    /// Simulation area height.
    pub height: f32,
    /// Maximum entity population (hard cap on internal spawn paths).
    pub max_entities: usize,
    /// Herbivores placed when the world is populated.
    pub initial_herbivores: usize,
    /// Carnivores placed when the world is populated.
    pub initial_carnivores: usize,
    /// Plants placed when the world is populated.
    pub initial_plants: usize,
    /// Seed for the world's random generator. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            max_entities: 500,
            initial_herbivores: 20,
            initial_carnivores: 5,
            initial_plants: 30,
            seed: None,
        }
    }
}

impl Params {
    /// Loads parameters from a JSON file.
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let json = std::fs::read_to_string(path)?;
        let params = serde_json::from_str(&json)?;
        Ok(params)
    }
}
