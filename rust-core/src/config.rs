// Constants and the runtime configuration object

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

// Tolerances
pub const BASE_VECTOR_TOLERANCE: f64 = 1e-10; // For construction of base matrices
pub const EQUILATERAL_TOLERANCE: f64 = 1e-3; // Site-to-centroid spread for equilateral clusters
pub const STABILIZER_TOLERANCE: f64 = 1e-3; // Site matching when filtering point-group operations
pub const MATCH_THRESHOLD: f64 = 0.1; // Cartesian distance for assigning a cluster site to an atom

// Rounding precisions (decimal places)
pub const PBC_DECIMALS: i32 = 3;
pub const ORBIT_DECIMALS: i32 = 3;
pub const DECORATION_DECIMALS: i32 = 5;
pub const COUNT_DECIMALS: i32 = 5;

/// Runtime knobs for orbit generation and correlation counting.
///
/// Passed explicitly into the orbit generator and the counter; nothing in the crate reads
/// process-wide state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum distance between a cluster site and the atom it is assigned to
    pub match_threshold: f64,
    /// Allowed spread of site-to-centroid distances for the equilateral ordering
    pub equilateral_tolerance: f64,
    /// Decimals kept in direct coordinates before the modulo of the PBC wrap
    pub pbc_decimals: i32,
    /// Decimals kept after applying a space-group operation to a cluster
    pub orbit_decimals: i32,
    /// Decimals kept after applying a point-group operation to a decorated cluster
    pub decoration_decimals: i32,
    /// Decimals kept in normalized counts
    pub count_decimals: i32,
    /// Species convention, e.g. `["Fe", "Ni", "Cr"]`. Empty accepts any non-empty label.
    pub species: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            match_threshold: MATCH_THRESHOLD,
            equilateral_tolerance: EQUILATERAL_TOLERANCE,
            pbc_decimals: PBC_DECIMALS,
            orbit_decimals: ORBIT_DECIMALS,
            decoration_decimals: DECORATION_DECIMALS,
            count_decimals: COUNT_DECIMALS,
            species: Vec::new(),
        }
    }
}

impl EngineConfig {
    /// Load a configuration from a JSON file. Missing keys fall back to the defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn with_species<I, S>(mut self, species: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.species = species.into_iter().map(Into::into).collect();
        self
    }

    /// Whether `label` is acceptable under the species convention.
    pub fn accepts_species(&self, label: &str) -> bool {
        if label.is_empty() {
            return false;
        }
        self.species.is_empty() || self.species.iter().any(|s| s == label)
    }
}
