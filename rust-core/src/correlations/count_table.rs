use std::collections::BTreeMap;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::clusters::decoration::Decoration;
use crate::error::CeError;
use crate::lattice::geometry::round_to;

/// Tally of canonical decorations for one cluster in one structure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountTable {
    entries: BTreeMap<Decoration, f64>,
}

impl CountTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, decoration: Decoration, weight: f64) {
        *self.entries.entry(decoration).or_insert(0.0) += weight;
    }

    /// Divide every entry by `denominator` and round to `decimals`.
    pub fn normalize(&mut self, denominator: f64, decimals: i32) {
        for value in self.entries.values_mut() {
            *value = round_to(*value / denominator, decimals);
        }
    }

    pub fn get(&self, decoration: &Decoration) -> Option<f64> {
        self.entries.get(decoration).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Decoration, f64)> {
        self.entries.iter().map(|(d, v)| (d, *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum over all entries
    pub fn total(&self) -> f64 {
        self.entries.values().sum()
    }
}

// Serialized as an object keyed by the decoration's display form, e.g. {"[Fe, Ni]": 0.5}
impl Serialize for CountTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (decoration, value) in &self.entries {
            map.serialize_entry(&decoration.to_string(), value)?;
        }
        map.end()
    }
}

/// Result for one base cluster in one structure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterCount {
    pub multiplicity: usize,
    pub table: CountTable,
    /// Placements skipped because some site had no atom within the match threshold
    pub unmatched_placements: usize,
}

/// Counts for every base cluster of one structure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructureCounts {
    pub name: String,
    /// Indexed like the orbit catalog; `None` where the cluster is absent from the structure
    pub clusters: Vec<Option<ClusterCount>>,
    /// Catalog indices of clusters that could not be laid onto the structure
    pub coverage_gaps: Vec<usize>,
}

impl StructureCounts {
    pub fn cluster(&self, index: usize) -> Option<&ClusterCount> {
        self.clusters.get(index).and_then(Option::as_ref)
    }
}

#[derive(Debug)]
pub struct StructureFailure {
    pub structure: String,
    pub error: CeError,
}

/// Outcome of counting a batch of structures.
#[derive(Debug, Default)]
pub struct CountReport {
    /// Successfully counted structures, in input order
    pub counts: Vec<StructureCounts>,
    pub failures: Vec<StructureFailure>,
    /// Whether the run stopped early on a cancellation request
    pub cancelled: bool,
}

impl CountReport {
    pub fn is_complete(&self) -> bool {
        !self.cancelled && self.failures.is_empty()
    }

    /// All counts, or the first failure; `CeError::Cancelled` if the run stopped early.
    pub fn into_result(self) -> Result<Vec<StructureCounts>, CeError> {
        if self.cancelled {
            return Err(CeError::Cancelled);
        }
        match self.failures.into_iter().next() {
            Some(failure) => Err(failure.error),
            None => Ok(self.counts),
        }
    }
}
