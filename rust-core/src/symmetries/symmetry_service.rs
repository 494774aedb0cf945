use std::path::Path;

use anyhow::Context;
use log::debug;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::config::STABILIZER_TOLERANCE;
use crate::error::{CeError, Result};
use crate::lattice::geometry::centroid;
use crate::symmetries::point_groups::generate_cubic_operations;
use crate::symmetries::symmetry_operations::SymmetryOperation;

/// Source of symmetry operations for the orbit and decoration machinery.
///
/// The engine never derives symmetry itself; a symmetry-analysis backend answers these two
/// questions and hands back plain matrices.
pub trait SymmetryService {
    /// Point operations of the parent lattice's space group.
    fn space_group_operations(&self) -> Result<Vec<SymmetryOperation>>;

    /// Point-group operations of a cluster shape, acting about the centroid of `sites`.
    /// Only requested for clusters with three or more sites.
    fn point_group_operations(&self, sites: &[Vector3<f64>]) -> Result<Vec<SymmetryOperation>>;
}

#[derive(Debug, Serialize, Deserialize)]
struct SymmetryTable {
    operations: Vec<[[f64; 3]; 3]>,
}

/// A [`SymmetryService`] backed by an explicit table of operations.
///
/// Point groups of cluster shapes are answered with the stabilizer of the centred site set
/// inside the table, i.e. the lattice operations that permute the cluster's sites.
#[derive(Debug, Clone)]
pub struct TabulatedSymmetry {
    operations: Vec<SymmetryOperation>,
    tolerance: f64,
}

impl TabulatedSymmetry {
    pub fn new(operations: Vec<SymmetryOperation>) -> Self {
        Self {
            operations,
            tolerance: STABILIZER_TOLERANCE,
        }
    }

    /// The full cubic group m-3m.
    pub fn cubic() -> Self {
        Self::new(generate_cubic_operations())
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn operations(&self) -> &[SymmetryOperation] {
        &self.operations
    }

    /// Parse `{"operations": [[[r00, r01, r02], [r10, ...], [r20, ...]], ...]}` (row-major).
    pub fn from_json_str(text: &str) -> anyhow::Result<Self> {
        let table: SymmetryTable =
            serde_json::from_str(text).context("parsing symmetry operation table")?;
        anyhow::ensure!(
            !table.operations.is_empty(),
            "symmetry table contains no operations"
        );
        Ok(Self::new(
            table
                .operations
                .into_iter()
                .map(SymmetryOperation::from_rows)
                .collect(),
        ))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading symmetry file {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Whether `op`, applied about the centroid, maps the site set onto itself.
    fn stabilizes(&self, op: &SymmetryOperation, sites: &[Vector3<f64>]) -> bool {
        let center = centroid(sites);
        sites.iter().all(|site| {
            let image = op.apply_about(site, &center);
            sites.iter().any(|other| (image - other).norm() < self.tolerance)
        })
    }
}

impl SymmetryService for TabulatedSymmetry {
    fn space_group_operations(&self) -> Result<Vec<SymmetryOperation>> {
        if self.operations.is_empty() {
            return Err(CeError::Symmetry("no operations tabulated".to_string()));
        }
        Ok(self.operations.clone())
    }

    fn point_group_operations(&self, sites: &[Vector3<f64>]) -> Result<Vec<SymmetryOperation>> {
        let stabilizer: Vec<SymmetryOperation> = self
            .operations
            .iter()
            .filter(|op| self.stabilizes(op, sites))
            .cloned()
            .collect();
        debug!(
            "point group of {}-site cluster: {} of {} operations",
            sites.len(),
            stabilizer.len(),
            self.operations.len()
        );
        if stabilizer.is_empty() {
            // The identity always stabilizes; an empty result means the table lacks it
            return Ok(vec![SymmetryOperation::identity()]);
        }
        Ok(stabilizer)
    }
}
