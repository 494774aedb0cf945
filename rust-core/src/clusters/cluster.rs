use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::clusters::canonical::{sort_by_coordinates, sort_by_distance_signature};
use crate::error::{CeError, Result};
use crate::interfaces::TermType;
use crate::lattice::base_matrix::BaseMatrix;
use crate::lattice::geometry::{centroid, distance, max_pairwise_distance, round_vector};
use crate::symmetries::symmetry_operations::SymmetryOperation;

/// A geometric cluster: an ordered list of Cartesian sites plus the characteristic distances
/// that fix its size.
///
/// Clusters are values. Every transformation returns a new cluster, so orbit members never
/// alias one another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    sites: Vec<Vector3<f64>>,
    scale_refs: Vec<f64>,
    term_type: TermType,
}

impl Cluster {
    /// Create a cluster. Multi-site clusters need at least one characteristic distance.
    pub fn new(
        sites: Vec<Vector3<f64>>,
        scale_refs: Vec<f64>,
        term_type: TermType,
    ) -> Result<Self> {
        if sites.is_empty() {
            return Err(CeError::InvalidCluster("cluster has no sites".to_string()));
        }
        if sites.len() >= 2 && scale_refs.is_empty() {
            return Err(CeError::InvalidCluster(format!(
                "{}-site cluster has no characteristic distance",
                sites.len()
            )));
        }
        if scale_refs.iter().any(|d| !d.is_finite() || *d < 0.0) {
            return Err(CeError::InvalidCluster(format!(
                "characteristic distances must be finite and non-negative: {:?}",
                scale_refs
            )));
        }
        Ok(Self {
            sites,
            scale_refs,
            term_type,
        })
    }

    /// Same metadata, new sites.
    fn with_sites(&self, sites: Vec<Vector3<f64>>) -> Self {
        Self {
            sites,
            scale_refs: self.scale_refs.clone(),
            term_type: self.term_type,
        }
    }

    pub fn sites(&self) -> &[Vector3<f64>] {
        &self.sites
    }

    pub fn scale_refs(&self) -> &[f64] {
        &self.scale_refs
    }

    pub fn term_type(&self) -> TermType {
        self.term_type
    }

    pub fn size(&self) -> usize {
        self.sites.len()
    }

    pub fn centroid(&self) -> Vector3<f64> {
        centroid(&self.sites)
    }

    pub fn max_pair_distance(&self) -> f64 {
        max_pairwise_distance(&self.sites)
    }

    /// Scale uniformly so that the largest pairwise distance becomes `target_unit`.
    ///
    /// A single-site cluster has no extent; its scale factor is 0 and the site collapses to
    /// the origin.
    pub fn scaled_to(&self, target_unit: f64) -> Self {
        let max_dist = self.max_pair_distance();
        let scale = if max_dist != 0.0 {
            target_unit / max_dist
        } else {
            0.0
        };
        self.with_sites(self.sites.iter().map(|s| s * scale).collect())
    }

    /// Scale to the cluster's own convention, `max(scale_refs)`.
    pub fn scaled(&self) -> Self {
        let target = self.scale_refs.iter().copied().fold(0.0_f64, f64::max);
        self.scaled_to(target)
    }

    pub fn translated(&self, shift: &Vector3<f64>) -> Self {
        self.with_sites(self.sites.iter().map(|s| s + shift).collect())
    }

    /// Translate so that site `index` sits at the origin.
    pub fn anchored_at(&self, index: usize) -> Self {
        let shift = -self.sites[index];
        self.translated(&shift)
    }

    /// Apply a point operation about the origin and round the image to `decimals`.
    pub fn transformed(&self, op: &SymmetryOperation, decimals: i32) -> Self {
        self.with_sites(
            self.sites
                .iter()
                .map(|s| round_vector(&op.apply(s), decimals))
                .collect(),
        )
    }

    /// Wrap every site into the primitive cell of `basis`.
    pub fn wrapped(&self, basis: &BaseMatrix, decimals: i32) -> Self {
        self.with_sites(self.sites.iter().map(|s| basis.wrap(s, decimals)).collect())
    }

    /// True when every site lies at the same distance from the centroid (within `tol`).
    /// One- and two-site clusters are trivially equilateral.
    pub fn is_equilateral(&self, tol: f64) -> bool {
        if self.sites.len() <= 2 {
            return true;
        }
        let center = self.centroid();
        let reference = distance(&center, &self.sites[0]);
        self.sites
            .iter()
            .all(|s| (distance(&center, s) - reference).abs() <= tol)
    }

    /// Sites sorted by their coordinate tuple.
    pub fn sorted_by_coordinates(&self) -> Self {
        self.with_sites(sort_by_coordinates(&self.sites))
    }

    /// Sites sorted by distance signature, coordinates breaking ties.
    pub fn sorted_by_distance_signature(&self, decimals: i32) -> Self {
        self.with_sites(sort_by_distance_signature(&self.sites, decimals))
    }

    /// Canonical site order: coordinate order for equilateral clusters, distance-signature
    /// order otherwise.
    pub fn canonicalized(&self, tol: f64, decimals: i32) -> Self {
        if self.is_equilateral(tol) {
            self.sorted_by_coordinates()
        } else {
            self.sorted_by_distance_signature(decimals)
        }
    }
}
