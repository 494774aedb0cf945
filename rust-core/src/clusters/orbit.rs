use log::debug;
use serde::{Deserialize, Serialize};

use crate::clusters::cluster::Cluster;
use crate::config::EngineConfig;
use crate::symmetries::symmetry_operations::SymmetryOperation;

/// All symmetry-distinct images of a base cluster, each containing a site at the origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Orbit {
    members: Vec<Cluster>,
    equilateral: bool,
}

impl Orbit {
    pub fn members(&self) -> &[Cluster] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether the members were generated on the equilateral path
    pub fn is_equilateral(&self) -> bool {
        self.equilateral
    }

    /// Whether a cluster with exactly these (canonically ordered) sites is a member
    pub fn contains(&self, cluster: &Cluster) -> bool {
        self.members.iter().any(|m| m.sites() == cluster.sites())
    }

    pub fn cluster_size(&self) -> usize {
        self.members.first().map_or(0, Cluster::size)
    }
}

/// Generate the symmetry orbit of an already scaled `cluster` under `ops`.
///
/// Equilateral clusters are anchored on site 0 only: any site could serve as anchor and the
/// images would coincide after sorting. Other clusters are anchored on every site in turn,
/// because which site sits on the lattice point is part of the placement. The orbit always has
/// at least one member.
pub fn find_orbit(ops: &[SymmetryOperation], cluster: &Cluster, config: &EngineConfig) -> Orbit {
    let decimals = config.orbit_decimals;
    let equilateral = cluster.is_equilateral(config.equilateral_tolerance);

    let mut members: Vec<Cluster> = Vec::new();
    if equilateral {
        let anchored = cluster.anchored_at(0);
        for op in ops {
            let image = anchored.transformed(op, decimals).sorted_by_coordinates();
            if !members.iter().any(|m| m.sites() == image.sites()) {
                members.push(image);
            }
        }
    } else {
        for anchor in 0..cluster.size() {
            let anchored = cluster.anchored_at(anchor);
            for op in ops {
                let image = anchored.transformed(op, decimals).sorted_by_coordinates();
                if !members.iter().any(|m| m.sites() == image.sites()) {
                    members.push(image);
                }
            }
        }
        members = members
            .into_iter()
            .map(|m| m.sorted_by_distance_signature(decimals))
            .collect();
    }

    if members.is_empty() {
        // No operations supplied: the anchored cluster is its own orbit
        let anchored = cluster.anchored_at(0).canonicalized(config.equilateral_tolerance, decimals);
        members.push(anchored);
    }

    debug!(
        "orbit of {}-site {} cluster: {} members ({} path)",
        cluster.size(),
        cluster.term_type(),
        members.len(),
        if equilateral { "equilateral" } else { "general" }
    );

    Orbit {
        members,
        equilateral,
    }
}
