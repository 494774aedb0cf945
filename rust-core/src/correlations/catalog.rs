use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::clusters::cluster::Cluster;
use crate::clusters::orbit::{find_orbit, Orbit};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::symmetries::symmetry_operations::SymmetryOperation;
use crate::symmetries::symmetry_service::SymmetryService;

/// A base cluster together with its orbit and the point group of every orbit member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterOrbit {
    base: Cluster,
    orbit: Orbit,
    /// One entry per orbit member; `None` for clusters with fewer than three sites
    point_groups: Vec<Option<Vec<SymmetryOperation>>>,
}

impl ClusterOrbit {
    /// The base cluster, already scaled to its distance convention
    pub fn base(&self) -> &Cluster {
        &self.base
    }

    pub fn orbit(&self) -> &Orbit {
        &self.orbit
    }

    pub fn point_group(&self, member: usize) -> Option<&[SymmetryOperation]> {
        self.point_groups.get(member).and_then(|ops| ops.as_deref())
    }

    pub fn cluster_size(&self) -> usize {
        self.base.size()
    }

    /// Orbit members per site, `|orbit| / cluster_size`.
    pub fn multiplicity(&self) -> usize {
        let size = self.cluster_size();
        if size == 0 {
            return 0;
        }
        if self.orbit.len() % size != 0 {
            debug!(
                "orbit of {} members is not divisible by cluster size {}",
                self.orbit.len(),
                size
            );
        }
        self.orbit.len() / size
    }
}

/// Orbits of every base cluster, built once and shared read-only by all structures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrbitCatalog {
    clusters: Vec<ClusterOrbit>,
}

impl OrbitCatalog {
    /// Scale each base cluster, generate its orbit under the space-group operations and
    /// request point groups for the members of clusters with three or more sites.
    pub fn build(
        clusters: &[Cluster],
        symmetry: &dyn SymmetryService,
        config: &EngineConfig,
    ) -> Result<Self> {
        let ops = symmetry.space_group_operations()?;
        info!(
            "building orbits for {} clusters with {} space-group operations",
            clusters.len(),
            ops.len()
        );

        let mut entries = Vec::with_capacity(clusters.len());
        for cluster in clusters {
            let base = cluster.scaled();
            let orbit = find_orbit(&ops, &base, config);
            let point_groups = orbit
                .members()
                .iter()
                .map(|member| {
                    if member.size() >= 3 {
                        symmetry.point_group_operations(member.sites()).map(Some)
                    } else {
                        Ok(None)
                    }
                })
                .collect::<Result<Vec<_>>>()?;
            entries.push(ClusterOrbit {
                base,
                orbit,
                point_groups,
            });
        }
        Ok(Self { clusters: entries })
    }

    pub fn clusters(&self) -> &[ClusterOrbit] {
        &self.clusters
    }

    pub fn get(&self, index: usize) -> Option<&ClusterOrbit> {
        self.clusters.get(index)
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }
}
