use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, info, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::clusters::decoration::{canonicalize_decoration, Decoration};
use crate::config::EngineConfig;
use crate::correlations::catalog::{ClusterOrbit, OrbitCatalog};
use crate::correlations::count_table::{
    ClusterCount, CountReport, CountTable, StructureCounts, StructureFailure,
};
use crate::error::{CeError, Result};
use crate::interfaces::TermType;
use crate::structures::site_matching::SiteMatcher;
use crate::structures::structure::Structure;

/// Shared flag for stopping a batch between structures.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Counts decorated cluster placements in structures against a prebuilt orbit catalog.
#[derive(Debug, Clone)]
pub struct CorrelationCounter {
    catalog: OrbitCatalog,
    config: EngineConfig,
}

impl CorrelationCounter {
    pub fn new(catalog: OrbitCatalog, config: EngineConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &OrbitCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Count every catalog cluster in one structure.
    ///
    /// A cluster whose base shape cannot be laid onto the structure is reported as a coverage
    /// gap and skipped. Unresolvable species or spins fail the whole structure.
    pub fn count_structure(&self, structure: &Structure) -> Result<StructureCounts> {
        let matcher = SiteMatcher::new(structure, self.config.match_threshold);
        let mut clusters = Vec::with_capacity(self.catalog.len());
        let mut coverage_gaps = Vec::new();

        for (index, entry) in self.catalog.clusters().iter().enumerate() {
            let probe = entry
                .base()
                .wrapped(structure.lattice(), self.config.pbc_decimals);
            if matcher.match_sites(probe.sites()).is_none() {
                let gap = CeError::CoverageGap {
                    cluster: index,
                    structure: structure.name().to_string(),
                };
                warn!("{gap}; skipping");
                coverage_gaps.push(index);
                clusters.push(None);
                continue;
            }
            clusters.push(Some(self.count_cluster(&matcher, entry)?));
        }

        Ok(StructureCounts {
            name: structure.name().to_string(),
            clusters,
            coverage_gaps,
        })
    }

    fn count_cluster(&self, matcher: &SiteMatcher<'_>, entry: &ClusterOrbit) -> Result<ClusterCount> {
        let structure = matcher.structure();
        let term_type = entry.base().term_type();
        let mut table = CountTable::new();
        let mut unmatched_placements = 0;

        for origin in matcher.positions() {
            for (m, member) in entry.orbit().members().iter().enumerate() {
                let placed = member
                    .translated(origin)
                    .wrapped(structure.lattice(), self.config.pbc_decimals);
                let Some(indices) = matcher.match_sites(placed.sites()) else {
                    unmatched_placements += 1;
                    continue;
                };

                let decoration = self.decoration_of(structure, &indices)?;
                let canonical = canonicalize_decoration(
                    &decoration,
                    member.sites(),
                    entry.point_group(m),
                    self.config.decoration_decimals,
                );
                let weight = match term_type {
                    TermType::Chemical => 1.0,
                    TermType::Magnetic => spin_product(structure, &indices)?,
                };
                table.add(canonical, weight);
            }
        }

        if unmatched_placements > 0 {
            debug!(
                "{}: {} placements of a {}-site cluster had unmatched sites",
                structure.name(),
                unmatched_placements,
                entry.cluster_size()
            );
        }

        let denominator = (structure.atom_sum() * entry.cluster_size()) as f64;
        table.normalize(denominator, self.config.count_decimals);
        Ok(ClusterCount {
            multiplicity: entry.multiplicity(),
            table,
            unmatched_placements,
        })
    }

    fn decoration_of(&self, structure: &Structure, indices: &[usize]) -> Result<Decoration> {
        let atoms = structure.atoms();
        for &index in indices {
            let label = &atoms[index].species;
            if !self.config.accepts_species(label) {
                return Err(CeError::UnresolvedSpecies {
                    structure: structure.name().to_string(),
                    atom: index,
                    label: label.clone(),
                });
            }
        }
        Ok(Decoration::new(
            indices.iter().map(|&index| atoms[index].species.as_str()),
        ))
    }

    /// Count a batch of structures, checking `token` before each one.
    ///
    /// Structures are independent; with the `parallel` feature they are spread over the rayon
    /// pool. Successful counts keep the input order.
    pub fn count_all(&self, structures: &[Structure], token: &CancellationToken) -> CountReport {
        let process = |structure: &Structure| -> Option<(String, Result<StructureCounts>)> {
            if token.is_cancelled() {
                return None;
            }
            info!("counting clusters in {}", structure.name());
            Some((structure.name().to_string(), self.count_structure(structure)))
        };

        #[cfg(feature = "parallel")]
        let outcomes: Vec<_> = structures.par_iter().map(process).collect();
        #[cfg(not(feature = "parallel"))]
        let outcomes: Vec<_> = structures.iter().map(process).collect();

        let mut report = CountReport::default();
        for outcome in outcomes {
            match outcome {
                Some((_, Ok(counts))) => report.counts.push(counts),
                Some((structure, Err(error))) => {
                    warn!("{structure} failed: {error}");
                    report.failures.push(StructureFailure { structure, error });
                }
                None => report.cancelled = true,
            }
        }
        if report.cancelled {
            info!(
                "cancelled after {} of {} structures",
                report.counts.len() + report.failures.len(),
                structures.len()
            );
        }
        report
    }
}

fn spin_product(structure: &Structure, indices: &[usize]) -> Result<f64> {
    indices
        .iter()
        .map(|&index| {
            structure.atoms()[index]
                .spin
                .ok_or_else(|| CeError::UnresolvedSpin {
                    structure: structure.name().to_string(),
                    atom: index,
                })
        })
        .product()
}
