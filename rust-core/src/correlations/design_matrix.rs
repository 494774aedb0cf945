use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::clusters::decoration::Decoration;
use crate::correlations::count_table::StructureCounts;

/// One regression feature: a canonical decoration of one catalog cluster.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CorrelationColumn {
    pub cluster: usize,
    pub decoration: Decoration,
}

/// Count tables of many structures flattened into rows of one feature matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<CorrelationColumn>,
    pub structures: Vec<String>,
    pub rows: Vec<Vec<f64>>,
    /// Per-atom energy of each row, where known
    pub energies: Vec<Option<f64>>,
}

impl CorrelationMatrix {
    /// Build the matrix from per-structure counts.
    ///
    /// Columns are every (cluster, decoration) pair seen in any structure, sorted; entries a
    /// structure never produced are 0. `energies` looks up the per-atom energy by structure
    /// name.
    pub fn from_counts(counts: &[StructureCounts], energies: &HashMap<String, f64>) -> Self {
        let columns: Vec<CorrelationColumn> = counts
            .iter()
            .flat_map(|structure| {
                structure
                    .clusters
                    .iter()
                    .enumerate()
                    .filter_map(|(cluster, count)| count.as_ref().map(|c| (cluster, c)))
                    .flat_map(|(cluster, count)| {
                        count.table.iter().map(move |(decoration, _)| CorrelationColumn {
                            cluster,
                            decoration: decoration.clone(),
                        })
                    })
            })
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let position: HashMap<&CorrelationColumn, usize> =
            columns.iter().enumerate().map(|(i, c)| (c, i)).collect();

        let mut rows = Vec::with_capacity(counts.len());
        for structure in counts {
            let mut row = vec![0.0; columns.len()];
            for (cluster, count) in structure.clusters.iter().enumerate() {
                let Some(count) = count else { continue };
                for (decoration, value) in count.table.iter() {
                    let key = CorrelationColumn {
                        cluster,
                        decoration: decoration.clone(),
                    };
                    if let Some(&i) = position.get(&key) {
                        row[i] = value;
                    }
                }
            }
            rows.push(row);
        }

        Self {
            structures: counts.iter().map(|s| s.name.clone()).collect(),
            energies: counts.iter().map(|s| energies.get(&s.name).copied()).collect(),
            columns,
            rows,
        }
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Value at (`structure`, `column`), `None` if either index is out of range
    pub fn value(&self, structure: usize, column: usize) -> Option<f64> {
        self.rows.get(structure).and_then(|row| row.get(column)).copied()
    }

    pub fn column_index(&self, cluster: usize, decoration: &Decoration) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.cluster == cluster && &c.decoration == decoration)
    }
}
