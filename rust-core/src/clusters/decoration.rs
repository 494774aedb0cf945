use std::fmt;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::clusters::canonical::distance_signature_order;
use crate::lattice::geometry::{centroid, round_vector};
use crate::symmetries::symmetry_operations::SymmetryOperation;

/// One species label per cluster site, in the cluster's site order.
///
/// Ordering is lexicographic over the labels, which is what makes "the smallest equivalent
/// decoration" a well-defined canonical key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Decoration(Vec<String>);

impl Decoration {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(labels.into_iter().map(Into::into).collect())
    }

    pub fn labels(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Decoration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

/// Relabel the sites of a decorated cluster after applying `op` about its centroid.
///
/// The rotated, rounded site set is put into general order and its labels are read back into
/// the frame of the input order (the general order of the input sites). When `op` permutes the
/// sites, the result is the decoration seen after the operation.
pub fn apply_operation(
    op: &SymmetryOperation,
    decoration: &Decoration,
    sites: &[Vector3<f64>],
    decimals: i32,
) -> Decoration {
    let rounded: Vec<Vector3<f64>> = sites.iter().map(|s| round_vector(s, decimals)).collect();
    let frame = distance_signature_order(&rounded, decimals);

    let center = centroid(&rounded);
    let rotated: Vec<Vector3<f64>> = rounded
        .iter()
        .map(|s| round_vector(&op.apply_about(s, &center), decimals))
        .collect();
    let order = distance_signature_order(&rotated, decimals);

    let mut labels = vec![String::new(); sites.len()];
    for (slot, &source) in frame.iter().zip(order.iter()) {
        labels[*slot] = decoration.0[source].clone();
    }
    Decoration(labels)
}

/// Canonical form of a decoration under the cluster's point group.
///
/// * 1 site: returned unchanged.
/// * 2 sites: identical labels unchanged, otherwise sorted. This applies whether or not a
///   swap of the two sites is an actual symmetry of the pair.
/// * 3+ sites: the lexicographically smallest decoration reachable by any operation of
///   `point_group`. The input itself is always a candidate.
pub fn canonicalize_decoration(
    decoration: &Decoration,
    sites: &[Vector3<f64>],
    point_group: Option<&[SymmetryOperation]>,
    decimals: i32,
) -> Decoration {
    match decoration.len() {
        0 | 1 => decoration.clone(),
        2 => {
            let mut labels = decoration.0.clone();
            labels.sort();
            Decoration(labels)
        }
        _ => {
            let ops = point_group.unwrap_or(&[]);
            let mut candidates: Vec<Decoration> = Vec::with_capacity(ops.len() + 1);
            candidates.push(decoration.clone());
            candidates.extend(
                ops.iter()
                    .map(|op| apply_operation(op, decoration, sites, decimals)),
            );
            candidates.sort();
            candidates.dedup();
            candidates.swap_remove(0)
        }
    }
}
