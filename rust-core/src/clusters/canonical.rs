use std::cmp::Ordering;

use nalgebra::Vector3;

use crate::lattice::geometry::{distance, round_to};

/// Lexicographic comparison of coordinate tuples (x, then y, then z).
pub fn compare_coordinates(a: &Vector3<f64>, b: &Vector3<f64>) -> Ordering {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| x.total_cmp(y))
        .find(|ord| *ord != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}

/// Equilateral ordering: sites sorted by coordinate tuple.
///
/// Only meaningful when the sites are interchangeable under the cluster's symmetry, since
/// it ignores the cluster's internal geometry entirely.
pub fn sort_by_coordinates(sites: &[Vector3<f64>]) -> Vec<Vector3<f64>> {
    let mut sorted = sites.to_vec();
    sorted.sort_by(compare_coordinates);
    sorted
}

/// Per-site key of the general ordering: sorted distances to all other sites.
fn distance_signature(sites: &[Vector3<f64>], index: usize, decimals: i32) -> Vec<f64> {
    let mut dists: Vec<f64> = sites
        .iter()
        .enumerate()
        .filter(|(j, _)| *j != index)
        .map(|(_, other)| round_to(distance(&sites[index], other), decimals))
        .collect();
    dists.sort_by(f64::total_cmp);
    dists
}

/// Permutation that puts `sites` into general (distance-signature) order.
///
/// Sites are ranked by their sorted distances to all other sites; the coordinate tuple breaks
/// ties. Two images of the same cluster share per-site distance multisets, so the order does
/// not depend on which symmetry operation produced the image.
pub fn distance_signature_order(sites: &[Vector3<f64>], decimals: i32) -> Vec<usize> {
    let signatures: Vec<Vec<f64>> = (0..sites.len())
        .map(|i| distance_signature(sites, i, decimals))
        .collect();

    let mut order: Vec<usize> = (0..sites.len()).collect();
    order.sort_by(|&i, &j| {
        signatures[i]
            .iter()
            .zip(signatures[j].iter())
            .map(|(a, b)| a.total_cmp(b))
            .find(|ord| *ord != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
            .then_with(|| compare_coordinates(&sites[i], &sites[j]))
    });
    order
}

/// General ordering: sites rearranged by [`distance_signature_order`].
pub fn sort_by_distance_signature(sites: &[Vector3<f64>], decimals: i32) -> Vec<Vector3<f64>> {
    distance_signature_order(sites, decimals)
        .into_iter()
        .map(|i| sites[i])
        .collect()
}
