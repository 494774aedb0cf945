use nalgebra::{Matrix3, Vector3};

use crate::config::BASE_VECTOR_TOLERANCE;
use crate::error::{CeError, Result};

/// Euclidean distance between two Cartesian points.
pub fn distance(p: &Vector3<f64>, q: &Vector3<f64>) -> f64 {
    (p - q).norm()
}

/// Round to a fixed number of decimals.
///
/// The result never carries a negative zero, so rounded coordinates compare and sort
/// consistently (`-0.0` and `0.0` would otherwise order differently under `total_cmp`).
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor + 0.0
}

/// Componentwise [`round_to`].
pub fn round_vector(v: &Vector3<f64>, decimals: i32) -> Vector3<f64> {
    v.map(|x| round_to(x, decimals))
}

/// Convert direct (fractional) coordinates to Cartesian ones. `basis` holds the lattice
/// vectors as columns.
pub fn direct_to_cartesian(frac: &Vector3<f64>, basis: &Matrix3<f64>) -> Vector3<f64> {
    basis * frac
}

/// Convert Cartesian coordinates to direct ones.
///
/// Fails with [`CeError::SingularLattice`] when `basis` cannot be inverted.
pub fn cartesian_to_direct(cart: &Vector3<f64>, basis: &Matrix3<f64>) -> Result<Vector3<f64>> {
    let determinant = basis.determinant();
    if determinant.abs() < BASE_VECTOR_TOLERANCE {
        return Err(CeError::SingularLattice { determinant });
    }
    let inverse = basis
        .try_inverse()
        .ok_or(CeError::SingularLattice { determinant })?;
    Ok(inverse * cart)
}

/// Reduce direct coordinates into `[0, 1)`.
///
/// Each component is rounded before the modulo so that floating noise at a cell face
/// (0.9999999 vs 1.0) cannot split one site into two.
pub fn reduce_direct(frac: &Vector3<f64>, decimals: i32) -> Vector3<f64> {
    frac.map(|x| {
        let reduced = round_to(round_to(x, decimals).rem_euclid(1.0), decimals);
        // 1 - 1e-17 survives rem_euclid but rounds back up to 1.0
        if reduced >= 1.0 {
            0.0
        } else {
            reduced
        }
    })
}

/// Wrap a Cartesian point into the primitive cell spanned by `basis`.
pub fn wrap_into_primitive_cell(
    point: &Vector3<f64>,
    basis: &Matrix3<f64>,
    decimals: i32,
) -> Result<Vector3<f64>> {
    let frac = cartesian_to_direct(point, basis)?;
    Ok(direct_to_cartesian(&reduce_direct(&frac, decimals), basis))
}

/// Arithmetic mean of a point set. Empty input yields the origin.
pub fn centroid(points: &[Vector3<f64>]) -> Vector3<f64> {
    if points.is_empty() {
        return Vector3::zeros();
    }
    points.iter().sum::<Vector3<f64>>() / points.len() as f64
}

/// Largest pairwise distance within a point set (0 for fewer than two points).
pub fn max_pairwise_distance(points: &[Vector3<f64>]) -> f64 {
    let mut max_dist = 0.0_f64;
    for (i, p) in points.iter().enumerate() {
        for q in &points[i + 1..] {
            max_dist = max_dist.max(distance(p, q));
        }
    }
    max_dist
}
