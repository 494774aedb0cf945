use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

/// A point symmetry operation acting on Cartesian coordinates.
///
/// Only the linear part of a space-group operation matters here: orbits are built from clusters
/// anchored at a lattice site, and lattice translations are recovered later by placing each
/// orbit member on every atom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymmetryOperation {
    /// Orthogonal rotation/reflection matrix with determinant ±1
    pub rotation: Matrix3<f64>,
}

impl SymmetryOperation {
    pub fn new(rotation: Matrix3<f64>) -> Self {
        Self { rotation }
    }

    /// Create from a row-major 3×3 array, the layout symmetry tables are written in.
    pub fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self::new(Matrix3::from_row_slice(&[
            rows[0][0], rows[0][1], rows[0][2],
            rows[1][0], rows[1][1], rows[1][2],
            rows[2][0], rows[2][1], rows[2][2],
        ]))
    }

    /// Create identity operation
    pub fn identity() -> Self {
        Self {
            rotation: Matrix3::identity(),
        }
    }

    /// Apply symmetry operation to a point
    pub fn apply(&self, point: &Vector3<f64>) -> Vector3<f64> {
        self.rotation * point
    }

    /// Apply about a fixed center instead of the origin
    pub fn apply_about(&self, point: &Vector3<f64>, center: &Vector3<f64>) -> Vector3<f64> {
        center + self.rotation * (point - center)
    }

    /// `self ∘ other`: apply `other` first
    pub fn compose(&self, other: &Self) -> Self {
        Self::new(self.rotation * other.rotation)
    }

    /// Inverse operation (the transpose, for an orthogonal matrix)
    pub fn inverse(&self) -> Self {
        Self::new(self.rotation.transpose())
    }

    pub fn determinant(&self) -> f64 {
        self.rotation.determinant()
    }

    /// Check if this is the identity operation
    pub fn is_identity(&self) -> bool {
        (self.rotation - Matrix3::identity()).norm() < 1e-10
    }

    pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        (self.rotation - other.rotation).norm() < tol
    }

    /// Order of the operation: smallest `n` with `self^n = identity` (0 if none up to 12)
    pub fn order(&self) -> usize {
        let mut power = self.clone();
        for n in 1..=12 {
            if power.is_identity() {
                return n;
            }
            power = power.compose(self);
        }
        0
    }
}
