use nalgebra::{Matrix3, Vector3};

use crate::config::BASE_VECTOR_TOLERANCE;
use crate::error::{CeError, Result};
use crate::lattice::geometry::{direct_to_cartesian, reduce_direct};

/// A validated 3D lattice basis with its inverse cached.
///
/// Columns of the matrix are the lattice vectors. Construction fails for a singular basis,
/// which makes every later direct/Cartesian conversion infallible.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseMatrix {
    base_matrix: Matrix3<f64>,
    inverse: Matrix3<f64>,
}

impl BaseMatrix {
    pub fn from_base_vectors(
        base_1: Vector3<f64>,
        base_2: Vector3<f64>,
        base_3: Vector3<f64>,
    ) -> Result<Self> {
        Self::from_matrix(Matrix3::from_columns(&[base_1, base_2, base_3]))
    }

    /// Build from lattice vectors given row by row, the layout of structure files.
    pub fn from_rows(rows: [[f64; 3]; 3]) -> Result<Self> {
        Self::from_base_vectors(
            Vector3::from(rows[0]),
            Vector3::from(rows[1]),
            Vector3::from(rows[2]),
        )
    }

    pub fn from_matrix(matrix: Matrix3<f64>) -> Result<Self> {
        // Linearly non-dependent (also catches zero vectors)
        let determinant = matrix.determinant();
        if determinant.abs() < BASE_VECTOR_TOLERANCE {
            return Err(CeError::SingularLattice { determinant });
        }
        let inverse = matrix
            .try_inverse()
            .ok_or(CeError::SingularLattice { determinant })?;

        Ok(BaseMatrix {
            base_matrix: matrix,
            inverse,
        })
    }

    pub fn base_matrix(&self) -> &Matrix3<f64> {
        &self.base_matrix
    }

    pub fn inverse(&self) -> &Matrix3<f64> {
        &self.inverse
    }

    pub fn determinant(&self) -> f64 {
        self.base_matrix.determinant()
    }

    pub fn base_vectors(&self) -> [Vector3<f64>; 3] {
        [
            self.base_matrix.column(0).into(),
            self.base_matrix.column(1).into(),
            self.base_matrix.column(2).into(),
        ]
    }

    pub fn to_cartesian(&self, frac: &Vector3<f64>) -> Vector3<f64> {
        direct_to_cartesian(frac, &self.base_matrix)
    }

    pub fn to_direct(&self, cart: &Vector3<f64>) -> Vector3<f64> {
        self.inverse * cart
    }

    /// Wrap a Cartesian point into the primitive cell, rounding direct coordinates to
    /// `decimals` before the modulo.
    pub fn wrap(&self, cart: &Vector3<f64>, decimals: i32) -> Vector3<f64> {
        self.to_cartesian(&reduce_direct(&self.to_direct(cart), decimals))
    }

    /// Length of the shortest periodic image of `p - q`.
    ///
    /// The direct-space difference is reduced to `[-0.5, 0.5]`, which is exact for
    /// orthogonal cells and a close upper bound for mildly skewed ones.
    pub fn minimum_image_distance(&self, p: &Vector3<f64>, q: &Vector3<f64>) -> f64 {
        let frac = self.to_direct(&(p - q)).map(|x| x - x.round());
        self.to_cartesian(&frac).norm()
    }
}
