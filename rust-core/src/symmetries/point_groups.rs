use std::f64::consts::PI;

use nalgebra::{Matrix3, Rotation3, Vector3};

use crate::symmetries::symmetry_operations::SymmetryOperation;

/// Point group operations of the cubic holohedry m-3m (48 operations).
///
/// Every signed permutation matrix maps the cube onto itself, and there are exactly
/// 3! × 2³ = 48 of them. The identity comes first.
pub fn generate_cubic_operations() -> Vec<SymmetryOperation> {
    const PERMUTATIONS: [[usize; 3]; 6] = [
        [0, 1, 2],
        [0, 2, 1],
        [1, 0, 2],
        [1, 2, 0],
        [2, 0, 1],
        [2, 1, 0],
    ];

    let mut ops = Vec::with_capacity(48);
    for perm in PERMUTATIONS.iter() {
        for signs in 0..8u8 {
            let mut rotation = Matrix3::zeros();
            for (row, &col) in perm.iter().enumerate() {
                let sign = if signs & (1 << row) == 0 { 1.0 } else { -1.0 };
                rotation[(row, col)] = sign;
            }
            ops.push(SymmetryOperation::new(rotation));
        }
    }
    ops
}

/// Point group operations of the square lattice, 4mm about the z axis (8 operations).
pub fn generate_square_operations() -> Vec<SymmetryOperation> {
    let mut ops = generate_rotations_about_z(4);
    // Mirror operations
    for mirror in [
        Matrix3::new(1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0),
        Matrix3::new(-1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0),
        Matrix3::new(0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0),
        Matrix3::new(0.0, -1.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 1.0),
    ] {
        ops.push(SymmetryOperation::new(mirror));
    }
    ops
}

/// Cyclic group C_n: rotations by multiples of 2π/n about the z axis.
///
/// Entries are rounded to 12 decimals so that 90° and 180° rotations are exact.
pub fn generate_rotations_about_z(n: usize) -> Vec<SymmetryOperation> {
    (0..n)
        .map(|k| {
            let angle = 2.0 * PI * k as f64 / n as f64;
            let rotation = Rotation3::from_axis_angle(&Vector3::z_axis(), angle)
                .into_inner()
                .map(|x| (x * 1e12).round() / 1e12 + 0.0);
            SymmetryOperation::new(rotation)
        })
        .collect()
}
