// Lattice module: geometry kernel and validated lattice bases
// Coordinates are Cartesian unless a function says otherwise; direct coordinates are fractions
// of the lattice vectors, which are stored as matrix columns.

// ======================== MODULE DECLARATIONS ========================
pub mod base_matrix;
pub mod geometry;

// Test modules
mod _tests_base_matrix;

// ======================== LATTICE BASIS ========================
pub use base_matrix::BaseMatrix; // struct - validated lattice basis with cached inverse
// BaseMatrix impl methods:
//   from_base_vectors(a1, a2, a3) -> Result<Self>                 - builds from column vectors, rejects singular bases
//   from_rows(rows: [[f64; 3]; 3]) -> Result<Self>                 - builds from row-wise lattice vectors (file layout)
//   from_matrix(matrix: Matrix3<f64>) -> Result<Self>              - builds from a column matrix
//   to_cartesian(&self, frac) -> Vector3<f64>                      - direct -> Cartesian
//   to_direct(&self, cart) -> Vector3<f64>                         - Cartesian -> direct
//   wrap(&self, cart, decimals) -> Vector3<f64>                    - PBC wrap into the primitive cell
//   minimum_image_distance(&self, p, q) -> f64                     - distance to the nearest periodic image

// ======================== GEOMETRY KERNEL ========================
pub use geometry::{
    distance,                 // fn(p, q) -> f64 - Euclidean distance
    round_to,                 // fn(value, decimals) -> f64 - rounding without negative zero
    round_vector,             // fn(v, decimals) -> Vector3<f64> - componentwise rounding
    direct_to_cartesian,      // fn(frac, basis) -> Vector3<f64>
    cartesian_to_direct,      // fn(cart, basis) -> Result<Vector3<f64>> - fails on a singular basis
    reduce_direct,            // fn(frac, decimals) -> Vector3<f64> - round then reduce into [0, 1)
    wrap_into_primitive_cell, // fn(point, basis, decimals) -> Result<Vector3<f64>>
    centroid,                 // fn(points) -> Vector3<f64>
    max_pairwise_distance,    // fn(points) -> f64
};
