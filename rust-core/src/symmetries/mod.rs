// Symmetries module: symmetry operations and the interface to symmetry analysis
// Operations are consumed, not derived: a SymmetryService supplies them as plain matrices.

// ======================== MODULE DECLARATIONS ========================
pub mod point_groups;
pub mod symmetry_operations;
pub mod symmetry_service;

mod _tests_symmetry_service;

// ======================== SYMMETRY OPERATIONS ========================
pub use symmetry_operations::SymmetryOperation; // struct - Cartesian rotation/reflection
// SymmetryOperation impl methods:
//   new(rotation: Matrix3<f64>) -> Self                            - wraps a 3x3 matrix
//   from_rows(rows: [[f64; 3]; 3]) -> Self                         - builds from a row-major table entry
//   identity() -> Self                                             - identity operation
//   apply(&self, point) -> Vector3<f64>                            - rotates about the origin
//   apply_about(&self, point, center) -> Vector3<f64>              - rotates about a fixed center
//   compose(&self, other) -> Self                                  - self after other
//   inverse(&self) -> Self                                         - transpose
//   order(&self) -> usize                                          - smallest n with op^n = identity

// ======================== SYMMETRY SERVICE ========================
pub use symmetry_service::{
    SymmetryService,   // trait - space group and cluster point group provider
    TabulatedSymmetry, // struct - provider backed by a table of operations (JSON or built-in)
};

// ======================== REFERENCE POINT GROUPS ========================
pub use point_groups::{
    generate_cubic_operations,  // fn() -> Vec<SymmetryOperation> - m-3m, 48 operations
    generate_square_operations, // fn() -> Vec<SymmetryOperation> - 4mm about z, 8 operations
    generate_rotations_about_z, // fn(n) -> Vec<SymmetryOperation> - cyclic group C_n about z
};
