// Clusters module: cluster geometry, canonical site orderings, symmetry orbits and decorations
// Every transformation returns a new Cluster; nothing here mutates a cluster in place.

// ======================== MODULE DECLARATIONS ========================
pub mod canonical;
pub mod cluster;
pub mod decoration;
pub mod orbit;

mod _tests_cluster;
mod _tests_decoration;

// ======================== CLUSTER VALUE TYPE ========================
pub use cluster::Cluster; // struct - ordered Cartesian sites + characteristic distances + term type
// Cluster impl methods:
//   new(sites, scale_refs, term_type) -> Result<Self>             - validates site count and distances
//   scaled_to(&self, target_unit: f64) -> Self                     - largest pair distance becomes target_unit
//   scaled(&self) -> Self                                          - scaled_to(max(scale_refs))
//   translated(&self, shift) / anchored_at(&self, index) -> Self   - rigid translations
//   transformed(&self, op, decimals) -> Self                       - point operation about the origin, rounded
//   wrapped(&self, basis, decimals) -> Self                        - PBC wrap of every site
//   is_equilateral(&self, tol) -> bool                             - all sites equidistant from the centroid
//   canonicalized(&self, tol, decimals) -> Self                    - equilateral or general ordering

// ======================== CANONICAL ORDERINGS ========================
pub use canonical::{
    compare_coordinates,        // fn(a, b) -> Ordering - lexicographic (x, y, z)
    sort_by_coordinates,        // fn(sites) -> Vec<Vector3<f64>> - equilateral ordering
    distance_signature_order,   // fn(sites, decimals) -> Vec<usize> - general ordering as a permutation
    sort_by_distance_signature, // fn(sites, decimals) -> Vec<Vector3<f64>> - general ordering
};

// ======================== ORBITS ========================
pub use orbit::{
    Orbit,      // struct - deduplicated, canonically ordered images of a base cluster
    find_orbit, // fn(ops, cluster, config) -> Orbit - orbit under the lattice's point operations
};

// ======================== DECORATIONS ========================
pub use decoration::{
    Decoration,              // struct - species label per site, ordered lexicographically
    apply_operation,         // fn(op, decoration, sites, decimals) -> Decoration - relabel after a point operation
    canonicalize_decoration, // fn(decoration, sites, point_group, decimals) -> Decoration - smallest equivalent
};
