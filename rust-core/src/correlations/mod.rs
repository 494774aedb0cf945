// Correlations module: orbit catalog, per-structure decoration counts and the feature matrix
// handed to the regression stage.

// ======================== MODULE DECLARATIONS ========================
pub mod catalog;
pub mod count_table;
pub mod counter;
pub mod design_matrix;


// ======================== ORBIT CATALOG ========================
pub use catalog::{
    ClusterOrbit, // struct - scaled base cluster, its orbit and per-member point groups
    OrbitCatalog, // struct - one ClusterOrbit per base cluster
};
// OrbitCatalog impl methods:
//   build(clusters, symmetry, config) -> Result<Self>             - scales, expands orbits, fetches point groups

// ======================== COUNT TABLES ========================
pub use count_table::{
    CountTable,       // struct - canonical decoration -> normalized count
    ClusterCount,     // struct - multiplicity + table + skipped placements
    StructureCounts,  // struct - per-cluster counts and coverage gaps of one structure
    StructureFailure, // struct - structure name + the error that stopped it
    CountReport,      // struct - batch outcome: counts, failures, cancellation flag; into_result()
};

// ======================== COUNTER ========================
pub use counter::{
    CancellationToken,  // struct - shared stop flag, checked between structures
    CorrelationCounter, // struct - catalog + config
};
// CorrelationCounter impl methods:
//   count_structure(&self, structure) -> Result<StructureCounts>   - one structure, all clusters
//   count_all(&self, structures, token) -> CountReport             - batch, parallel with the `parallel` feature

// ======================== DESIGN MATRIX ========================
pub use design_matrix::{
    CorrelationColumn, // struct - (cluster index, canonical decoration)
    CorrelationMatrix, // struct - structures x columns, zero-filled, with energies
};
