// Structures module: relaxed crystal snapshots, site lookup and input parsing

// ======================== MODULE DECLARATIONS ========================
pub mod parse;
pub mod site_matching;
pub mod structure;

mod _tests_site_matching;

// ======================== STRUCTURES ========================
pub use structure::{
    Atom,      // struct - direct position, species label, optional spin
    Structure, // struct - name, validated lattice, atoms, energy per atom
};

// ======================== SITE MATCHING ========================
pub use site_matching::SiteMatcher; // struct - nearest atom within a threshold, minimum-image distances
// SiteMatcher impl methods:
//   new(structure, threshold) -> Self                              - caches Cartesian atom positions
//   match_site(&self, site) -> Option<usize>                       - closest atom index within the threshold
//   match_sites(&self, sites) -> Option<Vec<usize>>                - all sites or nothing

// ======================== PARSERS ========================
pub use parse::{
    parse_structures,     // fn(path) -> anyhow::Result<Vec<Structure>>
    parse_structures_str, // fn(text) -> anyhow::Result<Vec<Structure>>
    parse_clusters,       // fn(path) -> anyhow::Result<Vec<Cluster>>
    parse_clusters_str,   // fn(text) -> anyhow::Result<Vec<Cluster>>
};
