//! Cluster-expansion correlation engine
//!
//! This library generates the symmetry orbits of user-defined clusters on a parent lattice and
//! counts, for every relaxed structure, how often each symmetry-distinct decoration of those
//! clusters occurs. The normalized count tables are the feature vectors a downstream regression
//! turns into effective cluster interactions.

pub mod clusters;
pub mod config;
pub mod correlations;
pub mod error;
pub mod interfaces;
pub mod lattice;
pub mod structures;
pub mod symmetries;

pub use error::{CeError, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
