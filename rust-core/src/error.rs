use thiserror::Error;

/// Errors raised by the orbit and correlation engine.
#[derive(Debug, Error)]
pub enum CeError {
    /// The lattice vectors do not span 3D space
    #[error("lattice basis is singular (determinant {determinant:e})")]
    SingularLattice { determinant: f64 },

    /// A cluster cannot be laid onto the atoms of a structure
    #[error("cluster #{cluster} is not present in structure {structure}")]
    CoverageGap { cluster: usize, structure: String },

    #[error("atom {atom} of structure {structure} has unresolvable species {label:?}")]
    UnresolvedSpecies {
        structure: String,
        atom: usize,
        label: String,
    },

    #[error("atom {atom} of structure {structure} has no spin value for a magnetic term")]
    UnresolvedSpin { structure: String, atom: usize },

    #[error("invalid cluster: {0}")]
    InvalidCluster(String),

    #[error("invalid structure {name}: {reason}")]
    InvalidStructure { name: String, reason: String },

    #[error("symmetry service failed: {0}")]
    Symmetry(String),

    #[error("processing cancelled")]
    Cancelled,
}

/// Common result type used throughout the library
pub type Result<T, E = CeError> = std::result::Result<T, E>;
