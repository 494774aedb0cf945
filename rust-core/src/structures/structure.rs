use nalgebra::Vector3;

use crate::error::{CeError, Result};
use crate::lattice::base_matrix::BaseMatrix;

/// One atom of a relaxed structure.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Direct (fractional) coordinates
    pub position: Vector3<f64>,
    /// Chemical species label
    pub species: String,
    /// Magnetic moment; `None` when the source carries no spin for this atom
    pub spin: Option<f64>,
}

impl Atom {
    pub fn new(position: Vector3<f64>, species: impl Into<String>, spin: Option<f64>) -> Self {
        Self {
            position,
            species: species.into(),
            spin,
        }
    }
}

/// A parsed crystal snapshot. Immutable once built.
#[derive(Debug, Clone)]
pub struct Structure {
    name: String,
    lattice: BaseMatrix,
    atoms: Vec<Atom>,
    energy_per_atom: Option<f64>,
}

impl Structure {
    /// Build a structure from its lattice vectors (one per row) and atoms.
    pub fn new(name: impl Into<String>, lattice_rows: [[f64; 3]; 3], atoms: Vec<Atom>) -> Result<Self> {
        let name = name.into();
        if atoms.is_empty() {
            return Err(CeError::InvalidStructure {
                name,
                reason: "structure has no atoms".to_string(),
            });
        }
        let lattice = BaseMatrix::from_rows(lattice_rows)?;
        Ok(Self {
            name,
            lattice,
            atoms,
            energy_per_atom: None,
        })
    }

    pub fn with_energy_per_atom(mut self, energy: f64) -> Self {
        self.energy_per_atom = Some(energy);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lattice(&self) -> &BaseMatrix {
        &self.lattice
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Total number of atoms
    pub fn atom_sum(&self) -> usize {
        self.atoms.len()
    }

    pub fn energy_per_atom(&self) -> Option<f64> {
        self.energy_per_atom
    }

    /// Cartesian positions of all atoms, in atom order
    pub fn cartesian_positions(&self) -> Vec<Vector3<f64>> {
        self.atoms
            .iter()
            .map(|atom| self.lattice.to_cartesian(&atom.position))
            .collect()
    }

    /// Number of atoms carrying `species`
    pub fn count_species(&self, species: &str) -> usize {
        self.atoms.iter().filter(|a| a.species == species).count()
    }
}
