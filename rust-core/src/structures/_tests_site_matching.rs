#[cfg(test)]
mod _tests_site_matching {
    use super::super::site_matching::SiteMatcher;
    use super::super::structure::{Atom, Structure};
    use crate::error::CeError;
    use nalgebra::Vector3;

    fn cubic_cell() -> [[f64; 3]; 3] {
        [[3.6, 0.0, 0.0], [0.0, 3.6, 0.0], [0.0, 0.0, 3.6]]
    }

    fn fcc_conventional() -> Structure {
        let atoms = vec![
            Atom::new(Vector3::new(0.0, 0.0, 0.0), "Fe", Some(2.0)),
            Atom::new(Vector3::new(0.5, 0.5, 0.0), "Ni", Some(0.6)),
            Atom::new(Vector3::new(0.5, 0.0, 0.5), "Fe", Some(-2.0)),
            Atom::new(Vector3::new(0.0, 0.5, 0.5), "Ni", Some(0.6)),
        ];
        Structure::new("fcc", cubic_cell(), atoms).unwrap()
    }

    #[test]
    fn test_structure_accessors() {
        let s = fcc_conventional();
        assert_eq!(s.atom_sum(), 4);
        assert_eq!(s.count_species("Fe"), 2);
        assert_eq!(s.cartesian_positions()[1], Vector3::new(1.8, 1.8, 0.0));
        assert_eq!(s.energy_per_atom(), None);
        assert_eq!(s.with_energy_per_atom(-4.2).energy_per_atom(), Some(-4.2));
    }

    #[test]
    fn test_structure_rejects_singular_lattice_and_empty_atoms() {
        let flat = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0]];
        let atoms = vec![Atom::new(Vector3::zeros(), "Fe", None)];
        assert!(matches!(
            Structure::new("flat", flat, atoms),
            Err(CeError::SingularLattice { .. })
        ));
        assert!(matches!(
            Structure::new("empty", cubic_cell(), vec![]),
            Err(CeError::InvalidStructure { .. })
        ));
    }

    #[test]
    fn test_match_site_within_threshold() {
        let s = fcc_conventional();
        let matcher = SiteMatcher::new(&s, 0.1);
        assert_eq!(matcher.match_site(&Vector3::new(1.85, 1.78, 0.02)), Some(1));
        assert_eq!(matcher.match_site(&Vector3::new(0.9, 0.9, 0.0)), None);
    }

    #[test]
    fn test_match_site_across_cell_face() {
        let s = fcc_conventional();
        let matcher = SiteMatcher::new(&s, 0.1);
        // Just below the far corner is the periodic image of the origin atom
        assert_eq!(matcher.match_site(&Vector3::new(3.58, 3.59, 0.0)), Some(0));
    }

    #[test]
    fn test_match_sites_is_all_or_nothing() {
        let s = fcc_conventional();
        let matcher = SiteMatcher::new(&s, 0.1);
        let good = [Vector3::new(0.0, 0.0, 0.0), Vector3::new(1.8, 0.0, 1.8)];
        assert_eq!(matcher.match_sites(&good), Some(vec![0, 2]));
        let bad = [Vector3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0)];
        assert_eq!(matcher.match_sites(&bad), None);
    }
}
