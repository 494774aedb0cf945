#[cfg(test)]
mod _tests_decoration {
    use super::super::decoration::*;
    use crate::symmetries::point_groups::generate_rotations_about_z;
    use crate::symmetries::symmetry_operations::SymmetryOperation;
    use crate::symmetries::symmetry_service::{SymmetryService, TabulatedSymmetry};
    use nalgebra::Vector3;

    const DECIMALS: i32 = 5;

    fn triangle() -> Vec<Vector3<f64>> {
        vec![
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.8, 0.0, 1.8),
            Vector3::new(1.8, 1.8, 0.0),
        ]
    }

    fn square() -> Vec<Vector3<f64>> {
        vec![
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.8, 0.0, 0.0),
            Vector3::new(0.0, 1.8, 0.0),
            Vector3::new(1.8, 1.8, 0.0),
        ]
    }

    fn point_group(sites: &[Vector3<f64>]) -> Vec<SymmetryOperation> {
        TabulatedSymmetry::cubic().point_group_operations(sites).unwrap()
    }

    fn rotations_only(ops: Vec<SymmetryOperation>) -> Vec<SymmetryOperation> {
        ops.into_iter().filter(|op| op.determinant() > 0.0).collect()
    }

    #[test]
    fn test_display_and_ordering() {
        let a = Decoration::new(["Cr", "Fe"]);
        let b = Decoration::new(["Fe", "Cr"]);
        assert!(a < b);
        assert_eq!(a.to_string(), "[Cr, Fe]");
        assert_eq!(serde_json::to_string(&a).unwrap(), r#"["Cr","Fe"]"#);
    }

    #[test]
    fn test_single_site_is_unchanged() {
        let d = Decoration::new(["Ni"]);
        assert_eq!(canonicalize_decoration(&d, &[Vector3::zeros()], None, DECIMALS), d);
    }

    #[test]
    fn test_pair_labels_are_sorted() {
        let sites = [Vector3::zeros(), Vector3::new(1.8, 1.8, 0.0)];
        let fe_ni = canonicalize_decoration(&Decoration::new(["Fe", "Ni"]), &sites, None, DECIMALS);
        let ni_fe = canonicalize_decoration(&Decoration::new(["Ni", "Fe"]), &sites, None, DECIMALS);
        assert_eq!(fe_ni, ni_fe);
        assert_eq!(fe_ni, Decoration::new(["Fe", "Ni"]));

        let same = Decoration::new(["Ni", "Ni"]);
        assert_eq!(canonicalize_decoration(&same, &sites, None, DECIMALS), same);
    }

    #[test]
    fn test_threefold_rotation_picks_smallest_rotation() {
        let sites = triangle();
        let c3 = rotations_only(point_group(&sites));
        assert_eq!(c3.len(), 3);

        let canonical =
            canonicalize_decoration(&Decoration::new(["Fe", "Ni", "Cr"]), &sites, Some(c3.as_slice()), DECIMALS);
        assert_eq!(canonical, Decoration::new(["Cr", "Fe", "Ni"]));

        // The opposite handedness is not reachable by rotations alone
        let mirrored =
            canonicalize_decoration(&Decoration::new(["Fe", "Cr", "Ni"]), &sites, Some(c3.as_slice()), DECIMALS);
        assert_eq!(mirrored, Decoration::new(["Cr", "Ni", "Fe"]));
    }

    #[test]
    fn test_mirrors_merge_both_handednesses() {
        let sites = triangle();
        let c3v = point_group(&sites);
        assert_eq!(c3v.len(), 6);
        let a = canonicalize_decoration(&Decoration::new(["Fe", "Ni", "Cr"]), &sites, Some(c3v.as_slice()), DECIMALS);
        let b = canonicalize_decoration(&Decoration::new(["Fe", "Cr", "Ni"]), &sites, Some(c3v.as_slice()), DECIMALS);
        assert_eq!(a, b);
        assert_eq!(a, Decoration::new(["Cr", "Fe", "Ni"]));
    }

    #[test]
    fn test_square_plaquette_edge_and_diagonal_classes() {
        let sites = square();
        let ops = point_group(&sites);
        let edge_x = Decoration::new(["Fe", "Fe", "Ni", "Ni"]);
        let edge_y = Decoration::new(["Fe", "Ni", "Fe", "Ni"]);
        let diagonal = Decoration::new(["Ni", "Fe", "Fe", "Ni"]);

        let canonical_edge = canonicalize_decoration(&edge_y, &sites, Some(ops.as_slice()), DECIMALS);
        assert_eq!(canonical_edge, edge_x);
        assert_eq!(canonicalize_decoration(&edge_x, &sites, Some(ops.as_slice()), DECIMALS), edge_x);
        assert_eq!(
            canonicalize_decoration(&diagonal, &sites, Some(ops.as_slice()), DECIMALS),
            Decoration::new(["Fe", "Ni", "Ni", "Fe"])
        );
    }

    #[test]
    fn test_identity_leaves_decoration_unchanged() {
        let sites = square();
        let d = Decoration::new(["Cr", "Fe", "Ni", "Fe"]);
        assert_eq!(apply_operation(&SymmetryOperation::identity(), &d, &sites, DECIMALS), d);
    }

    #[test]
    fn test_canonicalization_is_idempotent() {
        for (sites, labels) in [
            (triangle(), vec!["Ni", "Fe", "Cr"]),
            (square(), vec!["Ni", "Cr", "Fe", "Fe"]),
        ] {
            let ops = point_group(&sites);
            let once = canonicalize_decoration(&Decoration::new(labels), &sites, Some(ops.as_slice()), DECIMALS);
            let twice = canonicalize_decoration(&once, &sites, Some(ops.as_slice()), DECIMALS);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_canonicalization_is_invariant_under_the_point_group() {
        for (sites, labels) in [
            (triangle(), vec!["Ni", "Fe", "Cr"]),
            (square(), vec!["Ni", "Cr", "Fe", "Fe"]),
            (square(), vec!["Cr", "Cr", "Fe", "Ni"]),
        ] {
            let ops = point_group(&sites);
            let d = Decoration::new(labels);
            let canonical = canonicalize_decoration(&d, &sites, Some(ops.as_slice()), DECIMALS);
            for g in ops.iter() {
                let moved = apply_operation(g, &d, &sites, DECIMALS);
                assert_eq!(
                    canonicalize_decoration(&moved, &sites, Some(ops.as_slice()), DECIMALS),
                    canonical
                );
            }
        }
    }

    #[test]
    fn test_missing_point_group_keeps_input() {
        let sites = triangle();
        let d = Decoration::new(["Ni", "Fe", "Cr"]);
        assert_eq!(canonicalize_decoration(&d, &sites, None, DECIMALS), d);
        let c4 = generate_rotations_about_z(4);
        // C4 about the origin does not map this triangle onto itself; result stays a permutation
        let result = canonicalize_decoration(&d, &sites, Some(&c4), DECIMALS);
        let mut labels = result.labels().to_vec();
        labels.sort();
        assert_eq!(labels, vec!["Cr", "Fe", "Ni"]);
    }
}
