#[cfg(test)]
mod _tests_cluster {
    use super::super::cluster::Cluster;
    use crate::error::CeError;
    use crate::interfaces::TermType;
    use crate::lattice::base_matrix::BaseMatrix;
    use crate::symmetries::point_groups::generate_rotations_about_z;
    use nalgebra::{Matrix3, Vector3};

    const TOL: f64 = 1e-10;

    fn pair(d: f64) -> Cluster {
        Cluster::new(
            vec![Vector3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 1.0, 0.0)],
            vec![d],
            TermType::Chemical,
        )
        .unwrap()
    }

    #[test]
    fn test_new_validates_invariants() {
        assert!(matches!(
            Cluster::new(vec![], vec![], TermType::Chemical),
            Err(CeError::InvalidCluster(_))
        ));
        let missing_refs = Cluster::new(
            vec![Vector3::zeros(), Vector3::new(1.0, 0.0, 0.0)],
            vec![],
            TermType::Chemical,
        );
        assert!(matches!(missing_refs, Err(CeError::InvalidCluster(_))));
        let point = Cluster::new(vec![Vector3::zeros()], vec![], TermType::Magnetic).unwrap();
        assert_eq!(point.size(), 1);
        assert_eq!(point.term_type(), TermType::Magnetic);
    }

    #[test]
    fn test_scaled_maps_largest_reference_to_largest_distance() {
        let target = 1.8 * 2.0_f64.sqrt();
        let scaled = pair(target).scaled();
        assert!((scaled.max_pair_distance() - target).abs() < TOL);
        assert!((scaled.sites()[1] - Vector3::new(1.8, 1.8, 0.0)).norm() < TOL);

        let triangle = Cluster::new(
            vec![
                Vector3::new(0.0, 0.0, 0.0),
                Vector3::new(1.0, 1.0, 0.0),
                Vector3::new(2.0, 0.0, 0.0),
            ],
            vec![2.546, 3.6],
            TermType::Chemical,
        )
        .unwrap();
        assert!((triangle.scaled().max_pair_distance() - 3.6).abs() < TOL);
    }

    #[test]
    fn test_single_site_scaling_collapses_to_origin() {
        let point = Cluster::new(
            vec![Vector3::new(0.5, 0.25, 0.0)],
            vec![],
            TermType::Chemical,
        )
        .unwrap();
        let scaled = point.scaled();
        assert_eq!(scaled.sites()[0], Vector3::zeros());
        // The input is left untouched
        assert_eq!(point.sites()[0], Vector3::new(0.5, 0.25, 0.0));
    }

    #[test]
    fn test_anchored_at_moves_site_to_origin() {
        let cluster = pair(1.0).translated(&Vector3::new(3.0, -1.0, 2.0));
        let anchored = cluster.anchored_at(1);
        assert_eq!(anchored.sites()[1], Vector3::zeros());
        assert!((anchored.sites()[0] - Vector3::new(-1.0, -1.0, 0.0)).norm() < TOL);
    }

    #[test]
    fn test_transformed_rounds_images() {
        let c4 = generate_rotations_about_z(4);
        let image = pair(1.0).transformed(&c4[1], 3);
        assert_eq!(image.sites()[1], Vector3::new(-1.0, 1.0, 0.0));
        assert_eq!(image.scale_refs(), &[1.0]);
    }

    #[test]
    fn test_is_equilateral() {
        let equilateral = Cluster::new(
            vec![
                Vector3::new(0.0, 0.0, 0.0),
                Vector3::new(1.8, 1.8, 0.0),
                Vector3::new(1.8, 0.0, 1.8),
            ],
            vec![2.546],
            TermType::Chemical,
        )
        .unwrap();
        assert!(equilateral.is_equilateral(1e-3));

        let isosceles = Cluster::new(
            vec![
                Vector3::new(0.0, 0.0, 0.0),
                Vector3::new(2.0, 0.0, 0.0),
                Vector3::new(1.0, 3.0, 0.0),
            ],
            vec![3.2],
            TermType::Chemical,
        )
        .unwrap();
        assert!(!isosceles.is_equilateral(1e-3));
        assert!(pair(1.0).is_equilateral(1e-3));
    }

    #[test]
    fn test_wrapped_sites_fall_inside_cell() {
        let basis = BaseMatrix::from_matrix(Matrix3::identity() * 3.6).unwrap();
        let cluster = pair(1.0)
            .scaled_to(1.8 * 2.0_f64.sqrt())
            .translated(&Vector3::new(-1.8, -1.8, 0.0));
        let wrapped = cluster.wrapped(&basis, 3);
        assert!((wrapped.sites()[0] - Vector3::new(1.8, 1.8, 0.0)).norm() < TOL);
        assert!(wrapped.sites()[1].norm() < TOL);
    }
}
