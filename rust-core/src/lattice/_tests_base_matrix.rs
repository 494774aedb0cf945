#[cfg(test)]
mod _tests_base_matrix {
    use super::super::base_matrix::BaseMatrix;
    use crate::error::CeError;
    use nalgebra::{Matrix3, Vector3};

    const TOL: f64 = 1e-10;

    #[test]
    fn test_from_rows_stores_vectors_as_columns() {
        let basis = BaseMatrix::from_rows([
            [0.0, 1.8, 1.8],
            [1.8, 0.0, 1.8],
            [1.8, 1.8, 0.0],
        ])
        .unwrap();
        let [a1, a2, a3] = basis.base_vectors();
        assert_eq!(a1, Vector3::new(0.0, 1.8, 1.8));
        assert_eq!(a2, Vector3::new(1.8, 0.0, 1.8));
        assert_eq!(a3, Vector3::new(1.8, 1.8, 0.0));
        // FCC primitive cell holds a quarter of the conventional volume
        assert!((basis.determinant().abs() - 3.6_f64.powi(3) / 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_singular_basis_is_rejected() {
        let result = BaseMatrix::from_base_vectors(
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(2.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
        );
        assert!(matches!(result, Err(CeError::SingularLattice { .. })));

        let zero = BaseMatrix::from_matrix(Matrix3::zeros());
        assert!(matches!(zero, Err(CeError::SingularLattice { .. })));
    }

    #[test]
    fn test_conversions_use_cached_inverse() {
        let basis = BaseMatrix::from_matrix(Matrix3::new(
            3.0, 0.5, 0.0,
            0.0, 4.0, 0.0,
            0.0, 0.0, 5.0,
        ))
        .unwrap();
        let cart = Vector3::new(1.2, -3.4, 7.5);
        let back = basis.to_cartesian(&basis.to_direct(&cart));
        assert!((back - cart).norm() < TOL);
        assert!((basis.base_matrix() * basis.inverse() - Matrix3::identity()).norm() < TOL);
    }

    #[test]
    fn test_wrap_matches_geometry_kernel() {
        let basis = BaseMatrix::from_matrix(Matrix3::identity() * 3.6).unwrap();
        let p = Vector3::new(-0.9, 4.5, 10.8);
        let wrapped = basis.wrap(&p, 3);
        let kernel =
            super::super::geometry::wrap_into_primitive_cell(&p, basis.base_matrix(), 3).unwrap();
        assert!((wrapped - kernel).norm() < TOL);
        assert!((wrapped - Vector3::new(2.7, 0.9, 0.0)).norm() < TOL);
    }

    #[test]
    fn test_minimum_image_distance() {
        let basis = BaseMatrix::from_matrix(Matrix3::identity() * 3.6).unwrap();
        let near_face = Vector3::new(3.59, 0.0, 0.0);
        let origin = Vector3::zeros();
        assert!((basis.minimum_image_distance(&near_face, &origin) - 0.01).abs() < 1e-9);
        let inside = Vector3::new(1.0, 1.0, 0.0);
        assert!((basis.minimum_image_distance(&inside, &origin) - 2.0_f64.sqrt()).abs() < TOL);
    }
}
