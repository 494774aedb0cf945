#[cfg(test)]
mod _tests_symmetry_service {
    use super::super::symmetry_service::{SymmetryService, TabulatedSymmetry};
    use nalgebra::Vector3;

    #[test]
    fn test_json_table_is_row_major() {
        let json = r#"{"operations": [
            [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[0, -1, 0], [1, 0, 0], [0, 0, 1]]
        ]}"#;
        let service = TabulatedSymmetry::from_json_str(json).unwrap();
        let ops = service.space_group_operations().unwrap();
        assert_eq!(ops.len(), 2);
        assert!(ops[0].is_identity());
        // Row-major: x -> (0, 1, 0)
        let image = ops[1].apply(&Vector3::new(1.0, 0.0, 0.0));
        assert!((image - Vector3::new(0.0, 1.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn test_empty_or_malformed_tables_are_rejected() {
        assert!(TabulatedSymmetry::from_json_str(r#"{"operations": []}"#).is_err());
        assert!(TabulatedSymmetry::from_json_str(r#"{"operations": [[1, 0, 0]]}"#).is_err());
    }

    #[test]
    fn test_point_group_of_square_plaquette() {
        let service = TabulatedSymmetry::cubic();
        let square = vec![
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.8, 0.0, 0.0),
            Vector3::new(0.0, 1.8, 0.0),
            Vector3::new(1.8, 1.8, 0.0),
        ];
        // 4/mmm: the square in the xy plane keeps 16 of the 48 cubic operations
        assert_eq!(service.point_group_operations(&square).unwrap().len(), 16);
    }

    #[test]
    fn test_point_group_of_fcc_nearest_neighbour_triangle() {
        let service = TabulatedSymmetry::cubic();
        let triangle = vec![
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.8, 1.8, 0.0),
            Vector3::new(1.8, 0.0, 1.8),
        ];
        // 3m: the equilateral triangle normal to [111]-type axis keeps 6 operations
        let ops = service.point_group_operations(&triangle).unwrap();
        assert_eq!(ops.len(), 6);
        assert!(ops.iter().any(|op| op.is_identity()));
    }

    #[test]
    fn test_scalene_cluster_keeps_only_identity() {
        let service = TabulatedSymmetry::cubic();
        let scalene = vec![
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 2.5, 0.7),
        ];
        let ops = service.point_group_operations(&scalene).unwrap();
        assert_eq!(ops.len(), 1);
        assert!(ops[0].is_identity());
    }
}
