use super::*;
use crate::error::EngineError;

#[test]
fn test_distance_identical_vectors_is_zero() {
    let a = [300000.0, 1200.0, 3.0, 5.0];
    assert_eq!(euclidean_distance(&a, &a).unwrap(), 0.0);
}

#[test]
fn test_distance_known_value() {
    let a = [0.0, 0.0];
    let b = [3.0, 4.0];
    assert_eq!(euclidean_distance(&a, &b).unwrap(), 5.0);
}

#[test]
fn test_distance_is_symmetric() {
    let a = [300000.0, 1200.0, 3.0, 5.0];
    let b = [280000.0, 1100.0, 3.0, 6.0];
    assert_eq!(
        euclidean_distance(&a, &b).unwrap(),
        euclidean_distance(&b, &a).unwrap()
    );
}

#[test]
fn test_distance_raw_values_unweighted() {
    let a = [300000.0, 1200.0, 3.0, 5.0];
    let b = [280000.0, 1100.0, 3.0, 6.0];
    let expected = (20000.0f64.powi(2) + 100.0f64.powi(2) + 1.0).sqrt();
    assert_eq!(euclidean_distance(&a, &b).unwrap(), expected);
}

#[test]
fn test_distance_rejects_mismatched_lengths() {
    let err = euclidean_distance(&[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err();
    assert_eq!(
        err,
        EngineError::DimensionMismatch {
            expected: 3,
            actual: 2
        }
    );
}

#[test]
fn test_distance_empty_vectors() {
    assert_eq!(euclidean_distance(&[], &[]).unwrap(), 0.0);
}

#[test]
fn test_check_dimensions_reports_first_offender() {
    let vectors: Vec<Vec<f64>> = vec![vec![1.0, 2.0], vec![1.0], vec![1.0, 2.0, 3.0]];
    let err = check_dimensions(2, vectors.iter().map(|v| v.as_slice())).unwrap_err();
    assert_eq!(
        err,
        EngineError::DimensionMismatch {
            expected: 2,
            actual: 1
        }
    );
}

#[test]
fn test_listing_dim() {
    let listing = Listing::new(7, vec![1.0, 2.0, 3.0, 4.0]);
    assert_eq!(listing.id, 7);
    assert_eq!(listing.dim(), 4);
}

#[test]
fn test_scaler_standardizes_columns() {
    let listings = vec![
        Listing::new(1, vec![100.0, 1.0]),
        Listing::new(2, vec![300.0, 3.0]),
    ];
    let scaler = FeatureScaler::fit(&listings).unwrap();
    assert_eq!(scaler.means(), &[200.0, 2.0]);
    assert_eq!(scaler.std_devs(), &[100.0, 1.0]);

    let scaled = scaler.transform(&listings).unwrap();
    assert_eq!(scaled[0].features, vec![-1.0, -1.0]);
    assert_eq!(scaled[1].features, vec![1.0, 1.0]);
    assert_eq!(scaled[0].id, 1);
    assert_eq!(scaled[1].id, 2);
}

#[test]
fn test_scaler_constant_column_maps_to_zero() {
    let listings = vec![
        Listing::new(1, vec![3.0, 10.0]),
        Listing::new(2, vec![3.0, 20.0]),
    ];
    let scaler = FeatureScaler::fit(&listings).unwrap();
    let scaled = scaler.transform(&listings).unwrap();
    assert_eq!(scaled[0].features[0], 0.0);
    assert_eq!(scaled[1].features[0], 0.0);
}

#[test]
fn test_scaler_does_not_mutate_input() {
    let listings = vec![
        Listing::new(1, vec![100.0]),
        Listing::new(2, vec![300.0]),
    ];
    let before = listings.clone();
    let scaler = FeatureScaler::fit(&listings).unwrap();
    let _ = scaler.transform(&listings).unwrap();
    assert_eq!(listings, before);
}

#[test]
fn test_scaler_rejects_empty_set() {
    let err = FeatureScaler::fit(&[]).unwrap_err();
    assert!(matches!(err, EngineError::InvalidArgument(_)));
}

#[test]
fn test_scaler_rejects_mismatched_listing() {
    let listings = vec![Listing::new(1, vec![1.0, 2.0]), Listing::new(2, vec![3.0, 4.0])];
    let scaler = FeatureScaler::fit(&listings).unwrap();
    let err = scaler.transform_one(&Listing::new(3, vec![1.0])).unwrap_err();
    assert!(matches!(err, EngineError::DimensionMismatch { .. }));
}
