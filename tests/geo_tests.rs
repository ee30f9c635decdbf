use staffclock::core::geo::{EARTH_RADIUS_M, evaluate};
use staffclock::errors::AppError;
use staffclock::models::coordinate::Coordinate;
use std::f64::consts::PI;

mod common;
use common::{SITE_LAT, SITE_LNG};

fn c(lat: f64, lng: f64) -> Coordinate {
    Coordinate::new(lat, lng).unwrap()
}

#[test]
fn test_identical_points_are_zero_distance_and_inside() {
    for p in [c(0.0, 0.0), c(SITE_LAT, SITE_LNG), c(-89.9, 179.9), c(90.0, -180.0)] {
        for r in [0.0, 1.0, 500.0] {
            let res = evaluate(&p, &p, r).unwrap();
            assert_eq!(res.distance_meters, 0.0);
            assert!(res.within_radius, "radius {} at {}", r, p);
        }
    }
}

#[test]
fn test_distance_is_symmetric() {
    let pairs = [
        (c(48.8566, 2.3522), c(51.5074, -0.1278)),
        (c(-33.8688, 151.2093), c(35.6762, 139.6503)),
        (c(SITE_LAT, SITE_LNG), c(25.2048, 55.2708)),
    ];

    for (a, b) in pairs {
        let ab = evaluate(&a, &b, 100.0).unwrap().distance_meters;
        let ba = evaluate(&b, &a, 100.0).unwrap().distance_meters;
        assert!((ab - ba).abs() < 1e-6, "{} vs {}", ab, ba);
    }
}

#[test]
fn test_paris_london_distance() {
    let d = evaluate(&c(48.8566, 2.3522), &c(51.5074, -0.1278), 0.0)
        .unwrap()
        .distance_meters;
    assert!((340_000.0..347_000.0).contains(&d), "got {}", d);
}

#[test]
fn test_antipodal_points_do_not_produce_nan() {
    let half_circumference = PI * EARTH_RADIUS_M;

    for (a, b) in [
        (c(0.0, 0.0), c(0.0, 180.0)),
        (c(90.0, 0.0), c(-90.0, 0.0)),
        (c(45.0, 90.0), c(-45.0, -90.0)),
    ] {
        let res = evaluate(&a, &b, 1000.0).unwrap();
        assert!(!res.distance_meters.is_nan());
        assert!(res.distance_meters >= 0.0);
        assert!((res.distance_meters - half_circumference).abs() < 1.0);
        assert!(!res.within_radius);
    }
}

#[test]
fn test_site_fixture_is_about_125_meters() {
    let res = evaluate(&c(25.276987, 55.297500), &c(SITE_LAT, SITE_LNG), 500.0).unwrap();
    assert!(
        (123.0..128.0).contains(&res.distance_meters),
        "got {}",
        res.distance_meters
    );
    assert!(res.within_radius);

    let tight = evaluate(&c(25.276987, 55.297500), &c(SITE_LAT, SITE_LNG), 100.0).unwrap();
    assert!(!tight.within_radius);
}

#[test]
fn test_radius_boundary_is_inclusive() {
    let a = c(10.0, 10.0);
    let b = c(10.001, 10.0);
    let d = evaluate(&a, &b, 0.0).unwrap().distance_meters;
    assert!(evaluate(&a, &b, d).unwrap().within_radius);
}

#[test]
fn test_out_of_range_coordinates_are_rejected() {
    assert!(matches!(
        Coordinate::new(90.5, 0.0),
        Err(AppError::InvalidCoordinate { .. })
    ));
    assert!(matches!(
        Coordinate::new(0.0, -180.01),
        Err(AppError::InvalidCoordinate { .. })
    ));
    assert!(Coordinate::new(f64::NAN, 0.0).is_err());

    // built without the constructor, still caught by evaluate
    let bad = Coordinate {
        latitude: -91.0,
        longitude: 0.0,
    };
    assert!(matches!(
        evaluate(&bad, &c(0.0, 0.0), 10.0),
        Err(AppError::InvalidCoordinate { .. })
    ));
    assert!(matches!(
        evaluate(&c(0.0, 0.0), &bad, 10.0),
        Err(AppError::InvalidCoordinate { .. })
    ));
}
