use walrus::{Axis, Error, ForceScanOptions, OneWayForceScanOptions};

#[test]
fn default_gaps_are_ten() {
    let opts = ForceScanOptions::default();
    assert_eq!(opts.horizontal_gap(), 10.0);
    assert_eq!(opts.vertical_gap(), 10.0);

    let one_way = OneWayForceScanOptions::default();
    assert_eq!(one_way.horizontal_gap(), 10.0);
    assert_eq!(one_way.vertical_gap(), 10.0);
    assert_eq!(one_way.axis, Axis::Horizontal);
}

#[test]
fn negative_gap_is_rejected_at_construction() {
    let err = ForceScanOptions::new(-1.0, 0.0).unwrap_err();
    assert!(matches!(
        err,
        Error::NegativeGap {
            axis: Axis::Horizontal,
            ..
        }
    ));

    let err = ForceScanOptions::new(0.0, -0.25).unwrap_err();
    assert!(matches!(
        err,
        Error::NegativeGap {
            axis: Axis::Vertical,
            ..
        }
    ));

    assert!(OneWayForceScanOptions::new(-2.0, 0.0, Axis::Vertical).is_err());
}

#[test]
fn negative_gap_is_rejected_at_assignment_and_leaves_the_old_value() {
    let mut opts = ForceScanOptions::default();
    assert!(opts.set_vertical_gap(-0.5).is_err());
    assert_eq!(opts.vertical_gap(), 10.0);

    assert!(opts.set_horizontal_gap(3.5).is_ok());
    assert_eq!(opts.horizontal_gap(), 3.5);

    let mut one_way = OneWayForceScanOptions::default();
    assert!(one_way.set_horizontal_gap(-1.0).is_err());
    assert_eq!(one_way.horizontal_gap(), 10.0);
}

#[test]
fn non_finite_gaps_are_rejected() {
    assert!(ForceScanOptions::new(f64::NAN, 0.0).is_err());
    assert!(ForceScanOptions::new(0.0, f64::INFINITY).is_err());
}

#[test]
fn gap_errors_name_the_offending_axis() {
    let err = ForceScanOptions::new(1.0, -4.0).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("vertical gap"), "unexpected message: {message}");
    assert!(message.contains("-4"), "unexpected message: {message}");
}

#[test]
fn zero_gaps_are_allowed() {
    let opts = ForceScanOptions::new(0.0, 0.0).unwrap();
    assert_eq!(opts.horizontal_gap(), 0.0);
    assert_eq!(opts.vertical_gap(), 0.0);
}
