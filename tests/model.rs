use std::f64::consts::TAU;

use approx::assert_relative_eq;
use mse_dashboard::model::*;
use mse_dashboard::DashboardError;

#[test]
fn series_have_point_count_elements_and_span_two_pi() {
    for n in [2usize, 10, 50, 100] {
        let s = generate_series(n, 1.0, 2.0).unwrap();
        assert_eq!(s.len(), n);
        assert_eq!(s.x().len(), n);
        assert_eq!(s.y1().len(), n);
        assert_eq!(s.y2().len(), n);
        assert_eq!(s.x()[0], 0.0);
        assert_relative_eq!(s.x()[n - 1], TAU, epsilon = 1e-12);
    }
}

#[test]
fn x_is_evenly_spaced() {
    let s = generate_series(11, 1.0, 1.0).unwrap();
    let step = TAU / 10.0;
    for w in s.x().windows(2) {
        assert_relative_eq!(w[1] - w[0], step, epsilon = 1e-12);
    }
}

#[test]
fn series_are_scaled_sines() {
    let s = generate_series(25, 0.5, 4.0).unwrap();
    for i in 0..s.len() {
        let sin = s.x()[i].sin();
        assert_relative_eq!(s.y1()[i], 0.5 * sin, epsilon = 1e-12);
        assert_relative_eq!(s.y2()[i], 4.0 * sin, epsilon = 1e-12);
    }
}

#[test]
fn fewer_than_two_points_is_rejected() {
    for n in [0usize, 1] {
        match generate_series(n, 1.0, 1.0) {
            Err(DashboardError::InvalidParameter { name, .. }) => assert_eq!(name, "n_points"),
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }
}

#[test]
fn non_finite_amplitude_is_rejected() {
    assert!(matches!(
        generate_series(10, f64::NAN, 1.0),
        Err(DashboardError::InvalidParameter { name: "amplitude_1", .. })
    ));
    assert!(matches!(
        generate_series(10, 1.0, f64::INFINITY),
        Err(DashboardError::InvalidParameter { name: "amplitude_2", .. })
    ));
}

#[test]
fn mse_of_identical_input_is_zero() {
    let a = [0.3, -1.2, 4.5, 0.0];
    assert_eq!(mean_squared_error(&a, &a).unwrap(), 0.0);
}

#[test]
fn mse_is_symmetric() {
    let a = [1.0, 2.0, 3.0, -4.0];
    let b = [0.5, 2.5, -3.0, 4.0];
    assert_eq!(
        mean_squared_error(&a, &b).unwrap(),
        mean_squared_error(&b, &a).unwrap()
    );
}

#[test]
fn mse_known_value() {
    // diffs 1, -2, 3 -> (1 + 4 + 9) / 3
    let got = mean_squared_error(&[1.0, 0.0, 3.0], &[0.0, 2.0, 0.0]).unwrap();
    assert_relative_eq!(got, 14.0 / 3.0, epsilon = 1e-12);
}

#[test]
fn mse_scaling_law_matches_independent_computation() {
    let n = 50;
    let s = generate_series(n, 1.0, 1.5).unwrap();
    let expected: f64 = (0..n)
        .map(|i| {
            let x = TAU * i as f64 / (n - 1) as f64;
            (0.5 * x.sin()).powi(2)
        })
        .sum::<f64>()
        / n as f64;
    assert_relative_eq!(s.mse().unwrap(), expected, epsilon = 1e-9);
}

#[test]
fn mse_length_mismatch_is_an_error() {
    let err = mean_squared_error(&[1.0, 2.0], &[1.0]).unwrap_err();
    assert_eq!(err, DashboardError::LengthMismatch { left: 2, right: 1 });
}

#[test]
fn mse_of_empty_input_is_an_error() {
    assert_eq!(
        mean_squared_error(&[], &[]).unwrap_err(),
        DashboardError::EmptyInput
    );
}

#[test]
fn parameters_validate_slider_ranges() {
    assert!(Parameters::default().validate().is_ok());
    assert!(Parameters::new(10, 0.5, 5.0).validate().is_ok());
    assert!(Parameters::new(9, 1.0, 1.0).validate().is_err());
    assert!(Parameters::new(101, 1.0, 1.0).validate().is_err());
    assert!(Parameters::new(50, 0.4, 1.0).validate().is_err());
    assert!(Parameters::new(50, 1.0, 5.1).validate().is_err());
    assert!(Parameters::new(50, f64::NAN, 1.0).validate().is_err());
}

#[test]
fn y_range_spans_both_series() {
    let s = generate_series(5, 1.0, 3.0).unwrap();
    let (lo, hi) = s.y_range();
    assert_relative_eq!(lo, -3.0, epsilon = 1e-12);
    assert_relative_eq!(hi, 3.0, epsilon = 1e-12);
}
