//! Signal model: the two sampled sine series and their error metric.
//!
//! Everything here is pure. The controller owns caching and the renderer
//! owns presentation; this module only turns numbers into numbers.

use std::f64::consts::TAU;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};

/// Allowed range of the `n_points` slider.
pub const POINT_COUNT_RANGE: RangeInclusive<usize> = 10..=100;
/// Allowed range of both amplitude sliders.
pub const AMPLITUDE_RANGE: RangeInclusive<f64> = 0.5..=5.0;

/// Current slider values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    pub point_count: usize,
    pub amplitude_1: f64,
    pub amplitude_2: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            point_count: 50,
            amplitude_1: 1.0,
            amplitude_2: 1.5,
        }
    }
}

impl Parameters {
    pub fn new(point_count: usize, amplitude_1: f64, amplitude_2: f64) -> Self {
        Self {
            point_count,
            amplitude_1,
            amplitude_2,
        }
    }

    /// Identity used for memoization. Compares amplitudes bitwise so that
    /// `-0.0`/`0.0` and NaN payloads never alias a cached series.
    pub fn cache_key(&self) -> (usize, u64, u64) {
        (
            self.point_count,
            self.amplitude_1.to_bits(),
            self.amplitude_2.to_bits(),
        )
    }

    /// Check the values against the slider ranges.
    pub fn validate(&self) -> Result<()> {
        if !POINT_COUNT_RANGE.contains(&self.point_count) {
            return Err(DashboardError::invalid("n_points", self.point_count));
        }
        for (name, value) in [
            ("amplitude_1", self.amplitude_1),
            ("amplitude_2", self.amplitude_2),
        ] {
            if !value.is_finite() || !AMPLITUDE_RANGE.contains(&value) {
                return Err(DashboardError::invalid(name, value));
            }
        }
        Ok(())
    }

    /// Clamp every value into its slider range. Non-finite amplitudes fall
    /// back to the defaults.
    pub fn clamped(self) -> Self {
        let defaults = Self::default();
        let clamp_amp = |v: f64, fallback: f64| {
            if v.is_finite() {
                v.clamp(*AMPLITUDE_RANGE.start(), *AMPLITUDE_RANGE.end())
            } else {
                fallback
            }
        };
        Self {
            point_count: self
                .point_count
                .clamp(*POINT_COUNT_RANGE.start(), *POINT_COUNT_RANGE.end()),
            amplitude_1: clamp_amp(self.amplitude_1, defaults.amplitude_1),
            amplitude_2: clamp_amp(self.amplitude_2, defaults.amplitude_2),
        }
    }
}

/// Sampled abscissa plus the two scaled sine series. All three vectors have
/// the same length; the constructor is private so that stays true.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSeries {
    x: Vec<f64>,
    y1: Vec<f64>,
    y2: Vec<f64>,
}

impl SampleSeries {
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y1(&self) -> &[f64] {
        &self.y1
    }

    pub fn y2(&self) -> &[f64] {
        &self.y2
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// MSE between `y1` and `y2`.
    pub fn mse(&self) -> Result<f64> {
        mean_squared_error(&self.y1, &self.y2)
    }

    /// `[x, y]` pairs for the first series.
    pub fn points_1(&self) -> Vec<[f64; 2]> {
        zip_points(&self.x, &self.y1)
    }

    /// `[x, y]` pairs for the second series.
    pub fn points_2(&self) -> Vec<[f64; 2]> {
        zip_points(&self.x, &self.y2)
    }

    /// Smallest and largest value over both series.
    pub fn y_range(&self) -> (f64, f64) {
        self.y1
            .iter()
            .chain(self.y2.iter())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }
}

fn zip_points(x: &[f64], y: &[f64]) -> Vec<[f64; 2]> {
    x.iter().zip(y).map(|(&x, &y)| [x, y]).collect()
}

/// `n` evenly spaced values from `start` to `end`, both included. The last
/// value is exactly `end`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            out[n - 1] = end;
            out
        }
    }
}

/// Sample `[0, 2π]` at `point_count` points and scale `sin(x)` by each amplitude.
///
/// Only checks what keeps the math well defined (`point_count >= 2`, finite
/// amplitudes); slider ranges are enforced by [`Parameters::validate`].
pub fn generate_series(point_count: usize, amplitude_1: f64, amplitude_2: f64) -> Result<SampleSeries> {
    if point_count < 2 {
        return Err(DashboardError::invalid("n_points", point_count));
    }
    if !amplitude_1.is_finite() {
        return Err(DashboardError::invalid("amplitude_1", amplitude_1));
    }
    if !amplitude_2.is_finite() {
        return Err(DashboardError::invalid("amplitude_2", amplitude_2));
    }

    let x = linspace(0.0, TAU, point_count);
    let (y1, y2) = x
        .iter()
        .map(|v| {
            let s = v.sin();
            (amplitude_1 * s, amplitude_2 * s)
        })
        .unzip();
    Ok(SampleSeries { x, y1, y2 })
}

/// Mean of the squared elementwise differences of `a` and `b`.
pub fn mean_squared_error(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(DashboardError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    if a.is_empty() {
        return Err(DashboardError::EmptyInput);
    }
    let sum: f64 = a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum();
    Ok(sum / a.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_small_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn clamped_pulls_values_into_range() {
        let p = Parameters::new(500, 0.1, f64::NAN).clamped();
        assert_eq!(p.point_count, 100);
        assert_eq!(p.amplitude_1, 0.5);
        assert_eq!(p.amplitude_2, 1.5);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn cache_key_distinguishes_signed_zero() {
        let a = Parameters::new(10, 0.0, 1.0);
        let b = Parameters::new(10, -0.0, 1.0);
        assert_ne!(a.cache_key(), b.cache_key());
    }
}
