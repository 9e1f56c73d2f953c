//! Noise estimation and coefficient shrinkage.
//!
//! Two dispersion estimators (median and mean absolute deviation), the
//! per-band threshold computation built on them, and the hard/soft
//! shrinkage rules applied to detail bands.

use crate::error::DenoiseError;

/// Factor relating the median absolute deviation to the standard deviation
/// of a zero-mean Gaussian.
const MAD_TO_SIGMA: f64 = 0.6745;

/// Shrinkage rule applied to detail coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Thresholding {
    /// Zero coefficients at or below the threshold, keep the rest as-is.
    Hard,
    /// Zero coefficients at or below the threshold, shrink the rest
    /// toward zero by the threshold amount.
    Soft,
}

impl Thresholding {
    /// Parse a threshold-type identifier, case-insensitively.
    pub fn parse(name: &str) -> Result<Self, DenoiseError> {
        match name.to_ascii_lowercase().as_str() {
            "hard" => Ok(Self::Hard),
            "soft" => Ok(Self::Soft),
            _ => Err(DenoiseError::config(format!(
                "unknown threshold type '{}' (must be hard or soft)",
                name
            ))),
        }
    }
}

impl std::str::FromStr for Thresholding {
    type Err = DenoiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Dispersion estimator used to infer the noise scale from a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispersion {
    /// Median absolute deviation, robust to outliers.
    Median,
    /// Mean absolute deviation.
    Mean,
}

impl Dispersion {
    /// Parse an estimator identifier, case-insensitively.
    pub fn parse(name: &str) -> Result<Self, DenoiseError> {
        match name.to_ascii_lowercase().as_str() {
            "median" => Ok(Self::Median),
            "mean" => Ok(Self::Mean),
            _ => Err(DenoiseError::config(format!(
                "unknown dispersion estimator '{}' (must be median or mean)",
                name
            ))),
        }
    }

    /// Apply the selected estimator to a coefficient band.
    pub fn dispersion(&self, w: &[f64]) -> Result<f64, DenoiseError> {
        match self {
            Self::Median => median_abs_dev(w),
            Self::Mean => mean_abs_dev(w),
        }
    }
}

impl std::str::FromStr for Dispersion {
    type Err = DenoiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn median(w: &[f64]) -> Result<f64, DenoiseError> {
    if w.is_empty() {
        return Err(DenoiseError::invalid_input(
            "dispersion of an empty coefficient band is undefined",
        ));
    }
    let mut sorted = w.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Ok(sorted[mid])
    }
}

/// Median absolute deviation of the coefficients `w1..wn`:
/// `median(|w_i - median(w)|)`.
pub fn median_abs_dev(w: &[f64]) -> Result<f64, DenoiseError> {
    let center = median(w)?;
    let devs: Vec<f64> = w.iter().map(|v| (v - center).abs()).collect();
    median(&devs)
}

/// Mean absolute deviation of the coefficients `w1..wn`:
/// `mean(|w_i - mean(w)|)`.
pub fn mean_abs_dev(w: &[f64]) -> Result<f64, DenoiseError> {
    if w.is_empty() {
        return Err(DenoiseError::invalid_input(
            "dispersion of an empty coefficient band is undefined",
        ));
    }
    let n = w.len() as f64;
    let center: f64 = w.iter().sum::<f64>() / n;
    Ok(w.iter().map(|v| (v - center).abs()).sum::<f64>() / n)
}

/// Compute one threshold per detail band.
///
/// Universal mode assumes a single white-noise floor: the noise scale is
/// estimated once from the COARSEST detail band (`details[0]`), lambda is
/// `sqrt(2 ln N)` with `N` the original signal length, and the resulting
/// scalar is applied to every band. Per-scale mode re-estimates both
/// lambda and the noise scale from each band independently, which adapts
/// to noise whose spectrum varies across scales.
pub fn compute_thresholds(
    details: &[Vec<f64>],
    signal_len: usize,
    estimator: Dispersion,
    universal: bool,
    scaling_factor: f64,
) -> Result<Vec<f64>, DenoiseError> {
    if details.is_empty() {
        return Err(DenoiseError::config(
            "decomposition has no detail bands to threshold",
        ));
    }

    if universal {
        let sigma = estimator.dispersion(&details[0])? / MAD_TO_SIGMA;
        let lambda = (2.0 * (signal_len as f64).ln()).sqrt();
        let threshold = lambda * sigma * scaling_factor;
        Ok(vec![threshold; details.len()])
    } else {
        details
            .iter()
            .map(|band| {
                let lambda = (2.0 * (band.len() as f64).ln()).sqrt();
                let sigma = estimator.dispersion(band)? / MAD_TO_SIGMA;
                Ok(lambda * sigma * scaling_factor)
            })
            .collect()
    }
}

/// Apply a shrinkage rule to one band.
pub fn shrink(band: &[f64], threshold: f64, rule: Thresholding) -> Vec<f64> {
    match rule {
        Thresholding::Hard => band
            .iter()
            .map(|&w| if w.abs() > threshold { w } else { 0.0 })
            .collect(),
        Thresholding::Soft => band
            .iter()
            .map(|&w| w.signum() * (w.abs() - threshold).max(0.0))
            .collect(),
    }
}
