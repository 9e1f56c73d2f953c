//! Signal-to-noise ratio reporting.

use ndarray::Array1;

/// SNR of `estimate` against `reference`, in dB:
/// `10 * log10(||x||^2 / (||x - x_hat||^2 + eps))`.
///
/// Reporting helper only; nothing in the denoiser consults it. If the
/// lengths differ, the comparison covers the shorter prefix.
pub fn snr_db(reference: &Array1<f64>, estimate: &Array1<f64>) -> f64 {
    let n = reference.len().min(estimate.len());
    let signal_power: f64 = reference.iter().take(n).map(|x| x * x).sum();
    let noise_power: f64 = reference
        .iter()
        .zip(estimate.iter())
        .take(n)
        .map(|(x, y)| (x - y) * (x - y))
        .sum();
    10.0 * (signal_power / (noise_power + f64::EPSILON)).log10()
}
