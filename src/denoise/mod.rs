//! Wavelet-domain denoiser.
//!
//! Decomposes a signal into a multiresolution pyramid, shrinks the detail
//! bands under a noise-adaptive threshold and reconstructs a cleaned
//! signal of the original length. Thresholds follow the universal rule of
//! Donoho & Johnstone under a white-noise assumption, or are recomputed
//! per scale for correlated noise (Johnstone & Silverman).

pub mod threshold;

use ndarray::Array1;

use crate::dwt::{max_level, wavedec, waverec, BorderMode, Decomposition, Wavelet};
use crate::error::DenoiseError;

pub use threshold::{compute_thresholds, mean_abs_dev, median_abs_dev, shrink, Dispersion, Thresholding};

use crate::config::DenoiseConfig;

/// One-signal, one-configuration denoiser.
///
/// Construction validates the configuration and stores it together with
/// the signal; [`filter`](Self::filter) can then be called any number of
/// times. The denoiser holds no mutable state, so repeated calls with the
/// same arguments produce identical output.
pub struct WaveletDenoiser {
    thresholding: Thresholding,
    wavelet: Wavelet,
    level: usize,
    mode: BorderMode,
    signal: Array1<f64>,
}

impl WaveletDenoiser {
    /// Validate the configuration and bind it to `signal`.
    ///
    /// # Arguments
    /// * `threshold_type` - "hard" or "soft" (case-insensitive)
    /// * `wavelet` - wavelet family name, matched case-sensitively against
    ///   the supported set (see [`crate::dwt::wavelist`])
    /// * `level` - decomposition depth, `1..=max_level(signal.len(), wavelet)`
    /// * `mode` - border extension mode (see [`BorderMode::parse`])
    /// * `signal` - the noisy signal, fixed for the lifetime of the denoiser
    ///
    /// Fails fast: every rejected value is reported before any transform
    /// work happens.
    pub fn new(
        threshold_type: &str,
        wavelet: &str,
        level: usize,
        mode: &str,
        signal: Array1<f64>,
    ) -> Result<Self, DenoiseError> {
        let wavelet = Wavelet::parse(wavelet)?;
        let thresholding = Thresholding::parse(threshold_type)?;
        let mode = BorderMode::parse(mode)?;

        if signal.is_empty() {
            return Err(DenoiseError::invalid_input("signal is empty"));
        }
        if signal.iter().any(|v| !v.is_finite()) {
            return Err(DenoiseError::invalid_input(
                "signal contains non-finite samples",
            ));
        }

        let deepest = max_level(signal.len(), wavelet);
        if level == 0 || level > deepest {
            return Err(DenoiseError::config(format!(
                "level {} out of range for {} samples with wavelet {} (valid: 1..={})",
                level,
                signal.len(),
                wavelet.name(),
                deepest
            )));
        }

        Ok(Self {
            thresholding,
            wavelet,
            level,
            mode,
            signal,
        })
    }

    /// Build a denoiser from a [`DenoiseConfig`].
    pub fn from_config(config: &DenoiseConfig, signal: Array1<f64>) -> Result<Self, DenoiseError> {
        Self::new(
            &config.threshold_type,
            &config.wavelet,
            config.level,
            &config.mode,
            signal,
        )
    }

    /// Denoise the bound signal and return a reconstruction of the same
    /// length.
    ///
    /// # Arguments
    /// * `scaling_factor` - multiplier on every threshold; 0 disables
    ///   shrinkage entirely
    /// * `universal` - one threshold for all bands (white noise) versus
    ///   one threshold per band (correlated noise)
    /// * `estimator` - "median" or "mean" (case-insensitive)
    pub fn filter(
        &self,
        scaling_factor: f64,
        universal: bool,
        estimator: &str,
    ) -> Result<Array1<f64>, DenoiseError> {
        let estimator = Dispersion::parse(estimator)?;
        self.filter_with(scaling_factor, universal, estimator)
    }

    /// [`filter`](Self::filter) with an already-parsed estimator.
    pub fn filter_with(
        &self,
        scaling_factor: f64,
        universal: bool,
        estimator: Dispersion,
    ) -> Result<Array1<f64>, DenoiseError> {
        if !scaling_factor.is_finite() || scaling_factor < 0.0 {
            return Err(DenoiseError::config(format!(
                "scaling factor must be finite and non-negative, got {}",
                scaling_factor
            )));
        }

        let n = self.signal.len();
        let signal = self.signal.to_vec();
        let decomposed = wavedec(&signal, self.wavelet, self.mode, self.level)?;

        let thresholds = compute_thresholds(
            &decomposed.details,
            n,
            estimator,
            universal,
            scaling_factor,
        )?;
        log::debug!(
            "thresholding {} detail bands ({}, universal={}): {:?}",
            decomposed.details.len(),
            self.wavelet.name(),
            universal,
            thresholds
        );

        // The approximation band passes through untouched; only detail
        // bands are shrunk.
        let shrunk: Vec<Vec<f64>> = decomposed
            .details
            .iter()
            .zip(thresholds.iter())
            .map(|(band, &t)| shrink(band, t, self.thresholding))
            .collect();
        debug_assert_eq!(shrunk.len(), decomposed.details.len());

        let rebuilt = Decomposition {
            approx: decomposed.approx,
            details: shrunk,
        };
        let mut reconstructed = waverec(&rebuilt, self.wavelet, self.mode)?;

        // Border padding can only lengthen the reconstruction. Anything
        // shorter means the pyramid was corrupted; surface it instead of
        // padding over it.
        if reconstructed.len() < n {
            return Err(DenoiseError::invalid_input(format!(
                "reconstruction produced {} samples for a {}-sample input",
                reconstructed.len(),
                n
            )));
        }
        reconstructed.truncate(n);
        Ok(Array1::from(reconstructed))
    }

    /// The signal this denoiser was constructed with.
    pub fn signal(&self) -> &Array1<f64> {
        &self.signal
    }

    /// Decomposition depth used by [`filter`](Self::filter).
    pub fn level(&self) -> usize {
        self.level
    }
}

/// Denoise `signal` in one call, taking every parameter from `config`.
pub fn denoise(signal: Array1<f64>, config: &DenoiseConfig) -> Result<Array1<f64>, DenoiseError> {
    let denoiser = WaveletDenoiser::from_config(config, signal)?;
    denoiser.filter(
        config.scaling_factor,
        config.universal,
        &config.estimator,
    )
}
