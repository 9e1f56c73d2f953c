//! # wavesift
//!
//! Wavelet-domain denoising for 1-D signals.
//!
//! This crate provides:
//! - **Multi-level DWT**: orthogonal wavelet decomposition and exact
//!   reconstruction with five border-extension modes
//! - **Noise-adaptive thresholding**: universal (white noise) or per-scale
//!   (correlated noise) thresholds from median or mean absolute deviation
//! - **Hard/soft shrinkage** of detail coefficients, with the
//!   approximation band always passed through untouched
//!
//! The denoiser is batch-oriented and stateless per call: bind one signal
//! and one validated configuration, then filter as often as needed. The
//! output always has exactly the input length, whatever padding the
//! transform introduced.
//!
//! ## Example
//!
//! ```ignore
//! use ndarray::Array1;
//! use wavesift::{snr_db, WaveletDenoiser};
//!
//! let noisy: Array1<f64> = load_samples();
//! let denoiser = WaveletDenoiser::new("soft", "db4", 4, "symmetric", noisy.clone())?;
//! let cleaned = denoiser.filter(1.0, true, "median")?;
//! println!("SNR: {:.1} dB", snr_db(&cleaned, &noisy));
//! ```

pub mod config;
pub mod denoise;
pub mod dwt;
pub mod error;
pub mod snr;

pub use config::{ConfigError, DenoiseConfig};
pub use denoise::{
    compute_thresholds, denoise, mean_abs_dev, median_abs_dev, shrink, Dispersion, Thresholding,
    WaveletDenoiser,
};
pub use dwt::{max_level, wavedec, wavelist, waverec, BorderMode, Decomposition, Wavelet};
pub use error::DenoiseError;
pub use snr::snr_db;
