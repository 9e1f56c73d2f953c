//! Multi-level discrete wavelet transform.
//!
//! Convolution-based analysis and synthesis over the orthogonal banks in
//! [`super::family`]. The analysis side extends the signal by
//! `filter_len - 1` samples per side according to the border mode, then
//! convolves and decimates, keeping the partial-overlap boundary
//! coefficients; each band therefore has length `(n + filter_len - 1) / 2`.
//! The synthesis side upsamples, convolves with the reconstruction pair and
//! crops `filter_len - 2` samples per side, producing `n` samples for even
//! `n` and `n + 1` for odd `n`. Together the two sides reconstruct the
//! input exactly (up to floating-point round-off) for every supported
//! wavelet and border mode.
//!
//! Callers must treat band lengths as opaque: they follow from the filter
//! support and the border handling, not from `n / 2^level`.

use crate::dwt::family::{FilterBank, Wavelet};
use crate::error::DenoiseError;

/// Edge-extension policy applied before analysis convolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderMode {
    /// Pad with zeros.
    Zero,
    /// Repeat the edge sample.
    Constant,
    /// Half-point mirror: `... x1 x0 | x0 x1 ...`
    Symmetric,
    /// Whole-point mirror: `... x2 x1 | x0 x1 ...`
    Reflect,
    /// Wrap around.
    Periodic,
}

impl Default for BorderMode {
    fn default() -> Self {
        Self::Symmetric
    }
}

impl BorderMode {
    /// Parse a border-mode identifier. Unknown names are a configuration
    /// error, same as wavelet names.
    pub fn parse(name: &str) -> Result<Self, DenoiseError> {
        match name {
            "zero" => Ok(Self::Zero),
            "constant" => Ok(Self::Constant),
            "symmetric" => Ok(Self::Symmetric),
            "reflect" => Ok(Self::Reflect),
            "periodic" => Ok(Self::Periodic),
            _ => Err(DenoiseError::config(format!(
                "unknown border mode '{}' (supported: zero, constant, symmetric, reflect, periodic)",
                name
            ))),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::Constant => "constant",
            Self::Symmetric => "symmetric",
            Self::Reflect => "reflect",
            Self::Periodic => "periodic",
        }
    }
}

impl std::str::FromStr for BorderMode {
    type Err = DenoiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Result of a multi-level decomposition.
///
/// `details` is ordered coarsest to finest: `details[0]` holds the detail
/// band of the deepest level (cD_level), `details[last]` the finest band
/// (cD_1).
#[derive(Debug, Clone)]
pub struct Decomposition {
    /// Approximation band at the coarsest scale.
    pub approx: Vec<f64>,
    /// Detail bands, coarsest first.
    pub details: Vec<Vec<f64>>,
}

impl Decomposition {
    /// Number of decomposition levels.
    pub fn level(&self) -> usize {
        self.details.len()
    }
}

/// Value of the extended signal at (possibly out-of-range) position `p`.
fn sample(x: &[f64], p: isize, mode: BorderMode) -> f64 {
    let n = x.len() as isize;
    if p >= 0 && p < n {
        return x[p as usize];
    }
    match mode {
        BorderMode::Zero => 0.0,
        BorderMode::Constant => {
            if p < 0 {
                x[0]
            } else {
                x[(n - 1) as usize]
            }
        }
        BorderMode::Symmetric => {
            // Period 2n: x0 x1 .. xn-1 xn-1 .. x1 x0, repeated.
            let q = p.rem_euclid(2 * n);
            let q = if q < n { q } else { 2 * n - 1 - q };
            x[q as usize]
        }
        BorderMode::Reflect => {
            if n == 1 {
                return x[0];
            }
            // Period 2n-2: the edge samples are not repeated.
            let period = 2 * n - 2;
            let q = p.rem_euclid(period);
            let q = if q < n { q } else { period - q };
            x[q as usize]
        }
        BorderMode::Periodic => x[p.rem_euclid(n) as usize],
    }
}

/// Extend `x` by `pad` samples on each side according to `mode`.
fn extend(x: &[f64], pad: usize, mode: BorderMode) -> Vec<f64> {
    let pad = pad as isize;
    let n = x.len() as isize;
    (-pad..n + pad).map(|p| sample(x, p, mode)).collect()
}

/// Convolve the extended signal with an analysis filter and decimate by 2.
fn down_convolve(ext: &[f64], filt: &[f64], out_len: usize) -> Vec<f64> {
    let m = filt.len();
    (0..out_len)
        .map(|k| {
            let base = 2 * k;
            filt.iter()
                .enumerate()
                .map(|(j, &f)| f * ext[base + m - j])
                .sum()
        })
        .collect()
}

/// One analysis step: signal -> (approximation, detail).
fn analyze(x: &[f64], bank: &FilterBank, mode: BorderMode) -> (Vec<f64>, Vec<f64>) {
    let n = x.len();
    let m = bank.dec_lo.len();
    let out_len = (n + m - 1) / 2;
    let ext = extend(x, m - 1, mode);
    let approx = down_convolve(&ext, &bank.dec_lo, out_len);
    let detail = down_convolve(&ext, &bank.dec_hi, out_len);
    (approx, detail)
}

/// One synthesis step: (approximation, detail) -> signal.
///
/// Upsample both bands, convolve with the reconstruction pair, sum the
/// channels and crop `filter_len - 2` samples per side. For orthogonal
/// banks the quadrature-mirror signs cancel the aliasing introduced by the
/// decimation, so the output reproduces the analysis input exactly.
fn synthesize(
    approx: &[f64],
    detail: &[f64],
    bank: &FilterBank,
) -> Result<Vec<f64>, DenoiseError> {
    let l = approx.len();
    let m = bank.rec_lo.len();
    let out_len = (2 * l + 2)
        .checked_sub(m)
        .filter(|&len| len > 0)
        .ok_or_else(|| {
            DenoiseError::invalid_input(format!(
                "band of length {} too short to reconstruct with a {}-tap filter",
                l, m
            ))
        })?;

    let mut out = vec![0.0; out_len];
    for (t, slot) in out.iter_mut().enumerate() {
        // Position in the uncropped full convolution.
        let s = t + m - 2;
        let k_min = if s >= m - 1 { (s + 2 - m) / 2 } else { 0 };
        let k_max = (s / 2).min(l - 1);
        let mut acc = 0.0;
        for k in k_min..=k_max {
            let j = s - 2 * k;
            acc += approx[k] * bank.rec_lo[j] + detail[k] * bank.rec_hi[j];
        }
        *slot = acc;
    }
    Ok(out)
}

/// Multi-level forward transform.
///
/// Decomposes `signal` into one approximation band and `level` detail
/// bands (coarsest first). `level` must be at least 1; depth validation
/// against the signal length is the caller's concern (see
/// [`super::max_level`]).
pub fn wavedec(
    signal: &[f64],
    wavelet: Wavelet,
    mode: BorderMode,
    level: usize,
) -> Result<Decomposition, DenoiseError> {
    if signal.is_empty() {
        return Err(DenoiseError::invalid_input("cannot decompose an empty signal"));
    }
    if level == 0 {
        return Err(DenoiseError::config("decomposition level must be at least 1"));
    }

    let bank = wavelet.bank();
    let mut approx = signal.to_vec();
    let mut details = Vec::with_capacity(level);
    for _ in 0..level {
        let (a, d) = analyze(&approx, &bank, mode);
        details.push(d);
        approx = a;
    }
    details.reverse();
    Ok(Decomposition { approx, details })
}

/// Multi-level inverse transform.
///
/// Rebuilds a signal from a (possibly modified) decomposition. The border
/// mode is accepted for symmetry with [`wavedec`]; the synthesis side is
/// extension-free, so it does not influence the result. The output length
/// may exceed the original signal length by one sample per odd-length
/// level; callers that need the exact original length truncate.
pub fn waverec(
    decomp: &Decomposition,
    wavelet: Wavelet,
    _mode: BorderMode,
) -> Result<Vec<f64>, DenoiseError> {
    let bank = wavelet.bank();
    let mut approx = decomp.approx.clone();
    for detail in &decomp.details {
        // An odd-length level reconstructs one sample long; drop it before
        // pairing with the next band, as the analysis never saw it.
        if approx.len() == detail.len() + 1 {
            approx.pop();
        }
        if approx.len() != detail.len() {
            return Err(DenoiseError::invalid_input(format!(
                "pyramid band length mismatch: approximation has {} samples, detail has {}",
                approx.len(),
                detail.len()
            )));
        }
        approx = synthesize(&approx, detail, &bank)?;
    }
    Ok(approx)
}
