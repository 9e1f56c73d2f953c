//! Multiresolution transform layer.
//!
//! The denoiser consumes exactly three capabilities from this module:
//! forward decomposition ([`wavedec`]), inverse reconstruction
//! ([`waverec`]) and the wavelet-family membership query
//! ([`Wavelet::parse`] / [`wavelist`]). Band sizes are decided in here,
//! by filter support and border handling; callers treat them as opaque.

mod family;
mod transform;

pub use family::{max_level, wavelist, Wavelet};
pub use transform::{wavedec, waverec, BorderMode, Decomposition};
