use thiserror::Error;

/// Errors produced by the denoising pipeline.
///
/// `Config` covers everything rejected at construction or dispatch time:
/// unknown wavelet names, threshold types, estimator names, border modes,
/// and (level, signal length, wavelet) combinations that cannot be
/// decomposed. `InvalidInput` covers malformed signals and internal
/// invariant violations that are surfaced rather than masked.
#[derive(Error, Debug)]
pub enum DenoiseError {
    #[error("configuration error: {message}")]
    Config { message: String },

    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

impl DenoiseError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DenoiseError::config("unknown wavelet 'foo'");
        assert_eq!(err.to_string(), "configuration error: unknown wavelet 'foo'");

        let err = DenoiseError::invalid_input("empty signal");
        assert_eq!(err.to_string(), "invalid input: empty signal");
    }
}
