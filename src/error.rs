//! Error types for the transform engines.

use thiserror::Error;

/// Errors raised by the Radon transform engines and their helpers.
///
/// Every variant except `Io` and `Fft` is a caller contract breach: the
/// operation stops at the point of detection and produces no partial result.
#[derive(Debug, Error)]
pub enum DrtError {
    /// A dimension the fast recursion or the FFT needs as a power of two is not one.
    #[error("{what} must be a power of two no smaller than 2, got {value}")]
    NotPowerOfTwo {
        /// Which dimension was checked.
        what: &'static str,
        /// The offending value.
        value: usize,
    },

    /// The fast engine only accepts square images.
    #[error("image must be square, got {rows}x{cols}")]
    NotSquare {
        /// Image rows.
        rows: usize,
        /// Image columns.
        cols: usize,
    },

    /// A buffer has the wrong length or shape.
    #[error("{what}: expected {expected}, got {got}")]
    ShapeMismatch {
        /// Which buffer was checked.
        what: &'static str,
        /// Expected extent.
        expected: usize,
        /// Actual extent.
        got: usize,
    },

    /// A scalar parameter is outside its valid range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A binary matrix dump is malformed.
    #[error("invalid matrix dump: {0}")]
    InvalidDump(String),

    /// Configuration could not be read or failed validation.
    #[error("configuration error: {0}")]
    Config(String),

    /// The FFT backend refused its buffers.
    #[error("fft failed: {0}")]
    Fft(#[from] realfft::FftError),
    /// Underlying I/O failure.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DrtError>;
