//! Error types for the length- and parity-checked LIN API.
//!
//! The checksum and protected-identifier routines themselves are total and
//! never fail. [`Error`] is only produced at the checked call boundary:
//! [`LinFrame::try_new`](crate::LinFrame::try_new) and
//! [`ProtectedId::try_from`](crate::ProtectedId).
//!
//! # Example
//!
//! ```
//! use lin_checksum::{Error, LinFrame};
//!
//! match LinFrame::try_new(0x20, &[0u8; 9]) {
//!     Err(Error::DataTooLong { actual, max }) => {
//!         assert_eq!(actual, 9);
//!         assert_eq!(max, 8);
//!     }
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

use core::fmt;

/// Errors raised by the checked LIN frame and identifier constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// More data bytes were supplied than a LIN frame can carry.
    DataTooLong {
        /// Number of bytes supplied
        actual: usize,
        /// Maximum number of data bytes in a LIN frame
        max: usize,
    },

    /// The frame identifier does not fit in 6 bits.
    ///
    /// Only raised by strict constructors. [`protected_id`](crate::protected_id)
    /// masks the identifier instead.
    InvalidFrameId(u8),

    /// The parity bits of a received protected identifier are wrong.
    ///
    /// This usually means the header byte was corrupted on the bus.
    ParityMismatch {
        /// The byte that was received
        pid: u8,
        /// The protected identifier expected for its low 6 bits
        expected: u8,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DataTooLong { actual, max } => write!(
                f,
                "LIN frame data too long: at most {max} bytes allowed, got {actual}"
            ),
            Error::InvalidFrameId(id) => {
                write!(f, "Invalid LIN frame identifier {id:#04x}: must be 0x00..=0x3F")
            }
            Error::ParityMismatch { pid, expected } => write!(
                f,
                "Protected identifier parity mismatch: got {pid:#04x}, expected {expected:#04x}"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// A specialized Result type for checked LIN operations.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_data_too_long() {
        let err = Error::DataTooLong { actual: 12, max: 8 };
        assert_eq!(
            err.to_string(),
            "LIN frame data too long: at most 8 bytes allowed, got 12"
        );
    }

    #[test]
    fn test_display_parity_mismatch() {
        let err = Error::ParityMismatch {
            pid: 0x00,
            expected: 0x80,
        };
        assert_eq!(
            err.to_string(),
            "Protected identifier parity mismatch: got 0x00, expected 0x80"
        );
    }

    #[test]
    fn test_display_invalid_frame_id() {
        assert_eq!(
            Error::InvalidFrameId(0x40).to_string(),
            "Invalid LIN frame identifier 0x40: must be 0x00..=0x3F"
        );
    }
}
