//! LIN checksum calculation and verification.
//!
//! LIN frames are protected by an 8-bit checksum: the bitwise inverse of the
//! sum of all covered bytes, where every carry out of bit 7 is added back into
//! bit 0 (end-around carry). Two models exist:
//!
//! - **Classic** (LIN 1.x): covers the data bytes only.
//! - **Enhanced** (LIN 2.x): covers the protected identifier followed by the
//!   data bytes.
//!
//! # Example
//!
//! ```
//! use lin_checksum::{calculate_classic_checksum, verify_classic_checksum};
//!
//! // LIN 2.2A, section 2.8.3
//! let data = [0x4A, 0x55, 0x93, 0xE5];
//! let checksum = calculate_classic_checksum(&data);
//! assert_eq!(checksum, 0xE6);
//! assert!(verify_classic_checksum(checksum, &data));
//! ```
//!
//! None of these routines enforce the 8-byte LIN data limit. Use
//! [`LinFrame::try_new`](crate::LinFrame::try_new) when the limit matters.

/// LIN checksum model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ChecksumType {
    /// Classic checksum (LIN 1.x) - sum of data bytes only.
    #[default]
    Classic = 0,
    /// Enhanced checksum (LIN 2.x) - sum of protected ID and data bytes.
    Enhanced = 1,
}

/// Frame ID of the diagnostic master request frame.
pub const MASTER_REQUEST_ID: u8 = 0x3C;

/// Frame ID of the diagnostic slave response frame.
pub const SLAVE_RESPONSE_ID: u8 = 0x3D;

impl ChecksumType {
    /// Checksum model a LIN 2.x node uses for the given frame ID.
    ///
    /// Diagnostic frames (0x3C, 0x3D) always carry a classic checksum; every
    /// other frame carries an enhanced one. Only the low 6 bits of `id` are
    /// considered.
    pub fn for_frame_id(id: u8) -> Self {
        match id & crate::MAX_LIN_ID {
            MASTER_REQUEST_ID | SLAVE_RESPONSE_ID => Self::Classic,
            _ => Self::Enhanced,
        }
    }

    /// Calculate the checksum of `data` under this model.
    ///
    /// `pid` is ignored for [`ChecksumType::Classic`].
    pub fn calculate(self, pid: u8, data: &[u8]) -> u8 {
        match self {
            Self::Classic => calculate_classic_checksum(data),
            Self::Enhanced => calculate_enhanced_checksum(pid, data),
        }
    }

    /// Verify a received checksum of `data` under this model.
    ///
    /// `pid` is ignored for [`ChecksumType::Classic`].
    pub fn verify(self, checksum: u8, pid: u8, data: &[u8]) -> bool {
        match self {
            Self::Classic => verify_classic_checksum(checksum, data),
            Self::Enhanced => verify_enhanced_checksum(checksum, pid, data),
        }
    }
}

/// Sum `data` onto `seed` with end-around carry.
///
/// Each byte is added in a 16-bit accumulator and any carry out of bit 7 is
/// folded back in before the next byte. The folded value never exceeds 0xFF,
/// so a single fold per byte is enough. An empty slice returns `seed`.
///
/// The result is the un-inverted checksum; the transmitted checksum is its
/// bitwise complement.
#[inline]
pub fn intermediate_sum(seed: u8, data: &[u8]) -> u8 {
    let mut sum = seed as u16;
    for &byte in data {
        sum += byte as u16;
        sum = (sum & 0xFF) + (sum >> 8);
    }
    sum as u8
}

/// Calculate the classic (LIN 1.x) checksum over the data bytes.
#[inline]
pub fn calculate_classic_checksum(data: &[u8]) -> u8 {
    !intermediate_sum(0, data)
}

/// Calculate the enhanced (LIN 2.x) checksum over `pid` and the data bytes.
///
/// `pid` must already be the protected identifier, see
/// [`protected_id`](crate::protected_id).
#[inline]
pub fn calculate_enhanced_checksum(pid: u8, data: &[u8]) -> u8 {
    !intermediate_sum(pid, data)
}

/// Verify a received classic checksum.
///
/// A checksum is valid when it adds to the intermediate sum of the data to
/// give 0xFF.
#[inline]
pub fn verify_classic_checksum(checksum: u8, data: &[u8]) -> bool {
    checksum.wrapping_add(intermediate_sum(0, data)) == 0xFF
}

/// Verify a received enhanced checksum.
#[inline]
pub fn verify_enhanced_checksum(checksum: u8, pid: u8, data: &[u8]) -> bool {
    checksum.wrapping_add(intermediate_sum(pid, data)) == 0xFF
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_checksum() {
        // ~(0x01 + 0x02 + 0x03 + 0x04) = ~0x0A = 0xF5
        assert_eq!(calculate_classic_checksum(&[0x01, 0x02, 0x03, 0x04]), 0xF5);
    }

    #[test]
    fn test_carry_is_folded_per_byte() {
        // 0x91 + 0xFA = 0x18B -> 0x8B + 1 = 0x8C
        assert_eq!(intermediate_sum(0, &[0x91, 0xFA]), 0x8C);
        assert_eq!(calculate_classic_checksum(&[0x91, 0xFA]), 0x73);

        // A plain modulo-256 sum would give a different answer.
        let naive = !0x91u8.wrapping_add(0xFA);
        assert_ne!(naive, calculate_classic_checksum(&[0x91, 0xFA]));
    }

    #[test]
    fn test_seed_with_saturated_data() {
        // 0xBF + 0xFF = 0x1BE -> 0xBE + 1 = 0xBF, so the sum never moves.
        assert_eq!(intermediate_sum(0xBF, &[0xFF; 8]), 0xBF);
        assert_eq!(calculate_enhanced_checksum(0xBF, &[0xFF; 8]), 0x40);
    }

    #[test]
    fn test_empty_data() {
        assert_eq!(intermediate_sum(0x5A, &[]), 0x5A);
        assert_eq!(calculate_classic_checksum(&[]), 0xFF);
        assert_eq!(calculate_enhanced_checksum(0xBF, &[]), 0x40);
        assert!(verify_classic_checksum(0xFF, &[]));
        assert!(!verify_classic_checksum(0xF0, &[]));
    }

    #[test]
    fn test_longer_than_lin_frame() {
        let data = [0xFFu8; 32];
        let checksum = calculate_classic_checksum(&data);
        assert_eq!(checksum, 0x00);
        assert!(verify_classic_checksum(checksum, &data));
    }

    #[test]
    fn test_enhanced_differs_from_classic() {
        let data = [0x4A, 0x55, 0x93, 0xE5];
        assert_eq!(calculate_classic_checksum(&data), 0xE6);
        assert_eq!(calculate_enhanced_checksum(0xBF, &data), 0x27);
        assert!(!verify_classic_checksum(0x27, &data));
        assert!(verify_enhanced_checksum(0x27, 0xBF, &data));
    }

    #[test]
    fn test_checksum_types() {
        assert_eq!(ChecksumType::default(), ChecksumType::Classic);
        assert_eq!(ChecksumType::Classic as u8, 0);
        assert_eq!(ChecksumType::Enhanced as u8, 1);
    }

    #[test]
    fn test_checksum_type_for_frame_id() {
        assert_eq!(ChecksumType::for_frame_id(0x20), ChecksumType::Enhanced);
        assert_eq!(ChecksumType::for_frame_id(0x3C), ChecksumType::Classic);
        assert_eq!(ChecksumType::for_frame_id(0x3D), ChecksumType::Classic);
        assert_eq!(ChecksumType::for_frame_id(0x3E), ChecksumType::Enhanced);
        // High bits are ignored: 0x7C aliases 0x3C.
        assert_eq!(ChecksumType::for_frame_id(0x7C), ChecksumType::Classic);
    }

    #[test]
    fn test_checksum_type_dispatch() {
        let data = [0x4A, 0x55, 0x93, 0xE5];
        assert_eq!(ChecksumType::Classic.calculate(0xBF, &data), 0xE6);
        assert_eq!(ChecksumType::Enhanced.calculate(0xBF, &data), 0x27);
        assert!(ChecksumType::Classic.verify(0xE6, 0x00, &data));
        assert!(ChecksumType::Enhanced.verify(0x27, 0xBF, &data));
        assert!(!ChecksumType::Enhanced.verify(0xE6, 0xBF, &data));
    }
}
