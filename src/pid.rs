//! Protected identifier (PID) derivation.
//!
//! A LIN header carries the 6-bit frame ID extended with two parity bits:
//!
//! - P0 (bit 6) = ID0 ^ ID1 ^ ID2 ^ ID4
//! - P1 (bit 7) = !(ID1 ^ ID3 ^ ID4 ^ ID5)
//!
//! # Example
//!
//! ```
//! use lin_checksum::{ProtectedId, protected_id};
//!
//! assert_eq!(protected_id(0x3C), 0x3C);
//! assert_eq!(protected_id(0x01), 0xC1);
//!
//! let pid = ProtectedId::try_from(0xC1)?;
//! assert_eq!(pid.frame_id(), 0x01);
//! assert!(ProtectedId::try_from(0x01).is_err());
//! # Ok::<(), lin_checksum::Error>(())
//! ```

use crate::error::{Error, Result};

/// LIN frame ID range (0-63, 6 bits).
pub const MAX_LIN_ID: u8 = 0x3F;

/// Protected identifier for every 6-bit frame ID, indexed by frame ID.
pub const PROTECTED_ID_TABLE: [u8; 64] = build_table();

const fn parity_bits(id: u8) -> u8 {
    let id = id & MAX_LIN_ID;
    let p0 = (id ^ (id >> 1) ^ (id >> 2) ^ (id >> 4)) & 0x01;
    let p1 = !((id >> 1) ^ (id >> 3) ^ (id >> 4) ^ (id >> 5)) & 0x01;
    (p0 << 6) | (p1 << 7)
}

const fn build_table() -> [u8; 64] {
    let mut table = [0u8; 64];
    let mut id = 0;
    while id < 64 {
        table[id] = id as u8 | parity_bits(id as u8);
        id += 1;
    }
    table
}

/// Derive the protected identifier for a frame ID.
///
/// The top two bits of `id` are ignored, so `0x40` yields the same PID as
/// `0x00`.
#[inline]
pub fn protected_id(id: u8) -> u8 {
    PROTECTED_ID_TABLE[(id & MAX_LIN_ID) as usize]
}

/// Strip the parity bits from a protected identifier.
#[inline]
pub fn frame_id(pid: u8) -> u8 {
    pid & MAX_LIN_ID
}

/// Check that the parity bits of `pid` match its frame ID.
#[inline]
pub fn has_valid_parity(pid: u8) -> bool {
    protected_id(pid) == pid
}

/// A protected identifier with correct parity bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProtectedId(u8);

impl ProtectedId {
    /// Derive the protected identifier of a frame ID, masking it to 6 bits.
    pub fn from_frame_id(id: u8) -> Self {
        Self(protected_id(id))
    }

    /// The 6-bit frame ID.
    pub fn frame_id(self) -> u8 {
        frame_id(self.0)
    }

    /// The byte sent on the bus.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for ProtectedId {
    type Error = Error;

    /// Accept a received header byte if its parity bits are correct.
    fn try_from(pid: u8) -> Result<Self> {
        let expected = protected_id(pid);
        if expected != pid {
            log::debug!("rejecting PID {pid:#04x}: expected {expected:#04x}");
            return Err(Error::ParityMismatch { pid, expected });
        }
        Ok(Self(pid))
    }
}

impl From<ProtectedId> for u8 {
    fn from(pid: ProtectedId) -> Self {
        pid.0
    }
}
