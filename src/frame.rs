//! Fixed-capacity LIN frame value.
//!
//! [`LinFrame`] bundles a frame ID, up to 8 data bytes, and the checksum byte.
//! It computes and checks its own checksum but does no framing or transport.

use crate::checksum::ChecksumType;
use crate::error::{Error, Result};
use crate::pid::{MAX_LIN_ID, protected_id};

/// Maximum LIN frame data size (8 bytes).
pub const MAX_LIN_DATA_LEN: usize = 8;

/// A LIN frame response: identifier, data and checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "LinFrameRecord"))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinFrame {
    /// LIN frame ID (0-63, 6 bits).
    pub id: u8,
    /// Frame data (up to 8 bytes, zero-padded).
    pub data: [u8; MAX_LIN_DATA_LEN],
    /// Actual data length.
    ///
    /// Must not exceed [`MAX_LIN_DATA_LEN`]. Larger values are read as
    /// [`MAX_LIN_DATA_LEN`] by [`data`](Self::data).
    pub data_len: u8,
    /// Checksum byte.
    pub checksum: u8,
    /// Checksum model the checksum byte was computed with.
    pub checksum_type: ChecksumType,
}

impl LinFrame {
    /// Create a new LIN frame with a zero checksum.
    ///
    /// # Arguments
    /// * `id` - Frame ID, masked to 6 bits
    /// * `data` - Frame data, truncated to 8 bytes
    pub fn new(id: u8, data: &[u8]) -> Self {
        let mut frame_data = [0u8; MAX_LIN_DATA_LEN];
        let len = data.len().min(MAX_LIN_DATA_LEN);
        frame_data[..len].copy_from_slice(&data[..len]);

        Self {
            id: id & MAX_LIN_ID,
            data: frame_data,
            data_len: len as u8,
            checksum: 0,
            checksum_type: ChecksumType::default(),
        }
    }

    /// Create a new LIN frame, rejecting inputs [`new`](Self::new) would
    /// silently truncate.
    pub fn try_new(id: u8, data: &[u8]) -> Result<Self> {
        if id > MAX_LIN_ID {
            log::debug!("rejecting LIN frame ID {id:#04x}");
            return Err(Error::InvalidFrameId(id));
        }
        if data.len() > MAX_LIN_DATA_LEN {
            log::debug!("rejecting LIN frame {id:#04x}: {} data bytes", data.len());
            return Err(Error::DataTooLong {
                actual: data.len(),
                max: MAX_LIN_DATA_LEN,
            });
        }
        Ok(Self::new(id, data))
    }

    /// Create a LIN frame with classic checksum.
    pub fn with_classic_checksum(id: u8, data: &[u8]) -> Self {
        Self::with_checksum(ChecksumType::Classic, id, data)
    }

    /// Create a LIN frame with enhanced checksum.
    pub fn with_enhanced_checksum(id: u8, data: &[u8]) -> Self {
        Self::with_checksum(ChecksumType::Enhanced, id, data)
    }

    /// Create a LIN frame with the checksum computed under `checksum_type`.
    pub fn with_checksum(checksum_type: ChecksumType, id: u8, data: &[u8]) -> Self {
        let mut frame = Self::new(id, data);
        frame.checksum_type = checksum_type;
        frame.checksum = frame.calculate_checksum();
        frame
    }

    /// Get the protected ID (ID with parity bits).
    pub fn protected_id(&self) -> u8 {
        protected_id(self.id)
    }

    /// Get the data slice.
    pub fn data(&self) -> &[u8] {
        let len = (self.data_len as usize).min(MAX_LIN_DATA_LEN);
        &self.data[..len]
    }

    /// Calculate the checksum of this frame under its checksum model.
    pub fn calculate_checksum(&self) -> u8 {
        self.checksum_type.calculate(self.protected_id(), self.data())
    }

    /// Check the stored checksum byte against the frame contents.
    pub fn is_checksum_valid(&self) -> bool {
        let valid = self
            .checksum_type
            .verify(self.checksum, self.protected_id(), self.data());
        if !valid {
            log::debug!(
                "LIN frame {:#04x}: {:?} checksum {:#04x} does not match, expected {:#04x}",
                self.id,
                self.checksum_type,
                self.checksum,
                self.calculate_checksum()
            );
        }
        valid
    }
}

impl Default for LinFrame {
    fn default() -> Self {
        Self::new(0, &[])
    }
}

/// Unchecked serialized form of [`LinFrame`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct LinFrameRecord {
    id: u8,
    data: [u8; MAX_LIN_DATA_LEN],
    data_len: u8,
    checksum: u8,
    checksum_type: ChecksumType,
}

#[cfg(feature = "serde")]
impl TryFrom<LinFrameRecord> for LinFrame {
    type Error = Error;

    fn try_from(record: LinFrameRecord) -> Result<Self> {
        let len = record.data_len as usize;
        if len > MAX_LIN_DATA_LEN {
            return Err(Error::DataTooLong {
                actual: len,
                max: MAX_LIN_DATA_LEN,
            });
        }
        let mut frame = Self::try_new(record.id, &record.data[..len])?;
        frame.checksum = record.checksum;
        frame.checksum_type = record.checksum_type;
        Ok(frame)
    }
}
