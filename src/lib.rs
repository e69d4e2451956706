#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]

//! # lin-checksum
//!
//! Checksum and protected identifier routines for the LIN (Local Interconnect
//! Network) bus, for use inside a LIN master or slave stack.
//!
//! LIN is a low-cost, single-wire serial network used in automotive
//! applications for communication between sensors, actuators, and ECUs. Every
//! frame header carries a protected identifier (6-bit frame ID plus two parity
//! bits) and every response ends in an 8-bit checksum computed with
//! end-around carry addition.
//!
//! ## Features
//!
//! - Classic (LIN 1.x) and Enhanced (LIN 2.x) checksum calculation
//! - Checksum verification of received frames
//! - Protected ID calculation with parity bits, and parity checking
//! - A fixed-capacity [`LinFrame`] value with the 8-byte limit enforced
//! - `no_std`, no allocation
//!
//! ## Quick Start
//!
//! ```
//! use lin_checksum::{
//!     calculate_enhanced_checksum, protected_id, verify_enhanced_checksum,
//! };
//!
//! let pid = protected_id(0x3F);
//! assert_eq!(pid, 0xBF);
//!
//! let data = [0x4A, 0x55, 0x93, 0xE5];
//! let checksum = calculate_enhanced_checksum(pid, &data);
//! assert_eq!(checksum, 0x27);
//! assert!(verify_enhanced_checksum(checksum, pid, &data));
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`checksum`] | Classic and enhanced checksum calculation and verification |
//! | [`pid`] | Protected identifier derivation and parity checking |
//! | [`frame`] | [`LinFrame`] value type |
//! | [`error`] | Error types and [`Result`] alias |
//!
//! ## Cargo Features
//!
//! - `std` (default): implements `std::error::Error` for [`Error`].
//! - `serde`: `Serialize`/`Deserialize` for the value types.
//! - `defmt`: `defmt::Format` for the value types.
//!
//! ## Error Handling
//!
//! The checksum and protected ID functions never fail. Only the checked
//! constructors [`LinFrame::try_new`] and `ProtectedId::try_from` return
//! [`Result<T>`].

pub mod checksum;
pub mod error;
pub mod frame;
pub mod pid;

// Re-export commonly used items at the crate root
pub use checksum::{
    ChecksumType, calculate_classic_checksum, calculate_enhanced_checksum, intermediate_sum,
    verify_classic_checksum, verify_enhanced_checksum,
};
pub use error::{Error, Result};
pub use frame::{LinFrame, MAX_LIN_DATA_LEN};
pub use pid::{
    MAX_LIN_ID, PROTECTED_ID_TABLE, ProtectedId, frame_id, has_valid_parity, protected_id,
};
