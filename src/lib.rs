//! CRC-8/SMBUS: polynomial 0x07, MSB first, no reflection and no final XOR.
//!
//! ```
//! let crc = crc8_smbus::checksum(b"123456789");
//! assert_eq!(crc, 0xF4);
//!
//! // Continue the same checksum over a second chunk.
//! let crc = crc8_smbus::update(crc, b"more data");
//! # let _ = crc;
//! ```
#![no_std]

pub mod crc;
pub mod error;

pub use crc::{check, checksum, finalize, init, update, verify};
pub use error::Error;
