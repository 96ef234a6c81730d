//! Bit-by-bit CRC-8/SMBUS.
//!
//! The parameters, in the usual Rocksoft model notation, are:
//!
//! | Width | Poly | Init | RefIn | RefOut | XorOut | Check | Residue |
//! |-------|------|------|-------|--------|--------|-------|---------|
//! | 8     | 0x07 | 0x00 | false | false  | 0x00   | 0xF4  | 0x00    |
//!
//! The accumulator is a plain `u8` threaded through calls to [`update`],
//! so a stream may be checksummed in as many pieces as is convenient.

use crate::error::Error;

/// Width of the CRC register in bits.
pub const WIDTH: u32 = u8::BITS;
/// Generator polynomial, with the implicit x^8 term omitted.
pub const POLYNOMIAL: u8 = 0x07;
/// Conventional seed for a fresh checksum.
pub const INITIAL: u8 = 0x00;
/// Value XORed into the register by [`finalize`].
pub const XOR_OUT: u8 = 0x00;
pub const REFLECT_IN: bool = false;
pub const REFLECT_OUT: bool = false;
/// CRC of the ASCII bytes `"123456789"`.
pub const CHECK: u8 = 0xF4;
/// Register value after folding in some data followed by its own CRC.
pub const RESIDUE: u8 = 0x00;

/// Seed for a fresh checksum.
#[must_use]
pub const fn init() -> u8 {
    INITIAL
}

/// Fold `bytes` into the running checksum `crc` and return the new value.
///
/// Any `crc` is accepted, including the result of a previous call, and
/// feeding a buffer in pieces gives the same result as feeding it whole:
///
/// ```
/// use crc8_smbus::update;
///
/// let whole = update(0x00, b"123456789");
/// let pieces = update(update(0x00, b"1234"), b"56789");
/// assert_eq!(whole, 0xF4);
/// assert_eq!(whole, pieces);
/// ```
///
/// # CRC details
///
/// Each byte is consumed MSB first. For every input bit the top bit of the
/// register is compared with the input bit; the register is shifted left
/// and, if they differed, XORed with [`POLYNOMIAL`]. Bits shifted out of the
/// top of the register are discarded, as a `u8` can't hold them anyway.
#[must_use]
pub fn update(mut crc: u8, bytes: &[u8]) -> u8 {
    const fn top_bit_set(b: u8) -> bool {
        b & 0x80 == 0x80
    }

    for &byte in bytes {
        let mut mask: u8 = 0x80;
        while mask > 0 {
            let mut bit = top_bit_set(crc);
            if byte & mask != 0 {
                bit = !bit;
            }
            crc <<= 1;
            if bit {
                crc ^= POLYNOMIAL;
            }
            mask >>= 1;
        }
    }

    crc
}

/// Apply the final XOR to a register value.
///
/// This is the identity for CRC-8/SMBUS, but keeps calling code in the
/// familiar init, update, finalize shape.
#[must_use]
pub const fn finalize(crc: u8) -> u8 {
    crc ^ XOR_OUT
}

/// Calculate the CRC of `bytes` from a fresh register.
#[must_use]
pub fn checksum(bytes: &[u8]) -> u8 {
    finalize(update(init(), bytes))
}

/// Check data that has its CRC byte appended.
///
/// Passes when the register is back to [`RESIDUE`] after the whole buffer,
/// which relieves the caller of splitting off and comparing the CRC byte.
///
/// ```
/// assert!(crc8_smbus::check(&[0xBE, 0xEF, 0x1A]).is_ok());
/// ```
pub fn check(bytes: &[u8]) -> Result<(), Error> {
    match update(INITIAL, bytes) {
        RESIDUE => Ok(()),
        residue => {
            #[cfg(feature = "defmt")]
            defmt::debug!("crc8 residue check failed: {=u8:#x}", residue);
            Err(Error::ResidueMismatch(residue))
        }
    }
}

/// Compare the CRC of `bytes` with a separately stored `expected` value.
pub fn verify(bytes: &[u8], expected: u8) -> Result<(), Error> {
    let computed = checksum(bytes);
    if computed == expected {
        return Ok(());
    }

    #[cfg(feature = "defmt")]
    defmt::debug!(
        "crc8 mismatch: expected {=u8:#x}, computed {=u8:#x}",
        expected,
        computed
    );
    Err(Error::ChecksumMismatch { expected, computed })
}
