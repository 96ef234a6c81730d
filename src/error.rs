/// Reason a buffer failed CRC validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Data followed by its CRC byte did not leave a zero register.
    ///
    /// The value is the residue actually computed.
    ResidueMismatch(u8),
    /// The CRC computed over the data differs from the one supplied.
    ChecksumMismatch { expected: u8, computed: u8 },
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::ResidueMismatch(residue) => {
                write!(f, "CRC validation failed, residue {residue:#04x}")
            }
            Error::ChecksumMismatch { expected, computed } => write!(
                f,
                "CRC mismatch: expected {expected:#04x}, computed {computed:#04x}"
            ),
        }
    }
}

impl core::error::Error for Error {}
