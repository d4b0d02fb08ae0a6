use core::fmt;

/// Error returned when a CBC3 mode can not be constructed.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InitError {
    /// The three stage ciphers do not share one block size.
    BlockSizeMismatch,
    /// IV length is not three times the block size.
    InvalidIvLength,
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::BlockSizeMismatch => "block size must be equal for all three block ciphers",
            Self::InvalidIvLength => "IV length must equal three times the cipher block size",
        })
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for InitError {}

/// Error returned by the `crypt_blocks*` methods.
///
/// Every variant is reported before any output byte is written and before
/// the feedback registers change.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CryptError {
    /// Input length is not a multiple of the block size.
    NotFullBlocks,
    /// Output buffer is smaller than the input.
    OutputTooSmall,
    /// Input and output share memory at non-corresponding offsets.
    InvalidOverlap,
    /// Input range does not lie within the buffer.
    InvalidRange,
}

impl fmt::Display for CryptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotFullBlocks => "input not full blocks",
            Self::OutputTooSmall => "output smaller than input",
            Self::InvalidOverlap => "invalid buffer overlap",
            Self::InvalidRange => "input range out of buffer bounds",
        })
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for CryptError {}
