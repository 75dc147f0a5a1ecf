//! Error types for buffer read/write operations.

use std::fmt;

/// Result type for result-style reads.
pub type ReadResult<T> = Result<T, ReadError>;

/// Result type for result-style writes.
pub type WriteResult<T> = Result<T, WriteError>;

/// Errors reported by result-style (`try_*`) reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReadError {
    /// Not enough bytes remain to decode the value.
    InsufficientBuffer,

    /// A position computation overflowed or points past the end of the buffer.
    InvalidPositionOffset,
}

/// Errors reported by result-style (`try_*`) writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WriteError {
    /// Not enough bytes remain to encode the value.
    InsufficientBuffer,

    /// A position computation overflowed or points past the end of the buffer.
    InvalidPositionOffset,
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientBuffer => write!(f, "insufficient buffer space for read"),
            Self::InvalidPositionOffset => write!(f, "invalid position offset for read"),
        }
    }
}

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientBuffer => write!(f, "insufficient buffer space for write"),
            Self::InvalidPositionOffset => write!(f, "invalid position offset for write"),
        }
    }
}

impl std::error::Error for ReadError {}

impl std::error::Error for WriteError {}

/// Returns the slice starting at `position`, rejecting overflowing or
/// out-of-range offsets before any length comparison for the payload.
pub(crate) const fn checked_offset(
    position: usize,
    byte_count: usize,
    len: usize,
) -> Result<usize, ReadError> {
    if position.checked_add(byte_count).is_none() || position > len {
        return Err(ReadError::InvalidPositionOffset);
    }
    Ok(position)
}

impl From<ReadError> for WriteError {
    fn from(err: ReadError) -> Self {
        match err {
            ReadError::InsufficientBuffer => Self::InsufficientBuffer,
            ReadError::InvalidPositionOffset => Self::InvalidPositionOffset,
        }
    }
}

/// Panics with a message describing a failed panic-style read.
#[cold]
#[track_caller]
pub(crate) fn read_failed(err: ReadError, needed: usize, available: usize) -> ! {
    panic!("{err}: need {needed} bytes, {available} available")
}

/// Panics with a message describing a failed panic-style write.
#[cold]
#[track_caller]
pub(crate) fn write_failed(err: WriteError, needed: usize, available: usize) -> ! {
    panic!("{err}: need {needed} bytes, {available} available")
}
