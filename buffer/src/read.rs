//! Bounds-checked reads from byte slices.
//!
//! Two call families are provided and kept separate:
//!
//! - **Panic-style** (`read*`) treats a short buffer as a programming error.
//!   The check covers the whole request up front, so a failing call decodes
//!   nothing.
//! - **Result-style** (`try_read*`) never panics. Multi-value reads report one
//!   result per slot: values decoded before the shortfall stay valid and every
//!   later slot reports [`ReadError::InsufficientBuffer`].

use crate::encoding::{BigEndian, ByteOrdered, Endian, LittleEndian};
use crate::error::{checked_offset, read_failed, ReadError, ReadResult};
use crate::list::{range_byte_count, ValueList};
use crate::unchecked::next_unchecked;
use crate::value::BufferValue;

/// Reads the values of `L` from the front of `buffer`.
///
/// ```
/// use buffer::{read, BigEndian};
///
/// let bytes = [0x01, 0xAB, 0xCD];
/// let (flag, word) = read::<(bool, BigEndian<u16>)>(&bytes);
/// assert!(flag);
/// assert_eq!(word, 0xABCD);
/// ```
///
/// # Panics
///
/// Panics if `buffer` holds fewer than `byte_count::<L>()` bytes.
#[track_caller]
pub fn read<L: ValueList>(buffer: &[u8]) -> L::Decoded {
    if L::BYTE_COUNT > buffer.len() {
        read_failed(ReadError::InsufficientBuffer, L::BYTE_COUNT, buffer.len());
    }
    L::decode_unchecked(buffer)
}

/// Reads the values of `L` starting `position` bytes into `buffer`.
///
/// # Panics
///
/// Panics with an invalid position offset if `position + byte_count::<L>()`
/// overflows or `position` is past the end of `buffer`, and with an
/// insufficient buffer if the values do not fit after `position`.
#[track_caller]
pub fn read_at<L: ValueList>(position: usize, buffer: &[u8]) -> L::Decoded {
    match checked_offset(position, L::BYTE_COUNT, buffer.len()) {
        Ok(start) => read::<L>(&buffer[start..]),
        Err(err) => read_failed(err, L::BYTE_COUNT, buffer.len().saturating_sub(position)),
    }
}

/// Reads the values of `L`, one result per slot.
///
/// ```
/// use buffer::{try_read, ReadError};
///
/// let (a, b) = try_read::<(u16, u32)>(&[0, 0, 0]);
/// assert!(a.is_ok());
/// assert_eq!(b, Err(ReadError::InsufficientBuffer));
/// ```
pub fn try_read<L: ValueList>(buffer: &[u8]) -> L::ReadResults {
    L::try_decode(buffer)
}

/// Reads the values of `L` starting `position` bytes into `buffer`, one
/// result per slot.
///
/// If the position is invalid, every slot reports
/// [`ReadError::InvalidPositionOffset`].
pub fn try_read_at<L: ValueList>(position: usize, buffer: &[u8]) -> L::ReadResults {
    match checked_offset(position, L::BYTE_COUNT, buffer.len()) {
        Ok(start) => L::try_decode(&buffer[start..]),
        Err(err) => L::decode_failed(err),
    }
}

/// Fills `out` with consecutive `T` values read from the front of `buffer`.
///
/// # Panics
///
/// Panics if `buffer` is too short for `out.len()` values.
#[track_caller]
pub fn read_range<T: BufferValue>(buffer: &[u8], out: &mut [T::Decoded]) {
    let needed = range_byte_count::<T>(out.len());
    match needed {
        Some(needed) if needed <= buffer.len() => fill_unchecked::<T>(buffer, out),
        _ => read_failed(
            ReadError::InsufficientBuffer,
            needed.unwrap_or(usize::MAX),
            buffer.len(),
        ),
    }
}

/// Fills `out` with consecutive `T` values read starting `position` bytes
/// into `buffer`.
///
/// # Panics
///
/// Panics on an invalid position or if the values do not fit.
#[track_caller]
pub fn read_range_at<T: BufferValue>(position: usize, buffer: &[u8], out: &mut [T::Decoded]) {
    let needed = range_byte_count::<T>(out.len()).unwrap_or(usize::MAX);
    match checked_offset(position, needed, buffer.len()) {
        Ok(start) => read_range::<T>(&buffer[start..], out),
        Err(err) => read_failed(err, needed, buffer.len().saturating_sub(position)),
    }
}

/// Fills `out` with consecutive `T` values, or fails as a unit.
///
/// The range is never partially filled: if any element would run out of
/// data, `out` is left untouched.
pub fn try_read_range<T: BufferValue>(buffer: &[u8], out: &mut [T::Decoded]) -> ReadResult<()> {
    match range_byte_count::<T>(out.len()) {
        Some(needed) if needed <= buffer.len() => {
            fill_unchecked::<T>(buffer, out);
            Ok(())
        }
        _ => Err(ReadError::InsufficientBuffer),
    }
}

/// Fills `out` with consecutive `T` values read starting `position` bytes
/// into `buffer`, or fails as a unit.
pub fn try_read_range_at<T: BufferValue>(
    position: usize,
    buffer: &[u8],
    out: &mut [T::Decoded],
) -> ReadResult<()> {
    let needed = range_byte_count::<T>(out.len()).ok_or(ReadError::InsufficientBuffer)?;
    let start = checked_offset(position, needed, buffer.len())?;
    try_read_range::<T>(&buffer[start..], out)
}

/// Reads a `T` laid out in the byte order chosen at runtime.
///
/// Use `read::<BigEndian<T>>` or `read::<LittleEndian<T>>` when the order
/// is known at compile time.
///
/// # Panics
///
/// Panics if `buffer` is shorter than `T`.
#[track_caller]
pub fn read_endian<T: ByteOrdered>(buffer: &[u8], endian: Endian) -> T {
    match endian {
        Endian::Big => read::<BigEndian<T>>(buffer),
        Endian::Little => read::<LittleEndian<T>>(buffer),
    }
}

/// Reads a `T` laid out in the byte order chosen at runtime.
pub fn try_read_endian<T: ByteOrdered>(buffer: &[u8], endian: Endian) -> ReadResult<T> {
    match endian {
        Endian::Big => try_read::<BigEndian<T>>(buffer),
        Endian::Little => try_read::<LittleEndian<T>>(buffer),
    }
}

fn fill_unchecked<T: BufferValue>(buffer: &[u8], out: &mut [T::Decoded]) {
    let mut rest = buffer;
    for slot in out {
        *slot = next_unchecked::<T>(&mut rest);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: [u8; 8] = [0x67, 0x45, 0x23, 0x01, 0xEF, 0xCD, 0xAB, 0x89];

    #[test]
    fn read_little_endian_int() {
        assert_eq!(read_endian::<u32>(&WORDS, Endian::Little), 0x0123_4567);
        assert_eq!(read::<LittleEndian<u32>>(&WORDS), 0x0123_4567);
    }

    #[test]
    fn read_big_endian_int() {
        assert_eq!(read_endian::<u32>(&WORDS, Endian::Big), 0x6745_2301);
        assert_eq!(read::<BigEndian<u32>>(&WORDS), 0x6745_2301);
    }

    #[test]
    fn read_two_shorts() {
        assert_eq!(read_endian::<u16>(&WORDS, Endian::Little), 0x4567);
        assert_eq!(read_endian::<u16>(&WORDS[2..], Endian::Little), 0x0123);
        assert_eq!(read_endian::<u16>(&WORDS[2..], Endian::Big), 0x2301);
    }

    #[test]
    fn read_native_int() {
        let expected = u32::from_ne_bytes([0x67, 0x45, 0x23, 0x01]);
        assert_eq!(read::<u32>(&WORDS), expected);
    }

    #[test]
    #[should_panic(expected = "insufficient buffer space for read")]
    fn read_past_end_panics() {
        let _ = read_endian::<u32>(&WORDS[6..], Endian::Little);
    }

    #[test]
    fn read_multiple_values() {
        let (a, b, c) = read::<(u8, BigEndian<u16>, LittleEndian<u32>)>(&WORDS[..7]);
        assert_eq!(a, 0x67);
        assert_eq!(b, 0x4523);
        assert_eq!(c, 0xABCD_EF01);
    }

    #[test]
    fn read_empty_list_from_empty_buffer() {
        read::<()>(&[]);
        try_read::<()>(&[]);
    }

    #[test]
    fn read_at_offsets_into_buffer() {
        assert_eq!(read_at::<BigEndian<u16>>(6, &WORDS), 0xAB89);
        read_at::<()>(8, &WORDS);
    }

    #[test]
    #[should_panic(expected = "invalid position offset")]
    fn read_at_overflow_panics_as_invalid_offset() {
        let _ = read_at::<u32>(usize::MAX - 1, &WORDS);
    }

    #[test]
    #[should_panic(expected = "invalid position offset")]
    fn read_at_past_end_panics_as_invalid_offset() {
        let _ = read_at::<u8>(9, &WORDS);
    }

    #[test]
    #[should_panic(expected = "insufficient buffer space")]
    fn read_at_short_tail_panics_as_insufficient() {
        let _ = read_at::<u32>(6, &WORDS);
    }

    #[test]
    fn try_read_single_value() {
        assert_eq!(try_read::<BigEndian<u16>>(&WORDS[6..]), Ok(0xAB89));
        assert_eq!(
            try_read::<u32>(&WORDS[6..]),
            Err(ReadError::InsufficientBuffer)
        );
    }

    #[test]
    fn try_read_at_overflow_is_invalid_offset() {
        let (a, b) = try_read_at::<(u8, u16)>(usize::MAX, &WORDS);
        assert_eq!(a, Err(ReadError::InvalidPositionOffset));
        assert_eq!(b, Err(ReadError::InvalidPositionOffset));
    }

    #[test]
    fn try_read_at_short_tail_is_insufficient() {
        let (a, b) = try_read_at::<(BigEndian<u16>, u32)>(4, &WORDS);
        assert_eq!(a, Ok(0xEFCD));
        assert_eq!(b, Err(ReadError::InsufficientBuffer));
    }

    #[test]
    fn try_read_at_end_of_buffer() {
        assert_eq!(try_read_at::<u8>(8, &WORDS), Err(ReadError::InsufficientBuffer));
        assert_eq!(
            try_read_at::<u8>(9, &WORDS),
            Err(ReadError::InvalidPositionOffset)
        );
    }

    #[test]
    fn read_range_fills_slice() {
        let mut out = [0u16; 4];
        read_range::<BigEndian<u16>>(&WORDS, &mut out);
        assert_eq!(out, [0x6745, 0x2301, 0xEFCD, 0xAB89]);
    }

    #[test]
    #[should_panic(expected = "insufficient buffer space")]
    fn read_range_too_long_panics() {
        let mut out = [0u32; 3];
        read_range::<u32>(&WORDS, &mut out);
    }

    #[test]
    fn try_read_range_fails_as_unit() {
        let mut out = [7u32; 3];
        assert_eq!(
            try_read_range::<u32>(&WORDS, &mut out),
            Err(ReadError::InsufficientBuffer)
        );
        assert_eq!(out, [7, 7, 7], "range must not be partially filled");
    }

    #[test]
    fn try_read_range_at_offsets() {
        let mut out = [0u8; 2];
        assert_eq!(try_read_range_at::<u8>(6, &WORDS, &mut out), Ok(()));
        assert_eq!(out, [0xAB, 0x89]);
        assert_eq!(
            try_read_range_at::<u8>(usize::MAX, &WORDS, &mut out),
            Err(ReadError::InvalidPositionOffset)
        );
    }

    #[test]
    fn read_range_at_offsets() {
        let mut out = [0u16; 1];
        read_range_at::<LittleEndian<u16>>(2, &WORDS, &mut out);
        assert_eq!(out, [0x0123]);
    }

    #[test]
    fn try_read_endian_reports_shortfall() {
        assert_eq!(try_read_endian::<u16>(&WORDS, Endian::Big), Ok(0x6745));
        assert_eq!(
            try_read_endian::<u64>(&WORDS[1..], Endian::Little),
            Err(ReadError::InsufficientBuffer)
        );
    }
}
