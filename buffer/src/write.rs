//! Bounds-checked writes into byte slices.
//!
//! Mirrors the read module: panic-style `write*` calls are
//! all-or-nothing and leave the buffer untouched on failure, result-style
//! `try_write*` calls write every slot that fits and report the rest.

use crate::encoding::{BigEndian, ByteOrdered, Endian, LittleEndian};
use crate::error::{checked_offset, write_failed, WriteError, WriteResult};
use crate::list::{range_byte_count, ValueList};
use crate::unchecked::put_unchecked;
use crate::value::BufferValue;

/// Writes `values` to the front of `buffer` and returns the bytes written.
///
/// ```
/// use buffer::{write, BigEndian};
///
/// let mut bytes = [0u8; 3];
/// let written = write(&mut bytes, (true, BigEndian(0xABCDu16)));
/// assert_eq!(written, 3);
/// assert_eq!(bytes, [0x01, 0xAB, 0xCD]);
/// ```
///
/// # Panics
///
/// Panics if `buffer` holds fewer than `byte_count::<L>()` bytes. Nothing is
/// written in that case.
#[track_caller]
pub fn write<L: ValueList>(buffer: &mut [u8], values: L) -> usize {
    if L::BYTE_COUNT > buffer.len() {
        write_failed(WriteError::InsufficientBuffer, L::BYTE_COUNT, buffer.len());
    }
    values.encode_unchecked(buffer);
    L::BYTE_COUNT
}

/// Writes `values` starting `position` bytes into `buffer`.
///
/// # Panics
///
/// Panics on an overflowing or out-of-range `position`, or if the values do
/// not fit after it. Nothing is written in either case.
#[track_caller]
pub fn write_at<L: ValueList>(position: usize, buffer: &mut [u8], values: L) -> usize {
    let available = buffer.len().saturating_sub(position);
    match checked_offset(position, L::BYTE_COUNT, buffer.len()) {
        Ok(start) => write(&mut buffer[start..], values),
        Err(err) => write_failed(err.into(), L::BYTE_COUNT, available),
    }
}

/// Writes `values` slot by slot, one result per slot.
///
/// Values that fit are written and report the bytes they occupy; once the
/// buffer runs out, every remaining slot reports
/// [`WriteError::InsufficientBuffer`] and is not written.
///
/// ```
/// use buffer::{try_write, WriteError};
///
/// let mut bytes = [0u8; 5];
/// let (a, b) = try_write(&mut bytes, (1u32, 2u16));
/// assert_eq!(a, Ok(4));
/// assert_eq!(b, Err(WriteError::InsufficientBuffer));
/// ```
pub fn try_write<L: ValueList>(buffer: &mut [u8], values: L) -> L::WriteResults {
    values.try_encode(buffer)
}

/// Writes `values` slot by slot starting `position` bytes into `buffer`.
///
/// If the position is invalid, every slot reports
/// [`WriteError::InvalidPositionOffset`] and nothing is written.
pub fn try_write_at<L: ValueList>(
    position: usize,
    buffer: &mut [u8],
    values: L,
) -> L::WriteResults {
    match checked_offset(position, L::BYTE_COUNT, buffer.len()) {
        Ok(start) => values.try_encode(&mut buffer[start..]),
        Err(err) => L::encode_failed(err.into()),
    }
}

/// Writes every element of `values` consecutively and returns the bytes
/// written.
///
/// # Panics
///
/// Panics if the whole range does not fit. Nothing is written in that case.
#[track_caller]
pub fn write_range<T: BufferValue>(buffer: &mut [u8], values: &[T]) -> usize {
    let needed = range_byte_count::<T>(values.len());
    match needed {
        Some(needed) if needed <= buffer.len() => {
            put_all_unchecked(buffer, values);
            needed
        }
        _ => write_failed(
            WriteError::InsufficientBuffer,
            needed.unwrap_or(usize::MAX),
            buffer.len(),
        ),
    }
}

/// Writes every element of `values` consecutively starting `position` bytes
/// into `buffer`.
///
/// # Panics
///
/// Panics on an invalid position or if the range does not fit.
#[track_caller]
pub fn write_range_at<T: BufferValue>(position: usize, buffer: &mut [u8], values: &[T]) -> usize {
    let needed = range_byte_count::<T>(values.len()).unwrap_or(usize::MAX);
    let available = buffer.len().saturating_sub(position);
    match checked_offset(position, needed, buffer.len()) {
        Ok(start) => write_range(&mut buffer[start..], values),
        Err(err) => write_failed(err.into(), needed, available),
    }
}

/// Writes every element of `values` consecutively, or nothing at all.
pub fn try_write_range<T: BufferValue>(buffer: &mut [u8], values: &[T]) -> WriteResult<usize> {
    match range_byte_count::<T>(values.len()) {
        Some(needed) if needed <= buffer.len() => {
            put_all_unchecked(buffer, values);
            Ok(needed)
        }
        _ => Err(WriteError::InsufficientBuffer),
    }
}

/// Writes every element of `values` consecutively starting `position` bytes
/// into `buffer`, or nothing at all.
pub fn try_write_range_at<T: BufferValue>(
    position: usize,
    buffer: &mut [u8],
    values: &[T],
) -> WriteResult<usize> {
    let needed = range_byte_count::<T>(values.len()).ok_or(WriteError::InsufficientBuffer)?;
    let start = checked_offset(position, needed, buffer.len())?;
    try_write_range(&mut buffer[start..], values)
}

/// Writes `value` in the byte order chosen at runtime.
///
/// Use `write(buffer, BigEndian(value))` when the order is known at compile
/// time.
///
/// # Panics
///
/// Panics if `buffer` is shorter than `T`.
#[track_caller]
pub fn write_endian<T: ByteOrdered>(buffer: &mut [u8], value: T, endian: Endian) -> usize {
    match endian {
        Endian::Big => write(buffer, BigEndian(value)),
        Endian::Little => write(buffer, LittleEndian(value)),
    }
}

/// Writes `value` in the byte order chosen at runtime.
pub fn try_write_endian<T: ByteOrdered>(
    buffer: &mut [u8],
    value: T,
    endian: Endian,
) -> WriteResult<usize> {
    match endian {
        Endian::Big => try_write(buffer, BigEndian(value)),
        Endian::Little => try_write(buffer, LittleEndian(value)),
    }
}

fn put_all_unchecked<T: BufferValue>(buffer: &mut [u8], values: &[T]) {
    let mut rest = buffer;
    for value in values {
        put_unchecked(&mut rest, value);
    }
}
