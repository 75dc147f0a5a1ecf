//! Raw value transfer without bounds checks.
//!
//! These are the building blocks for the checked APIs. They assume the caller
//! has already verified that the cursor holds at least `T::BYTE_WIDTH` bytes;
//! a short cursor panics on slice indexing rather than reporting an error.

use crate::value::BufferValue;

/// Decodes one `T` from the front of `cursor` and returns it with the
/// remaining bytes.
///
/// # Panics
///
/// Panics if `cursor` is shorter than `T::BYTE_WIDTH`.
#[inline]
pub fn unchecked_read<T: BufferValue>(cursor: &[u8]) -> (T::Decoded, &[u8]) {
    let (head, tail) = cursor.split_at(T::BYTE_WIDTH);
    (T::read_from(head), tail)
}

/// Encodes `value` into the front of `cursor` and returns the remaining bytes.
///
/// Only `cursor[..T::BYTE_WIDTH]` is modified.
///
/// # Panics
///
/// Panics if `cursor` is shorter than `T::BYTE_WIDTH`.
#[inline]
pub fn unchecked_write<'a, T: BufferValue>(cursor: &'a mut [u8], value: &T) -> &'a mut [u8] {
    let (head, tail) = cursor.split_at_mut(T::BYTE_WIDTH);
    value.write_to(head);
    tail
}

/// Decodes the next slot of a list and advances `rest` past it.
#[inline]
pub(crate) fn next_unchecked<T: BufferValue>(rest: &mut &[u8]) -> T::Decoded {
    let (value, tail) = unchecked_read::<T>(*rest);
    *rest = tail;
    value
}

/// Encodes the next slot of a list and advances `rest` past it.
#[inline]
pub(crate) fn put_unchecked<T: BufferValue>(rest: &mut &mut [u8], value: &T) {
    let cursor = std::mem::take(rest);
    *rest = unchecked_write(cursor, value);
}
