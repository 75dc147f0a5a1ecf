//! Type-level lists of values read or written in one call.
//!
//! A single [`BufferValue`] is a one-slot list; tuples of up to twelve values
//! are multi-slot lists laid out consecutively in declared order.

use crate::error::{ReadError, ReadResult, WriteError, WriteResult};
use crate::unchecked::{next_unchecked, put_unchecked, unchecked_read, unchecked_write};
use crate::value::BufferValue;

mod private {
    pub trait Sealed {}
}

/// One or more values transferred together.
///
/// This trait is sealed; implement [`BufferValue`] to add new value types.
pub trait ValueList: private::Sealed {
    /// Decoded values, a tuple for multi-slot lists.
    type Decoded;

    /// Per-slot results of a result-style read.
    type ReadResults;

    /// Per-slot results of a result-style write.
    type WriteResults;

    /// Sum of the byte widths of every slot.
    const BYTE_COUNT: usize;

    /// Decodes every slot. `bytes` must hold at least [`BYTE_COUNT`](Self::BYTE_COUNT) bytes.
    #[doc(hidden)]
    fn decode_unchecked(bytes: &[u8]) -> Self::Decoded;

    /// Decodes slot by slot; once one slot fails, every later slot fails.
    #[doc(hidden)]
    fn try_decode(bytes: &[u8]) -> Self::ReadResults;

    /// Fills every slot with `error`.
    #[doc(hidden)]
    fn decode_failed(error: ReadError) -> Self::ReadResults;

    /// Encodes every slot. `bytes` must hold at least [`BYTE_COUNT`](Self::BYTE_COUNT) bytes.
    #[doc(hidden)]
    fn encode_unchecked(&self, bytes: &mut [u8]);

    /// Encodes slot by slot; slots that do not fit are not written.
    #[doc(hidden)]
    fn try_encode(&self, bytes: &mut [u8]) -> Self::WriteResults;

    /// Fills every slot with `error`.
    #[doc(hidden)]
    fn encode_failed(error: WriteError) -> Self::WriteResults;
}

/// Returns the total encoded width of the values in `L`.
///
/// ```
/// use buffer::{byte_count, BigEndian};
///
/// assert_eq!(byte_count::<u32>(), 4);
/// assert_eq!(byte_count::<(u32, BigEndian<u16>, bool, u32)>(), 11);
/// assert_eq!(byte_count::<()>(), 0);
/// ```
#[must_use]
pub const fn byte_count<L: ValueList>() -> usize {
    L::BYTE_COUNT
}

/// Returns the encoded width of `len` values of `T`, or `None` on overflow.
#[must_use]
pub const fn range_byte_count<T: BufferValue>(len: usize) -> Option<usize> {
    T::BYTE_WIDTH.checked_mul(len)
}

/// Reads the next slot if it fits; otherwise empties `rest` so every later
/// slot fails as well.
#[inline]
fn next_checked<T: BufferValue>(rest: &mut &[u8]) -> ReadResult<T::Decoded> {
    if rest.len() < T::BYTE_WIDTH {
        *rest = &[];
        return Err(ReadError::InsufficientBuffer);
    }
    Ok(next_unchecked::<T>(rest))
}

/// Writes the next slot if it fits; otherwise empties `rest` so every later
/// slot fails as well.
#[inline]
fn put_checked<T: BufferValue>(rest: &mut &mut [u8], value: &T) -> WriteResult<usize> {
    if rest.len() < T::BYTE_WIDTH {
        *rest = Default::default();
        return Err(WriteError::InsufficientBuffer);
    }
    put_unchecked(rest, value);
    Ok(T::BYTE_WIDTH)
}

impl<T: BufferValue> private::Sealed for T {}

impl<T: BufferValue> ValueList for T {
    type Decoded = <T as BufferValue>::Decoded;
    type ReadResults = ReadResult<<T as BufferValue>::Decoded>;
    type WriteResults = WriteResult<usize>;

    const BYTE_COUNT: usize = <T as BufferValue>::BYTE_WIDTH;

    #[inline]
    fn decode_unchecked(bytes: &[u8]) -> <T as BufferValue>::Decoded {
        unchecked_read::<T>(bytes).0
    }

    #[inline]
    fn try_decode(bytes: &[u8]) -> ReadResult<<T as BufferValue>::Decoded> {
        let mut rest = bytes;
        next_checked::<T>(&mut rest)
    }

    #[inline]
    fn decode_failed(error: ReadError) -> ReadResult<<T as BufferValue>::Decoded> {
        Err(error)
    }

    #[inline]
    fn encode_unchecked(&self, bytes: &mut [u8]) {
        unchecked_write(bytes, self);
    }

    #[inline]
    fn try_encode(&self, bytes: &mut [u8]) -> WriteResult<usize> {
        let mut rest = bytes;
        put_checked(&mut rest, self)
    }

    #[inline]
    fn encode_failed(error: WriteError) -> WriteResult<usize> {
        Err(error)
    }
}

impl private::Sealed for () {}

impl ValueList for () {
    type Decoded = ();
    type ReadResults = ();
    type WriteResults = ();

    const BYTE_COUNT: usize = 0;

    fn decode_unchecked(_bytes: &[u8]) {}

    fn try_decode(_bytes: &[u8]) {}

    fn decode_failed(_error: ReadError) {}

    fn encode_unchecked(&self, _bytes: &mut [u8]) {}

    fn try_encode(&self, _bytes: &mut [u8]) {}

    fn encode_failed(_error: WriteError) {}
}

macro_rules! impl_value_list {
    ($($name:ident $idx:tt),+) => {
        impl<$($name: BufferValue),+> private::Sealed for ($($name,)+) {}

        impl<$($name: BufferValue),+> ValueList for ($($name,)+) {
            type Decoded = ($(<$name as BufferValue>::Decoded,)+);
            type ReadResults = ($(ReadResult<<$name as BufferValue>::Decoded>,)+);
            type WriteResults = ($(impl_value_list!(@write_slot $name),)+);

            const BYTE_COUNT: usize = 0 $(+ <$name as BufferValue>::BYTE_WIDTH)+;

            #[inline]
            fn decode_unchecked(bytes: &[u8]) -> Self::Decoded {
                let mut rest = bytes;
                ($(next_unchecked::<$name>(&mut rest),)+)
            }

            #[inline]
            fn try_decode(bytes: &[u8]) -> Self::ReadResults {
                let mut rest = bytes;
                ($(next_checked::<$name>(&mut rest),)+)
            }

            #[inline]
            fn decode_failed(error: ReadError) -> Self::ReadResults {
                ($(Err::<<$name as BufferValue>::Decoded, ReadError>(error),)+)
            }

            #[inline]
            fn encode_unchecked(&self, bytes: &mut [u8]) {
                let mut rest = bytes;
                $(put_unchecked(&mut rest, &self.$idx);)+
            }

            #[inline]
            fn try_encode(&self, bytes: &mut [u8]) -> Self::WriteResults {
                let mut rest = bytes;
                ($(put_checked(&mut rest, &self.$idx),)+)
            }

            #[inline]
            fn encode_failed(error: WriteError) -> Self::WriteResults {
                ($(impl_value_list!(@fail $name, error),)+)
            }
        }
    };
    (@write_slot $name:ident) => { WriteResult<usize> };
    (@fail $name:ident, $error:ident) => { Err::<usize, WriteError>($error) };
}

impl_value_list!(A 0);
impl_value_list!(A 0, B 1);
impl_value_list!(A 0, B 1, C 2);
impl_value_list!(A 0, B 1, C 2, D 3);
impl_value_list!(A 0, B 1, C 2, D 3, E 4);
impl_value_list!(A 0, B 1, C 2, D 3, E 4, F 5);
impl_value_list!(A 0, B 1, C 2, D 3, E 4, F 5, G 6);
impl_value_list!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);
impl_value_list!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8);
impl_value_list!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9);
impl_value_list!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10);
impl_value_list!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10, L 11);
