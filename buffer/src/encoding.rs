//! Byte order selection and endianness-tagged values.

use std::mem::size_of;

/// Byte order used to lay out a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endian {
    /// Most significant byte first.
    Big,
    /// Least significant byte first.
    Little,
}

impl Endian {
    /// Byte order of the host.
    #[cfg(target_endian = "little")]
    pub const NATIVE: Self = Self::Little;

    /// Byte order of the host.
    #[cfg(target_endian = "big")]
    pub const NATIVE: Self = Self::Big;

    /// Returns `true` if this is the host byte order.
    #[must_use]
    pub const fn is_native(self) -> bool {
        matches!(
            (self, Self::NATIVE),
            (Self::Big, Self::Big) | (Self::Little, Self::Little)
        )
    }
}

/// A primitive whose bytes can be laid out in either byte order.
///
/// Implementations touch only the first [`WIDTH`](Self::WIDTH) bytes of the
/// slices they receive and expect at least that many to be present.
pub trait ByteOrdered: Copy {
    /// Encoded width in bytes.
    const WIDTH: usize;

    /// Decodes a value from the front of `bytes` using `order`.
    fn from_ordered_bytes(bytes: &[u8], order: Endian) -> Self;

    /// Encodes the value into the front of `bytes` using `order`.
    fn write_ordered_bytes(self, bytes: &mut [u8], order: Endian);
}

macro_rules! impl_byte_ordered {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ByteOrdered for $ty {
                const WIDTH: usize = size_of::<$ty>();

                #[inline]
                fn from_ordered_bytes(bytes: &[u8], order: Endian) -> Self {
                    let mut raw = [0u8; size_of::<$ty>()];
                    raw.copy_from_slice(&bytes[..size_of::<$ty>()]);
                    match order {
                        Endian::Big => <$ty>::from_be_bytes(raw),
                        Endian::Little => <$ty>::from_le_bytes(raw),
                    }
                }

                #[inline]
                fn write_ordered_bytes(self, bytes: &mut [u8], order: Endian) {
                    let raw = match order {
                        Endian::Big => self.to_be_bytes(),
                        Endian::Little => self.to_le_bytes(),
                    };
                    bytes[..size_of::<$ty>()].copy_from_slice(&raw);
                }
            }
        )+
    };
}

impl_byte_ordered!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

impl ByteOrdered for bool {
    const WIDTH: usize = 1;

    #[inline]
    fn from_ordered_bytes(bytes: &[u8], _order: Endian) -> Self {
        bytes[0] != 0
    }

    #[inline]
    fn write_ordered_bytes(self, bytes: &mut [u8], _order: Endian) {
        bytes[0] = u8::from(self);
    }
}

impl ByteOrdered for char {
    const WIDTH: usize = size_of::<u32>();

    #[inline]
    fn from_ordered_bytes(bytes: &[u8], order: Endian) -> Self {
        let scalar = u32::from_ordered_bytes(bytes, order);
        Self::from_u32(scalar).unwrap_or(Self::REPLACEMENT_CHARACTER)
    }

    #[inline]
    fn write_ordered_bytes(self, bytes: &mut [u8], order: Endian) {
        u32::from(self).write_ordered_bytes(bytes, order);
    }
}

/// Marks a value for encoding/decoding most significant byte first.
///
/// Reading a `BigEndian<T>` yields a plain `T`:
///
/// ```
/// use buffer::{read, BigEndian};
///
/// let bytes = [0x89, 0xAB, 0xCD, 0xEF];
/// assert_eq!(read::<BigEndian<u32>>(&bytes), 0x89AB_CDEF);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BigEndian<T>(pub T);

/// Marks a value for encoding/decoding least significant byte first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LittleEndian<T>(pub T);

impl<T> BigEndian<T> {
    /// Byte order applied by this wrapper.
    pub const ENDIAN: Endian = Endian::Big;

    /// Returns the wrapped value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> LittleEndian<T> {
    /// Byte order applied by this wrapper.
    pub const ENDIAN: Endian = Endian::Little;

    /// Returns the wrapped value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for BigEndian<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> From<T> for LittleEndian<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_matches_target() {
        assert!(Endian::NATIVE.is_native());
        if cfg!(target_endian = "little") {
            assert_eq!(Endian::NATIVE, Endian::Little);
            assert!(!Endian::Big.is_native());
        } else {
            assert_eq!(Endian::NATIVE, Endian::Big);
            assert!(!Endian::Little.is_native());
        }
    }

    #[test]
    fn u32_big_endian_layout() {
        let mut buf = [0u8; 4];
        0x89AB_CDEFu32.write_ordered_bytes(&mut buf, Endian::Big);
        assert_eq!(buf, [0x89, 0xAB, 0xCD, 0xEF]);
        assert_eq!(u32::from_ordered_bytes(&buf, Endian::Big), 0x89AB_CDEF);
    }

    #[test]
    fn u32_little_endian_layout() {
        let mut buf = [0u8; 4];
        0x89AB_CDEFu32.write_ordered_bytes(&mut buf, Endian::Little);
        assert_eq!(buf, [0xEF, 0xCD, 0xAB, 0x89]);
        assert_eq!(u32::from_ordered_bytes(&buf, Endian::Little), 0x89AB_CDEF);
    }

    #[test]
    fn write_touches_only_width() {
        let mut buf = [0xAAu8; 6];
        0x0102u16.write_ordered_bytes(&mut buf[1..], Endian::Big);
        assert_eq!(buf, [0xAA, 0x01, 0x02, 0xAA, 0xAA, 0xAA]);
    }

    #[test]
    fn bool_ignores_order() {
        let mut buf = [0u8; 1];
        true.write_ordered_bytes(&mut buf, Endian::Big);
        assert_eq!(buf, [1]);
        assert!(bool::from_ordered_bytes(&[7], Endian::Little));
        assert!(!bool::from_ordered_bytes(&[0], Endian::Big));
    }

    #[test]
    fn char_invalid_scalar_decodes_to_replacement() {
        let bytes = 0xD800u32.to_be_bytes();
        assert_eq!(
            char::from_ordered_bytes(&bytes, Endian::Big),
            char::REPLACEMENT_CHARACTER
        );
    }

    #[test]
    fn float_roundtrip_both_orders() {
        for order in [Endian::Big, Endian::Little] {
            let mut buf = [0u8; 8];
            (-1.5f64).write_ordered_bytes(&mut buf, order);
            assert_eq!(f64::from_ordered_bytes(&buf, order), -1.5);
        }
    }

    #[test]
    fn widths_match_type_sizes() {
        assert_eq!(<u8 as ByteOrdered>::WIDTH, 1);
        assert_eq!(<i16 as ByteOrdered>::WIDTH, 2);
        assert_eq!(<f32 as ByteOrdered>::WIDTH, 4);
        assert_eq!(<u128 as ByteOrdered>::WIDTH, 16);
        assert_eq!(<char as ByteOrdered>::WIDTH, 4);
    }

    #[test]
    fn wrappers_expose_order() {
        assert_eq!(BigEndian::<u16>::ENDIAN, Endian::Big);
        assert_eq!(LittleEndian::<u16>::ENDIAN, Endian::Little);
        assert_eq!(BigEndian::from(5u8).into_inner(), 5);
        assert_eq!(LittleEndian(7u64).into_inner(), 7);
    }
}
