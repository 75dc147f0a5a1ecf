//! Fixed-width values that can be transferred to and from byte buffers.

use crate::encoding::{BigEndian, ByteOrdered, Endian, LittleEndian};

/// A value with a compile-time-known encoded width.
///
/// `read_from` and `write_to` operate on the first [`BYTE_WIDTH`](Self::BYTE_WIDTH)
/// bytes of the slice they are given and never look past them. Callers must
/// provide at least that many bytes; the checked calls such as
/// [`read`](crate::read()) and [`write`](crate::write()) guarantee this.
///
/// Aggregates implement this field by field:
///
/// ```
/// use buffer::{unchecked_read, unchecked_write, BigEndian, BufferValue};
///
/// #[derive(Debug, PartialEq)]
/// struct Point {
///     x: i16,
///     y: i16,
/// }
///
/// impl BufferValue for Point {
///     type Decoded = Self;
///     const BYTE_WIDTH: usize = 4;
///
///     fn read_from(bytes: &[u8]) -> Self {
///         let (x, rest) = unchecked_read::<BigEndian<i16>>(bytes);
///         let (y, _) = unchecked_read::<BigEndian<i16>>(rest);
///         Self { x, y }
///     }
///
///     fn write_to(&self, bytes: &mut [u8]) {
///         let rest = unchecked_write(bytes, &BigEndian(self.x));
///         unchecked_write(rest, &BigEndian(self.y));
///     }
/// }
///
/// let point: Point = buffer::read::<Point>(&[0, 1, 0xFF, 0xFE]);
/// assert_eq!(point, Point { x: 1, y: -2 });
/// ```
pub trait BufferValue {
    /// The value produced when decoding.
    ///
    /// Plain values decode to themselves; endianness wrappers decode to the
    /// wrapped type.
    type Decoded;

    /// Encoded width in bytes.
    const BYTE_WIDTH: usize;

    /// Decodes a value from the front of `bytes`.
    fn read_from(bytes: &[u8]) -> Self::Decoded;

    /// Encodes the value into the front of `bytes`.
    fn write_to(&self, bytes: &mut [u8]);
}

macro_rules! impl_native_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl BufferValue for $ty {
                type Decoded = Self;
                const BYTE_WIDTH: usize = <$ty as ByteOrdered>::WIDTH;

                #[inline]
                fn read_from(bytes: &[u8]) -> Self {
                    <$ty as ByteOrdered>::from_ordered_bytes(bytes, Endian::NATIVE)
                }

                #[inline]
                fn write_to(&self, bytes: &mut [u8]) {
                    self.write_ordered_bytes(bytes, Endian::NATIVE);
                }
            }
        )+
    };
}

impl_native_value!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char
);

impl<T: ByteOrdered> BufferValue for BigEndian<T> {
    type Decoded = T;
    const BYTE_WIDTH: usize = T::WIDTH;

    #[inline]
    fn read_from(bytes: &[u8]) -> T {
        T::from_ordered_bytes(bytes, Endian::Big)
    }

    #[inline]
    fn write_to(&self, bytes: &mut [u8]) {
        self.0.write_ordered_bytes(bytes, Endian::Big);
    }
}

impl<T: ByteOrdered> BufferValue for LittleEndian<T> {
    type Decoded = T;
    const BYTE_WIDTH: usize = T::WIDTH;

    #[inline]
    fn read_from(bytes: &[u8]) -> T {
        T::from_ordered_bytes(bytes, Endian::Little)
    }

    #[inline]
    fn write_to(&self, bytes: &mut [u8]) {
        self.0.write_ordered_bytes(bytes, Endian::Little);
    }
}

impl<T: BufferValue, const N: usize> BufferValue for [T; N] {
    type Decoded = [T::Decoded; N];
    const BYTE_WIDTH: usize = T::BYTE_WIDTH * N;

    fn read_from(bytes: &[u8]) -> Self::Decoded {
        std::array::from_fn(|i| T::read_from(&bytes[i * T::BYTE_WIDTH..]))
    }

    fn write_to(&self, bytes: &mut [u8]) {
        for (i, item) in self.iter().enumerate() {
            item.write_to(&mut bytes[i * T::BYTE_WIDTH..]);
        }
    }
}
