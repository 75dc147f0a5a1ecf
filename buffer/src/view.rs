//! Cursor-carrying views for sequential reads and writes.
//!
//! A view borrows its byte slice and tracks a position within it. Every
//! transfer starts at the position and advances it, so a sequence of calls
//! walks the buffer front to back without manual offset arithmetic.

use crate::encoding::{ByteOrdered, Endian};
use crate::error::{ReadError, ReadResult, WriteError, WriteResult};
use crate::list::ValueList;
use crate::value::BufferValue;
use crate::{read, write};

#[cold]
#[track_caller]
fn seek_failed(position: usize, len: usize) -> ! {
    panic!("cannot seek past end of buffer: position {position}, length {len}")
}

/// A read cursor over a borrowed byte slice.
///
/// ```
/// use buffer::{BigEndian, ReadView};
///
/// let bytes = [0x00, 0x2A, 0x01];
/// let mut view = ReadView::new(&bytes);
/// assert_eq!(view.read::<BigEndian<u16>>(), 42);
/// assert!(view.read::<bool>());
/// assert!(view.is_empty());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ReadView<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> ReadView<'a> {
    /// Creates a view positioned at the start of `data`.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Creates a view positioned `offset` bytes into `data`.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is past the end of `data`.
    #[track_caller]
    pub fn with_offset(data: &'a [u8], offset: usize) -> Self {
        let mut view = Self::new(data);
        view.seek(offset);
        view
    }

    /// Creates a view positioned `offset` bytes into `data`, or reports
    /// [`ReadError::InvalidPositionOffset`].
    pub fn try_with_offset(data: &'a [u8], offset: usize) -> ReadResult<Self> {
        let mut view = Self::new(data);
        view.try_seek(offset)?;
        Ok(view)
    }

    /// Moves the cursor to `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is past the end of the buffer.
    #[track_caller]
    pub fn seek(&mut self, position: usize) -> &mut Self {
        if position > self.data.len() {
            seek_failed(position, self.data.len());
        }
        self.position = position;
        self
    }

    /// Moves the cursor to `position`; the cursor is unchanged on failure.
    pub fn try_seek(&mut self, position: usize) -> ReadResult<()> {
        if position > self.data.len() {
            return Err(ReadError::InvalidPositionOffset);
        }
        self.position = position;
        Ok(())
    }

    /// Returns the current byte position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the number of bytes between the cursor and the end.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// Returns the bytes between the cursor and the end.
    #[must_use]
    pub fn remaining_bytes(&self) -> &'a [u8] {
        &self.data[self.position..]
    }

    /// Returns the length of the whole underlying buffer.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if there are no more bytes to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Reads the values of `L` and advances past them.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `byte_count::<L>()` bytes remain. The cursor does
    /// not move in that case.
    #[track_caller]
    pub fn read<L: ValueList>(&mut self) -> L::Decoded {
        let out = read::read::<L>(self.remaining_bytes());
        self.position += L::BYTE_COUNT;
        out
    }

    /// Reads the values of `L`, one result per slot.
    ///
    /// The cursor advances by the full width of `L`, clamped to the end of the
    /// buffer, whether or not every slot succeeded.
    pub fn try_read<L: ValueList>(&mut self) -> L::ReadResults {
        let out = read::try_read::<L>(self.remaining_bytes());
        self.advance_clamped(L::BYTE_COUNT);
        out
    }

    /// Fills `out` with consecutive `T` values and advances past them.
    ///
    /// # Panics
    ///
    /// Panics if the range does not fit in the remaining bytes.
    #[track_caller]
    pub fn read_range<T: BufferValue>(&mut self, out: &mut [T::Decoded]) {
        read::read_range::<T>(self.remaining_bytes(), out);
        self.position += T::BYTE_WIDTH * out.len();
    }

    /// Fills `out` with consecutive `T` values as a unit.
    ///
    /// On failure `out` is untouched and the cursor moves to the end of the
    /// buffer.
    pub fn try_read_range<T: BufferValue>(&mut self, out: &mut [T::Decoded]) -> ReadResult<()> {
        match read::try_read_range::<T>(self.remaining_bytes(), out) {
            Ok(()) => {
                self.position += T::BYTE_WIDTH * out.len();
                Ok(())
            }
            Err(err) => {
                self.position = self.data.len();
                Err(err)
            }
        }
    }

    /// Reads a `T` in the byte order chosen at runtime.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `T::WIDTH` bytes remain.
    #[track_caller]
    pub fn read_endian<T: ByteOrdered>(&mut self, endian: Endian) -> T {
        let out = read::read_endian::<T>(self.remaining_bytes(), endian);
        self.position += T::WIDTH;
        out
    }

    /// Reads a `T` in the byte order chosen at runtime, advancing like
    /// [`try_read`](Self::try_read).
    pub fn try_read_endian<T: ByteOrdered>(&mut self, endian: Endian) -> ReadResult<T> {
        let out = read::try_read_endian::<T>(self.remaining_bytes(), endian);
        self.advance_clamped(T::WIDTH);
        out
    }

    fn advance_clamped(&mut self, count: usize) {
        self.position += count.min(self.remaining());
    }
}

/// A write cursor over a borrowed byte slice.
///
/// ```
/// use buffer::{BigEndian, WriteView};
///
/// let mut bytes = [0u8; 8];
/// let mut view = WriteView::new(&mut bytes);
/// view.write((BigEndian(0x0102u16), true));
/// assert_eq!(view.written(), &[0x01, 0x02, 0x01]);
/// ```
#[derive(Debug)]
pub struct WriteView<'a> {
    data: &'a mut [u8],
    position: usize,
}

impl<'a> WriteView<'a> {
    /// Creates a view positioned at the start of `data`.
    #[must_use]
    pub fn new(data: &'a mut [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Creates a view positioned `offset` bytes into `data`.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is past the end of `data`.
    #[track_caller]
    pub fn with_offset(data: &'a mut [u8], offset: usize) -> Self {
        let mut view = Self::new(data);
        view.seek(offset);
        view
    }

    /// Creates a view positioned `offset` bytes into `data`, or reports
    /// [`WriteError::InvalidPositionOffset`].
    pub fn try_with_offset(data: &'a mut [u8], offset: usize) -> WriteResult<Self> {
        let mut view = Self::new(data);
        view.try_seek(offset)?;
        Ok(view)
    }

    /// Moves the cursor to `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is past the end of the buffer.
    #[track_caller]
    pub fn seek(&mut self, position: usize) -> &mut Self {
        if position > self.data.len() {
            seek_failed(position, self.data.len());
        }
        self.position = position;
        self
    }

    /// Moves the cursor to `position`; the cursor is unchanged on failure.
    pub fn try_seek(&mut self, position: usize) -> WriteResult<()> {
        if position > self.data.len() {
            return Err(WriteError::InvalidPositionOffset);
        }
        self.position = position;
        Ok(())
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// Returns the unwritten tail of the buffer.
    pub fn remaining_bytes(&mut self) -> &mut [u8] {
        &mut self.data[self.position..]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if there is no room left to write.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the bytes before the cursor.
    #[must_use]
    pub fn written(&self) -> &[u8] {
        &self.data[..self.position]
    }

    /// Consumes the view and returns the bytes before the cursor.
    #[must_use]
    pub fn into_written(self) -> &'a mut [u8] {
        let data = self.data;
        &mut data[..self.position]
    }

    /// Writes `values` and advances past them.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `byte_count::<L>()` bytes remain. Neither the
    /// cursor nor the buffer changes in that case.
    #[track_caller]
    pub fn write<L: ValueList>(&mut self, values: L) -> usize {
        let written = write::write(self.remaining_bytes(), values);
        self.position += written;
        written
    }

    /// Writes `values` slot by slot.
    ///
    /// The cursor advances by the full width of `L`, clamped to the end of the
    /// buffer, whether or not every slot fit.
    pub fn try_write<L: ValueList>(&mut self, values: L) -> L::WriteResults {
        let out = write::try_write(self.remaining_bytes(), values);
        self.advance_clamped(L::BYTE_COUNT);
        out
    }

    /// Writes every element of `values` and advances past them.
    ///
    /// # Panics
    ///
    /// Panics if the range does not fit in the remaining bytes.
    #[track_caller]
    pub fn write_range<T: BufferValue>(&mut self, values: &[T]) -> usize {
        let written = write::write_range(self.remaining_bytes(), values);
        self.position += written;
        written
    }

    /// Writes every element of `values` as a unit.
    ///
    /// On failure nothing is written and the cursor moves to the end of the
    /// buffer.
    pub fn try_write_range<T: BufferValue>(&mut self, values: &[T]) -> WriteResult<usize> {
        match write::try_write_range(self.remaining_bytes(), values) {
            Ok(written) => {
                self.position += written;
                Ok(written)
            }
            Err(err) => {
                self.position = self.data.len();
                Err(err)
            }
        }
    }

    /// Writes `value` in the byte order chosen at runtime.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `T::WIDTH` bytes remain.
    #[track_caller]
    pub fn write_endian<T: ByteOrdered>(&mut self, value: T, endian: Endian) -> usize {
        let written = write::write_endian(self.remaining_bytes(), value, endian);
        self.position += written;
        written
    }

    /// Writes `value` in the byte order chosen at runtime, advancing like
    /// [`try_write`](Self::try_write).
    pub fn try_write_endian<T: ByteOrdered>(
        &mut self,
        value: T,
        endian: Endian,
    ) -> WriteResult<usize> {
        let out = write::try_write_endian(self.remaining_bytes(), value, endian);
        self.advance_clamped(T::WIDTH);
        out
    }

    fn advance_clamped(&mut self, count: usize) {
        self.position += count.min(self.remaining());
    }
}
