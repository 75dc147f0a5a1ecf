//! Typed, bounds-checked binary reads and writes over byte slices.
//!
//! This crate moves fixed-width values (integers, floats, `bool`, `char`,
//! fixed-size arrays and user aggregates) between Rust values and borrowed
//! byte slices, in host order or in an explicit byte order.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Every value is decoded from byte slices with
//!   `from_be_bytes`/`from_le_bytes`, never through pointer casts.
//! - **Bounded operations** - Every checked call compares the full request
//!   against the available bytes before transferring anything.
//! - **Two error styles** - Panic-style calls (`read`, `write`, ...) treat a
//!   short buffer as a bug; result-style calls (`try_read`, `try_write`, ...)
//!   report one [`ReadError`]/[`WriteError`] per value and never panic.
//! - **Borrowed storage** - Nothing here allocates or owns a buffer.
//!
//! # Example
//!
//! ```
//! use buffer::{read, try_read, write, BigEndian, LittleEndian, ReadError};
//!
//! let mut bytes = [0u8; 7];
//! write(&mut bytes, (BigEndian(0x0102u16), true, LittleEndian(0x0A0B_0C0Du32)));
//! assert_eq!(bytes, [0x01, 0x02, 0x01, 0x0D, 0x0C, 0x0B, 0x0A]);
//!
//! let (word, flag, long) = read::<(BigEndian<u16>, bool, LittleEndian<u32>)>(&bytes);
//! assert_eq!((word, flag, long), (0x0102, true, 0x0A0B_0C0D));
//!
//! let (first, second) = try_read::<(BigEndian<u32>, u32)>(&bytes);
//! assert_eq!(first, Ok(0x0102_010D));
//! assert_eq!(second, Err(ReadError::InsufficientBuffer));
//! ```

mod encoding;
mod error;
mod list;
mod read;
mod unchecked;
mod value;
mod view;
mod write;

pub use encoding::{BigEndian, ByteOrdered, Endian, LittleEndian};
pub use error::{ReadError, ReadResult, WriteError, WriteResult};
pub use list::{byte_count, range_byte_count, ValueList};
pub use read::{
    read, read_at, read_endian, read_range, read_range_at, try_read, try_read_at,
    try_read_endian, try_read_range, try_read_range_at,
};
pub use unchecked::{unchecked_read, unchecked_write};
pub use value::BufferValue;
pub use view::{ReadView, WriteView};
pub use write::{
    try_write, try_write_at, try_write_endian, try_write_range, try_write_range_at, write,
    write_at, write_endian, write_range, write_range_at,
};
