//! Inspection and encoding tools for bytewise buffers.
//!
//! This crate drives the `buffer` crate with layouts chosen at runtime:
//!
//! - Decode a file into typed fields, reporting short data per field
//! - Encode textual values into bytes for fixtures and test vectors
//! - Compute the encoded size of a layout
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not afterthoughts.
//! - **Human-readable output** - Make it easy to see which bytes became which value.
//! - **Never panic on input** - Only result-style buffer calls are used here.

mod decode;
mod encode;
mod layout;
mod limits;

pub use decode::{
    decode_fields, format_decode_pretty, DecodeError, DecodeReport, FieldReport, FieldValue,
};
pub use encode::{encode_fields, split_values, EncodeError};
pub use layout::{FieldKind, FieldSpec, Layout, LayoutError};
pub use limits::{LimitError, Limits};
