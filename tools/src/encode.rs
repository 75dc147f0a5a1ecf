//! Layout-driven encoding of textual values into raw bytes.

use std::fmt;

use buffer::{ByteOrdered, WriteError, WriteView};

use crate::layout::{FieldKind, FieldSpec, Layout};
use crate::limits::{LimitError, Limits};

/// Errors produced while encoding values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    Limit(LimitError),
    /// The number of values does not match the layout.
    ValueCount { expected: usize, found: usize },
    /// A value could not be parsed as its field's type.
    InvalidValue {
        index: usize,
        kind: FieldKind,
        value: String,
    },
    /// A value did not fit in the output buffer.
    Write { index: usize, error: WriteError },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Limit(err) => write!(f, "{err}"),
            Self::ValueCount { expected, found } => {
                write!(f, "layout has {expected} fields but {found} values were given")
            }
            Self::InvalidValue { index, kind, value } => {
                write!(f, "value {index} ('{value}') is not a valid {kind}")
            }
            Self::Write { index, error } => write!(f, "value {index}: {error}"),
        }
    }
}

impl std::error::Error for EncodeError {}

impl From<LimitError> for EncodeError {
    fn from(err: LimitError) -> Self {
        Self::Limit(err)
    }
}

/// Splits a comma-separated value list, trimming whitespace.
#[must_use]
pub fn split_values(csv: &str) -> Vec<&str> {
    if csv.trim().is_empty() {
        return Vec::new();
    }
    csv.split(',').map(str::trim).collect()
}

/// Encodes one value per field of `layout` into a freshly sized buffer.
pub fn encode_fields(
    layout: &Layout,
    values: &[&str],
    limits: &Limits,
) -> Result<Vec<u8>, EncodeError> {
    limits.check_fields(layout.fields().len())?;
    if values.len() != layout.fields().len() {
        return Err(EncodeError::ValueCount {
            expected: layout.fields().len(),
            found: values.len(),
        });
    }

    let mut bytes = vec![0u8; layout.byte_count()];
    let mut view = WriteView::new(&mut bytes);
    for (index, (spec, raw)) in layout.fields().iter().zip(values).enumerate() {
        write_field(&mut view, index, *spec, raw)?;
    }
    tracing::debug!(fields = values.len(), bytes = view.position(), "encoded layout");
    Ok(bytes)
}

fn write_field(
    view: &mut WriteView<'_>,
    index: usize,
    spec: FieldSpec,
    raw: &str,
) -> Result<(), EncodeError> {
    let endian = spec.resolved_endian();
    let written = match spec.kind {
        FieldKind::U8 => view.try_write_endian(parse::<u8>(index, spec.kind, raw)?, endian),
        FieldKind::U16 => view.try_write_endian(parse::<u16>(index, spec.kind, raw)?, endian),
        FieldKind::U32 => view.try_write_endian(parse::<u32>(index, spec.kind, raw)?, endian),
        FieldKind::U64 => view.try_write_endian(parse::<u64>(index, spec.kind, raw)?, endian),
        FieldKind::I8 => view.try_write_endian(parse::<i8>(index, spec.kind, raw)?, endian),
        FieldKind::I16 => view.try_write_endian(parse::<i16>(index, spec.kind, raw)?, endian),
        FieldKind::I32 => view.try_write_endian(parse::<i32>(index, spec.kind, raw)?, endian),
        FieldKind::I64 => view.try_write_endian(parse::<i64>(index, spec.kind, raw)?, endian),
        FieldKind::F32 => view.try_write_endian(parse::<f32>(index, spec.kind, raw)?, endian),
        FieldKind::F64 => view.try_write_endian(parse::<f64>(index, spec.kind, raw)?, endian),
        FieldKind::Bool => view.try_write_endian(parse_bool(index, raw)?, endian),
    };
    written
        .map(|_| ())
        .map_err(|error| EncodeError::Write { index, error })
}

fn parse<T>(index: usize, kind: FieldKind, raw: &str) -> Result<T, EncodeError>
where
    T: ByteOrdered + std::str::FromStr,
{
    raw.parse().map_err(|_| EncodeError::InvalidValue {
        index,
        kind,
        value: raw.to_string(),
    })
}

fn parse_bool(index: usize, raw: &str) -> Result<bool, EncodeError> {
    match raw {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(EncodeError::InvalidValue {
            index,
            kind: FieldKind::Bool,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(text: &str) -> Layout {
        text.parse().unwrap()
    }

    #[test]
    fn encodes_mixed_layout() {
        let bytes = encode_fields(
            &layout("le:u32,be:u16,bool,le:u32"),
            &split_values("305419896, 43981, true, 4275878552"),
            &Limits::for_testing(),
        )
        .unwrap();
        assert_eq!(
            bytes,
            [0x78, 0x56, 0x34, 0x12, 0xAB, 0xCD, 0x01, 0x98, 0xBA, 0xDC, 0xFE]
        );
    }

    #[test]
    fn signed_and_float_fields() {
        let bytes = encode_fields(
            &layout("be:i16,le:f32"),
            &["-2", "1.5"],
            &Limits::for_testing(),
        )
        .unwrap();
        assert_eq!(bytes[..2], [0xFF, 0xFE]);
        assert_eq!(bytes[2..], 1.5f32.to_le_bytes());
    }

    #[test]
    fn value_count_must_match() {
        let err = encode_fields(&layout("u8,u8"), &["1"], &Limits::for_testing()).unwrap_err();
        assert_eq!(err, EncodeError::ValueCount { expected: 2, found: 1 });
    }

    #[test]
    fn invalid_value_names_field() {
        let err = encode_fields(&layout("u8,u8"), &["1", "300"], &Limits::for_testing())
            .unwrap_err();
        assert_eq!(
            err,
            EncodeError::InvalidValue {
                index: 1,
                kind: FieldKind::U8,
                value: "300".to_string(),
            }
        );
        assert!(err.to_string().contains("not a valid u8"));
    }

    #[test]
    fn bool_accepts_digits() {
        let bytes =
            encode_fields(&layout("bool,bool"), &["1", "false"], &Limits::for_testing()).unwrap();
        assert_eq!(bytes, [1, 0]);
    }

    #[test]
    fn split_values_handles_empty_input() {
        assert!(split_values("  ").is_empty());
        assert_eq!(split_values("1, 2 ,3"), vec!["1", "2", "3"]);
    }
}
