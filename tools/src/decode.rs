//! Layout-driven decoding of raw bytes into field reports.

use std::fmt::{self, Write as _};

use buffer::{ReadError, ReadView};
use serde::Serialize;

use crate::layout::{FieldKind, FieldSpec, Layout};
use crate::limits::{LimitError, Limits};

/// A decoded field value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsigned(v) => write!(f, "{v}"),
            Self::Signed(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
        }
    }
}

/// One decoded field. Exactly one of `value` and `error` is set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldReport {
    pub index: usize,
    pub offset: usize,
    pub field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of decoding a buffer against a layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodeReport {
    pub layout: String,
    pub input_bytes: usize,
    pub start_offset: usize,
    pub bytes_consumed: usize,
    pub fields: Vec<FieldReport>,
}

impl DecodeReport {
    /// Returns `true` if every field decoded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.fields.iter().all(|field| field.error.is_none())
    }
}

/// Errors that stop decoding before any field is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    Limit(LimitError),
    Offset { offset: usize, len: usize, error: ReadError },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Limit(err) => write!(f, "{err}"),
            Self::Offset { offset, len, error } => {
                write!(f, "{error}: offset {offset} in {len} byte input")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

impl From<LimitError> for DecodeError {
    fn from(err: LimitError) -> Self {
        Self::Limit(err)
    }
}

/// Decodes `bytes` from `offset` using `layout`.
///
/// Fields are read with result-style calls, so a short input still yields a
/// report: fields that fit carry values and every later field carries the
/// error.
pub fn decode_fields(
    bytes: &[u8],
    offset: usize,
    layout: &Layout,
    limits: &Limits,
) -> Result<DecodeReport, DecodeError> {
    limits.check_input(bytes.len())?;
    limits.check_fields(layout.fields().len())?;

    let mut view = ReadView::try_with_offset(bytes, offset).map_err(|error| DecodeError::Offset {
        offset,
        len: bytes.len(),
        error,
    })?;

    let mut fields = Vec::with_capacity(layout.fields().len());
    for (index, spec) in layout.fields().iter().enumerate() {
        let field_offset = view.position();
        let (value, error) = match read_field(&mut view, *spec) {
            Ok(value) => (Some(value), None),
            Err(err) => (None, Some(err.to_string())),
        };
        fields.push(FieldReport {
            index,
            offset: field_offset,
            field: spec.to_string(),
            value,
            error,
        });
    }

    let report = DecodeReport {
        layout: layout.to_string(),
        input_bytes: bytes.len(),
        start_offset: offset,
        bytes_consumed: view.position() - offset,
        fields,
    };
    tracing::debug!(
        fields = report.fields.len(),
        consumed = report.bytes_consumed,
        complete = report.is_complete(),
        "decoded layout"
    );
    Ok(report)
}

fn read_field(view: &mut ReadView<'_>, spec: FieldSpec) -> Result<FieldValue, ReadError> {
    let endian = spec.resolved_endian();
    let value = match spec.kind {
        FieldKind::U8 => FieldValue::Unsigned(view.try_read_endian::<u8>(endian)?.into()),
        FieldKind::U16 => FieldValue::Unsigned(view.try_read_endian::<u16>(endian)?.into()),
        FieldKind::U32 => FieldValue::Unsigned(view.try_read_endian::<u32>(endian)?.into()),
        FieldKind::U64 => FieldValue::Unsigned(view.try_read_endian::<u64>(endian)?),
        FieldKind::I8 => FieldValue::Signed(view.try_read_endian::<i8>(endian)?.into()),
        FieldKind::I16 => FieldValue::Signed(view.try_read_endian::<i16>(endian)?.into()),
        FieldKind::I32 => FieldValue::Signed(view.try_read_endian::<i32>(endian)?.into()),
        FieldKind::I64 => FieldValue::Signed(view.try_read_endian::<i64>(endian)?),
        FieldKind::F32 => FieldValue::Float(view.try_read_endian::<f32>(endian)?.into()),
        FieldKind::F64 => FieldValue::Float(view.try_read_endian::<f64>(endian)?),
        FieldKind::Bool => FieldValue::Bool(view.try_read_endian::<bool>(endian)?),
    };
    Ok(value)
}

/// Formats a report as aligned, human-readable lines.
#[must_use]
pub fn format_decode_pretty(report: &DecodeReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "layout: {} ({} of {} bytes from offset {})",
        report.layout, report.bytes_consumed, report.input_bytes, report.start_offset
    );
    for field in &report.fields {
        let _ = write!(out, "  [{:>3}] @{:<6} {:<8} ", field.index, field.offset, field.field);
        match (&field.value, &field.error) {
            (Some(value), _) => {
                let _ = writeln!(out, "= {value}");
            }
            (None, Some(error)) => {
                let _ = writeln!(out, "! {error}");
            }
            (None, None) => {
                let _ = writeln!(out);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(text: &str) -> Layout {
        text.parse().unwrap()
    }

    #[test]
    fn decodes_every_field() {
        let bytes = [0x78, 0x56, 0x34, 0x12, 0xAB, 0xCD, 0x01, 0x98, 0xBA, 0xDC, 0xFE];
        let report = decode_fields(
            &bytes,
            0,
            &layout("le:u32,be:u16,bool,le:u32"),
            &Limits::for_testing(),
        )
        .unwrap();

        assert!(report.is_complete());
        assert_eq!(report.bytes_consumed, 11);
        let values: Vec<_> = report.fields.iter().map(|f| f.value).collect();
        assert_eq!(
            values,
            vec![
                Some(FieldValue::Unsigned(0x1234_5678)),
                Some(FieldValue::Unsigned(0xABCD)),
                Some(FieldValue::Bool(true)),
                Some(FieldValue::Unsigned(0xFEDC_BA98)),
            ]
        );
        assert_eq!(report.fields[2].offset, 6);
    }

    #[test]
    fn short_input_reports_per_field() {
        let bytes = [0xFF, 0xFE, 0x00];
        let report =
            decode_fields(&bytes, 0, &layout("be:i16,be:u16,u8"), &Limits::for_testing()).unwrap();

        assert!(!report.is_complete());
        assert_eq!(report.fields[0].value, Some(FieldValue::Signed(-2)));
        assert!(report.fields[1].error.is_some());
        assert!(report.fields[2].error.is_some());
        assert_eq!(report.bytes_consumed, 3);
    }

    #[test]
    fn offset_past_end_is_rejected() {
        let err = decode_fields(&[0u8; 4], 5, &layout("u8"), &Limits::for_testing()).unwrap_err();
        assert_eq!(
            err,
            DecodeError::Offset {
                offset: 5,
                len: 4,
                error: ReadError::InvalidPositionOffset,
            }
        );
    }

    #[test]
    fn limits_are_enforced() {
        let bytes = vec![0u8; 4097];
        let err = decode_fields(&bytes, 0, &layout("u8"), &Limits::for_testing()).unwrap_err();
        assert!(matches!(err, DecodeError::Limit(LimitError::InputTooLarge { .. })));
    }

    #[test]
    fn pretty_output_lists_fields() {
        let report =
            decode_fields(&[1, 2], 1, &layout("u8,u8"), &Limits::for_testing()).unwrap();
        let text = format_decode_pretty(&report);
        assert!(text.contains("= 2"));
        assert!(text.contains("! insufficient buffer space for read"));
    }

    #[test]
    fn json_omits_missing_parts() {
        let report = decode_fields(&[7], 0, &layout("u8"), &Limits::for_testing()).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["fields"][0]["value"], 7);
        assert!(json["fields"][0].get("error").is_none());
    }
}
