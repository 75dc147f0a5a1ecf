//! Runtime field layouts such as `u32,be:u16,bool,le:u32`.

use std::fmt;
use std::str::FromStr;

use buffer::{ByteOrdered, Endian};
use serde::Serialize;

/// Primitive type of one layout field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    Bool,
}

impl FieldKind {
    const ALL: [Self; 11] = [
        Self::U8,
        Self::U16,
        Self::U32,
        Self::U64,
        Self::I8,
        Self::I16,
        Self::I32,
        Self::I64,
        Self::F32,
        Self::F64,
        Self::Bool,
    ];

    /// Encoded width in bytes.
    #[must_use]
    pub const fn width(self) -> usize {
        match self {
            Self::U8 => u8::WIDTH,
            Self::U16 => u16::WIDTH,
            Self::U32 => u32::WIDTH,
            Self::U64 => u64::WIDTH,
            Self::I8 => i8::WIDTH,
            Self::I16 => i16::WIDTH,
            Self::I32 => i32::WIDTH,
            Self::I64 => i64::WIDTH,
            Self::F32 => f32::WIDTH,
            Self::F64 => f64::WIDTH,
            Self::Bool => bool::WIDTH,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Bool => "bool",
        }
    }
}

impl FromStr for FieldKind {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| LayoutError::UnknownType(s.to_string()))
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One field: a type plus an optional explicit byte order.
///
/// Without an explicit order the field uses host order, like a bare value in
/// the `buffer` crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    pub kind: FieldKind,
    pub endian: Option<Endian>,
}

impl FieldSpec {
    /// Byte order applied when transferring this field.
    #[must_use]
    pub fn resolved_endian(self) -> Endian {
        self.endian.unwrap_or(Endian::NATIVE)
    }
}

impl FromStr for FieldSpec {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (endian, name) = match s.split_once(':') {
            Some(("be", name)) => (Some(Endian::Big), name),
            Some(("le", name)) => (Some(Endian::Little), name),
            Some((prefix, _)) => return Err(LayoutError::UnknownByteOrder(prefix.to_string())),
            None => (None, s),
        };
        Ok(Self {
            kind: name.parse()?,
            endian,
        })
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.endian {
            Some(Endian::Big) => write!(f, "be:{}", self.kind),
            Some(Endian::Little) => write!(f, "le:{}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// An ordered list of fields laid out consecutively without padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    fields: Vec<FieldSpec>,
}

impl Layout {
    #[must_use]
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Total encoded width of every field.
    #[must_use]
    pub fn byte_count(&self) -> usize {
        self.fields.iter().map(|field| field.kind.width()).sum()
    }
}

impl FromStr for Layout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(LayoutError::Empty);
        }
        let fields = s
            .split(',')
            .enumerate()
            .map(|(index, raw)| {
                let raw = raw.trim();
                if raw.is_empty() {
                    return Err(LayoutError::EmptyField { index });
                }
                raw.parse()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { fields })
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{field}")?;
        }
        Ok(())
    }
}

/// Errors produced while parsing a layout string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The layout has no fields.
    Empty,
    /// A field between two commas is blank.
    EmptyField { index: usize },
    /// The type name is not one of the supported primitives.
    UnknownType(String),
    /// The byte order prefix is neither `be` nor `le`.
    UnknownByteOrder(String),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "layout has no fields"),
            Self::EmptyField { index } => write!(f, "field {index} is empty"),
            Self::UnknownType(name) => write!(f, "unknown field type '{name}'"),
            Self::UnknownByteOrder(prefix) => {
                write!(f, "unknown byte order '{prefix}', expected 'be' or 'le'")
            }
        }
    }
}

impl std::error::Error for LayoutError {}
