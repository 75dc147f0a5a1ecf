//! Input limits for decoding and encoding.

use std::fmt;

/// Bounds applied before any bytes are processed.
///
/// These protect the tools against pathological inputs, such as a multi
/// gigabyte file passed to `decode` by mistake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of input bytes accepted by `decode`.
    pub max_input_bytes: usize,

    /// Maximum number of fields in a layout.
    pub max_fields: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_input_bytes: 16 * 1024 * 1024,
            max_fields: 4096,
        }
    }
}

impl Limits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_input_bytes: 4096,
            max_fields: 32,
        }
    }

    /// Creates limits with no restrictions (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_input_bytes: usize::MAX,
            max_fields: usize::MAX,
        }
    }

    /// Checks a layout's field count.
    pub const fn check_fields(&self, count: usize) -> Result<(), LimitError> {
        if count > self.max_fields {
            return Err(LimitError::TooManyFields {
                count,
                max: self.max_fields,
            });
        }
        Ok(())
    }

    /// Checks an input length.
    pub const fn check_input(&self, len: usize) -> Result<(), LimitError> {
        if len > self.max_input_bytes {
            return Err(LimitError::InputTooLarge {
                len,
                max: self.max_input_bytes,
            });
        }
        Ok(())
    }
}

/// A configured limit was exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitError {
    InputTooLarge { len: usize, max: usize },
    TooManyFields { count: usize, max: usize },
}

impl fmt::Display for LimitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputTooLarge { len, max } => {
                write!(f, "input is {len} bytes, limit is {max}")
            }
            Self::TooManyFields { count, max } => {
                write!(f, "layout has {count} fields, limit is {max}")
            }
        }
    }
}

impl std::error::Error for LimitError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits_are_reasonable() {
        let limits = Limits::default();
        assert!(limits.max_input_bytes >= 1024 * 1024);
        assert!(limits.max_fields >= 256);
    }

    #[test]
    fn testing_limits_are_smaller() {
        let default = Limits::default();
        let testing = Limits::for_testing();
        assert!(testing.max_input_bytes < default.max_input_bytes);
        assert!(testing.max_fields < default.max_fields);
    }

    #[test]
    fn checks_report_the_exceeded_limit() {
        let limits = Limits::for_testing();
        assert_eq!(limits.check_fields(32), Ok(()));
        assert_eq!(
            limits.check_fields(33),
            Err(LimitError::TooManyFields { count: 33, max: 32 })
        );
        assert_eq!(
            limits.check_input(4097),
            Err(LimitError::InputTooLarge { len: 4097, max: 4096 })
        );
        assert_eq!(Limits::unlimited().check_input(usize::MAX), Ok(()));
    }
}
