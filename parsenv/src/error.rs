//! Error types for loading configuration from environment variables

use crate::value::ScalarKind;
use std::fmt;

/// A malformed directive string.
///
/// This is a bug in the configuration schema rather than in the environment,
/// so it is never collected into a [`LoadError`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectiveError {
    /// A `key=value` property with a key other than `name` or `default`.
    #[error("unknown property in directive: {key}")]
    UnknownProperty {
        /// The unrecognized key
        key: String,
    },

    /// A property containing more than one `=`.
    #[error("invalid property format in directive: {property}")]
    InvalidFormat {
        /// The offending property, verbatim
        property: String,
    },
}

/// A problem with a single field, collected during a load.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    /// A `required` field has neither an environment value nor a default.
    #[error("missing env value for required field: {field}")]
    Missing {
        /// Declared field name
        field: String,
        /// Environment variable that was looked up
        name: String,
    },

    /// An environment value or default could not be coerced to the field type.
    ///
    /// The field keeps its previous value.
    #[error("failed to parse {name}={value:?} for field {field} as {kind}: {message}")]
    Parse {
        /// Declared field name
        field: String,
        /// Environment variable that was looked up
        name: String,
        /// Raw string that failed to parse
        value: String,
        /// Declared type of the field
        kind: ScalarKind,
        /// Message from the parser
        message: String,
    },
}

impl FieldError {
    /// Declared name of the field this error belongs to.
    pub fn field(&self) -> &str {
        match self {
            Self::Missing { field, .. } | Self::Parse { field, .. } => field,
        }
    }
}

/// All field errors from one load, in field declaration order.
///
/// Fields that loaded successfully are still written to the target, so a
/// `LoadError` describes a partially populated value.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadError {
    errors: Vec<FieldError>,
}

impl LoadError {
    /// The individual field errors.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Consume the error, returning the individual field errors.
    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }

    /// Number of failing fields. Never zero.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterate over the individual field errors.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for LoadError {}

impl IntoIterator for LoadError {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a LoadError {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Accumulates field errors during a load.
#[derive(Debug, Default)]
pub(crate) struct Collector {
    errors: Vec<FieldError>,
}

impl Collector {
    pub(crate) fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub(crate) fn finish(self) -> Result<(), LoadError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(LoadError {
                errors: self.errors,
            })
        }
    }
}
