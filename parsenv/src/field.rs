//! Schema of a configuration struct

use crate::error::LoadError;
use crate::loader;
use crate::source::{ProcessEnv, Source};
use crate::value::{ScalarKind, Value};

/// One loadable field of a configuration struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name as declared, used to derive the variable name.
    pub name: &'static str,
    /// Declared type of the field.
    pub kind: ScalarKind,
    /// Raw directive string, empty when the field has none.
    pub directive: &'static str,
}

impl FieldDescriptor {
    /// Describe a field; usable in `const` context.
    pub const fn new(name: &'static str, kind: ScalarKind, directive: &'static str) -> Self {
        Self {
            name,
            kind,
            directive,
        }
    }
}

/// A struct whose fields can be populated from environment variables.
///
/// Usually implemented with `#[derive(EnvConfig)]`. A hand-written
/// implementation lists its fields in `FIELDS` and writes values back in
/// `assign`:
///
/// ```
/// use parsenv::{EnvConfig, FieldDescriptor, ScalarKind, Scalar, Value};
///
/// #[derive(Default)]
/// struct Config {
///     port: u16,
/// }
///
/// impl EnvConfig for Config {
///     const FIELDS: &'static [FieldDescriptor] = &[
///         FieldDescriptor::new("port", ScalarKind::U16, "default=8080"),
///     ];
///
///     fn assign(&mut self, index: usize, value: Value) {
///         if let (0, Some(port)) = (index, u16::from_value(value)) {
///             self.port = port;
///         }
///     }
/// }
///
/// let mut config = Config::default();
/// config.load_from(&std::collections::HashMap::<String, String>::new()).unwrap();
/// assert_eq!(config.port, 8080);
/// ```
pub trait EnvConfig {
    /// Loadable fields in declaration order.
    const FIELDS: &'static [FieldDescriptor];

    /// Write `value` into the field described by `FIELDS[index]`.
    ///
    /// `value` always has the kind declared for that field.
    fn assign(&mut self, index: usize, value: Value);

    /// Populate fields from the process environment.
    ///
    /// See [`load_from`](Self::load_from).
    fn load(&mut self) -> Result<(), LoadError>
    where
        Self: Sized,
    {
        loader::load_from(self, &ProcessEnv)
    }

    /// Populate fields from `source`.
    ///
    /// Every field is processed even if earlier ones fail. Fields that loaded
    /// are written; fields that failed keep their previous value and are
    /// reported together in the returned [`LoadError`].
    ///
    /// # Panics
    ///
    /// Panics if a field's directive is malformed. Derived implementations
    /// reject such directives at compile time.
    fn load_from<S>(&mut self, source: &S) -> Result<(), LoadError>
    where
        Self: Sized,
        S: Source + ?Sized,
    {
        loader::load_from(self, source)
    }

    /// Build a `Default` value and populate it from the process environment.
    fn from_env() -> Result<Self, LoadError>
    where
        Self: Sized + Default,
    {
        let mut config = Self::default();
        config.load()?;
        Ok(config)
    }
}
