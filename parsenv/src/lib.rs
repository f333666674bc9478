//! Populate configuration structs from environment variables
//!
//! `parsenv` fills the fields of a struct from environment variables. Each field
//! may carry a small directive string that renames its variable, gives it a
//! default, marks it required, or excludes it.
//!
//! # Features
//!
//! - **Declarative**: `#[derive(EnvConfig)]` with one `#[env("...")]` directive per field
//! - **Naming**: `camelCase`/`PascalCase`/`snake_case` fields map to `SCREAMING_SNAKE_CASE`
//! - **Error accumulation**: every missing or malformed field is reported at once
//! - **In place**: loads into an existing value, leaving unset fields untouched
//!
//! # Example
//!
//! ```rust
//! use parsenv::EnvConfig;
//!
//! #[derive(Debug, Default, EnvConfig)]
//! struct Config {
//!     #[env("required")]
//!     foo: String,
//!
//!     #[env("default=15")]
//!     bar: i64,
//!
//!     // BAZ is not consulted; the variable is called bAz
//!     #[env("name=bAz;default=6.97")]
//!     baz: f64,
//!
//!     qux: bool,
//! }
//!
//! # fn main() -> Result<(), parsenv::LoadError> {
//! std::env::set_var("FOO", "hello");
//! std::env::set_var("BAZ", "13.37");
//! std::env::set_var("QUX", "yes");
//!
//! let mut config = Config::default();
//! config.load()?;
//!
//! assert_eq!(config.foo, "hello");
//! assert_eq!(config.bar, 15);
//! assert_eq!(config.baz, 6.97);
//! assert!(config.qux);
//! # Ok(())
//! # }
//! ```
//!
//! # Directives
//!
//! A directive is a `;`-separated list of properties:
//!
//! ```text
//! directive := "" | property ( ";" property )*
//! property  := "-" | "required" | key "=" value
//! key       := "name" | "default"
//! ```
//!
//! | Directive              | Meaning                                              |
//! |------------------------|------------------------------------------------------|
//! | `#[env("-")]`          | Never touch this field                               |
//! | `#[env("required")]`   | Report an error when no value or default is found    |
//! | `#[env("name=PORT")]`  | Read `PORT` instead of the derived name              |
//! | `#[env("default=80")]` | Use `80` when the variable is unset or empty         |
//!
//! A `default` takes precedence over `required`; `-` takes precedence over
//! everything.
//!
//! # Value Parsing
//!
//! - `String`: taken verbatim
//! - integers (`i8`..`i128`, `u8`..`u128`, `isize`, `usize`): base 10, range checked
//! - `f32`, `f64`: decimal or exponent notation
//! - `bool`: `true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`, any case
//!
//! An empty variable is treated exactly like an unset one.
//!
//! # Errors
//!
//! Loading returns a [`LoadError`] listing every [`FieldError`] in field order.
//! Fields that loaded successfully are written even when other fields fail.
//!
//! ```rust
//! use parsenv::{EnvConfig, FieldError};
//!
//! #[derive(Default, EnvConfig)]
//! struct Config {
//!     #[env("required")]
//!     database_url: String,
//!     #[env("required")]
//!     api_key: String,
//! }
//!
//! let mut config = Config::default();
//! let err = config.load_from(&std::collections::HashMap::<String, String>::new()).unwrap_err();
//! let fields: Vec<_> = err.iter().map(FieldError::field).collect();
//! assert_eq!(fields, ["database_url", "api_key"]);
//! ```

#![deny(missing_docs)]

mod case;
mod directive;
mod error;
mod field;
mod loader;
mod source;
mod value;

pub use case::screaming_snake_case;
pub use directive::Directive;
pub use error::{DirectiveError, FieldError, LoadError};
pub use field::{EnvConfig, FieldDescriptor};
pub use loader::load_from;
pub use parsenv_derive::EnvConfig;
pub use source::{ProcessEnv, Source};
pub use value::{coerce, parse_bool, Scalar, ScalarKind, Value};
