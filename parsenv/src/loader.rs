//! Resolution of field values from a [`Source`]

use crate::case::screaming_snake_case;
use crate::directive::Directive;
use crate::error::{Collector, FieldError, LoadError};
use crate::field::EnvConfig;
use crate::source::Source;
use crate::value::coerce;

/// Populate every field of `config` from `source`.
///
/// For each field, in declaration order:
///
/// 1. The variable name is the directive's `name`, or else the field name in
///    `SCREAMING_SNAKE_CASE`.
/// 2. Ignored fields (`-`) are skipped.
/// 3. A non-empty variable value is coerced and written. Otherwise a `default`
///    is coerced and written. Otherwise a `required` field is reported missing.
///    Otherwise the field is left untouched.
///
/// An empty variable counts as unset. Coercion failures leave the field
/// untouched and are reported.
///
/// # Panics
///
/// Panics if a field's directive is malformed.
pub fn load_from<C, S>(config: &mut C, source: &S) -> Result<(), LoadError>
where
    C: EnvConfig,
    S: Source + ?Sized,
{
    let mut errors = Collector::default();

    for (index, field) in C::FIELDS.iter().enumerate() {
        let directive = match Directive::parse(field.directive) {
            Ok(directive) => directive,
            Err(e) => panic!("invalid directive on field `{}`: {e}", field.name),
        };
        let name = directive
            .name
            .unwrap_or_else(|| screaming_snake_case(field.name));

        if directive.ignored {
            tracing::debug!(field = field.name, "skipped");
            continue;
        }

        let raw = match source.get(&name).filter(|value| !value.is_empty()) {
            Some(value) => {
                tracing::debug!(field = field.name, name = %name, "loading from environment");
                value
            }
            None => match directive.default {
                Some(default) => {
                    tracing::debug!(field = field.name, name = %name, "loading default");
                    default
                }
                None if directive.required => {
                    tracing::debug!(field = field.name, name = %name, "missing required value");
                    errors.push(FieldError::Missing {
                        field: field.name.to_string(),
                        name,
                    });
                    continue;
                }
                None => {
                    tracing::debug!(field = field.name, name = %name, "unset, keeping current value");
                    continue;
                }
            },
        };

        match coerce(field.kind, &raw) {
            Ok(value) => config.assign(index, value),
            Err(message) => {
                tracing::debug!(field = field.name, name = %name, error = %message, "failed to parse value");
                errors.push(FieldError::Parse {
                    field: field.name.to_string(),
                    name,
                    value: raw,
                    kind: field.kind,
                    message,
                });
            }
        }
    }

    errors.finish()
}
