//! Parsing of per-field directive strings
//!
//! A directive is a `;`-separated list of properties:
//!
//! | Property         | Effect                                                  |
//! |------------------|---------------------------------------------------------|
//! | `-`              | Ignore the field                                        |
//! | `required`       | Fail when no value is found and no default is given     |
//! | `name=<name>`    | Read from `<name>` instead of the derived variable name |
//! | `default=<text>` | Use `<text>` when the variable is unset or empty        |
//!
//! Unrecognized bare tokens are skipped. Unrecognized keys and properties with
//! more than one `=` are rejected.

use crate::error::DirectiveError;

/// Per-field loading behavior parsed from a directive string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directive {
    /// Environment variable name overriding the derived one.
    pub name: Option<String>,

    /// Raw default value, coerced like an environment value.
    pub default: Option<String>,

    /// Whether a missing value is reported as an error.
    pub required: bool,

    /// Whether the field is skipped entirely. Wins over `required`.
    pub ignored: bool,
}

impl Directive {
    /// Parse a directive string.
    ///
    /// An empty value for `name` or `default` (`name=`, `default=`) leaves the
    /// property unset.
    ///
    /// ```
    /// use parsenv::Directive;
    ///
    /// let d = Directive::parse("name=bAz;default=6.97").unwrap();
    /// assert_eq!(d.name.as_deref(), Some("bAz"));
    /// assert_eq!(d.default.as_deref(), Some("6.97"));
    /// assert!(!d.required && !d.ignored);
    /// ```
    pub fn parse(raw: &str) -> Result<Self, DirectiveError> {
        let mut directive = Self::default();
        if raw.is_empty() {
            return Ok(directive);
        }

        for property in raw.split(';') {
            let mut parts = property.split('=');
            match (parts.next(), parts.next(), parts.next()) {
                (Some("-"), None, _) => directive.ignored = true,
                (Some("required"), None, _) => directive.required = true,
                (Some(_), None, _) => {}
                (Some(key), Some(value), None) => {
                    let value = (!value.is_empty()).then(|| value.to_string());
                    match key {
                        "name" => directive.name = value,
                        "default" => directive.default = value,
                        _ => {
                            return Err(DirectiveError::UnknownProperty {
                                key: key.to_string(),
                            })
                        }
                    }
                }
                _ => {
                    return Err(DirectiveError::InvalidFormat {
                        property: property.to_string(),
                    })
                }
            }
        }

        Ok(directive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        assert_eq!(Directive::parse("").unwrap(), Directive::default());
    }

    #[test]
    fn test_parse_ignored() {
        let d = Directive::parse("-").unwrap();
        assert!(d.ignored);
        assert!(!d.required);
    }

    #[test]
    fn test_parse_required() {
        let d = Directive::parse("required").unwrap();
        assert!(d.required);
        assert!(!d.ignored);
        assert_eq!(d.name, None);
        assert_eq!(d.default, None);
    }

    #[test]
    fn test_parse_name_and_default() {
        let d = Directive::parse("name=bAz;default=6.97").unwrap();
        assert_eq!(
            d,
            Directive {
                name: Some("bAz".to_string()),
                default: Some("6.97".to_string()),
                required: false,
                ignored: false,
            }
        );
    }

    #[test]
    fn test_parse_name_with_required() {
        let d = Directive::parse("name=oOF;required").unwrap();
        assert_eq!(d.name.as_deref(), Some("oOF"));
        assert!(d.required);
    }

    #[test]
    fn test_parse_default_with_spaces() {
        let d = Directive::parse("default=hello world").unwrap();
        assert_eq!(d.default.as_deref(), Some("hello world"));
    }

    #[test]
    fn test_parse_ignored_and_required() {
        let d = Directive::parse("required;-").unwrap();
        assert!(d.ignored);
        assert!(d.required);
    }

    #[test]
    fn test_parse_unknown_bare_token_is_skipped() {
        let d = Directive::parse("optional;required;").unwrap();
        assert!(d.required);
        assert!(!d.ignored);
    }

    #[test]
    fn test_parse_empty_value_is_unset() {
        let d = Directive::parse("name=;default=").unwrap();
        assert_eq!(d, Directive::default());
    }

    #[test]
    fn test_parse_unknown_key() {
        let err = Directive::parse("name=FOO;bogus=1").unwrap_err();
        assert!(matches!(
            err,
            DirectiveError::UnknownProperty { ref key } if key == "bogus"
        ));
        assert_eq!(err.to_string(), "unknown property in directive: bogus");
    }

    #[test]
    fn test_parse_too_many_equals() {
        let err = Directive::parse("a=b=c").unwrap_err();
        assert!(matches!(
            err,
            DirectiveError::InvalidFormat { ref property } if property == "a=b=c"
        ));
        assert_eq!(err.to_string(), "invalid property format in directive: a=b=c");
    }

    #[test]
    fn test_parse_default_containing_equals_is_rejected() {
        assert!(matches!(
            Directive::parse("default=a=b"),
            Err(DirectiveError::InvalidFormat { .. })
        ));
    }
}
