//! Attribute parsing for `#[env("...")]` annotations.
//!
//! The directive string is checked here with the same rules the runtime parser
//! applies, so derived implementations never panic on a malformed directive.

use syn::{Field, LitStr};

/// Parsed `#[env("...")]` attribute of a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// The directive literal, if the field has one.
    pub directive: Option<LitStr>,

    /// Whether the directive contains `-`.
    ///
    /// Ignored fields are left out of the field table and may have any type.
    pub ignored: bool,
}

impl FieldAttrs {
    /// Extract and validate the `#[env("...")]` attribute of a struct field.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("env") {
                continue;
            }

            if attrs.directive.is_some() {
                return Err(syn::Error::new_spanned(
                    attr,
                    "duplicate env attribute; combine properties with `;`",
                ));
            }

            let lit: LitStr = attr.parse_args()?;
            attrs.ignored =
                validate(&lit.value()).map_err(|msg| syn::Error::new(lit.span(), msg))?;
            attrs.directive = Some(lit);
        }

        Ok(attrs)
    }

    /// Directive string to embed in the field table.
    pub fn directive_value(&self) -> String {
        self.directive.as_ref().map(LitStr::value).unwrap_or_default()
    }
}

/// Check a directive string, returning whether it marks the field ignored.
fn validate(raw: &str) -> Result<bool, String> {
    let mut ignored = false;
    if raw.is_empty() {
        return Ok(ignored);
    }

    for property in raw.split(';') {
        let parts: Vec<&str> = property.split('=').collect();
        match parts.as_slice() {
            ["-"] => ignored = true,
            [_] => {}
            ["name" | "default", _] => {}
            [key, _] => return Err(format!("unknown property in directive: {key}")),
            _ => return Err(format!("invalid property format in directive: {property}")),
        }
    }

    Ok(ignored)
}
