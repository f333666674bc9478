//! Supported scalar types and string coercion

use std::fmt;

macro_rules! scalars {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        /// Type tag of a field that can be loaded from the environment.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ScalarKind {
            /// `String`, taken verbatim.
            Text,
            /// `bool`, see [`parse_bool`].
            Bool,
            $(
                #[doc = concat!("`", stringify!($ty), "`")]
                $variant,
            )*
        }

        /// A coerced value, tagged with its [`ScalarKind`].
        #[derive(Debug, Clone, PartialEq)]
        pub enum Value {
            /// A `String` field value.
            Text(String),
            /// A `bool` field value.
            Bool(bool),
            $(
                #[doc = concat!("A `", stringify!($ty), "` field value.")]
                $variant($ty),
            )*
        }

        impl Value {
            /// Type tag of this value.
            pub fn kind(&self) -> ScalarKind {
                match self {
                    Self::Text(_) => ScalarKind::Text,
                    Self::Bool(_) => ScalarKind::Bool,
                    $(Self::$variant(_) => ScalarKind::$variant,)*
                }
            }
        }

        impl fmt::Display for ScalarKind {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(match self {
                    Self::Text => "String",
                    Self::Bool => "bool",
                    $(Self::$variant => stringify!($ty),)*
                })
            }
        }

        /// Convert a raw string into a [`Value`] of the given kind.
        ///
        /// Numbers use the standard library's `FromStr` rules: no surrounding
        /// whitespace, and out-of-range integers are rejected. On failure the
        /// parser's message is returned.
        pub fn coerce(kind: ScalarKind, raw: &str) -> Result<Value, String> {
            match kind {
                ScalarKind::Text => Ok(Value::Text(raw.to_string())),
                ScalarKind::Bool => parse_bool(raw).map(Value::Bool),
                $(
                    ScalarKind::$variant => raw
                        .parse::<$ty>()
                        .map(Value::$variant)
                        .map_err(|e| e.to_string()),
                )*
            }
        }

        $(
            impl Scalar for $ty {
                const KIND: ScalarKind = ScalarKind::$variant;

                fn from_value(value: Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => Some(v),
                        _ => None,
                    }
                }
            }
        )*
    };
}

scalars! {
    I8 => i8,
    I16 => i16,
    I32 => i32,
    I64 => i64,
    I128 => i128,
    Isize => isize,
    U8 => u8,
    U16 => u16,
    U32 => u32,
    U64 => u64,
    U128 => u128,
    Usize => usize,
    F32 => f32,
    F64 => f64,
}

/// A field type the loader can write.
///
/// Implemented for `String`, `bool`, every primitive integer and both float
/// widths. The derive macro requires it on every non-ignored field, so other
/// types are rejected at compile time.
pub trait Scalar: Sized {
    /// Tag used to pick the coercion.
    const KIND: ScalarKind;

    /// Unwrap a value of the matching kind.
    fn from_value(value: Value) -> Option<Self>;
}

impl Scalar for String {
    const KIND: ScalarKind = ScalarKind::Text;

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl Scalar for bool {
    const KIND: ScalarKind = ScalarKind::Bool;

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Bool(v) => Some(v),
            _ => None,
        }
    }
}

/// Parse a boolean, accepting `true`/`false`, `1`/`0`, `yes`/`no` and
/// `on`/`off` in any letter case.
pub fn parse_bool(raw: &str) -> Result<bool, String> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(format!("invalid boolean value: {raw}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_text_verbatim() {
        assert_eq!(
            coerce(ScalarKind::Text, "  hello world "),
            Ok(Value::Text("  hello world ".to_string()))
        );
        assert_eq!(coerce(ScalarKind::Text, ""), Ok(Value::Text(String::new())));
    }

    #[test]
    fn test_coerce_integer() {
        assert_eq!(coerce(ScalarKind::I64, "15"), Ok(Value::I64(15)));
        assert_eq!(coerce(ScalarKind::I32, "-7"), Ok(Value::I32(-7)));
        assert_eq!(coerce(ScalarKind::Usize, "42"), Ok(Value::Usize(42)));
    }

    #[test]
    fn test_coerce_integer_rejects_float() {
        assert!(coerce(ScalarKind::I64, "13.37").is_err());
    }

    #[test]
    fn test_coerce_integer_rejects_whitespace_and_empty() {
        assert!(coerce(ScalarKind::I64, " 15").is_err());
        assert!(coerce(ScalarKind::I64, "15 ").is_err());
        assert!(coerce(ScalarKind::I64, "").is_err());
        assert!(coerce(ScalarKind::I64, "fifteen").is_err());
    }

    #[test]
    fn test_coerce_integer_overflow() {
        assert!(coerce(ScalarKind::U8, "256").is_err());
        assert!(coerce(ScalarKind::U16, "-1").is_err());
        assert_eq!(coerce(ScalarKind::U8, "255"), Ok(Value::U8(255)));
    }

    #[test]
    fn test_coerce_float() {
        assert_eq!(coerce(ScalarKind::F64, "6.97"), Ok(Value::F64(6.97)));
        assert_eq!(coerce(ScalarKind::F64, "1e3"), Ok(Value::F64(1000.0)));
        assert_eq!(coerce(ScalarKind::F32, "2"), Ok(Value::F32(2.0)));
        assert!(coerce(ScalarKind::F64, "6.97.1").is_err());
        assert!(coerce(ScalarKind::F64, "").is_err());
    }

    #[test]
    fn test_coerce_bool() {
        for raw in ["true", "TRUE", "1", "yes", "YES", "on"] {
            assert_eq!(coerce(ScalarKind::Bool, raw), Ok(Value::Bool(true)), "{raw}");
        }
        for raw in ["false", "False", "0", "no", "off"] {
            assert_eq!(coerce(ScalarKind::Bool, raw), Ok(Value::Bool(false)), "{raw}");
        }
        assert_eq!(
            coerce(ScalarKind::Bool, "maybe"),
            Err("invalid boolean value: maybe".to_string())
        );
    }

    #[test]
    fn test_value_kind_matches_coercion() {
        let v = coerce(ScalarKind::U32, "9").unwrap();
        assert_eq!(v.kind(), ScalarKind::U32);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ScalarKind::Text.to_string(), "String");
        assert_eq!(ScalarKind::I64.to_string(), "i64");
        assert_eq!(ScalarKind::F64.to_string(), "f64");
        assert_eq!(<u16 as Scalar>::KIND.to_string(), "u16");
    }

    #[test]
    fn test_from_value() {
        assert_eq!(i64::from_value(Value::I64(3)), Some(3));
        assert_eq!(i64::from_value(Value::I32(3)), None);
        assert_eq!(String::from_value(Value::Text("x".into())), Some("x".to_string()));
        assert_eq!(bool::from_value(Value::Bool(true)), Some(true));
    }
}
