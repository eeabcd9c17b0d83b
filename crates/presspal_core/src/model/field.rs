//! Shared validation plumbing for string-backed value objects.
//!
//! # Invariants
//! - A value object can only be obtained through a validating constructor
//!   (`new`, `TryFrom<String>` or serde deserialization).

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejected input for one value-object field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field name, e.g. `name` or `location`.
    pub field: &'static str,
    /// Raw rejected input.
    pub value: String,
    /// User-facing description of the accepted format.
    pub constraint: &'static str,
}

impl FieldError {
    pub fn new(field: &'static str, value: impl Into<String>, constraint: &'static str) -> Self {
        Self {
            field,
            value: value.into(),
            constraint,
        }
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.constraint)
    }
}

impl Error for FieldError {}

/// Accepts any value that is non-empty and does not start with whitespace.
pub(crate) fn is_non_blank(value: &str) -> bool {
    value.chars().next().is_some_and(|first| !first.is_whitespace())
}

/// Declares a validated newtype over `String`.
///
/// The generated type derives serde with `try_from = "String"`, so invalid
/// persisted values fail deserialization instead of entering the model.
macro_rules! string_value {
    (
        $(#[$meta:meta])*
        $name:ident {
            field: $field:literal,
            constraint: $constraint:expr,
            check: $check:expr $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub const MESSAGE_CONSTRAINTS: &'static str = $constraint;

            /// Validates `value` and wraps it.
            pub fn new(
                value: impl Into<String>,
            ) -> Result<Self, $crate::model::field::FieldError> {
                let value = value.into();
                if Self::is_valid(&value) {
                    Ok(Self(value))
                } else {
                    Err($crate::model::field::FieldError::new(
                        $field,
                        value,
                        Self::MESSAGE_CONSTRAINTS,
                    ))
                }
            }

            pub fn is_valid(value: &str) -> bool {
                let check: fn(&str) -> bool = $check;
                check(value)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::model::field::FieldError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

pub(crate) use string_value;
