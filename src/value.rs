// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;
use std::fmt::Display;

/// A single, already rendered operand of a variadic write call.
///
/// Mirrors the way generic print facilities treat mixed arguments:
/// every operand is stringified with its natural textual representation,
/// and the writer later inserts a separating space between two adjacent
/// operands only when *both* of them are not string-like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value {
    text: String,
    string_like: bool,
}

impl Value {
    /// Renders any [`Display`] type as a non-string-like operand.
    ///
    /// This is the escape hatch for types
    /// that have no direct [`From`] conversion.
    pub fn display<T: Display>(value: &T) -> Self {
        Self {
            text: value.to_string(),
            string_like: false,
        }
    }

    #[must_use]
    pub const fn is_string_like(&self) -> bool {
        self.string_like
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self {
            text: value.to_owned(),
            string_like: true,
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self {
            text: value,
            string_like: true,
        }
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self {
            text: value.clone(),
            string_like: true,
        }
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(value: Cow<'_, str>) -> Self {
        Self {
            text: value.into_owned(),
            string_like: true,
        }
    }
}

macro_rules! impl_from_display {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Self {
                        text: value.to_string(),
                        string_like: false,
                    }
                }
            }
        )+
    };
}

impl_from_display!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char
);

/// Builds the operand slice for the variadic write operations of
/// [`TreeLogger`](crate::logger::TreeLogger).
#[macro_export]
macro_rules! values {
    () => {
        (&[] as &[$crate::value::Value])
    };
    ($($operand:expr),+ $(,)?) => {
        (&[$($crate::value::Value::from($operand)),+] as &[$crate::value::Value])
    };
}

/// Joins operands the way a generic multi-argument print operation would:
/// a single space between two adjacent operands
/// when both are not string-like, nothing otherwise.
#[must_use]
pub fn joined(values: &[Value]) -> String {
    let mut out = String::new();
    let mut previous: Option<&Value> = None;
    for value in values {
        if let Some(previous) = previous {
            if !previous.is_string_like() && !value.is_string_like() {
                out.push(' ');
            }
        }
        out.push_str(value.text());
        previous = Some(value);
    }
    out
}

/// Plain concatenation, used by the append operation;
/// no separators are ever inserted.
#[must_use]
pub fn concatenated(values: &[Value]) -> String {
    let mut out = String::new();
    for value in values {
        out.push_str(value.text());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn joined_spaces_only_between_non_strings() {
        assert_eq!(joined(values![1, 2, 3]), "1 2 3");
        assert_eq!(joined(values!["a", 1]), "a1");
        assert_eq!(joined(values![1, "a", 2]), "1a2");
        assert_eq!(joined(values!["a", "b"]), "ab");
    }

    #[test]
    fn joined_of_nothing_is_empty() {
        assert_eq!(joined(values![]), "");
    }

    #[test]
    fn concatenated_never_separates() {
        assert_eq!(concatenated(values![1, 2]), "12");
        assert_eq!(concatenated(values!["a", 1, "b"]), "a1b");
    }

    #[test]
    fn display_escape_hatch_is_not_string_like() {
        let value = Value::display(&std::net::Ipv4Addr::LOCALHOST);
        assert_eq!(value.text(), "127.0.0.1");
        assert!(!value.is_string_like());
    }
}
