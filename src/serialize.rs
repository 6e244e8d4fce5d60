//! Serde adapters for the relay wire conventions.
//!
//! Integer-valued fields travel as base-10 decimal strings (handled by
//! `serde_with::DisplayFromStr` at the field level; `U256` displays and
//! parses in decimal), list-valued query parameters travel as a single
//! comma-joined value.

use std::fmt::Display;

use serde::Serializer;

/// Comma-array rendering for list query parameters (v2 endpoints).
///
/// Fields using this adapter must also carry
/// `skip_serializing_if = "Option::is_none"`.
pub(crate) mod comma {
    use super::{Display, Serializer, join};

    pub(crate) fn serialize<T: Display, S: Serializer>(
        values: &Option<Vec<T>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match values {
            Some(values) => serializer.serialize_str(&join(values)),
            None => serializer.serialize_none(),
        }
    }
}

/// Plain string-join rendering for list query parameters (v1 endpoints).
pub(crate) mod joined {
    use super::Serializer;

    pub(crate) fn serialize<S: Serializer>(
        values: &Option<Vec<String>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match values {
            Some(values) => serializer.serialize_str(&values.join(",")),
            None => serializer.serialize_none(),
        }
    }
}

pub(crate) fn join<T: Display>(values: &[T]) -> String {
    let mut out = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&value.to_string());
    }
    out
}
