//! Environment variable expansion for path-like configuration values.
//!
//! `${VAR}` expands to the value of `VAR` and fails when it is unset.
//! `${VAR:-default}` falls back to `default`. Text outside `${...}`,
//! including bare `$VAR`, is copied verbatim, and expanded values are never
//! expanded again.

use std::borrow::Cow;
use std::convert::Infallible;

use crate::ConfigError;

/// Expand `${VAR}` references in `value`.
///
/// `field` names the configuration key and is only used in error messages.
/// An unterminated `${` is kept as literal text.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let mut expanded = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(start) = rest.find("${") {
        expanded.push_str(&rest[..start]);
        rest = &rest[start..];
        let Some(len) = reference_len(rest) else {
            break;
        };
        expanded.push_str(&expand_reference(&rest[..len], field)?);
        rest = &rest[len..];
    }
    expanded.push_str(rest);

    Ok(expanded)
}

/// Expand an optional value, keeping `None` as is.
pub(crate) fn expand_optional(
    value: Option<String>,
    field: &str,
) -> Result<Option<String>, ConfigError> {
    value.map(|v| expand_env(&v, field)).transpose()
}

/// Expand a single `${NAME}` or `${NAME:-default}` reference.
fn expand_reference(reference: &str, field: &str) -> Result<String, ConfigError> {
    let body = &reference[2..reference.len() - 1];
    let (name, has_default) = match body.split_once(":-") {
        Some((name, _)) => (name, true),
        None => (body, false),
    };

    if !has_default && std::env::var(name).is_err() {
        return Err(ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{name}}} not set"),
        });
    }

    Ok(
        shellexpand::env_with_context(reference, |var| -> Result<_, Infallible> {
            Ok(std::env::var(var).ok())
        })
        .map_or_else(|_| reference.to_owned(), Cow::into_owned),
    )
}

/// Byte length of the `${...}` reference at the start of `value`.
///
/// Braces nest, so `${A:-${B}}` is one reference. `None` if unterminated.
fn reference_len(value: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, b) in value.bytes().enumerate() {
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }
    None
}
