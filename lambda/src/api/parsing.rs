//! Path-parameter extraction for API Gateway proxy events.

use percent_encoding::percent_decode_str;
use serde_json::Value;
use std::borrow::Cow;
use std::str::Utf8Error;
use thiserror::Error;

use crate::errors::MovieError;

pub const YEAR_PARAM: &str = "year";
pub const MOVIE_NAME_PARAM: &str = "movieName";

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed percent-escape at byte {0}")]
    MalformedEscape(usize),

    #[error("decoded value is not UTF-8: {0}")]
    InvalidUtf8(#[from] Utf8Error),
}

/// Percent-decodes one URI component. `+` is not treated as a space.
///
/// # Errors
///
/// Returns an error if a `%` is not followed by two hex digits, or if the
/// decoded bytes are not valid UTF-8.
pub fn decode_path_component(raw: &str) -> Result<String, DecodeError> {
    let bytes = raw.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b != b'%' {
            continue;
        }
        let escape = bytes.get(i + 1..i + 3);
        if !escape.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
            return Err(DecodeError::MalformedEscape(i));
        }
    }

    Ok(percent_decode_str(raw).decode_utf8().map(Cow::into_owned)?)
}

/// Returns the decoded value of a required path parameter.
///
/// # Errors
///
/// `MissingParameter` when the event has no non-empty string under
/// `pathParameters[key]`; `InvalidParameter` when it does not decode.
pub fn path_param(payload: &Value, key: &str) -> Result<String, MovieError> {
    let Some(raw) = v_str(payload, &["pathParameters", key]).filter(|s| !s.is_empty()) else {
        return Err(MovieError::MissingParameter(key.to_string()));
    };

    decode_path_component(raw).map_err(|e| {
        MovieError::InvalidParameter(format!("{key}: {e}"))
    })
}
