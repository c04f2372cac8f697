//! Message template parsing and substitution.
//!
//! Templates reference bindings with `{name}`. Literal braces are written
//! doubled (`{{` and `}}`). Anything else involving braces is malformed.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// What to emit for a referenced placeholder that has no bound value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnresolvedPlaceholder {
    /// Emit the raw `{name}` token as written in the template.
    #[default]
    Keep,
    /// Emit nothing.
    Empty,
}

impl UnresolvedPlaceholder {
    /// Parse a policy name.
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "keep" => Ok(Self::Keep),
            "empty" => Ok(Self::Empty),
            _ => Err(Error::invalid_arg(format!(
                "Unknown placeholder policy '{s}'. Use: keep, empty"
            ))),
        }
    }
}

/// A parsed piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Literal text.
    Text(&'a str),
    /// A `{name}` reference; `raw` is the token exactly as written.
    Placeholder {
        /// Trimmed binding name.
        name: &'a str,
        /// Original token including braces.
        raw: &'a str,
    },
}

/// Split a template into literal and placeholder segments.
pub fn parse(template: &str) -> Result<Vec<Segment<'_>>> {
    let bytes = template.as_bytes();
    let mut segments = Vec::new();
    let mut text_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'{' if bytes.get(i + 1) == Some(&b'{') => {
                push_text(&mut segments, &template[text_start..i]);
                segments.push(Segment::Text("{"));
                i += 2;
                text_start = i;
            },
            b'}' if bytes.get(i + 1) == Some(&b'}') => {
                push_text(&mut segments, &template[text_start..i]);
                segments.push(Segment::Text("}"));
                i += 2;
                text_start = i;
            },
            b'{' => {
                push_text(&mut segments, &template[text_start..i]);
                let close = template[i + 1..]
                    .find(['{', '}'])
                    .map(|offset| i + 1 + offset)
                    .ok_or_else(|| Error::template(i, "unterminated placeholder"))?;
                if bytes[close] == b'{' {
                    return Err(Error::template(close, "nested placeholder"));
                }
                let name = template[i + 1..close].trim();
                if name.is_empty() {
                    return Err(Error::template(i, "empty placeholder"));
                }
                segments.push(Segment::Placeholder { name, raw: &template[i..=close] });
                i = close + 1;
                text_start = i;
            },
            b'}' => return Err(Error::template(i, "unmatched closing brace")),
            _ => i += 1,
        }
    }

    push_text(&mut segments, &template[text_start..]);
    Ok(segments)
}

fn push_text<'a>(segments: &mut Vec<Segment<'a>>, text: &'a str) {
    if !text.is_empty() {
        segments.push(Segment::Text(text));
    }
}

/// Substitute bindings into a template.
pub fn substitute(
    template: &str,
    bindings: &HashMap<String, String>,
    policy: UnresolvedPlaceholder,
) -> Result<String> {
    let segments = parse(template)?;
    let mut out = String::with_capacity(template.len());

    for segment in segments {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Placeholder { name, raw } => match bindings.get(name) {
                Some(value) => out.push_str(value),
                None if policy == UnresolvedPlaceholder::Keep => out.push_str(raw),
                None => {},
            },
        }
    }

    Ok(out)
}
