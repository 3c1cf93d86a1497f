//! CSS source rewriting
//!
//! Replaces every easing gradient call in a stylesheet by an equivalent
//! `linear-gradient(...)` with explicit color stops:
//!
//! ```text
//! ease-in-sine-gradient(to top, red, blue)
//!   ──► linear-gradient(to top, hsl(0, 100%, 50%) 0%, ..., blue 100%)
//! ```
//!
//! Everything outside gradient calls is copied through unchanged.

use regex::Regex;
use std::sync::OnceLock;

use crate::color::is_same_color;
use crate::curve::{EasingCurve, SUPPORTED_GRADIENTS};
use crate::stops::{color_stops, ColorStop, GradientOptions};
use crate::{GradientError, Result};

/// Matches the name and opening parenthesis of a gradient call
fn call_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        let alternation = SUPPORTED_GRADIENTS
            .iter()
            .map(|name| regex::escape(name))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(r"({})\s*\(", alternation))
            .expect("escaped gradient names form a valid pattern")
    })
}

/// A gradient call found in the source
struct GradientCall<'a> {
    curve: EasingCurve,
    /// Top-level arguments, trimmed
    arguments: Vec<&'a str>,
    /// Byte offset just past the closing parenthesis
    end: usize,
}

/// Rewrite all easing gradient calls in `source`.
///
/// # Errors
///
/// - `GradientError::InvalidArguments` for calls without two or three
///   arguments or without a closing parenthesis.
/// - Any color or precision error raised while computing the stops.
pub fn rewrite_css(source: &str, options: &GradientOptions) -> Result<String> {
    let mut output = String::with_capacity(source.len());
    let mut cursor = 0;

    while let Some(captures) = call_pattern().captures_at(source, cursor) {
        let (Some(whole), Some(name)) = (captures.get(0), captures.get(1)) else {
            break;
        };

        // Part of a longer identifier such as `my-scrim-gradient(`
        if is_identifier_tail(source, whole.start()) {
            output.push_str(&source[cursor..whole.end()]);
            cursor = whole.end();
            continue;
        }

        let call = parse_call(source, name.as_str(), whole.end())?;
        output.push_str(&source[cursor..whole.start()]);
        output.push_str(&expand_call(&call, options)?);
        cursor = call.end;
    }

    output.push_str(&source[cursor..]);
    Ok(output)
}

fn is_identifier_tail(source: &str, start: usize) -> bool {
    source[..start]
        .chars()
        .next_back()
        .is_some_and(|c| c.is_alphanumeric() || c == '-' || c == '_')
}

/// Split the arguments of the call whose body starts at `body_start`.
fn parse_call<'a>(source: &'a str, name: &str, body_start: usize) -> Result<GradientCall<'a>> {
    let curve: EasingCurve = name.parse()?;
    let mut arguments = Vec::new();
    let mut depth = 0usize;
    let mut argument_start = body_start;

    for (offset, c) in source[body_start..].char_indices() {
        let index = body_start + offset;
        match c {
            '(' => depth += 1,
            ')' if depth > 0 => depth -= 1,
            ')' => {
                arguments.push(source[argument_start..index].trim());
                return Ok(GradientCall {
                    curve,
                    arguments,
                    end: index + 1,
                });
            }
            ',' if depth == 0 => {
                arguments.push(source[argument_start..index].trim());
                argument_start = index + 1;
            }
            _ => {}
        }
    }

    Err(GradientError::InvalidArguments(format!(
        "unterminated {} call",
        name
    )))
}

/// Produce the `linear-gradient(...)` replacement for one call.
fn expand_call(call: &GradientCall<'_>, options: &GradientOptions) -> Result<String> {
    let (direction, start, end) = match call.arguments.as_slice() {
        [start, end] => (None, *start, *end),
        [direction, start, end] => (Some(*direction), *start, *end),
        other => {
            return Err(GradientError::InvalidArguments(format!(
                "{} expects 2 or 3 arguments, got {}",
                call.curve,
                other.len()
            )))
        }
    };

    let body = if is_same_color(start, end)? {
        format!("{}, {}", start, end)
    } else {
        color_stops([start, end], call.curve, options)?
            .iter()
            .map(ColorStop::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };

    tracing::debug!(curve = %call.curve, direction, "expanded gradient");

    Ok(match direction {
        Some(direction) => format!("linear-gradient({}, {})", direction, body),
        None => format!("linear-gradient({})", body),
    })
}
