//! Step-count input handling: lenient integer coercion and bounds
//! validation for the four direction values of a submission.

use serde::Serialize;

use crate::error::CoreError;

/// Inclusive upper bound for horizontal (`left`/`right`) step counts.
pub const MAX_HORIZONTAL_STEPS: i32 = 50;

/// Inclusive upper bound for vertical (`up`/`down`) step counts.
pub const MAX_VERTICAL_STEPS: i32 = 35;

/// A four-direction step delta as submitted by a visitor.
///
/// Produced by [`Steps::coerce`]; values are only known to be in range
/// once [`Steps::validate`] has passed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Steps {
    pub left: i32,
    pub up: i32,
    pub right: i32,
    pub down: i32,
}

impl Steps {
    /// Build a `Steps` from raw query-string values.
    ///
    /// Missing or non-numeric values coerce to 0 rather than erroring.
    pub fn coerce(
        left: Option<&str>,
        up: Option<&str>,
        right: Option<&str>,
        down: Option<&str>,
    ) -> Self {
        Self {
            left: parse_lenient_int(left),
            up: parse_lenient_int(up),
            right: parse_lenient_int(right),
            down: parse_lenient_int(down),
        }
    }

    /// Check every direction against its declared bound.
    ///
    /// Out-of-range values are rejected, never clamped.
    pub fn validate(&self) -> Result<(), CoreError> {
        check_range("left", self.left, MAX_HORIZONTAL_STEPS)?;
        check_range("up", self.up, MAX_VERTICAL_STEPS)?;
        check_range("right", self.right, MAX_HORIZONTAL_STEPS)?;
        check_range("down", self.down, MAX_VERTICAL_STEPS)?;
        Ok(())
    }
}

fn check_range(field: &'static str, value: i32, max: i32) -> Result<(), CoreError> {
    if value < 0 || value > max {
        return Err(CoreError::Validation(format!(
            "{field} must be between 0 and {max}, got {value}"
        )));
    }
    Ok(())
}

/// Parse a raw query value as a base-10 integer, defaulting to 0.
///
/// Lenient `parseInt`-style semantics: leading whitespace is skipped, an
/// optional sign and leading digits are consumed, and anything after the
/// digits is ignored. A value with no leading digits coerces to 0.
/// Digit runs that overflow saturate; the bounds check rejects them
/// regardless.
pub fn parse_lenient_int(raw: Option<&str>) -> i32 {
    let Some(raw) = raw else { return 0 };
    let s = raw.trim_start();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return 0;
    }
    match digits[..end].parse::<i64>() {
        Ok(v) => {
            let v = if negative { -v } else { v };
            v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
        }
        Err(_) => {
            if negative {
                i32::MIN
            } else {
                i32::MAX
            }
        }
    }
}
