//! Case evaluation
//!
//! A case is a declared value count followed by one line of space-separated
//! integers. Evaluating it yields the sum of squares of its positive values.
//!
//! ```text
//! 3
//! -5 0 4      -> 16
//! ```

use crate::error::InputError;
use tracing::trace;

/// Smallest accepted value
pub const VALUE_MIN: i64 = -100;
/// Largest accepted value
pub const VALUE_MAX: i64 = 100;
/// Upper bound for both the case count and the per-case value count
pub const MAX_COUNT: i64 = 100;

/// One case: the declared value count and the raw values line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    pub count: usize,
    pub line: String,
}

impl Case {
    pub fn new(count: usize, line: impl Into<String>) -> Self {
        Case {
            count,
            line: line.into(),
        }
    }

    pub fn evaluate(&self) -> Result<i64, InputError> {
        sum_of_squares(self.count, &self.line)
    }
}

/// Parse a count line (the session header or a per-case count).
///
/// Only integer parseability is checked here; use [`count_in_range`] to
/// decide whether the count is usable.
pub fn parse_count(line: &str) -> Result<i64, InputError> {
    if line.is_empty() {
        return Err(InputError::invalid_data("expected a count, got an empty line"));
    }
    parse_int(line)
}

/// True for counts in (0, 100]
pub fn count_in_range(n: i64) -> bool {
    (1..=MAX_COUNT).contains(&n)
}

/// Parse one token and check it against [`VALUE_MIN`]..=[`VALUE_MAX`].
pub fn parse_value(token: &str) -> Result<i64, InputError> {
    let v = parse_int(token)?;
    if !(VALUE_MIN..=VALUE_MAX).contains(&v) {
        return Err(InputError::Range(v));
    }
    Ok(v)
}

/// Sum the squares of the positive values among the first `count` tokens.
///
/// The line is split on single spaces, so doubled spaces produce empty
/// tokens that fail to parse. Tokens are visited from index `count - 1`
/// down to 0, and the first bad token in that order is the one reported.
/// Tokens past `count` are ignored.
pub fn sum_of_squares(count: usize, line: &str) -> Result<i64, InputError> {
    if line.is_empty() {
        return Err(InputError::invalid_data("expected values, got an empty line"));
    }

    let tokens: Vec<&str> = line.split(' ').collect();
    if tokens.len() < count {
        return Err(InputError::invalid_data(format!(
            "expected {} values, found {}",
            count,
            tokens.len()
        )));
    }

    let mut total = 0;
    for token in tokens[..count].iter().rev() {
        let v = parse_value(token)?;
        if v > 0 {
            total += v * v;
        }
    }

    trace!(count, total, "case evaluated");
    Ok(total)
}

fn parse_int(token: &str) -> Result<i64, InputError> {
    token.parse::<i64>().map_err(|source| InputError::Parse {
        token: token.to_string(),
        source,
    })
}
