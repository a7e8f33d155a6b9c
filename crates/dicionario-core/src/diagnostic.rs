use std::fmt;

use serde::Serialize;

/// Trimmed fragment length from which an empty extraction counts as shape drift
pub const SHAPE_DRIFT_MIN_LEN: usize = 200;

/// Operator-facing signal raised while extracting an entry.
///
/// None of these are errors: the entry they accompany is still valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The fragment has no primary entry block
    MissingPrimaryBlock,
    /// A non-trivial fragment produced no definitions and no expressions
    ShapeDrift { fragment_len: usize },
    /// The search payload lacks the fields an entry is read from
    PayloadShape { reason: &'static str },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingPrimaryBlock => write!(f, "primary entry block not found"),
            Diagnostic::ShapeDrift { fragment_len } => write!(
                f,
                "no definitions or expressions extracted from {fragment_len} characters of markup"
            ),
            Diagnostic::PayloadShape { reason } => write!(f, "unexpected payload shape: {reason}"),
        }
    }
}
