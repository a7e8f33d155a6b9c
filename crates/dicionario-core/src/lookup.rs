use serde_json::Value;

use crate::diagnostic::Diagnostic;
use crate::extract::{Extraction, extract};
use crate::locate::{NotLocated, locate};

/// Result of resolving an upstream payload for a query word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(Extraction),
    /// No entry; `diagnostic` is set when the payload itself looked wrong
    NotFound { diagnostic: Option<Diagnostic> },
}

impl LookupOutcome {
    /// Plain not-found: the dictionary has no entry for the word
    pub fn no_entry() -> Self {
        LookupOutcome::NotFound { diagnostic: None }
    }
}

/// Locate the best item in `payload` and extract it.
///
/// The query word stands in for the headword when the item has no title.
pub fn resolve(payload: &Value, query: &str) -> LookupOutcome {
    match locate(payload) {
        Ok(located) => {
            let title = located.title.as_deref().unwrap_or(query);
            LookupOutcome::Found(extract(&located.fragment, title))
        }
        Err(NotLocated::NoEntry) => LookupOutcome::no_entry(),
        Err(NotLocated::Malformed(reason)) => LookupOutcome::NotFound {
            diagnostic: Some(Diagnostic::PayloadShape { reason }),
        },
    }
}
