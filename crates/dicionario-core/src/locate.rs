use serde_json::Value;

/// Markup and title of the item chosen from an upstream search payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedEntry {
    pub fragment: String,
    pub title: Option<String>,
}

/// Why a payload yielded no entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotLocated {
    /// Well-formed payload with no usable item: the word is not in the dictionary
    NoEntry,
    /// The payload lacks the fields an entry is read from
    Malformed(&'static str),
}

/// Pick the entry to extract from a search payload.
///
/// The upstream service ranks its best match first, so the first item is
/// always taken. An empty item list, or a first item whose markup is blank,
/// is [`NotLocated::NoEntry`]; any other missing field is reported as
/// [`NotLocated::Malformed`].
pub fn locate(payload: &Value) -> Result<LocatedEntry, NotLocated> {
    let items = payload
        .as_object()
        .ok_or(NotLocated::Malformed("payload is not an object"))?
        .get("items")
        .ok_or(NotLocated::Malformed("payload has no items field"))?
        .as_array()
        .ok_or(NotLocated::Malformed("items is not a list"))?;

    let Some(first) = items.first() else {
        return Err(NotLocated::NoEntry);
    };

    let fragment = first
        .get("htmlContent")
        .and_then(Value::as_str)
        .ok_or(NotLocated::Malformed("first item has no htmlContent string"))?;

    if fragment.trim().is_empty() {
        return Err(NotLocated::NoEntry);
    }

    let title = first
        .get("title")
        .and_then(Value::as_str)
        .map(str::to_string);

    Ok(LocatedEntry {
        fragment: fragment.to_string(),
        title,
    })
}
