use serde_json::{Map, Value};

/// Untyped upstream record as delivered by any of the data channels.
pub type RawRecord = Map<String, Value>;

/// Candidate location of a value inside a raw record. Multi-segment paths
/// walk into nested objects (`["file", "url"]`).
pub(crate) type KeyPath = &'static [&'static str];

/// Returns the value at `path`, treating `null` and `""` as absent.
pub(crate) fn lookup<'a>(raw: &'a RawRecord, path: KeyPath) -> Option<&'a Value> {
    let (first, rest) = path.split_first()?;
    let mut value = raw.get(*first)?;
    for segment in rest {
        value = value.as_object()?.get(*segment)?;
    }
    if is_absent(value) {
        None
    } else {
        Some(value)
    }
}

/// First candidate that resolves to a present value.
pub(crate) fn first_present<'a>(raw: &'a RawRecord, candidates: &[KeyPath]) -> Option<&'a Value> {
    candidates.iter().find_map(|path| lookup(raw, path))
}

/// First candidate that resolves to a string or number, rendered as text.
pub(crate) fn first_text(raw: &RawRecord, candidates: &[KeyPath]) -> Option<String> {
    candidates
        .iter()
        .find_map(|path| lookup(raw, path).and_then(scalar_text))
}

/// First candidate holding a category list. Entries may be plain strings or
/// objects carrying a `name`; anything else is skipped. A bare string counts
/// as a one-element list.
pub(crate) fn first_labels(raw: &RawRecord, candidates: &[KeyPath]) -> Vec<String> {
    let Some(value) = first_present(raw, candidates) else {
        return Vec::new();
    };
    match value {
        Value::Array(entries) => entries.iter().filter_map(label_of).collect(),
        other => label_of(other).into_iter().collect(),
    }
}

fn label_of(value: &Value) -> Option<String> {
    match value {
        Value::Object(fields) => fields.get("name").and_then(scalar_text),
        other => scalar_text(other),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn is_absent(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}
