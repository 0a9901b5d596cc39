use serde_json::Value;

/// Render a JSON value for a terminal table cell, cut to `max_chars` characters.
pub fn cell_text(value: &Value, max_chars: usize) -> String {
    let full = match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(arr) => arr
            .iter()
            .map(|v| cell_text(v, usize::MAX))
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    };
    if full.chars().count() <= max_chars {
        return full;
    }
    let mut cut: String = full.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// `lat, lon` from a `{"Coordinates": [lat, lon]}` location, or empty.
pub fn coordinates_text(location: &Value) -> String {
    location
        .get("Coordinates")
        .and_then(|c| c.as_array())
        .filter(|c| !c.is_empty())
        .map(|c| cell_text(&Value::Array(c.clone()), usize::MAX))
        .unwrap_or_default()
}
