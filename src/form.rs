//! Form-field flattening for the collection creation endpoint.
//!
//! The remote endpoint takes `application/x-www-form-urlencoded` data with the
//! file list spread over bracket-indexed keys (`files[0][name]`,
//! `files[0][size]`, ...) instead of a JSON array.

use serde_json::Value;

/// Flattens a request object into ordered form fields.
///
/// Every property of every entry in the `files` array becomes a
/// `files[<index>][<property>]` field; all other scalar fields pass through
/// under their own name; the `files` key itself is dropped. `null` values are
/// omitted, matching what the urlencoded wire format can carry.
pub(crate) fn to_indexed_form(request: &Value) -> Vec<(String, String)> {
    let mut fields = Vec::new();
    let Value::Object(map) = request else {
        return fields;
    };

    for (key, entry) in map {
        if key == "files" {
            continue;
        }
        if let Some(text) = scalar_text(entry) {
            fields.push((key.clone(), text));
        }
    }

    if let Some(Value::Array(files)) = map.get("files") {
        for (index, file) in files.iter().enumerate() {
            let Value::Object(properties) = file else {
                continue;
            };
            for (property, entry) in properties {
                if let Some(text) = scalar_text(entry) {
                    fields.push((format!("files[{index}][{property}]"), text));
                }
            }
        }
    }

    fields
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        Value::String(text) => Some(text.clone()),
        nested => Some(nested.to_string()),
    }
}
