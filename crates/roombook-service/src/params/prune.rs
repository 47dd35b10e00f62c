use serde_json::{Map, Value};

/// ## Summary
/// Removes null leaves from a JSON value.
///
/// Object keys holding `null` are dropped, `null` array elements are
/// filtered out, and nested objects and arrays are pruned recursively.
#[must_use]
pub fn prune_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(prune_map(map)),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .filter(|item| !item.is_null())
                .map(prune_nulls)
                .collect(),
        ),
        other => other,
    }
}

/// Object form of [`prune_nulls`].
#[must_use]
pub fn prune_map(map: Map<String, Value>) -> Map<String, Value> {
    map.into_iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| (key, prune_nulls(value)))
        .collect()
}
