//! Generic helpers over lists of identified entities.

#[cfg(test)]
#[path = "data_test.rs"]
mod data_test;

use std::cmp::Ordering;

use serde_json::Value;

pub trait HasId {
    fn id(&self) -> &str;
}

/// Entities with an id as stored in the database (numeric, serialised as a string).
pub trait HasStoredId {
    fn stored_id(&self) -> &str;
}

/// Pick `items` in the order given by `ids`; ids with no matching item are skipped.
#[must_use]
pub fn get_from_ids<'a, T: HasId>(items: &'a [T], ids: &[&str]) -> Vec<&'a T> {
    ids.iter().filter_map(|id| items.iter().find(|item| item.id() == *id)).collect()
}

fn compare_stored_ids(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// Sort in place by numeric stored id. Non-numeric ids go last.
pub fn sort_stored_id_objects<T: HasStoredId>(items: &mut [T]) {
    items.sort_by(|a, b| compare_stored_ids(a.stored_id(), b.stored_id()));
}

/// Copy of `value` without a top-level `__typename` key.
#[must_use]
pub fn without_typename(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut stripped = map.clone();
            stripped.remove("__typename");
            Value::Object(stripped)
        }
        other => other.clone(),
    }
}
