//! The counter record and its wire shape.
//!
//! A counter goes over the wire as a single-entry object keyed by its own name:
//! `{"<name>": <value>}`. Clients read the value back with `body[name]`, so the key is the
//! name itself rather than a fixed field.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A named monotonic tally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    pub name: String,
    pub value: u64,
}

impl Counter {
    pub fn new(name: impl Into<String>, value: u64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl Serialize for Counter {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.value)?;
        map.end()
    }
}
