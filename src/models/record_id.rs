use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Backend record identifier.
///
/// The clinical API is not consistent about identifier types: users carry
/// string ids while appointments and alerts come back as integers. Both are
/// carried as text, which is all the console ever does with them (interpolate
/// into a path or a form action).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        RecordId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId(s.to_string())
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        RecordId(s)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Int(i64),
    Float(f64),
    Null,
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = match RawId::deserialize(deserializer)? {
            RawId::Text(s) => s,
            RawId::Int(n) => n.to_string(),
            RawId::Float(n) => n.to_string(),
            RawId::Null => String::new(),
        };
        Ok(RecordId(id))
    }
}
