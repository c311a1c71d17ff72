use serde::{Deserialize, Serialize};

use super::RecordId;
use super::lenient::null_as_default;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EmergencyAlert {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub patient_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub condition: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub severity: String,
    /// pending, forwarded or resolved
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hospital_name: Option<String>,
}

impl EmergencyAlert {
    pub fn is_pending(&self) -> bool {
        self.status == "pending"
    }

    pub fn is_resolved(&self) -> bool {
        self.status == "resolved"
    }

    /// Text shown in place of the Forward button once an alert has left
    /// the pending state.
    pub fn forward_note(&self) -> &str {
        match self.hospital_name.as_deref() {
            Some(h) if !h.is_empty() => h,
            _ => "Resolved",
        }
    }
}

/// Body of `POST /api/admin/emergency-alert/{id}/forward`.
#[derive(Debug, Serialize)]
pub struct ForwardRequest<'a> {
    pub hospital_name: &'a str,
}
