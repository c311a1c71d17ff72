use serde::{Deserialize, Serialize};

use super::RecordId;
use super::lenient::null_as_default;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Appointment {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub patient_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub doctor_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub appointment_date: String,
    /// scheduled, completed, cancelled, ... (open set, rendered verbatim)
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
}

/// Body of `POST /api/admin/appointment/{id}/reassign`.
#[derive(Debug, Serialize)]
pub struct ReassignRequest<'a> {
    pub doctor_name: &'a str,
}
