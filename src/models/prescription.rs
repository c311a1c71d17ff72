use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;

use super::RecordId;
use super::lenient::null_as_default;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Prescription {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub patient_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub priority: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
}

impl Prescription {
    /// Creation date as `MM/DD/YYYY`, or `Invalid Date` when the backend
    /// timestamp cannot be read.
    pub fn created_date(&self) -> String {
        format_locale_date(&self.created_at)
    }
}

/// Payload of `GET /api/admin/prescriptions/stats`: the four pharmacy
/// counters plus the list rendered into the prescriptions table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PrescriptionStats {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_count: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pending_count: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ready_count: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub delivered_count: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub prescriptions: Vec<Prescription>,
}

// The backend emits RFC 3339, naive ISO (Python isoformat) or RFC 2822
// depending on the serializer path.
fn format_locale_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| DateTime::parse_from_rfc2822(raw).map(|dt| dt.date_naive()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match date {
        Ok(d) => d.format("%-m/%-d/%Y").to_string(),
        Err(_) => "Invalid Date".to_string(),
    }
}
