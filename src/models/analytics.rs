use serde::Deserialize;

use super::RecordId;
use super::lenient::null_as_default;

// ---------- Console-wide snapshot ----------

/// `analytics` object of `GET /api/admin/analytics`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnalyticsSnapshot {
    #[serde(default, deserialize_with = "null_as_default")]
    pub users: UserCounts,
    #[serde(default, deserialize_with = "null_as_default")]
    pub appointments: AppointmentCounts,
    #[serde(default, deserialize_with = "null_as_default")]
    pub prescriptions: PrescriptionCounts,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UserCounts {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub patients: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub doctors: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppointmentCounts {
    #[serde(default, deserialize_with = "null_as_default")]
    pub today: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PrescriptionCounts {
    #[serde(default, deserialize_with = "null_as_default")]
    pub today: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pending: i64,
}

// ---------- Per-patient lookup ----------

/// `analytics` object of `GET /api/admin/patient-analytics/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PatientAnalytics {
    #[serde(default, deserialize_with = "null_as_default")]
    pub patient_id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub appointments: PatientAppointmentCounts,
    #[serde(default, deserialize_with = "null_as_default")]
    pub prescriptions: PatientPrescriptionCounts,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PatientAppointmentCounts {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub scheduled: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PatientPrescriptionCounts {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub delivered: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pending: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_counters_read_as_zero() {
        let a: AnalyticsSnapshot = serde_json::from_str(
            r#"{"users": {"total": null, "patients": 4, "doctors": 2},
                "appointments": null,
                "prescriptions": {"today": 1}}"#,
        )
        .unwrap();
        assert_eq!(a.users.total, 0);
        assert_eq!(a.users.patients, 4);
        assert_eq!(a.appointments, AppointmentCounts::default());
        assert_eq!(a.prescriptions.pending, 0);
    }

    #[test]
    fn patient_lookup_tolerates_nulls() {
        let p: PatientAnalytics = serde_json::from_str(
            r#"{"patient_id": null, "appointments": {"total": 3, "completed": null}}"#,
        )
        .unwrap();
        assert_eq!(p.patient_id.as_str(), "");
        assert_eq!(p.appointments.total, 3);
        assert_eq!(p.appointments.completed, 0);
        assert_eq!(p.prescriptions.total, 0);
    }
}
