//! Typed calls for every backend endpoint the console uses.

use reqwest::Url;
use serde::Deserialize;

use super::envelope::{self, MessagePayload};
use super::{ApiError, ApiRequest, ApiResponse, ClinicApi};
use crate::models::alert::ForwardRequest;
use crate::models::appointment::ReassignRequest;
use crate::models::user::StatusUpdate;
use crate::models::{
    AnalyticsSnapshot, Appointment, EmergencyAlert, IntakeRecord, PatientAnalytics,
    PrescriptionStats, RecordId, User, UserStatus,
};

pub const SUBMIT_PATIENT_PATH: &str = "/submit_patient";

// ---------- Payloads ----------

#[derive(Deserialize)]
struct AnalyticsPayload {
    analytics: AnalyticsSnapshot,
}

#[derive(Deserialize)]
struct UsersPayload {
    users: Vec<User>,
}

#[derive(Deserialize)]
struct AppointmentsPayload {
    appointments: Vec<Appointment>,
}

#[derive(Deserialize)]
struct AlertsPayload {
    alerts: Vec<EmergencyAlert>,
}

#[derive(Deserialize)]
struct PatientAnalyticsPayload {
    analytics: PatientAnalytics,
}

// ---------- Paths ----------

/// `base` alone for an empty filter, `base?key=value` otherwise.
pub fn filtered_path(base: &str, key: &str, value: &str) -> Result<String, ApiError> {
    if value.is_empty() {
        return Ok(base.to_string());
    }
    let query = serde_urlencoded::to_string([(key, value)])?;
    Ok(format!("{base}?{query}"))
}

pub fn user_status_path(id: &RecordId) -> Result<String, ApiError> {
    api_path(&["api", "admin", "user", id.as_str(), "status"])
}

pub fn user_path(id: &RecordId) -> Result<String, ApiError> {
    api_path(&["api", "admin", "user", id.as_str()])
}

pub fn reassign_path(id: &RecordId) -> Result<String, ApiError> {
    api_path(&["api", "admin", "appointment", id.as_str(), "reassign"])
}

pub fn forward_path(id: &RecordId) -> Result<String, ApiError> {
    api_path(&["api", "admin", "emergency-alert", id.as_str(), "forward"])
}

pub fn resolve_path(id: &RecordId) -> Result<String, ApiError> {
    api_path(&["api", "admin", "emergency-alert", id.as_str(), "resolve"])
}

pub fn patient_analytics_path(patient_id: &str) -> Result<String, ApiError> {
    api_path(&["api", "admin", "patient-analytics", patient_id])
}

// Only the path of this URL is kept.
const PATH_ROOT: &str = "http://backend.invalid/";

/// Join `segments` into an absolute path, percent-encoding each one so an
/// id can never add segments or start a query.
fn api_path(segments: &[&str]) -> Result<String, ApiError> {
    let mut url = Url::parse(PATH_ROOT).map_err(|e| ApiError::Encode(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| ApiError::Encode(format!("{PATH_ROOT} cannot carry a path")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url.path().to_string())
}

// ---------- Reads ----------

pub async fn fetch_analytics(api: &impl ClinicApi) -> Result<AnalyticsSnapshot, ApiError> {
    let res = api.send(ApiRequest::get("/api/admin/analytics")).await?;
    let payload: AnalyticsPayload = envelope::open(&res.body)?;
    Ok(payload.analytics)
}

pub async fn fetch_users(api: &impl ClinicApi, role: &str) -> Result<Vec<User>, ApiError> {
    let path = filtered_path("/api/admin/users", "role", role)?;
    let res = api.send(ApiRequest::get(path)).await?;
    let payload: UsersPayload = envelope::open(&res.body)?;
    Ok(payload.users)
}

pub async fn fetch_appointments(
    api: &impl ClinicApi,
    status: &str,
) -> Result<Vec<Appointment>, ApiError> {
    let path = filtered_path("/api/admin/appointments", "status", status)?;
    let res = api.send(ApiRequest::get(path)).await?;
    let payload: AppointmentsPayload = envelope::open(&res.body)?;
    Ok(payload.appointments)
}

pub async fn fetch_prescription_stats(api: &impl ClinicApi) -> Result<PrescriptionStats, ApiError> {
    let res = api.send(ApiRequest::get("/api/admin/prescriptions/stats")).await?;
    envelope::open(&res.body)
}

pub async fn fetch_emergency_alerts(api: &impl ClinicApi) -> Result<Vec<EmergencyAlert>, ApiError> {
    let res = api.send(ApiRequest::get("/api/admin/emergency-alerts")).await?;
    let payload: AlertsPayload = envelope::open(&res.body)?;
    Ok(payload.alerts)
}

pub async fn fetch_patient_analytics(
    api: &impl ClinicApi,
    patient_id: &str,
) -> Result<PatientAnalytics, ApiError> {
    let res = api.send(ApiRequest::get(patient_analytics_path(patient_id)?)).await?;
    let payload: PatientAnalyticsPayload = envelope::open(&res.body)?;
    Ok(payload.analytics)
}

// ---------- Writes ----------
// Each returns the server-supplied `message`.

pub async fn set_user_status(
    api: &impl ClinicApi,
    id: &RecordId,
    status: UserStatus,
) -> Result<String, ApiError> {
    let body = serde_json::to_value(StatusUpdate { status })?;
    let res = api.send(ApiRequest::post(user_status_path(id)?, Some(body))).await?;
    let payload: MessagePayload = envelope::open(&res.body)?;
    Ok(payload.message)
}

pub async fn delete_user(api: &impl ClinicApi, id: &RecordId) -> Result<String, ApiError> {
    let res = api.send(ApiRequest::delete(user_path(id)?)).await?;
    let payload: MessagePayload = envelope::open(&res.body)?;
    Ok(payload.message)
}

pub async fn reassign_appointment(
    api: &impl ClinicApi,
    id: &RecordId,
    doctor_name: &str,
) -> Result<String, ApiError> {
    let body = serde_json::to_value(ReassignRequest { doctor_name })?;
    let res = api.send(ApiRequest::post(reassign_path(id)?, Some(body))).await?;
    let payload: MessagePayload = envelope::open(&res.body)?;
    Ok(payload.message)
}

pub async fn forward_alert(
    api: &impl ClinicApi,
    id: &RecordId,
    hospital_name: &str,
) -> Result<String, ApiError> {
    let body = serde_json::to_value(ForwardRequest { hospital_name })?;
    let res = api.send(ApiRequest::post(forward_path(id)?, Some(body))).await?;
    let payload: MessagePayload = envelope::open(&res.body)?;
    Ok(payload.message)
}

pub async fn resolve_alert(api: &impl ClinicApi, id: &RecordId) -> Result<String, ApiError> {
    let res = api.send(ApiRequest::post(resolve_path(id)?, None)).await?;
    let payload: MessagePayload = envelope::open(&res.body)?;
    Ok(payload.message)
}

/// The intake endpoint does not use the envelope, so the raw response goes
/// back to the caller, which checks the HTTP status itself.
pub async fn submit_intake(api: &impl ClinicApi, record: &IntakeRecord) -> Result<ApiResponse, ApiError> {
    let body = serde_json::to_value(record)?;
    api.send(ApiRequest::post(SUBMIT_PATIENT_PATH, Some(body))).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_leaves_path_bare() {
        assert_eq!(filtered_path("/api/admin/users", "role", "").unwrap(), "/api/admin/users");
    }

    #[test]
    fn filter_value_is_urlencoded() {
        assert_eq!(
            filtered_path("/api/admin/users", "role", "doctor").unwrap(),
            "/api/admin/users?role=doctor"
        );
        assert_eq!(
            filtered_path("/api/admin/appointments", "status", "no show&x").unwrap(),
            "/api/admin/appointments?status=no+show%26x"
        );
    }

    #[test]
    fn mutation_paths_embed_record_id() {
        let id = RecordId::new("42");
        assert_eq!(reassign_path(&id).unwrap(), "/api/admin/appointment/42/reassign");
        assert_eq!(forward_path(&id).unwrap(), "/api/admin/emergency-alert/42/forward");
        assert_eq!(resolve_path(&id).unwrap(), "/api/admin/emergency-alert/42/resolve");
        assert_eq!(user_status_path(&id).unwrap(), "/api/admin/user/42/status");
        assert_eq!(user_path(&id).unwrap(), "/api/admin/user/42");
    }

    #[test]
    fn path_segments_are_percent_encoded() {
        assert_eq!(
            patient_analytics_path("P 7?x=1#y").unwrap(),
            "/api/admin/patient-analytics/P%207%3Fx=1%23y"
        );
        assert_eq!(
            user_path(&RecordId::new("a/b")).unwrap(),
            "/api/admin/user/a%2Fb"
        );
    }
}
