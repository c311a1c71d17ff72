//! Pure render functions: data in, container HTML out.
//!
//! Every list renderer produces either one placeholder row spanning the
//! table's columns or exactly one `<tr>` per record.

use askama::Template;

use crate::models::{
    AnalyticsSnapshot, Appointment, EmergencyAlert, PatientAnalytics, Prescription,
    PrescriptionStats, User,
};
use crate::templates_structs::{
    AlertRowsTemplate, AppointmentRowsTemplate, PatientAnalyticsTemplate,
    PrescriptionRowsTemplate, StatCard, StatCardsTemplate, UserRowsTemplate,
};

/// Fixed failure state of the patient-analytics card.
pub const PATIENT_NOT_FOUND: &str =
    r#"<p style="text-align:center;color:#999;">Patient not found or error loading data</p>"#;

pub fn display_users(users: &[User]) -> Result<String, askama::Error> {
    UserRowsTemplate { users }.render()
}

pub fn display_appointments(appointments: &[Appointment]) -> Result<String, askama::Error> {
    AppointmentRowsTemplate { appointments }.render()
}

pub fn display_prescriptions(prescriptions: &[Prescription]) -> Result<String, askama::Error> {
    PrescriptionRowsTemplate { prescriptions }.render()
}

pub fn display_alerts(alerts: &[EmergencyAlert]) -> Result<String, askama::Error> {
    AlertRowsTemplate { alerts }.render()
}

pub fn display_patient_analytics(analytics: &PatientAnalytics) -> Result<String, askama::Error> {
    PatientAnalyticsTemplate { analytics }.render()
}

pub fn dashboard_stats(a: &AnalyticsSnapshot) -> Result<String, askama::Error> {
    let card = StatCard::new;
    StatCardsTemplate {
        cards: vec![
            card("blue", "fa-users", "Total Users", a.users.total),
            card("green", "fa-user-injured", "Patients", a.users.patients),
            card("orange", "fa-user-md", "Doctors", a.users.doctors),
            card("red", "fa-calendar-check", "Today's Appointments", a.appointments.today),
            card("blue", "fa-calendar", "Total Appointments", a.appointments.total),
            card("green", "fa-check-circle", "Completed", a.appointments.completed),
            card("orange", "fa-prescription-bottle", "Today's Prescriptions", a.prescriptions.today),
            card("red", "fa-pills", "Pending Medicines", a.prescriptions.pending),
        ],
    }
    .render()
}

pub fn pharmacy_stats(s: &PrescriptionStats) -> Result<String, askama::Error> {
    let card = StatCard::new;
    StatCardsTemplate {
        cards: vec![
            card("blue", "fa-prescription", "Total Prescriptions", s.total_count),
            card("orange", "fa-clock", "Pending", s.pending_count),
            card("green", "fa-check", "Ready", s.ready_count),
            card("red", "fa-truck", "Delivered", s.delivered_count),
        ],
    }
    .render()
}
