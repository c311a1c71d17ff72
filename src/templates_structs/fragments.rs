use askama::Template;

use crate::models::{Appointment, EmergencyAlert, PatientAnalytics, Prescription, User};

/// One coloured counter tile of the dashboard and pharmacy grids.
pub struct StatCard {
    pub color: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub value: i64,
}

impl StatCard {
    pub fn new(color: &'static str, icon: &'static str, title: &'static str, value: i64) -> Self {
        StatCard { color, icon, title, value }
    }
}

#[derive(Template)]
#[template(path = "fragments/stat_cards.html")]
pub struct StatCardsTemplate {
    pub cards: Vec<StatCard>,
}

#[derive(Template)]
#[template(path = "fragments/user_rows.html")]
pub struct UserRowsTemplate<'a> {
    pub users: &'a [User],
}

#[derive(Template)]
#[template(path = "fragments/appointment_rows.html")]
pub struct AppointmentRowsTemplate<'a> {
    pub appointments: &'a [Appointment],
}

#[derive(Template)]
#[template(path = "fragments/prescription_rows.html")]
pub struct PrescriptionRowsTemplate<'a> {
    pub prescriptions: &'a [Prescription],
}

#[derive(Template)]
#[template(path = "fragments/alert_rows.html")]
pub struct AlertRowsTemplate<'a> {
    pub alerts: &'a [EmergencyAlert],
}

#[derive(Template)]
#[template(path = "fragments/patient_analytics.html")]
pub struct PatientAnalyticsTemplate<'a> {
    pub analytics: &'a PatientAnalytics,
}
