// Template context structures for Askama templates, organized by page.

use actix_session::Session;

use crate::session::take_flash;

/// Common context shared by all console pages.
/// Templates access these as `ctx.flash`, `ctx.app_name`, etc.
pub struct PageContext {
    pub app_name: String,
    pub flash: Option<String>,
    pub current_path: String,
}

impl PageContext {
    pub fn build(session: &Session, app_name: &str, current_path: &str) -> Self {
        Self {
            app_name: app_name.to_string(),
            flash: take_flash(session),
            current_path: current_path.to_string(),
        }
    }

    pub fn nav_class(&self, path: &str) -> &'static str {
        if self.current_path == path { "nav-link active" } else { "nav-link" }
    }
}

mod admin;
mod fragments;
mod intake;

pub use self::admin::AdminTemplate;
pub use self::fragments::{
    AlertRowsTemplate, AppointmentRowsTemplate, PatientAnalyticsTemplate,
    PrescriptionRowsTemplate, StatCard, StatCardsTemplate, UserRowsTemplate,
};
pub use self::intake::IntakeTemplate;
