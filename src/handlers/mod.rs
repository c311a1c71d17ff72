pub mod admin_handlers;
pub mod intake_handlers;

use std::sync::Mutex;

use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::api::ClinicApi;
use crate::config::ConsoleConfig;
use crate::console::{AdminDashboard, IntakeForm, IntakePage, RecordedDialogs};
use crate::session::set_flash;

/// Everything the console server shares between requests: one operator,
/// one page state.
pub struct AppState<A> {
    pub app_name: String,
    pub dashboard: AdminDashboard<A>,
    pub intake_form: IntakeForm<A>,
    pub intake_page: Mutex<IntakePage>,
}

impl<A: ClinicApi + Clone> AppState<A> {
    pub fn new(api: A, config: &ConsoleConfig) -> Self {
        AppState {
            app_name: config.app_name.clone(),
            dashboard: AdminDashboard::new(api.clone(), config.ordering),
            intake_form: IntakeForm::new(api),
            intake_page: Mutex::new(IntakePage::default()),
        }
    }
}

/// Register every console route for the given transport.
pub fn configure<A: ClinicApi + 'static>(cfg: &mut web::ServiceConfig) {
    use admin_handlers as admin;
    use intake_handlers as intake;

    cfg.route("/", web::get().to(|| async { redirect("/admin") }))
        // Admin dashboard
        .route("/admin", web::get().to(admin::index::<A>))
        .route("/admin/tab/{name}", web::get().to(admin::switch_tab::<A>))
        .route("/admin/users/filter", web::post().to(admin::filter_users::<A>))
        .route("/admin/appointments/filter", web::post().to(admin::filter_appointments::<A>))
        .route("/admin/users/{id}/status", web::post().to(admin::update_user_status::<A>))
        .route("/admin/users/{id}/toggle", web::post().to(admin::toggle_user_status::<A>))
        .route("/admin/users/{id}/delete", web::post().to(admin::delete_user::<A>))
        .route("/admin/appointments/{id}/reassign", web::get().to(admin::open_reassign::<A>))
        .route("/admin/reassign", web::post().to(admin::confirm_reassign::<A>))
        .route("/admin/alerts/{id}/forward", web::get().to(admin::open_forward::<A>))
        .route("/admin/forward", web::post().to(admin::confirm_forward::<A>))
        .route("/admin/alerts/{id}/resolve", web::post().to(admin::resolve_alert::<A>))
        .route("/admin/modals/{modal}/close", web::post().to(admin::close_modal::<A>))
        .route("/admin/modals/{modal}/backdrop", web::post().to(admin::backdrop_click::<A>))
        .route("/admin/patient-analytics", web::post().to(admin::patient_analytics::<A>))
        // Intake form
        .route("/intake", web::get().to(intake::form::<A>))
        .route("/intake", web::post().to(intake::submit::<A>));
}

pub(crate) fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location))
        .finish()
}

/// Carry whatever the controller alerted over the redirect as a flash.
pub(crate) fn finish(session: &Session, dialogs: &RecordedDialogs, location: &str) -> HttpResponse {
    if let Some(msg) = dialogs.flash() {
        set_flash(session, &msg);
    }
    redirect(location)
}
