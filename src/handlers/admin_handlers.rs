use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::api::ClinicApi;
use crate::console::{ClickTarget, Input, Modal, RecordedDialogs, Tab};
use crate::errors::{AppError, render};
use crate::handlers::{AppState, finish, redirect};
use crate::models::{RecordId, UserStatus};
use crate::session::set_flash;
use crate::templates_structs::{AdminTemplate, PageContext};

const ADMIN: &str = "/admin";

#[derive(Deserialize)]
pub struct RoleFilterForm {
    #[serde(default)]
    pub role: String,
}

#[derive(Deserialize)]
pub struct StatusFilterForm {
    #[serde(default)]
    pub status: String,
}

#[derive(Deserialize)]
pub struct StatusForm {
    pub status: String,
}

#[derive(Deserialize)]
pub struct ReassignForm {
    #[serde(default)]
    pub doctor_name: String,
}

#[derive(Deserialize)]
pub struct ForwardForm {
    #[serde(default)]
    pub hospital_name: String,
}

#[derive(Deserialize)]
pub struct PatientLookupForm {
    #[serde(default)]
    pub patient_id: String,
}

// ---------- Page ----------

pub async fn index<A: ClinicApi>(
    state: web::Data<AppState<A>>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    state.dashboard.start().await;

    let ctx = PageContext::build(&session, &state.app_name, ADMIN);
    let tmpl = AdminTemplate { ctx, page: state.dashboard.page() };
    render(tmpl)
}

pub async fn switch_tab<A: ClinicApi>(
    state: web::Data<AppState<A>>,
    path: web::Path<String>,
) -> HttpResponse {
    let name = path.into_inner();
    match Tab::parse(&name) {
        Some(tab) => {
            state.dashboard.switch_tab(&name, tab).await;
        }
        None => log::debug!("Ignoring switch to unknown tab '{name}'"),
    }
    redirect(ADMIN)
}

// ---------- Filters ----------

pub async fn filter_users<A: ClinicApi>(
    state: web::Data<AppState<A>>,
    form: web::Form<RoleFilterForm>,
) -> HttpResponse {
    state.dashboard.set_input(Input::RoleFilter, form.into_inner().role);
    state.dashboard.load_users().await;
    redirect(ADMIN)
}

pub async fn filter_appointments<A: ClinicApi>(
    state: web::Data<AppState<A>>,
    form: web::Form<StatusFilterForm>,
) -> HttpResponse {
    state.dashboard.set_input(Input::AppointmentStatusFilter, form.into_inner().status);
    state.dashboard.load_appointments().await;
    redirect(ADMIN)
}

// ---------- Users ----------

pub async fn update_user_status<A: ClinicApi>(
    state: web::Data<AppState<A>>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<StatusForm>,
) -> HttpResponse {
    let id = RecordId::new(path.into_inner());
    let Some(status) = UserStatus::parse(&form.status) else {
        log::warn!("Ignoring unknown user status '{}'", form.status);
        set_flash(&session, "Unknown user status");
        return redirect(ADMIN);
    };

    let dialogs = RecordedDialogs::accepting();
    state.dashboard.update_user_status(&dialogs, &id, status).await;
    finish(&session, &dialogs, ADMIN)
}

pub async fn toggle_user_status<A: ClinicApi>(
    state: web::Data<AppState<A>>,
    session: Session,
    path: web::Path<String>,
) -> HttpResponse {
    let id = RecordId::new(path.into_inner());
    let dialogs = RecordedDialogs::accepting();
    state.dashboard.toggle_user_status(&dialogs, &id).await;
    finish(&session, &dialogs, ADMIN)
}

pub async fn delete_user<A: ClinicApi>(
    state: web::Data<AppState<A>>,
    session: Session,
    path: web::Path<String>,
) -> HttpResponse {
    let id = RecordId::new(path.into_inner());
    let dialogs = RecordedDialogs::accepting();
    state.dashboard.delete_user(&dialogs, &id).await;
    finish(&session, &dialogs, ADMIN)
}

// ---------- Appointments and alerts ----------

pub async fn open_reassign<A: ClinicApi>(
    state: web::Data<AppState<A>>,
    path: web::Path<String>,
) -> HttpResponse {
    state.dashboard.open_reassign_modal(RecordId::new(path.into_inner()));
    redirect(ADMIN)
}

pub async fn confirm_reassign<A: ClinicApi>(
    state: web::Data<AppState<A>>,
    session: Session,
    form: web::Form<ReassignForm>,
) -> HttpResponse {
    state.dashboard.set_input(Input::NewDoctorName, form.into_inner().doctor_name);
    let dialogs = RecordedDialogs::accepting();
    state.dashboard.confirm_reassign(&dialogs).await;
    finish(&session, &dialogs, ADMIN)
}

pub async fn open_forward<A: ClinicApi>(
    state: web::Data<AppState<A>>,
    path: web::Path<String>,
) -> HttpResponse {
    state.dashboard.open_forward_modal(RecordId::new(path.into_inner()));
    redirect(ADMIN)
}

pub async fn confirm_forward<A: ClinicApi>(
    state: web::Data<AppState<A>>,
    session: Session,
    form: web::Form<ForwardForm>,
) -> HttpResponse {
    state.dashboard.set_input(Input::HospitalName, form.into_inner().hospital_name);
    let dialogs = RecordedDialogs::accepting();
    state.dashboard.confirm_forward_alert(&dialogs).await;
    finish(&session, &dialogs, ADMIN)
}

pub async fn resolve_alert<A: ClinicApi>(
    state: web::Data<AppState<A>>,
    session: Session,
    path: web::Path<String>,
) -> HttpResponse {
    let id = RecordId::new(path.into_inner());
    let dialogs = RecordedDialogs::accepting();
    state.dashboard.resolve_alert(&dialogs, &id).await;
    finish(&session, &dialogs, ADMIN)
}

// ---------- Modals ----------

pub async fn close_modal<A: ClinicApi>(
    state: web::Data<AppState<A>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let modal = Modal::parse(&path).ok_or(AppError::NotFound)?;
    state.dashboard.close_modal(modal);
    Ok(redirect(ADMIN))
}

pub async fn backdrop_click<A: ClinicApi>(
    state: web::Data<AppState<A>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let modal = Modal::parse(&path).ok_or(AppError::NotFound)?;
    state.dashboard.click(ClickTarget::Backdrop(modal));
    Ok(redirect(ADMIN))
}

// ---------- Patient analytics ----------

pub async fn patient_analytics<A: ClinicApi>(
    state: web::Data<AppState<A>>,
    session: Session,
    form: web::Form<PatientLookupForm>,
) -> HttpResponse {
    state.dashboard.set_input(Input::PatientId, form.into_inner().patient_id);
    let dialogs = RecordedDialogs::accepting();
    state.dashboard.load_patient_analytics(&dialogs).await;
    finish(&session, &dialogs, ADMIN)
}
