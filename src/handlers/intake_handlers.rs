use std::sync::{Mutex, MutexGuard};

use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::api::ClinicApi;
use crate::console::{IntakePage, RecordedDialogs};
use crate::errors::{AppError, render};
use crate::handlers::{AppState, finish};
use crate::models::IntakeFields;
use crate::templates_structs::{IntakeTemplate, PageContext};

const INTAKE: &str = "/intake";

fn lock(page: &Mutex<IntakePage>) -> MutexGuard<'_, IntakePage> {
    page.lock().unwrap_or_else(|e| e.into_inner())
}

pub async fn form<A: ClinicApi>(
    state: web::Data<AppState<A>>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let page = lock(&state.intake_page).clone();

    let ctx = PageContext::build(&session, &state.app_name, INTAKE);
    let tmpl = IntakeTemplate {
        ctx,
        fields: page.fields,
        json_output: page.json_output,
    };
    render(tmpl)
}

pub async fn submit<A: ClinicApi>(
    state: web::Data<AppState<A>>,
    session: Session,
    form: web::Form<IntakeFields>,
) -> HttpResponse {
    let mut page = IntakePage::with_fields(form.into_inner());
    let dialogs = RecordedDialogs::accepting();
    state.intake_form.submit(&mut page, &dialogs).await;

    *lock(&state.intake_page) = page;
    finish(&session, &dialogs, INTAKE)
}
