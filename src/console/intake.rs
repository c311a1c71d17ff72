use crate::api::envelope::MessagePayload;
use crate::api::{ApiError, ClinicApi, admin};
use crate::console::dialogs::Dialogs;
use crate::models::{IntakeFields, IntakeRecord};

/// The intake page: form inputs plus the JSON confirmation area.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntakePage {
    pub fields: IntakeFields,
    pub json_output: String,
}

impl IntakePage {
    pub fn with_fields(fields: IntakeFields) -> Self {
        IntakePage { fields, json_output: String::new() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Backend stored the record; the form was reset.
    Accepted(String),
    /// Non-2xx response; the body (often an HTML error page) was logged.
    ServerError(u16),
    /// Transport or decode failure.
    Failed(ApiError),
}

pub struct IntakeForm<A> {
    api: A,
}

impl<A: ClinicApi> IntakeForm<A> {
    pub fn new(api: A) -> Self {
        IntakeForm { api }
    }

    /// Assemble, show and post the record. The fields are only cleared once
    /// the backend has accepted it, so a failed submit can be retried as is.
    pub async fn submit(&self, page: &mut IntakePage, dialogs: &impl Dialogs) -> SubmitOutcome {
        let record = IntakeRecord::from_fields(&page.fields);
        match record.to_pretty_json() {
            Ok(json) => page.json_output = json,
            Err(e) => log::error!("Error formatting intake record: {e}"),
        }

        let res = match admin::submit_intake(&self.api, &record).await {
            Ok(r) => r,
            Err(e) => return fail(dialogs, e),
        };

        if !res.is_ok() {
            log::error!("Server returned HTML: {}", res.body);
            dialogs.alert("Error submitting data. Check console.");
            return SubmitOutcome::ServerError(res.status);
        }

        let payload: MessagePayload = match serde_json::from_str(&res.body) {
            Ok(p) => p,
            Err(e) => return fail(dialogs, e.into()),
        };
        dialogs.alert(&payload.message);
        page.fields.reset();
        SubmitOutcome::Accepted(payload.message)
    }
}

fn fail(dialogs: &impl Dialogs, e: ApiError) -> SubmitOutcome {
    log::error!("{e}");
    dialogs.alert(&format!("Error submitting data: {e}"));
    SubmitOutcome::Failed(e)
}
