use askama::Template;

use crate::models::IntakeFields;
use super::PageContext;

#[derive(Template)]
#[template(path = "intake.html")]
pub struct IntakeTemplate {
    pub ctx: PageContext,
    pub fields: IntakeFields,
    /// Pretty-printed record from the last submission, empty before one.
    pub json_output: String,
}
