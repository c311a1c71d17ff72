use askama::Template;

use crate::console::page::AdminPage;
use super::PageContext;

#[derive(Template)]
#[template(path = "admin.html")]
pub struct AdminTemplate {
    pub ctx: PageContext,
    pub page: AdminPage,
}
