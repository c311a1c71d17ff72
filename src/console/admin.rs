//! Admin dashboard controller.
//!
//! Every operation maps one UI event to at most one backend write plus the
//! panel reload that follows it. Failures are caught here, logged, and never
//! propagated: a panel whose load fails keeps showing what it showed before.

use std::sync::{Mutex, MutexGuard};

use crate::api::{ApiError, ClinicApi, admin};
use crate::console::dialogs::Dialogs;
use crate::console::page::{AdminPage, ClickTarget, Container, Input, Modal, Selection, Tab};
use crate::console::render;
use crate::console::ResponseOrdering;
use crate::models::{RecordId, User, UserStatus};

/// Result of a mutation handler, for callers that need more than the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The operator answered "no" to the confirmation prompt.
    Declined,
    /// A required input was empty; nothing was sent.
    MissingInput,
    /// No record is selected (modal confirmed without being opened for a
    /// record) or the record is not in the cached list; nothing was sent.
    NoSelection,
    /// The backend accepted the write; carries its message.
    Applied(String),
    /// Transport failure or rejected envelope; logged only.
    Failed,
}

/// One feed per load operation; each has its own generation counter.
#[derive(Debug, Clone, Copy)]
enum Feed {
    Dashboard,
    Users,
    Appointments,
    Pharmacy,
    Alerts,
    PatientAnalytics,
}

#[derive(Debug, Default)]
struct ConsoleState {
    page: AdminPage,
    selection: Selection,
    all_users: Vec<User>,
    generations: [u64; 6],
    started: bool,
}

pub struct AdminDashboard<A> {
    api: A,
    ordering: ResponseOrdering,
    state: Mutex<ConsoleState>,
}

impl<A: ClinicApi> AdminDashboard<A> {
    pub fn new(api: A, ordering: ResponseOrdering) -> Self {
        AdminDashboard {
            api,
            ordering,
            state: Mutex::new(ConsoleState::default()),
        }
    }

    // The lock is only ever held for synchronous reads and writes, never
    // across an await.
    fn lock(&self) -> MutexGuard<'_, ConsoleState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    // ---------- Page access ----------

    pub fn page(&self) -> AdminPage {
        self.lock().page.clone()
    }

    pub fn selection(&self) -> Selection {
        self.lock().selection.clone()
    }

    pub fn cached_users(&self) -> Vec<User> {
        self.lock().all_users.clone()
    }

    pub fn set_input(&self, input: Input, value: impl Into<String>) {
        self.lock().page.set_input(input, value);
    }

    /// Page-load hook: the dashboard panel is loaded once, on first view.
    /// A first load that fails leaves the hook armed for the next view.
    pub async fn start(&self) {
        let first = {
            let mut state = self.lock();
            !std::mem::replace(&mut state.started, true)
        };
        if first && !self.refresh_dashboard().await {
            self.lock().started = false;
        }
    }

    // ---------- Response ordering ----------

    fn begin(&self, feed: Feed) -> u64 {
        let mut state = self.lock();
        let slot = &mut state.generations[feed as usize];
        *slot += 1;
        *slot
    }

    /// Run `apply` against the page unless the configured ordering says this
    /// response has been superseded.
    fn commit(&self, feed: Feed, ticket: u64, apply: impl FnOnce(&mut ConsoleState)) {
        let mut state = self.lock();
        if self.ordering == ResponseOrdering::NewestRequest
            && state.generations[feed as usize] != ticket
        {
            log::debug!(
                "Discarding stale {feed:?} response (ticket {ticket}, latest {})",
                state.generations[feed as usize]
            );
            return;
        }
        apply(&mut *state);
    }

    // ---------- Tabs ----------

    /// Show panel `name` with `activated` as the highlighted tab button and
    /// run the panel's load. Unknown names leave the page untouched.
    pub async fn switch_tab(&self, name: &str, activated: Tab) -> Option<Tab> {
        let Some(tab) = Tab::parse(name) else {
            log::debug!("Ignoring switch to unknown tab '{name}'");
            return None;
        };
        self.lock().page.activate_tab(tab, activated);
        self.load_tab(tab).await;
        Some(tab)
    }

    pub async fn load_tab(&self, tab: Tab) {
        match tab {
            Tab::Dashboard => self.load_dashboard().await,
            Tab::Users => self.load_users().await,
            Tab::Appointments => self.load_appointments().await,
            Tab::Pharmacy => self.load_prescriptions().await,
            Tab::Alerts => self.load_emergency_alerts().await,
        }
    }

    // ---------- Panel loads ----------

    pub async fn load_dashboard(&self) {
        self.refresh_dashboard().await;
    }

    /// Returns whether fresh stats were fetched and rendered.
    async fn refresh_dashboard(&self) -> bool {
        let ticket = self.begin(Feed::Dashboard);
        let analytics = match admin::fetch_analytics(&self.api).await {
            Ok(a) => a,
            Err(e) => {
                log_load_failure("dashboard", &e);
                return false;
            }
        };
        let html = match render::dashboard_stats(&analytics) {
            Ok(h) => h,
            Err(e) => {
                log::error!("Error rendering dashboard: {e}");
                return false;
            }
        };
        self.commit(Feed::Dashboard, ticket, |state| {
            state.page.replace(Container::DashboardStats, html);
        });
        true
    }

    pub async fn load_users(&self) {
        let role = self.lock().page.input(Input::RoleFilter).to_string();
        let ticket = self.begin(Feed::Users);
        let users = match admin::fetch_users(&self.api, &role).await {
            Ok(u) => u,
            Err(e) => {
                log_load_failure("users", &e);
                return;
            }
        };
        let html = match render::display_users(&users) {
            Ok(h) => h,
            Err(e) => {
                log::error!("Error rendering users: {e}");
                return;
            }
        };
        self.commit(Feed::Users, ticket, |state| {
            state.all_users = users;
            state.page.replace(Container::UsersTableBody, html);
        });
    }

    pub async fn load_appointments(&self) {
        let status = self.lock().page.input(Input::AppointmentStatusFilter).to_string();
        let ticket = self.begin(Feed::Appointments);
        let appointments = match admin::fetch_appointments(&self.api, &status).await {
            Ok(a) => a,
            Err(e) => {
                log_load_failure("appointments", &e);
                return;
            }
        };
        let html = match render::display_appointments(&appointments) {
            Ok(h) => h,
            Err(e) => {
                log::error!("Error rendering appointments: {e}");
                return;
            }
        };
        self.commit(Feed::Appointments, ticket, |state| {
            state.page.replace(Container::AppointmentsTableBody, html);
        });
    }

    pub async fn load_prescriptions(&self) {
        let ticket = self.begin(Feed::Pharmacy);
        let stats = match admin::fetch_prescription_stats(&self.api).await {
            Ok(s) => s,
            Err(e) => {
                log_load_failure("prescriptions", &e);
                return;
            }
        };
        let rendered = render::pharmacy_stats(&stats)
            .and_then(|cards| Ok((cards, render::display_prescriptions(&stats.prescriptions)?)));
        let (cards, rows) = match rendered {
            Ok(r) => r,
            Err(e) => {
                log::error!("Error rendering prescriptions: {e}");
                return;
            }
        };
        self.commit(Feed::Pharmacy, ticket, |state| {
            state.page.replace(Container::PharmacyStats, cards);
            state.page.replace(Container::PrescriptionsTableBody, rows);
        });
    }

    pub async fn load_emergency_alerts(&self) {
        let ticket = self.begin(Feed::Alerts);
        let alerts = match admin::fetch_emergency_alerts(&self.api).await {
            Ok(a) => a,
            Err(e) => {
                log_load_failure("alerts", &e);
                return;
            }
        };
        let html = match render::display_alerts(&alerts) {
            Ok(h) => h,
            Err(e) => {
                log::error!("Error rendering alerts: {e}");
                return;
            }
        };
        self.commit(Feed::Alerts, ticket, |state| {
            state.page.replace(Container::AlertsTableBody, html);
        });
    }

    // ---------- Users ----------

    pub async fn update_user_status(
        &self,
        dialogs: &impl Dialogs,
        user_id: &RecordId,
        status: UserStatus,
    ) -> Outcome {
        if !dialogs.confirm(&format!("Are you sure you want to {status} this user?")) {
            return Outcome::Declined;
        }
        match admin::set_user_status(&self.api, user_id, status).await {
            Ok(message) => {
                dialogs.alert(&message);
                self.load_users().await;
                Outcome::Applied(message)
            }
            Err(e) => log_write_failure("updating user status", &e),
        }
    }

    /// Flip a user between active and inactive, reading the current status
    /// from the last loaded user list.
    pub async fn toggle_user_status(&self, dialogs: &impl Dialogs, user_id: &RecordId) -> Outcome {
        let target = self
            .lock()
            .all_users
            .iter()
            .find(|u| &u.id == user_id)
            .map(User::toggled_status);
        match target {
            Some(status) => self.update_user_status(dialogs, user_id, status).await,
            None => {
                log::warn!("User {user_id} is not in the loaded user list");
                Outcome::NoSelection
            }
        }
    }

    pub async fn delete_user(&self, dialogs: &impl Dialogs, user_id: &RecordId) -> Outcome {
        if !dialogs.confirm("Are you sure you want to remove this user?") {
            return Outcome::Declined;
        }
        match admin::delete_user(&self.api, user_id).await {
            Ok(message) => {
                dialogs.alert(&message);
                self.load_users().await;
                Outcome::Applied(message)
            }
            Err(e) => log_write_failure("deleting user", &e),
        }
    }

    // ---------- Modals ----------

    pub fn open_reassign_modal(&self, appointment_id: RecordId) {
        self.open_modal(Modal::Reassign, appointment_id);
    }

    pub fn open_forward_modal(&self, alert_id: RecordId) {
        self.open_modal(Modal::ForwardAlert, alert_id);
    }

    fn open_modal(&self, modal: Modal, id: RecordId) {
        let mut state = self.lock();
        *state.selection.slot_mut(modal) = Some(id);
        state.page.set_modal_open(modal, true);
    }

    /// Hide the modal and forget the record it was opened for.
    pub fn close_modal(&self, modal: Modal) {
        let mut state = self.lock();
        state.page.set_modal_open(modal, false);
        *state.selection.slot_mut(modal) = None;
    }

    /// Page-wide click rule: a click whose target is a modal's backdrop
    /// closes that modal. Clicks inside the content box do nothing.
    pub fn click(&self, target: ClickTarget) {
        if let ClickTarget::Backdrop(modal) = target {
            if self.lock().page.is_modal_open(modal) {
                self.close_modal(modal);
            }
        }
    }

    pub async fn confirm_reassign(&self, dialogs: &impl Dialogs) -> Outcome {
        let (doctor, selected) = {
            let state = self.lock();
            (
                state.page.input(Input::NewDoctorName).to_string(),
                state.selection.appointment.clone(),
            )
        };
        if doctor.is_empty() {
            dialogs.alert("Please enter doctor name");
            return Outcome::MissingInput;
        }
        let Some(appointment_id) = selected else {
            log::warn!("Reassign confirmed with no appointment selected");
            return Outcome::NoSelection;
        };

        match admin::reassign_appointment(&self.api, &appointment_id, &doctor).await {
            Ok(message) => {
                dialogs.alert(&message);
                self.close_modal(Modal::Reassign);
                self.load_appointments().await;
                Outcome::Applied(message)
            }
            Err(e) => log_write_failure("reassigning appointment", &e),
        }
    }

    pub async fn confirm_forward_alert(&self, dialogs: &impl Dialogs) -> Outcome {
        let (hospital, selected) = {
            let state = self.lock();
            (
                state.page.input(Input::HospitalName).to_string(),
                state.selection.alert.clone(),
            )
        };
        if hospital.is_empty() {
            dialogs.alert("Please enter hospital name");
            return Outcome::MissingInput;
        }
        let Some(alert_id) = selected else {
            log::warn!("Forward confirmed with no alert selected");
            return Outcome::NoSelection;
        };

        match admin::forward_alert(&self.api, &alert_id, &hospital).await {
            Ok(message) => {
                dialogs.alert(&message);
                self.close_modal(Modal::ForwardAlert);
                self.load_emergency_alerts().await;
                Outcome::Applied(message)
            }
            Err(e) => log_write_failure("forwarding alert", &e),
        }
    }

    pub async fn resolve_alert(&self, dialogs: &impl Dialogs, alert_id: &RecordId) -> Outcome {
        if !dialogs.confirm("Mark this alert as resolved?") {
            return Outcome::Declined;
        }
        match admin::resolve_alert(&self.api, alert_id).await {
            Ok(message) => {
                dialogs.alert(&message);
                self.load_emergency_alerts().await;
                Outcome::Applied(message)
            }
            Err(e) => log_write_failure("resolving alert", &e),
        }
    }

    // ---------- Patient analytics ----------

    /// The one lookup with a visible failure state: anything short of a
    /// rendered card replaces the area with the not-found notice.
    pub async fn load_patient_analytics(&self, dialogs: &impl Dialogs) {
        let patient_id = self.lock().page.input(Input::PatientId).trim().to_string();
        if patient_id.is_empty() {
            dialogs.alert("Please enter a patient ID");
            return;
        }

        let ticket = self.begin(Feed::PatientAnalytics);
        let html = match admin::fetch_patient_analytics(&self.api, &patient_id).await {
            Ok(analytics) => render::display_patient_analytics(&analytics).unwrap_or_else(|e| {
                log::error!("Error rendering patient analytics: {e}");
                render::PATIENT_NOT_FOUND.to_string()
            }),
            Err(e) => {
                log::error!("Error loading patient analytics: {e}");
                render::PATIENT_NOT_FOUND.to_string()
            }
        };
        self.commit(Feed::PatientAnalytics, ticket, |state| {
            state.page.replace(Container::PatientAnalyticsContent, html);
        });
    }
}

fn log_load_failure(panel: &str, e: &ApiError) {
    match e {
        ApiError::Rejected { .. } => log::warn!("Error loading {panel}: {e}"),
        _ => log::error!("Error loading {panel}: {e}"),
    }
}

fn log_write_failure(action: &str, e: &ApiError) -> Outcome {
    log::error!("Error {action}: {e}");
    Outcome::Failed
}
