//! The parts of the admin page the controller reads and rewrites.
//!
//! Visibility is class-based in the rendered markup: a tab panel, tab
//! button or modal is shown when it carries `active`. The page model keeps
//! exactly those flags plus the HTML of every container a render function
//! replaces and the values of the inputs handlers read.

use std::collections::HashMap;

use crate::models::RecordId;

// ---------- Identities ----------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Dashboard,
    Users,
    Appointments,
    Pharmacy,
    Alerts,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Dashboard, Tab::Users, Tab::Appointments, Tab::Pharmacy, Tab::Alerts];

    /// Element id of the panel, also the name `switch_tab` accepts.
    pub fn name(&self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Users => "users",
            Tab::Appointments => "appointments",
            Tab::Pharmacy => "pharmacy",
            Tab::Alerts => "alerts",
        }
    }

    pub fn parse(name: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|t| t.name() == name)
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modal {
    Reassign,
    ForwardAlert,
}

impl Modal {
    pub fn element_id(&self) -> &'static str {
        match self {
            Modal::Reassign => "reassignModal",
            Modal::ForwardAlert => "forwardAlertModal",
        }
    }

    pub fn parse(element_id: &str) -> Option<Modal> {
        [Modal::Reassign, Modal::ForwardAlert]
            .into_iter()
            .find(|m| m.element_id() == element_id)
    }
}

/// Containers whose inner HTML is replaced wholesale by a render function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Container {
    DashboardStats,
    UsersTableBody,
    AppointmentsTableBody,
    PharmacyStats,
    PrescriptionsTableBody,
    AlertsTableBody,
    PatientAnalyticsContent,
}

impl Container {
    pub const ALL: [Container; 7] = [
        Container::DashboardStats,
        Container::UsersTableBody,
        Container::AppointmentsTableBody,
        Container::PharmacyStats,
        Container::PrescriptionsTableBody,
        Container::AlertsTableBody,
        Container::PatientAnalyticsContent,
    ];

    pub fn element_id(&self) -> &'static str {
        match self {
            Container::DashboardStats => "dashboardStats",
            Container::UsersTableBody => "usersTableBody",
            Container::AppointmentsTableBody => "appointmentsTableBody",
            Container::PharmacyStats => "pharmacyStats",
            Container::PrescriptionsTableBody => "prescriptionsTableBody",
            Container::AlertsTableBody => "alertsTableBody",
            Container::PatientAnalyticsContent => "patientAnalyticsContent",
        }
    }

    pub fn parse(element_id: &str) -> Option<Container> {
        Container::ALL.into_iter().find(|c| c.element_id() == element_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    RoleFilter,
    AppointmentStatusFilter,
    NewDoctorName,
    HospitalName,
    PatientId,
}

impl Input {
    pub const ALL: [Input; 5] = [
        Input::RoleFilter,
        Input::AppointmentStatusFilter,
        Input::NewDoctorName,
        Input::HospitalName,
        Input::PatientId,
    ];

    pub fn element_id(&self) -> &'static str {
        match self {
            Input::RoleFilter => "roleFilter",
            Input::AppointmentStatusFilter => "appointmentStatusFilter",
            Input::NewDoctorName => "newDoctorName",
            Input::HospitalName => "hospitalName",
            Input::PatientId => "patientIdInput",
        }
    }

    pub fn parse(element_id: &str) -> Option<Input> {
        Input::ALL.into_iter().find(|i| i.element_id() == element_id)
    }
}

/// What a click landed on, for the backdrop-dismissal rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The modal element itself, i.e. the dimmed area around its content.
    Backdrop(Modal),
    /// Anything inside a modal's content box.
    ModalContent(Modal),
    Elsewhere,
}

/// "Currently selected" ids between a modal opening and its confirm.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub appointment: Option<RecordId>,
    pub alert: Option<RecordId>,
}

impl Selection {
    pub fn slot_mut(&mut self, modal: Modal) -> &mut Option<RecordId> {
        match modal {
            Modal::Reassign => &mut self.appointment,
            Modal::ForwardAlert => &mut self.alert,
        }
    }
}

// ---------- Page ----------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabFlags {
    pub panel_active: bool,
    pub button_active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminPage {
    tabs: [TabFlags; 5],
    reassign_open: bool,
    forward_open: bool,
    containers: HashMap<Container, String>,
    inputs: HashMap<Input, String>,
}

impl Default for AdminPage {
    /// The page as served: dashboard tab shown, everything else hidden.
    fn default() -> Self {
        let mut tabs = [TabFlags::default(); 5];
        tabs[Tab::Dashboard.index()] = TabFlags { panel_active: true, button_active: true };
        AdminPage {
            tabs,
            reassign_open: false,
            forward_open: false,
            containers: HashMap::new(),
            inputs: HashMap::new(),
        }
    }
}

impl AdminPage {
    // -- tabs --

    /// Deactivate every panel and button, then activate `panel` and the
    /// control that was actually clicked.
    pub fn activate_tab(&mut self, panel: Tab, button: Tab) {
        for flags in self.tabs.iter_mut() {
            *flags = TabFlags::default();
        }
        self.tabs[panel.index()].panel_active = true;
        self.tabs[button.index()].button_active = true;
    }

    pub fn active_panels(&self) -> Vec<Tab> {
        Tab::ALL.into_iter().filter(|t| self.tabs[t.index()].panel_active).collect()
    }

    pub fn active_buttons(&self) -> Vec<Tab> {
        Tab::ALL.into_iter().filter(|t| self.tabs[t.index()].button_active).collect()
    }

    // -- modals --

    pub fn is_modal_open(&self, modal: Modal) -> bool {
        match modal {
            Modal::Reassign => self.reassign_open,
            Modal::ForwardAlert => self.forward_open,
        }
    }

    pub fn set_modal_open(&mut self, modal: Modal, open: bool) {
        match modal {
            Modal::Reassign => self.reassign_open = open,
            Modal::ForwardAlert => self.forward_open = open,
        }
    }

    // -- containers and inputs --

    pub fn container(&self, container: Container) -> &str {
        self.containers.get(&container).map(String::as_str).unwrap_or("")
    }

    pub fn replace(&mut self, container: Container, html: String) {
        self.containers.insert(container, html);
    }

    pub fn input(&self, input: Input) -> &str {
        self.inputs.get(&input).map(String::as_str).unwrap_or("")
    }

    pub fn set_input(&mut self, input: Input, value: impl Into<String>) {
        self.inputs.insert(input, value.into());
    }

    // -- template helpers --

    pub fn panel_class(&self, name: &str) -> &'static str {
        match Tab::parse(name) {
            Some(t) if self.tabs[t.index()].panel_active => "tab-content active",
            _ => "tab-content",
        }
    }

    pub fn button_class(&self, name: &str) -> &'static str {
        match Tab::parse(name) {
            Some(t) if self.tabs[t.index()].button_active => "tab-btn active",
            _ => "tab-btn",
        }
    }

    /// Container HTML by element id, for the page template.
    pub fn html_of(&self, element_id: &str) -> &str {
        Container::parse(element_id).map(|c| self.container(c)).unwrap_or("")
    }

    /// Input value by element id, for the page template.
    pub fn value_of(&self, element_id: &str) -> &str {
        Input::parse(element_id).map(|i| self.input(i)).unwrap_or("")
    }

    pub fn selected_if(&self, element_id: &str, option: &str) -> &'static str {
        if self.value_of(element_id) == option { "selected" } else { "" }
    }

    pub fn modal_class(&self, element_id: &str) -> &'static str {
        match Modal::parse(element_id) {
            Some(m) if self.is_modal_open(m) => "modal active",
            _ => "modal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn served_page_shows_dashboard_only() {
        let page = AdminPage::default();
        assert_eq!(page.active_panels(), vec![Tab::Dashboard]);
        assert_eq!(page.active_buttons(), vec![Tab::Dashboard]);
        assert!(!page.is_modal_open(Modal::Reassign));
        assert_eq!(page.container(Container::UsersTableBody), "");
    }

    #[test]
    fn activate_tab_moves_both_flags() {
        let mut page = AdminPage::default();
        page.activate_tab(Tab::Alerts, Tab::Alerts);
        assert_eq!(page.active_panels(), vec![Tab::Alerts]);
        assert_eq!(page.active_buttons(), vec![Tab::Alerts]);
        assert_eq!(page.panel_class("alerts"), "tab-content active");
        assert_eq!(page.panel_class("dashboard"), "tab-content");
        assert_eq!(page.button_class("alerts"), "tab-btn active");
    }

    #[test]
    fn tab_names_round_trip() {
        for tab in Tab::ALL {
            assert_eq!(Tab::parse(tab.name()), Some(tab));
        }
        assert_eq!(Tab::parse("billing"), None);
        assert_eq!(Tab::parse("Users"), None);
    }

    #[test]
    fn element_lookups_match_typed_access() {
        let mut page = AdminPage::default();
        page.replace(Container::AlertsTableBody, "<tr></tr>".to_string());
        page.set_input(Input::RoleFilter, "doctor");
        assert_eq!(page.html_of("alertsTableBody"), "<tr></tr>");
        assert_eq!(page.value_of("roleFilter"), "doctor");
        assert_eq!(page.selected_if("roleFilter", "doctor"), "selected");
        assert_eq!(page.selected_if("roleFilter", "patient"), "");
        assert_eq!(page.html_of("noSuchElement"), "");
    }

    #[test]
    fn modal_class_follows_flag() {
        let mut page = AdminPage::default();
        page.set_modal_open(Modal::ForwardAlert, true);
        assert_eq!(page.modal_class("forwardAlertModal"), "modal active");
        assert_eq!(page.modal_class("reassignModal"), "modal");
    }
}
