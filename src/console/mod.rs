//! Console controllers and the page model they drive.

pub mod admin;
pub mod dialogs;
pub mod intake;
pub mod page;
pub mod render;

pub use admin::{AdminDashboard, Outcome};
pub use dialogs::{Dialogs, RecordedDialogs};
pub use intake::{IntakeForm, IntakePage, SubmitOutcome};
pub use page::{AdminPage, ClickTarget, Container, Input, Modal, Selection, Tab};

/// What happens when two loads of the same panel overlap.
///
/// Nothing cancels an in-flight request. Under `LastArrival` every
/// successful response is applied in the order responses arrive, so the
/// slowest one decides what the panel shows. Under `NewestRequest` each load
/// takes a ticket from a per-panel generation counter and a response is only
/// applied if no newer load of that panel has started since.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseOrdering {
    #[default]
    LastArrival,
    NewestRequest,
}

impl ResponseOrdering {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "last-arrival" => Some(ResponseOrdering::LastArrival),
            "newest-request" => Some(ResponseOrdering::NewestRequest),
            _ => None,
        }
    }
}
