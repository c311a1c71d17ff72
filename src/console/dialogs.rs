use std::sync::Mutex;

/// Blocking yes/no prompt and notice, the browser's `confirm` and `alert`.
pub trait Dialogs {
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
}

/// Dialogs with a fixed answer that keep every message shown.
///
/// The console server uses one per request: the browser already asked
/// the operator in the form's `onsubmit`, so confirms answer yes and alerts
/// are collected into the flash message.
#[derive(Debug, Default)]
pub struct RecordedDialogs {
    answer: bool,
    prompts: Mutex<Vec<String>>,
    alerts: Mutex<Vec<String>>,
}

impl RecordedDialogs {
    pub fn accepting() -> Self {
        RecordedDialogs { answer: true, ..Default::default() }
    }

    pub fn declining() -> Self {
        RecordedDialogs { answer: false, ..Default::default() }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Alerts joined for a single flash line, `None` when nothing was shown.
    pub fn flash(&self) -> Option<String> {
        let alerts = self.alerts();
        if alerts.is_empty() {
            None
        } else {
            Some(alerts.join(" "))
        }
    }
}

impl Dialogs for RecordedDialogs {
    fn confirm(&self, message: &str) -> bool {
        self.prompts.lock().unwrap_or_else(|e| e.into_inner()).push(message.to_string());
        self.answer
    }

    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap_or_else(|e| e.into_inner()).push(message.to_string());
    }
}
