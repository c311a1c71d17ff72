pub mod alert;
pub mod analytics;
pub mod appointment;
pub mod intake;
mod lenient;
pub mod prescription;
pub mod record_id;
pub mod user;

pub use alert::EmergencyAlert;
pub use analytics::{AnalyticsSnapshot, PatientAnalytics};
pub use appointment::Appointment;
pub use intake::{IntakeFields, IntakeRecord};
pub use prescription::{Prescription, PrescriptionStats};
pub use record_id::RecordId;
pub use user::{User, UserStatus};
