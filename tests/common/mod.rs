//! Shared test infrastructure: a scripted in-memory backend and JSON
//! fixtures shaped like the clinical backend's envelopes.
//!
//! Replies are queued per `"METHOD path"` key and handed out in order. A
//! deferred reply parks the request until the test sends its result, which
//! is how overlapping loads are driven deterministically.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use serde_json::{Value, json};
use tokio::sync::oneshot;

use clinic_console::api::{ApiError, ApiRequest, ApiResponse, ClinicApi, Method};

// ============================================================================
// SCRIPTED BACKEND
// ============================================================================

pub type Reply = Result<ApiResponse, ApiError>;

enum Scripted {
    Ready(Reply),
    Deferred(oneshot::Receiver<Reply>),
}

#[derive(Default)]
struct Script {
    replies: HashMap<String, VecDeque<Scripted>>,
    requests: Vec<ApiRequest>,
}

/// Cloning shares the script, so a test can keep a handle after giving one
/// to the controller.
#[derive(Clone, Default)]
pub struct MockApi {
    script: Arc<Mutex<Script>>,
}

fn key(method: Method, path: &str) -> String {
    format!("{method} {path}")
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a 200 response with `body` as JSON.
    pub fn reply(&self, method: Method, path: &str, body: Value) -> &Self {
        self.reply_with(method, path, Ok(ApiResponse::ok_json(&body)))
    }

    pub fn reply_with(&self, method: Method, path: &str, reply: Reply) -> &Self {
        self.push(method, path, Scripted::Ready(reply));
        self
    }

    /// Queue a reply the test releases later through the returned sender.
    pub fn defer(&self, method: Method, path: &str) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.push(method, path, Scripted::Deferred(rx));
        tx
    }

    fn push(&self, method: Method, path: &str, scripted: Scripted) {
        self.script
            .lock()
            .unwrap()
            .replies
            .entry(key(method, path))
            .or_default()
            .push_back(scripted);
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.script.lock().unwrap().requests.clone()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    pub fn last_body(&self, method: Method, path: &str) -> Option<Value> {
        self.requests()
            .into_iter()
            .rev()
            .find(|r| r.method == method && r.path == path)
            .and_then(|r| r.body)
    }
}

impl ClinicApi for MockApi {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let next = {
            let mut script = self.script.lock().unwrap();
            let k = key(request.method, &request.path);
            script.requests.push(request);
            script.replies.get_mut(&k).and_then(VecDeque::pop_front)
        };
        match next {
            Some(Scripted::Ready(reply)) => reply,
            Some(Scripted::Deferred(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(ApiError::Transport("deferred reply dropped".into()))),
            None => Err(ApiError::Transport("connection refused".into())),
        }
    }
}

// ============================================================================
// FIXTURES
// ============================================================================

pub const USERS: &str = "/api/admin/users";
pub const APPOINTMENTS: &str = "/api/admin/appointments";
pub const ANALYTICS: &str = "/api/admin/analytics";
pub const PRESCRIPTION_STATS: &str = "/api/admin/prescriptions/stats";
pub const ALERTS: &str = "/api/admin/emergency-alerts";

/// Merge `payload` into a `{"status":"success"}` envelope.
pub fn success(payload: Value) -> Value {
    let mut envelope = json!({ "status": "success" });
    if let (Some(out), Value::Object(fields)) = (envelope.as_object_mut(), payload) {
        out.extend(fields);
    }
    envelope
}

pub fn message(text: &str) -> Value {
    success(json!({ "message": text }))
}

pub fn rejected(text: &str) -> Value {
    json!({ "status": "error", "message": text })
}

pub fn user(id: i64, name: &str, role: &str, status: &str) -> Value {
    json!({
        "id": id,
        "user_id": format!("U{id:03}"),
        "name": name,
        "email": format!("{}@clinic.test", name.to_lowercase()),
        "role": role,
        "status": status,
    })
}

pub fn users(list: Vec<Value>) -> Value {
    success(json!({ "users": list }))
}

pub fn appointment(id: i64, patient: &str, doctor: &str, status: &str) -> Value {
    json!({
        "id": id,
        "patient_name": patient,
        "doctor_name": doctor,
        "appointment_date": "2024-03-05",
        "status": status,
    })
}

pub fn appointments(list: Vec<Value>) -> Value {
    success(json!({ "appointments": list }))
}

pub fn alert(id: i64, patient: &str, status: &str, hospital: Option<&str>) -> Value {
    json!({
        "id": id,
        "patient_name": patient,
        "condition": "Chest pain",
        "severity": "critical",
        "status": status,
        "hospital_name": hospital,
    })
}

pub fn alerts(list: Vec<Value>) -> Value {
    success(json!({ "alerts": list }))
}

pub fn analytics() -> Value {
    success(json!({
        "analytics": {
            "users": { "total": 12, "patients": 8, "doctors": 3 },
            "appointments": { "today": 2, "total": 40, "completed": 31 },
            "prescriptions": { "today": 5, "pending": 4 }
        }
    }))
}

pub fn prescription_stats() -> Value {
    success(json!({
        "total_count": 3,
        "pending_count": 1,
        "ready_count": 1,
        "delivered_count": 1,
        "prescriptions": [
            { "id": 1, "patient_name": "Ann", "status": "pending", "priority": "high",
              "created_at": "2024-03-05T10:00:00" },
            { "id": 2, "patient_name": "Ben", "status": "ready", "priority": "normal",
              "created_at": "2024-03-06T10:00:00" },
            { "id": 3, "patient_name": "Cy", "status": "delivered", "priority": "low",
              "created_at": "2024-03-07T10:00:00" }
        ]
    }))
}

/// Number of `<tr>` rows in a container's HTML.
pub fn rows(html: &str) -> usize {
    html.matches("<tr>").count()
}

/// Let other branches of a `join!` run until `cond` holds.
pub async fn until(mut cond: impl FnMut() -> bool) {
    for _ in 0..1000 {
        if cond() {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("condition not reached");
}
