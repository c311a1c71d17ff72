//! Render function tests: placeholder rows, one row per record, and the
//! cells each panel shows.

use regex::Regex;

use clinic_console::console::render;
use clinic_console::models::{
    Appointment, EmergencyAlert, PatientAnalytics, Prescription, RecordId, User,
};

fn placeholder(colspan: u32, text: &str) -> Regex {
    Regex::new(&format!(r#"^\s*<tr><td colspan="{colspan}">{text}</td></tr>\s*$"#)).unwrap()
}

fn row_count(html: &str) -> usize {
    html.matches("<tr>").count()
}

#[test]
fn test_empty_lists_render_single_placeholder() {
    assert!(placeholder(6, "No users found").is_match(&render::display_users(&[]).unwrap()));
    assert!(placeholder(6, "No appointments found").is_match(&render::display_appointments(&[]).unwrap()));
    assert!(placeholder(5, "No prescriptions found").is_match(&render::display_prescriptions(&[]).unwrap()));
    assert!(placeholder(6, "No emergency alerts").is_match(&render::display_alerts(&[]).unwrap()));
}

#[test]
fn test_one_row_per_record() {
    let users: Vec<User> = (1..=4)
        .map(|i| User {
            id: RecordId::new(i.to_string()),
            name: format!("User {i}"),
            status: "active".into(),
            ..Default::default()
        })
        .collect();
    let appointments: Vec<Appointment> = (1..=2)
        .map(|i| Appointment { id: RecordId::new(i.to_string()), ..Default::default() })
        .collect();

    assert_eq!(row_count(&render::display_users(&users).unwrap()), 4);
    assert_eq!(row_count(&render::display_appointments(&appointments).unwrap()), 2);
}

#[test]
fn test_user_row_offers_opposite_status() {
    let users = vec![
        User { id: RecordId::new("a"), status: "active".into(), ..Default::default() },
        User { id: RecordId::new("b"), status: "inactive".into(), ..Default::default() },
    ];
    let html = render::display_users(&users).unwrap();

    let hidden = Regex::new(r#"name="status" value="(\w+)""#).unwrap();
    let offered: Vec<&str> = hidden.captures_iter(&html).map(|c| c.get(1).unwrap().as_str()).collect();
    assert_eq!(offered, vec!["inactive", "active"]);
    assert!(html.contains("/admin/users/a/delete"));
}

#[test]
fn test_prescription_dates() {
    let rx = |created_at: &str| Prescription {
        id: RecordId::new("1"),
        created_at: created_at.into(),
        ..Default::default()
    };
    let html = render::display_prescriptions(&[
        rx("2024-12-25T08:30:00Z"),
        rx("Wed, 01 May 2024 10:00:00 GMT"),
        rx("yesterday"),
    ])
    .unwrap();

    assert!(html.contains("<td>12/25/2024</td>"));
    assert!(html.contains("<td>5/1/2024</td>"));
    assert!(html.contains("<td>Invalid Date</td>"));
}

#[test]
fn test_forwarded_alert_without_hospital_shows_resolved_note() {
    let alerts = vec![EmergencyAlert {
        id: RecordId::new("3"),
        status: "forwarded".into(),
        hospital_name: None,
        ..Default::default()
    }];
    let html = render::display_alerts(&alerts).unwrap();

    assert!(html.contains("Resolved"));
    assert!(!html.contains("/admin/alerts/3/forward"));
    assert!(html.contains("/admin/alerts/3/resolve"));
}

#[test]
fn test_patient_analytics_card_shows_six_counters() {
    let mut analytics = PatientAnalytics { patient_id: RecordId::new("P-9"), ..Default::default() };
    analytics.appointments.scheduled = 2;
    analytics.prescriptions.delivered = 5;
    let html = render::display_patient_analytics(&analytics).unwrap();

    let values = Regex::new(r#"<div class="value">(\d+)</div>"#).unwrap();
    let shown: Vec<&str> = values.captures_iter(&html).map(|c| c.get(1).unwrap().as_str()).collect();
    assert_eq!(shown, vec!["0", "0", "2", "0", "5", "0"]);
    assert!(html.contains("Patient: P-9"));
}
