use serde::{Deserialize, Serialize};

/// Raw values of the intake form inputs, exactly as typed.
///
/// Also the shape of the `POST /intake` form body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IntakeFields {
    #[serde(default)]
    pub patient_id: String,
    #[serde(default)]
    pub symptoms: String,
    #[serde(default)]
    pub bp: String,
    #[serde(default)]
    pub hr: String,
    #[serde(default)]
    pub spo2: String,
    #[serde(default)]
    pub ecg: String,
    #[serde(default)]
    pub troponin: String,
    #[serde(default)]
    pub cholesterol: String,
}

impl IntakeFields {
    pub fn is_empty(&self) -> bool {
        *self == IntakeFields::default()
    }

    /// Form reset: every input back to empty.
    pub fn reset(&mut self) {
        *self = IntakeFields::default();
    }
}

/// Body of `POST /submit_patient`. Field order is the wire order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IntakeRecord {
    pub patient_id: String,
    pub symptoms: String,
    pub vitals: Vitals,
    pub lab_results: LabResults,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Vitals {
    pub bp: String,
    pub hr: String,
    pub spo2: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LabResults {
    pub ecg: String,
    pub troponin: String,
    pub cholesterol: String,
}

impl IntakeRecord {
    /// Trims every field; no coercion, no validation, empty strings kept.
    pub fn from_fields(fields: &IntakeFields) -> Self {
        let t = |s: &str| s.trim().to_string();
        IntakeRecord {
            patient_id: t(&fields.patient_id),
            symptoms: t(&fields.symptoms),
            vitals: Vitals {
                bp: t(&fields.bp),
                hr: t(&fields.hr),
                spo2: t(&fields.spo2),
            },
            lab_results: LabResults {
                ecg: t(&fields.ecg),
                troponin: t(&fields.troponin),
                cholesterol: t(&fields.cholesterol),
            },
        }
    }

    /// Four-space indented JSON for the confirmation panel.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        // serde_json only ever writes valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_keeps_empty_strings() {
        let fields = IntakeFields {
            patient_id: "  p1 ".into(),
            symptoms: "chest pain\n".into(),
            hr: " 72".into(),
            ..Default::default()
        };
        let record = IntakeRecord::from_fields(&fields);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "patient_id": "p1",
                "symptoms": "chest pain",
                "vitals": {"bp": "", "hr": "72", "spo2": ""},
                "lab_results": {"ecg": "", "troponin": "", "cholesterol": ""}
            })
        );
    }

    #[test]
    fn pretty_json_uses_four_space_indent() {
        let record = IntakeRecord::from_fields(&IntakeFields {
            patient_id: "p1".into(),
            ..Default::default()
        });
        let text = record.to_pretty_json().unwrap();
        assert!(text.starts_with("{\n    \"patient_id\": \"p1\","));
        assert!(text.contains("\n        \"bp\": \"\""));
    }

    #[test]
    fn reset_clears_every_field() {
        let mut fields = IntakeFields {
            bp: "120/80".into(),
            cholesterol: "190".into(),
            ..Default::default()
        };
        fields.reset();
        assert!(fields.is_empty());
    }
}
