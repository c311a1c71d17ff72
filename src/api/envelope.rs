use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::ApiError;

pub const SUCCESS: &str = "success";

/// Decode a `{status, ...payload}` envelope.
///
/// The HTTP status code is deliberately ignored: the backend reports
/// application failures in the envelope, sometimes with a 4xx/5xx and
/// sometimes with a 200. Only `status == "success"` lets the payload through.
pub fn open<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let value: Value = serde_json::from_str(body)?;

    let status = value.get("status").and_then(Value::as_str).unwrap_or("");
    if status != SUCCESS {
        let message = value
            .get("message")
            .or_else(|| value.get("error"))
            .and_then(Value::as_str)
            .map(String::from);
        return Err(ApiError::Rejected {
            status: status.to_string(),
            message,
        });
    }

    Ok(serde_json::from_value(value)?)
}

/// Payload of every mutation endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessagePayload {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_yields_payload() {
        let p: MessagePayload = open(r#"{"status":"success","message":"done"}"#).unwrap();
        assert_eq!(p.message, "done");
    }

    #[test]
    fn non_success_status_is_rejected() {
        let err = open::<MessagePayload>(r#"{"status":"error","message":"no such user"}"#)
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Rejected {
                status: "error".into(),
                message: Some("no such user".into())
            }
        );
    }

    #[test]
    fn missing_status_is_rejected() {
        let err = open::<MessagePayload>(r#"{"message":"hi"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Rejected { ref status, .. } if status.is_empty()));
    }

    #[test]
    fn html_body_is_a_decode_error() {
        let err = open::<MessagePayload>("<html>500</html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
