use crate::error::LookupError;
use crate::types::{LookupOutcome, LookupRecord};
use reqwest::{Response, StatusCode};
use serde_json::Value;

/// Turns provider HTTP responses into lookup outcomes
#[derive(Clone, Default)]
pub struct ProfileResponseConverter;

impl ProfileResponseConverter {
    pub fn new() -> Self {
        Self
    }

    /// Read the response body and interpret it
    pub async fn convert_response(&self, response: Response) -> LookupOutcome {
        let status = response.status();
        let body = response.text().await.map_err(LookupError::transport)?;
        self.interpret(status, &body)
    }

    /// Interpret a status code and body.
    ///
    /// 404 and empty/`null`/`{}` bodies mean "no record"; other non-2xx
    /// statuses are failures.
    pub fn interpret(&self, status: StatusCode, body: &str) -> LookupOutcome {
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            return Err(LookupError::status(status.as_u16(), error_detail(body)));
        }

        let trimmed = body.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let value: Value =
            serde_json::from_str(trimmed).map_err(|e| LookupError::Decode(e.to_string()))?;

        match value {
            Value::Null => Ok(None),
            Value::Object(ref map) if map.is_empty() => Ok(None),
            Value::Object(_) => serde_json::from_value::<LookupRecord>(value)
                .map(Some)
                .map_err(|e| LookupError::Decode(e.to_string())),
            other => Err(LookupError::Decode(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }
}

/// Provider error message: the JSON `detail` field when present, else the body
fn error_detail(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("detail")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_body() {
        let converter = ProfileResponseConverter::new();
        let outcome = converter.interpret(
            StatusCode::OK,
            r#"{"pk": "123", "full_name": "Alice", "follower_count": 10}"#,
        );
        let record = outcome.unwrap().unwrap();
        assert_eq!(record.pk, Some(123));
        assert_eq!(record.follower_count, Some(10));
    }

    #[test]
    fn test_absent_bodies() {
        let converter = ProfileResponseConverter::new();
        assert_eq!(converter.interpret(StatusCode::OK, ""), Ok(None));
        assert_eq!(converter.interpret(StatusCode::OK, "null"), Ok(None));
        assert_eq!(converter.interpret(StatusCode::OK, "{}"), Ok(None));
        assert_eq!(
            converter.interpret(StatusCode::NOT_FOUND, r#"{"detail":"Target user not found"}"#),
            Ok(None)
        );
    }

    #[test]
    fn test_error_statuses() {
        let converter = ProfileResponseConverter::new();
        assert_eq!(
            converter.interpret(StatusCode::FORBIDDEN, r#"{"detail":"Invalid access key"}"#),
            Err(LookupError::status(403, "Invalid access key"))
        );
        assert_eq!(
            converter.interpret(StatusCode::BAD_GATEWAY, "upstream down\n"),
            Err(LookupError::status(502, "upstream down"))
        );
    }

    #[test]
    fn test_undecodable_bodies() {
        let converter = ProfileResponseConverter::new();
        assert!(matches!(
            converter.interpret(StatusCode::OK, "<html>"),
            Err(LookupError::Decode(_))
        ));
        assert!(matches!(
            converter.interpret(StatusCode::OK, "[1, 2]"),
            Err(LookupError::Decode(_))
        ));
    }
}
