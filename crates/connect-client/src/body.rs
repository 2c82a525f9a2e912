use serde_json::Value;

/// A decoded response body.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
  /// The body was empty.
  Empty,

  /// The body parsed as JSON.
  Json(Value),

  /// The body was not valid JSON and is kept verbatim.
  ///
  /// Malformed backend responses end up here instead of failing the call.
  Raw(String),
}

impl ResponseBody {
  /// Decode a body, falling back to the raw text when it is not JSON.
  pub fn parse(text: &str) -> Self {
    if text.is_empty() {
      return Self::Empty;
    }

    match serde_json::from_str(text) {
      Ok(value) => Self::Json(value),
      Err(_) => Self::Raw(text.to_string()),
    }
  }

  /// The parsed JSON, if any.
  pub fn as_json(&self) -> Option<&Value> {
    match self {
      Self::Json(value) => Some(value),
      _ => None,
    }
  }

  /// Convert to a plain JSON value: `null`, the parsed value, or `{"raw": text}`.
  pub fn into_value(self) -> Value {
    match self {
      Self::Empty => Value::Null,
      Self::Json(value) => value,
      Self::Raw(text) => serde_json::json!({ "raw": text }),
    }
  }

  /// Human-readable error message carried in the body, preferring `detail`
  /// over `message`.
  pub(crate) fn error_message(&self) -> Option<String> {
    let object = self.as_json()?.as_object()?;
    ["detail", "message"]
      .iter()
      .find_map(|key| object.get(*key).and_then(message_text))
  }
}

fn message_text(value: &Value) -> Option<String> {
  match value {
    Value::Null | Value::Bool(false) => None,
    Value::String(s) if s.is_empty() => None,
    Value::String(s) => Some(s.clone()),
    Value::Number(n) if n.as_f64() == Some(0.0) => None,
    other => Some(other.to_string()),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_parse_empty() {
    assert_eq!(ResponseBody::parse(""), ResponseBody::Empty);
    assert_eq!(ResponseBody::parse("").into_value(), Value::Null);
  }

  #[test]
  fn test_parse_json() {
    let body = ResponseBody::parse(r#"{"message": "Healthy"}"#);
    assert_eq!(body.as_json(), Some(&json!({"message": "Healthy"})));
  }

  #[test]
  fn test_parse_falls_back_to_raw() {
    let body = ResponseBody::parse("<html>bad gateway</html>");
    assert_eq!(body, ResponseBody::Raw("<html>bad gateway</html>".to_string()));
    assert_eq!(body.into_value(), json!({"raw": "<html>bad gateway</html>"}));
  }

  #[test]
  fn test_error_message_prefers_detail() {
    let body = ResponseBody::parse(r#"{"detail": "Not Found", "message": "other"}"#);
    assert_eq!(body.error_message().as_deref(), Some("Not Found"));
  }

  #[test]
  fn test_error_message_falls_back_to_message() {
    let body = ResponseBody::parse(r#"{"detail": "", "message": "backend down"}"#);
    assert_eq!(body.error_message().as_deref(), Some("backend down"));
  }

  #[test]
  fn test_error_message_structured_detail() {
    let body = ResponseBody::parse(r#"{"detail": [{"loc": ["body"], "msg": "field required"}]}"#);
    let message = body.error_message().unwrap();
    assert!(message.contains("field required"));
  }

  #[test]
  fn test_error_message_absent() {
    assert_eq!(ResponseBody::Empty.error_message(), None);
    assert_eq!(ResponseBody::parse("oops").error_message(), None);
    assert_eq!(ResponseBody::parse("[1, 2]").error_message(), None);
  }
}
