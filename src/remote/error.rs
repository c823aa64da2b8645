use std::collections::BTreeMap;
use std::fmt;

/// Server-side validation messages keyed by field.
///
/// Messages that are not tied to a field are filed under `general`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(pub BTreeMap<String, Vec<String>>);

pub const GENERAL: &str = "general";

impl FieldErrors {
    pub fn general(msg: impl Into<String>) -> Self {
        let mut m = BTreeMap::new();
        m.insert(GENERAL.to_string(), vec![msg.into()]);
        Self(m)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Parses the error bodies the backend produces: serializer errors
    /// (`{"field": ["msg"]}`), form errors (`{"errors": {...}}`), and single
    /// messages (`{"error": "..."}`, `{"detail": "..."}`).
    pub fn from_body(body: &serde_json::Value) -> Self {
        let mut out = FieldErrors::default();
        out.collect(body, None);
        if out.is_empty() {
            let text = match body {
                serde_json::Value::Null => "request rejected".to_string(),
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            return FieldErrors::general(text);
        }
        out
    }

    fn collect(&mut self, v: &serde_json::Value, field: Option<&str>) {
        match v {
            serde_json::Value::Object(map) => {
                for (k, inner) in map {
                    let key = match k.as_str() {
                        "errors" => {
                            self.collect(inner, field);
                            continue;
                        }
                        "error" | "detail" | "message" | "non_field_errors" | "__all__" => {
                            GENERAL
                        }
                        other => other,
                    };
                    self.collect(inner, Some(key));
                }
            }
            serde_json::Value::Array(items) => {
                for item in items {
                    self.collect(item, field);
                }
            }
            serde_json::Value::String(s) => self.push(field.unwrap_or(GENERAL), s.clone()),
            serde_json::Value::Null => {}
            other => self.push(field.unwrap_or(GENERAL), other.to_string()),
        }
    }

    fn push(&mut self, field: &str, msg: String) {
        self.0.entry(field.to_string()).or_default().push(msg);
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, msgs) in &self.0 {
            for m in msgs {
                if !first {
                    f.write_str("; ")?;
                }
                first = false;
                if field == GENERAL {
                    write!(f, "{}", m)?;
                } else {
                    write!(f, "{}: {}", field, m)?;
                }
            }
        }
        Ok(())
    }
}

/// What went wrong with a backend call, grouped by how the console reacts.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Missing or rejected token; the session is over.
    #[error("unauthenticated: {0}")]
    Unauthenticated(String),

    /// Nothing there; rendered as an empty state rather than an error.
    #[error("not found: {0}")]
    NotFound(String),

    /// Create/update rejected; messages go back to the form.
    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    /// Anything else, including transport failures (`status` is `None`).
    #[error("{}", describe_failure(.status, .message))]
    NetworkOrServer {
        status: Option<u16>,
        message: String,
    },
}

fn describe_failure(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(s) => format!("server error ({}): {}", s, message),
        None => format!("network error: {}", message),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Unauthenticated,
    NotFound,
    ValidationError,
    NetworkOrServerError,
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Unauthenticated(_) => ErrorKind::Unauthenticated,
            ApiError::NotFound(_) => ErrorKind::NotFound,
            ApiError::Validation(_) => ErrorKind::ValidationError,
            ApiError::NetworkOrServer { .. } => ErrorKind::NetworkOrServerError,
        }
    }

    pub fn is_unauthenticated(&self) -> bool {
        self.kind() == ErrorKind::Unauthenticated
    }

    pub fn network(message: impl Into<String>) -> Self {
        ApiError::NetworkOrServer {
            status: None,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::NetworkOrServer {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/remote/error_tests.rs"]
mod tests;
