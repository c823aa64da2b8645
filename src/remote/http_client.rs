use reqwest::StatusCode;
use reqwest::blocking::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::*;

impl RemoteClient {
    /// Bearer header value; refuses to build a request without a token.
    pub(super) fn auth(&self) -> Result<String, ApiError> {
        match self.tokens.token() {
            Some(t) if !t.is_empty() => Ok(format!("Bearer {}", t)),
            _ => Err(ApiError::Unauthenticated("not logged in".to_string())),
        }
    }

    pub(super) fn crm_url(&self, path: &str) -> String {
        format!(
            "{}{}{}",
            self.endpoints.base_url, self.endpoints.crm_prefix, path
        )
    }

    pub(super) fn accounts_url(&self, path: &str) -> String {
        format!(
            "{}{}{}",
            self.endpoints.base_url, self.endpoints.accounts_prefix, path
        )
    }

    pub(super) fn auth_url(&self, path: &str) -> String {
        format!(
            "{}{}{}",
            self.endpoints.base_url, self.endpoints.auth_prefix, path
        )
    }

    pub(super) fn send(&self, req: RequestBuilder, label: &str) -> Result<Response, ApiError> {
        match req.send() {
            Ok(resp) => {
                log::debug!("{} -> {}", label, resp.status());
                Ok(resp)
            }
            Err(err) => {
                log::warn!("{} failed: {}", label, err);
                Err(ApiError::network(format!("{}: {}", label, err)))
            }
        }
    }

    pub(super) fn ensure_ok(&self, resp: Response, label: &str) -> Result<Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = read_body(resp);
        let err = classify(status, &body, label);
        log::warn!("{} rejected: {}", label, err);
        Err(err)
    }
}

/// Body as JSON; non-JSON text becomes a JSON string, empty becomes null.
pub(super) fn read_body(resp: Response) -> serde_json::Value {
    let text = resp.text().unwrap_or_default();
    if text.trim().is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text))
}

pub(super) fn parse_json<T: DeserializeOwned>(resp: Response, label: &str) -> Result<T, ApiError> {
    let status = resp.status();
    resp.json::<T>().map_err(|e| ApiError::NetworkOrServer {
        status: Some(status.as_u16()),
        message: format!("parse {}: {}", label, e),
    })
}

pub(super) fn message_of(body: &serde_json::Value) -> Option<String> {
    if let Some(s) = body.as_str() {
        return Some(s.to_string());
    }
    ["error", "detail", "message"]
        .iter()
        .find_map(|k| body.get(*k).and_then(|v| v.as_str()))
        .map(str::to_string)
}

pub(super) fn classify(status: StatusCode, body: &serde_json::Value, label: &str) -> ApiError {
    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthenticated(
            message_of(body).unwrap_or_else(|| "token invalid or expired".to_string()),
        ),
        StatusCode::NOT_FOUND => ApiError::NotFound(
            message_of(body).unwrap_or_else(|| format!("{}: not found", label)),
        ),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            ApiError::Validation(FieldErrors::from_body(body))
        }
        other => ApiError::NetworkOrServer {
            status: Some(other.as_u16()),
            message: message_of(body).unwrap_or_else(|| format!("{} failed", label)),
        },
    }
}
