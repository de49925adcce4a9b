//! Daemon wire protocol
//!
//! Every exchange is one request line and one response line over a fresh
//! connection. A message is compact JSON terminated by a single `\n`; the
//! daemon must never emit a newline inside a message.

use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Envelope version understood by the daemon
pub const PROTOCOL_VERSION: u32 = 1;

/// Message terminator
pub const TERMINATOR: u8 = b'\n';

/// Request envelope
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Request {
    pub id: String,
    pub v: u32,
    pub method: String,
    pub params: Map<String, Value>,
}

impl Request {
    /// Build a request with a fresh id. `None` and `null` params become `{}`.
    pub fn new(method: impl Into<String>, params: Option<Value>) -> Result<Self> {
        let method = method.into();
        if method.trim().is_empty() {
            return Err(Error::Validation("Method name cannot be empty".to_string()));
        }

        let params = match params {
            None | Some(Value::Null) => Map::new(),
            Some(Value::Object(map)) => map,
            Some(other) => {
                return Err(Error::Validation(format!(
                    "Params for '{}' must be a JSON object, got {}",
                    method, other
                )));
            }
        };

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            v: PROTOCOL_VERSION,
            method,
            params,
        })
    }

    /// Serialize to a single terminated line
    pub fn to_line(&self) -> Result<Vec<u8>> {
        let mut line = serde_json::to_vec(self)?;
        line.push(TERMINATOR);
        Ok(line)
    }
}

/// Typed form of a response envelope
#[derive(Debug, Clone, PartialEq)]
pub enum Reply<T> {
    /// `ok: true`, carrying the decoded `result`
    Success(T),
    /// `ok: false`, carrying the daemon's error message
    Failure(String),
}

impl<T: DeserializeOwned> Reply<T> {
    /// Convert a raw response into a typed reply.
    ///
    /// A missing `ok` flag counts as failure. A missing or null `result`
    /// decodes as an empty object, so records with all-optional fields still
    /// succeed. A `result` of the wrong shape is a decode fault.
    pub fn from_response(response: Value) -> Result<Self> {
        let mut fields = match response {
            Value::Object(fields) => fields,
            other => {
                return Err(Error::Protocol(format!(
                    "response is not a JSON object: {}",
                    other
                )));
            }
        };

        if fields.get("ok").and_then(Value::as_bool).unwrap_or(false) {
            let result = match fields.remove("result") {
                None | Some(Value::Null) => Value::Object(Map::new()),
                Some(value) => value,
            };
            Ok(Reply::Success(serde_json::from_value(result)?))
        } else {
            Ok(Reply::Failure(error_message(fields.remove("error"))))
        }
    }
}

impl<T> Reply<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Reply::Success(_))
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            Reply::Success(value) => Some(value),
            Reply::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Reply::Success(_) => None,
            Reply::Failure(message) => Some(message),
        }
    }

    pub fn into_result(self) -> std::result::Result<T, String> {
        match self {
            Reply::Success(value) => Ok(value),
            Reply::Failure(message) => Err(message),
        }
    }
}

fn error_message(error: Option<Value>) -> String {
    match error {
        Some(Value::String(message)) => message,
        None | Some(Value::Null) => "unknown error".to_string(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProjectList;
    use serde_json::json;

    #[test]
    fn test_request_envelope_keys() {
        let req = Request::new("vercel.projects", None).unwrap();
        let line = req.to_line().unwrap();
        assert_eq!(line.last(), Some(&b'\n'));
        assert_eq!(line.iter().filter(|b| **b == b'\n').count(), 1);

        let decoded: Value = serde_json::from_slice(&line).unwrap();
        let obj = decoded.as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["id", "method", "params", "v"]);
        assert_eq!(obj["v"], 1);
        assert_eq!(obj["method"], "vercel.projects");
        assert_eq!(obj["params"], json!({}));
    }

    #[test]
    fn test_request_ids_are_fresh() {
        let a = Request::new("health", None).unwrap();
        let b = Request::new("health", None).unwrap();
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_request_rejects_bad_input() {
        assert!(matches!(
            Request::new("  ", None),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            Request::new("vercel.logs", Some(json!([1, 2]))),
            Err(Error::Validation(_))
        ));

        let req = Request::new("health", Some(Value::Null)).unwrap();
        assert!(req.params.is_empty());
    }

    #[test]
    fn test_embedded_newlines_are_escaped() {
        let req = Request::new("vercel.domains", Some(json!({"project": "a\nb"}))).unwrap();
        let line = req.to_line().unwrap();
        assert_eq!(line.iter().filter(|b| **b == b'\n').count(), 1);
    }

    #[test]
    fn test_reply_failure_message() {
        let reply: Reply<ProjectList> =
            Reply::from_response(json!({"ok": false, "error": "rate limited"})).unwrap();
        assert_eq!(reply.error(), Some("rate limited"));

        let reply: Reply<ProjectList> = Reply::from_response(json!({"ok": false})).unwrap();
        assert_eq!(reply.error(), Some("unknown error"));

        let reply: Reply<ProjectList> =
            Reply::from_response(json!({"ok": false, "error": {"code": 429}})).unwrap();
        assert_eq!(reply.error(), Some(r#"{"code":429}"#));

        let reply: Reply<ProjectList> =
            Reply::from_response(json!({"result": {"projects": []}})).unwrap();
        assert!(!reply.is_success());
    }

    #[test]
    fn test_reply_success_defaults() {
        let reply: Reply<ProjectList> = Reply::from_response(json!({"ok": true})).unwrap();
        assert!(reply.success().unwrap().projects.is_empty());

        let reply: Reply<ProjectList> =
            Reply::from_response(json!({"ok": true, "result": {"projects": [{"name": "web"}]}}))
                .unwrap();
        let projects = reply.into_result().unwrap().projects;
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name.as_deref(), Some("web"));
    }

    #[test]
    fn test_reply_shape_faults() {
        let err = Reply::<ProjectList>::from_response(json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, Error::Protocol(_)));

        let err =
            Reply::<ProjectList>::from_response(json!({"ok": true, "result": {"projects": 7}}))
                .unwrap_err();
        assert!(err.is_decode());
    }
}
