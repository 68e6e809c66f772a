//! In-memory transport for tests.

use super::{ApiError, Transport};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;

enum Canned {
    Json(Value),
    Status(u16, String),
    Timeout,
}

/// Serves canned responses by path; unknown paths answer 404.
#[derive(Default)]
pub struct FakeTransport {
    responses: HashMap<String, Canned>,
    requests: RefCell<Vec<String>>,
    missing_key: bool,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(mut self, path: &str, body: Value) -> Self {
        self.responses.insert(path.to_string(), Canned::Json(body));
        self
    }

    pub fn with_status(mut self, path: &str, status: u16, body: &str) -> Self {
        self.responses.insert(path.to_string(), Canned::Status(status, body.to_string()));
        self
    }

    pub fn with_timeout(mut self, path: &str) -> Self {
        self.responses.insert(path.to_string(), Canned::Timeout);
        self
    }

    /// Every request fails as if no API key were configured.
    pub fn without_api_key(mut self) -> Self {
        self.missing_key = true;
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Transport for FakeTransport {
    fn get(&self, path: &str) -> Result<Value, ApiError> {
        if self.missing_key {
            return Err(ApiError::MissingApiKey);
        }
        self.requests.borrow_mut().push(path.to_string());
        match self.responses.get(path) {
            Some(Canned::Json(body)) => Ok(body.clone()),
            Some(Canned::Status(status, body)) => {
                Err(ApiError::Status { status: *status, body: body.clone() })
            }
            Some(Canned::Timeout) => Err(ApiError::Timeout),
            None => Err(ApiError::Status { status: 404, body: "not found".to_string() }),
        }
    }
}
