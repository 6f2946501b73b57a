//! In-memory executor used by unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use super::api::TogglApi;
use super::client::{ApiExecutor, deletion_acknowledgement};
use super::error::TogglError;

/// Base URL used by [`test_api`].
pub const TEST_BASE_URL: &str = "https://api.test/api/v9";

/// A request captured by [`ScriptedExecutor`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: Method,
    pub url: String,
    pub body: Option<Value>,
}

/// Replays queued responses in order and records every request.
#[derive(Default)]
pub struct ScriptedExecutor {
    responses: Mutex<VecDeque<Result<Value, TogglError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful payload.
    pub fn ok(self, value: Value) -> Self {
        self.responses.lock().unwrap().push_back(Ok(value));
        self
    }

    /// Queue a failure.
    pub fn fail(self, error: TogglError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ApiExecutor for ScriptedExecutor {
    async fn execute(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<Value, TogglError> {
        self.calls.lock().unwrap().push(RecordedCall {
            method: method.clone(),
            url: url.to_string(),
            body: body.cloned(),
        });

        match self.responses.lock().unwrap().pop_front() {
            Some(response) => response,
            None if method == Method::DELETE => Ok(deletion_acknowledgement()),
            None => Err(TogglError::unexpected_response(format!(
                "no scripted response for {} {}",
                method, url
            ))),
        }
    }
}

/// A [`TogglApi`] pointed at [`TEST_BASE_URL`].
pub fn test_api(executor: Arc<ScriptedExecutor>) -> TogglApi {
    TogglApi::new(TEST_BASE_URL, executor)
}
