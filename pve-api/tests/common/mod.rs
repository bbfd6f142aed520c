#![allow(dead_code)]

use std::sync::Mutex;

use http::Method;
use serde::Serialize;
use serde_json::Value;

use pve_api::{ApiExecutor, ApiResponse, Error, ResponseFormat};

/// One request as seen by the executor.
#[derive(Clone, Debug, PartialEq)]
pub struct Call {
    pub format: ResponseFormat,
    pub method: Method,
    pub path: String,
    pub params: Option<Value>,
}

impl Call {
    /// A request for the default `json` format.
    pub fn new(method: Method, path: &str, params: Option<Value>) -> Self {
        Self {
            format: ResponseFormat::Json,
            method,
            path: path.to_string(),
            params,
        }
    }

    pub fn format(mut self, format: ResponseFormat) -> Self {
        self.format = format;
        self
    }
}

/// A small but well-formed answer of the `png` formatter.
pub fn png_response() -> ApiResponse {
    ApiResponse {
        status: 200,
        content_type: Some("image/png".to_string()),
        body: b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR".to_vec(),
    }
}

/// Executor recording every request instead of sending it, answering with a canned response or
/// a canned error.
pub struct RecordingExecutor {
    calls: Mutex<Vec<Call>>,
    json: ApiResponse,
    png: ApiResponse,
    failure: Option<fn() -> Error>,
}

impl RecordingExecutor {
    /// Answers `json` requests with `{"data":null}` and `png` requests with an image.
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            json: ApiResponse::from_data(Value::Null),
            png: png_response(),
            failure: None,
        }
    }

    /// Answers every request with `response`, whatever format was asked for.
    pub fn with_response(response: ApiResponse) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            json: response.clone(),
            png: response,
            failure: None,
        }
    }

    pub fn failing(failure: fn() -> Error) -> Self {
        Self {
            failure: Some(failure),
            ..Self::new()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// The single recorded call, panics if there were none or several.
    pub fn single_call(&self) -> Call {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one call, got {calls:?}");
        calls.into_iter().next().unwrap()
    }
}

impl ApiExecutor for RecordingExecutor {
    fn request_format<P>(
        &self,
        format: ResponseFormat,
        method: Method,
        path: &str,
        params: Option<&P>,
    ) -> Result<ApiResponse, Error>
    where
        P: Serialize + ?Sized,
    {
        let params = params.map(|p| serde_json::to_value(p).expect("params must serialize"));
        self.calls.lock().unwrap().push(Call {
            format,
            method,
            path: path.to_string(),
            params,
        });

        if let Some(failure) = self.failure {
            return Err(failure());
        }
        Ok(match format {
            ResponseFormat::Json => self.json.clone(),
            ResponseFormat::Png => self.png.clone(),
        })
    }
}
