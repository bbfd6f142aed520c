use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::Error;

/// A response as returned by an [`ApiExecutor`](crate::ApiExecutor).
///
/// Nothing has been decoded yet: JSON endpoints are read with [`json`](ApiResponse::json) or
/// [`expect_json`](ApiResponse::expect_json), binary endpoints (RRD graphs) with
/// [`into_bytes`](ApiResponse::into_bytes).
#[derive(Clone, Debug, Default)]
pub struct ApiResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

/// API responses can have additional *attributes* added to their data, `total` for example.
#[derive(Clone, Debug)]
pub struct ApiResponseData<T> {
    pub attribs: HashMap<String, Value>,
    pub data: T,
}

impl ApiResponse {
    /// Build a successful JSON response wrapping `data` in the usual `{"data": ...}` envelope.
    pub fn from_data(data: Value) -> Self {
        Self {
            status: 200,
            content_type: Some("application/json;charset=UTF-8".to_string()),
            body: serde_json::json!({ "data": data }).to_string().into_bytes(),
        }
    }

    /// Decode the envelope and return the untyped `data` member.
    pub fn json(self) -> Result<Value, Error> {
        Ok(self.expect_json::<Value>()?.data)
    }

    /// Decode the envelope and deserialize the `data` member into `T`.
    pub fn expect_json<T>(self) -> Result<ApiResponseData<T>, Error>
    where
        T: for<'de> Deserialize<'de>,
    {
        self.assert_json_content_type()?;

        serde_json::from_slice::<RawApiResponse<T>>(&self.body)
            .map_err(|err| Error::bad_api("failed to parse api response", err))?
            .check()
    }

    /// The raw body, for endpoints which do not answer with JSON.
    pub fn into_bytes(self) -> Vec<u8> {
        self.body
    }

    /// The raw body of a binary endpoint.
    ///
    /// A JSON body means the server answered with its envelope instead of the requested format
    /// (for example because the request went to `/api2/json`), which is an error here. An
    /// envelope reporting a failure is turned into the matching API error.
    pub fn into_binary(self) -> Result<Vec<u8>, Error> {
        if self.mime_type() != Some("application/json") {
            return Ok(self.body);
        }

        if let Ok(raw) = serde_json::from_slice::<RawApiResponse<Value>>(&self.body) {
            if let Some(err) = raw.failure() {
                return Err(err);
            }
        }
        Err(Error::BadApi(
            "expected a binary body, got a json response".to_string(),
            None,
        ))
    }

    fn mime_type(&self) -> Option<&str> {
        self.content_type
            .as_deref()
            .and_then(|v| v.split(';').next())
            .map(str::trim)
    }

    fn assert_json_content_type(&self) -> Result<(), Error> {
        match self.mime_type() {
            Some("application/json") => Ok(()),
            Some(other) => Err(Error::BadApi(
                format!("expected json body, got {other}"),
                None,
            )),
            None => Err(Error::BadApi(
                "expected json body, but no Content-Type was sent".to_string(),
                None,
            )),
        }
    }
}

#[derive(Deserialize)]
pub(crate) struct RawApiResponse<T> {
    #[serde(default, deserialize_with = "perl::deserialize_u16")]
    pub(crate) status: Option<u16>,
    pub(crate) message: Option<String>,
    #[serde(default, deserialize_with = "perl::deserialize_bool")]
    success: Option<bool>,
    data: Option<T>,

    #[serde(default)]
    pub(crate) errors: HashMap<String, String>,

    #[serde(default, flatten)]
    attribs: HashMap<String, Value>,
}

impl<T> RawApiResponse<T>
where
    T: for<'de> Deserialize<'de>,
{
    /// The `json` formatter has no `success` member, only an explicit failure counts.
    fn check(self) -> Result<ApiResponseData<T>, Error> {
        if let Some(err) = self.failure() {
            return Err(err);
        }

        // a missing `data` member also happens for `null`, and T might be deserializable from it
        let data = match self.data {
            Some(data) => data,
            None => serde_json::from_value(Value::Null)
                .map_err(|_| Error::BadApi("api returned no data".to_string(), None))?,
        };

        Ok(ApiResponseData {
            data,
            attribs: self.attribs,
        })
    }
}

impl<T> RawApiResponse<T> {
    fn failure(&self) -> Option<Error> {
        if self.success != Some(false) {
            return None;
        }
        let status = http::StatusCode::from_u16(self.status.unwrap_or(400))
            .unwrap_or(http::StatusCode::BAD_REQUEST);
        Some(Error::api(status, self.error_message()))
    }

    /// The server's message with the per-parameter errors appended, one per line.
    pub(crate) fn error_message(&self) -> String {
        use std::fmt::Write;

        let mut message = self
            .message
            .as_deref()
            .map(|m| m.trim_end().to_string())
            .unwrap_or_else(|| "no message provided".to_string());

        let mut errors: Vec<_> = self.errors.iter().collect();
        errors.sort();
        for (param, error) in errors {
            let _ = write!(message, "\n{param}: {}", error.trim_end());
        }
        message
    }
}

/// The perl API server is not consistent about numbers and booleans, they may come as strings.
mod perl {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize_u16<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(n)) => n
                .as_u64()
                .and_then(|n| u16::try_from(n).ok())
                .map(Some)
                .ok_or_else(|| D::Error::custom("status out of range")),
            Some(Value::String(s)) => s.parse().map(Some).map_err(D::Error::custom),
            Some(_) => Err(D::Error::custom("expected a number")),
        }
    }

    pub fn deserialize_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(b)),
            Some(Value::Number(n)) => Ok(Some(n.as_u64() != Some(0))),
            Some(Value::String(s)) => match s.as_str() {
                "1" | "true" | "yes" | "on" => Ok(Some(true)),
                "0" | "false" | "no" | "off" => Ok(Some(false)),
                _ => Err(D::Error::custom("expected a boolean")),
            },
            Some(_) => Err(D::Error::custom("expected a boolean")),
        }
    }
}
