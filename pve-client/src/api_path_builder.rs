use std::borrow::Cow;

use percent_encoding::{percent_encode, NON_ALPHANUMERIC};
use serde_json::Value;

use crate::Error;

/// Builder for API paths with a query.
///
/// ```rust
/// use pve_client::ApiPathBuilder;
///
/// let node = "pve01";
/// let query = ApiPathBuilder::new(format!("/api2/json/nodes/{node}/storage"))
///     .arg("storage", "my-storage")
///     .bool_arg("enabled", true)
///     .build();
///
/// assert_eq!(&query, "/api2/json/nodes/pve01/storage?storage=my%2Dstorage&enabled=1");
/// ```
///
/// Booleans are sent as `0`/`1` and lists are joined with NUL bytes, which is what the perl
/// API server's `split_list()` expects.
#[derive(Clone, Debug)]
pub struct ApiPathBuilder {
    url: String,
    has_query: bool,
}

impl ApiPathBuilder {
    pub fn new<'a>(base: impl Into<Cow<'a, str>>) -> Self {
        Self {
            url: base.into().into_owned(),
            has_query: false,
        }
    }

    /// Adds an argument, name and value are percent-encoded.
    pub fn arg<T: std::fmt::Display>(self, name: &str, value: T) -> Self {
        self.list_arg(name, [value])
    }

    /// Adds a boolean as `1` or `0`.
    pub fn bool_arg(self, name: &str, value: bool) -> Self {
        self.arg(name, u8::from(value))
    }

    /// Adds a list argument, the entries are separated by an encoded NUL byte.
    ///
    /// ```rust
    /// use pve_client::ApiPathBuilder;
    ///
    /// let query = ApiPathBuilder::new("/api2/json/nodes/my_node/storage")
    ///     .list_arg("content", ["backup", "images"])
    ///     .build();
    ///
    /// assert_eq!(&query, "/api2/json/nodes/my_node/storage?content=backup%00images");
    /// ```
    pub fn list_arg<I>(mut self, name: &str, values: I) -> Self
    where
        I: IntoIterator<Item: std::fmt::Display>,
    {
        self.url.push(if self.has_query { '&' } else { '?' });
        self.has_query = true;
        self.url.extend(percent_encode(name.as_bytes(), NON_ALPHANUMERIC));
        self.url.push('=');

        for (i, entry) in values.into_iter().enumerate() {
            if i > 0 {
                self.url.push_str("%00");
            }
            let entry = entry.to_string();
            self.url.extend(percent_encode(entry.as_bytes(), NON_ALPHANUMERIC));
        }
        self
    }

    /// Adds every member of a JSON object as a query argument, in the object's iteration order.
    ///
    /// `null` members are skipped and `null` itself adds nothing. Anything else which is not an
    /// object cannot be expressed as a query and is rejected.
    pub fn params(mut self, params: &Value) -> Result<Self, Error> {
        let map = match params {
            Value::Null => return Ok(self),
            Value::Object(map) => map,
            other => {
                return Err(Error::InvalidRequest(format!(
                    "query parameters must be an object, got '{other}'"
                )))
            }
        };

        for (name, value) in map {
            self = match value {
                Value::Null => self,
                Value::Bool(b) => self.bool_arg(name, *b),
                Value::String(s) => self.arg(name, s),
                Value::Array(list) => self.list_arg(name, list.iter().map(plain_value)),
                other => self.arg(name, other),
            };
        }
        Ok(self)
    }

    pub fn build(self) -> String {
        self.url
    }
}

// Strings inside lists must not keep their JSON quotes.
fn plain_value(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        Value::Bool(true) => Cow::Borrowed("1"),
        Value::Bool(false) => Cow::Borrowed("0"),
        other => Cow::Owned(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(serde::Serialize)]
    enum ClusterResourceKind {
        #[serde(rename = "vm")]
        Vm,
    }
    serde_plain::derive_display_from_serialize!(ClusterResourceKind);

    #[test]
    fn test_builder() {
        let query = ApiPathBuilder::new("/api2/json/cluster/resources")
            .arg("type", ClusterResourceKind::Vm)
            .build();
        assert_eq!(&query, "/api2/json/cluster/resources?type=vm");

        let query = ApiPathBuilder::new("/api2/json/nodes/pve1/qemu/100/config")
            .bool_arg("current", false)
            .arg("start-time", 1000)
            .list_arg("empty", Vec::<String>::new())
            .build();
        assert_eq!(
            &query,
            "/api2/json/nodes/pve1/qemu/100/config?current=0&start%2Dtime=1000&empty="
        );
    }

    #[test]
    fn test_params() {
        let params = json!({
            "ds": "cpu,mem",
            "full": true,
            "limit": 50,
            "skip": null,
            "content": ["iso", "vztmpl"],
        });

        let query = ApiPathBuilder::new("/nodes/pve1/")
            .params(&params)
            .unwrap()
            .build();

        // serde_json keeps object members sorted
        assert_eq!(
            &query,
            "/nodes/pve1/?content=iso%00vztmpl&ds=cpu%2Cmem&full=1&limit=50"
        );
    }

    #[test]
    fn test_params_must_be_an_object() {
        let query = ApiPathBuilder::new("/version")
            .params(&Value::Null)
            .unwrap()
            .build();
        assert_eq!(&query, "/version");

        for params in [json!("oops"), json!(1), json!([["full", 1]]), json!(true)] {
            assert!(
                matches!(
                    ApiPathBuilder::new("/nodes/").params(&params),
                    Err(Error::InvalidRequest(_))
                ),
                "{params} must be rejected"
            );
        }
    }
}
