//! The generic node every endpoint type is built on.

use std::fmt;

use http::Method;
use serde::Serialize;
use serde_json::Value;

use pve_client::{ApiExecutor, ApiResponse, Error, ResponseFormat};

/// Separator between path segments.
pub const SEPARATOR: char = '/';

/// Append `segment` to `parent`, yielding a path which again ends in a separator.
///
/// The segment is appended literally, only separators around it are dropped so that a fixed
/// segment written as `"/nodes"` cannot produce a double slash. An empty segment still adds a
/// (then empty) path component: the result is not a valid API path, and the verbs of a
/// [`PathNode`] refuse to dispatch it.
///
/// ```
/// use pve_api::join_path;
///
/// assert_eq!(join_path("/", "nodes"), "/nodes/");
/// assert_eq!(join_path("/nodes/", "/pve1/"), "/nodes/pve1/");
/// assert_eq!(join_path("/nodes/", ""), "/nodes//");
/// ```
pub fn join_path(parent: &str, segment: &str) -> String {
    let segment = segment.trim_matches(SEPARATOR);

    let mut path = String::with_capacity(parent.len() + segment.len() + 2);
    path.push_str(parent);
    if !path.ends_with(SEPARATOR) {
        path.push(SEPARATOR);
    }
    path.push_str(segment);
    path.push(SEPARATOR);
    path
}

/// One position in the API's resource hierarchy.
///
/// A node owns its composed path and a handle to the executor, both fixed at construction.
/// Creating children is free of I/O, only the verbs reach the executor, with exactly one call
/// each. A path containing an empty segment (e.g. `user("")`) fails with
/// [`Error::InvalidRequest`] without any call, it would otherwise address the parent
/// collection.
#[derive(Clone, Debug)]
pub struct PathNode<E> {
    executor: E,
    path: String,
}

impl<E> PathNode<E> {
    /// The root of the hierarchy, `/`.
    pub fn root(executor: E) -> Self {
        Self {
            executor,
            path: SEPARATOR.to_string(),
        }
    }

    /// A node for `segment` below `parent_path`.
    pub fn new(executor: E, parent_path: &str, segment: &str) -> Self {
        Self {
            executor,
            path: join_path(parent_path, segment),
        }
    }

    /// The composed path, always ending in `/`.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// The path of an operation addressed relative to this node, such as `acl` below `/access/`.
    pub fn suffixed(&self, suffix: &str) -> String {
        format!("{}{}", self.path, suffix.trim_start_matches(SEPARATOR))
    }

    /// The path, unless one of its segments is empty.
    fn checked_path(&self) -> Result<&str, Error> {
        if self.path.contains("//") {
            return Err(Error::InvalidRequest(format!(
                "empty path segment in '{}'",
                self.path
            )));
        }
        Ok(&self.path)
    }
}

impl<E: Clone> PathNode<E> {
    /// A fresh node one segment deeper.
    pub fn child(&self, segment: impl fmt::Display) -> Self {
        Self::new(self.executor.clone(), &self.path, &segment.to_string())
    }
}

impl<E: ApiExecutor> PathNode<E> {
    /// `GET` this node's path.
    pub fn get(&self) -> Result<Value, Error> {
        self.executor.get(self.checked_path()?, None::<&()>)?.json()
    }

    /// `GET` this node's path with query parameters.
    pub fn get_with<P>(&self, params: &P) -> Result<Value, Error>
    where
        P: Serialize + ?Sized,
    {
        self.executor.get(self.checked_path()?, Some(params))?.json()
    }

    /// `GET` this node's path in another output format, without decoding the response.
    pub fn get_raw<P>(&self, format: ResponseFormat, params: Option<&P>) -> Result<ApiResponse, Error>
    where
        P: Serialize + ?Sized,
    {
        self.executor
            .request_format(format, Method::GET, self.checked_path()?, params)
    }

    pub fn put<P>(&self, params: &P) -> Result<Value, Error>
    where
        P: Serialize + ?Sized,
    {
        self.executor.put(self.checked_path()?, params)?.json()
    }

    pub fn post<P>(&self, params: &P) -> Result<Value, Error>
    where
        P: Serialize + ?Sized,
    {
        self.executor.post(self.checked_path()?, params)?.json()
    }

    pub fn delete(&self) -> Result<Value, Error> {
        self.executor.delete(self.checked_path()?, None::<&()>)?.json()
    }

    pub fn delete_with<P>(&self, params: &P) -> Result<Value, Error>
    where
        P: Serialize + ?Sized,
    {
        self.executor.delete(self.checked_path()?, Some(params))?.json()
    }

    /// Call an operation addressed by a fixed suffix below this node, e.g. `status/current`.
    pub fn call<P>(&self, method: Method, suffix: &str, params: Option<&P>) -> Result<Value, Error>
    where
        P: Serialize + ?Sized,
    {
        self.call_raw(method, suffix, params)?.json()
    }

    /// Like [`call`](Self::call), without decoding the response.
    pub fn call_raw<P>(
        &self,
        method: Method,
        suffix: &str,
        params: Option<&P>,
    ) -> Result<ApiResponse, Error>
    where
        P: Serialize + ?Sized,
    {
        self.checked_path()?;
        self.executor.request(method, &self.suffixed(suffix), params)
    }
}
