//! Executor layer for the Proxmox VE API.
//!
//! An [`ApiExecutor`] performs authenticated, blocking requests against an API path such as
//! `/nodes/pve1/qemu/100/status/current`. Everything above it (the path tree in `pve-api`) only
//! composes paths and forwards to one of the verbs provided here.

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

use http::Method;
use serde::Serialize;

mod error;
pub use error::Error;

mod response;
pub use response::{ApiResponse, ApiResponseData};

mod api_path_builder;
pub use api_path_builder::ApiPathBuilder;

pub mod auth;
pub use auth::{AuthenticationKind, StaticAuth, TicketAuth, Token, TokenProvider};

pub mod options;
pub use options::{ClientOptions, ProxyConfig, TlsOptions};

#[cfg(feature = "client")]
mod client;
#[cfg(feature = "client")]
pub use client::Client;

/// Output format requested from the API server, the second component of the URL
/// (`/api2/json/...`).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ResponseFormat {
    /// JSON envelope with a `data` member.
    #[default]
    Json,

    /// A raw image, only meaningful for `rrd` graph endpoints.
    Png,
}

impl ResponseFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Png => "png",
        }
    }
}

impl std::fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Backend performing the actual HTTP calls against a Proxmox VE API.
///
/// Implementations hold the connection and the authentication state. Every call is a single
/// round trip, errors are reported as they happen and never retried.
pub trait ApiExecutor {
    /// An *authenticated* request for an API path (no hostname, no `/api2/<format>` prefix).
    ///
    /// `params` are sent as query arguments for `GET` and `DELETE` and as the request body
    /// otherwise.
    fn request_format<P>(
        &self,
        format: ResponseFormat,
        method: Method,
        path: &str,
        params: Option<&P>,
    ) -> Result<ApiResponse, Error>
    where
        P: Serialize + ?Sized;

    /// Calls `self.request_format` with [`ResponseFormat::Json`].
    fn request<P>(&self, method: Method, path: &str, params: Option<&P>) -> Result<ApiResponse, Error>
    where
        P: Serialize + ?Sized,
    {
        self.request_format(ResponseFormat::Json, method, path, params)
    }

    /// Calls `self.request` with `Method::GET`.
    fn get<P>(&self, path: &str, params: Option<&P>) -> Result<ApiResponse, Error>
    where
        P: Serialize + ?Sized,
    {
        self.request(Method::GET, path, params)
    }

    /// Calls `self.request` with `Method::PUT`.
    fn put<P>(&self, path: &str, params: &P) -> Result<ApiResponse, Error>
    where
        P: Serialize + ?Sized,
    {
        self.request(Method::PUT, path, Some(params))
    }

    /// Calls `self.request` with `Method::POST`.
    fn post<P>(&self, path: &str, params: &P) -> Result<ApiResponse, Error>
    where
        P: Serialize + ?Sized,
    {
        self.request(Method::POST, path, Some(params))
    }

    /// Calls `self.request` with `Method::DELETE`.
    fn delete<P>(&self, path: &str, params: Option<&P>) -> Result<ApiResponse, Error>
    where
        P: Serialize + ?Sized,
    {
        self.request(Method::DELETE, path, params)
    }
}

impl<C> ApiExecutor for &C
where
    C: ApiExecutor,
{
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
        C::request_format(self, format, method, path, params)
    }
}

impl<C> ApiExecutor for std::sync::Arc<C>
where
    C: ApiExecutor,
{
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
        C::request_format(self, format, method, path, params)
    }
}

impl<C> ApiExecutor for std::rc::Rc<C>
where
    C: ApiExecutor,
{
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
        C::request_format(self, format, method, path, params)
    }
}
