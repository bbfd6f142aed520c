use http::header::CONTENT_TYPE;
use http::{Method, StatusCode};
use serde::Serialize;
use serde_json::Value;

use crate::response::RawApiResponse;
use crate::{
    ApiExecutor, ApiPathBuilder, ApiResponse, ClientOptions, Error, ResponseFormat, StaticAuth,
    TlsOptions, TokenProvider,
};

/// Blocking Proxmox VE API client backed by a [`ureq::Agent`].
///
/// ```no_run
/// use pve_client::{ApiExecutor, Client, StaticAuth, Token};
///
/// # fn main() -> Result<(), pve_client::Error> {
/// let auth = StaticAuth::with_token(Token::new("root@pam!automation", "secret"));
/// let client = Client::new("https://pve.example.com:8006", auth)?;
/// let version = client.get("/version", None::<&()>)?.json()?;
/// println!("running {}", version["version"]);
/// # Ok(())
/// # }
/// ```
pub struct Client<A = StaticAuth> {
    base_url: String,
    auth: A,
    agent: ureq::Agent,
}

impl<A: TokenProvider> Client<A> {
    /// Create a client for `https://host:port` with the default options.
    pub fn new(base_url: impl Into<String>, auth: A) -> Result<Self, Error> {
        Self::with_options(base_url, auth, ClientOptions::default())
    }

    pub fn with_options(
        base_url: impl Into<String>,
        auth: A,
        options: ClientOptions,
    ) -> Result<Self, Error> {
        let base_url = base_url.into();
        let base_url = base_url.trim_end_matches('/');
        if !base_url.starts_with("https://") && !base_url.starts_with("http://") {
            return Err(Error::Config(format!(
                "api url must start with https:// or http://, got '{base_url}'"
            )));
        }

        Ok(Self {
            base_url: base_url.to_string(),
            auth,
            agent: build_agent(&options)?,
        })
    }

    /// The url request paths are appended to for `format`, e.g. `https://host:8006/api2/json`.
    pub fn api_url(&self, format: ResponseFormat) -> String {
        format!("{}/api2/{format}", self.base_url)
    }

    /// The credentials source, to log in or out.
    pub fn auth(&self) -> &A {
        &self.auth
    }

    fn build_url(
        &self,
        format: ResponseFormat,
        method: &Method,
        path: &str,
        params: Option<&Value>,
    ) -> Result<String, Error> {
        let url = ApiPathBuilder::new(format!("{}{path}", self.api_url(format)));
        Ok(match params {
            Some(params) if params_in_query(method) => url.params(params)?.build(),
            _ => url.build(),
        })
    }
}

fn params_in_query(method: &Method) -> bool {
    *method == Method::GET || *method == Method::DELETE
}

fn build_agent(options: &ClientOptions) -> Result<ureq::Agent, Error> {
    let tls = ureq::tls::TlsConfig::builder()
        .provider(ureq::tls::TlsProvider::NativeTls)
        .root_certs(ureq::tls::RootCerts::PlatformVerifier)
        .disable_verification(options.tls == TlsOptions::Insecure)
        .build();

    let mut builder = ureq::Agent::config_builder()
        .tls_config(tls)
        .http_status_as_error(false)
        .user_agent(
            options
                .user_agent
                .as_deref()
                .unwrap_or(concat!("pve-client/", env!("CARGO_PKG_VERSION"))),
        )
        .timeout_global(options.timeout);

    if let Some(proxy) = &options.proxy {
        let proxy = ureq::Proxy::new(&proxy.to_proxy_string())
            .map_err(|err| Error::internal("invalid proxy configuration", err))?;
        builder = builder.proxy(Some(proxy));
    }

    Ok(builder.build().into())
}

/// Error responses usually still carry the JSON envelope with a message and parameter errors.
fn error_message(status: StatusCode, body: &[u8]) -> String {
    if let Ok(raw) = serde_json::from_slice::<RawApiResponse<Value>>(body) {
        if raw.message.is_some() || !raw.errors.is_empty() {
            return raw.error_message();
        }
    } else {
        let text = String::from_utf8_lossy(body);
        let text = text.trim();
        if !text.is_empty() {
            return text.to_string();
        }
    }

    status
        .canonical_reason()
        .unwrap_or("unknown error")
        .to_string()
}

impl<A: TokenProvider> ApiExecutor for Client<A> {
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
        let auth = self.auth.authentication()?;

        let params = params
            .map(serde_json::to_value)
            .transpose()
            .map_err(|err| Error::internal("failed to serialize parameters", err))?
            .filter(|params| !params.is_null());

        let url = self.build_url(format, &method, path, params.as_ref())?;
        log::debug!("{method} {path} ({format})");

        let body = match params {
            Some(params) if !params_in_query(&method) => Some(params.to_string()),
            _ => None,
        };

        let request = auth.set_auth_headers(http::Request::builder().method(method).uri(url));
        let response = match body {
            Some(body) => self.agent.run(
                request
                    .header(CONTENT_TYPE, "application/json")
                    .body(body)
                    .map_err(|err| Error::internal("failed to build request", err))?,
            ),
            None => self.agent.run(
                request
                    .body(ureq::SendBody::none())
                    .map_err(|err| Error::internal("failed to build request", err))?,
            ),
        }
        .map_err(Error::transport)?;

        let (parts, mut body) = response.into_parts();
        let body = body.read_to_vec().map_err(Error::transport)?;

        if !parts.status.is_success() {
            if matches!(
                parts.status,
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
            ) {
                log::warn!("{path}: request rejected with status {}", parts.status);
            }
            return Err(Error::api(parts.status, error_message(parts.status, &body)));
        }

        Ok(ApiResponse {
            status: parts.status.as_u16(),
            content_type: parts
                .headers
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string),
            body,
        })
    }
}
