//! Configuration for the HTTP executor.

use std::time::Duration;

use http::Uri;

use crate::Error;

/// Options for a [`Client`](crate::Client).
#[derive(Clone, Debug, Default)]
pub struct ClientOptions {
    /// `User-Agent` header value.
    pub user_agent: Option<String>,
    /// Timeout for a whole request, none by default.
    pub timeout: Option<Duration>,
    /// Proxy configuration.
    pub proxy: Option<ProxyConfig>,
    /// Certificate verification.
    pub tls: TlsOptions,
}

impl ClientOptions {
    /// Default options with the proxy taken from `ALL_PROXY` (or `all_proxy`).
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self {
            proxy: ProxyConfig::from_proxy_env()?,
            ..Default::default()
        })
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn proxy(mut self, proxy: ProxyConfig) -> Self {
        self.proxy = Some(proxy);
        self
    }

    pub fn tls(mut self, tls: TlsOptions) -> Self {
        self.tls = tls;
        self
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TlsOptions {
    /// Default TLS verification against the platform's trust store.
    #[default]
    Verify,

    /// Insecure: ignore invalid certificates. Fresh installations use self-signed ones.
    Insecure,
}

/// HTTP Proxy Configuration
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProxyConfig {
    pub host: String,
    pub port: u16,
    pub authorization: Option<String>, // user:pass
}

impl ProxyConfig {
    /// Parse proxy config from the `ALL_PROXY` environment variable.
    pub fn from_proxy_env() -> Result<Option<ProxyConfig>, Error> {
        let all_proxy = match std::env::var("ALL_PROXY").or_else(|_| std::env::var("all_proxy")) {
            Ok(value) => value,
            Err(std::env::VarError::NotPresent) => return Ok(None),
            Err(err) => return Err(Error::internal("bad ALL_PROXY environment variable", err)),
        };

        if all_proxy.is_empty() {
            return Ok(None);
        }
        Self::parse_proxy_url(&all_proxy).map(Some)
    }

    /// Parse proxy configuration string `[http://][user:pass@]<host>[:port]`
    ///
    /// Default port is 1080 (like curl)
    pub fn parse_proxy_url(http_proxy: &str) -> Result<ProxyConfig, Error> {
        let proxy_uri: Uri = http_proxy
            .parse()
            .map_err(|err| Error::internal("failed to parse proxy url", err))?;

        let authority = proxy_uri
            .authority()
            .ok_or_else(|| Error::Config(format!("missing proxy authority in '{http_proxy}'")))?;

        match proxy_uri.scheme_str() {
            Some("http") | None => (),
            Some(scheme) => {
                return Err(Error::Config(format!(
                    "unsupported proxy scheme '{scheme}'"
                )))
            }
        }

        let authorization = authority
            .as_str()
            .rsplit_once('@')
            .map(|(userinfo, _)| userinfo.to_string());

        Ok(ProxyConfig {
            host: authority.host().to_string(),
            port: authority.port_u16().unwrap_or(1080),
            authorization,
        })
    }

    /// Assemble the proxy url, `http://[user:pass@]host:port`.
    pub fn to_proxy_string(&self) -> String {
        let host = if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]", self.host)
        } else {
            self.host.clone()
        };

        match &self.authorization {
            Some(authorization) => format!("http://{authorization}@{host}:{}", self.port),
            None => format!("http://{host}:{}", self.port),
        }
    }
}
