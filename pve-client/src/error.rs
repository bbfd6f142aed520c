use http::StatusCode;

type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors surfaced by an [`ApiExecutor`](crate::ApiExecutor).
///
/// Path nodes pass these through unchanged, callers are expected to branch on the variant or on
/// [`status`](Error::status).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request never produced an HTTP response (connection, DNS, TLS or IO failure).
    #[error("transport error - {0}")]
    Transport(#[source] BoxedError),

    /// The server rejected the credentials (401) or the permissions (403).
    #[error("authentication failed (status = {status}): {message}")]
    Auth { status: StatusCode, message: String },

    /// The server answered with any other error status.
    ///
    /// `message` comes from the response body: the envelope's `message` and `errors`, or the
    /// plain text body. The JSON formatter often reports its error text only in the HTTP status
    /// line and sends `{"data":null}`, the reason phrase is not available to the client, so
    /// `message` falls back to the status code's canonical reason in that case.
    #[error("api error (status = {status}): {message}")]
    Api { status: StatusCode, message: String },

    /// No credentials were available when the request was about to be sent.
    #[error("not authenticated")]
    Unauthorized,

    /// The response did not look like what the API is supposed to return.
    #[error("bad api response - {0}")]
    BadApi(String, #[source] Option<BoxedError>),

    /// The request was rejected before it was sent, e.g. an empty path segment or query
    /// parameters which are not an object.
    #[error("invalid request - {0}")]
    InvalidRequest(String),

    /// The client was configured with something it cannot use.
    #[error("invalid configuration - {0}")]
    Config(String),

    /// A local failure, such as serializing parameters or building the request.
    #[error("{0}")]
    Internal(&'static str, #[source] BoxedError),
}

impl Error {
    /// Classify an error status returned by the server.
    ///
    /// `401` and `403` become [`Error::Auth`], everything else [`Error::Api`].
    pub fn api<T: std::fmt::Display>(status: StatusCode, msg: T) -> Self {
        let message = msg.to_string();
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Self::Auth { status, message },
            _ => Self::Api { status, message },
        }
    }

    pub(crate) fn bad_api<E>(msg: impl Into<String>, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::BadApi(msg.into(), Some(Box::new(err)))
    }

    pub(crate) fn internal<E>(context: &'static str, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Internal(context, Box::new(err))
    }

    #[cfg(feature = "client")]
    pub(crate) fn transport<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Transport(Box::new(err))
    }

    /// The HTTP status for errors reported by the server.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Auth { status, .. } | Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for [`Error::Auth`] and [`Error::Unauthorized`], the cases where re-authenticating
    /// may help.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Auth { .. } | Self::Unauthorized)
    }
}
