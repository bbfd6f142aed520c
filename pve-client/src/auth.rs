use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::Error;

/// The header name for the CSRF prevention token.
pub const CSRF_HEADER_NAME: &str = "CSRFPreventionToken";

/// Cookie name under which Proxmox VE expects the ticket.
pub const TICKET_COOKIE_NAME: &str = "PVEAuthCookie";

/// How the client is logged in to the remote.
#[derive(Clone, Debug)]
pub enum AuthenticationKind {
    /// With an API Ticket.
    Ticket(TicketAuth),

    /// With a token.
    Token(Token),
}

impl AuthenticationKind {
    /// Add the headers for this kind of authentication to a request.
    pub fn set_auth_headers(&self, request: http::request::Builder) -> http::request::Builder {
        match self {
            Self::Ticket(auth) => auth.set_auth_headers(request),
            Self::Token(token) => token.set_auth_headers(request),
        }
    }

    /// The user (or token owner) these credentials belong to.
    pub fn userid(&self) -> &str {
        match self {
            Self::Ticket(auth) => &auth.userid,
            Self::Token(token) => &token.userid,
        }
    }
}

impl From<TicketAuth> for AuthenticationKind {
    fn from(auth: TicketAuth) -> Self {
        Self::Ticket(auth)
    }
}

impl From<Token> for AuthenticationKind {
    fn from(auth: Token) -> Self {
        Self::Token(auth)
    }
}

/// A ticket obtained from `POST /access/ticket`, together with its CSRF prevention token.
#[derive(Clone, Debug)]
pub struct TicketAuth {
    pub userid: String,
    pub ticket: String,
    pub csrfprevention_token: String,
}

impl TicketAuth {
    /// Extract the ticket from the `data` member of a successful `POST /access/ticket` call.
    pub fn from_ticket_response(data: &Value) -> Result<Self, Error> {
        let field = |name: &str| -> Result<String, Error> {
            data[name]
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| Error::BadApi(format!("ticket response without '{name}'"), None))
        };

        let ticket = field("ticket")?;
        if ticket.contains(":!tfa!") {
            return Err(Error::BadApi(
                "ticket response contains a second factor challenge".to_string(),
                None,
            ));
        }

        Ok(Self {
            userid: field("username")?,
            ticket,
            csrfprevention_token: field(CSRF_HEADER_NAME)?,
        })
    }

    /// Get the cookie in the form `PVEAuthCookie=<ticket>`.
    pub fn cookie(&self) -> String {
        format!("{TICKET_COOKIE_NAME}={}", self.ticket)
    }

    pub fn set_auth_headers(&self, request: http::request::Builder) -> http::request::Builder {
        request
            .header(http::header::COOKIE, self.cookie())
            .header(CSRF_HEADER_NAME, &self.csrfprevention_token)
    }
}

/// Data used to log in with an API token.
#[derive(Clone, Debug)]
pub struct Token {
    /// The userid including the token name, `user@realm!tokenname`.
    pub userid: String,

    /// The api token prefix, `PVEAPIToken` for Proxmox VE.
    pub prefix: String,

    /// The api token's secret value.
    pub value: String,
}

impl Token {
    /// A Proxmox VE API token.
    pub fn new(userid: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            userid: userid.into(),
            prefix: "PVEAPIToken".to_string(),
            value: value.into(),
        }
    }

    pub fn set_auth_headers(&self, request: http::request::Builder) -> http::request::Builder {
        request.header(
            http::header::AUTHORIZATION,
            format!("{}={}={}", self.prefix, self.userid, self.value),
        )
    }
}

/// Source of the credentials an executor attaches to each request.
///
/// It is queried once per request, so an implementation is free to renew tickets behind the
/// executor's back.
pub trait TokenProvider {
    fn authentication(&self) -> Result<Arc<AuthenticationKind>, Error>;
}

impl<P: TokenProvider + ?Sized> TokenProvider for Arc<P> {
    fn authentication(&self) -> Result<Arc<AuthenticationKind>, Error> {
        P::authentication(self)
    }
}

impl<P: TokenProvider + ?Sized> TokenProvider for &P {
    fn authentication(&self) -> Result<Arc<AuthenticationKind>, Error> {
        P::authentication(self)
    }
}

/// Credentials set from the outside, with no renewal.
#[derive(Debug, Default)]
pub struct StaticAuth {
    auth: Mutex<Option<Arc<AuthenticationKind>>>,
}

impl StaticAuth {
    /// Start out logged out.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: Token) -> Self {
        let this = Self::new();
        this.use_api_token(token);
        this
    }

    pub fn with_ticket(ticket: TicketAuth) -> Self {
        let this = Self::new();
        this.use_ticket(ticket);
        this
    }

    /// Replace the authentication information with an API token.
    pub fn use_api_token(&self, token: Token) {
        *self.auth.lock().unwrap() = Some(Arc::new(token.into()));
    }

    /// Replace the authentication information with a ticket.
    pub fn use_ticket(&self, ticket: TicketAuth) {
        *self.auth.lock().unwrap() = Some(Arc::new(ticket.into()));
    }

    /// Drop the current authentication information.
    pub fn logout(&self) {
        self.auth.lock().unwrap().take();
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.lock().unwrap().is_some()
    }
}

impl TokenProvider for StaticAuth {
    fn authentication(&self) -> Result<Arc<AuthenticationKind>, Error> {
        self.auth.lock().unwrap().clone().ok_or(Error::Unauthorized)
    }
}
