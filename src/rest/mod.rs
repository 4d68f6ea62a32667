//! Request builder and blocking client wrapper over `reqwest`.
//!
//! Configuration accumulates in a [`RequestBuilder`]; nothing is validated or
//! sent until the terminal [`RequestBuilder::build`] or
//! [`RequestBuilder::execute`] call. The first configuration error is carried
//! through the chain and returned there.

pub mod builder;
pub mod debug;
pub mod response;

pub use builder::{RequestBuilder, Requester};
pub use response::Response;

use std::fmt;
use std::str::FromStr;

use crate::error::BunkerError;

pub const JSON: &str = "application/json";
pub const URL_ENCODED: &str = "application/x-www-form-urlencoded";
pub const FORM: &str = "application/x-www-form-urlencoded";
pub const FORM_DATA: &str = "application/x-www-form-urlencoded";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl Method {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
        }
    }

    /// Only POST, PUT and PATCH send a request body.
    pub const fn allows_body(self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = BunkerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            "HEAD" => Ok(Self::Head),
            "OPTIONS" => Ok(Self::Options),
            _ => Err(BunkerError::UnsupportedMethod(s.to_string())),
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
            Method::Head => reqwest::Method::HEAD,
            Method::Options => reqwest::Method::OPTIONS,
        }
    }
}

/// Request body, serialized when the request is executed.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Payload {
    #[default]
    Empty,
    Json(serde_json::Value),
    Text(String),
    Form(Vec<(String, String)>),
}

impl Payload {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Body bytes as they go on the wire.
    pub fn to_bytes(&self) -> crate::Result<Vec<u8>> {
        match self {
            Self::Empty => Ok(Vec::new()),
            Self::Json(value) => Ok(serde_json::to_vec(value)?),
            Self::Text(text) => Ok(text.clone().into_bytes()),
            Self::Form(pairs) => Ok(url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(pairs)
                .finish()
                .into_bytes()),
        }
    }

    /// Content type implied by the payload kind, if any.
    pub fn default_content_type(&self) -> Option<&'static str> {
        match self {
            Self::Empty | Self::Text(_) => None,
            Self::Json(_) => Some(JSON),
            Self::Form(_) => Some(FORM),
        }
    }
}
