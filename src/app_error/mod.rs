//! Predefined application errors keyed by an internal status code.
//!
//! [`ApplicationError::new`] hands out an owned copy of a catalog row, so
//! decorating it with a cause or a custom message never leaks into other
//! callers.

pub mod catalog;

pub use catalog::{AppErrorCode, CatalogEntry};

use serde::{Serialize, Serializer};
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

type Cause = Arc<dyn StdError + Send + Sync + 'static>;

#[derive(Debug, Clone, Serialize)]
pub struct ApplicationError {
    pub code: AppErrorCode,
    pub http_status_code: u16,
    pub error_code: String,
    #[serde(serialize_with = "serialize_cause")]
    pub error: Option<Cause>,
    pub message: String,
}

fn serialize_cause<S: Serializer>(cause: &Option<Cause>, serializer: S) -> Result<S::Ok, S::Error> {
    match cause {
        Some(err) => serializer.serialize_str(&err.to_string()),
        None => serializer.serialize_none(),
    }
}

impl ApplicationError {
    pub fn new(code: AppErrorCode) -> Self {
        let entry = code.entry();
        Self {
            code,
            http_status_code: entry.http_status,
            error_code: entry.error_code.to_string(),
            error: None,
            message: entry.message.to_string(),
        }
    }

    /// Catalog error matching an HTTP status, if the status is in the catalog.
    pub fn from_http_status(status: u16) -> Option<Self> {
        AppErrorCode::from_http_status(status).map(Self::new)
    }

    pub fn with_error<E>(mut self, err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.error = Some(Arc::new(err));
        self
    }

    /// Attach a cause when one is present; `None` keeps the current cause.
    pub fn maybe_error<E>(self, err: Option<E>) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        match err {
            Some(err) => self.with_error(err),
            None => self,
        }
    }

    /// Override the message. An empty message is ignored.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        let message = message.into();
        if !message.is_empty() {
            self.message = message;
        }
        self
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<AppErrorCode> for ApplicationError {
    fn from(code: AppErrorCode) -> Self {
        Self::new(code)
    }
}

impl fmt::Display for ApplicationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {}",
            self.error_code, self.http_status_code, self.message
        )?;
        if let Some(err) = &self.error {
            write!(f, ": {err}")?;
        }
        Ok(())
    }
}

impl StdError for ApplicationError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.error
            .as_ref()
            .map(|err| err.as_ref() as &(dyn StdError + 'static))
    }
}
