use chrono::{DateTime, Local};
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};

use crate::app_error::ApplicationError;
use crate::error::Result;

/// A fully read HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub reason: Option<&'static str>,
    pub version: String,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
    pub elapsed: Duration,
    pub received_at: DateTime<Local>,
}

impl Response {
    pub(crate) fn read(raw: reqwest::blocking::Response, started: Instant) -> reqwest::Result<Self> {
        let status = raw.status();
        let version = format!("{:?}", raw.version());
        let headers = raw.headers().clone();
        let body = raw.bytes()?.to_vec();

        Ok(Self {
            status: status.as_u16(),
            reason: status.canonical_reason(),
            version,
            headers,
            body,
            elapsed: started.elapsed(),
            received_at: Local::now(),
        })
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Status line fragment such as `200 OK`.
    pub fn status_line(&self) -> String {
        match self.reason {
            Some(reason) => format!("{} {}", self.status, reason),
            None => self.status.to_string(),
        }
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Catalog error for a client-error status, `None` otherwise.
    pub fn app_error(&self) -> Option<ApplicationError> {
        ApplicationError::from_http_status(self.status)
    }
}
