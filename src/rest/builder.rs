use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde::Serialize;
use std::time::{Duration, Instant};
use url::Url;

use super::debug::render_report;
use super::{Method, Payload, Response, JSON};
use crate::config::Settings;
use crate::error::{BunkerError, Result};
use crate::{console, logging, utils};

/// Unvalidated request configuration collected by the builder.
#[derive(Debug, Clone, Default)]
struct Draft {
    url: String,
    method: Method,
    headers: Vec<(String, String)>,
    content_type: Option<String>,
    query: Vec<(String, String)>,
    payload: Payload,
    timeout: Option<Duration>,
    debug: Option<bool>,
}

/// Chainable request configuration.
///
/// Each method consumes and returns the builder. Once a step fails, later
/// steps are skipped and the error is returned by [`build`](Self::build) or
/// [`execute`](Self::execute).
#[derive(Debug)]
pub struct RequestBuilder {
    draft: Result<Draft>,
}

impl RequestBuilder {
    fn new(url: impl Into<String>) -> Self {
        Self {
            draft: Ok(Draft {
                url: url.into(),
                ..Draft::default()
            }),
        }
    }

    fn update(self, f: impl FnOnce(&mut Draft)) -> Self {
        self.try_update(|draft| {
            f(draft);
            Ok(())
        })
    }

    fn try_update(self, f: impl FnOnce(&mut Draft) -> Result<()>) -> Self {
        let draft = self.draft.and_then(|mut draft| {
            f(&mut draft)?;
            Ok(draft)
        });
        Self { draft }
    }

    pub fn method(self, method: Method) -> Self {
        self.update(|d| d.method = method)
    }

    pub fn get(self) -> Self {
        self.method(Method::Get)
    }

    pub fn post(self) -> Self {
        self.method(Method::Post)
    }

    pub fn put(self) -> Self {
        self.method(Method::Put)
    }

    pub fn patch(self) -> Self {
        self.method(Method::Patch)
    }

    pub fn delete(self) -> Self {
        self.method(Method::Delete)
    }

    pub fn head(self) -> Self {
        self.method(Method::Head)
    }

    pub fn options(self) -> Self {
        self.method(Method::Options)
    }

    /// Set `name` to the given values, replacing any earlier values.
    pub fn header<I, V>(self, name: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        self.update(|d| {
            d.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
            d.headers
                .extend(values.into_iter().map(|v| (name.to_string(), v)));
        })
    }

    /// Append header pairs.
    pub fn headers<I, K, V>(self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let pairs: Vec<(String, String)> = headers
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.update(|d| d.headers.extend(pairs))
    }

    /// Append headers from a JSON object whose values are strings or arrays
    /// of strings.
    pub fn headers_json(self, headers: &serde_json::Value) -> Self {
        self.try_update(|d| {
            let object = headers
                .as_object()
                .ok_or_else(|| BunkerError::invalid_header("headers", "expected a JSON object"))?;
            for (name, value) in object {
                match value {
                    serde_json::Value::String(s) => d.headers.push((name.clone(), s.clone())),
                    serde_json::Value::Array(items) => {
                        for item in items {
                            let s = item.as_str().ok_or_else(|| {
                                BunkerError::invalid_header(
                                    name.as_str(),
                                    format!("unsupported header value {item}"),
                                )
                            })?;
                            d.headers.push((name.clone(), s.to_string()));
                        }
                    }
                    other => {
                        return Err(BunkerError::invalid_header(
                            name.as_str(),
                            format!("unsupported header value {other}"),
                        ))
                    }
                }
            }
            Ok(())
        })
    }

    /// Set the content type. A blank value selects JSON.
    pub fn content_type(self, content_type: &str) -> Self {
        let content_type = if utils::is_empty_string(content_type) {
            JSON.to_string()
        } else {
            content_type.trim().to_string()
        };
        self.update(|d| d.content_type = Some(content_type))
    }

    pub fn query(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let pair = (key.into(), value.into());
        self.update(|d| d.query.push(pair))
    }

    pub fn json<T: Serialize + ?Sized>(self, body: &T) -> Self {
        let value = serde_json::to_value(body);
        self.try_update(|d| {
            d.payload = Payload::Json(value?);
            Ok(())
        })
    }

    pub fn text(self, body: impl Into<String>) -> Self {
        let body = body.into();
        self.update(|d| d.payload = Payload::Text(body))
    }

    pub fn form<I, K, V>(self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let pairs: Vec<(String, String)> = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.update(|d| d.payload = Payload::Form(pairs))
    }

    pub fn timeout(self, timeout: Duration) -> Self {
        self.update(|d| d.timeout = Some(timeout))
    }

    pub fn debug(self, debug: bool) -> Self {
        self.update(|d| d.debug = Some(debug))
    }

    /// Validate the accumulated configuration.
    pub fn build(self) -> Result<Requester> {
        self.build_with(&Settings::from_env())
    }

    /// Validate using explicit settings for anything the builder left unset.
    pub fn build_with(self, settings: &Settings) -> Result<Requester> {
        let draft = self.draft?;

        let mut url = Url::parse(draft.url.trim())
            .map_err(|e| BunkerError::invalid_url(draft.url.as_str(), e.to_string()))?;
        if !draft.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&draft.query);
        }

        let mut headers = HeaderMap::new();
        for (name, value) in &draft.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| BunkerError::invalid_header(name.as_str(), e.to_string()))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|e| BunkerError::invalid_header(name.as_str(), e.to_string()))?;
            headers.append(header_name, header_value);
        }

        let content_type = draft
            .content_type
            .as_deref()
            .or_else(|| draft.payload.default_content_type());
        if let Some(content_type) = content_type {
            if !headers.contains_key(CONTENT_TYPE) {
                let value = HeaderValue::from_str(content_type)
                    .map_err(|e| BunkerError::invalid_header("content-type", e.to_string()))?;
                headers.insert(CONTENT_TYPE, value);
            }
        }

        Ok(Requester {
            url,
            method: draft.method,
            headers,
            payload: draft.payload,
            timeout: draft.timeout.unwrap_or(settings.http_timeout),
            debug: draft.debug.unwrap_or(settings.debug),
        })
    }

    /// Validate and send in one step.
    pub fn execute(self) -> Result<Response> {
        self.build()?.execute()
    }
}

/// A validated request, ready to be sent any number of times.
#[derive(Debug, Clone)]
pub struct Requester {
    url: Url,
    method: Method,
    headers: HeaderMap,
    payload: Payload,
    timeout: Duration,
    debug: bool,
}

impl Requester {
    pub fn builder(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(url)
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Body bytes that `execute` sends, empty for methods without a body.
    pub fn body_bytes(&self) -> Result<Vec<u8>> {
        if self.method.allows_body() {
            self.payload.to_bytes()
        } else {
            Ok(Vec::new())
        }
    }

    pub fn execute(&self) -> Result<Response> {
        let result = self.send();
        if self.debug {
            match &result {
                Ok(response) => console::log_info(&render_report(self, response)),
                Err(err) => console::print_err(&err.to_string()),
            }
        }
        result
    }

    fn send(&self) -> Result<Response> {
        let started = Instant::now();
        logging::log_http_request(self.method.as_str(), self.url.as_str(), None);

        if !self.method.allows_body() && !self.payload.is_empty() {
            tracing::warn!(method = %self.method, "Request body ignored for this method");
        }
        let body = self.body_bytes()?;

        let client = Client::builder()
            .cookie_store(true)
            .timeout(self.timeout)
            .build()
            .map_err(|e| BunkerError::request(self.url.as_str(), e))?;

        let mut request = client
            .request(self.method.into(), self.url.clone())
            .headers(self.headers.clone());
        if !body.is_empty() {
            request = request.body(body);
        }

        let response = request
            .send()
            .and_then(|raw| Response::read(raw, started))
            .map_err(|e| BunkerError::request(self.url.as_str(), e))?;

        logging::log_http_request(self.method.as_str(), self.url.as_str(), Some(response.status));
        logging::log_performance("http_request", response.elapsed.as_millis() as u64);
        Ok(response)
    }
}
