//! Static table of predefined application errors.
//!
//! Every [`AppErrorCode`] has exactly one [`CatalogEntry`]. The reverse lookups
//! (by `IE-NN` string and by HTTP status) are built once on first use and are
//! never mutated afterwards.

use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Internal status codes, numbered 1..=29 and mirroring HTTP 4xx semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum AppErrorCode {
    BadRequest = 1,
    UnAuthorized,
    PaymentRequired,
    Forbidden,
    NotFound,
    MethodNotAllowed,
    NotAcceptable,
    ProxyAuthRequired,
    RequestTimeout,
    Conflict,
    Gone,
    LengthRequired,
    PreconditionFailed,
    RequestEntityTooLarge,
    RequestUriTooLong,
    UnsupportedMediaType,
    RequestedRangeNotSatisfiable,
    ExpectationFailed,
    Teapot,
    MisdirectedRequest,
    UnprocessableEntity,
    Locked,
    FailedDependency,
    TooEarly,
    UpgradeRequired,
    PreconditionRequired,
    TooManyRequests,
    RequestHeaderFieldsTooLarge,
    UnavailableForLegalReasons,
}

/// One row of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub code: AppErrorCode,
    pub http_status: u16,
    pub error_code: &'static str,
    pub message: &'static str,
}

const fn entry(
    code: AppErrorCode,
    http_status: u16,
    error_code: &'static str,
    message: &'static str,
) -> CatalogEntry {
    CatalogEntry {
        code,
        http_status,
        error_code,
        message,
    }
}

// Row order must follow the numeric value of AppErrorCode.
const ENTRIES: [CatalogEntry; 29] = [
    entry(AppErrorCode::BadRequest, 400, "IE-01", "Bad Request"),
    entry(AppErrorCode::UnAuthorized, 401, "IE-02", "Not Authorized"),
    entry(AppErrorCode::PaymentRequired, 402, "IE-03", "Payment Required"),
    entry(AppErrorCode::Forbidden, 403, "IE-04", "Forbidden"),
    entry(AppErrorCode::NotFound, 404, "IE-05", "Not Found"),
    entry(AppErrorCode::MethodNotAllowed, 405, "IE-06", "Method Not Allowed"),
    entry(AppErrorCode::NotAcceptable, 406, "IE-07", "Not Acceptable"),
    entry(AppErrorCode::ProxyAuthRequired, 407, "IE-08", "Proxy Auth Required"),
    entry(AppErrorCode::RequestTimeout, 408, "IE-09", "Request Timeout"),
    entry(AppErrorCode::Conflict, 409, "IE-10", "Conflict"),
    entry(AppErrorCode::Gone, 410, "IE-11", "Gone"),
    entry(AppErrorCode::LengthRequired, 411, "IE-12", "Length Required"),
    entry(AppErrorCode::PreconditionFailed, 412, "IE-13", "Precondition Failed"),
    entry(
        AppErrorCode::RequestEntityTooLarge,
        413,
        "IE-14",
        "Request Entity Too Large",
    ),
    entry(AppErrorCode::RequestUriTooLong, 414, "IE-15", "Request URI Too Long"),
    entry(
        AppErrorCode::UnsupportedMediaType,
        415,
        "IE-16",
        "Unsupported Media Type",
    ),
    entry(
        AppErrorCode::RequestedRangeNotSatisfiable,
        416,
        "IE-17",
        "Requested Range Not Satisfiable",
    ),
    entry(AppErrorCode::ExpectationFailed, 417, "IE-18", "Expectation Failed"),
    entry(AppErrorCode::Teapot, 418, "IE-19", "Teapot"),
    entry(AppErrorCode::MisdirectedRequest, 421, "IE-20", "Misdirected Request"),
    entry(
        AppErrorCode::UnprocessableEntity,
        422,
        "IE-21",
        "Unprocessable Entity",
    ),
    entry(AppErrorCode::Locked, 423, "IE-22", "Locked"),
    entry(AppErrorCode::FailedDependency, 424, "IE-23", "Failed Dependency"),
    entry(AppErrorCode::TooEarly, 425, "IE-24", "Too Early"),
    entry(AppErrorCode::UpgradeRequired, 426, "IE-25", "Upgrade Required"),
    entry(
        AppErrorCode::PreconditionRequired,
        428,
        "IE-26",
        "Precondition Required",
    ),
    entry(AppErrorCode::TooManyRequests, 429, "IE-27", "Too Many Requests"),
    entry(
        AppErrorCode::RequestHeaderFieldsTooLarge,
        431,
        "IE-28",
        "Request Header Fields Too Large",
    ),
    entry(
        AppErrorCode::UnavailableForLegalReasons,
        451,
        "IE-29",
        "Unavailable For Legal Reasons",
    ),
];

static BY_ERROR_CODE: LazyLock<HashMap<&'static str, AppErrorCode>> =
    LazyLock::new(|| ENTRIES.iter().map(|e| (e.error_code, e.code)).collect());

static BY_HTTP_STATUS: LazyLock<HashMap<u16, AppErrorCode>> =
    LazyLock::new(|| ENTRIES.iter().map(|e| (e.http_status, e.code)).collect());

impl AppErrorCode {
    pub const ALL: [AppErrorCode; 29] = [
        Self::BadRequest,
        Self::UnAuthorized,
        Self::PaymentRequired,
        Self::Forbidden,
        Self::NotFound,
        Self::MethodNotAllowed,
        Self::NotAcceptable,
        Self::ProxyAuthRequired,
        Self::RequestTimeout,
        Self::Conflict,
        Self::Gone,
        Self::LengthRequired,
        Self::PreconditionFailed,
        Self::RequestEntityTooLarge,
        Self::RequestUriTooLong,
        Self::UnsupportedMediaType,
        Self::RequestedRangeNotSatisfiable,
        Self::ExpectationFailed,
        Self::Teapot,
        Self::MisdirectedRequest,
        Self::UnprocessableEntity,
        Self::Locked,
        Self::FailedDependency,
        Self::TooEarly,
        Self::UpgradeRequired,
        Self::PreconditionRequired,
        Self::TooManyRequests,
        Self::RequestHeaderFieldsTooLarge,
        Self::UnavailableForLegalReasons,
    ];

    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn entry(self) -> &'static CatalogEntry {
        &ENTRIES[usize::from(self.as_u8() - 1)]
    }

    pub fn http_status(self) -> u16 {
        self.entry().http_status
    }

    pub fn error_code(self) -> &'static str {
        self.entry().error_code
    }

    pub fn default_message(self) -> &'static str {
        self.entry().message
    }

    pub fn from_http_status(status: u16) -> Option<Self> {
        BY_HTTP_STATUS.get(&status).copied()
    }

    pub fn from_error_code(error_code: &str) -> Option<Self> {
        BY_ERROR_CODE
            .get(error_code.trim().to_ascii_uppercase().as_str())
            .copied()
    }
}

impl TryFrom<u8> for AppErrorCode {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1..=29 => Ok(Self::ALL[usize::from(value - 1)]),
            other => Err(other),
        }
    }
}

impl fmt::Display for AppErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.error_code())
    }
}

impl Serialize for AppErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

/// Every catalog row, in code order.
pub fn entries() -> &'static [CatalogEntry] {
    &ENTRIES
}
