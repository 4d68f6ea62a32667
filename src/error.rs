use chrono::NaiveDate;
use colored::Colorize;
use std::fmt;

#[derive(Debug)]
pub enum BunkerError {
    InvalidArgument {
        name: String,
        message: String,
    },
    DateOutOfRange {
        start: NaiveDate,
        count: i64,
    },
    UnsupportedMethod(String),
    InvalidUrl {
        url: String,
        message: String,
    },
    InvalidHeader {
        name: String,
        message: String,
    },
    Serialization(serde_json::Error),
    Request {
        url: String,
        source: reqwest::Error,
    },
    Other(anyhow::Error),
}

impl BunkerError {
    pub fn invalid_argument(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn invalid_url(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            message: message.into(),
        }
    }

    pub fn invalid_header(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidHeader {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn request(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Request {
            url: url.into(),
            source,
        }
    }
}

impl fmt::Display for BunkerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { name, message } => {
                write!(
                    f,
                    "{} Invalid argument {}: {}",
                    "✗".red().bold(),
                    name.yellow(),
                    message
                )
            }
            Self::DateOutOfRange { start, count } => {
                write!(
                    f,
                    "{} Adding {} business days to {} leaves the supported calendar range",
                    "✗".red().bold(),
                    count,
                    start.to_string().yellow()
                )
            }
            Self::UnsupportedMethod(method) => {
                write!(
                    f,
                    "{} Unsupported HTTP method: {}",
                    "✗".red().bold(),
                    method.yellow()
                )
            }
            Self::InvalidUrl { url, message } => {
                writeln!(f, "{} Invalid URL: {}", "✗".red().bold(), url.yellow())?;
                write!(f, "  {} {}", "→".blue(), message)
            }
            Self::InvalidHeader { name, message } => {
                writeln!(f, "{} Invalid header: {}", "✗".red().bold(), name.yellow())?;
                write!(f, "  {} {}", "→".blue(), message)
            }
            Self::Serialization(err) => {
                write!(f, "{} Serialization failed: {}", "✗".red().bold(), err)
            }
            Self::Request { url, source } => {
                writeln!(f, "{} Request failed: {}", "✗".red().bold(), url.yellow())?;
                write!(f, "  {} {}", "→".blue(), source)
            }
            Self::Other(err) => write!(f, "{} {}", "✗".red().bold(), err),
        }
    }
}

impl std::error::Error for BunkerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialization(err) => Some(err),
            Self::Request { source, .. } => Some(source),
            Self::Other(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for BunkerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err)
    }
}

impl From<anyhow::Error> for BunkerError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err)
    }
}

pub type Result<T> = std::result::Result<T, BunkerError>;
