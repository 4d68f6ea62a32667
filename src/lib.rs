//! Helper utilities for internal applications: business-day date arithmetic,
//! a catalog of predefined application errors, a request builder over
//! `reqwest`, and colorized console logging.

pub mod app_error;
pub mod chronos;
pub mod config;
pub mod console;
pub mod error;
pub mod logging;
pub mod rest;
pub mod utils;

pub use app_error::{AppErrorCode, ApplicationError};
pub use chronos::{add_business_days, try_add_business_days, HolidaySet};
pub use error::{BunkerError, Result};
pub use rest::{Method, RequestBuilder, Requester, Response};
