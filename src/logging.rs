use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize structured logging based on verbosity level
pub fn init_logging(verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bunker=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bunker=warn,error"))
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    if verbose {
        tracing::debug!("Verbose logging enabled");
    }

    Ok(())
}

/// Log HTTP requests
pub fn log_http_request(method: &str, url: &str, status: Option<u16>) {
    if let Some(status_code) = status {
        tracing::info!(
            method = method,
            url = url,
            status = status_code,
            "HTTP request completed"
        );
    } else {
        tracing::debug!(method = method, url = url, "HTTP request initiated");
    }
}

/// Log performance metrics
pub fn log_performance(operation: &str, duration_ms: u64) {
    tracing::debug!(
        operation = operation,
        duration_ms = duration_ms,
        "Operation performance"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice() {
        // The second call fails because a global subscriber is already set
        let _ = init_logging(true);
        assert!(init_logging(false).is_err());
    }

    #[test]
    fn test_logging_functions() {
        log_http_request("GET", "https://example.com", Some(200));
        log_http_request("POST", "https://example.com", None);
        log_performance("add_business_days", 3);
    }
}
