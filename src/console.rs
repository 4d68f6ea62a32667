//! Colorized one-line console messages on stderr.

use colored::Colorize;

pub const ERROR_PREFIX: &str = "[DEBUG-ERROR]";
pub const FATAL_PREFIX: &str = "[DEBUG-FATAL]";
pub const INFO_PREFIX: &str = "[DEBUG-INFO]";
pub const WARN_PREFIX: &str = "[DEBUG-WARN]";

pub fn format_err(msg: &str) -> String {
    format!("{ERROR_PREFIX} {msg}").red().to_string()
}

pub fn format_fatal(msg: &str) -> String {
    format!("{FATAL_PREFIX} {msg}").red().to_string()
}

pub fn format_info(msg: &str) -> String {
    format!("{INFO_PREFIX} {msg}").bright_black().to_string()
}

pub fn format_warn(msg: &str) -> String {
    format!("{WARN_PREFIX} {msg}").yellow().to_string()
}

pub fn print_err(msg: &str) {
    eprintln!("{}", format_err(msg));
}

/// Print a fatal message and terminate the process with exit code 1.
pub fn fatal_print_err(msg: &str) -> ! {
    eprintln!("{}", format_fatal(msg));
    std::process::exit(1)
}

pub fn log_info(msg: &str) {
    eprintln!("{}", format_info(msg));
}

pub fn log_warn(msg: &str) {
    eprintln!("{}", format_warn(msg));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes() {
        colored::control::set_override(false);
        assert_eq!(format_err("boom"), "[DEBUG-ERROR] boom");
        assert_eq!(format_fatal("dead"), "[DEBUG-FATAL] dead");
        assert_eq!(format_info("hello"), "[DEBUG-INFO] hello");
        assert_eq!(format_warn("careful"), "[DEBUG-WARN] careful");
    }

    #[test]
    fn test_print_helpers_do_not_panic() {
        print_err("error line");
        log_info("info line");
        log_warn("warn line");
    }
}
