use anyhow::{Context, Result};
use bunker::app_error::catalog;
use bunker::{console, logging, AppErrorCode, ApplicationError, HolidaySet, Method, Requester};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::*;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "bunker")]
#[command(version = "0.1.0")]
#[command(about = "Bunker - helpers for dates, errors and HTTP", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, help = "Enable verbose output", global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Add business days to a date, skipping weekends and holidays")]
    AddDays {
        #[arg(long, help = "Start date (YYYY-MM-DD)", value_parser = parse_date)]
        start: NaiveDate,

        #[arg(long, allow_negative_numbers = true, help = "Number of business days to add")]
        count: i64,

        #[arg(long = "holiday", help = "Holiday date (YYYY-MM-DD), repeatable", value_parser = parse_date)]
        holidays: Vec<NaiveDate>,
    },

    #[command(about = "Show an application error as JSON")]
    Error {
        #[arg(help = "Numeric code (1-29) or error code such as IE-05")]
        code: String,
    },

    #[command(about = "List the application error catalog")]
    Errors,

    #[command(about = "Send an HTTP request")]
    Request {
        #[arg(help = "HTTP method")]
        method: String,

        #[arg(help = "Request URL")]
        url: String,

        #[arg(short = 'H', long = "header", help = "Header as 'Name: value', repeatable")]
        headers: Vec<String>,

        #[arg(long, help = "Request body")]
        data: Option<String>,

        #[arg(long, help = "Send the body as JSON")]
        json: bool,

        #[arg(long, help = "Timeout in seconds")]
        timeout: Option<u64>,
    },
}

fn parse_date(raw: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| format!("invalid date '{raw}': {e}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose)?;

    match cli.command {
        Commands::AddDays {
            start,
            count,
            holidays,
        } => {
            let holidays: HolidaySet = holidays.into_iter().collect();
            let result = bunker::try_add_business_days(count, start, Some(&holidays))?;
            println!("{}", result.format("%Y-%m-%d"));
        }
        Commands::Error { code } => {
            let code = resolve_code(&code)?;
            println!("{}", ApplicationError::new(code).to_json()?);
        }
        Commands::Errors => {
            for entry in catalog::entries() {
                println!(
                    "{:>2}  {}  {}  {}",
                    entry.code.as_u8(),
                    entry.error_code.cyan(),
                    entry.http_status.to_string().yellow(),
                    entry.message
                );
            }
        }
        Commands::Request {
            method,
            url,
            headers,
            data,
            json,
            timeout,
        } => {
            send_request(&method, &url, &headers, data, json, timeout, cli.verbose)?;
        }
    }

    Ok(())
}

fn resolve_code(raw: &str) -> Result<AppErrorCode> {
    if let Ok(n) = raw.trim().parse::<u8>() {
        return AppErrorCode::try_from(n)
            .map_err(|n| anyhow::anyhow!("Unknown application error code: {}", n));
    }
    AppErrorCode::from_error_code(raw)
        .with_context(|| format!("Unknown application error code: {raw}"))
}

fn send_request(
    method: &str,
    url: &str,
    headers: &[String],
    data: Option<String>,
    json: bool,
    timeout: Option<u64>,
    verbose: bool,
) -> Result<()> {
    let method: Method = method.parse()?;
    let mut builder = Requester::builder(url).method(method);

    for header in headers {
        let (name, value) = header
            .split_once(':')
            .with_context(|| format!("Header must look like 'Name: value', got '{header}'"))?;
        builder = builder.header(name.trim(), [value.trim()]);
    }

    if let Some(body) = data {
        builder = if json {
            let value: serde_json::Value =
                serde_json::from_str(&body).context("Request body is not valid JSON")?;
            builder.json(&value)
        } else {
            builder.text(body)
        };
    }
    if let Some(secs) = timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    if verbose {
        builder = builder.debug(true);
    }

    let response = builder.execute()?;
    let status = if response.is_success() {
        response.status_line().green()
    } else {
        response.status_line().red()
    };
    println!("{status}");
    println!("{}", response.text());

    if let Some(app_error) = response.app_error() {
        console::log_warn(&app_error.to_string());
    }
    Ok(())
}
