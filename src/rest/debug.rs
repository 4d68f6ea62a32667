//! Human-readable request/response report printed in debug mode.

use chrono::Local;
use std::fmt::Write;

use super::{Requester, Response};

const RULE: &str = "==========================================================";

pub fn render_report(request: &Requester, response: &Response) -> String {
    let headers = request
        .headers()
        .iter()
        .map(|(name, value)| format!("{}: {}", name, value.to_str().unwrap_or("<binary>")))
        .collect::<Vec<_>>()
        .join(", ");
    let request_body = request
        .body_bytes()
        .map(|b| String::from_utf8_lossy(&b).into_owned())
        .unwrap_or_default();

    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "\tREQUEST");
    let _ = writeln!(out, "\t{RULE}");
    let _ = writeln!(
        out,
        "\t{} / {} / {}",
        Local::now().format("%Y/%m/%d %H:%M:%S"),
        request.method(),
        response.version
    );
    let _ = writeln!(out, "\tURL             : {}", request.url());
    let _ = writeln!(out, "\tHEADERS         : [{headers}]");
    let _ = writeln!(out, "\tBODY REQUEST    :");
    let _ = writeln!(out, "\t{request_body}");
    let _ = writeln!(out);
    let _ = writeln!(out, "\tRESPONSE");
    let _ = writeln!(out, "\t{RULE}");
    let _ = writeln!(out, "\tSTATUS          : {}", response.status_line());
    let _ = writeln!(out, "\tRECEIVED AT     : {}", response.received_at.to_rfc2822());
    let _ = writeln!(
        out,
        "\tRESPONSE TIME   : {}",
        response.elapsed.as_secs_f64()
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "\tBODY RESPONSE   :");
    let _ = writeln!(out, "\t{}", response.text());
    let _ = writeln!(out);
    let _ = write!(out, "\t{RULE}");
    out
}
