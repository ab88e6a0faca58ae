use std::str::FromStr;

use serde::Deserialize;

use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::sensor::Reading;

/// Response body style.
///
/// Exactly one style is active for the lifetime of the process; the choice
/// is made once in configuration, never per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Html,
    #[default]
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            other => Err(anyhow::anyhow!("unknown output format: {other}")),
        }
    }
}

/// Renders a reading into a complete response in the given style.
///
/// Pure function of its inputs: the same reading and format always produce
/// byte-identical output, and the failure path cannot panic because the
/// sentinel is plain text.
pub fn render(reading: &Reading, format: OutputFormat) -> Response {
    match format {
        OutputFormat::Html => ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", "text/html")
            .header("Connection", "close")
            .body(html_body(reading).into_bytes())
            .build(),
        OutputFormat::Json => ResponseBuilder::new(StatusCode::Ok)
            // Long-standing quirk: the json style spells this header with a
            // lowercase "type". Clients match on it, keep the spelling.
            .header("Content-type", "application/json")
            .header("Connection", "close")
            .body(json_body(reading).into_bytes())
            .build(),
    }
}

/// One channel as two-decimal text, or the literal `failed`.
fn channel(value: Option<f32>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "failed".to_string(),
    }
}

fn html_body(reading: &Reading) -> String {
    // The degree sign goes out as a numeric character reference so the body
    // stays pure ASCII.
    format!(
        "<!DOCTYPE HTML>\r\n\
         <html>\r\n\
         <head></head><body>\r\n\
         <h1>Temperature and Humidity</h1>\r\n\
         <h3>Temperature: {}&#176;C</h3>\r\n\
         <h3>Humidity: {}%</h3>\r\n\
         </body></html>\r\n",
        channel(reading.temperature),
        channel(reading.humidity),
    )
}

fn json_body(reading: &Reading) -> String {
    // The failure sentinel is emitted as a bare token, which makes the
    // payload invalid json on the failure path. Existing consumers expect
    // the token unquoted; do not quote it.
    format!(
        "{{\"temperature\":{},\"humidity\":{}}}",
        channel(reading.temperature),
        channel(reading.humidity),
    )
}
