//! Rendering of evaluation results and errors.
//!
//! Text output is the `Result: <value>` line printed by the REPL; JSON output
//! carries the numeral system or the error kind for programmatic callers.

use crate::common::error::{CalcError, ErrorKind};
use crate::common::types::{CalcValue, NumeralSystem};
use crate::common::OutputFormat;
use serde::Serialize;

#[derive(Serialize)]
#[serde(untagged)]
enum JsonValue<'a> {
    Arabic(i64),
    Roman(&'a str),
}

#[derive(Serialize)]
struct JsonResult<'a> {
    result: JsonValue<'a>,
    system: NumeralSystem,
}

#[derive(Serialize)]
struct JsonErrorBody {
    kind: ErrorKind,
    message: String,
}

#[derive(Serialize)]
struct JsonError {
    error: JsonErrorBody,
}

pub fn format_result(value: &CalcValue, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("Result: {}", value),
        OutputFormat::Json => {
            let result = match value {
                CalcValue::Arabic(n) => JsonValue::Arabic(*n),
                CalcValue::Roman(s) => JsonValue::Roman(s),
            };
            format_json(&JsonResult {
                result,
                system: value.system(),
            })
        }
    }
}

/// Text errors carry only the message; the caller adds the `Error:` label.
pub fn format_error(err: &CalcError, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => err.to_string(),
        OutputFormat::Json => format_json(&JsonError {
            error: JsonErrorBody {
                kind: err.kind(),
                message: err.to_string(),
            },
        }),
    }
}

fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        serde_json::json!({
            "error": { "kind": "serialization", "message": e.to_string() }
        })
        .to_string()
    })
}
