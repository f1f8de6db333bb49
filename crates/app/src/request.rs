//! Loading a [`RunRequest`] from a JSON file, stdin, or defaults.

use std::fmt;
use std::io::Read;

use emissions::pricing::{Pricing, ReferencePricing};
use emissions::RunRequest;

#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "Failed to read run request: {e}"),
            LoadError::Json(e) => write!(f, "Invalid run request JSON: {e}"),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Json(e)
    }
}

/// `None` runs the defaults, `"-"` reads stdin, anything else is a file path.
pub fn load(source: Option<&str>) -> Result<RunRequest, LoadError> {
    let text = match source {
        None => return Ok(with_resolved_pricing(RunRequest::default())),
        Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
        Some(path) => std::fs::read_to_string(path)?,
    };
    parse(&text)
}

/// A request without a `pricing` block gets its quotes from the oracle.
pub fn parse(text: &str) -> Result<RunRequest, LoadError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let has_pricing = value.get("pricing").is_some();
    let request: RunRequest = serde_json::from_value(value)?;
    Ok(if has_pricing {
        request
    } else {
        with_resolved_pricing(request)
    })
}

fn with_resolved_pricing(request: RunRequest) -> RunRequest {
    RunRequest {
        pricing: Pricing::resolve(&ReferencePricing),
        ..request
    }
}
