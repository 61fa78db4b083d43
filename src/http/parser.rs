use std::fmt;

use crate::http::line::{split_once, trim};
use crate::http::request::{Request, Version};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Method, path or version is empty.
    Malformed,
    /// The version token is not HTTP/1.0 or HTTP/1.1.
    UnsupportedVersion(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Malformed => f.write_str("malformed request line"),
            ParseError::UnsupportedVersion(v) => write!(f, "unsupported version '{}'", v),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses `<method> <path> <version>`.
///
/// The line is trimmed, then split on the first space and again on the next
/// one. Any extra spaces end up inside the version token, which then fails
/// the version check.
pub fn parse_request_line(line: &str) -> Result<Request, ParseError> {
    let line = trim(line);
    let (method, rest) = split_once(line, " ");
    let (path, version) = split_once(rest, " ");

    if method.is_empty() || path.is_empty() || version.is_empty() {
        return Err(ParseError::Malformed);
    }

    let version = Version::from_token(version)
        .ok_or_else(|| ParseError::UnsupportedVersion(version.to_string()))?;

    Ok(Request {
        method: method.to_string(),
        path: path.to_string(),
        version,
    })
}
