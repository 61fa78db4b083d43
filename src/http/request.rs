use std::fmt;

/// HTTP protocol versions the server accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    /// HTTP/1.0
    Http10,
    /// HTTP/1.1
    Http11,
}

impl Version {
    /// Parses a version token. The match is exact and case-sensitive.
    ///
    /// # Example
    ///
    /// ```
    /// # use fuzzy_nemesis::http::request::Version;
    /// assert_eq!(Version::from_token("HTTP/1.0"), Some(Version::Http10));
    /// assert_eq!(Version::from_token("http/1.1"), None);
    /// assert_eq!(Version::from_token("HTTP/2.0"), None);
    /// ```
    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            "HTTP/1.0" => Some(Version::Http10),
            "HTTP/1.1" => Some(Version::Http11),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Version::Http10 => "HTTP/1.0",
            Version::Http11 => "HTTP/1.1",
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed HTTP request line.
///
/// The method is any non-empty token; it is not checked against a list of
/// known methods. The path is taken verbatim: no percent-decoding and no
/// query-string separation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The request method token (e.g. "GET")
    pub method: String,
    /// The raw request target (e.g. "/index.htm")
    pub path: String,
    /// HTTP version
    pub version: Version,
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.method, self.path, self.version)
    }
}
