//! Line-oriented string helpers used by the request parser.

/// Whitespace as the C locale sees it: space, tab, LF, vertical tab, form
/// feed and CR. `char::is_ascii_whitespace` leaves out vertical tab.
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Strips leading and trailing whitespace, returning a view into `s`.
///
/// # Example
///
/// ```
/// # use fuzzy_nemesis::http::line::trim;
/// assert_eq!(trim("\t GET / HTTP/1.1\r\n"), "GET / HTTP/1.1");
/// assert_eq!(trim(" \x0B\x0C "), "");
/// ```
pub fn trim(s: &str) -> &str {
    s.trim_matches(is_space)
}

/// Splits `s` at the first occurrence of `sep`.
///
/// Returns the part before the separator and the remainder after it. When
/// `sep` does not occur, the whole string is the head and the remainder is
/// empty. Only the first occurrence is consumed, so splitting on `" "` twice
/// yields three fields with any further spaces left in the last one.
///
/// # Example
///
/// ```
/// # use fuzzy_nemesis::http::line::split_once;
/// assert_eq!(split_once("GET / HTTP/1.1", " "), ("GET", "/ HTTP/1.1"));
/// assert_eq!(split_once("GET", " "), ("GET", ""));
/// ```
pub fn split_once<'a>(s: &'a str, sep: &str) -> (&'a str, &'a str) {
    match s.find(sep) {
        Some(pos) => (&s[..pos], &s[pos + sep.len()..]),
        None => (s, &s[s.len()..]),
    }
}
