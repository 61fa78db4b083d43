use fuzzy_nemesis::http::line::{is_space, split_once, trim};

#[test]
fn test_trim_strips_both_ends() {
    assert_eq!(trim("  GET / HTTP/1.1\r\n"), "GET / HTTP/1.1");
    assert_eq!(trim("\tvalue\t"), "value");
}

#[test]
fn test_trim_handles_all_c_whitespace() {
    assert_eq!(trim("\x0B\x0Cx\r\n"), "x");
    assert!(is_space('\x0B'));
    assert!(!is_space('_'));
}

#[test]
fn test_trim_keeps_inner_whitespace() {
    assert_eq!(trim(" a  b "), "a  b");
}

#[test]
fn test_trim_all_whitespace_is_empty() {
    assert_eq!(trim(" \r\n\t"), "");
    assert_eq!(trim(""), "");
}

#[test]
fn test_trim_is_idempotent() {
    let samples = [
        "",
        "   ",
        "GET / HTTP/1.1\r\n",
        "\r\n",
        " \x0B mixed\tcontent \x0C",
        "no-whitespace",
    ];

    for s in samples {
        assert_eq!(trim(trim(s)), trim(s), "not idempotent for {:?}", s);
    }
}

#[test]
fn test_split_once_first_occurrence_only() {
    assert_eq!(split_once("a b c", " "), ("a", "b c"));
}

#[test]
fn test_split_once_missing_separator() {
    let (head, rest) = split_once("GET", " ");
    assert_eq!(head, "GET");
    assert_eq!(rest, "");
}

#[test]
fn test_split_once_multi_char_separator() {
    assert_eq!(split_once("Host: example.com", ": "), ("Host", "example.com"));
}

#[test]
fn test_split_once_separator_at_edges() {
    assert_eq!(split_once(" x", " "), ("", "x"));
    assert_eq!(split_once("x ", " "), ("x", ""));
}
