use std::sync::LazyLock;

use regex::Regex;

static GET_REQUEST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"GET (\S+) HTTP").expect("GET request pattern failed to compile"));

/// Returns the path of a `GET <path> HTTP` request on this line, if any.
pub fn request_path(line: &str) -> Option<&str> {
    GET_REQUEST
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
