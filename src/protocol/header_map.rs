//! Conversions between `http::HeaderMap` and plain string maps.

use http::HeaderMap;
use std::collections::BTreeMap;

/// Flatten a header map into lowercase-name → value pairs.
///
/// Values that are not visible ASCII are skipped. When a header repeats, the
/// values are joined with `", "` in the order they appear.
///
/// # Examples
///
/// ```
/// use flow_core_http::protocol::headers_to_map;
/// use http::{HeaderMap, HeaderValue};
///
/// let mut headers = HeaderMap::new();
/// headers.insert("X-Request-Id", HeaderValue::from_static("abc"));
/// assert_eq!(headers_to_map(&headers)["x-request-id"], "abc");
/// ```
pub fn headers_to_map(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut out: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in headers {
        let Ok(value) = value.to_str() else {
            continue;
        };
        out.entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(value);
            })
            .or_insert_with(|| value.to_string());
    }
    out
}

/// Case-insensitive lookup in a map produced by [`headers_to_map`].
pub fn header_lookup<'a>(headers: &'a BTreeMap<String, String>, name: &str) -> Option<&'a str> {
    headers.get(&name.to_ascii_lowercase()).map(String::as_str)
}
