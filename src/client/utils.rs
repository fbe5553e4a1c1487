//! Utility functions for the HTTP client helpers.
//!
//! Currently this holds the `key:value` list parser used to turn header-like
//! string lists (command-line flags, test fixtures) into a lookup map.

use std::collections::HashMap;

/// Separator between key and value in a list entry.
const SEPARATOR: char = ':';

/// Convert a list of `"key:value"` strings into a map.
///
/// Each entry is split on its first `:`; anything after that is the value,
/// further `:` characters included. Key and value are trimmed. Entries with
/// no separator, an empty key, or an empty value are dropped without notice.
/// When a key repeats, the last entry wins.
///
/// # Examples
///
/// ```
/// use flow_core_http::client::string_list_to_map;
///
/// let map = string_list_to_map(["hts:11 ", "name:", "key", "v: 1:2"]);
/// assert_eq!(map.len(), 2);
/// assert_eq!(map["hts"], "11");
/// assert_eq!(map["v"], "1:2");
/// assert!(!map.contains_key("name"));
/// assert!(!map.contains_key("key"));
/// ```
pub fn string_list_to_map<I, S>(entries: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .filter_map(|entry| {
            let (key, value) = entry.as_ref().split_once(SEPARATOR)?;
            let (key, value) = (key.trim(), value.trim());
            if key.is_empty() || value.is_empty() {
                return None;
            }
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}
