//! Protocol constants and header helpers shared by the client and server halves.
//!
//! | Item | Value |
//! |------|-------|
//! | [`constants::headers::X_REQUEST_ID`] | `x-request-id` |
//! | [`constants::CONTENT_TYPE_FORM`] | `application/x-www-form-urlencoded` |
//! | [`constants::CONTENT_TYPE_JSON`] | `application/json` |

pub mod constants;
mod header_map;

pub use constants::{CONTENT_TYPE_FORM, CONTENT_TYPE_JSON};
pub use header_map::{header_lookup, headers_to_map};
