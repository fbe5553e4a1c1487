//! Header names and content types.

/// Content type sent with urlencoded form bodies.
pub const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";

/// Content type sent with JSON bodies.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Header names.
pub mod headers {
    use http::HeaderName;

    /// Correlation id stamped on requests and responses (`X-Request-Id`).
    pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_header_name() {
        assert_eq!(headers::X_REQUEST_ID.as_str(), "x-request-id");
    }

    #[test]
    fn test_content_types() {
        assert_eq!(CONTENT_TYPE_FORM, "application/x-www-form-urlencoded");
        assert_eq!(CONTENT_TYPE_JSON, "application/json");
    }
}
