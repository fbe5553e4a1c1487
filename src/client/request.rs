//! Request constructors.
//!
//! These build a `reqwest::Request` without needing a client, so a test can
//! prepare a request, inspect it, and hand it to [`HttpClient::execute`]
//! later.
//!
//! | Constructor | Method | Body | Content-Type |
//! |-------------|--------|------|--------------|
//! | [`new_get_request`] | GET | none, params in the query string | none |
//! | [`new_form_post_request`] | POST | urlencoded params | `application/x-www-form-urlencoded` |
//! | [`new_json_post_request`] | POST | JSON, `null` when absent | `application/json` |
//!
//! [`HttpClient::execute`]: super::HttpClient::execute

use crate::error::{FlowError, Result};
use crate::protocol::{CONTENT_TYPE_FORM, CONTENT_TYPE_JSON};
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Body, Method, Request};
use serde::Serialize;
use serde_json::Value;
use url::{form_urlencoded, Url};

/// Request parameters: names mapped to arbitrary JSON values.
pub type Params = serde_json::Map<String, Value>;

/// Build a GET request, appending `params` to the URL's query string.
///
/// Existing query pairs in `url` are kept. See [`encode_form`] for how
/// values are stringified.
///
/// # Examples
///
/// ```
/// use flow_core_http::client::{new_get_request, Params};
/// use serde_json::json;
///
/// let mut params = Params::new();
/// params.insert("name".into(), json!("hts"));
/// let req = new_get_request("http://localhost:8080/hello?a=1", Some(&params)).unwrap();
/// assert_eq!(req.url().query(), Some("a=1&name=hts"));
/// ```
pub fn new_get_request(url: &str, params: Option<&Params>) -> Result<Request> {
    let mut url = Url::parse(url)?;
    if let Some(params) = params.filter(|p| !p.is_empty()) {
        let pairs = form_pairs(params)?;
        url.query_pairs_mut().extend_pairs(pairs);
    }
    Ok(Request::new(Method::GET, url))
}

/// Build a POST request with a urlencoded form body.
///
/// `None` and an empty map both send an empty body; the content type is
/// always set.
pub fn new_form_post_request(url: &str, params: Option<&Params>) -> Result<Request> {
    let body = match params {
        Some(params) => encode_form(params)?,
        None => String::new(),
    };
    post_request(url, CONTENT_TYPE_FORM, Body::from(body))
}

/// Build a POST request with a JSON body.
///
/// `None` is sent as the JSON literal `null`. Give the type explicitly when
/// passing `None`, e.g. `new_json_post_request::<Params>(url, None)`.
///
/// # Examples
///
/// ```
/// use flow_core_http::client::{new_json_post_request, Params};
///
/// let req = new_json_post_request::<Params>("http://localhost:8080/test", None).unwrap();
/// assert_eq!(req.body().and_then(|b| b.as_bytes()), Some(&b"null"[..]));
/// ```
pub fn new_json_post_request<T>(url: &str, body: Option<&T>) -> Result<Request>
where
    T: Serialize + ?Sized,
{
    let payload = match body {
        Some(body) => serde_json::to_vec(body)?,
        None => b"null".to_vec(),
    };
    post_request(url, CONTENT_TYPE_JSON, Body::from(payload))
}

/// Urlencode `params` as `application/x-www-form-urlencoded`.
///
/// Strings are sent verbatim, `null` as an empty value, numbers and booleans
/// as their JSON text. An array repeats the key once per element. Objects,
/// and arrays nested inside arrays, have no form representation and fail
/// with [`FlowError::Form`].
pub fn encode_form(params: &Params) -> Result<String> {
    let pairs = form_pairs(params)?;
    Ok(form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish())
}

fn form_pairs(params: &Params) -> Result<Vec<(&str, String)>> {
    let mut pairs = Vec::with_capacity(params.len());
    for (key, value) in params {
        match value {
            Value::Array(items) => {
                for item in items {
                    pairs.push((key.as_str(), scalar_to_string(key, item)?));
                }
            }
            other => pairs.push((key.as_str(), scalar_to_string(key, other)?)),
        }
    }
    Ok(pairs)
}

fn scalar_to_string(key: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Null => Ok(String::new()),
        Value::Bool(_) | Value::Number(_) => Ok(value.to_string()),
        Value::Array(_) | Value::Object(_) => Err(FlowError::Form(format!(
            "parameter '{}' is not a scalar",
            key
        ))),
    }
}

fn post_request(url: &str, content_type: &'static str, body: Body) -> Result<Request> {
    let mut request = Request::new(Method::POST, Url::parse(url)?);
    request
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    *request.body_mut() = Some(body);
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: Value) -> Params {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    fn body_bytes(request: &Request) -> &[u8] {
        request.body().and_then(|b| b.as_bytes()).unwrap_or_default()
    }

    #[test]
    fn test_get_request_without_params() {
        let req = new_get_request("http://localhost:8080/hello", None).unwrap();
        assert_eq!(req.method(), Method::GET);
        assert_eq!(req.url().as_str(), "http://localhost:8080/hello");
        assert!(req.body().is_none());
    }

    #[test]
    fn test_get_request_empty_params_leaves_url() {
        let req = new_get_request("http://localhost:8080/hello", Some(&Params::new())).unwrap();
        assert_eq!(req.url().query(), None);
    }

    #[test]
    fn test_get_request_encodes_params() {
        let p = params(json!({"debug": true, "name": "h t&s", "page": 2}));
        let req = new_get_request("http://localhost:8080/hello", Some(&p)).unwrap();
        assert_eq!(req.url().query(), Some("debug=true&name=h+t%26s&page=2"));
    }

    #[test]
    fn test_get_request_invalid_url() {
        let err = new_get_request("not a url", None).unwrap_err();
        assert!(matches!(err, FlowError::InvalidUrl(_)));
    }

    #[test]
    fn test_form_post_none_has_empty_body() {
        let req = new_form_post_request("http://localhost:8080/testPost", None).unwrap();
        assert_eq!(req.method(), Method::POST);
        assert_eq!(req.headers()[CONTENT_TYPE], CONTENT_TYPE_FORM);
        assert!(body_bytes(&req).is_empty());
    }

    #[test]
    fn test_form_post_with_params() {
        let p = params(json!({"name": "hts"}));
        let req = new_form_post_request("http://localhost:8080/testPost", Some(&p)).unwrap();
        assert_eq!(body_bytes(&req), b"name=hts");
    }

    #[test]
    fn test_form_arrays_repeat_key() {
        let p = params(json!({"empty": null, "id": [1, 2]}));
        assert_eq!(encode_form(&p).unwrap(), "empty=&id=1&id=2");
    }

    #[test]
    fn test_form_rejects_objects() {
        let p = params(json!({"nested": {"a": 1}}));
        let err = encode_form(&p).unwrap_err();
        assert!(matches!(err, FlowError::Form(msg) if msg.contains("nested")));
    }

    #[test]
    fn test_json_post_none_sends_null() {
        let req = new_json_post_request::<Params>("http://localhost:8080/test", None).unwrap();
        assert_eq!(req.headers()[CONTENT_TYPE], CONTENT_TYPE_JSON);
        assert_eq!(body_bytes(&req), b"null");
    }

    #[test]
    fn test_json_post_empty_map() {
        let req = new_json_post_request("http://localhost:8080/test", Some(&Params::new())).unwrap();
        assert_eq!(body_bytes(&req), b"{}");
    }

    #[test]
    fn test_json_post_serializable_struct() {
        #[derive(Serialize)]
        struct Login<'a> {
            name: &'a str,
        }
        let req =
            new_json_post_request("http://localhost:8080/test", Some(&Login { name: "hts" }))
                .unwrap();
        assert_eq!(body_bytes(&req), br#"{"name":"hts"}"#);
    }
}
