//! Response buffering.
//!
//! Integration tests usually want the whole body in memory, whatever the
//! status code: an error response's JSON payload is as interesting as a
//! success one.

use crate::error::Result;
use crate::protocol;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

/// Read the whole response body into memory.
///
/// The status code is not checked.
pub async fn read_body(response: reqwest::Response) -> Result<Bytes> {
    Ok(response.bytes().await?)
}

/// A response whose body has been fully read.
#[derive(Debug, Clone)]
pub struct BufferedResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers, names lowercased
    pub headers: BTreeMap<String, String>,
    /// Response body
    pub body: Bytes,
}

impl BufferedResponse {
    /// Consume a `reqwest::Response`, buffering its body.
    pub async fn from_response(response: reqwest::Response) -> Result<Self> {
        let status = response.status().as_u16();
        let headers = protocol::headers_to_map(response.headers());
        let body = read_body(response).await?;
        Ok(Self {
            status,
            headers,
            body,
        })
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        protocol::header_lookup(&self.headers, name)
    }

    /// Body decoded as UTF-8, with invalid sequences replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Deserialize the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}
