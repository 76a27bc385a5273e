//! HTTP client for the dashboard's API
//!
//! All requests go through [`ApiClient::request`], which joins the path onto the
//! configured origin, applies the default JSON headers and classifies failures
//! into [`ApiError`]. Failures are logged here and handed back to the caller.

use crate::error::ApiError;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

/// Per-request settings. Anything left unset falls back to the defaults:
/// GET, no extra headers, no body.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: HeaderMap::new(),
            body: None,
        }
    }
}

impl RequestOptions {
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Add a header, replacing any default of the same name at send time
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    pub fn json_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Client bound to one server origin
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    origin: String,
}

impl ApiClient {
    pub fn new(origin: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            origin: origin.trim_end_matches('/').to_string(),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// GET `path` with default options
    pub async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.request(path, RequestOptions::default()).await
    }

    /// Send one request and return the parsed JSON body.
    ///
    /// Errors are logged before being returned; nothing is retried.
    pub async fn request(&self, path: &str, options: RequestOptions) -> Result<Value, ApiError> {
        let method = options.method.clone();
        let result = self.send(path, options).await;

        if let Err(e) = &result {
            tracing::error!(
                %method,
                path,
                kind = e.kind(),
                error = %e,
                "Request failed"
            );
        }

        result
    }

    /// Like [`ApiClient::request`], then decode the JSON into `T`.
    /// A body of the wrong shape is reported as [`ApiError::Parse`].
    pub async fn request_as<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let value = self.request(path, options).await?;

        serde_json::from_value(value).map_err(|e| {
            let err = ApiError::Parse(e);
            tracing::error!(path, kind = err.kind(), error = %err, "Unexpected response shape");
            err
        })
    }

    async fn send(&self, path: &str, options: RequestOptions) -> Result<Value, ApiError> {
        let url = build_url(&self.origin, path)?;
        let headers = merge_headers(default_headers(), options.headers);

        tracing::debug!(method = %options.method, %url, "Sending request");

        let mut request_builder = self.http.request(options.method, url).headers(headers);
        if let Some(body) = &options.body {
            request_builder = request_builder.json(body);
        }

        let response = request_builder.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Headers every request carries unless the caller overrides them
pub fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

/// Merge caller headers over the defaults. A caller header replaces every
/// default value with the same (case-insensitive) name.
pub fn merge_headers(defaults: HeaderMap, overrides: HeaderMap) -> HeaderMap {
    let mut merged = defaults;

    for name in overrides.keys() {
        merged.remove(name);
    }
    for (name, value) in overrides.iter() {
        merged.append(name.clone(), value.clone());
    }

    merged
}

/// Join a request path onto the origin
pub(crate) fn build_url(origin: &str, path: &str) -> Result<Url, ApiError> {
    let origin = origin.trim_end_matches('/');
    let full = if path.starts_with('/') {
        format!("{origin}{path}")
    } else {
        format!("{origin}/{path}")
    };

    Url::parse(&full).map_err(|source| ApiError::InvalidUrl { url: full, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{ACCEPT, AUTHORIZATION};

    #[test]
    fn test_build_url_basic() {
        let url = build_url("http://localhost:8000", "/api/info").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/info");
    }

    #[test]
    fn test_build_url_with_trailing_slash_in_origin() {
        let url = build_url("http://localhost:8000/", "/health").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/health");
    }

    #[test]
    fn test_build_url_path_without_leading_slash() {
        let url = build_url("http://localhost:8000", "api/items").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/items");
    }

    #[test]
    fn test_build_url_keeps_query_string() {
        let url = build_url("https://example.com", "/api/items?limit=2").unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/items?limit=2");
    }

    #[test]
    fn test_build_url_invalid_origin() {
        let err = build_url("not a valid url", "/api/info").unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl { .. }));
    }

    #[test]
    fn test_default_headers_are_json() {
        let headers = default_headers();
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn test_merge_headers_keeps_defaults_without_overrides() {
        let merged = merge_headers(default_headers(), HeaderMap::new());
        assert_eq!(merged.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn test_merge_headers_caller_content_type_wins() {
        let mut overrides = HeaderMap::new();
        overrides.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));

        let merged = merge_headers(default_headers(), overrides);
        let values: Vec<_> = merged.get_all(CONTENT_TYPE).iter().collect();
        assert_eq!(values, vec!["text/plain"]);
    }

    #[test]
    fn test_merge_headers_adds_extra_headers() {
        let mut overrides = HeaderMap::new();
        overrides.insert(ACCEPT, HeaderValue::from_static("application/json"));
        overrides.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc"));

        let merged = merge_headers(default_headers(), overrides);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged.get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(merged.get(AUTHORIZATION).unwrap(), "Bearer abc");
    }

    #[test]
    fn test_merge_headers_name_is_case_insensitive() {
        let mut overrides = HeaderMap::new();
        overrides.insert(
            HeaderName::from_bytes(b"CONTENT-TYPE").unwrap(),
            HeaderValue::from_static("application/xml"),
        );

        let merged = merge_headers(default_headers(), overrides);
        assert_eq!(merged.get_all(CONTENT_TYPE).iter().count(), 1);
        assert_eq!(merged.get(CONTENT_TYPE).unwrap(), "application/xml");
    }

    #[test]
    fn test_request_options_default_is_plain_get() {
        let options = RequestOptions::default();
        assert_eq!(options.method, Method::GET);
        assert!(options.headers.is_empty());
        assert!(options.body.is_none());
    }

    #[test]
    fn test_request_options_builder() {
        let options = RequestOptions::default()
            .method(Method::POST)
            .header(ACCEPT, HeaderValue::from_static("*/*"))
            .json_body(serde_json::json!({"name": "x"}));

        assert_eq!(options.method, Method::POST);
        assert_eq!(options.headers.get(ACCEPT).unwrap(), "*/*");
        assert_eq!(options.body.unwrap()["name"], "x");
    }

    #[test]
    fn test_client_trims_origin() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.origin(), "http://localhost:8000");
    }
}
