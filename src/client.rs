//! HTTP client bound to a fixed base URL.

use log::debug;
use reqwest::header::HeaderMap;
use reqwest::{Method, RequestBuilder, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, check_status};
use crate::response::ClientResponse;

/// Per-request options. `headers` are merged verbatim into the outgoing
/// request.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub headers: Option<HeaderMap>,
}

/// Client for a fixed base URL.
///
/// Request URLs are the plain concatenation of the base URL and the given
/// path; no slash normalization is applied, so callers supply paths with
/// their leading slash. The base URL is the only state shared between
/// requests and it is immutable, so a client can be cloned and used from
/// any number of concurrent tasks.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Creates a client for `base_url`, which must parse as an absolute
    /// URL.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        Self::with_http(base_url, reqwest::Client::new())
    }

    /// Same as [`Client::new`] but wraps a caller-supplied transport.
    pub fn with_http(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        // Validate only; the original string is kept verbatim so that
        // parsing does not introduce a trailing slash into request URLs.
        Url::parse(base_url)
            .map_err(|e| Error::Configuration(format!("invalid base URL {base_url:?}: {e}")))?;
        Ok(Self {
            http,
            base_url: base_url.to_string(),
        })
    }

    /// The base URL this client was constructed with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Performs a GET request.
    #[tracing::instrument(skip(self, options))]
    pub async fn get(
        &self,
        path: &str,
        options: &RequestOptions,
    ) -> Result<ClientResponse, Error> {
        self.dispatch(self.request(Method::GET, path, options)).await
    }

    /// Performs a POST request with a JSON-encoded body.
    #[tracing::instrument(skip(self, body, options))]
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        options: &RequestOptions,
    ) -> Result<ClientResponse, Error> {
        self.dispatch(self.request(Method::POST, path, options).json(body))
            .await
    }

    /// Performs a PUT request with a JSON-encoded body.
    #[tracing::instrument(skip(self, body, options))]
    pub async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        options: &RequestOptions,
    ) -> Result<ClientResponse, Error> {
        self.dispatch(self.request(Method::PUT, path, options).json(body))
            .await
    }

    /// Performs a DELETE request.
    #[tracing::instrument(skip(self, options))]
    pub async fn delete(
        &self,
        path: &str,
        options: &RequestOptions,
    ) -> Result<ClientResponse, Error> {
        self.dispatch(self.request(Method::DELETE, path, options))
            .await
    }

    /// Performs a GET request and parses the JSON body in one step.
    #[tracing::instrument(skip(self, options))]
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        options: &RequestOptions,
    ) -> Result<T, Error> {
        self.get(path, options).await?.body.json().await
    }

    fn request(&self, method: Method, path: &str, options: &RequestOptions) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}...", method, url);

        let mut request = self.http.request(method, url);
        if let Some(headers) = &options.headers {
            request = request.headers(headers.clone());
        }
        request
    }

    /// Sends the request, failing on a non-success status before the body
    /// is touched.
    async fn dispatch(&self, request: RequestBuilder) -> Result<ClientResponse, Error> {
        let response = request
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            check_status(status.as_u16(), status.canonical_reason())?;
        }

        Ok(ClientResponse::new(response))
    }
}
