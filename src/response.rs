//! Deferred response bodies and the kind-dispatched deserializer.

use bytes::Bytes;
use log::debug;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

use crate::content::{self, ContentKind};
use crate::error::Error;
use crate::multipart::{self, FormField};

/// An opaque binary body that retains its declared media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    pub media_type: Option<String>,
    pub bytes: Bytes,
}

/// A decoded response body, one variant per [`ContentKind`].
///
/// `Xml` and `Html` have no variant of their own: the deserializer reads
/// them as plain text, so they surface as [`Payload::Text`].
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(serde_json::Value),
    Text(String),
    Blob(Blob),
    ArrayBuffer(Vec<u8>),
    Bytes(Bytes),
    FormData(Vec<FormField>),
}

/// An unread response body.
///
/// Holds the underlying response so status metadata can be inspected
/// without touching the body; decoding happens only when the caller asks
/// for it. Both reading operations take `self` by value, so the body is
/// consumed at most once and a second read is a compile error rather than
/// a runtime one.
#[derive(Debug)]
pub struct DeferredBody {
    response: reqwest::Response,
    kind: ContentKind,
}

impl DeferredBody {
    pub(crate) fn new(response: reqwest::Response) -> Self {
        let kind = content::classify(response.headers());
        Self { response, kind }
    }

    /// The kind the body will be decoded as.
    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    /// Reads and decodes the body with the strategy matching its
    /// classified kind. Decode failures surface as [`Error::Decode`].
    #[tracing::instrument(skip(self))]
    pub async fn read(self) -> Result<Payload, Error> {
        debug!("Decoding response body as {:?}...", self.kind);

        let response = self.response;
        match self.kind {
            ContentKind::Json => {
                let value = response.json().await.map_err(decode_error)?;
                Ok(Payload::Json(value))
            }
            ContentKind::Blob => {
                let media_type = content_type_value(&response);
                let bytes = response.bytes().await.map_err(decode_error)?;
                Ok(Payload::Blob(Blob { media_type, bytes }))
            }
            ContentKind::ArrayBuffer => {
                let bytes = response.bytes().await.map_err(decode_error)?;
                Ok(Payload::ArrayBuffer(bytes.to_vec()))
            }
            ContentKind::Bytes => {
                let bytes = response.bytes().await.map_err(decode_error)?;
                Ok(Payload::Bytes(bytes))
            }
            ContentKind::FormData => {
                // The boundary parameter lives in the full header value,
                // which the classifier discarded.
                let content_type = content_type_value(&response).unwrap_or_default();
                let body = response.text().await.map_err(decode_error)?;
                let fields = multipart::parse_form_data(&content_type, &body)?;
                Ok(Payload::FormData(fields))
            }
            ContentKind::Text | ContentKind::Xml | ContentKind::Html => {
                let text = response.text().await.map_err(decode_error)?;
                Ok(Payload::Text(text))
            }
        }
    }

    /// Reads the body and parses it as JSON into `T`, regardless of the
    /// classified kind.
    #[tracing::instrument(skip(self))]
    pub async fn json<T: DeserializeOwned>(self) -> Result<T, Error> {
        self.response.json().await.map_err(decode_error)
    }
}

/// The value returned for every successful request: status metadata plus
/// the still-unread body.
#[derive(Debug)]
pub struct ClientResponse {
    pub status: u16,
    pub status_text: Option<String>,
    pub body: DeferredBody,
}

impl ClientResponse {
    pub(crate) fn new(response: reqwest::Response) -> Self {
        let status = response.status();
        Self {
            status: status.as_u16(),
            status_text: status.canonical_reason().map(str::to_string),
            body: DeferredBody::new(response),
        }
    }
}

fn content_type_value(response: &reqwest::Response) -> Option<String> {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

fn decode_error(e: reqwest::Error) -> Error {
    Error::Decode(e.to_string())
}
