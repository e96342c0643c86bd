//! Minimal HTTP client bound to a fixed base URL.
//!
//! Issues GET/POST/PUT/DELETE requests, classifies each response by its
//! declared content type, defers body decoding until the caller asks for
//! it, and maps failed status codes to typed errors.

pub mod client;
pub mod content;
pub mod error;
pub mod multipart;
pub mod response;

pub use client::{Client, RequestOptions};
pub use content::{ContentKind, classify};
pub use error::{Error, check_status};
pub use multipart::FormField;
pub use response::{Blob, ClientResponse, DeferredBody, Payload};
