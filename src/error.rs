//! Typed request failures and the status-code classifier.

use std::fmt;

/// Failures surfaced by the client.
#[derive(Debug)]
pub enum Error {
    /// The server answered with a 4xx status.
    Client {
        status: u16,
        status_text: Option<String>,
    },
    /// The server answered with a 5xx status.
    Server {
        status: u16,
        status_text: Option<String>,
    },
    /// The server answered with a failed status outside the 4xx/5xx ranges.
    Unknown {
        status: u16,
        status_text: Option<String>,
    },
    /// The response body could not be read or parsed.
    Decode(String),
    /// The base URL supplied at construction is not an absolute URL.
    Configuration(String),
    /// The request never produced a response (connect, DNS, TLS).
    Transport(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Client {
                status,
                status_text,
            } => {
                write!(
                    f,
                    "Client error: [{}] ({})",
                    status,
                    text_or_unknown(status_text)
                )
            }
            Error::Server {
                status,
                status_text,
            } => {
                write!(
                    f,
                    "Server error: [{}] ({})",
                    status,
                    text_or_unknown(status_text)
                )
            }
            Error::Unknown {
                status,
                status_text,
            } => {
                write!(
                    f,
                    "Unknown error: [{}] ({})",
                    status,
                    text_or_unknown(status_text)
                )
            }
            Error::Decode(msg) => write!(f, "Decode error: {}", msg),
            Error::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            Error::Transport(msg) => write!(f, "Transport error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// "Unknown" stands in only when the status text is absent; an empty
/// string that was explicitly provided is preserved verbatim.
fn text_or_unknown(status_text: &Option<String>) -> &str {
    status_text.as_deref().unwrap_or("Unknown")
}

/// Classifies a failed HTTP status code into its error category.
///
/// Always returns `Err`: the transport calls this only after its own
/// success check has already failed, so every code reaching here maps to
/// one of the three categories.
pub fn check_status(status: u16, status_text: Option<&str>) -> Result<(), Error> {
    let status_text = status_text.map(str::to_string);
    Err(match status {
        400..=499 => Error::Client {
            status,
            status_text,
        },
        500..=599 => Error::Server {
            status,
            status_text,
        },
        _ => Error::Unknown {
            status,
            status_text,
        },
    })
}
