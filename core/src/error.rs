//! Error types for the raw HTTP client.
//!
//! # Design
//! One variant per pipeline stage that can fail: resolving the URL,
//! connecting, sending, receiving, closing, and parsing the response. Every
//! I/O variant carries the underlying `io::Error` so the entry point can
//! report the OS-level cause. The library never terminates the process; that
//! decision belongs to the binary.

use std::io;

use thiserror::Error;

/// Errors returned by `HttpClient` and `Connection`.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The URL could not be parsed or carries no usable host.
    #[error("failed to get the information from URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// DNS resolution or the TCP handshake failed.
    #[error("failed to connect to host {host} port {port}: {source}")]
    Connect {
        host: String,
        port: u16,
        #[source]
        source: io::Error,
    },

    /// Writing the request to the socket failed.
    #[error("failed to send request: {0}")]
    Send(#[source] io::Error),

    /// Reading from the socket failed before the peer closed it.
    #[error("failed to receive response: {0}")]
    Receive(#[source] io::Error),

    /// Shutting down the socket failed.
    #[error("failed to close connection: {0}")]
    Close(#[source] io::Error),

    /// The response lacks a status code or a header/body delimiter, or is
    /// not valid UTF-8.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
