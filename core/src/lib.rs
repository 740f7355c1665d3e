//! Minimal HTTP/1.1 client over raw TCP sockets.
//!
//! # Overview
//! Resolves a URL into a `Target`, writes a hand-assembled request onto a
//! fresh `TcpStream`, reads until the server closes the connection, and
//! parses the status code and body out of the raw text.
//!
//! # Design
//! - `HttpClient` is stateless; each request owns exactly one `Connection`.
//! - Request building and response parsing are pure functions on strings,
//!   so the protocol handling is testable without a socket.
//! - Every failure is a `ClientError`. Deciding to exit the process is left
//!   to the binary.
//! - Responses are framed by EOF only. The client always sends
//!   `Connection: close` and never looks at `Content-Length`.

pub mod client;
pub mod connection;
pub mod error;
pub mod http;
pub mod target;

pub use client::HttpClient;
pub use connection::{Connection, READ_CHUNK_SIZE};
pub use error::ClientError;
pub use http::{HttpMethod, HttpResult, RequestMessage, Target, DEFAULT_PORT};
pub use target::resolve_target;
