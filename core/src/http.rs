//! HTTP message types: the resolved target, the request text and the parsed
//! result.
//!
//! # Design
//! These are plain values. `RequestMessage` keeps its headers as an ordered
//! list because header order is part of the bytes on the wire, and
//! `to_wire` is the only place that decides how the request is framed.

use std::fmt;

use serde::Serialize;

/// Port used when the URL does not name one.
pub const DEFAULT_PORT: u16 = 80;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    /// Map a command word to a method. Only the literal `"POST"` selects
    /// POST; every other value falls back to GET.
    pub fn from_command(command: &str) -> Self {
        if command == "POST" {
            HttpMethod::Post
        } else {
            HttpMethod::Get
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// Host, port and request path derived from a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub host: String,
    pub port: u16,
    pub path: String,
}

/// An HTTP request as ordered header lines plus an optional body.
///
/// Built by `HttpClient::build_get` / `HttpClient::build_post`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestMessage {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RequestMessage {
    /// Serialize into the exact text sent on the socket: request line, one
    /// `Name: value` line per header, a blank line, then the body with no
    /// trailing terminator.
    pub fn to_wire(&self) -> String {
        let mut wire = format!("{} {} HTTP/1.1\r\n", self.method.as_str(), self.path);
        for (name, value) in &self.headers {
            wire.push_str(name);
            wire.push_str(": ");
            wire.push_str(value);
            wire.push_str("\r\n");
        }
        wire.push_str("\r\n");
        if let Some(body) = &self.body {
            wire.push_str(body);
        }
        wire
    }
}

/// Status code and body of a response. The only value handed back to the
/// caller of `HttpClient::execute`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HttpResult {
    pub status_code: u16,
    pub body: String,
}

impl fmt::Display for HttpResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.status_code)?;
        write!(f, "{}", self.body)
    }
}
