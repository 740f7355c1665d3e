//! Request builder, request driver and response parser.
//!
//! # Design
//! `HttpClient` carries no state between calls. Each method is split into a
//! `build_*` step that produces a `RequestMessage` and `parse_*` steps that
//! consume the raw response text, so both halves are testable without a
//! socket. `execute` strings them together around one `Connection`.

use tracing::debug;
use url::form_urlencoded;

use crate::connection::Connection;
use crate::error::ClientError;
use crate::http::{HttpMethod, HttpResult, RequestMessage, Target};
use crate::target::resolve_target;

const HEADER_BODY_DELIMITER: &str = "\r\n\r\n";

/// Synchronous, stateless HTTP/1.1 client speaking directly to a TCP socket.
///
/// Every call opens its own connection, asks the server to close it after
/// responding, and reads until it does.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpClient;

impl HttpClient {
    pub fn new() -> Self {
        Self
    }

    /// Run one request. Only the literal `"POST"` issues a POST; anything
    /// else issues a GET and ignores `args`.
    pub fn execute(
        &self,
        url: &str,
        command: &str,
        args: Option<&[(String, String)]>,
    ) -> Result<HttpResult, ClientError> {
        self.request(url, HttpMethod::from_command(command), args)
    }

    /// Typed form of `execute`.
    pub fn request(
        &self,
        url: &str,
        method: HttpMethod,
        args: Option<&[(String, String)]>,
    ) -> Result<HttpResult, ClientError> {
        let target = resolve_target(url)?;
        let mut conn = Connection::connect(&target.host, target.port)?;

        let message = match method {
            HttpMethod::Get => self.build_get(&target),
            HttpMethod::Post => self.build_post(&target, args),
        };
        let wire = message.to_wire();
        debug!(method = method.as_str(), "request:\n{wire}");

        conn.send_all(&wire)?;
        let raw = conn.recv_all()?;
        debug!("response:\n{raw}");
        conn.close()?;

        self.parse_response(&raw)
    }

    pub fn build_get(&self, target: &Target) -> RequestMessage {
        let mut headers = common_headers(target);
        headers.push(("Connection".to_string(), "close".to_string()));
        RequestMessage {
            method: HttpMethod::Get,
            path: target.path.clone(),
            headers,
            body: None,
        }
    }

    /// Build a form POST. `None` sends an empty body with `Content-Length: 0`.
    pub fn build_post(&self, target: &Target, args: Option<&[(String, String)]>) -> RequestMessage {
        let body = match args {
            Some(pairs) => form_urlencoded::Serializer::new(String::new())
                .extend_pairs(pairs)
                .finish(),
            None => String::new(),
        };

        let mut headers = common_headers(target);
        headers.push(("Content-Length".to_string(), body.len().to_string()));
        headers.push((
            "Content-Type".to_string(),
            "application/x-www-form-urlencoded".to_string(),
        ));
        headers.push(("Connection".to_string(), "close".to_string()));
        RequestMessage {
            method: HttpMethod::Post,
            path: target.path.clone(),
            headers,
            body: Some(body),
        }
    }

    pub fn parse_response(&self, raw: &str) -> Result<HttpResult, ClientError> {
        Ok(HttpResult {
            status_code: self.parse_status_code(raw)?,
            body: self.parse_body(raw)?,
        })
    }

    /// The second whitespace-separated token of the response, read as the
    /// numeric status code.
    pub fn parse_status_code(&self, raw: &str) -> Result<u16, ClientError> {
        let token = raw
            .split_whitespace()
            .nth(1)
            .ok_or_else(|| ClientError::MalformedResponse("missing status code".to_string()))?;
        token.parse().map_err(|_| {
            ClientError::MalformedResponse(format!("status code is not a number: {token:?}"))
        })
    }

    /// Everything after the first blank line.
    pub fn parse_body(&self, raw: &str) -> Result<String, ClientError> {
        raw.split_once(HEADER_BODY_DELIMITER)
            .map(|(_, body)| body.to_string())
            .ok_or_else(|| ClientError::MalformedResponse("missing header/body delimiter".to_string()))
    }
}

/// Headers shared by every request, in wire order.
fn common_headers(target: &Target) -> Vec<(String, String)> {
    vec![
        ("Host".to_string(), target.host.clone()),
        ("Accept".to_string(), "*/*".to_string()),
        ("Accept-Charset".to_string(), "utf-8".to_string()),
    ]
}
