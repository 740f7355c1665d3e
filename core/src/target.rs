//! URL decomposition into a `Target`.

use url::Url;

use crate::error::ClientError;
use crate::http::{Target, DEFAULT_PORT};

/// Resolve `url` into host, port and request path.
///
/// The port falls back to 80 only when the URL does not spell one out. An
/// empty path becomes `/`. Query and fragment are not part of the path.
pub fn resolve_target(url: &str) -> Result<Target, ClientError> {
    let parsed = Url::parse(url).map_err(|e| ClientError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    let host = match parsed.host_str() {
        Some(host) if !host.is_empty() => host.to_string(),
        _ => {
            return Err(ClientError::InvalidUrl {
                url: url.to_string(),
                reason: "no host".to_string(),
            })
        }
    };

    // `Url` normalizes a written-out scheme default port away, so recover it
    // from the input text.
    let port = parsed
        .port()
        .or_else(|| written_port(url))
        .unwrap_or(DEFAULT_PORT);

    let path = match parsed.path() {
        "" => "/".to_string(),
        path => path.to_string(),
    };

    Ok(Target { host, port, path })
}

/// The port as written in the authority of `url`, if any.
fn written_port(url: &str) -> Option<u16> {
    let (_, rest) = url.split_once("://")?;
    let authority = rest
        .split(|c: char| matches!(c, '/' | '\\' | '?' | '#'))
        .next()?;
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, hp)| hp);
    let after_host = match host_port.strip_prefix('[') {
        Some(ipv6) => ipv6.split_once(']')?.1,
        None => host_port,
    };
    let (_, digits) = after_host.rsplit_once(':')?;
    digits.parse().ok()
}
