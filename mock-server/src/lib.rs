use axum::{
    body::Bytes,
    extract::Path,
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tokio::net::TcpListener;

/// One request header as the server received it.
#[derive(Clone, Debug, Serialize)]
pub struct ReceivedHeader {
    pub name: String,
    pub value: String,
}

pub fn app() -> Router {
    Router::new()
        .route("/", get(static_ok))
        .route("/hello", get(hello))
        .route("/echo", post(echo))
        .route("/status/{code}", get(status))
        .route("/headers", get(headers).post(headers))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn static_ok() -> &'static str {
    "OK"
}

async fn hello() -> &'static str {
    "HELLO"
}

/// Reply with the request body unchanged.
async fn echo(body: Bytes) -> Bytes {
    body
}

async fn status(Path(code): Path<u16>) -> Result<(StatusCode, String), StatusCode> {
    let status = StatusCode::from_u16(code).map_err(|_| StatusCode::BAD_REQUEST)?;
    Ok((status, format!("status {code}")))
}

/// Reply with the request headers in the order they arrived.
async fn headers(headers: HeaderMap) -> Json<Vec<ReceivedHeader>> {
    Json(
        headers
            .iter()
            .map(|(name, value)| ReceivedHeader {
                name: name.as_str().to_string(),
                value: String::from_utf8_lossy(value.as_bytes()).into_owned(),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn received_header_serializes_to_json() {
        let header = ReceivedHeader {
            name: "host".to_string(),
            value: "localhost".to_string(),
        };
        let json = serde_json::to_value(&header).unwrap();
        assert_eq!(json["name"], "host");
        assert_eq!(json["value"], "localhost");
    }

    #[tokio::test]
    async fn headers_preserve_arrival_order() {
        let mut map = HeaderMap::new();
        map.insert("host", "h".parse().unwrap());
        map.insert("accept", "*/*".parse().unwrap());
        map.insert("connection", "close".parse().unwrap());
        let Json(received) = headers(map).await;
        let names: Vec<_> = received.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, ["host", "accept", "connection"]);
    }

    #[tokio::test]
    async fn status_rejects_out_of_range_code() {
        assert_eq!(status(Path(42)).await.unwrap_err(), StatusCode::BAD_REQUEST);
    }
}
