use tokio::net::TcpListener;

/// Serve the test routes on `127.0.0.1:$PORT` (default 8080) so the
/// `httpclient` binary can be tried by hand.
#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    println!("mock server listening on http://{addr}/");
    mock_server::run(listener).await
}
