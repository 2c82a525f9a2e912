//! Connection status driven by real health checks.

use std::time::Duration;

use connect_app::{App, ConnectionStatus};
use connect_client::ApiClient;
use connect_config::ApiConfig;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve one canned HTTP response per connection.
async fn serve(status: u16, body: &'static str) -> String {
  let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();

  tokio::spawn(async move {
    while let Ok((mut stream, _)) = listener.accept().await {
      tokio::spawn(async move {
        let mut buf = [0u8; 2048];
        let _ = stream.read(&mut buf).await;
        let response = format!(
          "HTTP/1.1 {} X\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
          status,
          body.len(),
          body
        );
        let _ = stream.write_all(response.as_bytes()).await;
        let _ = stream.shutdown().await;
      });
    }
  });

  format!("http://{}", addr)
}

/// Accept connections and never answer them.
async fn serve_hanging() -> String {
  let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();

  tokio::spawn(async move {
    let mut held = Vec::new();
    while let Ok((stream, _)) = listener.accept().await {
      held.push(stream);
    }
  });

  format!("http://{}", addr)
}

fn setup(base_url: &str) -> (App, ApiClient) {
  let config = ApiConfig::default()
    .with_base_url(base_url)
    .with_timeout(Duration::from_secs(5));
  let client = ApiClient::new(config.clone()).unwrap();
  (App::new(config), client)
}

#[tokio::test]
async fn test_online_backend() {
  let base = serve(200, r#"{"message": "Healthy"}"#).await;
  let (mut app, client) = setup(&base);

  let status = app.check_connection(&client).await;
  assert_eq!(status, &ConnectionStatus::Online);
  assert_eq!(app.shell().backend_status, "online");
  assert!(app.shell().offline_banner.is_none());
}

#[tokio::test]
async fn test_error_status_marks_offline_with_message() {
  let base = serve(500, r#"{"message": "Internal error"}"#).await;
  let (mut app, client) = setup(&base);

  app.check_connection(&client).await;
  assert_eq!(
    app.connection(),
    &ConnectionStatus::Offline {
      message: "Internal error".to_string()
    }
  );
  assert_eq!(
    app.shell().offline_banner.as_deref(),
    Some("Backend offline. (Internal error)")
  );
}

#[tokio::test]
async fn test_unreachable_backend_marks_offline() {
  let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  drop(listener);

  let (mut app, client) = setup(&format!("http://{}", addr));
  app.check_connection(&client).await;

  assert!(matches!(app.connection(), ConnectionStatus::Offline { .. }));
  assert_eq!(app.shell().backend_status, "offline");
}

#[tokio::test]
async fn test_check_after_shutdown_is_skipped() {
  let base = serve(200, "").await;
  let (mut app, client) = setup(&base);

  app.shutdown();
  app.check_connection(&client).await;

  assert_eq!(app.connection(), &ConnectionStatus::Checking);
}

#[tokio::test]
async fn test_shutdown_token_aborts_in_flight_check() {
  let base = serve(200, r#"{"message": "Healthy"}"#).await;
  let (mut app, client) = setup(&base);
  app.check_connection(&client).await;
  assert_eq!(app.connection(), &ConnectionStatus::Online);

  let hanging = serve_hanging().await;
  let hanging_client = ApiClient::new(
    ApiConfig::default()
      .with_base_url(&hanging)
      .with_timeout(Duration::from_secs(30)),
  )
  .unwrap();

  let token = app.shutdown_token();
  tokio::spawn(async move {
    tokio::time::sleep(Duration::from_millis(100)).await;
    token.cancel();
  });

  let status = tokio::time::timeout(
    Duration::from_secs(5),
    app.check_connection(&hanging_client),
  )
  .await
  .expect("check did not return after the shutdown token was cancelled")
  .clone();

  assert_eq!(status, ConnectionStatus::Online);
  assert!(app.shell().offline_banner.is_none());
}
