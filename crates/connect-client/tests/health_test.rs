//! Health check tests against an in-process HTTP server.

use std::net::SocketAddr;
use std::time::{Duration, Instant};

use connect_client::{ApiClient, ApiError, RequestOptions, ResponseBody};
use connect_config::ApiConfig;
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// How the test server answers each connection.
#[derive(Clone)]
enum Reply {
  /// Respond with a status line and body.
  Status(u16, &'static str),
  /// Read the request and never answer.
  Hang,
}

/// Start a server that answers every connection with `reply` and reports
/// each request head on the returned channel.
async fn serve(reply: Reply) -> (SocketAddr, mpsc::UnboundedReceiver<String>) {
  let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  let (tx, rx) = mpsc::unbounded_channel();

  tokio::spawn(async move {
    loop {
      let Ok((stream, _)) = listener.accept().await else {
        break;
      };
      let reply = reply.clone();
      let tx = tx.clone();
      tokio::spawn(async move { handle(stream, reply, tx).await });
    }
  });

  (addr, rx)
}

async fn handle(mut stream: TcpStream, reply: Reply, tx: mpsc::UnboundedSender<String>) {
  let mut head = Vec::new();
  let mut buf = [0u8; 1024];
  while !head.windows(4).any(|w| w == b"\r\n\r\n") {
    match stream.read(&mut buf).await {
      Ok(0) | Err(_) => return,
      Ok(n) => head.extend_from_slice(&buf[..n]),
    }
  }
  let _ = tx.send(String::from_utf8_lossy(&head).to_string());

  match reply {
    Reply::Status(status, body) => {
      let response = format!(
        "HTTP/1.1 {} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
      );
      let _ = stream.write_all(response.as_bytes()).await;
      let _ = stream.shutdown().await;
    }
    Reply::Hang => {
      tokio::time::sleep(Duration::from_secs(30)).await;
    }
  }
}

fn client_for(addr: SocketAddr, timeout: Duration) -> ApiClient {
  let config = ApiConfig::default()
    .with_base_url(&format!("http://{}/", addr))
    .with_timeout(timeout);
  ApiClient::new(config).unwrap()
}

#[tokio::test]
async fn test_health_online_json() {
  let (addr, mut requests) = serve(Reply::Status(200, r#"{"message": "Healthy"}"#)).await;
  let client = client_for(addr, Duration::from_secs(5));

  let body = client.check_health().await.unwrap();
  assert_eq!(body, ResponseBody::Json(json!({"message": "Healthy"})));

  let head = requests.recv().await.unwrap();
  assert!(head.starts_with("GET / HTTP/1.1"), "unexpected request: {}", head);
}

#[tokio::test]
async fn test_health_online_empty_body() {
  let (addr, _requests) = serve(Reply::Status(204, "")).await;
  let client = client_for(addr, Duration::from_secs(5));

  let body = client.check_health().await.unwrap();
  assert_eq!(body, ResponseBody::Empty);
}

#[tokio::test]
async fn test_health_online_non_json_body_wrapped() {
  let (addr, _requests) = serve(Reply::Status(200, "ok")).await;
  let client = client_for(addr, Duration::from_secs(5));

  let body = client.check_health().await.unwrap();
  assert_eq!(body.into_value(), json!({"raw": "ok"}));
}

#[tokio::test]
async fn test_non_2xx_carries_status_and_detail() {
  let (addr, _requests) = serve(Reply::Status(503, r#"{"detail": "Database unavailable"}"#)).await;
  let client = client_for(addr, Duration::from_secs(5));

  let err = client.check_health().await.unwrap_err();
  assert_eq!(err.status(), Some(503));
  assert_eq!(err.to_string(), "Database unavailable");
  assert!(!err.is_network_failure());
  assert_eq!(
    err.body(),
    Some(&ResponseBody::Json(json!({"detail": "Database unavailable"})))
  );
}

#[tokio::test]
async fn test_non_2xx_generic_message() {
  for status in [400u16, 404, 500] {
    let (addr, _requests) = serve(Reply::Status(status, "")).await;
    let client = client_for(addr, Duration::from_secs(5));

    let err = client.check_health().await.unwrap_err();
    assert_eq!(err.status(), Some(status));
    assert_eq!(err.to_string(), format!("Request failed ({})", status));
  }
}

#[tokio::test]
async fn test_timeout_aborts_request() {
  let (addr, _requests) = serve(Reply::Hang).await;
  let client = client_for(addr, Duration::from_millis(200));

  let started = Instant::now();
  let err = client.check_health().await.unwrap_err();
  let elapsed = started.elapsed();

  assert!(matches!(err, ApiError::Timeout { timeout_ms: 200 }));
  assert!(err.is_timeout());
  assert!(err.is_network_failure());
  assert!(elapsed >= Duration::from_millis(200));
  assert!(elapsed < Duration::from_secs(5), "took {:?}", elapsed);
}

#[tokio::test]
async fn test_per_request_timeout_override() {
  let (addr, _requests) = serve(Reply::Hang).await;
  let client = client_for(addr, Duration::from_secs(30));

  let options = RequestOptions {
    timeout: Some(Duration::from_millis(100)),
    ..Default::default()
  };
  let err = client
    .request("/", options, &CancellationToken::new())
    .await
    .unwrap_err();

  assert!(matches!(err, ApiError::Timeout { timeout_ms: 100 }));
}

#[tokio::test]
async fn test_external_cancel_aborts_request() {
  let (addr, mut requests) = serve(Reply::Hang).await;
  let client = client_for(addr, Duration::from_secs(30));
  let cancel = CancellationToken::new();

  let trigger = cancel.clone();
  tokio::spawn(async move {
    tokio::time::sleep(Duration::from_millis(100)).await;
    trigger.cancel();
  });

  let started = Instant::now();
  let err = client.check_health_with_cancel(&cancel).await.unwrap_err();

  assert!(matches!(err, ApiError::Cancelled));
  assert!(started.elapsed() < Duration::from_secs(5));
  // The request reached the server before it was aborted
  assert!(requests.recv().await.is_some());
}

#[tokio::test]
async fn test_connection_refused_is_network_failure() {
  let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  drop(listener);

  let client = client_for(addr, Duration::from_secs(5));
  let err = client.check_health().await.unwrap_err();

  assert!(matches!(err, ApiError::Network(_)));
  assert!(err.is_network_failure());
  assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_post_sends_json_body() {
  let (addr, mut requests) = serve(Reply::Status(201, r#"{"id": "wf_1"}"#)).await;
  let client = client_for(addr, Duration::from_secs(5));

  let options = RequestOptions {
    method: reqwest::Method::POST,
    body: Some(json!({"name": "Untitled Workflow"})),
    ..Default::default()
  };
  let body = client
    .request("workflows", options, &CancellationToken::new())
    .await
    .unwrap();

  assert_eq!(body.as_json(), Some(&json!({"id": "wf_1"})));

  let head = requests.recv().await.unwrap().to_lowercase();
  assert!(head.starts_with("post /workflows http/1.1"));
  assert!(head.contains("content-type: application/json"));
}
