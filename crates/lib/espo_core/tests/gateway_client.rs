//! Gateway client against an in-process stand-in for EspoCRM.

use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Bytes;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use serde_json::{Map, Value, json};
use tokio::net::TcpListener;

use espo_core::{CallOptions, ErrorType, EspoApi};

#[derive(Debug, Clone)]
struct Recorded {
    method: Method,
    uri: String,
    headers: HeaderMap,
    body: Vec<u8>,
}

type Log = Arc<Mutex<Vec<Recorded>>>;

/// Start a stand-in upstream that records every request and answers with
/// `respond(path)`.
async fn spawn_upstream(respond: fn(&str) -> Response) -> (String, Log) {
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let recorder = log.clone();
    let app = Router::new().fallback(
        move |method: Method, uri: Uri, headers: HeaderMap, body: Bytes| {
            let recorder = recorder.clone();
            async move {
                let path = uri.path().to_string();
                recorder.lock().unwrap().push(Recorded {
                    method,
                    uri: uri.to_string(),
                    headers,
                    body: body.to_vec(),
                });
                respond(&path)
            }
        },
    );
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}/api/v1"), log)
}

fn routes(path: &str) -> Response {
    match path {
        "/api/v1/Lead/missing" => (
            StatusCode::NOT_FOUND,
            [("X-Status-Reason", "Record not found")],
            axum::Json(json!({"message": "Not found"})),
        )
            .into_response(),
        "/api/v1/Lead/gone" => StatusCode::NO_CONTENT.into_response(),
        "/api/v1/Lead/html" => (StatusCode::OK, "<html>maintenance</html>").into_response(),
        "/api/v1/Lead/boom" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        _ => axum::Json(json!({"id": "abc123", "name": "Jane"})).into_response(),
    }
}

fn params(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected an object"),
    }
}

#[tokio::test]
async fn success_returns_parsed_json() {
    let (base, log) = spawn_upstream(routes).await;
    let api = EspoApi::new(&base, "secret");

    let envelope = api
        .call(Method::GET, Some("Lead/abc123"), &Map::new(), &CallOptions::default())
        .await;

    assert!(envelope.ok);
    assert_eq!(envelope.status_code, Some(200));
    assert_eq!(envelope.data, Some(json!({"id": "abc123", "name": "Jane"})));
    assert!(envelope.error.is_none());

    let requests = log.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].uri, "/api/v1/Lead/abc123");
    assert_eq!(requests[0].headers["x-api-key"], "secret");
}

#[tokio::test]
async fn not_found_is_an_api_error_with_body() {
    let (base, _log) = spawn_upstream(routes).await;
    let api = EspoApi::new(&base, "secret");

    let envelope = api
        .call(Method::GET, Some("Lead/missing"), &Map::new(), &CallOptions::default())
        .await;

    assert!(!envelope.ok);
    assert_eq!(envelope.status_code, Some(404));
    assert_eq!(envelope.error_type, Some(ErrorType::Api));
    assert_eq!(envelope.error.as_deref(), Some("HTTP 404"));
    assert_eq!(envelope.data, Some(json!({"message": "Not found"})));
}

#[tokio::test]
async fn server_errors_with_empty_body() {
    let (base, _log) = spawn_upstream(routes).await;
    let api = EspoApi::new(&base, "secret");

    let envelope = api
        .call(Method::DELETE, Some("Lead/boom"), &Map::new(), &CallOptions::default())
        .await;

    assert!(!envelope.ok);
    assert_eq!(envelope.status_code, Some(500));
    assert_eq!(envelope.error_type, Some(ErrorType::Api));
    assert!(envelope.data.is_none());
}

#[tokio::test]
async fn no_content_is_ok_without_data() {
    let (base, _log) = spawn_upstream(routes).await;
    let api = EspoApi::new(&base, "secret");

    let envelope = api
        .call(Method::DELETE, Some("Lead/gone"), &Map::new(), &CallOptions::default())
        .await;

    assert!(envelope.ok);
    assert_eq!(envelope.status_code, Some(204));
    assert!(envelope.data.is_none());
    assert!(envelope.error_type.is_none());
}

#[tokio::test]
async fn non_json_success_keeps_raw_text() {
    let (base, _log) = spawn_upstream(routes).await;
    let api = EspoApi::new(&base, "secret");

    let data = api
        .request(Method::GET, Some("Lead/html"), &Map::new(), &CallOptions::default())
        .await;

    assert_eq!(data, Some(json!("<html>maintenance</html>")));
}

#[tokio::test]
async fn transport_failure_is_a_network_error() {
    // Reserve a port, then free it so nothing is listening.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = EspoApi::new(&format!("http://{addr}/api/v1"), "secret");
    let envelope = api
        .call(
            Method::GET,
            Some("Lead"),
            &Map::new(),
            &CallOptions::default().timeout(Duration::from_secs(2)),
        )
        .await;

    assert!(!envelope.ok);
    assert!(envelope.status_code.is_none());
    assert!(envelope.data.is_none());
    assert_eq!(envelope.error_type, Some(ErrorType::Network));
    assert!(envelope.error.is_some());
}

#[tokio::test]
async fn post_sends_json_body_and_no_query() {
    let (base, log) = spawn_upstream(routes).await;
    let api = EspoApi::new(&format!("{base}/"), "secret");

    let envelope = api
        .call(
            Method::POST,
            Some("/Lead"),
            &params(json!({"firstName": "Jane", "lastName": "Doe"})),
            &CallOptions::default().header("X-Skip-Duplicate-Check", "false"),
        )
        .await;
    assert!(envelope.ok);

    let requests = log.lock().unwrap();
    let sent = &requests[0];
    assert_eq!(sent.method, Method::POST);
    assert_eq!(sent.uri, "/api/v1/Lead");
    assert_eq!(sent.headers["x-skip-duplicate-check"], "false");
    let body: Value = serde_json::from_slice(&sent.body).unwrap();
    assert_eq!(body, json!({"firstName": "Jane", "lastName": "Doe"}));
}

#[tokio::test]
async fn get_flattens_filters_into_the_query() {
    let (base, log) = spawn_upstream(routes).await;
    let api = EspoApi::new(&base, "secret");

    api.call(
        Method::GET,
        Some("Lead"),
        &params(json!({
            "maxSize": 10,
            "where": [{"type": "equals", "value": "X"}]
        })),
        &CallOptions::default(),
    )
    .await;

    let requests = log.lock().unwrap();
    let uri = &requests[0].uri;
    assert_eq!(uri.matches('?').count(), 1);
    assert!(uri.contains("maxSize=10"));
    assert!(uri.contains("where%5B0%5D%5Btype%5D=equals"));
    assert!(uri.contains("where%5B0%5D%5Bvalue%5D=X"));
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn extra_headers_cannot_replace_the_api_key() {
    let (base, log) = spawn_upstream(routes).await;
    let api = EspoApi::new(&base, "secret");

    api.call(
        Method::GET,
        Some("Lead"),
        &Map::new(),
        &CallOptions::default().header("x-api-key", "forged"),
    )
    .await;

    let requests = log.lock().unwrap();
    let keys: Vec<_> = requests[0].headers.get_all("x-api-key").iter().collect();
    assert_eq!(keys.len(), 1);
    assert_eq!(keys[0], "secret");
}

/// `io::Write` sink shared with a `tracing` fmt subscriber.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Captured {
    /// Lines mentioning a returned status, as written by the subscriber.
    fn status_lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.0.lock().unwrap())
            .lines()
            .filter(|line| line.contains("returned status"))
            .map(str::to_string)
            .collect()
    }
}

#[tokio::test]
async fn status_logging_follows_severity_rules() {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .without_time()
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let (base, _log) = spawn_upstream(routes).await;
    let api = EspoApi::new(&base, "secret");
    let none = Map::new();

    api.call(Method::GET, Some("Lead/boom"), &none, &CallOptions::default())
        .await;
    let lines = captured.status_lines();
    assert_eq!(lines.len(), 1, "{lines:?}");
    assert!(lines[0].contains("ERROR"), "{}", lines[0]);
    assert!(lines[0].contains("EspoAPI GET Lead/boom returned status 500: Unknown Error"));

    api.call(Method::GET, Some("Lead/missing"), &none, &CallOptions::default())
        .await;
    let lines = captured.status_lines();
    assert_eq!(lines.len(), 2, "{lines:?}");
    assert!(lines[1].contains("WARN"), "{}", lines[1]);
    assert!(lines[1].contains("returned status 404: Record not found"));

    let quiet = CallOptions::default().allow_non_2xx(true);
    let envelope = api.call(Method::GET, Some("Lead/missing"), &none, &quiet).await;
    assert_eq!(envelope.error_type, Some(ErrorType::Api));
    api.call(Method::GET, Some("Lead/gone"), &none, &CallOptions::default())
        .await;
    assert_eq!(captured.status_lines().len(), 2);
}

#[tokio::test]
async fn truncated_body_keeps_the_status() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }
        socket
            .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\n{\"id\"")
            .await
            .unwrap();
    });

    let api = EspoApi::new(&format!("http://{addr}/api/v1"), "secret");
    let envelope = api
        .call(Method::GET, Some("Lead/abc123"), &Map::new(), &CallOptions::default())
        .await;

    assert!(!envelope.ok);
    assert_eq!(envelope.status_code, Some(200));
    assert_eq!(envelope.error_type, Some(ErrorType::Network));
    assert!(envelope.data.is_none());
}
