use futures_util::SinkExt;
use log::info;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::Message;

use crate::config::DashboardConfig;
use crate::errors::DashboardError;
use crate::implementations::dashboard_client::DashboardClient;
use crate::models::monitor::Verdict;
use crate::models::server::ServerAddress;
use crate::traits::live_source::LiveMonitorSource;

fn setup() {
    // Logger may already be initialized by another test
    let _ = env_logger::builder().is_test(true).try_init();
}

fn client_for(base_url: &str) -> DashboardClient {
    let config = DashboardConfig {
        dashboard_url: base_url.to_string(),
        request_timeout_secs: 5,
        ..DashboardConfig::default()
    };
    DashboardClient::new(&config).unwrap()
}

async fn read_http_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let body_len = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + body_len {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Answer a single HTTP request with `status` and a JSON `body`; yields the raw request
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_http_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        request
    });
    (format!("http://{}", addr), handle)
}

#[tokio::test]
async fn connect_posts_host_and_port() {
    setup();
    let (url, server) =
        serve_once("200 OK", r#"{"servers":[{"host":"10.0.0.5","port":4242}]}"#).await;

    let list = client_for(&url).connect_live("10.0.0.5", 4242).await.unwrap();
    assert_eq!(list.servers, vec![ServerAddress::new("10.0.0.5", 4242)]);

    let request = server.await.unwrap();
    info!("Fake dashboard received: {}", request);
    assert!(request.starts_with("POST /live HTTP/1.1"));
    assert!(request.ends_with(r#"{"host":"10.0.0.5","port":4242}"#));
}

#[tokio::test]
async fn bad_gateway_reports_the_live_server_error() {
    setup();
    let (url, server) = serve_once(
        "502 Bad Gateway",
        r#"{"error":"ConnectionRefusedError(111, 'Connection refused')"}"#,
    )
    .await;

    let err = client_for(&url).connect_live("127.0.0.1", 4242).await.unwrap_err();
    match err {
        DashboardError::LiveServerUnavailable(reason) => {
            assert!(reason.starts_with("ConnectionRefusedError"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    server.await.unwrap();
}

#[tokio::test]
async fn other_failures_are_http_errors() {
    setup();
    let (url, server) = serve_once("500 Internal Server Error", r#"{"oops":true}"#).await;

    let err = client_for(&url).connect_live("127.0.0.1", 4242).await.unwrap_err();
    assert!(matches!(err, DashboardError::Http { status: 500, .. }));
    server.await.unwrap();
}

#[tokio::test]
async fn unreachable_dashboard_is_a_network_error() {
    setup();
    // Bind then drop to get a port nobody listens on
    let addr = TcpListener::bind("127.0.0.1:0").await.unwrap().local_addr().unwrap();

    let err = client_for(&format!("http://{}", addr))
        .connect_live("127.0.0.1", 4242)
        .await
        .unwrap_err();
    assert!(matches!(err, DashboardError::Network(_)));
}

#[tokio::test]
async fn subscription_forwards_updates_and_skips_bad_frames() {
    setup();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        let mut ws = tokio_tungstenite::accept_async(socket).await.unwrap();
        let frames = [
            r#"{"server":"127.0.0.1:4242","id":0,"monitor":{"id":"p1","title":"Reply","property":"globally: /a causes /b","verdict":null,"witness":null}}"#,
            "not json",
            r#"{"server":"127.0.0.1:4242","id":0,"monitor":{"id":"p1","title":"Reply","property":"globally: /a causes /b","verdict":false,"witness":[{"topic":"/a"}]}}"#,
        ];
        for frame in frames {
            ws.send(Message::Text(frame.to_string().into())).await.unwrap();
        }
        ws.close(None).await.unwrap();
    });

    let (tx, mut rx) = mpsc::channel(8);
    client_for(&format!("http://{}", addr)).subscribe(tx).await.unwrap();
    server.await.unwrap();

    let first = rx.recv().await.unwrap();
    let second = rx.recv().await.unwrap();
    assert_eq!(first.monitor.verdict, Verdict::Unknown);
    assert_eq!(second.monitor.verdict, Verdict::False);
    assert!(second.monitor.has_witness());
    assert!(rx.recv().await.is_none());
}
