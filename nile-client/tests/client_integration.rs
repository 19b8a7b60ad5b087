// nile-client/tests/client_integration.rs
// Client construction, request targets and status mapping against a local socket

use nile_client::{
    ClientConfig, ClientError, HttpClient, OrderListRequest, OrderScope, OrderStatus, endpoints,
};
use shared::error::{AppError, ErrorCode};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Answer the first connection with `status` and `body`; the handle yields
/// the request head that was received.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let handle = tokio::spawn(async move {
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
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        String::from_utf8_lossy(&head).into_owned()
    });
    (base, handle)
}

fn client(base: &str) -> HttpClient {
    HttpClient::new(&ClientConfig::new(base).with_token("abc").with_timeout(5)).unwrap()
}

fn request_line(head: &str) -> &str {
    head.lines().next().unwrap_or_default()
}

#[tokio::test]
async fn test_client_creation_without_token() {
    let client = HttpClient::new(&ClientConfig::new("http://localhost:8080")).unwrap();
    assert!(!client.is_logged_in());
    assert!(client.token().is_none());
}

#[tokio::test]
async fn test_token_from_config_and_builder() {
    let config = ClientConfig::new("http://localhost:8080")
        .with_token("abc")
        .with_timeout(5);
    assert_eq!(config.timeout, 5);

    let client = config.build_http_client().unwrap();
    assert_eq!(client.token(), Some("abc"));

    let client = client.with_token("xyz");
    assert_eq!(client.token(), Some("xyz"));
    assert!(client.is_logged_in());
}

#[tokio::test]
async fn test_url_joining() {
    let client = HttpClient::new(&ClientConfig::new("http://localhost:8080/")).unwrap();
    assert_eq!(
        client.url(&endpoints::users()).unwrap().as_str(),
        "http://localhost:8080/api/Users/GetAll"
    );
    assert_eq!(
        client
            .url(&OrderListRequest::new(OrderScope::Own).endpoint())
            .unwrap()
            .as_str(),
        "http://localhost:8080/api/Orders/GetAllForUser"
    );
}

#[tokio::test]
async fn test_default_config_points_at_storefront_backend() {
    let config = ClientConfig::default();
    assert_eq!(config.base_url, "https://restaurant-template.runasp.net");
    assert_eq!(config.timeout, 30);
    assert!(config.token.is_none());
}

#[tokio::test]
async fn test_status_filter_param() {
    let request = OrderListRequest::new(OrderScope::All).with_status(OrderStatus::Delivered);
    assert_eq!(
        request.query_pairs(),
        vec![("status", "Delivered".to_string())]
    );
}

#[tokio::test]
async fn test_orders_sends_scope_and_skips_bad_records() {
    let (base, server) = serve_once(
        "200 OK",
        r#"[{"id": 1, "deliveryCost": null}, {"id": 2, "items": "none"}, {"id": 3}]"#,
    )
    .await;
    let request = OrderListRequest::new(OrderScope::All).with_status(OrderStatus::Cancelled);
    let orders = client(&base).orders(&request).await.unwrap();

    let ids: Vec<i64> = orders.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![1, 3]);
    let head = server.await.unwrap();
    assert_eq!(
        request_line(&head),
        "GET /api/Orders/GetAll?status=Cancelled HTTP/1.1"
    );
    assert!(head.to_lowercase().contains("authorization: bearer abc"));
}

#[tokio::test]
async fn test_null_order_list_is_empty() {
    let (base, server) = serve_once("200 OK", "null").await;
    let orders = client(&base)
        .orders(&OrderListRequest::new(OrderScope::Own))
        .await
        .unwrap();
    assert!(orders.is_empty());
    assert_eq!(
        request_line(&server.await.unwrap()),
        "GET /api/Orders/GetAllForUser HTTP/1.1"
    );
}

#[tokio::test]
async fn test_order_detail_path() {
    let (base, server) = serve_once("200 OK", r#"{"id": 9, "status": "Delivered"}"#).await;
    let order = client(&base).order(OrderScope::Own, 9).await.unwrap();
    assert_eq!(order.id, 9);
    assert_eq!(order.status, OrderStatus::Delivered);
    assert_eq!(
        request_line(&server.await.unwrap()),
        "GET /api/Orders/GetByForUserId/9 HTTP/1.1"
    );
}

#[tokio::test]
async fn test_roles_path() {
    let (base, server) = serve_once("200 OK", r#"[{"id": "r1", "name": "Admin"}]"#).await;
    let roles = client(&base).roles().await.unwrap();
    assert_eq!(roles.len(), 1);
    assert_eq!(roles[0].name, "Admin");
    assert_eq!(
        request_line(&server.await.unwrap()),
        "GET /api/Roles/GetAll HTTP/1.1"
    );
}

#[tokio::test]
async fn test_assign_role_query() {
    let (base, server) = serve_once("200 OK", "").await;
    client(&base).assign_role("u-7", "Branch").await.unwrap();
    assert_eq!(
        request_line(&server.await.unwrap()),
        "POST /api/Users/AssignRole?userId=u-7&role=Branch HTTP/1.1"
    );
}

#[tokio::test]
async fn test_delete_user_encodes_email_segment() {
    let (base, server) = serve_once("200 OK", "").await;
    client(&base).delete_user("a/b?c#d@x.com").await.unwrap();
    assert_eq!(
        request_line(&server.await.unwrap()),
        "DELETE /api/Users/Delete/a%2Fb%3Fc%23d@x.com HTTP/1.1"
    );
}

#[tokio::test]
async fn test_not_found_names_the_path() {
    let (base, server) = serve_once("404 Not Found", "").await;
    let result = client(&base).order(OrderScope::All, 5).await;
    match result {
        Err(ClientError::NotFound { path }) => assert_eq!(path, "api/Orders/GetById/5"),
        other => panic!("expected NotFound, got {:?}", other),
    }
    server.await.unwrap();
}

#[tokio::test]
async fn test_status_mapping() {
    let (base, _server) = serve_once("401 Unauthorized", "").await;
    let err = client(&base).profile().await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized));
    assert_eq!(AppError::from(err).code, ErrorCode::NotAuthenticated);

    let (base, _server) = serve_once("403 Forbidden", "admins only").await;
    let err = client(&base).users().await.unwrap_err();
    assert!(matches!(&err, ClientError::Forbidden { body, .. } if body == "admins only"));
    assert_eq!(AppError::from(err).code, ErrorCode::PermissionDenied);

    let (base, _server) = serve_once("400 Bad Request", "unknown role").await;
    let err = client(&base).assign_role("u-7", "Chef").await.unwrap_err();
    assert!(matches!(&err, ClientError::Rejected { path, .. } if path == "api/Users/AssignRole"));
    assert_eq!(AppError::from(err).code, ErrorCode::ValidationFailed);

    let (base, _server) = serve_once("503 Service Unavailable", "").await;
    let err = client(&base).roles().await.unwrap_err();
    assert!(matches!(err, ClientError::Server { status: 503, .. }));
}

#[tokio::test]
async fn test_bad_payloads() {
    let (base, _server) = serve_once("200 OK", "").await;
    let err = client(&base).profile().await.unwrap_err();
    assert!(matches!(&err, ClientError::EmptyResponse { path } if path == "api/Account/Profile"));
    assert_eq!(AppError::from(err).code, ErrorCode::InvalidFormat);

    let (base, _server) = serve_once("200 OK", "<html>").await;
    let err = client(&base).users().await.unwrap_err();
    assert!(matches!(err, ClientError::Decode { .. }));
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    // Port 9 (discard) on localhost is not expected to serve HTTP
    let client = HttpClient::new(&ClientConfig::new("http://127.0.0.1:9").with_timeout(2)).unwrap();

    let err = client.users().await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
    assert_eq!(AppError::from(err).code, ErrorCode::NetworkError);

    assert!(matches!(client.roles().await, Err(ClientError::Http(_))));
    assert!(matches!(client.order(OrderScope::All, 1).await, Err(ClientError::Http(_))));
    assert!(matches!(client.assign_role("u", "Admin").await, Err(ClientError::Http(_))));
    assert!(matches!(client.delete_user("a@b.c").await, Err(ClientError::Http(_))));
}

#[tokio::test]
async fn test_silent_backend_is_timeout() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let _server = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(std::time::Duration::from_secs(10)).await;
        drop(socket);
    });

    let client = HttpClient::new(&ClientConfig::new(base).with_timeout(1)).unwrap();
    let err = client.profile().await.unwrap_err();
    assert_eq!(AppError::from(err).code, ErrorCode::TimeoutError);
}

#[tokio::test]
async fn test_invalid_base_url() {
    let client = HttpClient::new(&ClientConfig::new("not a url")).unwrap();
    let err = client.users().await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidUrl { .. }));
    assert_eq!(AppError::from(err).code, ErrorCode::ConfigError);
}
