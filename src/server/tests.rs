//! Tests for the HTTP server.

#[cfg(test)]
mod server_tests {
    use std::io::{self, Cursor};
    use std::pin::Pin;
    use std::task::{Context, Poll};
    use tokio::io::{AsyncRead, AsyncWrite, ReadBuf};

    use crate::parser::Method;
    use crate::router::{Router, write_json};
    use crate::server::{Error, HttpResponse, HttpServer, ServerConfig, StatusCode};

    // Mock TcpStream for testing
    struct MockTcpStream {
        read_data: Cursor<Vec<u8>>,
        write_data: Vec<u8>,
    }

    impl MockTcpStream {
        fn new(read_data: &[u8]) -> Self {
            Self {
                read_data: Cursor::new(read_data.to_vec()),
                write_data: Vec::new(),
            }
        }

        fn written(&self) -> String {
            String::from_utf8_lossy(&self.write_data).into_owned()
        }
    }

    impl AsyncRead for MockTcpStream {
        fn poll_read(
            self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            buf: &mut ReadBuf<'_>,
        ) -> Poll<io::Result<()>> {
            let this = self.get_mut();
            let n = std::io::Read::read(&mut this.read_data, buf.initialize_unfilled())?;
            buf.advance(n);
            Poll::Ready(Ok(()))
        }
    }

    impl AsyncWrite for MockTcpStream {
        fn poll_write(
            self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            buf: &[u8],
        ) -> Poll<io::Result<usize>> {
            let this = self.get_mut();
            this.write_data.extend_from_slice(buf);
            Poll::Ready(Ok(buf.len()))
        }

        fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
            Poll::Ready(Ok(()))
        }

        fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
            Poll::Ready(Ok(()))
        }
    }

    fn test_router() -> Router {
        let mut router = Router::new();
        router.handle_func("/users", &[Method::GET], |_req, w| {
            w.set_header("Content-Type", "text/plain");
            w.write_body(b"all users");
        });
        router.handle_func("/users/:id", &[Method::GET, Method::PUT], |req, w| {
            let id = req.path.trim_end_matches('/').rsplit('/').next().unwrap_or_default();
            let _ = write_json(w, &serde_json::json!({ "id": id }));
        });
        router.handle_func("/users/:id/posts", &[Method::POST], |_req, w| {
            w.write_status(StatusCode::Created);
        });
        router
    }

    async fn serve(router: &Router, raw: &[u8]) -> (Result<(), Error>, String) {
        let mut stream = MockTcpStream::new(raw);
        let result = HttpServer::handle_connection(&mut stream, router, 1024).await;
        (result, stream.written())
    }

    #[tokio::test]
    async fn test_server_creation() {
        let config = ServerConfig {
            addr: "127.0.0.1:9090".parse().unwrap(),
            max_connections: 100,
            read_buffer_size: 4096,
        };

        let server = HttpServer::new(config.clone(), test_router());
        assert_eq!(server.config.addr, config.addr);
        assert_eq!(server.config.max_connections, 100);
        assert_eq!(server.router.routes().count(), 3);
    }

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.max_connections, 1024);
        assert_eq!(config.read_buffer_size, 8192);

        let config = ServerConfig::with_addr("0.0.0.0:3000".parse().unwrap());
        assert_eq!(config.addr.port(), 3000);
        assert_eq!(config.read_buffer_size, 8192);
    }

    #[tokio::test]
    async fn test_static_route() {
        let router = test_router();
        let (result, response) = serve(&router, b"GET /users HTTP/1.1\r\nHost: localhost\r\n\r\n").await;

        assert!(result.is_ok());
        assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(response.contains("Content-Type: text/plain\r\n"));
        assert!(response.contains("Content-Length: 9\r\n"));
        assert!(response.ends_with("all users"));
    }

    #[tokio::test]
    async fn test_variable_route_with_json_body() {
        let router = test_router();
        let (result, response) = serve(&router, b"PUT /users/42/ HTTP/1.1\r\nHost: localhost\r\n\r\n").await;

        assert!(result.is_ok());
        assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(response.contains("Content-Type: application/json\r\n"));
        assert!(response.ends_with(r#"{"id":"42"}"#));
    }

    #[tokio::test]
    async fn test_query_string_does_not_affect_routing() {
        let router = test_router();
        let (result, response) = serve(&router, b"GET /users/7?fields=name HTTP/1.1\r\nHost: localhost\r\n\r\n").await;

        assert!(result.is_ok());
        assert!(response.ends_with(r#"{"id":"7"}"#));
    }

    #[tokio::test]
    async fn test_handler_sets_status() {
        let router = test_router();
        let (result, response) = serve(&router, b"POST /users/42/posts HTTP/1.1\r\nHost: localhost\r\n\r\n").await;

        assert!(result.is_ok());
        assert!(response.starts_with("HTTP/1.1 201 Created\r\n"));
        assert!(response.contains("Content-Length: 0\r\n"));
    }

    #[tokio::test]
    async fn test_not_found() {
        let router = test_router();
        let (result, response) = serve(&router, b"GET /users/42/comments HTTP/1.1\r\nHost: localhost\r\n\r\n").await;

        // Routing outcomes are responses, not errors
        assert!(result.is_ok());
        assert!(response.starts_with("HTTP/1.1 404 Not Found\r\n"));
        assert!(response.ends_with("404 Not Found"));
    }

    #[tokio::test]
    async fn test_method_not_allowed() {
        let router = test_router();
        let (result, response) = serve(&router, b"DELETE /users/42 HTTP/1.1\r\nHost: localhost\r\n\r\n").await;

        assert!(result.is_ok());
        assert!(response.starts_with("HTTP/1.1 405 Method Not Allowed\r\n"));
        assert!(response.contains("Allow: GET, PUT\r\n"));
    }

    #[tokio::test]
    async fn test_custom_not_found() {
        let mut router = test_router();
        router.override_status_handler(StatusCode::NotFound, |req, w| {
            w.write_body(format!("nothing at {}", req.path).as_bytes());
        });

        let (_, response) = serve(&router, b"GET /nope HTTP/1.1\r\nHost: localhost\r\n\r\n").await;
        assert!(response.starts_with("HTTP/1.1 404 Not Found\r\n"));
        assert!(response.ends_with("nothing at /nope"));
    }

    #[tokio::test]
    async fn test_invalid_request() {
        let router = test_router();
        let (result, response) = serve(&router, b"INVALID /users HTTP/1.1\r\nHost: localhost\r\n\r\n").await;

        assert!(matches!(result, Err(Error::ParseError(_))));
        assert!(response.starts_with("HTTP/1.1 400 Bad Request\r\n"));
        assert!(response.contains("Invalid HTTP method: INVALID"));
    }

    #[tokio::test]
    async fn test_relative_path_is_rejected() {
        let router = test_router();
        let (result, response) = serve(&router, b"GET users HTTP/1.1\r\nHost: localhost\r\n\r\n").await;

        assert!(matches!(result, Err(Error::ParseError(_))));
        assert!(response.starts_with("HTTP/1.1 400 Bad Request\r\n"));
    }

    #[tokio::test]
    async fn test_closed_connection() {
        let router = test_router();
        let (result, response) = serve(&router, b"").await;

        assert!(result.is_ok());
        assert!(response.is_empty());
    }

    #[test]
    fn test_response_to_bytes() {
        let response = HttpResponse::new(StatusCode::Accepted)
            .with_content_type("text/plain")
            .with_header("Content-Length", "999")
            .with_body_string("queued");
        let bytes = String::from_utf8(response.to_bytes()).unwrap();

        assert!(bytes.starts_with("HTTP/1.1 202 Accepted\r\n"));
        assert!(bytes.contains("Server: segment-router\r\n"));
        assert!(bytes.contains("Content-Length: 6\r\n"));
        assert!(!bytes.contains("999"));
        assert!(bytes.ends_with("\r\n\r\nqueued"));
    }
}
