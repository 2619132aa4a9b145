//! A small users API served through the router.
//!
//! Run with `RUST_LOG=debug cargo run --example users_server` and try:
//!
//! ```text
//! curl -i http://127.0.0.1:8080/users
//! curl -i http://127.0.0.1:8080/users/42
//! curl -i -X POST http://127.0.0.1:8080/users/42/posts
//! curl -i -X DELETE http://127.0.0.1:8080/users/42/posts
//! ```

use segment_router::{HttpServer, Method, Router, ServerConfig, StatusCode, write_json};
use serde::Serialize;

#[derive(Serialize)]
struct User {
    id: String,
    name: String,
}

fn last_segment(path: &str) -> &str {
    path.trim_end_matches('/').rsplit('/').next().unwrap_or_default()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut router = Router::new();

    router.handle_func("/", &[Method::GET], |_req, w| {
        w.set_header("Content-Type", "text/plain");
        w.write_body(b"segment-router demo\n");
    });

    router.handle_func("/users", &[Method::GET], |_req, w| {
        let users = vec![
            User { id: "1".to_string(), name: "Ada".to_string() },
            User { id: "2".to_string(), name: "Linus".to_string() },
        ];
        if let Err(e) = write_json(w, &users) {
            log::error!("Failed to encode users: {e}");
            w.write_status(StatusCode::InternalServerError);
        }
    });

    router.handle_func("/users/:id", &[Method::GET], |req, w| {
        let user = User {
            id: last_segment(&req.path).to_string(),
            name: "Ada".to_string(),
        };
        if let Err(e) = write_json(w, &user) {
            log::error!("Failed to encode user: {e}");
            w.write_status(StatusCode::InternalServerError);
        }
    });

    router.handle_func("/users/:id/posts", &[Method::GET, Method::POST], |req, w| {
        if req.method == Method::POST {
            w.write_status(StatusCode::Created);
        }
        w.set_header("Content-Type", "text/plain");
        w.write_body(format!("posts for {}\n", req.path).as_bytes());
    });

    router.override_status_handler(StatusCode::NotFound, |req, w| {
        w.set_header("Content-Type", "text/plain");
        w.write_body(format!("no route for {}\n", req.path).as_bytes());
    });

    let server = HttpServer::new(ServerConfig::default(), router);
    server.start().await?;

    Ok(())
}
