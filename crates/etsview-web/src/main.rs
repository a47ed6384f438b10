mod auth;
mod handlers;
mod layout;
mod state;

use std::net::SocketAddr;
use std::process;

use axum::Router;
use axum::routing::get;
use clap::Parser;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use auth::{AccessLogLayer, Credentials};
use state::WebState;

// ============================================================
// CLI
// ============================================================

#[derive(Parser)]
#[command(name = "etsview-web", about = "Web UI for browsing ETS tables", version = etsview_core::VERSION)]
struct Args {
    /// Listen address.
    #[arg(long, default_value = "127.0.0.1:15693", env = "ETSVIEW_LISTEN")]
    listen: String,

    /// Base URL of the table introspection backend.
    #[arg(long, default_value = "http://127.0.0.1:15692", env = "ETSVIEW_BACKEND_URL")]
    backend_url: String,

    /// Basic Auth username. If set, --auth-password is also required.
    #[arg(long, env = "ETSVIEW_AUTH_USER")]
    auth_user: Option<String>,

    /// Basic Auth password.
    #[arg(long, env = "ETSVIEW_AUTH_PASSWORD")]
    auth_password: Option<String>,
}

// ============================================================
// Main
// ============================================================

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("etsview_web=info,etsview_core=info")
            }),
        )
        .init();

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            error!(error = %e, "failed to build tokio runtime");
            process::exit(1);
        }
    };
    runtime.block_on(async_main(args));
}

async fn async_main(args: Args) {
    let creds: Option<Credentials> = match (args.auth_user, args.auth_password) {
        (Some(user), Some(pass)) => {
            info!(user = %user, "basic auth enabled");
            Some(Credentials::new((user, pass)))
        }
        (Some(_), None) | (None, Some(_)) => {
            error!("--auth-user and --auth-password must both be set");
            process::exit(1);
        }
        (None, None) => None,
    };

    let addr: SocketAddr = match args.listen.parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!(listen = %args.listen, error = %e, "invalid listen address");
            process::exit(1);
        }
    };

    info!(version = etsview_core::VERSION, backend = %args.backend_url, "starting");
    let app = build_router(WebState::new(&args.backend_url), creds)
        .into_make_service_with_connect_info::<SocketAddr>();

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!(%addr, error = %e, "failed to bind");
            process::exit(1);
        }
    };
    info!(%addr, "listening");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server error");
        process::exit(1);
    }
}

/// Every path other than the health check is a page; unknown paths show the list.
fn build_router(state: WebState, creds: Option<Credentials>) -> Router {
    let mut app = Router::new()
        .route("/api/v1/health", get(handlers::handle_health))
        .fallback(get(handlers::serve_page))
        .with_state(state);

    if let Some(creds) = creds {
        app = app.layer(axum::middleware::from_fn_with_state(
            creds,
            auth::basic_auth_middleware,
        ));
    }

    // Outermost: sees the final status, including auth rejections.
    app.layer(AccessLogLayer)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Json;
    use axum::body::Body;
    use axum::extract::Path;
    use axum::http::{Request, StatusCode, header};
    use axum::response::IntoResponse;
    use base64::Engine;
    use serde_json::json;
    use tower::ServiceExt;

    async fn stub_list() -> Json<serde_json::Value> {
        Json(json!({
            "tables": [
                {"name": "ac_tab", "table_type": "set", "size": 4200, "memory_bytes": 2048,
                 "owner": "<0.90.0>", "protection": "public"},
                {"name": "foo bar", "table_type": "bag", "size": 0, "memory_bytes": 300,
                 "owner": "<0.91.0>", "protection": "private"}
            ],
            "total": 2
        }))
    }

    async fn stub_contents(Path(name): Path<String>) -> axum::response::Response {
        if name == "missing" {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({"error": "Table not found: missing"})),
            )
                .into_response();
        }
        Json(json!({
            "table_name": name,
            "entries": [{"index": 1, "entry": "{<<\"k\">>,<script>}"}],
            "total": 1
        }))
        .into_response()
    }

    async fn spawn_backend() -> String {
        let router = Router::new()
            .route("/api/v1/tables/list", get(stub_list))
            .route("/api/v1/tables/{name}/contents", get(stub_contents));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    async fn get_page(app: Router, uri: &str, auth: Option<&str>) -> (StatusCode, String) {
        let mut req = Request::builder().uri(uri);
        if let Some(value) = auth {
            req = req.header(header::AUTHORIZATION, value);
        }
        let resp = app.oneshot(req.body(Body::empty()).unwrap()).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_root_renders_tables_list() {
        let app = build_router(WebState::new(&spawn_backend().await), None);
        let (status, body) = get_page(app, "/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"<div id="app">"#));
        assert!(body.contains("2 tables"));
        assert!(body.contains("4,200"));
        assert!(body.contains("2.0 KiB"));
        assert!(body.contains(r#"href="/tables/foo%20bar""#));
        assert!(!body.contains("Loading..."));
    }

    #[tokio::test]
    async fn test_unknown_path_falls_back_to_list() {
        let app = build_router(WebState::new(&spawn_backend().await), None);
        let (status, body) = get_page(app, "/other", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("2 tables"));
    }

    #[tokio::test]
    async fn test_table_page_renders_escaped_contents() {
        let app = build_router(WebState::new(&spawn_backend().await), None);
        let (status, body) = get_page(app, "/tables/foo%20bar", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<title>foo bar - ETS Tables</title>"));
        assert!(body.contains("Table: foo bar"));
        assert!(body.contains("1 entries"));
        assert!(body.contains("&lt;script&gt;"));
        assert!(!body.contains("<script>"));
    }

    #[tokio::test]
    async fn test_backend_error_is_rendered() {
        let app = build_router(WebState::new(&spawn_backend().await), None);
        let (status, body) = get_page(app, "/tables/missing", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("alert-danger"));
        assert!(body.contains("Table not found: missing"));
        assert!(body.contains(r#"<a href="/">Tables</a>"#));
    }

    #[tokio::test]
    async fn test_unreachable_backend_page_hides_backend_url() {
        let app = build_router(WebState::new("http://127.0.0.1:9/private-base"), None);
        let (status, body) = get_page(app, "/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("alert-danger"));
        assert!(!body.contains("127.0.0.1:9"));
        assert!(!body.contains("private-base"));
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(WebState::new("http://127.0.0.1:9"), None);
        let (status, body) = get_page(app, "/api/v1/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_basic_auth() {
        let backend = spawn_backend().await;
        let creds = Credentials::new(("admin".to_owned(), "secret".to_owned()));

        let app = build_router(WebState::new(&backend), Some(creds.clone()));
        let (status, _) = get_page(app, "/", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let wrong = format!(
            "Basic {}",
            base64::engine::general_purpose::STANDARD.encode("admin:nope")
        );
        let app = build_router(WebState::new(&backend), Some(creds.clone()));
        let (status, _) = get_page(app, "/", Some(&wrong)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let right = format!(
            "Basic {}",
            base64::engine::general_purpose::STANDARD.encode("admin:secret")
        );
        let app = build_router(WebState::new(&backend), Some(creds));
        let (status, body) = get_page(app, "/", Some(&right)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("2 tables"));
    }
}
