//! Access logging and optional Basic Auth middleware.

use std::future::Future;
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Instant;

use axum::extract::{Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use base64::Engine;
use tracing::{debug, info, warn};

/// Basic Auth username and password.
pub(crate) type Credentials = Arc<(String, String)>;

/// Username that passed Basic Auth, attached to the response for the access log.
#[derive(Clone)]
pub(crate) struct AuthUser(pub(crate) String);

// ============================================================
// Access log
// ============================================================

/// One line per page view: client, user, status and render time.
///
/// Sits outside the auth middleware so rejected requests are logged too.
/// Health checks and browser icon requests only show up at debug level.
#[derive(Clone)]
pub(crate) struct AccessLogLayer;

/// Paths hit by health checkers and browsers rather than by a person.
fn is_background_path(path: &str) -> bool {
    path == "/api/v1/health" || path == "/favicon.ico"
}

impl<S> tower::Layer<S> for AccessLogLayer {
    type Service = AccessLogService<S>;
    fn layer(&self, inner: S) -> Self::Service {
        AccessLogService { inner }
    }
}

#[derive(Clone)]
pub(crate) struct AccessLogService<S> {
    inner: S,
}

impl<S> tower::Service<Request> for AccessLogService<S>
where
    S: tower::Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let method = req.method().clone();
        let path = req.uri().path().to_owned();
        let client = req
            .extensions()
            .get::<axum::extract::ConnectInfo<SocketAddr>>()
            .map(|ci| ci.0.ip().to_string())
            .unwrap_or_else(|| "-".to_owned());
        let t0 = Instant::now();

        let mut inner = self.inner.clone();
        Box::pin(async move {
            let response = inner.call(req).await?;
            let latency_ms = t0.elapsed().as_millis() as u64;
            let status = response.status().as_u16();
            let user = response
                .extensions()
                .get::<AuthUser>()
                .map(|u| u.0.as_str())
                .unwrap_or("-");
            if is_background_path(&path) {
                debug!(client, user, status, latency_ms, "{method} {path}");
            } else {
                info!(client, user, status, latency_ms, "{method} {path}");
            }
            Ok(response)
        })
    }
}

// ============================================================
// Basic Auth middleware
// ============================================================

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, "Basic realm=\"etsview\"")],
        "Unauthorized",
    )
        .into_response()
}

/// Extract `(user, password)` from an `Authorization: Basic ...` header value.
fn parse_basic(value: &str) -> Result<(String, String), &'static str> {
    let encoded = value.strip_prefix("Basic ").ok_or("not basic auth")?;
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .map_err(|_| "invalid base64")?;
    let decoded = String::from_utf8(decoded).map_err(|_| "invalid utf8")?;
    let (user, pass) = decoded
        .split_once(':')
        .ok_or("malformed credentials")?;
    Ok((user.to_owned(), pass.to_owned()))
}

/// Byte comparison whose running time depends only on the lengths.
fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

pub(crate) async fn basic_auth_middleware(
    State(creds): State<Credentials>,
    req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path().to_owned();

    let Some(auth_header) = req.headers().get(header::AUTHORIZATION) else {
        warn!(path = %path, "auth failed: no authorization header");
        return unauthorized();
    };

    let Ok(auth_str) = auth_header.to_str() else {
        warn!(path = %path, "auth failed: invalid header encoding");
        return unauthorized();
    };

    let (user, pass) = match parse_basic(auth_str) {
        Ok(pair) => pair,
        Err(reason) => {
            warn!(path = %path, reason, "auth failed");
            return unauthorized();
        }
    };

    // Compare both halves unconditionally.
    let user_ok = ct_eq(user.as_bytes(), creds.0.as_bytes());
    let pass_ok = ct_eq(pass.as_bytes(), creds.1.as_bytes());
    if !(user_ok & pass_ok) {
        warn!(user = %user, path = %path, "auth failed: invalid credentials");
        return unauthorized();
    }

    debug!(user = %user, path = %path, "authenticated");
    let mut response = next.run(req).await;
    response.extensions_mut().insert(AuthUser(user));
    response
}
