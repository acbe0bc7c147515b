//! History-mode app shell.
//!
//! Every client-side route is answered with the same `index.html`; the
//! browser app mounts the component itself. The route table decides only
//! the status code: 200 for known routes, 404 otherwise.

use std::path::{Path, PathBuf};
use std::time::Instant;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderName, HeaderValue, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::config::AssetsConfig;
use crate::http::server::AppState;
use crate::observability::metrics;

pub const X_ROUTE_NAME: HeaderName = HeaderName::from_static("x-route-name");
pub const X_ROUTE_COMPONENT: HeaderName = HeaderName::from_static("x-route-component");

/// The cached `index.html` of the single-page application.
#[derive(Debug, Clone)]
pub struct AppShell {
    html: Bytes,
}

impl AppShell {
    /// Read the shell from the assets directory.
    pub async fn load(assets: &AssetsConfig) -> std::io::Result<Self> {
        let html = tokio::fs::read(Self::path(assets)).await?;
        Ok(Self::from_html(html))
    }

    pub fn path(assets: &AssetsConfig) -> PathBuf {
        Path::new(&assets.dir).join(&assets.index_file)
    }

    pub fn from_html(html: impl Into<Bytes>) -> Self {
        Self { html: html.into() }
    }

    pub fn html(&self) -> &Bytes {
        &self.html
    }
}

/// Fallback for every path that is not a static asset.
pub async fn shell_handler(State(state): State<AppState>, uri: Uri) -> Response {
    let start = Instant::now();
    let path = uri.path();

    let (status, route, component) = match state.navigator.navigate(path) {
        Ok(mount) => (
            StatusCode::OK,
            Some(mount.route),
            Some(mount.component.key.as_str()),
        ),
        Err(e) => {
            tracing::debug!(path = %path, error = %e, "Serving app shell as not found");
            (StatusCode::NOT_FOUND, None, None)
        }
    };

    metrics::record_navigation(route, status.as_u16(), start);

    let mut response = (
        status,
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        state.shell.html().clone(),
    )
        .into_response();

    let headers = response.headers_mut();
    if let Some(value) = route.and_then(|r| HeaderValue::from_str(r).ok()) {
        headers.insert(X_ROUTE_NAME, value);
    }
    if let Some(value) = component.and_then(|c| HeaderValue::from_str(c).ok()) {
        headers.insert(X_ROUTE_COMPONENT, value);
    }

    response
}
