//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeout, concurrency limit)
//! - Serve static assets, falling back to the app shell
//! - Bind server to a plain or TLS listener with graceful shutdown

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::handler::Handler;
use axum::http::{header, HeaderValue, Request};
use axum::routing::get;
use axum::Router;
use axum_server::tls_rustls::RustlsConfig;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::http::api;
use crate::http::request::{request_id, MakeRequestUuid, X_REQUEST_ID};
use crate::http::spa::{shell_handler, AppShell};
use crate::lifecycle::ShutdownListener;
use crate::routing::Navigator;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub navigator: Arc<Navigator>,
    pub shell: Arc<AppShell>,
}

impl AppState {
    pub fn new(navigator: Navigator, shell: AppShell) -> Self {
        Self {
            navigator: Arc::new(navigator),
            shell: Arc::new(shell),
        }
    }
}

/// HTTP host for the single-page application.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    pub fn new(config: AppConfig, state: AppState) -> Self {
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        let assets = ServeDir::new(&config.assets.dir)
            .append_index_html_on_directories(false)
            .fallback(shell_handler.with_state(state.clone()));

        let middleware = ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
            .layer(
                TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
                    tracing::info_span!(
                        "request",
                        method = %req.method(),
                        path = %req.uri().path(),
                        request_id = %request_id(req)
                    )
                }),
            )
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(SetResponseHeaderLayer::overriding(
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ))
            .layer(ConcurrencyLimitLayer::new(config.listener.max_connections))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )));

        Router::new()
            .route("/api/routes", get(api::list_routes))
            .route("/api/resolve", get(api::resolve))
            .route("/api/reverse", get(api::reverse))
            .with_state(state)
            .fallback_service(assets)
            .layer(middleware)
    }

    /// Serve plain HTTP on `listener` until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: ShutdownListener,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown.wait())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Serve HTTPS on `addr` until `shutdown` fires.
    pub async fn run_tls(
        self,
        addr: SocketAddr,
        shutdown: ShutdownListener,
    ) -> Result<(), std::io::Error> {
        let tls = &self.config.listener.tls;
        let rustls = RustlsConfig::from_pem_file(&tls.cert_path, &tls.key_path).await?;
        let grace = Duration::from_secs(self.config.timeouts.shutdown_grace_secs);

        let handle = axum_server::Handle::new();
        let shutdown_handle = handle.clone();
        tokio::spawn(async move {
            shutdown.wait().await;
            shutdown_handle.graceful_shutdown(Some(grace));
        });

        tracing::info!(address = %addr, "HTTPS server starting");
        axum_server::bind_rustls(addr, rustls)
            .handle(handle)
            .serve(self.router.into_make_service())
            .await?;

        tracing::info!("HTTPS server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
