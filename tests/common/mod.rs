//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::path::PathBuf;

use runepage_router::config::AppConfig;
use runepage_router::http::{AppShell, AppState, HttpServer};
use runepage_router::lifecycle::Shutdown;
use runepage_router::Navigator;
use tokio::net::TcpListener;

pub const INDEX_HTML: &str = "<!doctype html><html><body><div id=\"app\"></div></body></html>";
pub const APP_JS: &str = "console.log('app');";

/// A running host on an ephemeral port with its own assets directory.
pub struct TestApp {
    pub addr: SocketAddr,
    pub assets: PathBuf,
    pub shutdown: Shutdown,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        client().get(self.url(path)).send().await.unwrap()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.shutdown.trigger();
        let _ = std::fs::remove_dir_all(&self.assets);
    }
}

/// Client that ignores proxy settings from the environment.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// Write a fake built app and start the host with the built-in routes.
pub async fn spawn_app() -> TestApp {
    let assets = std::env::temp_dir().join(format!("runepage-assets-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(assets.join("js")).unwrap();
    std::fs::write(assets.join("index.html"), INDEX_HTML).unwrap();
    std::fs::write(assets.join("js").join("app.js"), APP_JS).unwrap();

    let mut config = AppConfig::default();
    config.assets.dir = assets.to_string_lossy().into_owned();

    let navigator = Navigator::from_config(&config).unwrap();
    let shell = AppShell::load(&config.assets).await.unwrap();
    let server = HttpServer::new(config, AppState::new(navigator, shell));

    // Bound before spawning, so requests can be sent right away.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let signal = shutdown.listener();
    tokio::spawn(async move {
        let _ = server.run(listener, signal).await;
    });

    TestApp {
        addr,
        assets,
        shutdown,
    }
}
