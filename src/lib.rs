//! Route table and history-mode host for the rune page single-page app.

pub mod components;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{Mount, Navigator, Params, RouteError, RouteTable};
