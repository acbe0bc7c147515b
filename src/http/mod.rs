//! HTTP host subsystem.
//!
//! # Data Flow
//! ```text
//! TCP/TLS connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID)
//!     → /api/* → api.rs (route table as JSON)
//!     → static file under the assets dir, if one exists
//!     → spa.rs (app shell, status from the route table)
//!     → response.rs (error mapping)
//!     → Send to client
//! ```

pub mod api;
pub mod request;
pub mod response;
pub mod server;
pub mod spa;

pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
pub use spa::AppShell;
