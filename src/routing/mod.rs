//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Concrete path (no query, no fragment)
//!     → router.rs (ordered route scan)
//!     → matcher.rs (segment alignment, parameter binding)
//!     → Return: RouteMatch or NoMatch
//!     → navigator.rs (component key → ComponentSpec) → Mount
//!
//! Reverse lookup:
//!     route name + Params
//!     → router.rs (name index)
//!     → matcher.rs (render)
//!     → concrete path
//!
//! Route Compilation (at startup):
//!     RouteConfig[] (builtin.rs or config file)
//!     → Compile patterns, index names
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex in hot path (segment comparison only)
//! - Deterministic: same input always matches same route
//! - First match wins (declaration order)

pub mod builtin;
pub mod matcher;
pub mod navigator;
pub mod router;

pub use matcher::{Params, Pattern, PatternError};
pub use navigator::{Mount, Navigator};
pub use router::{BuildError, Route, RouteError, RouteMatch, RouteSummary, RouteTable};
