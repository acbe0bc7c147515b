//! Route lookup and reverse lookup.
//!
//! # Responsibilities
//! - Store compiled routes in declaration order
//! - Look up the first route matching a concrete path
//! - Build a concrete path from a route name and parameters
//! - Return matched route or explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(1) name lookup via HashMap for reverse
//! - O(n) ordered scan for resolve (acceptable for typical route counts)
//! - Explicit NoMatch rather than silent default

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

use crate::components::ComponentKey;
use crate::config::RouteConfig;
use crate::routing::matcher::{Params, Pattern, PatternError, RenderError};

/// Failure of a `resolve` or `reverse` call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("no route matches '{path}'")]
    NoMatch { path: String },

    #[error("path '{path}' does not start with '/'")]
    MalformedPath { path: String },

    #[error("no route is named '{name}'")]
    UnknownRouteName { name: String },

    #[error("route '{route}' requires parameter '{param}'")]
    MissingParameter { route: String, param: String },

    #[error("value '{value}' for parameter '{param}' of route '{route}' is not a valid path segment")]
    InvalidParameter {
        route: String,
        param: String,
        value: String,
    },

    /// A matched route's component is missing from the registry. Only
    /// reachable if a `Navigator` was built without its component check.
    #[error("route '{route}' mounts unregistered component '{component}'")]
    UnregisteredComponent { route: String, component: String },
}

/// Failure while assembling a route table or the registry around it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("route name '{0}' is declared more than once")]
    DuplicateRouteName(String),

    #[error("route '{route}' has an invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        route: String,
        pattern: String,
        #[source]
        source: PatternError,
    },

    #[error("route '{route}' references unknown component '{component}'")]
    UnknownComponent { route: String, component: String },

    #[error("component '{0}' is registered more than once")]
    DuplicateComponent(String),
}

/// A single compiled route.
#[derive(Debug, Clone)]
pub struct Route {
    name: String,
    pattern: Pattern,
    component: ComponentKey,
}

impl Route {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn component(&self) -> &ComponentKey {
        &self.component
    }

    pub fn summary(&self) -> RouteSummary {
        RouteSummary {
            name: self.name.clone(),
            path: self.pattern.as_str().to_string(),
            component: self.component.clone(),
            params: self.pattern.param_names().map(str::to_string).collect(),
        }
    }
}

/// Serializable description of a route for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteSummary {
    pub name: String,
    pub path: String,
    pub component: ComponentKey,
    pub params: Vec<String>,
}

/// Result of a successful `resolve`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    pub name: &'a str,
    pub component: &'a ComponentKey,
    pub params: Params,
}

/// Ordered, immutable route table.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
    by_name: HashMap<String, usize>,
}

impl RouteTable {
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::default()
    }

    /// Compile a table from configuration entries, keeping their order.
    pub fn from_config(routes: &[RouteConfig]) -> Result<Self, BuildError> {
        routes
            .iter()
            .fold(Self::builder(), |builder, r| {
                builder.route(r.path.as_str(), r.name.as_str(), r.component.as_str())
            })
            .build()
    }

    /// Find the first route, in declaration order, whose pattern fully
    /// aligns with `path`.
    pub fn resolve(&self, path: &str) -> Result<RouteMatch<'_>, RouteError> {
        if !path.starts_with('/') {
            return Err(RouteError::MalformedPath {
                path: path.to_string(),
            });
        }

        self.routes
            .iter()
            .find_map(|route| {
                route.pattern.matches(path).map(|params| RouteMatch {
                    name: &route.name,
                    component: &route.component,
                    params,
                })
            })
            .ok_or_else(|| {
                tracing::trace!(path = %path, "No route matched");
                RouteError::NoMatch {
                    path: path.to_string(),
                }
            })
    }

    /// Build the concrete path of the route called `name`.
    pub fn reverse(&self, name: &str, params: &Params) -> Result<String, RouteError> {
        let route = self.get(name).ok_or_else(|| RouteError::UnknownRouteName {
            name: name.to_string(),
        })?;

        route.pattern.render(params).map_err(|e| match e {
            RenderError::Missing(param) => RouteError::MissingParameter {
                route: route.name.clone(),
                param,
            },
            RenderError::Invalid { param, value } => RouteError::InvalidParameter {
                route: route.name.clone(),
                param,
                value,
            },
        })
    }

    pub fn get(&self, name: &str) -> Option<&Route> {
        self.by_name.get(name).map(|&i| &self.routes[i])
    }

    /// Routes in declaration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Collects `(path, name, component)` triples and compiles them once.
#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    entries: Vec<(String, String, String)>,
}

impl RouteTableBuilder {
    pub fn route(
        mut self,
        path: impl Into<String>,
        name: impl Into<String>,
        component: impl Into<String>,
    ) -> Self {
        self.entries.push((path.into(), name.into(), component.into()));
        self
    }

    pub fn build(self) -> Result<RouteTable, BuildError> {
        let mut routes = Vec::with_capacity(self.entries.len());
        let mut by_name = HashMap::with_capacity(self.entries.len());

        for (path, name, component) in self.entries {
            let pattern = Pattern::parse(&path).map_err(|source| BuildError::InvalidPattern {
                route: name.clone(),
                pattern: path.clone(),
                source,
            })?;

            if by_name.insert(name.clone(), routes.len()).is_some() {
                return Err(BuildError::DuplicateRouteName(name));
            }

            routes.push(Route {
                name,
                pattern,
                component: ComponentKey::new(component),
            });
        }

        tracing::debug!(routes = routes.len(), "Route table compiled");
        Ok(RouteTable { routes, by_name })
    }
}
