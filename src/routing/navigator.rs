//! Navigation entry point: route table plus component registry.
//!
//! # Responsibilities
//! - Check that every route's component is registered
//! - Turn a concrete path into a [`Mount`]
//! - Build hrefs from route names
//!
//! # Design Decisions
//! - Constructed explicitly and injected, never a process-wide instance
//! - Table and registry are shared via `Arc` and never mutated

use std::sync::Arc;

use serde::Serialize;

use crate::components::{ComponentRegistry, ComponentSpec};
use crate::config::AppConfig;
use crate::routing::matcher::Params;
use crate::routing::router::{BuildError, RouteError, RouteTable};

/// What should be mounted for a concrete path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mount<'a> {
    pub route: &'a str,
    pub component: &'a ComponentSpec,
    pub params: Params,
}

#[derive(Debug, Clone)]
pub struct Navigator {
    table: Arc<RouteTable>,
    registry: Arc<ComponentRegistry>,
}

impl Navigator {
    pub fn new(
        table: Arc<RouteTable>,
        registry: Arc<ComponentRegistry>,
    ) -> Result<Self, BuildError> {
        for route in table.routes() {
            if !registry.contains(route.component().as_str()) {
                return Err(BuildError::UnknownComponent {
                    route: route.name().to_string(),
                    component: route.component().to_string(),
                });
            }
        }

        Ok(Self { table, registry })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, BuildError> {
        let registry = ComponentRegistry::from_config(&config.components)?;
        let table = RouteTable::from_config(&config.routes)?;
        Self::new(Arc::new(table), Arc::new(registry))
    }

    pub fn navigate(&self, path: &str) -> Result<Mount<'_>, RouteError> {
        let matched = self.table.resolve(path)?;
        let component = self
            .registry
            .get(matched.component.as_str())
            .ok_or_else(|| RouteError::UnregisteredComponent {
                route: matched.name.to_string(),
                component: matched.component.to_string(),
            })?;

        Ok(Mount {
            route: matched.name,
            component,
            params: matched.params,
        })
    }

    pub fn href(&self, name: &str, params: &Params) -> Result<String, RouteError> {
        self.table.reverse(name, params)
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_builtin() {
        let navigator = Navigator::from_config(&AppConfig::default()).unwrap();
        let mount = navigator.navigate("/page/abc123").unwrap();
        assert_eq!(mount.route, "RunePage");
        assert_eq!(mount.component.key.as_str(), "Edit");
        assert_eq!(mount.params.get("uid").map(String::as_str), Some("abc123"));
    }

    #[test]
    fn test_unknown_component_rejected() {
        let table = RouteTable::builder()
            .route("/", "Main", "Dashboard")
            .build()
            .unwrap();
        let err = Navigator::new(Arc::new(table), Arc::new(ComponentRegistry::builtin()))
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::UnknownComponent {
                route: "Main".into(),
                component: "Dashboard".into()
            }
        );
    }

    #[test]
    fn test_missing_component_is_not_reported_as_no_match() {
        let table = RouteTable::builder()
            .route("/", "Main", "Dashboard")
            .build()
            .unwrap();
        // Skips the component check done by `new`.
        let navigator = Navigator {
            table: Arc::new(table),
            registry: Arc::new(ComponentRegistry::builtin()),
        };
        assert_eq!(
            navigator.navigate("/"),
            Err(RouteError::UnregisteredComponent {
                route: "Main".into(),
                component: "Dashboard".into()
            })
        );
    }

    #[test]
    fn test_href_rejects_values_clients_would_rewrite() {
        let navigator = Navigator::from_config(&AppConfig::default()).unwrap();
        for bad in ["..", ".", "Lee Sin"] {
            let params = Params::from([("champ".to_string(), bad.to_string())]);
            assert!(matches!(
                navigator.href("Champ", &params),
                Err(RouteError::InvalidParameter { .. })
            ));
        }
    }

    #[test]
    fn test_href() {
        let navigator = Navigator::from_config(&AppConfig::default()).unwrap();
        let params = Params::from([("ident".to_string(), "k3y".to_string())]);
        assert_eq!(navigator.href("Share", &params), Ok("/share/k3y".into()));
    }
}
