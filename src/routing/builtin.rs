//! The application's hand-authored route table.

use crate::config::RouteConfig;

/// `(path, name, component)` in precedence order.
pub const ROUTES: &[(&str, &str, &str)] = &[
    ("/", "Main", "Main"),
    ("/login", "Login", "Login"),
    ("/champ/:champ", "Champ", "Champ"),
    ("/page/:uid", "RunePage", "Edit"),
    ("/pages", "Pages", "Pages"),
    ("/settings", "Settings", "Settings"),
    ("/share/:ident", "Share", "Share"),
];

/// Built-in routes as configuration entries.
pub fn route_configs() -> Vec<RouteConfig> {
    ROUTES
        .iter()
        .map(|&(path, name, component)| RouteConfig {
            path: path.to_string(),
            name: name.to_string(),
            component: component.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::matcher::Params;
    use crate::routing::RouteTable;

    #[test]
    fn test_builtin_table_compiles() {
        let table = RouteTable::from_config(&route_configs()).unwrap();
        assert_eq!(table.len(), ROUTES.len());
        assert_eq!(table.routes()[0].name(), "Main");
    }

    #[test]
    fn test_builtin_table_has_no_shadowed_routes() {
        let table = RouteTable::from_config(&route_configs()).unwrap();

        // Every route must be reachable by its own reverse-built path.
        for route in table.routes() {
            let params: Params = route
                .pattern()
                .param_names()
                .map(|name| (name.to_string(), format!("{name}-value")))
                .collect();
            let path = table.reverse(route.name(), &params).unwrap();
            assert_eq!(table.resolve(&path).unwrap().name, route.name());
        }
    }
}
