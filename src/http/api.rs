//! JSON endpoints exposing the route table.

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::routing::router::RouteSummary;
use crate::routing::{Mount, Params};

#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    pub path: String,
}

/// Flat view of a [`Mount`]: route name, component key and title.
#[derive(Debug, Serialize)]
pub struct MountBody {
    pub name: String,
    pub component: String,
    pub title: String,
    pub params: Params,
}

impl From<Mount<'_>> for MountBody {
    fn from(mount: Mount<'_>) -> Self {
        Self {
            name: mount.route.to_string(),
            component: mount.component.key.to_string(),
            title: mount.component.title.clone(),
            params: mount.params,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReverseBody {
    pub path: String,
}

/// `GET /api/routes`: the table in precedence order.
pub async fn list_routes(State(state): State<AppState>) -> Json<Vec<RouteSummary>> {
    Json(
        state
            .navigator
            .table()
            .routes()
            .iter()
            .map(|r| r.summary())
            .collect(),
    )
}

/// `GET /api/resolve?path=/champ/Ashe`
pub async fn resolve(
    State(state): State<AppState>,
    Query(query): Query<ResolveQuery>,
) -> Result<Json<MountBody>, ApiError> {
    let mount = state.navigator.navigate(&query.path)?;
    Ok(Json(mount.into()))
}

/// `GET /api/reverse?name=Champ&champ=Ashe`
///
/// Every query pair other than `name` is a route parameter.
pub async fn reverse(
    State(state): State<AppState>,
    Query(mut query): Query<HashMap<String, String>>,
) -> Result<Json<ReverseBody>, ApiError> {
    let name = query
        .remove("name")
        .ok_or_else(|| ApiError::BadRequest("missing 'name' query parameter".into()))?;
    let params: Params = query.into_iter().collect();

    let path = state.navigator.href(&name, &params)?;
    Ok(Json(ReverseBody { path }))
}
