//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check referential integrity (routes reference existing components)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Detect duplicate route names and malformed patterns
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::routing::matcher::{Pattern, PatternError};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: &[&str] = &["pretty", "json"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid bind address '{0}'")]
    BindAddress(String),

    #[error("invalid metrics address '{0}'")]
    MetricsAddress(String),

    #[error("request timeout must be greater than zero")]
    ZeroRequestTimeout,

    #[error("max_connections must be greater than zero")]
    ZeroMaxConnections,

    #[error("TLS is enabled but cert_path or key_path is empty")]
    TlsIncomplete,

    #[error("unknown log level '{0}'")]
    LogLevel(String),

    #[error("unknown log format '{0}'")]
    LogFormat(String),

    #[error("component '{0}' is declared more than once")]
    DuplicateComponent(String),

    #[error("route name '{0}' is declared more than once")]
    DuplicateRouteName(String),

    #[error("route '{route}' has an invalid pattern: {source}")]
    InvalidPattern {
        route: String,
        #[source]
        source: PatternError,
    },

    #[error("route '{route}' references unknown component '{component}'")]
    UnknownComponent { route: String, component: String },
}

pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }
    if config.listener.max_connections == 0 {
        errors.push(ValidationError::ZeroMaxConnections);
    }
    let tls = &config.listener.tls;
    if tls.enabled && (tls.cert_path.is_empty() || tls.key_path.is_empty()) {
        errors.push(ValidationError::TlsIncomplete);
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    let obs = &config.observability;
    if !LOG_LEVELS.contains(&obs.log_level.to_lowercase().as_str()) {
        errors.push(ValidationError::LogLevel(obs.log_level.clone()));
    }
    if !LOG_FORMATS.contains(&obs.log_format.as_str()) {
        errors.push(ValidationError::LogFormat(obs.log_format.clone()));
    }
    if obs.metrics_enabled && obs.metrics_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::MetricsAddress(obs.metrics_address.clone()));
    }

    let mut components = HashSet::new();
    for component in &config.components {
        if !components.insert(component.key.as_str()) {
            errors.push(ValidationError::DuplicateComponent(component.key.clone()));
        }
    }

    let mut names = HashSet::new();
    for route in &config.routes {
        if !names.insert(route.name.as_str()) {
            errors.push(ValidationError::DuplicateRouteName(route.name.clone()));
        }
        if let Err(source) = Pattern::parse(&route.path) {
            errors.push(ValidationError::InvalidPattern {
                route: route.name.clone(),
                source,
            });
        }
        if !components.contains(route.component.as_str()) {
            errors.push(ValidationError::UnknownComponent {
                route: route.name.clone(),
                component: route.component.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
