//! Component registry: key → descriptor.

use std::collections::HashMap;

use serde::Serialize;

use crate::components::ComponentKey;
use crate::config::ComponentConfig;
use crate::routing::BuildError;

/// Built-in components and their display titles.
pub const COMPONENTS: &[(&str, &str)] = &[
    ("Main", "Champions"),
    ("Login", "Login"),
    ("Champ", "Champion Pages"),
    ("Edit", "Edit Page"),
    ("Pages", "Pages"),
    ("Settings", "Settings"),
    ("Share", "Shared Page"),
];

/// Descriptor of a mountable page component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentSpec {
    pub key: ComponentKey,
    pub title: String,
}

/// Immutable lookup from [`ComponentKey`] to [`ComponentSpec`].
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    components: HashMap<ComponentKey, ComponentSpec>,
}

impl ComponentRegistry {
    pub fn builtin() -> Self {
        let components = COMPONENTS
            .iter()
            .map(|&(key, title)| {
                let key = ComponentKey::new(key);
                let spec = ComponentSpec {
                    key: key.clone(),
                    title: title.to_string(),
                };
                (key, spec)
            })
            .collect();
        Self { components }
    }

    pub fn from_config(entries: &[ComponentConfig]) -> Result<Self, BuildError> {
        let mut components = HashMap::with_capacity(entries.len());
        for entry in entries {
            let key = ComponentKey::new(entry.key.as_str());
            let spec = ComponentSpec {
                key: key.clone(),
                title: entry.title.clone(),
            };
            if components.insert(key, spec).is_some() {
                return Err(BuildError::DuplicateComponent(entry.key.clone()));
            }
        }
        Ok(Self { components })
    }

    pub fn get(&self, key: &str) -> Option<&ComponentSpec> {
        self.components.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.components.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

/// Built-in components as configuration entries.
pub fn component_configs() -> Vec<ComponentConfig> {
    COMPONENTS
        .iter()
        .map(|&(key, title)| ComponentConfig {
            key: key.to_string(),
            title: title.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry() {
        let registry = ComponentRegistry::builtin();
        assert_eq!(registry.len(), 7);
        assert_eq!(registry.get("Edit").unwrap().title, "Edit Page");
        assert!(registry.get("Missing").is_none());
    }

    #[test]
    fn test_from_config_matches_builtin() {
        let registry = ComponentRegistry::from_config(&component_configs()).unwrap();
        let builtin = ComponentRegistry::builtin();
        for &(key, _) in COMPONENTS {
            assert_eq!(registry.get(key), builtin.get(key));
        }
    }

    #[test]
    fn test_from_config_rejects_duplicates() {
        let entries = vec![
            ComponentConfig {
                key: "Main".into(),
                title: "A".into(),
            },
            ComponentConfig {
                key: "Main".into(),
                title: "B".into(),
            },
        ];
        assert_eq!(
            ComponentRegistry::from_config(&entries).unwrap_err(),
            BuildError::DuplicateComponent("Main".into())
        );
    }
}
