//! Page components known to the application.
//!
//! Routes never hold a component directly. They carry a [`ComponentKey`]
//! and the [`registry::ComponentRegistry`] resolves it to a descriptor the
//! mounting side can act on.

pub mod registry;

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

pub use registry::{ComponentRegistry, ComponentSpec};

/// Identifier of a page component, e.g. `"Edit"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentKey(String);

impl ComponentKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ComponentKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ComponentKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}
