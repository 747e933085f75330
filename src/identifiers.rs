// Copyright 2025 Cowboy AI, LLC.

//! Identifier types for buildings and residential units
//!
//! Identifiers come from the building register as opaque strings, e.g.
//! `NL.IMBAG.Pand.0518100000333865` for a building and
//! `NL.IMBAG.Verblijfsobject.0518010000505046` for a unit.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Building ID - identifies one physical structure
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct BuildingId(String);

impl BuildingId {
    /// Create from a string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BuildingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for BuildingId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for BuildingId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Unit ID - identifies one residential unit within a building
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct UnitId(String);

impl UnitId {
    /// Create from a string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UnitId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UnitId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
