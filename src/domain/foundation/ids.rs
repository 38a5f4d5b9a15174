//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Identifier of a tool document.
///
/// Assigned by the store on creation and opaque to the rest of the system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolId(String);

impl ToolId {
    /// Creates a new ToolId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("tool_id"));
        }
        if id.contains('/') {
            return Err(ValidationError::invalid_format(
                "tool_id",
                "must not contain '/'",
            ));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ToolId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Unique identifier for a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToastId(Uuid);

impl ToastId {
    /// Creates a new random ToastId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ToastId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_id_rejects_empty() {
        assert!(ToolId::new("").is_err());
        assert!(ToolId::new("   ").is_err());
    }

    #[test]
    fn tool_id_rejects_path_separator() {
        assert!(matches!(
            ToolId::new("tools/abc"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn tool_id_parses_and_displays() {
        let id: ToolId = "Xy12ab".parse().unwrap();
        assert_eq!(id.as_str(), "Xy12ab");
        assert_eq!(id.to_string(), "Xy12ab");
    }

    #[test]
    fn tool_id_serializes_transparently() {
        let id = ToolId::new("a").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"a\"");
    }

    #[test]
    fn toast_id_roundtrips_through_string() {
        let id = ToastId::new();
        let parsed: ToastId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn toast_ids_are_unique() {
        assert_ne!(ToastId::new(), ToastId::new());
    }
}
