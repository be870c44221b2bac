//! Tool-specific error types.

use thiserror::Error;

/// Errors that can occur while assembling the tool surface.
#[derive(Debug, Error)]
pub enum ToolError {
    /// A catalog entry has no registered handler.
    #[error("Handler for tool {0} not found")]
    MissingHandler(String),

    /// Two catalog entries share the same name.
    #[error("Duplicate tool name in catalog: {0}")]
    DuplicateTool(String),
}

impl ToolError {
    /// Create a new "missing handler" error.
    pub fn missing_handler(name: impl Into<String>) -> Self {
        Self::MissingHandler(name.into())
    }

    /// Create a new "duplicate tool" error.
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateTool(name.into())
    }
}
