//! Walker error types.

use thiserror::Error;

/// The forest handed over by the menu collaborator is not a simple tree.
///
/// These are fatal: the renderer refuses the whole forest rather than
/// emitting partial markup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    /// Two items share the same id.
    #[error("menu item {id} appears more than once")]
    DuplicateId { id: u64 },

    /// An item lists a child id that is not in the forest.
    #[error("menu item {parent} lists unknown child {child}")]
    UnknownChild { parent: u64, child: u64 },

    /// An item points at a parent id that is not in the forest.
    #[error("menu item {child} points at unknown parent {parent}")]
    UnknownParent { child: u64, parent: u64 },

    /// An item is claimed as a child by more than one parent.
    #[error("menu item {child} is claimed by both {first} and {second}")]
    MultipleParents { child: u64, first: u64, second: u64 },

    /// An item is its own ancestor, so it can never be reached from a root.
    #[error("menu item {id} is part of a cycle")]
    Cycle { id: u64 },

    /// The tree nests deeper than the renderer is willing to walk.
    #[error("menu item {id} is nested {depth} levels deep (limit {limit})")]
    TooDeep { id: u64, depth: usize, limit: usize },
}

/// Errors raised while loading or parsing render options.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("invalid maxDepth '{0}': expected a non-negative integer or \"unlimited\"")]
    InvalidMaxDepth(String),

    #[error("failed to parse TOML options: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to parse JSON options: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors surfaced by the walker.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid menu structure: {0}")]
    Structure(#[from] StructuralError),

    #[error("failed to parse menu items: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias using RenderError.
pub type RenderResult<T> = Result<T, RenderError>;
