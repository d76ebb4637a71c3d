//! navwalker library
//!
//! Renders hierarchical navigation menus into Bootstrap 4 navbar markup.
//! The `navwalker` binary is a thin CLI over [`walker::Walker`].

pub mod config;
pub mod error;
pub mod escape;
pub mod menu;
pub mod walker;

pub use config::Config;
pub use error::{OptionsError, RenderError, RenderResult, StructuralError};
pub use escape::{Escaper, HtmlEscaper};
pub use menu::{Forest, MenuItem};
pub use walker::{Hooks, RenderKind, RenderOptions, Walker, render};
