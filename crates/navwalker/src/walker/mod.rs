//! Menu walker - classification, attribute building and markup emission.
//!
//! The walker turns a [`Forest`](crate::menu::Forest) into Bootstrap 4
//! navbar markup: top-level `<li>` items, dropdown toggles, `role="menu"`
//! panels, dividers, headers and disabled items.

mod attributes;
mod classify;
mod engine;
mod hooks;
mod options;

pub use attributes::{
    AttrName, Attributes, container_classes, container_id, join_classes, link_attributes,
};
pub use classify::{RenderKind, classify};
pub use engine::{Walker, render};
pub use hooks::Hooks;
pub use options::{ItemSpacing, MaxDepth, RenderOptions};
