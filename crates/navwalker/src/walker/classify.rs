//! Node classification.

use crate::menu::MenuItem;

/// The markup shape chosen for a menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderKind {
    /// Separator inside a dropdown panel.
    Divider,
    /// Non-interactive label inside a dropdown panel.
    DropdownHeader,
    /// Greyed-out top-level item.
    DisabledLeaf,
    /// Item with a dropdown panel.
    Branch,
    /// Plain link.
    Leaf,
}

impl RenderKind {
    /// Whether items of this kind ever have their children walked.
    pub fn walks_children(self) -> bool {
        matches!(self, Self::Branch | Self::Leaf)
    }

    /// Whether the container keeps its `menu-item-<id>` id.
    pub fn keeps_id(self) -> bool {
        !matches!(self, Self::Divider | Self::DropdownHeader)
    }
}

/// Decide how to render `item` at `depth`. First match wins.
pub fn classify(item: &MenuItem, depth: usize, has_children: bool) -> RenderKind {
    if depth > 0 && (item.marker_is("divider") || item.title_is("divider")) {
        RenderKind::Divider
    } else if depth > 0 && item.marker_is("dropdown-header") {
        RenderKind::DropdownHeader
    } else if depth == 0 && item.marker_is("disabled") {
        RenderKind::DisabledLeaf
    } else if has_children || item.tagged_with_children() {
        RenderKind::Branch
    } else {
        RenderKind::Leaf
    }
}
