//! Attribute builder.
//!
//! Attributes are kept as an ordered list keyed by [`AttrName`]. Setting an
//! existing key replaces its value in place so that emission order stays
//! stable. Empty values are dropped at serialization.

use std::fmt;

use super::classify::RenderKind;
use super::options::RenderOptions;
use crate::escape::Escaper;
use crate::menu::MenuItem;

/// Attribute names the walker emits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttrName {
    Role,
    Id,
    Class,
    Title,
    Target,
    Rel,
    Href,
    AriaCurrent,
    DataToggle,
    AriaHaspopup,
    DataHover,
    /// Attribute added by a hook.
    Other(String),
}

impl AttrName {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Role => "role",
            Self::Id => "id",
            Self::Class => "class",
            Self::Title => "title",
            Self::Target => "target",
            Self::Rel => "rel",
            Self::Href => "href",
            Self::AriaCurrent => "aria-current",
            Self::DataToggle => "data-toggle",
            Self::AriaHaspopup => "aria-haspopup",
            Self::DataHover => "data-hover",
            Self::Other(name) => name.as_str(),
        }
    }
}

impl fmt::Display for AttrName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered attribute list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(AttrName, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing an existing value in place.
    pub fn set(&mut self, name: AttrName, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Builder form of [`Attributes::set`].
    pub fn with(mut self, name: AttrName, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &AttrName) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn remove(&mut self, name: &AttrName) -> Option<String> {
        let pos = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AttrName, &str)> {
        self.entries.iter().map(|(n, v)| (n, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize as ` name="value"` pairs.
    ///
    /// `href` goes through the escaper's URL function and is dropped when
    /// the sanitized URL is empty; every other value is attribute-escaped.
    pub fn to_html(&self, escaper: &dyn Escaper) -> String {
        let mut html = String::new();
        for (name, value) in &self.entries {
            if value.is_empty() {
                continue;
            }
            let escaped = match name {
                AttrName::Href => escaper.url(value),
                _ => escaper.attr(value),
            };
            if escaped.is_empty() {
                continue;
            }
            html.push(' ');
            html.push_str(name.as_str());
            html.push_str("=\"");
            html.push_str(&escaped);
            html.push('"');
        }
        html
    }
}

impl FromIterator<(AttrName, String)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (AttrName, String)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (name, value) in iter {
            attrs.set(name, value);
        }
        attrs
    }
}

/// Classes for the item's container element.
pub fn container_classes(item: &MenuItem, kind: RenderKind) -> Vec<String> {
    match kind {
        RenderKind::Divider => return vec!["dropdown-divider".to_string()],
        RenderKind::DropdownHeader => return vec!["dropdown-header".to_string()],
        _ => {}
    }

    let mut classes = item.classes.clone();
    classes.push(format!("menu-item-{}", item.id));
    classes.push("nav-item".to_string());
    if kind == RenderKind::Branch {
        classes.push("dropdown".to_string());
    }
    if item.is_active() {
        classes.push("active".to_string());
    }
    if item.marker_is("disabled") {
        classes.push("disabled".to_string());
    }
    classes
}

/// Id for the item's container element; empty when suppressed.
pub fn container_id(item: &MenuItem, kind: RenderKind) -> String {
    if kind.keeps_id() {
        format!("menu-item-{}", item.id)
    } else {
        String::new()
    }
}

/// Attributes for a container element.
pub fn container_attributes(role: Option<&str>, id: &str, classes: &[String]) -> Attributes {
    let mut attrs = Attributes::new();
    if let Some(role) = role {
        attrs.set(AttrName::Role, role);
    }
    attrs.set(AttrName::Id, id);
    attrs.set(AttrName::Class, join_classes(classes));
    attrs
}

/// Attributes for the item's `<a>` element.
pub fn link_attributes(
    item: &MenuItem,
    depth: usize,
    kind: RenderKind,
    options: &RenderOptions,
) -> Attributes {
    let branch = kind == RenderKind::Branch;
    let mut attrs = Attributes::new();

    attrs.set(AttrName::Title, item.marker.as_str());
    attrs.set(AttrName::Target, item.target.as_str());
    if item.opens_new_window() && item.rel.is_empty() {
        attrs.set(AttrName::Rel, "noopener noreferrer");
    } else {
        attrs.set(AttrName::Rel, item.rel.as_str());
    }

    let href = if depth == 0 && branch {
        "#"
    } else {
        item.url.as_str()
    };
    attrs.set(AttrName::Href, href);
    attrs.set(
        AttrName::AriaCurrent,
        if item.is_active() { "page" } else { "" },
    );

    let mut classes: Vec<&str> = Vec::new();
    if depth == 0 {
        if item.is_active() {
            classes.push("active");
        }
        classes.push("nav-link");
    } else {
        classes.push("dropdown-item");
        if item.marker_is("disabled") {
            classes.push("disabled");
        }
    }

    if depth == 0 && branch {
        classes.push("dropdown-toggle");
        attrs.set(AttrName::Class, classes.join(" "));
        attrs.set(AttrName::DataToggle, "dropdown");
        attrs.set(AttrName::AriaHaspopup, "true");
        if options.dropdown_on_hover {
            attrs.set(AttrName::DataHover, "dropdown");
        }
    } else {
        attrs.set(AttrName::Class, classes.join(" "));
    }

    attrs
}

/// Join class names, skipping empty ones.
pub fn join_classes(classes: &[String]) -> String {
    classes
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
