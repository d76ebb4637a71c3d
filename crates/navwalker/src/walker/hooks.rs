//! Render hooks - injected transforms called at fixed extension points.
//!
//! Each hook receives the value the walker is about to emit and returns the
//! value to emit instead. Hooks that are not set leave the value unchanged.
//! Hooks run synchronously, in document order, during a single render call.

use std::fmt;

use super::attributes::Attributes;
use crate::menu::MenuItem;

type LevelClassesFn = dyn Fn(Vec<String>, usize) -> Vec<String> + Send + Sync;
type LevelFragmentFn = dyn Fn(String, usize) -> String + Send + Sync;
type ItemClassesFn = dyn Fn(Vec<String>, &MenuItem, usize) -> Vec<String> + Send + Sync;
type ItemStringFn = dyn Fn(String, &MenuItem, usize) -> String + Send + Sync;
type LinkAttributesFn = dyn Fn(Attributes, &MenuItem, usize) -> Attributes + Send + Sync;

/// Set of optional render hooks.
#[derive(Default)]
pub struct Hooks {
    level_classes: Option<Box<LevelClassesFn>>,
    level_open: Option<Box<LevelFragmentFn>>,
    level_close: Option<Box<LevelFragmentFn>>,
    item_classes: Option<Box<ItemClassesFn>>,
    item_id: Option<Box<ItemStringFn>>,
    link_attributes: Option<Box<LinkAttributesFn>>,
    item_title: Option<Box<ItemStringFn>>,
    item_output: Option<Box<ItemStringFn>>,
}

impl Hooks {
    /// Create an empty hook set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Classes of a sub-menu wrapper. `depth` is the parent's depth.
    pub fn on_level_classes(
        mut self,
        f: impl Fn(Vec<String>, usize) -> Vec<String> + Send + Sync + 'static,
    ) -> Self {
        self.level_classes = Some(Box::new(f));
        self
    }

    /// Opening fragment of a sub-menu wrapper, whitespace included.
    pub fn on_level_open(
        mut self,
        f: impl Fn(String, usize) -> String + Send + Sync + 'static,
    ) -> Self {
        self.level_open = Some(Box::new(f));
        self
    }

    /// Closing fragment of a sub-menu wrapper, whitespace included.
    pub fn on_level_close(
        mut self,
        f: impl Fn(String, usize) -> String + Send + Sync + 'static,
    ) -> Self {
        self.level_close = Some(Box::new(f));
        self
    }

    /// Classes of an item's container element.
    pub fn on_item_classes(
        mut self,
        f: impl Fn(Vec<String>, &MenuItem, usize) -> Vec<String> + Send + Sync + 'static,
    ) -> Self {
        self.item_classes = Some(Box::new(f));
        self
    }

    /// Id of an item's container element. An empty id is not emitted.
    pub fn on_item_id(
        mut self,
        f: impl Fn(String, &MenuItem, usize) -> String + Send + Sync + 'static,
    ) -> Self {
        self.item_id = Some(Box::new(f));
        self
    }

    /// Attributes of an item's `<a>` element.
    pub fn on_link_attributes(
        mut self,
        f: impl Fn(Attributes, &MenuItem, usize) -> Attributes + Send + Sync + 'static,
    ) -> Self {
        self.link_attributes = Some(Box::new(f));
        self
    }

    /// Raw link title. The result is escaped before emission.
    pub fn on_item_title(
        mut self,
        f: impl Fn(String, &MenuItem, usize) -> String + Send + Sync + 'static,
    ) -> Self {
        self.item_title = Some(Box::new(f));
        self
    }

    /// Final link fragment: `beforeLink`, the `<a>` element and `afterLink`.
    pub fn on_item_output(
        mut self,
        f: impl Fn(String, &MenuItem, usize) -> String + Send + Sync + 'static,
    ) -> Self {
        self.item_output = Some(Box::new(f));
        self
    }

    pub(crate) fn level_classes(&self, classes: Vec<String>, depth: usize) -> Vec<String> {
        match &self.level_classes {
            Some(f) => f(classes, depth),
            None => classes,
        }
    }

    pub(crate) fn level_open(&self, fragment: String, depth: usize) -> String {
        match &self.level_open {
            Some(f) => f(fragment, depth),
            None => fragment,
        }
    }

    pub(crate) fn level_close(&self, fragment: String, depth: usize) -> String {
        match &self.level_close {
            Some(f) => f(fragment, depth),
            None => fragment,
        }
    }

    pub(crate) fn item_classes(
        &self,
        classes: Vec<String>,
        item: &MenuItem,
        depth: usize,
    ) -> Vec<String> {
        match &self.item_classes {
            Some(f) => f(classes, item, depth),
            None => classes,
        }
    }

    pub(crate) fn item_id(&self, id: String, item: &MenuItem, depth: usize) -> String {
        match &self.item_id {
            Some(f) => f(id, item, depth),
            None => id,
        }
    }

    pub(crate) fn link_attributes(
        &self,
        attrs: Attributes,
        item: &MenuItem,
        depth: usize,
    ) -> Attributes {
        match &self.link_attributes {
            Some(f) => f(attrs, item, depth),
            None => attrs,
        }
    }

    pub(crate) fn item_title(&self, title: String, item: &MenuItem, depth: usize) -> String {
        match &self.item_title {
            Some(f) => f(title, item, depth),
            None => title,
        }
    }

    pub(crate) fn item_output(&self, output: String, item: &MenuItem, depth: usize) -> String {
        match &self.item_output {
            Some(f) => f(output, item, depth),
            None => output,
        }
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("level_classes", &self.level_classes.is_some())
            .field("level_open", &self.level_open.is_some())
            .field("level_close", &self.level_close.is_some())
            .field("item_classes", &self.item_classes.is_some())
            .field("item_id", &self.item_id.is_some())
            .field("link_attributes", &self.link_attributes.is_some())
            .field("item_title", &self.item_title.is_some())
            .field("item_output", &self.item_output.is_some())
            .finish()
    }
}
