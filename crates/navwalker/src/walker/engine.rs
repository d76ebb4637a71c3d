//! Emission engine - walks a forest and writes navbar markup.

use tracing::debug;

use super::attributes::{self, AttrName, Attributes};
use super::classify::{RenderKind, classify};
use super::hooks::Hooks;
use super::options::RenderOptions;
use crate::error::RenderResult;
use crate::escape::{Escaper, HtmlEscaper};
use crate::menu::{Forest, MenuItem};

/// Classes on every sub-menu wrapper before hooks run.
const LEVEL_CLASSES: &[&str] = &["sub-menu", "dropdown-menu"];

/// Pending work for the walker.
///
/// The walk uses an explicit stack instead of recursion, so tree depth never
/// touches the call stack.
#[derive(Debug, Clone, Copy)]
enum Step {
    /// Open an item and queue its children.
    Element { id: u64, depth: usize },
    /// Close an item opened earlier.
    EndElement {
        id: u64,
        depth: usize,
        kind: RenderKind,
        walked: bool,
    },
    /// Open the wrapper around the children of an item at `depth`.
    StartLevel { depth: usize },
    /// Close the wrapper around the children of an item at `depth`.
    EndLevel { depth: usize },
}

/// Renders menu forests into Bootstrap navbar markup.
///
/// A walker holds only configuration; every call to [`Walker::render`] works
/// on its own output buffer, so one walker can be shared across threads.
#[derive(Debug)]
pub struct Walker {
    options: RenderOptions,
    hooks: Hooks,
    escaper: Box<dyn Escaper>,
}

impl Default for Walker {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl Walker {
    /// Create a walker with the default HTML escaper and no hooks.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            hooks: Hooks::default(),
            escaper: Box::new(HtmlEscaper),
        }
    }

    /// Replace the hook set.
    pub fn with_hooks(mut self, hooks: Hooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Replace the escaping collaborator.
    pub fn with_escaper(mut self, escaper: impl Escaper + 'static) -> Self {
        self.escaper = Box::new(escaper);
        self
    }

    /// The options this walker renders with.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Build a forest from flat items and render it.
    pub fn render_items(&self, items: Vec<MenuItem>) -> RenderResult<String> {
        let forest = Forest::build(items)?;
        Ok(self.render(&forest))
    }

    /// Render a forest to markup.
    pub fn render(&self, forest: &Forest) -> String {
        let mut output = String::new();
        let mut stack: Vec<Step> = forest
            .roots()
            .rev()
            .map(|item| Step::Element {
                id: item.id,
                depth: 0,
            })
            .collect();

        while let Some(step) = stack.pop() {
            match step {
                Step::Element { id, depth } => {
                    let Some(item) = forest.get(id) else {
                        continue;
                    };
                    let has_children = forest.has_children(id);
                    let kind = classify(item, depth, has_children);
                    self.start_el(&mut output, item, depth, kind);

                    let walked = has_children
                        && kind.walks_children()
                        && self.within_depth(item, depth);
                    stack.push(Step::EndElement {
                        id,
                        depth,
                        kind,
                        walked,
                    });
                    if walked {
                        stack.push(Step::EndLevel { depth });
                        stack.extend(item.children.iter().rev().map(|&child| Step::Element {
                            id: child,
                            depth: depth + 1,
                        }));
                        stack.push(Step::StartLevel { depth });
                    }
                }
                Step::EndElement {
                    id,
                    depth,
                    kind,
                    walked,
                } => {
                    if forest.get(id).is_some() {
                        self.end_el(&mut output, depth, kind, walked);
                    }
                }
                Step::StartLevel { depth } => self.start_lvl(&mut output, depth),
                Step::EndLevel { depth } => self.end_lvl(&mut output, depth),
            }
        }

        debug!(
            items = forest.len(),
            bytes = output.len(),
            escaper = self.escaper.name(),
            "rendered menu"
        );
        output
    }

    fn within_depth(&self, item: &MenuItem, depth: usize) -> bool {
        let allowed = self.options.max_depth.allows_children_at(depth);
        if !allowed {
            debug!(
                id = item.id,
                depth,
                max_depth = %self.options.max_depth,
                "depth limit reached, children skipped"
            );
        }
        allowed
    }

    /// Open the wrapper around a group of children.
    fn start_lvl(&self, output: &mut String, depth: usize) {
        let spacing = self.options.item_spacing;
        let classes = self.hooks.level_classes(
            LEVEL_CLASSES.iter().map(|c| c.to_string()).collect(),
            depth,
        );
        let attrs = Attributes::new()
            .with(AttrName::Role, "menu")
            .with(AttrName::Class, attributes::join_classes(&classes));

        let fragment = format!(
            "{n}{indent}<div{attrs}>{n}",
            n = spacing.newline(),
            indent = spacing.indent(depth),
            attrs = attrs.to_html(self.escaper.as_ref()),
        );
        output.push_str(&self.hooks.level_open(fragment, depth));
    }

    /// Close the wrapper around a group of children.
    fn end_lvl(&self, output: &mut String, depth: usize) {
        let spacing = self.options.item_spacing;
        let fragment = format!("{}</div>{}", spacing.indent(depth), spacing.newline());
        output.push_str(&self.hooks.level_close(fragment, depth));
    }

    /// Emit the opening fragment of an item.
    fn start_el(&self, output: &mut String, item: &MenuItem, depth: usize, kind: RenderKind) {
        let indent = self.options.item_spacing.indent(depth);
        let escaper = self.escaper.as_ref();

        let classes = self
            .hooks
            .item_classes(attributes::container_classes(item, kind), item, depth);
        let id = self
            .hooks
            .item_id(attributes::container_id(item, kind), item, depth);

        match kind {
            RenderKind::Divider => {
                let attrs = attributes::container_attributes(Some("presentation"), &id, &classes);
                output.push_str(&format!("{indent}<div{}>", attrs.to_html(escaper)));
            }
            RenderKind::DropdownHeader => {
                let attrs = attributes::container_attributes(Some("presentation"), &id, &classes);
                output.push_str(&format!(
                    "{indent}<h6{}>{}",
                    attrs.to_html(escaper),
                    escaper.text(&item.title)
                ));
            }
            RenderKind::DisabledLeaf => {
                let attrs = attributes::container_attributes(Some("presentation"), &id, &classes);
                output.push_str(&format!(
                    "{indent}<li{}><a href=\"#\">{}</a>",
                    attrs.to_html(escaper),
                    escaper.text(&item.title)
                ));
            }
            RenderKind::Branch | RenderKind::Leaf => {
                output.push_str(&indent);
                if depth == 0 {
                    let attrs = attributes::container_attributes(None, &id, &classes);
                    output.push_str(&format!("<li{}>", attrs.to_html(escaper)));
                }
                output.push_str(&self.link_fragment(item, depth, kind));
            }
        }
    }

    /// The `<a>` element with its surrounding option strings.
    fn link_fragment(&self, item: &MenuItem, depth: usize, kind: RenderKind) -> String {
        let options = &self.options;
        let attrs = self.hooks.link_attributes(
            attributes::link_attributes(item, depth, kind, options),
            item,
            depth,
        );
        let title = self.hooks.item_title(item.title.clone(), item, depth);

        let fragment = format!(
            "{before}<a{attrs}>{link_before}{title}{link_after}</a>{after}",
            before = options.before_link,
            attrs = attrs.to_html(self.escaper.as_ref()),
            link_before = options.link_before_text,
            title = self.escaper.text(&title),
            link_after = options.link_after_text,
            after = options.after_link,
        );
        self.hooks.item_output(fragment, item, depth)
    }

    /// Emit the closing fragment of an item.
    fn end_el(&self, output: &mut String, depth: usize, kind: RenderKind, walked: bool) {
        let n = self.options.item_spacing.newline();
        match kind {
            RenderKind::Divider => {
                output.push_str("</div>");
                output.push_str(n);
            }
            RenderKind::DropdownHeader => {
                output.push_str("</h6>");
                output.push_str(n);
            }
            RenderKind::DisabledLeaf => {
                output.push_str("</li>");
                output.push_str(n);
            }
            RenderKind::Branch | RenderKind::Leaf => {
                if depth == 0 {
                    output.push_str("</li>");
                    output.push_str(n);
                } else if !walked {
                    // Nested links end their own line; a sub-menu already did
                    output.push_str(n);
                }
            }
        }
    }
}

/// Render a forest with the given options, default escaping and no hooks.
pub fn render(forest: &Forest, options: &RenderOptions) -> String {
    Walker::new(options.clone()).render(forest)
}
