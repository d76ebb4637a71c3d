//! navwalker test utilities.
//!
//! Helpers for integration testing: menu item builders and sample forests.

use navwalker::MenuItem;

/// Create a test link with default values.
pub fn test_link(id: u64, title: &str, url: &str) -> TestLink {
    TestLink {
        item: MenuItem {
            url: url.to_string(),
            ..MenuItem::new(id, title)
        },
    }
}

/// A menu item builder for creating test fixtures.
#[derive(Debug, Clone)]
pub struct TestLink {
    item: MenuItem,
}

impl TestLink {
    /// Set the parent pointer.
    pub fn with_parent(mut self, parent: u64) -> Self {
        self.item.parent = Some(parent);
        self
    }

    /// Set explicit child ids.
    pub fn with_children(mut self, children: &[u64]) -> Self {
        self.item.children = children.to_vec();
        self
    }

    /// Set the marker field.
    pub fn with_marker(mut self, marker: &str) -> Self {
        self.item.marker = marker.to_string();
        self
    }

    /// Add a style tag.
    pub fn with_class(mut self, class: &str) -> Self {
        self.item.classes.push(class.to_string());
        self
    }

    /// Set the link target.
    pub fn with_target(mut self, target: &str) -> Self {
        self.item.target = target.to_string();
        self
    }

    /// Set the link relationship.
    pub fn with_rel(mut self, rel: &str) -> Self {
        self.item.rel = rel.to_string();
        self
    }

    /// Mark as the current page.
    pub fn current(self) -> Self {
        self.with_class("current-menu-item")
    }

    /// Mark as a divider.
    pub fn divider(self) -> Self {
        self.with_marker("divider")
    }

    /// Mark as a dropdown header.
    pub fn header(self) -> Self {
        self.with_marker("dropdown-header")
    }

    /// Mark as disabled.
    pub fn disabled(self) -> Self {
        self.with_marker("disabled")
    }

    /// Finish building.
    pub fn build(self) -> MenuItem {
        self.item
    }
}

impl From<TestLink> for MenuItem {
    fn from(link: TestLink) -> Self {
        link.build()
    }
}

/// A two-level menu exercising every render kind:
///
/// - Products (1): Widgets (2), divider (3), "More" header (4), Gadgets (5, current)
/// - About (6)
/// - Coming soon (7, disabled)
pub fn sample_menu() -> Vec<MenuItem> {
    vec![
        test_link(1, "Products", "/products").build(),
        test_link(2, "Widgets", "/widgets").with_parent(1).build(),
        test_link(3, "divider", "").with_parent(1).build(),
        test_link(4, "More", "").header().with_parent(1).build(),
        test_link(5, "Gadgets", "/gadgets")
            .current()
            .with_parent(1)
            .build(),
        test_link(6, "About", "/about").build(),
        test_link(7, "Coming soon", "/soon").disabled().build(),
    ]
}

/// A single chain of `levels` nested links, ids 1..=levels.
pub fn chain_menu(levels: u64) -> Vec<MenuItem> {
    (1..=levels)
        .map(|id| {
            let link = test_link(id, &format!("Level {id}"), &format!("/level/{id}"));
            if id == 1 {
                link.build()
            } else {
                link.with_parent(id - 1).build()
            }
        })
        .collect()
}

/// Serialize items the way the menu collaborator hands them over.
pub fn to_json(items: &[MenuItem]) -> serde_json::Result<String> {
    serde_json::to_string(items)
}
