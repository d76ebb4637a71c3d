//! Forest - the validated, read-only menu tree handed to the walker.
//!
//! The storage collaborator supplies a flat, ordered list of items. Items can
//! be linked either by parent pointer or by explicit child id lists (or both);
//! `Forest::build` folds both into child lists and rejects anything that is
//! not a simple tree.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::item::MenuItem;
use crate::error::{RenderResult, StructuralError};

/// Deepest nesting accepted from the collaborator.
pub const MAX_TREE_DEPTH: usize = 256;

/// An immutable, validated forest of menu items.
#[derive(Debug, Clone, Default)]
pub struct Forest {
    /// Items in input order, child lists normalized.
    items: Vec<MenuItem>,
    /// Item id -> position in `items`.
    index: HashMap<u64, usize>,
    /// Top-level item ids in input order.
    roots: Vec<u64>,
}

impl Forest {
    /// Build a forest from a flat list of items.
    pub fn build(mut items: Vec<MenuItem>) -> Result<Self, StructuralError> {
        let mut index = HashMap::with_capacity(items.len());
        for (pos, item) in items.iter().enumerate() {
            if index.insert(item.id, pos).is_some() {
                return Err(StructuralError::DuplicateId { id: item.id });
            }
        }

        // Fold parent pointers into the parents' child lists
        for pos in 0..items.len() {
            let Some(parent) = items[pos].parent else {
                continue;
            };
            let child = items[pos].id;
            let Some(&parent_pos) = index.get(&parent) else {
                return Err(StructuralError::UnknownParent { child, parent });
            };
            if !items[parent_pos].children.contains(&child) {
                items[parent_pos].children.push(child);
            }
        }

        let mut owner: HashMap<u64, u64> = HashMap::new();
        for item in &mut items {
            let mut seen = HashSet::new();
            item.children.retain(|child| seen.insert(*child));

            for &child in &item.children {
                if !index.contains_key(&child) {
                    return Err(StructuralError::UnknownChild {
                        parent: item.id,
                        child,
                    });
                }
                if let Some(first) = owner.insert(child, item.id) {
                    return Err(StructuralError::MultipleParents {
                        child,
                        first,
                        second: item.id,
                    });
                }
            }
        }

        let roots: Vec<u64> = items
            .iter()
            .map(|item| item.id)
            .filter(|id| !owner.contains_key(id))
            .collect();

        let forest = Self {
            items,
            index,
            roots,
        };
        forest.check_reachable()?;

        debug!(
            items = forest.items.len(),
            roots = forest.roots.len(),
            "built menu forest"
        );
        Ok(forest)
    }

    /// Parse a JSON array of menu items and build a forest from it.
    pub fn from_json(json: &str) -> RenderResult<Self> {
        let items: Vec<MenuItem> = serde_json::from_str(json)?;
        Ok(Self::build(items)?)
    }

    /// Every item has at most one parent, so an item not reachable from a
    /// root sits on a cycle.
    fn check_reachable(&self) -> Result<(), StructuralError> {
        let mut visited = HashSet::with_capacity(self.items.len());
        let mut stack: Vec<(u64, usize)> = self.roots.iter().map(|&id| (id, 0)).collect();

        while let Some((id, depth)) = stack.pop() {
            if depth > MAX_TREE_DEPTH {
                return Err(StructuralError::TooDeep {
                    id,
                    depth,
                    limit: MAX_TREE_DEPTH,
                });
            }
            if !visited.insert(id) {
                return Err(StructuralError::Cycle { id });
            }
            if let Some(item) = self.get(id) {
                stack.extend(item.children.iter().map(|&child| (child, depth + 1)));
            }
        }

        match self.items.iter().find(|item| !visited.contains(&item.id)) {
            Some(item) => Err(StructuralError::Cycle { id: item.id }),
            None => Ok(()),
        }
    }

    /// Look up an item by id.
    pub fn get(&self, id: u64) -> Option<&MenuItem> {
        self.index.get(&id).map(|&pos| &self.items[pos])
    }

    /// Top-level items in order.
    pub fn roots(&self) -> impl DoubleEndedIterator<Item = &MenuItem> {
        self.roots.iter().filter_map(|&id| self.get(id))
    }

    /// Children of an item in order.
    pub fn children_of(&self, id: u64) -> Vec<&MenuItem> {
        self.get(id)
            .map(|item| item.children.iter().filter_map(|&c| self.get(c)).collect())
            .unwrap_or_default()
    }

    /// Whether the item has at least one child in this forest.
    pub fn has_children(&self, id: u64) -> bool {
        self.get(id).is_some_and(|item| !item.children.is_empty())
    }

    /// Get item count.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the forest is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
