//! Menu item record as handed over by the menu storage collaborator.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Style tag marking the item for the page currently being viewed.
pub const CURRENT_TAG: &str = "current-menu-item";

/// Style tags that mark an item as a dropdown even when no children are loaded.
const HAS_CHILDREN_TAGS: &[&str] = &["menu-item-has-children", "has-children"];

/// A single navigation link.
///
/// Every field except `id` defaults to empty so that sparse records from the
/// collaborator still deserialize. Text fields holding `null` or a non-string
/// value read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique identifier.
    pub id: u64,

    /// Display title (raw, escaped at render time).
    #[serde(default, deserialize_with = "loose_string")]
    pub title: String,

    /// Link destination.
    #[serde(default, deserialize_with = "loose_string")]
    pub url: String,

    /// Link target attribute (e.g. "_blank").
    #[serde(default, deserialize_with = "loose_string")]
    pub target: String,

    /// Free-text marker: "divider", "dropdown-header" and "disabled" change the
    /// rendered shape. Also emitted as the link's `title` attribute.
    #[serde(default, alias = "attr_title", deserialize_with = "loose_string")]
    pub marker: String,

    /// CSS style tags attached by the collaborator. A single string is read
    /// as one tag.
    #[serde(default, deserialize_with = "loose_classes")]
    pub classes: Vec<String>,

    /// Ordered child ids.
    #[serde(default)]
    pub children: Vec<u64>,

    /// Optional parent pointer for flat-list input. A parent of `0` (or
    /// `"0"`) means top level.
    #[serde(default, alias = "menu_item_parent", deserialize_with = "parent_id")]
    pub parent: Option<u64>,

    /// Link relationship (HTML `rel`).
    #[serde(default, alias = "xfn", deserialize_with = "loose_string")]
    pub rel: String,
}

impl MenuItem {
    /// Create an item with the given id and title.
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            ..Self::default()
        }
    }

    /// Case-insensitive comparison of the marker field.
    pub fn marker_is(&self, value: &str) -> bool {
        self.marker.eq_ignore_ascii_case(value)
    }

    /// Case-insensitive comparison of the title.
    pub fn title_is(&self, value: &str) -> bool {
        self.title.eq_ignore_ascii_case(value)
    }

    /// Whether the item carries the given style tag.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Whether the collaborator tagged this item as having children.
    pub fn tagged_with_children(&self) -> bool {
        HAS_CHILDREN_TAGS.iter().any(|tag| self.has_class(tag))
    }

    /// Whether this item is the current page.
    pub fn is_active(&self) -> bool {
        self.has_class(CURRENT_TAG)
    }

    /// Whether the link opens in a new browsing context.
    pub fn opens_new_window(&self) -> bool {
        self.target == "_blank" || self.target.eq_ignore_ascii_case("new-window")
    }
}

/// Any value in a text slot. Non-strings (null included) read as empty.
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseText {
    Text(String),
    Other(IgnoredAny),
}

impl From<LooseText> for String {
    fn from(value: LooseText) -> Self {
        match value {
            LooseText::Text(text) => text,
            LooseText::Other(_) => String::new(),
        }
    }
}

fn loose_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    LooseText::deserialize(deserializer).map(String::from)
}

/// Style tags as a list, a single string, or nothing usable.
fn loose_classes<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawClasses {
        List(Vec<LooseText>),
        Other(LooseText),
    }

    let classes = match RawClasses::deserialize(deserializer)? {
        RawClasses::List(list) => list
            .into_iter()
            .filter_map(|class| match class {
                LooseText::Text(text) => Some(text),
                LooseText::Other(_) => None,
            })
            .collect(),
        RawClasses::Other(single) => {
            let tag = String::from(single);
            if tag.trim().is_empty() {
                Vec::new()
            } else {
                vec![tag]
            }
        }
    };
    Ok(classes)
}

/// Parent ids arrive as numbers or numeric strings; zero means none.
fn parent_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawParent {
        Id(u64),
        Text(String),
    }

    let id = match Option::<RawParent>::deserialize(deserializer)? {
        None => 0,
        Some(RawParent::Id(id)) => id,
        Some(RawParent::Text(text)) if text.trim().is_empty() => 0,
        Some(RawParent::Text(text)) => text.trim().parse().map_err(serde::de::Error::custom)?,
    };
    Ok((id != 0).then_some(id))
}
