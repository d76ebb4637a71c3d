//! Render options.
//!
//! Options deserialize from camelCase TOML or JSON. Unknown keys are ignored
//! so that newer configuration files still load.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OptionsError;

/// Whitespace policy between emitted fragments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemSpacing {
    /// Tabs for indentation and newlines between fragments.
    #[default]
    Preserve,
    /// No whitespace at all.
    Discard,
}

impl ItemSpacing {
    /// Indentation unit.
    pub fn tab(self) -> &'static str {
        match self {
            Self::Preserve => "\t",
            Self::Discard => "",
        }
    }

    /// Line terminator.
    pub fn newline(self) -> &'static str {
        match self {
            Self::Preserve => "\n",
            Self::Discard => "",
        }
    }

    /// Indentation for the given depth.
    pub fn indent(self, depth: usize) -> String {
        self.tab().repeat(depth)
    }
}

impl From<String> for ItemSpacing {
    fn from(value: String) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl From<ItemSpacing> for String {
    fn from(value: ItemSpacing) -> Self {
        value.to_string()
    }
}

impl FromStr for ItemSpacing {
    type Err = std::convert::Infallible;

    /// Anything other than "discard" preserves whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("discard") {
            Ok(Self::Discard)
        } else {
            Ok(Self::Preserve)
        }
    }
}

impl fmt::Display for ItemSpacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preserve => f.write_str("default"),
            Self::Discard => f.write_str("discard"),
        }
    }
}

/// How deep the walker descends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMaxDepth", into = "RawMaxDepth")]
pub enum MaxDepth {
    #[default]
    Unlimited,
    /// Children of items at this depth or deeper are not rendered.
    Limited(usize),
}

impl MaxDepth {
    /// Whether the children of an item at `depth` may be walked.
    pub fn allows_children_at(self, depth: usize) -> bool {
        match self {
            Self::Unlimited => true,
            Self::Limited(max) => depth < max,
        }
    }
}

impl FromStr for MaxDepth {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("unlimited") {
            return Ok(Self::Unlimited);
        }
        s.parse()
            .map(Self::Limited)
            .map_err(|_| OptionsError::InvalidMaxDepth(s.to_string()))
    }
}

impl fmt::Display for MaxDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unlimited => f.write_str("unlimited"),
            Self::Limited(depth) => write!(f, "{depth}"),
        }
    }
}

/// Wire form of `maxDepth`: an integer or the word "unlimited".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawMaxDepth {
    Depth(usize),
    Word(String),
}

impl TryFrom<RawMaxDepth> for MaxDepth {
    type Error = OptionsError;

    fn try_from(raw: RawMaxDepth) -> Result<Self, Self::Error> {
        match raw {
            RawMaxDepth::Depth(depth) => Ok(Self::Limited(depth)),
            RawMaxDepth::Word(word) => word.parse(),
        }
    }
}

impl From<MaxDepth> for RawMaxDepth {
    fn from(value: MaxDepth) -> Self {
        match value {
            MaxDepth::Unlimited => RawMaxDepth::Word("unlimited".to_string()),
            MaxDepth::Limited(depth) => RawMaxDepth::Depth(depth),
        }
    }
}

/// Options for one render call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
    pub item_spacing: ItemSpacing,
    pub max_depth: MaxDepth,
    /// Markup placed before each `<a>`.
    pub before_link: String,
    /// Markup placed after each `</a>`.
    pub after_link: String,
    /// Markup placed before the title inside `<a>`.
    pub link_before_text: String,
    /// Markup placed after the title inside `<a>`.
    pub link_after_text: String,
    /// Open dropdowns on hover as well as click.
    pub dropdown_on_hover: bool,
}

impl RenderOptions {
    /// Parse options from TOML.
    pub fn from_toml_str(s: &str) -> Result<Self, OptionsError> {
        Ok(toml::from_str(s)?)
    }

    /// Parse options from JSON.
    pub fn from_json_str(s: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(s)?)
    }
}
