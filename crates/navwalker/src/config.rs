//! Configuration loaded from environment variables and option files.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::walker::{ItemSpacing, MaxDepth, RenderOptions};

/// Environment overrides for render options.
///
/// Every field is optional; unset fields leave the file (or default) value
/// alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Options file to load (NAVWALKER_OPTIONS).
    pub options_file: Option<PathBuf>,

    /// Whitespace policy (NAVWALKER_ITEM_SPACING: "default" or "discard").
    pub item_spacing: Option<ItemSpacing>,

    /// Depth limit (NAVWALKER_MAX_DEPTH: integer or "unlimited").
    pub max_depth: Option<MaxDepth>,

    /// Hover toggles (NAVWALKER_DROPDOWN_HOVER: true/false).
    pub dropdown_on_hover: Option<bool>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let options_file = lookup("NAVWALKER_OPTIONS")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let item_spacing = lookup("NAVWALKER_ITEM_SPACING").map(ItemSpacing::from);

        let max_depth = lookup("NAVWALKER_MAX_DEPTH")
            .map(|v| v.parse::<MaxDepth>())
            .transpose()
            .context("NAVWALKER_MAX_DEPTH must be a non-negative integer or \"unlimited\"")?;

        let dropdown_on_hover = lookup("NAVWALKER_DROPDOWN_HOVER")
            .map(|v| parse_bool(&v))
            .transpose()
            .context("NAVWALKER_DROPDOWN_HOVER must be a boolean")?;

        Ok(Self {
            options_file,
            item_spacing,
            max_depth,
            dropdown_on_hover,
        })
    }

    /// Apply the overrides that are set.
    pub fn apply(&self, options: &mut RenderOptions) {
        if let Some(spacing) = self.item_spacing {
            options.item_spacing = spacing;
        }
        if let Some(depth) = self.max_depth {
            options.max_depth = depth;
        }
        if let Some(hover) = self.dropdown_on_hover {
            options.dropdown_on_hover = hover;
        }
    }

    /// Resolve render options: `path` (or the configured options file, or
    /// defaults), then environment overrides.
    pub fn load_options(&self, path: Option<&Path>) -> Result<RenderOptions> {
        let mut options = match path.or(self.options_file.as_deref()) {
            Some(path) => load_options_file(path)?,
            None => RenderOptions::default(),
        };
        self.apply(&mut options);
        debug!(
            item_spacing = %options.item_spacing,
            max_depth = %options.max_depth,
            dropdown_on_hover = options.dropdown_on_hover,
            "resolved render options"
        );
        Ok(options)
    }
}

/// Load render options from a `.json` or `.toml` file.
pub fn load_options_file(path: &Path) -> Result<RenderOptions> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read options file {}", path.display()))?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let options = if is_json {
        RenderOptions::from_json_str(&raw)
    } else {
        RenderOptions::from_toml_str(&raw)
    };
    options.with_context(|| format!("failed to parse options file {}", path.display()))
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("'{other}' is not a boolean"),
    }
}
