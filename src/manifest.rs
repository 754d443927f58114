//! Icons map for a WebExtension manifest
//!
//! Browser extensions reference their icon assets through the `"icons"`
//! object of `manifest.json`, keyed by decimal pixel size. This module
//! mirrors that schema so the generated snippet can be pasted into (or
//! merged with) an extension manifest.

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Root structure of an `icons.json` snippet
///
/// Serializes to the same shape as the `"icons"` section of a WebExtension
/// `manifest.json`. Integer keys keep the entries in ascending size order.
#[derive(Serialize, Debug, Clone, Default)]
pub struct IconsManifest {
    /// Pixel size to icon file name, e.g. `16 -> "icon16.png"`
    pub icons: BTreeMap<u32, String>,
}

impl IconsManifest {
    /// Creates an empty icons map
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one icon entry for the given pixel size
    pub fn add_icon(&mut self, size: u32, filename: String) {
        self.icons.insert(size, filename);
    }
}

/// Writes an `icons.json` file for the given sizes to the specified directory
///
/// Each size maps to the `icon{size}.png` file the generator produces next to
/// the snippet.
///
/// # Errors
/// Returns an error if JSON serialization or the file write fails.
pub fn write_icons_json(dir: &Path, sizes: &[u32]) -> Result<()> {
    let mut manifest = IconsManifest::new();
    for &size in sizes {
        manifest.add_icon(size, format!("icon{size}.png"));
    }

    let json =
        serde_json::to_string_pretty(&manifest).context("Failed to serialize icons.json")?;
    std::fs::write(dir.join("icons.json"), json).context("Failed to write icons.json file")?;

    Ok(())
}
