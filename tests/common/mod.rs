//! Common test utilities - scratch catalog files

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use anyhow::Result;
use tempfile::TempDir;

/// A temporary directory holding catalog files, removed on drop
pub struct CatalogDir {
    dir: TempDir,
}

impl CatalogDir {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `contents` to `name` inside the directory
    pub fn write(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    /// Write a catalog document built from item JSON values
    pub fn write_items(&self, name: &str, items: &[serde_json::Value]) -> Result<PathBuf> {
        let document = serde_json::json!({ "items": items });
        self.write(name, &serde_json::to_string_pretty(&document)?)
    }
}

/// A small catalog with one item of each value form and two bad entries
pub fn sample_items() -> Vec<serde_json::Value> {
    vec![
        serde_json::json!({
            "key": "gear.adventuring.rope",
            "name": "Hempen Rope",
            "value": "1 gp",
            "weight": 10.0,
            "source": "PHB"
        }),
        serde_json::json!({
            "key": "gear.adventuring.torch",
            "name": "Torch",
            "value": {"cp": 1},
            "weight": 1.0
        }),
        serde_json::json!({
            "key": "gear.lamp",
            "name": "Lamp",
            "value": 50,
            "weight": 1.0
        }),
        serde_json::json!({"key": "weapons.simple.club", "type": "Weapon"}),
        serde_json::json!({"name": "Missing key"}),
    ]
}
