//! Item types and core structures

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::key::{key_categories, key_name, validate_item_key};
use crate::currency::Money;
use crate::error::{Error, Result};

/// Weight given to items that don't specify one, in pounds
pub const DEFAULT_WEIGHT: f64 = 0.001;

/// Kinds of item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ItemKind {
    /// General goods
    #[default]
    Item,
    /// Declared, not yet supported by the catalog
    Weapon,
    /// Declared, not yet supported by the catalog
    Armor,
}

impl FromStr for ItemKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Item" => Ok(ItemKind::Item),
            "Weapon" => Ok(ItemKind::Weapon),
            "Armor" => Ok(ItemKind::Armor),
            _ => Err(Error::invalid(format!("invalid item type {}", s))),
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ItemKind::Item => "Item",
            ItemKind::Weapon => "Weapon",
            ItemKind::Armor => "Armor",
        };
        write!(f, "{}", s)
    }
}

/// An item record as it appears in catalog JSON
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ItemRecord {
    key: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    name: Option<String>,
    weight: Option<f64>,
    value: Option<serde_json::Value>,
    description: Option<String>,
    source: Option<String>,
}

/// A catalog item
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    key: String,
    kind: ItemKind,
    name: String,
    weight: f64,
    value: Money,
    description: String,
    source: String,
    /// Derived from the key
    categories: Vec<String>,
    short_key: String,
}

impl Item {
    /// Create a new item with the given key, kind and display name
    ///
    /// # Arguments
    /// * `key` - Dot-delimited key (e.g., "gear.adventuring.rope")
    /// * `kind` - Item kind
    /// * `name` - Display name (e.g., "Hempen Rope (50 ft.)")
    ///
    /// # Returns
    /// * `Ok(Item)` - New item with default weight and zero value
    /// * `Err(Error::InvalidArgument)` - If the key is malformed
    pub fn new(key: &str, kind: ItemKind, name: &str) -> Result<Self> {
        validate_item_key(key)?;
        Ok(Self {
            key: key.to_string(),
            kind,
            name: name.to_string(),
            weight: DEFAULT_WEIGHT,
            value: Money::new(),
            description: String::new(),
            source: String::new(),
            categories: key_categories(key),
            short_key: key_name(key).to_string(),
        })
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_value(mut self, value: Money) -> Self {
        self.value = value;
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_source(mut self, source: &str) -> Self {
        self.source = source.to_string();
        self
    }

    /// Build an item from a catalog JSON record.
    ///
    /// `key` is required. `type` defaults to "Item"; "Weapon" and "Armor"
    /// are recognized but unsupported. Unknown fields are rejected.
    ///
    /// # Examples
    /// ```
    /// use tabletop::items::Item;
    ///
    /// let item = Item::from_json(serde_json::json!({
    ///     "key": "gear.adventuring.rope",
    ///     "name": "Hempen Rope",
    ///     "value": "1 gp",
    ///     "weight": 10.0,
    /// })).unwrap();
    /// assert_eq!(item.key_name(), "rope");
    /// assert_eq!(item.categories(), ["gear", "adventuring"]);
    /// assert_eq!(item.value().gp(), 1);
    /// ```
    pub fn from_json(json: serde_json::Value) -> Result<Self> {
        let record: ItemRecord =
            serde_json::from_value(json).map_err(|e| Error::invalid(e.to_string()))?;

        let kind: ItemKind = record.kind.as_deref().unwrap_or("Item").parse()?;
        if kind != ItemKind::Item {
            return Err(Error::Unsupported(format!("{} items", kind)));
        }

        let key = record
            .key
            .ok_or_else(|| Error::invalid("missing required field 'key'"))?;

        let value = record.value.map(Money::from_json).transpose()?;

        let mut item = Item::new(&key, kind, record.name.as_deref().unwrap_or(""))?
            .with_value(value.unwrap_or_default())
            .with_description(record.description.as_deref().unwrap_or(""))
            .with_source(record.source.as_deref().unwrap_or(""));
        if let Some(weight) = record.weight {
            item = item.with_weight(weight);
        }
        Ok(item)
    }

    /// Convert to a catalog JSON record
    pub fn to_json(&self) -> serde_json::Value {
        let mut json = serde_json::json!({
            "key": self.key,
            "type": self.kind.to_string(),
            "name": self.name,
            "weight": self.weight,
            "value": self.value,
        });
        if !self.description.is_empty() {
            json["description"] = serde_json::json!(self.description);
        }
        if !self.source.is_empty() {
            json["source"] = serde_json::json!(self.source);
        }
        json
    }

    /// Full dot-delimited key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Final segment of the key
    pub fn key_name(&self) -> &str {
        &self.short_key
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Weight in pounds
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn value(&self) -> &Money {
        &self.value
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Category path derived from the key
    pub fn categories(&self) -> &[String] {
        &self.categories
    }
}
