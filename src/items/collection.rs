//! Item collection - owned registry of items plus their category tree

use std::collections::BTreeMap;
use std::fmt::Write;

use tracing::{debug, info};

use super::{Category, Item};
use crate::error::{Error, Result};

/// Name of the root category
pub const ROOT_CATEGORY: &str = "All";

/// Registry of items keyed by full key, filed into a category tree
#[derive(Debug, Clone)]
pub struct Collection {
    root: Category,
    items: BTreeMap<String, Item>,
}

impl Collection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self {
            root: Category::new(ROOT_CATEGORY),
            items: BTreeMap::new(),
        }
    }

    /// Root of the category tree
    pub fn root(&self) -> &Category {
        &self.root
    }

    /// Register an item.
    ///
    /// A key collision fails unless `replace` is set, in which case the
    /// existing item is refiled and replaced.
    pub fn register(&mut self, item: Item, replace: bool) -> Result<()> {
        if let Some(existing) = self.items.get(item.key()) {
            if !replace {
                return Err(Error::invalid(format!(
                    "item with key={} already exists",
                    item.key()
                )));
            }
            let categories = existing.categories().to_vec();
            self.root.remove(item.key(), &categories);
            info!("Replacing item {}", item.key());
        }

        debug!("Registered item {}", item.key());
        self.root.add(item.key(), item.categories());
        self.items.insert(item.key().to_string(), item);
        Ok(())
    }

    /// Remove and return an item
    pub fn remove(&mut self, key: &str) -> Option<Item> {
        let item = self.items.remove(key)?;
        self.root.remove(key, item.categories());
        Some(item)
    }

    pub fn get(&self, key: &str) -> Option<&Item> {
        self.items.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in key order
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Indented tree of categories and item names.
    ///
    /// With `details`, each item line also shows its value and weight.
    ///
    /// # Examples
    /// ```
    /// use tabletop::items::{Collection, Item, ItemKind};
    ///
    /// let mut items = Collection::new();
    /// let rope = Item::new("gear.rope", ItemKind::Item, "Rope").unwrap();
    /// items.register(rope, false).unwrap();
    /// assert_eq!(items.render(false), "All:\n  gear:\n    Rope");
    /// ```
    pub fn render(&self, details: bool) -> String {
        let mut out = String::new();
        self.render_category(&self.root, "", details, &mut out);
        out.truncate(out.trim_end().len());
        out
    }

    fn render_category(&self, category: &Category, indent: &str, details: bool, out: &mut String) {
        let tab = format!("{}  ", indent);
        let _ = writeln!(out, "{}{}:", indent, category.name());

        for item in category.items().iter().filter_map(|k| self.items.get(k)) {
            if details {
                let _ = writeln!(
                    out,
                    "{}{} - {}, {} lbs",
                    tab,
                    item.name(),
                    item.value(),
                    item.weight()
                );
            } else {
                let _ = writeln!(out, "{}{}", tab, item.name());
            }
        }

        for sub in category.subcategories().values() {
            self.render_category(sub, &tab, details, out);
        }
    }
}

impl Default for Collection {
    fn default() -> Self {
        Self::new()
    }
}
