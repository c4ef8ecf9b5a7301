//! Hierarchical item categories

use std::collections::BTreeMap;

/// A named node in the category tree.
///
/// Holds the keys of the items filed directly under it plus any number of
/// named subcategories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Category {
    name: String,
    subcategories: BTreeMap<String, Category>,
    items: Vec<String>,
}

impl Category {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Keys of the items filed directly here
    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn subcategories(&self) -> &BTreeMap<String, Category> {
        &self.subcategories
    }

    /// Direct subcategory by name
    pub fn get(&self, name: &str) -> Option<&Category> {
        self.subcategories.get(name)
    }

    /// Descendant reached by following `path`; the empty path is `self`
    pub fn find<S: AsRef<str>>(&self, path: &[S]) -> Option<&Category> {
        path.iter()
            .try_fold(self, |category, name| category.get(name.as_ref()))
    }

    /// File `item_key` under `path`, creating categories as needed
    pub fn add<S: AsRef<str>>(&mut self, item_key: &str, path: &[S]) {
        let mut category = self;
        for name in path {
            let name = name.as_ref();
            category = category
                .subcategories
                .entry(name.to_string())
                .or_insert_with(|| Category::new(name));
        }
        category.items.push(item_key.to_string());
    }

    /// Remove `item_key` from under `path`.
    ///
    /// Categories left with no items and no subcategories are pruned.
    /// Returns whether the key was found.
    pub fn remove<S: AsRef<str>>(&mut self, item_key: &str, path: &[S]) -> bool {
        let Some((first, rest)) = path.split_first() else {
            return match self.items.iter().position(|k| k == item_key) {
                Some(idx) => {
                    self.items.remove(idx);
                    true
                }
                None => false,
            };
        };

        let Some(child) = self.subcategories.get_mut(first.as_ref()) else {
            return false;
        };
        let removed = child.remove(item_key, rest);
        if removed && child.is_empty() {
            self.subcategories.remove(first.as_ref());
        }
        removed
    }

    /// No items and no subcategories
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.subcategories.is_empty()
    }

    /// Items filed here or in any descendant
    pub fn item_count(&self) -> usize {
        self.items.len()
            + self
                .subcategories
                .values()
                .map(Category::item_count)
                .sum::<usize>()
    }
}
