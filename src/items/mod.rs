//! Item catalog - items, category tree and JSON loading

mod category;
mod collection;
mod item;
mod key;
mod loader;

pub use category::Category;
pub use collection::{Collection, ROOT_CATEGORY};
pub use item::{Item, ItemKind, DEFAULT_WEIGHT};
pub use key::{
    key_categories, key_name, parent_key, validate_item_key, KeyValidationError, KEY_SEPARATOR,
};
pub use loader::{load_catalog_file, load_catalog_str, Catalog, LoadError, LoadIssue};
