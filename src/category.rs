//! A named group of pictograms, each bound to the text it speaks.

use std::fmt;

use crate::assoc::AssociativeArray;
use crate::error::ContainerResult;

/// One screen of the board: image locations mapped to spoken text.
///
/// The empty name denotes the home category, whose "text" values are the
/// names of the categories its pictograms open.
#[derive(Debug, Clone, Default)]
pub struct Category {
    name: String,
    items: AssociativeArray<String, String>,
}

impl Category {
    /// Create an empty category.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: AssociativeArray::new(),
        }
    }

    /// Bind `image_loc` to `text`, replacing any earlier text for that image.
    pub fn add_item(&mut self, image_loc: impl Into<String>, text: impl Into<String>) {
        self.items.insert(image_loc.into(), text.into());
    }

    /// Text bound to `image_loc`. Fails with `KeyNotFound` if the image is not here.
    pub fn select(&self, image_loc: &str) -> ContainerResult<&str> {
        self.items.get(image_loc).map(String::as_str)
    }

    pub fn has_image(&self, image_loc: &str) -> bool {
        self.items.has_key(image_loc)
    }

    /// Image locations in display order; empty if the category has no items.
    pub fn get_image_locs(&self) -> Vec<String> {
        self.items.keys()
    }

    /// Name given at construction (`""` for home).
    pub fn get_category_name(&self) -> &str {
        &self.name
    }

    /// Iterate over `(image_loc, text)` pairs in display order.
    pub fn items(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.items.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.items)
    }
}
