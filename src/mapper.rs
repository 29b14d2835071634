//! Two-level board navigation: home screen, then one category at a time.
//!
//! The [`CategoryMapper`] exclusively owns the home [`Category`] and a registry
//! of named categories. Home pictograms map to category names; selecting one
//! navigates into that category. Inside a category, selecting a pictogram
//! yields the text to speak. `reset()` always returns home.
//!
//! ## Precondition
//!
//! Home pictogram texts must be unique across all categories. Under the
//! default [`DuplicatePolicy::Overwrite`] a repeated name replaces the earlier
//! category, leaving its items unreachable; [`DuplicatePolicy::Reject`] turns
//! the same situation into [`BoardError::DuplicateCategory`].

use serde::{Deserialize, Serialize};

use crate::assoc::AssociativeArray;
use crate::category::Category;
use crate::config::DuplicatePolicy;
use crate::error::{AacResult, BoardError, BoardResult, MappingError};

/// Which screen the board is showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Location {
    #[default]
    AtHome,
    InCategory(String),
}

/// One unit of bulk-load input.
///
/// `Item` records always belong to the most recently declared category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Record {
    Category { image_loc: String, name: String },
    Item { image_loc: String, text: String },
}

/// The board's category state machine.
#[derive(Debug, Clone)]
pub struct CategoryMapper {
    home: Category,
    categories: AssociativeArray<String, Category>,
    location: Location,
    duplicates: DuplicatePolicy,
}

impl CategoryMapper {
    /// Create an empty board at home with the default duplicate policy.
    pub fn new() -> Self {
        Self::with_policy(DuplicatePolicy::default())
    }

    pub fn with_policy(duplicates: DuplicatePolicy) -> Self {
        Self {
            home: Category::new(""),
            categories: AssociativeArray::new(),
            location: Location::AtHome,
            duplicates,
        }
    }

    /// Build a board from an ordered record stream.
    ///
    /// An `Item` before any `Category` fails with [`MappingError::Malformed`],
    /// where `line` is the 1-based position of the offending record.
    pub fn from_records(
        records: impl IntoIterator<Item = Record>,
        duplicates: DuplicatePolicy,
    ) -> AacResult<Self> {
        let mut mapper = Self::with_policy(duplicates);
        let mut open: Option<String> = None;

        for (index, record) in records.into_iter().enumerate() {
            match record {
                Record::Category { image_loc, name } => {
                    mapper.declare_category(image_loc, name.clone())?;
                    open = Some(name);
                }
                Record::Item { image_loc, text } => {
                    let Some(name) = open.as_deref() else {
                        return Err(MappingError::Malformed {
                            line: index + 1,
                            message: format!("item \"{image_loc}\" appears before any category"),
                        }
                        .into());
                    };
                    mapper
                        .categories
                        .get_mut(name)
                        .map_err(|_| BoardError::InvalidCategoryReference {
                            name: name.to_string(),
                        })?
                        .add_item(image_loc, text);
                }
            }
        }

        tracing::info!(
            categories = mapper.categories.len(),
            home_pictograms = mapper.home.len(),
            "board loaded"
        );
        Ok(mapper)
    }

    /// Register a new empty category `name` and point home's `image_loc` at it.
    ///
    /// If `image_loc` already opened another category and no other home
    /// pictogram opens it, that category is dropped from the registry.
    pub fn declare_category(
        &mut self,
        image_loc: impl Into<String>,
        name: impl Into<String>,
    ) -> BoardResult<()> {
        let image_loc = image_loc.into();
        let name = name.into();
        if name.is_empty() {
            return Err(BoardError::EmptyCategoryName { image_loc });
        }
        let previous = self
            .home
            .select(&image_loc)
            .ok()
            .filter(|old| *old != name)
            .map(str::to_string);

        self.register_category(&name)?;
        self.home.add_item(image_loc.as_str(), name.as_str());

        if let Some(old) = previous {
            if !self.home.items().any(|(_, target)| target == old) {
                tracing::debug!(image_loc = %image_loc, category = %old, "dropping unreachable category");
                self.categories.remove(old.as_str());
                if self.location == Location::InCategory(old) {
                    self.location = Location::AtHome;
                }
            }
        }
        Ok(())
    }

    fn register_category(&mut self, name: &str) -> BoardResult<()> {
        if self.categories.has_key(name) {
            match self.duplicates {
                DuplicatePolicy::Reject => {
                    return Err(BoardError::DuplicateCategory {
                        name: name.to_string(),
                    });
                }
                DuplicatePolicy::Overwrite => {
                    tracing::warn!(category = name, "replacing existing category");
                }
            }
        }
        self.categories
            .insert(name.to_string(), Category::new(name));
        Ok(())
    }

    /// Act on a pictogram selection.
    ///
    /// At home, the pictogram's value is a category name: the board navigates
    /// into it and returns `""`. Inside a category, the pictogram's text is
    /// returned and the board stays put.
    pub fn select(&mut self, image_loc: &str) -> BoardResult<String> {
        let current = self.current()?;
        let value = current
            .select(image_loc)
            .map_err(|_| BoardError::NoSuchImage {
                image_loc: image_loc.to_string(),
                category: current.get_category_name().to_string(),
            })?
            .to_string();

        match self.location {
            Location::AtHome => {
                if !self.categories.has_key(value.as_str()) {
                    return Err(BoardError::InvalidCategoryReference { name: value });
                }
                tracing::debug!(image_loc, category = %value, "navigating into category");
                self.location = Location::InCategory(value);
                Ok(String::new())
            }
            Location::InCategory(_) => {
                tracing::debug!(image_loc, text = %value, "speaking");
                Ok(value)
            }
        }
    }

    /// Image locations shown on the current screen.
    pub fn get_image_locs(&self) -> Vec<String> {
        self.current()
            .map(Category::get_image_locs)
            .unwrap_or_default()
    }

    /// Return to the home screen.
    pub fn reset(&mut self) {
        self.location = Location::AtHome;
    }

    /// Add a pictogram to the current screen.
    ///
    /// At home this also registers a new, empty category named `text`, which
    /// the new pictogram opens.
    pub fn add_item(
        &mut self,
        image_loc: impl Into<String>,
        text: impl Into<String>,
    ) -> BoardResult<()> {
        let image_loc = image_loc.into();
        let text = text.into();
        match &self.location {
            Location::AtHome => self.declare_category(image_loc, text),
            Location::InCategory(name) => {
                tracing::debug!(category = %name, image_loc = %image_loc, "adding item");
                self.categories
                    .get_mut(name.as_str())
                    .map_err(|_| BoardError::InvalidCategoryReference { name: name.clone() })?
                    .add_item(image_loc, text);
                Ok(())
            }
        }
    }

    /// Name of the current category (`""` at home).
    pub fn get_category_name(&self) -> &str {
        match &self.location {
            Location::AtHome => "",
            Location::InCategory(name) => name,
        }
    }

    /// Whether `image_loc` is a home pictogram, regardless of the current screen.
    pub fn is_category_image(&self, image_loc: &str) -> bool {
        self.home.has_image(image_loc)
    }

    /// Whether `image_loc` is shown on the current screen.
    pub fn has_image(&self, image_loc: &str) -> bool {
        self.current()
            .map(|c| c.has_image(image_loc))
            .unwrap_or(false)
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicates
    }

    /// Home pictograms in display order.
    pub fn home_image_locs(&self) -> Vec<String> {
        self.home.get_image_locs()
    }

    /// Registered category names in registration order.
    pub fn category_names(&self) -> Vec<String> {
        self.categories.keys()
    }

    /// Read-only view of a registered category.
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.get(name).ok()
    }

    /// Flatten the board back into the record stream that rebuilds it.
    ///
    /// Walks home pictograms in order, each followed by the items of the
    /// category it opens.
    pub fn records(&self) -> BoardResult<Vec<Record>> {
        let mut records = Vec::new();
        for (image_loc, name) in self.home.items() {
            let category = self
                .categories
                .get(name)
                .map_err(|_| BoardError::InvalidCategoryReference {
                    name: name.to_string(),
                })?;
            records.push(Record::Category {
                image_loc: image_loc.to_string(),
                name: name.to_string(),
            });
            records.extend(category.items().map(|(loc, text)| Record::Item {
                image_loc: loc.to_string(),
                text: text.to_string(),
            }));
        }
        Ok(records)
    }

    fn current(&self) -> BoardResult<&Category> {
        match &self.location {
            Location::AtHome => Ok(&self.home),
            Location::InCategory(name) => self
                .categories
                .get(name.as_str())
                .map_err(|_| BoardError::InvalidCategoryReference { name: name.clone() }),
        }
    }
}

impl Default for CategoryMapper {
    fn default() -> Self {
        Self::new()
    }
}
