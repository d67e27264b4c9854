use serde::{Deserialize, Serialize};

use crate::config::TransitionConfig;
use crate::error::CatalogError;

// ============================================================================
// Item Types
// ============================================================================

/// One header/content pair of an accordion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_items: Option<Vec<Item>>,
}

impl Item {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            sub_items: None,
        }
    }

    pub fn with_sub_items(mut self, sub_items: Vec<Item>) -> Self {
        self.sub_items = Some(sub_items);
        self
    }

    /// Sub-items of this item, empty when it has none.
    pub fn sub_items(&self) -> &[Item] {
        self.sub_items.as_deref().unwrap_or(&[])
    }

    pub fn has_sub_items(&self) -> bool {
        !self.sub_items().is_empty()
    }
}

// ============================================================================
// Sample Catalog Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Basic,
    Animated,
    Multi,
    Nested,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Basic,
        Section::Animated,
        Section::Multi,
        Section::Nested,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Basic => "basic",
            Section::Animated => "animated",
            Section::Multi => "multi",
            Section::Nested => "nested",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The item lists mounted by the showcase page, one per accordion variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleCatalog {
    pub basic: Vec<Item>,
    pub animated: Vec<Item>,
    pub multi: Vec<Item>,
    pub nested: Vec<Item>,
    #[serde(default)]
    pub transition: TransitionConfig,
}

impl SampleCatalog {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn section(&self, section: Section) -> &[Item] {
        match section {
            Section::Basic => &self.basic,
            Section::Animated => &self.animated,
            Section::Multi => &self.multi,
            Section::Nested => &self.nested,
        }
    }
}
