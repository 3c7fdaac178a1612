//! The decoded, canonical story document.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One narrative unit: its identifier and text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Page {
    /// Page identifier, e.g. `page_1`
    id: String,
    /// Narrative text for the page
    text: String,
}

impl Page {
    /// Create a page.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Ordered pages plus the character concept shared by every image prompt.
///
/// Page order is document order; it decides the order in which images are
/// attempted.
///
/// # Examples
///
/// ```
/// use motionmanga_core::{Page, StoryDocument};
///
/// let story = StoryDocument::new(
///     vec![Page::new("page_1", "A rainy street."), Page::new("page_2", "A chase.")],
///     "Tall hero, red scarf",
/// );
/// assert_eq!(story.len(), 2);
/// assert_eq!(story.get("page_2").map(|p| p.text().as_str()), Some("A chase."));
/// assert!(story.has_character_concept());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
pub struct StoryDocument {
    /// Pages in document order
    pages: Vec<Page>,
    /// Shared visual description, empty when absent
    character_concept: String,
}

impl StoryDocument {
    /// Create a story document.
    pub fn new(pages: Vec<Page>, character_concept: impl Into<String>) -> Self {
        Self {
            pages,
            character_concept: character_concept.into(),
        }
    }

    /// Look up a page by identifier.
    pub fn get(&self, id: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }

    /// Number of pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether there are no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Whether a non-empty character concept is present.
    pub fn has_character_concept(&self) -> bool {
        !self.character_concept.is_empty()
    }

    /// Iterate pages in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, Page> {
        self.pages.iter()
    }
}

impl<'a> IntoIterator for &'a StoryDocument {
    type Item = &'a Page;
    type IntoIter = std::slice::Iter<'a, Page>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}
