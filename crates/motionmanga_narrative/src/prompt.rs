//! Prompt templates and per-page prompt composition.

use derive_getters::Getters;
use motionmanga_error::{StorageError, StorageErrorKind};
use std::path::Path;
use tracing::{debug, instrument};

/// Compose the prompt for one page image.
///
/// The style template comes first, then the character concept when there is
/// one, then the page's scene text.
///
/// # Examples
///
/// ```
/// use motionmanga_narrative::image_prompt;
///
/// assert_eq!(
///     image_prompt("Ink style.", "", "A quiet harbor."),
///     "Ink style.\n\nScene Context:\nA quiet harbor."
/// );
/// ```
pub fn image_prompt(style: &str, character_concept: &str, scene: &str) -> String {
    let mut prompt = format!("{}\n\n", style);
    if !character_concept.is_empty() {
        prompt.push_str("CHARACTER SHEET / MASTER VISUAL ANCHOR:\n");
        prompt.push_str(character_concept);
        prompt.push_str("\n\n");
    }
    prompt.push_str("Scene Context:\n");
    prompt.push_str(scene);
    prompt
}

/// The two prompt templates a run needs, loaded as opaque text.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct PromptTemplates {
    /// Narrative prompt sent with the with-audio videos
    story: String,
    /// Visual style prefix for every page image
    comic: String,
}

impl PromptTemplates {
    /// Create templates from already loaded text.
    pub fn new(story: impl Into<String>, comic: impl Into<String>) -> Self {
        Self {
            story: story.into(),
            comic: comic.into(),
        }
    }

    /// Read both templates from disk.
    ///
    /// # Errors
    ///
    /// Returns [`StorageErrorKind::FileRead`] naming the first file that
    /// cannot be read.
    #[instrument(fields(story = %story_path.display(), comic = %comic_path.display()), skip_all)]
    pub async fn load(story_path: &Path, comic_path: &Path) -> Result<Self, StorageError> {
        let story = read_template(story_path).await?;
        let comic = read_template(comic_path).await?;
        debug!(story_len = story.len(), comic_len = comic.len(), "Loaded prompt templates");
        Ok(Self { story, comic })
    }
}

async fn read_template(path: &Path) -> Result<String, StorageError> {
    tokio::fs::read_to_string(path).await.map_err(|e| {
        StorageError::new(StorageErrorKind::FileRead(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })
}
