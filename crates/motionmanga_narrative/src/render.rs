//! Plain-text story rendering.

use motionmanga_core::StoryDocument;
use std::fmt::Write;

/// File name of the rendered story inside the output directory.
pub const STORY_FILE_NAME: &str = "story.txt";

/// Render `story` in the `story.txt` layout.
///
/// An optional character concept header comes first, then every page under
/// its upper-cased identifier.
///
/// # Examples
///
/// ```
/// use motionmanga_core::{Page, StoryDocument};
/// use motionmanga_narrative::render_story;
///
/// let story = StoryDocument::new(vec![Page::new("page_1", "Rain.")], "");
/// assert_eq!(render_story(&story), "--- PAGE_1 ---\n\nRain.\n\n");
/// ```
pub fn render_story(story: &StoryDocument) -> String {
    let mut out = String::new();

    if story.has_character_concept() {
        let _ = write!(
            out,
            "--- CHARACTER CONCEPT ---\n{}\n\n",
            story.character_concept()
        );
    }

    for page in story {
        let _ = write!(out, "--- {} ---\n\n{}\n\n", page.id().to_uppercase(), page.text());
    }

    out
}
