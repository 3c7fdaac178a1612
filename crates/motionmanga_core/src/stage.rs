//! Pipeline stages.

use serde::{Deserialize, Serialize};

/// States of a pipeline run, in execution order.
///
/// Each stage finishes for the whole batch before the next begins.
///
/// # Examples
///
/// ```
/// use motionmanga_core::Stage;
///
/// assert_eq!(Stage::CollectInputs.next(), Some(Stage::OptimizeAll));
/// assert_eq!(Stage::Done.next(), None);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Stage {
    /// Validate inputs, prepare output directory, load prompts
    #[strum(to_string = "Collecting inputs")]
    CollectInputs,
    /// Downscale oversized videos
    #[strum(to_string = "Optimizing videos")]
    OptimizeAll,
    /// Produce audio-free copies
    #[strum(to_string = "Removing audio")]
    StripAudioAll,
    /// Upload with-audio videos
    #[strum(to_string = "Uploading videos for story generation")]
    UploadStoryAssets,
    /// Upload no-audio videos
    #[strum(to_string = "Uploading videos for image generation")]
    UploadImageAssets,
    /// Single narrative call
    #[strum(to_string = "Generating story")]
    GenerateNarrative,
    /// Parse the narrative response
    #[strum(to_string = "Decoding story")]
    DecodeStory,
    /// One image call per page
    #[strum(to_string = "Generating images")]
    GenerateImagesPerPage,
    /// Run complete
    #[strum(to_string = "Done")]
    Done,
}

impl Stage {
    /// The stage that follows this one.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::CollectInputs => Some(Self::OptimizeAll),
            Self::OptimizeAll => Some(Self::StripAudioAll),
            Self::StripAudioAll => Some(Self::UploadStoryAssets),
            Self::UploadStoryAssets => Some(Self::UploadImageAssets),
            Self::UploadImageAssets => Some(Self::GenerateNarrative),
            Self::GenerateNarrative => Some(Self::DecodeStory),
            Self::DecodeStory => Some(Self::GenerateImagesPerPage),
            Self::GenerateImagesPerPage => Some(Self::Done),
            Self::Done => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_next_follows_declaration_order() {
        let stages: Vec<Stage> = Stage::iter().collect();
        for pair in stages.windows(2) {
            assert_eq!(pair[0].next(), Some(pair[1]));
            assert!(pair[0] < pair[1]);
        }
    }
}
