//! Output directory writer.

use motionmanga_core::{GeneratedImage, StoryDocument};
use motionmanga_error::{StorageError, StorageErrorKind};
use motionmanga_narrative::{STORY_FILE_NAME, render_story};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// The single writer of a run's output directory.
#[derive(Debug, Clone)]
pub struct OutputDirectory {
    root: PathBuf,
}

impl OutputDirectory {
    /// Create the directory (and parents) if absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageErrorKind::DirectoryCreation`] if it cannot be created.
    #[instrument(fields(root = %root.as_ref().display()), skip(root))]
    pub async fn create(root: impl AsRef<Path>) -> Result<Self, StorageError> {
        let root = root.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&root).await.map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                root.display(),
                e
            )))
        })?;
        debug!("Output directory ready");
        Ok(Self { root })
    }

    /// Directory path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write `story.txt`.
    pub async fn write_story(&self, story: &StoryDocument) -> Result<PathBuf, StorageError> {
        let path = self.root.join(STORY_FILE_NAME);
        write(&path, render_story(story).as_bytes()).await?;
        Ok(path)
    }

    /// Write `<page>.png`.
    pub async fn write_image(&self, image: &GeneratedImage) -> Result<PathBuf, StorageError> {
        let path = self.root.join(image.file_name());
        write(&path, image.data()).await?;
        Ok(path)
    }
}

async fn write(path: &Path, contents: &[u8]) -> Result<(), StorageError> {
    tokio::fs::write(path, contents).await.map_err(|e| {
        StorageError::new(StorageErrorKind::FileWrite(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;
    debug!(path = %path.display(), bytes = contents.len(), "Wrote file");
    Ok(())
}
