//! Generated image payloads.

use derive_getters::Getters;

/// Image bytes generated for one story page.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GeneratedImage {
    /// Page identifier this image illustrates
    page_id: String,
    /// MIME type reported by the service
    mime_type: String,
    /// Decoded image bytes
    data: Vec<u8>,
}

impl GeneratedImage {
    /// Bind image bytes to a page.
    pub fn new(page_id: impl Into<String>, mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            page_id: page_id.into(),
            mime_type: mime_type.into(),
            data,
        }
    }

    /// File name the image is persisted under.
    ///
    /// # Examples
    ///
    /// ```
    /// use motionmanga_core::GeneratedImage;
    ///
    /// let image = GeneratedImage::new("page_2", "image/png", vec![0x89]);
    /// assert_eq!(image.file_name(), "page_2.png");
    /// ```
    pub fn file_name(&self) -> String {
        format!("{}.png", self.page_id)
    }
}
