//! Remote asset handles.

use crate::DerivedVideo;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Activation state of an uploaded file.
///
/// `Active` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum AssetState {
    /// Accepted, processing not yet reported
    #[strum(to_string = "PENDING")]
    Pending,
    /// Being processed by the service
    #[strum(to_string = "PROCESSING")]
    Processing,
    /// Ready to be referenced in generation requests
    #[strum(to_string = "ACTIVE")]
    Active,
    /// Processing failed
    #[strum(to_string = "FAILED")]
    Failed,
}

impl AssetState {
    /// Map the service's state string.
    ///
    /// Unrecognised states are treated as failed.
    ///
    /// # Examples
    ///
    /// ```
    /// use motionmanga_core::AssetState;
    ///
    /// assert_eq!(AssetState::from_remote("PROCESSING"), AssetState::Processing);
    /// assert_eq!(AssetState::from_remote("STATE_UNSPECIFIED"), AssetState::Pending);
    /// assert_eq!(AssetState::from_remote("SOMETHING_NEW"), AssetState::Failed);
    /// ```
    pub fn from_remote(state: &str) -> Self {
        match state {
            "" | "STATE_UNSPECIFIED" => Self::Pending,
            "PROCESSING" => Self::Processing,
            "ACTIVE" => Self::Active,
            _ => Self::Failed,
        }
    }
}

/// The remote service's handle for an uploaded derived video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct RemoteAsset {
    /// Remote identifier, e.g. `files/abc123`
    name: String,
    /// URI used to reference the file in requests
    uri: String,
    /// MIME type the file was uploaded with
    mime_type: String,
    /// Last observed activation state
    state: AssetState,
    /// The local artifact this handle was uploaded from
    origin: DerivedVideo,
}

impl RemoteAsset {
    /// Create a remote asset record.
    pub fn new(
        name: impl Into<String>,
        uri: impl Into<String>,
        mime_type: impl Into<String>,
        state: AssetState,
        origin: DerivedVideo,
    ) -> Self {
        Self {
            name: name.into(),
            uri: uri.into(),
            mime_type: mime_type.into(),
            state,
            origin,
        }
    }

    /// Whether the asset may be referenced in a generation request.
    pub fn is_active(&self) -> bool {
        self.state == AssetState::Active
    }
}
