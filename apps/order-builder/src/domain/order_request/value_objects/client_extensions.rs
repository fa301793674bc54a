//! Client extensions attached to orders and trades.

use serde::{Deserialize, Serialize};

/// Caller-supplied metadata for the caller's own tracking.
///
/// Opaque to the venue's matching logic. Absent members are omitted when
/// serialized.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClientExtensions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
}

impl ClientExtensions {
    /// Build extensions from whichever members are present.
    ///
    /// Returns `None` when all three are absent, so no empty object is ever
    /// attached to a request.
    #[must_use]
    pub fn from_parts(
        id: Option<String>,
        tag: Option<String>,
        comment: Option<String>,
    ) -> Option<Self> {
        if id.is_none() && tag.is_none() && comment.is_none() {
            return None;
        }

        Some(Self { id, tag, comment })
    }

    /// Client-provided ID.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Client-provided tag.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Client-provided comment.
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}
