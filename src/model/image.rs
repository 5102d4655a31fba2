//! Captioned images.

use serde::{Deserialize, Serialize};

/// An image with alt text and a caption line.
///
/// The source is used as given; reachability is never checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Image source URI
    pub src: String,

    /// Alternative text
    pub alt: String,

    /// Caption shown under the image
    pub caption: String,
}

impl Image {
    /// Create a new image.
    pub fn new(src: impl Into<String>, alt: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            caption: caption.into(),
        }
    }
}
