//! Attribute types shared across resource schemas.

use serde::{Deserialize, Serialize};

/// A hosted image attached to a resource (cover art, screenshot, mugshot).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    /// The image URL.
    pub url: String,
    /// The CDN asset identifier.
    pub cloudinary_id: String,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

/// An external video attached to a resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Video {
    /// Human-readable title (e.g., "Launch Trailer").
    pub name: String,
    /// The hosting platform's video identifier.
    pub video_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_defaults_for_missing_attributes() {
        let image: Image = serde_json::from_str(r#"{"url": "https://img.example/1.png"}"#).unwrap();
        assert_eq!(image.url, "https://img.example/1.png");
        assert_eq!(image.width, 0);
        assert_eq!(image.cloudinary_id, "");
    }

    #[test]
    fn test_image_ignores_unknown_attributes() {
        let image: Image =
            serde_json::from_str(r#"{"url": "u", "animated": true, "checksum": "abc"}"#).unwrap();
        assert_eq!(image.url, "u");
    }
}
