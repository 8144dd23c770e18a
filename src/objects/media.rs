//! Media references attached to the page-level object: `og:image`,
//! `og:audio`, and `og:video`.
//!
//! Each reference serializes as the bare URL line followed by its detail
//! lines, e.g. `og:image` then `og:image:width`. The URL is the identity of
//! a reference: the root object refuses URL-less media and ignores
//! duplicate URLs.

use serde::{Deserialize, Serialize};

use crate::config::VerifyConfig;
use crate::render::{Node, ToMetadata};
use crate::validate;
use crate::vocab;

// ── Image ──────────────────────────────────────────────────────────────────

/// An `og:image` reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Image {
    url: Option<String>,
    secure_url: Option<String>,
    #[serde(rename = "type")]
    media_type: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    #[serde(skip)]
    verify: VerifyConfig,
}

impl Image {
    pub fn new() -> Self {
        Image::default()
    }

    /// Replace the verification config consulted by the URL setters.
    pub fn verification(mut self, config: VerifyConfig) -> Self {
        self.verify = config;
        self
    }

    pub fn set_url(&mut self, value: &str) -> &mut Self {
        match validate::url::check(value, vocab::IMAGE_TYPES, &self.verify) {
            Some(url) => self.url = Some(url),
            None => tracing::debug!(value, "rejected og:image url"),
        }
        self
    }

    /// The secure URL must be https.
    pub fn set_secure_url(&mut self, value: &str) -> &mut Self {
        match validate::url::check(value, vocab::IMAGE_TYPES, &self.verify) {
            Some(url) if url.starts_with("https://") => self.secure_url = Some(url),
            _ => tracing::debug!(value, "rejected og:image secure_url"),
        }
        self
    }

    pub fn set_type(&mut self, value: &str) -> &mut Self {
        if vocab::IMAGE_TYPES.contains(&value) {
            self.media_type = Some(value.to_string());
        } else {
            tracing::debug!(value, "rejected og:image type");
        }
        self
    }

    pub fn set_width(&mut self, value: u32) -> &mut Self {
        match validate::positive(value) {
            Some(width) => self.width = Some(width),
            None => tracing::debug!(value, "rejected og:image width"),
        }
        self
    }

    pub fn set_height(&mut self, value: u32) -> &mut Self {
        match validate::positive(value) {
            Some(height) => self.height = Some(height),
            None => tracing::debug!(value, "rejected og:image height"),
        }
        self
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn secure_url(&self) -> Option<&str> {
        self.secure_url.as_deref()
    }

    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }

    pub fn width(&self) -> Option<u32> {
        self.width
    }

    pub fn height(&self) -> Option<u32> {
        self.height
    }
}

impl ToMetadata for Image {
    fn to_metadata(&self) -> Node {
        let mut node = Node::map();
        let Some(url) = &self.url else {
            return node;
        };
        node.push_entry(None, Node::Value(url.clone()));

        let mut details = Node::map();
        if let Some(secure_url) = &self.secure_url {
            details.push("secure_url", secure_url);
        }
        if let Some(media_type) = &self.media_type {
            details.push("type", media_type);
        }
        if let Some(width) = self.width {
            details.push("width", width.to_string());
        }
        if let Some(height) = self.height {
            details.push("height", height.to_string());
        }
        node.push_entry(None, details);
        node
    }
}

// ── Audio ──────────────────────────────────────────────────────────────────

/// An `og:audio` reference. Audio carries no dimensions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Audio {
    url: Option<String>,
    secure_url: Option<String>,
    #[serde(rename = "type")]
    media_type: Option<String>,
    #[serde(skip)]
    verify: VerifyConfig,
}

impl Audio {
    pub fn new() -> Self {
        Audio::default()
    }

    pub fn verification(mut self, config: VerifyConfig) -> Self {
        self.verify = config;
        self
    }

    pub fn set_url(&mut self, value: &str) -> &mut Self {
        match validate::url::check(value, vocab::AUDIO_TYPES, &self.verify) {
            Some(url) => self.url = Some(url),
            None => tracing::debug!(value, "rejected og:audio url"),
        }
        self
    }

    pub fn set_secure_url(&mut self, value: &str) -> &mut Self {
        match validate::url::check(value, vocab::AUDIO_TYPES, &self.verify) {
            Some(url) if url.starts_with("https://") => self.secure_url = Some(url),
            _ => tracing::debug!(value, "rejected og:audio secure_url"),
        }
        self
    }

    pub fn set_type(&mut self, value: &str) -> &mut Self {
        if vocab::AUDIO_TYPES.contains(&value) {
            self.media_type = Some(value.to_string());
        } else {
            tracing::debug!(value, "rejected og:audio type");
        }
        self
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn secure_url(&self) -> Option<&str> {
        self.secure_url.as_deref()
    }

    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }
}

impl ToMetadata for Audio {
    fn to_metadata(&self) -> Node {
        let mut node = Node::map();
        let Some(url) = &self.url else {
            return node;
        };
        node.push_entry(None, Node::Value(url.clone()));

        let mut details = Node::map();
        if let Some(secure_url) = &self.secure_url {
            details.push("secure_url", secure_url);
        }
        if let Some(media_type) = &self.media_type {
            details.push("type", media_type);
        }
        node.push_entry(None, details);
        node
    }
}

// ── Video ──────────────────────────────────────────────────────────────────

/// An `og:video` reference (the playable file, not the `video.*` object).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Video {
    url: Option<String>,
    secure_url: Option<String>,
    #[serde(rename = "type")]
    media_type: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    #[serde(skip)]
    verify: VerifyConfig,
}

impl Video {
    pub fn new() -> Self {
        Video::default()
    }

    pub fn verification(mut self, config: VerifyConfig) -> Self {
        self.verify = config;
        self
    }

    pub fn set_url(&mut self, value: &str) -> &mut Self {
        match validate::url::check(value, vocab::VIDEO_TYPES, &self.verify) {
            Some(url) => self.url = Some(url),
            None => tracing::debug!(value, "rejected og:video url"),
        }
        self
    }

    pub fn set_secure_url(&mut self, value: &str) -> &mut Self {
        match validate::url::check(value, vocab::VIDEO_TYPES, &self.verify) {
            Some(url) if url.starts_with("https://") => self.secure_url = Some(url),
            _ => tracing::debug!(value, "rejected og:video secure_url"),
        }
        self
    }

    pub fn set_type(&mut self, value: &str) -> &mut Self {
        if vocab::VIDEO_TYPES.contains(&value) {
            self.media_type = Some(value.to_string());
        } else {
            tracing::debug!(value, "rejected og:video type");
        }
        self
    }

    pub fn set_width(&mut self, value: u32) -> &mut Self {
        match validate::positive(value) {
            Some(width) => self.width = Some(width),
            None => tracing::debug!(value, "rejected og:video width"),
        }
        self
    }

    pub fn set_height(&mut self, value: u32) -> &mut Self {
        match validate::positive(value) {
            Some(height) => self.height = Some(height),
            None => tracing::debug!(value, "rejected og:video height"),
        }
        self
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn secure_url(&self) -> Option<&str> {
        self.secure_url.as_deref()
    }

    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }

    pub fn width(&self) -> Option<u32> {
        self.width
    }

    pub fn height(&self) -> Option<u32> {
        self.height
    }
}

impl ToMetadata for Video {
    fn to_metadata(&self) -> Node {
        let mut node = Node::map();
        let Some(url) = &self.url else {
            return node;
        };
        node.push_entry(None, Node::Value(url.clone()));

        let mut details = Node::map();
        if let Some(secure_url) = &self.secure_url {
            details.push("secure_url", secure_url);
        }
        if let Some(media_type) = &self.media_type {
            details.push("type", media_type);
        }
        if let Some(width) = self.width {
            details.push("width", width.to_string());
        }
        if let Some(height) = self.height {
            details.push("height", height.to_string());
        }
        node.push_entry(None, details);
        node
    }
}

// ── Unit tests ─────────────────────────────────────────────────────────────
