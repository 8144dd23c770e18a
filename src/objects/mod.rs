//! OGP value objects: the page-level [`OpenGraph`] object, media
//! references, and the typed global objects (article, book, profile,
//! video). All of them are constructed empty, populated through fluent
//! setters that silently drop invalid input, and serialized on demand with
//! `to_html()`.

pub mod article;
pub mod book;
pub mod media;
pub mod profile;
pub mod video;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::config::VerifyConfig;
use crate::render::{meta_tags, Node, ToMetadata};
use crate::validate;
use crate::vocab;

pub use article::Article;
pub use book::Book;
pub use media::{Audio, Image, Video};
pub use profile::{Gender, Profile};
pub use video::{VideoEpisode, VideoObject};

/// The word that appears before the object's title in a sentence
/// (`og:determiner`). `Auto` lets the consumer choose.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Determiner {
    A,
    An,
    Auto,
    The,
}

/// The page-level Open Graph object (`og` namespace).
///
/// ```
/// use ogtags::{Image, OpenGraph};
///
/// let mut image = Image::new();
/// image.set_url("http://x/img.jpg").set_width(400);
///
/// let mut og = OpenGraph::new();
/// og.set_title("Hello world").add_image(image);
/// assert!(og.to_html().contains(r#"<meta property="og:title" content="Hello world">"#));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpenGraph {
    #[serde(rename = "type")]
    object_type: Option<String>,
    title: Option<String>,
    site_name: Option<String>,
    description: Option<String>,
    url: Option<String>,
    determiner: Option<Determiner>,
    locale: Option<String>,
    images: Vec<Image>,
    audios: Vec<Audio>,
    videos: Vec<Video>,
    #[serde(skip)]
    verify: VerifyConfig,
}

impl OpenGraph {
    pub const PREFIX: &'static str = "og";
    pub const NS: &'static str = "http://ogp.me/ns#";

    /// Maximum stored length of `og:title` and `og:site_name`, in characters.
    pub const TITLE_MAX: usize = 128;
    /// Maximum stored length of `og:description`, in characters.
    pub const DESCRIPTION_MAX: usize = 255;

    pub fn new() -> Self {
        OpenGraph::default()
    }

    /// Replace the verification config consulted by [`OpenGraph::set_url`].
    pub fn verification(mut self, config: VerifyConfig) -> Self {
        self.verify = config;
        self
    }

    /// Object type; must belong to the supported vocabulary
    /// ([`crate::vocab::is_supported_type`]).
    pub fn set_type(&mut self, value: &str) -> &mut Self {
        if vocab::is_supported_type(value) {
            self.object_type = Some(value.to_string());
        } else {
            tracing::debug!(value, "rejected og:type");
        }
        self
    }

    pub fn set_title(&mut self, value: &str) -> &mut Self {
        match validate::clean_text(value, Self::TITLE_MAX) {
            Some(title) => self.title = Some(title),
            None => tracing::debug!(value, "rejected og:title"),
        }
        self
    }

    pub fn set_site_name(&mut self, value: &str) -> &mut Self {
        match validate::clean_text(value, Self::TITLE_MAX) {
            Some(site_name) => self.site_name = Some(site_name),
            None => tracing::debug!(value, "rejected og:site_name"),
        }
        self
    }

    pub fn set_description(&mut self, value: &str) -> &mut Self {
        match validate::clean_text(value, Self::DESCRIPTION_MAX) {
            Some(description) => self.description = Some(description),
            None => tracing::debug!(value, "rejected og:description"),
        }
        self
    }

    pub fn set_url(&mut self, value: &str) -> &mut Self {
        match validate::url::check(value, &[], &self.verify) {
            Some(url) => self.url = Some(url),
            None => tracing::debug!(value, "rejected og:url"),
        }
        self
    }

    pub fn set_determiner(&mut self, value: Determiner) -> &mut Self {
        self.determiner = Some(value);
        self
    }

    /// Locale; must be one of the supported locale codes
    /// ([`crate::vocab::LOCALES`]).
    pub fn set_locale(&mut self, value: &str) -> &mut Self {
        if vocab::is_supported_locale(value) {
            self.locale = Some(value.to_string());
        } else {
            tracing::debug!(value, "rejected og:locale");
        }
        self
    }

    /// Attach an image. URL-less images are dropped; a second image with an
    /// already attached URL is ignored.
    pub fn add_image(&mut self, image: Image) -> &mut Self {
        match image.url() {
            Some(url) if self.images.iter().any(|i| i.url() == Some(url)) => {
                tracing::debug!(url, "duplicate og:image ignored");
            }
            Some(_) => self.images.push(image),
            None => tracing::debug!("og:image without url ignored"),
        }
        self
    }

    pub fn add_audio(&mut self, audio: Audio) -> &mut Self {
        match audio.url() {
            Some(url) if self.audios.iter().any(|a| a.url() == Some(url)) => {
                tracing::debug!(url, "duplicate og:audio ignored");
            }
            Some(_) => self.audios.push(audio),
            None => tracing::debug!("og:audio without url ignored"),
        }
        self
    }

    pub fn add_video(&mut self, video: Video) -> &mut Self {
        match video.url() {
            Some(url) if self.videos.iter().any(|v| v.url() == Some(url)) => {
                tracing::debug!(url, "duplicate og:video ignored");
            }
            Some(_) => self.videos.push(video),
            None => tracing::debug!("og:video without url ignored"),
        }
        self
    }

    pub fn object_type(&self) -> Option<&str> {
        self.object_type.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn site_name(&self) -> Option<&str> {
        self.site_name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn determiner(&self) -> Option<Determiner> {
        self.determiner
    }

    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    pub fn images(&self) -> &[Image] {
        &self.images
    }

    pub fn audios(&self) -> &[Audio] {
        &self.audios
    }

    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    /// Serialize to meta tag lines under the `og` prefix.
    pub fn to_html(&self) -> String {
        meta_tags(&self.to_metadata(), Self::PREFIX)
    }
}

impl ToMetadata for OpenGraph {
    fn to_metadata(&self) -> Node {
        let mut node = Node::map();
        if let Some(object_type) = &self.object_type {
            node.push("type", object_type);
        }
        if let Some(title) = &self.title {
            node.push("title", title);
        }
        if let Some(site_name) = &self.site_name {
            node.push("site_name", site_name);
        }
        if let Some(description) = &self.description {
            node.push("description", description);
        }
        if let Some(url) = &self.url {
            node.push("url", url);
        }
        if let Some(determiner) = self.determiner {
            node.push("determiner", determiner.to_string());
        }
        if let Some(locale) = &self.locale {
            node.push("locale", locale);
        }
        push_media(&mut node, "image", self.images.iter().map(|i| i.to_metadata()));
        push_media(&mut node, "audio", self.audios.iter().map(|a| a.to_metadata()));
        push_media(&mut node, "video", self.videos.iter().map(|v| v.to_metadata()));
        node
    }
}

fn push_media(node: &mut Node, key: &str, entries: impl Iterator<Item = Node>) {
    let mut list = Node::map();
    for entry in entries {
        list.push_entry(None, entry);
    }
    if !list.is_empty() {
        node.push_entry(Some(key), list);
    }
}

// ── Unit tests ─────────────────────────────────────────────────────────────
