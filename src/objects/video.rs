//! The `video.*` global objects (namespace `http://ogp.me/ns/video#`):
//! movies, TV shows and generic videos share [`VideoObject`];
//! [`VideoEpisode`] adds the link to its parent series.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::config::VerifyConfig;
use crate::objects::article::push_list;
use crate::render::{meta_tags, Node, ToMetadata};
use crate::validate;

/// An actor credit: profile URL plus the role played, rendered as
/// `video:actor` and `video:actor:role`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub url: String,
    pub role: Option<String>,
}

/// Structured properties for `video.movie`, `video.tv_show` and
/// `video.other` pages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoObject {
    actors: Vec<Actor>,
    directors: Vec<String>,
    writers: Vec<String>,
    duration: Option<u32>,
    release_date: Option<DateTime<FixedOffset>>,
    tags: Vec<String>,
    #[serde(skip)]
    verify: VerifyConfig,
}

impl VideoObject {
    pub const PREFIX: &'static str = "video";
    pub const NS: &'static str = "http://ogp.me/ns/video#";

    pub fn new() -> Self {
        VideoObject::default()
    }

    pub fn verification(mut self, config: VerifyConfig) -> Self {
        self.verify = config;
        self
    }

    /// Add an actor's profile URL with an optional role. A URL already
    /// credited is ignored.
    pub fn add_actor(&mut self, value: &str, role: Option<&str>) -> &mut Self {
        match validate::url::check(value, &[], &self.verify) {
            Some(url) if self.actors.iter().any(|a| a.url == url) => {
                tracing::debug!(url, "duplicate video:actor ignored");
            }
            Some(url) => self.actors.push(Actor {
                url,
                role: role.and_then(|r| validate::clean_text(r, usize::MAX)),
            }),
            None => tracing::debug!(value, "rejected video:actor"),
        }
        self
    }

    pub fn add_director(&mut self, value: &str) -> &mut Self {
        match validate::url::check(value, &[], &self.verify) {
            Some(url) if !self.directors.contains(&url) => self.directors.push(url),
            Some(url) => tracing::debug!(url, "duplicate video:director ignored"),
            None => tracing::debug!(value, "rejected video:director"),
        }
        self
    }

    pub fn add_writer(&mut self, value: &str) -> &mut Self {
        match validate::url::check(value, &[], &self.verify) {
            Some(url) if !self.writers.contains(&url) => self.writers.push(url),
            Some(url) => tracing::debug!(url, "duplicate video:writer ignored"),
            None => tracing::debug!(value, "rejected video:writer"),
        }
        self
    }

    /// Duration in seconds; must be positive.
    pub fn set_duration(&mut self, value: u32) -> &mut Self {
        match validate::positive(value) {
            Some(duration) => self.duration = Some(duration),
            None => tracing::debug!(value, "rejected video:duration"),
        }
        self
    }

    pub fn set_release_date(&mut self, value: DateTime<FixedOffset>) -> &mut Self {
        self.release_date = Some(value);
        self
    }

    pub fn add_tag(&mut self, value: &str) -> &mut Self {
        match validate::clean_text(value, usize::MAX) {
            Some(tag) if !self.tags.contains(&tag) => self.tags.push(tag),
            _ => tracing::debug!(value, "rejected video:tag"),
        }
        self
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn directors(&self) -> &[String] {
        &self.directors
    }

    pub fn writers(&self) -> &[String] {
        &self.writers
    }

    pub fn duration(&self) -> Option<u32> {
        self.duration
    }

    pub fn release_date(&self) -> Option<DateTime<FixedOffset>> {
        self.release_date
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Serialize to meta tag lines under the `video` prefix.
    pub fn to_html(&self) -> String {
        meta_tags(&self.to_metadata(), Self::PREFIX)
    }
}

impl ToMetadata for VideoObject {
    fn to_metadata(&self) -> Node {
        let mut node = Node::map();
        if !self.actors.is_empty() {
            let mut actors = Node::map();
            for actor in &self.actors {
                let mut entry = Node::map();
                entry.push_entry(None, Node::Value(actor.url.clone()));
                if let Some(role) = &actor.role {
                    let mut detail = Node::map();
                    detail.push("role", role);
                    entry.push_entry(None, detail);
                }
                actors.push_entry(None, entry);
            }
            node.push_entry(Some("actor"), actors);
        }
        push_list(&mut node, "director", &self.directors);
        push_list(&mut node, "writer", &self.writers);
        if let Some(duration) = self.duration {
            node.push("duration", duration.to_string());
        }
        if let Some(release_date) = &self.release_date {
            node.push("release_date", release_date.to_rfc3339());
        }
        push_list(&mut node, "tag", &self.tags);
        node
    }
}

/// A `video.episode` page: everything a [`VideoObject`] carries, plus the
/// URL of the parent `video.tv_show` page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoEpisode {
    #[serde(flatten)]
    video: VideoObject,
    series: Option<String>,
}

impl VideoEpisode {
    pub const PREFIX: &'static str = VideoObject::PREFIX;
    pub const NS: &'static str = VideoObject::NS;

    pub fn new() -> Self {
        VideoEpisode::default()
    }

    pub fn verification(mut self, config: VerifyConfig) -> Self {
        self.video = self.video.verification(config);
        self
    }

    pub fn video(&self) -> &VideoObject {
        &self.video
    }

    pub fn video_mut(&mut self) -> &mut VideoObject {
        &mut self.video
    }

    /// URL of the parent series page.
    pub fn set_series(&mut self, value: &str) -> &mut Self {
        match validate::url::check(value, &[], &self.video.verify) {
            Some(url) => self.series = Some(url),
            None => tracing::debug!(value, "rejected video:series"),
        }
        self
    }

    pub fn series(&self) -> Option<&str> {
        self.series.as_deref()
    }

    pub fn to_html(&self) -> String {
        meta_tags(&self.to_metadata(), Self::PREFIX)
    }
}

impl ToMetadata for VideoEpisode {
    fn to_metadata(&self) -> Node {
        let mut node = self.video.to_metadata();
        if let Some(series) = &self.series {
            node.push("series", series);
        }
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actor_role_renders_as_sub_property() {
        let mut video = VideoObject::new();
        video.add_actor("http://example.com/actor", Some("Protagonist"));
        assert_eq!(
            video.to_html(),
            "<meta property=\"video:actor\" content=\"http://example.com/actor\">\n\
             <meta property=\"video:actor:role\" content=\"Protagonist\">"
        );
    }

    #[test]
    fn actor_without_role_renders_url_only() {
        let mut video = VideoObject::new();
        video.add_actor("http://example.com/actor", None);
        assert_eq!(
            video.to_html(),
            r#"<meta property="video:actor" content="http://example.com/actor">"#
        );
    }

    #[test]
    fn duplicate_actor_url_is_ignored() {
        let mut video = VideoObject::new();
        video
            .add_actor("http://example.com/actor", Some("Lead"))
            .add_actor("http://example.com/actor", Some("Extra"));
        assert_eq!(video.actors().len(), 1);
        assert_eq!(video.actors()[0].role.as_deref(), Some("Lead"));
    }

    #[test]
    fn zero_duration_is_rejected() {
        let mut video = VideoObject::new();
        video.set_duration(0);
        assert_eq!(video.duration(), None);
        video.set_duration(5400);
        assert_eq!(video.duration(), Some(5400));
    }

    #[test]
    fn episode_appends_series_after_video_fields() {
        let mut episode = VideoEpisode::new();
        episode.video_mut().set_duration(1800);
        episode.set_series("http://example.com/show");
        assert_eq!(
            episode.to_html(),
            "<meta property=\"video:duration\" content=\"1800\">\n\
             <meta property=\"video:series\" content=\"http://example.com/show\">"
        );
    }

    #[test]
    fn series_must_be_a_url() {
        let mut episode = VideoEpisode::new();
        episode.set_series("My Favorite Show");
        assert_eq!(episode.series(), None);
    }
}
