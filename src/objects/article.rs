//! The `article` global object (namespace `http://ogp.me/ns/article#`).

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::config::VerifyConfig;
use crate::render::{meta_tags, Node, ToMetadata};
use crate::validate;

/// Structured properties for a page whose `og:type` is `article`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Article {
    published_time: Option<DateTime<FixedOffset>>,
    modified_time: Option<DateTime<FixedOffset>>,
    expiration_time: Option<DateTime<FixedOffset>>,
    authors: Vec<String>,
    section: Option<String>,
    tags: Vec<String>,
    #[serde(skip)]
    verify: VerifyConfig,
}

impl Article {
    pub const PREFIX: &'static str = "article";
    pub const NS: &'static str = "http://ogp.me/ns/article#";

    pub fn new() -> Self {
        Article::default()
    }

    pub fn verification(mut self, config: VerifyConfig) -> Self {
        self.verify = config;
        self
    }

    pub fn set_published_time(&mut self, value: DateTime<FixedOffset>) -> &mut Self {
        self.published_time = Some(value);
        self
    }

    pub fn set_modified_time(&mut self, value: DateTime<FixedOffset>) -> &mut Self {
        self.modified_time = Some(value);
        self
    }

    pub fn set_expiration_time(&mut self, value: DateTime<FixedOffset>) -> &mut Self {
        self.expiration_time = Some(value);
        self
    }

    /// Add the URL of an author's profile page. Duplicates are ignored.
    pub fn add_author(&mut self, value: &str) -> &mut Self {
        match validate::url::check(value, &[], &self.verify) {
            Some(url) if !self.authors.contains(&url) => self.authors.push(url),
            Some(url) => tracing::debug!(url, "duplicate article:author ignored"),
            None => tracing::debug!(value, "rejected article:author"),
        }
        self
    }

    pub fn set_section(&mut self, value: &str) -> &mut Self {
        match validate::clean_text(value, usize::MAX) {
            Some(section) => self.section = Some(section),
            None => tracing::debug!(value, "rejected article:section"),
        }
        self
    }

    /// Add a keyword tag. Blank tags and duplicates are ignored.
    pub fn add_tag(&mut self, value: &str) -> &mut Self {
        match validate::clean_text(value, usize::MAX) {
            Some(tag) if !self.tags.contains(&tag) => self.tags.push(tag),
            _ => tracing::debug!(value, "rejected article:tag"),
        }
        self
    }

    pub fn published_time(&self) -> Option<DateTime<FixedOffset>> {
        self.published_time
    }

    pub fn modified_time(&self) -> Option<DateTime<FixedOffset>> {
        self.modified_time
    }

    pub fn expiration_time(&self) -> Option<DateTime<FixedOffset>> {
        self.expiration_time
    }

    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    pub fn section(&self) -> Option<&str> {
        self.section.as_deref()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Serialize to meta tag lines under the `article` prefix.
    pub fn to_html(&self) -> String {
        meta_tags(&self.to_metadata(), Self::PREFIX)
    }
}

impl ToMetadata for Article {
    fn to_metadata(&self) -> Node {
        let mut node = Node::map();
        if let Some(published_time) = &self.published_time {
            node.push("published_time", published_time.to_rfc3339());
        }
        if let Some(modified_time) = &self.modified_time {
            node.push("modified_time", modified_time.to_rfc3339());
        }
        if let Some(expiration_time) = &self.expiration_time {
            node.push("expiration_time", expiration_time.to_rfc3339());
        }
        push_list(&mut node, "author", &self.authors);
        if let Some(section) = &self.section {
            node.push("section", section);
        }
        push_list(&mut node, "tag", &self.tags);
        node
    }
}

/// Render a repeated property: every entry flattens onto `prefix:key`.
pub(crate) fn push_list(node: &mut Node, key: &str, values: &[String]) {
    if values.is_empty() {
        return;
    }
    let mut list = Node::map();
    for value in values {
        list.push_entry(None, Node::Value(value.clone()));
    }
    node.push_entry(Some(key), list);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn renders_times_as_rfc3339() {
        let mut article = Article::new();
        article.set_published_time(date("2026-08-29T10:30:00+02:00"));
        assert_eq!(
            article.to_html(),
            r#"<meta property="article:published_time" content="2026-08-29T10:30:00+02:00">"#
        );
    }

    #[test]
    fn authors_render_as_repeated_property() {
        let mut article = Article::new();
        article
            .add_author("http://example.com/alice")
            .add_author("http://example.com/bob");
        assert_eq!(
            article.to_html(),
            "<meta property=\"article:author\" content=\"http://example.com/alice\">\n\
             <meta property=\"article:author\" content=\"http://example.com/bob\">"
        );
    }

    #[test]
    fn duplicate_authors_are_ignored() {
        let mut article = Article::new();
        article
            .add_author("http://example.com/alice")
            .add_author("http://example.com/alice");
        assert_eq!(article.authors().len(), 1);
    }

    #[test]
    fn non_url_author_is_rejected() {
        let mut article = Article::new();
        article.add_author("Alice");
        assert!(article.authors().is_empty());
    }

    #[test]
    fn blank_tags_are_rejected_and_tags_deduped() {
        let mut article = Article::new();
        article.add_tag("  ").add_tag("rust").add_tag("rust");
        assert_eq!(article.tags(), ["rust"]);
    }

    #[test]
    fn section_is_trimmed() {
        let mut article = Article::new();
        article.set_section("  Technology  ");
        assert_eq!(article.section(), Some("Technology"));
    }
}
