//! The `book` global object (namespace `http://ogp.me/ns/book#`).

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::config::VerifyConfig;
use crate::objects::article::push_list;
use crate::render::{meta_tags, Node, ToMetadata};
use crate::validate;

/// Structured properties for a page whose `og:type` is `book`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Book {
    authors: Vec<String>,
    isbn: Option<String>,
    release_date: Option<DateTime<FixedOffset>>,
    tags: Vec<String>,
    #[serde(skip)]
    verify: VerifyConfig,
}

impl Book {
    pub const PREFIX: &'static str = "book";
    pub const NS: &'static str = "http://ogp.me/ns/book#";

    pub fn new() -> Self {
        Book::default()
    }

    pub fn verification(mut self, config: VerifyConfig) -> Self {
        self.verify = config;
        self
    }

    /// Add the URL of an author's profile page. Duplicates are ignored.
    pub fn add_author(&mut self, value: &str) -> &mut Self {
        match validate::url::check(value, &[], &self.verify) {
            Some(url) if !self.authors.contains(&url) => self.authors.push(url),
            Some(url) => tracing::debug!(url, "duplicate book:author ignored"),
            None => tracing::debug!(value, "rejected book:author"),
        }
        self
    }

    /// ISBN-10 or ISBN-13; the checksum must hold. Stored without hyphens.
    pub fn set_isbn(&mut self, value: &str) -> &mut Self {
        match validate::isbn::normalize(value) {
            Some(isbn) => self.isbn = Some(isbn),
            None => tracing::debug!(value, "rejected book:isbn"),
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
            _ => tracing::debug!(value, "rejected book:tag"),
        }
        self
    }

    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    pub fn isbn(&self) -> Option<&str> {
        self.isbn.as_deref()
    }

    pub fn release_date(&self) -> Option<DateTime<FixedOffset>> {
        self.release_date
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Serialize to meta tag lines under the `book` prefix.
    pub fn to_html(&self) -> String {
        meta_tags(&self.to_metadata(), Self::PREFIX)
    }
}

impl ToMetadata for Book {
    fn to_metadata(&self) -> Node {
        let mut node = Node::map();
        push_list(&mut node, "author", &self.authors);
        if let Some(isbn) = &self.isbn {
            node.push("isbn", isbn);
        }
        if let Some(release_date) = &self.release_date {
            node.push("release_date", release_date.to_rfc3339());
        }
        push_list(&mut node, "tag", &self.tags);
        node
    }
}
