//! The `profile` global object (namespace `http://ogp.me/ns/profile#`).

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::render::{meta_tags, Node, ToMetadata};
use crate::validate;

/// The closed `profile:gender` vocabulary.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Structured properties for a page whose `og:type` is `profile`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    first_name: Option<String>,
    last_name: Option<String>,
    username: Option<String>,
    gender: Option<Gender>,
}

impl Profile {
    pub const PREFIX: &'static str = "profile";
    pub const NS: &'static str = "http://ogp.me/ns/profile#";

    pub fn new() -> Self {
        Profile::default()
    }

    pub fn set_first_name(&mut self, value: &str) -> &mut Self {
        match validate::clean_text(value, usize::MAX) {
            Some(first_name) => self.first_name = Some(first_name),
            None => tracing::debug!(value, "rejected profile:first_name"),
        }
        self
    }

    pub fn set_last_name(&mut self, value: &str) -> &mut Self {
        match validate::clean_text(value, usize::MAX) {
            Some(last_name) => self.last_name = Some(last_name),
            None => tracing::debug!(value, "rejected profile:last_name"),
        }
        self
    }

    pub fn set_username(&mut self, value: &str) -> &mut Self {
        match validate::clean_text(value, usize::MAX) {
            Some(username) => self.username = Some(username),
            None => tracing::debug!(value, "rejected profile:username"),
        }
        self
    }

    pub fn set_gender(&mut self, value: Gender) -> &mut Self {
        self.gender = Some(value);
        self
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    /// Serialize to meta tag lines under the `profile` prefix.
    pub fn to_html(&self) -> String {
        meta_tags(&self.to_metadata(), Self::PREFIX)
    }
}

impl ToMetadata for Profile {
    fn to_metadata(&self) -> Node {
        let mut node = Node::map();
        if let Some(first_name) = &self.first_name {
            node.push("first_name", first_name);
        }
        if let Some(last_name) = &self.last_name {
            node.push("last_name", last_name);
        }
        if let Some(username) = &self.username {
            node.push("username", username);
        }
        if let Some(gender) = self.gender {
            node.push("gender", gender.to_string());
        }
        node
    }
}
