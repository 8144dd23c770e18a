//! Open Graph Protocol metadata objects and their HTML meta tag
//! serialization.
//!
//! `ogtags` models the OGP vocabulary as plain value objects — the
//! page-level [`OpenGraph`] object, media references ([`Image`], [`Audio`],
//! [`Video`]), and the typed global objects ([`Article`], [`Book`],
//! [`Profile`], [`VideoObject`], [`VideoEpisode`]) — and renders each of
//! them into `<meta property="..." content="...">` lines.
//!
//! Setters validate and normalize their input (length caps, URL
//! canonicalization, ISBN checksums, closed vocabularies) and silently keep
//! the previous value when the input is invalid; there is no error channel
//! at the setter boundary. Rejections are logged at `tracing` debug level.
//!
//! URL fields can optionally be verified with a live HEAD request by
//! attaching a [`VerifyConfig`] to an object; the default configuration
//! never touches the network.
//!
//! ```
//! use ogtags::{Image, OpenGraph};
//!
//! let mut image = Image::new();
//! image.set_url("http://x/img.jpg").set_width(400);
//!
//! let mut og = OpenGraph::new();
//! og.set_title("Hello world").add_image(image);
//!
//! assert_eq!(
//!     og.to_html(),
//!     "<meta property=\"og:title\" content=\"Hello world\">\n\
//!      <meta property=\"og:image\" content=\"http://x/img.jpg\">\n\
//!      <meta property=\"og:image:width\" content=\"400\">"
//! );
//! ```

pub mod config;
pub mod error;
pub mod objects;
pub mod render;
pub mod validate;
pub mod vocab;

pub use config::VerifyConfig;
pub use error::{OgError, OgResult};
pub use objects::{
    Article, Audio, Book, Determiner, Gender, Image, OpenGraph, Profile, Video, VideoEpisode,
    VideoObject,
};
pub use render::{meta_tags, Node, ToMetadata};
