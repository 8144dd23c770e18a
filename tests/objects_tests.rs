//! Setter round-trips and the silent-rejection contract across the value
//! objects.

use chrono::DateTime;
use ogtags::{Article, Book, Gender, OpenGraph, Profile, VideoEpisode};

#[test]
fn valid_fields_round_trip_normalized() {
    let mut og = OpenGraph::new();
    og.set_title("  Hello world  ")
        .set_url("http://Example.COM:80/page")
        .set_locale("fr_FR");

    assert_eq!(og.title(), Some("Hello world"));
    // Host is lowercased and the default port dropped during canonicalization.
    assert_eq!(og.url(), Some("http://example.com/page"));
    assert_eq!(og.locale(), Some("fr_FR"));
}

#[test]
fn two_hundred_char_title_is_stored_as_128() {
    let long = "x".repeat(200);
    let mut og = OpenGraph::new();
    og.set_title(&long);
    assert_eq!(og.title().map(str::len), Some(128));
}

#[test]
fn description_caps_at_255() {
    let long = "d".repeat(300);
    let mut og = OpenGraph::new();
    og.set_description(&long);
    assert_eq!(og.description().map(str::len), Some(255));
}

#[test]
fn invalid_input_never_clears_a_field() {
    let mut og = OpenGraph::new();
    og.set_type("book")
        .set_locale("de_DE")
        .set_url("https://example.com/");

    og.set_type("pamphlet")
        .set_locale("de")
        .set_url("gopher://example.com/");

    assert_eq!(og.object_type(), Some("book"));
    assert_eq!(og.locale(), Some("de_DE"));
    assert_eq!(og.url(), Some("https://example.com/"));
}

#[test]
fn article_round_trip() {
    let published = DateTime::parse_from_rfc3339("2026-08-29T09:00:00+00:00").unwrap();
    let mut article = Article::new();
    article
        .set_published_time(published)
        .set_section("Technology")
        .add_author("https://example.com/authors/ada")
        .add_tag("metadata")
        .add_tag("opengraph");

    assert_eq!(article.published_time(), Some(published));
    assert_eq!(article.section(), Some("Technology"));
    assert_eq!(article.authors(), ["https://example.com/authors/ada"]);
    assert_eq!(article.tags(), ["metadata", "opengraph"]);

    assert_eq!(
        article.to_html(),
        "<meta property=\"article:published_time\" content=\"2026-08-29T09:00:00+00:00\">\n\
         <meta property=\"article:author\" content=\"https://example.com/authors/ada\">\n\
         <meta property=\"article:section\" content=\"Technology\">\n\
         <meta property=\"article:tag\" content=\"metadata\">\n\
         <meta property=\"article:tag\" content=\"opengraph\">"
    );
}

#[test]
fn book_accepts_both_isbn_forms() {
    let mut book = Book::new();
    book.set_isbn("0-306-40615-2");
    assert_eq!(book.isbn(), Some("0306406152"));
    book.set_isbn("978-0-306-40615-7");
    assert_eq!(book.isbn(), Some("9780306406157"));
}

#[test]
fn book_rejects_tampered_isbn() {
    let mut book = Book::new();
    book.set_isbn("0306406159");
    assert_eq!(book.isbn(), None);
}

#[test]
fn profile_gender_is_a_closed_vocabulary() {
    let mut profile = Profile::new();
    profile.set_gender(Gender::Male);
    assert_eq!(profile.gender(), Some(Gender::Male));
    assert_eq!(
        profile.to_html(),
        r#"<meta property="profile:gender" content="male">"#
    );
}

#[test]
fn episode_series_round_trip() {
    let mut episode = VideoEpisode::new();
    episode
        .video_mut()
        .add_actor("https://example.com/cast/lead", Some("Captain"));
    episode.set_series("https://example.com/show");

    assert_eq!(episode.series(), Some("https://example.com/show"));
    assert_eq!(
        episode.to_html(),
        "<meta property=\"video:actor\" content=\"https://example.com/cast/lead\">\n\
         <meta property=\"video:actor:role\" content=\"Captain\">\n\
         <meta property=\"video:series\" content=\"https://example.com/show\">"
    );
}

#[test]
fn objects_serialize_to_json_with_renamed_type_field() {
    let mut og = OpenGraph::new();
    og.set_type("website").set_title("Home");

    let value = serde_json::to_value(&og).unwrap();
    assert_eq!(value["type"], "website");
    assert_eq!(value["title"], "Home");
    // The verification config is runtime-only.
    assert!(value.get("verify").is_none());
}
