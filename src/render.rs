//! Meta tag serialization: a nested property tree is flattened into
//! `<meta property="prefix:path" content="value">` lines by a depth-first
//! pre-order walk.

/// One node of the property tree handed to the serializer.
///
/// A `Map` keeps insertion order. Entries with a key extend the property
/// path (`og` → `og:image`); entries without a key recurse with the path
/// unchanged, which is how repeated media references and their detail
/// blocks flatten onto the same prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Value(String),
    Map(Vec<(Option<String>, Node)>),
}

impl Node {
    pub fn map() -> Self {
        Node::Map(Vec::new())
    }

    /// Append a scalar entry under `key`. No-op when called on a `Value`.
    pub fn push(&mut self, key: &str, value: impl Into<String>) {
        self.push_entry(Some(key), Node::Value(value.into()));
    }

    /// Append a child node, keyed or positional. No-op when called on a `Value`.
    pub fn push_entry(&mut self, key: Option<&str>, child: Node) {
        if let Node::Map(entries) = self {
            entries.push((key.map(str::to_string), child));
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Node::Value(v) => v.is_empty(),
            Node::Map(entries) => entries.iter().all(|(_, child)| child.is_empty()),
        }
    }
}

/// Conversion into the serializable property tree. Implemented by every
/// value object in [`crate::objects`].
pub trait ToMetadata {
    fn to_metadata(&self) -> Node;
}

/// Serialize `node` into meta tag lines rooted at `prefix` (`"og"` for the
/// page-level object). Lines are newline-terminated during the walk; the
/// trailing newline is trimmed from the result.
pub fn meta_tags(node: &Node, prefix: &str) -> String {
    let mut out = String::new();
    build(node, prefix, &mut out);
    let trimmed = out.trim_end_matches('\n').len();
    out.truncate(trimmed);
    out
}

fn build(node: &Node, prefix: &str, out: &mut String) {
    match node {
        Node::Value(value) => {
            if value.is_empty() {
                return;
            }
            out.push_str("<meta property=\"");
            out.push_str(&escape_attr(prefix));
            out.push_str("\" content=\"");
            out.push_str(&escape_attr(value));
            out.push_str("\">\n");
        }
        Node::Map(entries) => {
            for (key, child) in entries {
                match key.as_deref() {
                    Some(k) if !k.is_empty() => build(child, &format!("{prefix}:{k}"), out),
                    // Empty or missing key: flatten onto the parent prefix.
                    _ => build(child, prefix, out),
                }
            }
        }
    }
}

/// Escape the HTML attribute-context characters.
fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

// ── Unit tests ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_renders_one_line() {
        let mut node = Node::map();
        node.push("title", "Hello world");
        assert_eq!(
            meta_tags(&node, "og"),
            r#"<meta property="og:title" content="Hello world">"#
        );
    }

    #[test]
    fn nested_map_extends_prefix() {
        let mut image = Node::map();
        image.push("width", "400");
        let mut node = Node::map();
        node.push_entry(Some("image"), image);
        assert_eq!(
            meta_tags(&node, "og"),
            r#"<meta property="og:image:width" content="400">"#
        );
    }

    #[test]
    fn keyless_entry_flattens_onto_parent_prefix() {
        let mut inner = Node::map();
        inner.push_entry(None, Node::Value("http://example.com/a.jpg".into()));
        inner.push_entry(None, Node::Value("http://example.com/b.jpg".into()));
        let mut node = Node::map();
        node.push_entry(Some("image"), inner);
        assert_eq!(
            meta_tags(&node, "og"),
            "<meta property=\"og:image\" content=\"http://example.com/a.jpg\">\n\
             <meta property=\"og:image\" content=\"http://example.com/b.jpg\">"
        );
    }

    #[test]
    fn empty_key_behaves_like_no_key() {
        let mut node = Node::map();
        node.push_entry(Some(""), Node::Value("bare".into()));
        assert_eq!(meta_tags(&node, "og"), r#"<meta property="og" content="bare">"#);
    }

    #[test]
    fn empty_values_are_skipped() {
        let mut node = Node::map();
        node.push("title", "");
        node.push_entry(Some("image"), Node::map());
        assert_eq!(meta_tags(&node, "og"), "");
    }

    #[test]
    fn escapes_attribute_characters_in_value() {
        let mut node = Node::map();
        node.push("title", r#"Tom & Jerry <"quoted">"#);
        assert_eq!(
            meta_tags(&node, "og"),
            r#"<meta property="og:title" content="Tom &amp; Jerry &lt;&quot;quoted&quot;&gt;">"#
        );
    }

    #[test]
    fn escapes_property_path_too() {
        let mut node = Node::map();
        node.push("ti<le", "x");
        assert_eq!(
            meta_tags(&node, "og"),
            r#"<meta property="og:ti&lt;le" content="x">"#
        );
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut node = Node::map();
        node.push("b", "2");
        node.push("a", "1");
        assert_eq!(
            meta_tags(&node, "og"),
            "<meta property=\"og:b\" content=\"2\">\n<meta property=\"og:a\" content=\"1\">"
        );
    }

    #[test]
    fn push_on_value_is_ignored() {
        let mut node = Node::Value("fixed".into());
        node.push("key", "value");
        assert_eq!(node, Node::Value("fixed".into()));
    }

    #[test]
    fn is_empty_sees_through_nesting() {
        let mut inner = Node::map();
        inner.push("x", "");
        let mut node = Node::map();
        node.push_entry(Some("outer"), inner);
        assert!(node.is_empty());
    }
}
