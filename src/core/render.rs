//! Markdown rendering and HTML sanitization.
//!
//! Model output is untrusted. Every path from returned text to displayed or
//! stored HTML goes through [`sanitize`]; [`SafeHtml`] cannot be constructed
//! any other way, and deserializing one re-runs the sanitizer so a tampered
//! store file cannot smuggle markup past the boundary.

use std::collections::HashSet;
use std::fmt;

use pulldown_cmark::{html, Options, Parser};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Tags allowed to survive sanitization. They are re-emitted bare; the only
/// attribute that survives anywhere is a vetted `href` on `a`.
const ALLOWED_TAGS: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "ul", "ol", "li", "table", "thead", "tbody", "tr",
    "th", "td", "a", "strong", "em", "code", "pre", "blockquote", "hr", "br", "span", "div", "del",
];

/// Elements whose entire content is dropped along with the tags.
const DROP_CONTENT_TAGS: &[&str] = &["script", "style", "iframe"];

/// HTML that has passed through the sanitizer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SafeHtml(String);

impl SafeHtml {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SafeHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for SafeHtml {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SafeHtml {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(sanitize(&raw))
    }
}

/// Convert markdown to sanitized HTML.
pub fn render_markdown(text: &str) -> SafeHtml {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_TABLES);
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(text, opts);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    sanitize(&out)
}

struct RawTag<'a> {
    /// Lowercased tag name.
    name: String,
    closing: bool,
    /// Raw attribute source between the name and the closing `>`.
    attrs: &'a str,
    /// Byte index just past the `>`.
    end: usize,
}

/// Parse a tag starting at `start` (pointing at `<`). `None` when the slice
/// does not look like a tag at all.
fn read_tag(input: &str, start: usize) -> Option<RawTag<'_>> {
    let bytes = input.as_bytes();
    let mut i = start + 1;
    let closing = i < bytes.len() && bytes[i] == b'/';
    if closing {
        i += 1;
    }
    let name_start = i;
    while i < bytes.len() && bytes[i].is_ascii_alphanumeric() {
        i += 1;
    }
    if i == name_start {
        return None;
    }
    let name = input[name_start..i].to_ascii_lowercase();

    // Find the closing '>', skipping quoted attribute values.
    let attrs_start = i;
    let mut quote: Option<u8> = None;
    while i < bytes.len() {
        let b = bytes[i];
        if let Some(q) = quote {
            if b == q {
                quote = None;
            }
        } else if b == b'"' || b == b'\'' {
            quote = Some(b);
        } else if b == b'>' {
            return Some(RawTag {
                name,
                closing,
                attrs: &input[attrs_start..i],
                end: i + 1,
            });
        }
        i += 1;
    }
    None
}

/// Extract the raw `href` value from a tag's attribute source, if any.
fn find_href(attrs: &str) -> Option<String> {
    let bytes = attrs.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        while i < bytes.len() && (bytes[i].is_ascii_whitespace() || bytes[i] == b'/') {
            i += 1;
        }
        let name_start = i;
        while i < bytes.len()
            && (bytes[i].is_ascii_alphanumeric()
                || bytes[i] == b'-'
                || bytes[i] == b'_'
                || bytes[i] == b':')
        {
            i += 1;
        }
        if i == name_start {
            break;
        }
        let name = attrs[name_start..i].to_ascii_lowercase();

        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        let mut value = None;
        if i < bytes.len() && bytes[i] == b'=' {
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            if i < bytes.len() && (bytes[i] == b'"' || bytes[i] == b'\'') {
                let q = bytes[i];
                i += 1;
                let value_start = i;
                while i < bytes.len() && bytes[i] != q {
                    i += 1;
                }
                value = Some(attrs[value_start..i].to_string());
                if i < bytes.len() {
                    i += 1;
                }
            } else {
                let value_start = i;
                while i < bytes.len() && !bytes[i].is_ascii_whitespace() {
                    i += 1;
                }
                value = Some(attrs[value_start..i].to_string());
            }
        }
        if name == "href" {
            return value;
        }
    }
    None
}

/// Keep only link targets that cannot execute script. The value is
/// entity-decoded and control-stripped before the scheme check.
fn safe_href(raw: &str) -> Option<String> {
    let decoded = html_escape::decode_html_entities(raw);
    let cleaned: String = decoded.chars().filter(|c| !c.is_control()).collect();
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lower = trimmed.to_ascii_lowercase();
    let allowed = lower.starts_with("http://")
        || lower.starts_with("https://")
        || lower.starts_with("mailto:")
        || trimmed.starts_with('#')
        || trimmed.starts_with('/')
        || !trimmed.contains(':');
    if allowed {
        Some(trimmed.to_string())
    } else {
        None
    }
}

/// Skip past the matching close tag of a content-dropping element.
fn skip_element(input: &str, from: usize, name: &str) -> usize {
    let lower = input.to_ascii_lowercase();
    let needle = format!("</{}", name);
    match lower[from..].find(&needle) {
        Some(offset) => {
            let after = from + offset + needle.len();
            match input[after..].find('>') {
                Some(gt) => after + gt + 1,
                None => input.len(),
            }
        }
        None => input.len(),
    }
}

/// Remove everything that could execute: disallowed elements, every
/// attribute except a vetted `a href`, and script-bearing URLs. Idempotent.
pub fn sanitize(input: &str) -> SafeHtml {
    let allowed: HashSet<&str> = ALLOWED_TAGS.iter().copied().collect();
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'<' {
            let start = i;
            while i < bytes.len() && bytes[i] != b'<' {
                i += 1;
            }
            out.push_str(&input[start..i]);
            continue;
        }

        let tag = match read_tag(input, i) {
            Some(tag) => tag,
            None => {
                out.push_str("&lt;");
                i += 1;
                continue;
            }
        };

        if DROP_CONTENT_TAGS.contains(&tag.name.as_str()) {
            i = if tag.closing {
                tag.end
            } else {
                skip_element(input, tag.end, &tag.name)
            };
            continue;
        }

        if !allowed.contains(tag.name.as_str()) {
            // Drop the tag itself, keep the text around it.
            i = tag.end;
            continue;
        }

        if tag.closing {
            out.push_str("</");
            out.push_str(&tag.name);
            out.push('>');
        } else if tag.name == "a" {
            match find_href(tag.attrs).as_deref().and_then(safe_href) {
                Some(href) => {
                    out.push_str("<a href=\"");
                    out.push_str(&html_escape::encode_double_quoted_attribute(&href));
                    out.push_str("\">");
                }
                None => out.push_str("<a>"),
            }
        } else {
            out.push('<');
            out.push_str(&tag.name);
            out.push('>');
        }
        i = tag.end;
    }

    SafeHtml(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_and_paragraph() {
        let html = render_markdown("# Title\n\nBody");
        assert!(html.as_str().contains("<h1>Title</h1>"));
        assert!(html.as_str().contains("<p>Body</p>"));
    }

    #[test]
    fn lists_and_emphasis_survive() {
        let html = render_markdown("- 첫째\n- 둘째\n\n**강조**");
        assert!(html.as_str().contains("<ul>"));
        assert!(html.as_str().contains("<li>첫째</li>"));
        assert!(html.as_str().contains("<strong>강조</strong>"));
    }

    #[test]
    fn script_content_is_removed() {
        let html = render_markdown("before\n\n<script>alert(1)</script>\n\nafter");
        assert!(!html.as_str().contains("script"));
        assert!(!html.as_str().contains("alert"));
        assert!(html.as_str().contains("before"));
        assert!(html.as_str().contains("after"));
    }

    #[test]
    fn event_handlers_are_stripped() {
        let html = sanitize("<p onclick=\"steal()\">안녕</p>");
        assert_eq!(html.as_str(), "<p>안녕</p>");

        let html = sanitize("<h1 onmouseover='x()'>제목</h1>");
        assert_eq!(html.as_str(), "<h1>제목</h1>");
    }

    #[test]
    fn script_urls_lose_the_href() {
        let html = sanitize("<a href=\"javascript:alert(1)\">link</a>");
        assert_eq!(html.as_str(), "<a>link</a>");

        let html = sanitize("<a href=\"jAvAsCrIpT:alert(1)\">link</a>");
        assert_eq!(html.as_str(), "<a>link</a>");

        let html = sanitize("<a href=\"java\u{0}script:alert(1)\">link</a>");
        assert_eq!(html.as_str(), "<a>link</a>");
    }

    #[test]
    fn safe_links_keep_the_href() {
        let html = sanitize("<a href=\"https://example.com/page\">link</a>");
        assert_eq!(html.as_str(), "<a href=\"https://example.com/page\">link</a>");

        // Query strings survive the decode/validate/encode round trip stably.
        let html = sanitize("<a href=\"https://example.com/?a=1&b=2\">link</a>");
        assert!(html.as_str().starts_with("<a href=\""));
        assert_eq!(sanitize(html.as_str()), html);
    }

    #[test]
    fn unknown_tags_are_dropped_but_text_kept() {
        let html = sanitize("<form action=\"/x\"><b>본문</b></form>");
        assert_eq!(html.as_str(), "본문");
    }

    #[test]
    fn stray_angle_brackets_are_escaped() {
        let html = sanitize("3 < 5 and <<not a tag");
        assert_eq!(html.as_str(), "3 &lt; 5 and &lt;&lt;not a tag");
    }

    #[test]
    fn sanitization_is_idempotent() {
        let adversarial = concat!(
            "# 제목\n\n",
            "<script>alert(1)</script>",
            "<p onclick=x>text</p>",
            "<a href=\"https://example.com/?a=1&b=2\">ok</a>",
            "<a href='javascript:alert(2)'>bad</a>",
            "stray < bracket"
        );
        let once = render_markdown(adversarial);
        let twice = sanitize(once.as_str());
        assert_eq!(once, twice);
        assert!(!once.as_str().contains("<script"));
        assert!(!once.as_str().contains("onclick"));
        assert!(!once.as_str().contains("javascript:"));
    }

    #[test]
    fn deserialization_resanitizes() {
        let json = "\"<script>x</script><p onclick=y>ok</p>\"";
        let html: SafeHtml = serde_json::from_str(json).unwrap();
        assert_eq!(html.as_str(), "<p>ok</p>");
    }

    #[test]
    fn unterminated_script_drops_the_tail() {
        let html = sanitize("safe<script>alert(1)");
        assert_eq!(html.as_str(), "safe");
    }
}
