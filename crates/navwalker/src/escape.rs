//! Output escaping at the markup boundary.
//!
//! The walker never writes an untrusted value without passing it through an
//! [`Escaper`]:
//! - `attr`: attribute values
//! - `text`: text nodes (titles)
//! - `url`: `href` values

use std::fmt;

/// Escaping collaborator injected into the walker.
pub trait Escaper: Send + Sync {
    /// Escaper name for debugging.
    fn name(&self) -> &str;

    /// Escape a value for use inside a double-quoted attribute.
    fn attr(&self, value: &str) -> String;

    /// Sanitize and escape a URL for use as an `href`.
    ///
    /// Returning an empty string drops the attribute.
    fn url(&self, value: &str) -> String;

    /// Escape a text node. Defaults to attribute escaping.
    fn text(&self, value: &str) -> String {
        self.attr(value)
    }
}

impl fmt::Debug for dyn Escaper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// URL schemes allowed in links.
pub const ALLOWED_SCHEMES: &[&str] = &[
    "http", "https", "ftp", "ftps", "mailto", "news", "irc", "irc6", "ircs", "gopher", "nntp",
    "feed", "telnet", "mms", "rtsp", "sms", "svn", "tel", "fax", "xmpp", "webcal", "urn",
];

/// Default HTML escaper.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlEscaper;

impl Escaper for HtmlEscaper {
    fn name(&self) -> &str {
        "html"
    }

    fn attr(&self, value: &str) -> String {
        html_escape(value)
    }

    fn url(&self, value: &str) -> String {
        html_escape(&sanitize_url(value))
    }
}

/// Escape HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Clean a URL for output.
///
/// Spaces become `%20`, characters outside the URL-safe set are stripped,
/// encoded CR/LF sequences are removed, and a URL whose scheme is not in
/// [`ALLOWED_SCHEMES`] collapses to an empty string.
pub fn sanitize_url(url: &str) -> String {
    let url = url.trim();
    if url.is_empty() {
        return String::new();
    }

    let mut cleaned: String = url
        .replace(' ', "%20")
        .chars()
        .filter(|&c| is_url_char(c))
        .collect();

    // Removing one sequence can splice another together
    loop {
        let before = cleaned.len();
        for needle in ["%0d", "%0a", "%0D", "%0A"] {
            cleaned = cleaned.replace(needle, "");
        }
        if cleaned.len() == before {
            break;
        }
    }

    if let Some(scheme) = scheme_of(&cleaned)
        && !ALLOWED_SCHEMES
            .iter()
            .any(|allowed| scheme.eq_ignore_ascii_case(allowed))
    {
        return String::new();
    }

    cleaned
}

fn is_url_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || !c.is_ascii() || "-~+_.?#=!&;,/:%@$|*'()[]".contains(c)
}

/// The scheme of an absolute URL, if the text before the first `:` looks
/// like one (no path, query or fragment delimiter in front of it).
fn scheme_of(url: &str) -> Option<&str> {
    let (head, _) = url.split_once(':')?;
    if head.contains(['/', '?', '#']) {
        return None;
    }
    Some(head)
}
