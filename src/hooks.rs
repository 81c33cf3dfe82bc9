//! Message-mutation hook contract.
//!
//! A host application runs outgoing articles through a pipeline of small
//! header-mutating hooks before posting. The hook mechanism itself
//! (registration, ordering) belongs to the host; this module fixes the
//! contract a hook must satisfy and ships the two reference transforms:
//! stripping mail-only headers and defaulting the Content-Type.
//!
//! Contract: a hook receives a mutable [`OutgoingMessage`] and an
//! explicit configuration struct, touches header fields only, never
//! introduces duplicate headers, and is safe to call at most once per
//! message per pipeline stage (both reference transforms are in fact
//! idempotent).

use bytes::Bytes;

/// An outgoing article: an ordered header list plus a body blob.
///
/// Header field names are matched case-insensitively, as RFC 5322 field
/// names are; insertion order is preserved for serialization by the
/// host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutgoingMessage {
    headers: Vec<(String, String)>,
    body: Bytes,
}

impl OutgoingMessage {
    /// Create an empty message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a header field, preserving order. Does not check for
    /// duplicates; that discipline belongs to the transforms.
    pub fn push_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.push((name.into(), value.into()));
    }

    /// Get the value of the first header with the given name
    /// (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Whether any header with the given name is present
    /// (case-insensitive).
    pub fn contains_header(&self, name: &str) -> bool {
        self.header(name).is_some()
    }

    /// Remove every header with the given name (case-insensitive),
    /// returning how many were removed.
    pub fn remove_header(&mut self, name: &str) -> usize {
        let before = self.headers.len();
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
        before - self.headers.len()
    }

    /// Iterate over the headers in insertion order.
    pub fn headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Replace the body blob.
    pub fn set_body(&mut self, body: impl Into<Bytes>) {
        self.body = body.into();
    }

    /// The body blob.
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

/// Configuration for [`strip_headers`]: which header fields to remove.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripHeaders {
    /// Header field names to remove, matched case-insensitively
    pub headers: Vec<String>,
}

impl Default for StripHeaders {
    /// Strip the mail-only recipient headers: To, Cc, Bcc.
    fn default() -> Self {
        Self::from_list("To,Cc,Bcc")
    }
}

impl StripHeaders {
    /// Parse a comma-separated list of header names, the form the
    /// option takes in a host's configuration file. Entries are
    /// trimmed; empty entries are dropped.
    pub fn from_list(list: &str) -> Self {
        Self {
            headers: list
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Configuration for [`apply_content_type`]: the Content-Type to supply
/// when the message carries none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTypeDefault {
    /// MIME type, e.g. `text/plain`
    pub mime_type: String,
    /// Charset parameter, e.g. `US-ASCII`
    pub charset: String,
}

impl Default for ContentTypeDefault {
    fn default() -> Self {
        Self {
            mime_type: "text/plain".to_string(),
            charset: "US-ASCII".to_string(),
        }
    }
}

/// Remove every occurrence of each configured header from the message.
///
/// # Example
///
/// ```
/// use newspost_rs::hooks::{strip_headers, OutgoingMessage, StripHeaders};
///
/// let mut msg = OutgoingMessage::new();
/// msg.push_header("Newsgroups", "misc.test");
/// msg.push_header("To", "someone@example.org");
/// strip_headers(&mut msg, &StripHeaders::default());
/// assert!(!msg.contains_header("To"));
/// assert!(msg.contains_header("Newsgroups"));
/// ```
pub fn strip_headers(msg: &mut OutgoingMessage, cfg: &StripHeaders) {
    for name in &cfg.headers {
        msg.remove_header(name);
    }
}

/// Set a `Content-Type` header from the configuration, only when the
/// message does not already carry one.
pub fn apply_content_type(msg: &mut OutgoingMessage, cfg: &ContentTypeDefault) {
    if !msg.contains_header("Content-Type") {
        let value = format!("{}; charset={}", cfg.mime_type, cfg.charset);
        msg.push_header("Content-Type", value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> OutgoingMessage {
        let mut msg = OutgoingMessage::new();
        msg.push_header("Newsgroups", "misc.test");
        msg.push_header("To", "a@example.org");
        msg.push_header("Cc", "b@example.org");
        msg.push_header("cc", "c@example.org");
        msg.set_body(&b"Hello.\n"[..]);
        msg
    }

    #[test]
    fn test_strip_removes_all_occurrences() {
        let mut msg = message();
        strip_headers(&mut msg, &StripHeaders::default());
        assert!(!msg.contains_header("To"));
        assert!(!msg.contains_header("Cc"));
        assert!(msg.contains_header("Newsgroups"));
        assert_eq!(msg.headers().count(), 1);
    }

    #[test]
    fn test_strip_is_idempotent() {
        let mut msg = message();
        strip_headers(&mut msg, &StripHeaders::default());
        let once = msg.clone();
        strip_headers(&mut msg, &StripHeaders::default());
        assert_eq!(msg, once);
    }

    #[test]
    fn test_strip_leaves_body_alone() {
        let mut msg = message();
        strip_headers(&mut msg, &StripHeaders::default());
        assert_eq!(msg.body(), b"Hello.\n");
    }

    #[test]
    fn test_strip_config_from_list() {
        let cfg = StripHeaders::from_list("X-Draft, X-Attribution");
        let mut msg = message();
        msg.push_header("X-Draft", "1");
        strip_headers(&mut msg, &cfg);
        assert!(!msg.contains_header("X-Draft"));
        assert!(msg.contains_header("To"));
    }

    #[test]
    fn test_content_type_set_when_absent() {
        let mut msg = message();
        apply_content_type(&mut msg, &ContentTypeDefault::default());
        assert_eq!(msg.header("Content-Type"), Some("text/plain; charset=US-ASCII"));
    }

    #[test]
    fn test_content_type_not_overwritten_or_duplicated() {
        let mut msg = message();
        msg.push_header("content-type", "text/html; charset=UTF-8");
        apply_content_type(&mut msg, &ContentTypeDefault::default());
        apply_content_type(&mut msg, &ContentTypeDefault::default());
        assert_eq!(msg.header("Content-Type"), Some("text/html; charset=UTF-8"));
        let count = msg
            .headers()
            .filter(|(n, _)| n.eq_ignore_ascii_case("Content-Type"))
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let msg = message();
        assert_eq!(msg.header("newsgroups"), Some("misc.test"));
        assert_eq!(msg.header("NEWSGROUPS"), Some("misc.test"));
    }

    #[test]
    fn test_remove_header_reports_count() {
        let mut msg = message();
        assert_eq!(msg.remove_header("Cc"), 2);
        assert_eq!(msg.remove_header("Cc"), 0);
    }
}
