//! Rendering an [`Element`] tree to RESTXML text.
//!
//! Output is deterministic: attributes are written in lexicographic key order
//! and children in insertion order, so equal trees always render to equal
//! bytes. Attribute values and text are escaped with
//! [`quick_xml::escape::escape`] (`&`, `<`, `>`, `"` and `'`).

use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use quick_xml::escape::escape;

use crate::element::Element;

/// Media type to send rendered documents with.
pub const CONTENT_TYPE: &str = "application/xml";

/// Declaration prepended by [`Element::to_document`].
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Characters left untouched by [`Element::as_url`]; everything else is
/// percent-encoded.
const URL_SAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'/');

impl Element {
    /// Append the rendered form of `self` to `out`.
    pub fn write_xml(&self, out: &mut String) {
        let name = self.tag().name();
        out.push('<');
        out.push_str(name);
        for (key, value) in self.attributes() {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&escape(value.as_str()));
            out.push('"');
        }

        let text = self.text().filter(|t| !t.is_empty());
        if text.is_none() && self.children().is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        if let Some(text) = text {
            out.push_str(&escape(text));
        }
        for child in self.children() {
            child.write_xml(out);
        }
        out.push_str("</");
        out.push_str(name);
        out.push('>');
    }

    /// Render without an XML declaration.
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        self.write_xml(&mut out);
        out
    }

    /// Render with a leading `<?xml …?>` declaration.
    pub fn to_document(&self) -> String {
        let mut out = String::from(XML_DECLARATION);
        self.write_xml(&mut out);
        out
    }

    /// UTF-8 bytes of [`Element::to_xml`], ready to use as a response body.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_xml().into_bytes()
    }

    /// The rendered document percent-encoded for use inside a URL query
    /// component.
    pub fn as_url(&self) -> String {
        utf8_percent_encode(&self.to_xml(), URL_SAFE).to_string()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_xml())
    }
}

#[cfg(test)]
mod tests {
    use crate::element::{Attributes, Tag};
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> Attributes {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn empty_element_is_self_closing() {
        let e = Element::new(Tag::Hangup, Attributes::new(), None);
        assert_eq!(e.to_xml(), "<Hangup/>");
    }

    #[test]
    fn empty_text_renders_like_no_text() {
        let e = Element::new(Tag::Speak, Attributes::new(), Some(String::new()));
        assert_eq!(e.to_xml(), "<Speak/>");
    }

    #[test]
    fn attributes_are_sorted() {
        let e = Element::new(Tag::Speak, attrs(&[("voice", "WOMAN"), ("loop", "2"), ("language", "en")]), Some("hi".into()));
        assert_eq!(e.to_xml(), r#"<Speak language="en" loop="2" voice="WOMAN">hi</Speak>"#);
    }

    #[test]
    fn text_and_attributes_are_escaped() {
        let e = Element::new(Tag::Sms, attrs(&[("to", "a\"b")]), Some("1 < 2 & 3 > 2".into()));
        assert_eq!(e.to_xml(), r#"<Sms to="a&quot;b">1 &lt; 2 &amp; 3 &gt; 2</Sms>"#);
    }

    #[test]
    fn document_has_declaration() {
        let e = Element::new(Tag::Response, Attributes::new(), None);
        assert_eq!(e.to_document(), r#"<?xml version="1.0" encoding="UTF-8"?><Response/>"#);
    }

    #[test]
    fn as_url_percent_encodes() {
        let e = Element::new(Tag::Play, Attributes::new(), Some("http://x/a b.mp3".into()));
        assert_eq!(e.as_url(), "%3CPlay%3Ehttp%3A//x/a%20b.mp3%3C/Play%3E");
    }

    #[test]
    fn display_matches_to_xml() {
        let e = Element::new(Tag::Wait, attrs(&[("length", "5")]), None);
        assert_eq!(e.to_string(), e.to_xml());
    }
}
