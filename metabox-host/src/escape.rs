use std::borrow::Cow;

/// Escapes values interpolated into emitted markup.
///
/// Every interpolation point goes through one of these two functions.
pub trait Escaper: Send + Sync {
    /// Escapes a value placed inside a quoted attribute.
    fn attr<'a>(&self, raw: &'a str) -> Cow<'a, str>;

    /// Escapes a value placed in element text.
    fn html<'a>(&self, raw: &'a str) -> Cow<'a, str>;
}

/// Escaper backed by the `html-escape` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlEscaper;

impl Escaper for HtmlEscaper {
    fn attr<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        html_escape::encode_quoted_attribute(raw)
    }

    fn html<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        html_escape::encode_text(raw)
    }
}
