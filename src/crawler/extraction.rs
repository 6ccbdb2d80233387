//! Lexical content extraction for the crawler module
//!
//! The extractor is a flat substring scanner over raw HTML. It does not
//! build a tree and does not track nesting. Any tag beginning with `<p` is
//! treated as a paragraph and any tag beginning with `<h` as a heading, so
//! `<pre>` or `<header>` also match. Content is the text between the end of
//! the opening tag and the next `<`.
//!
//! Every sequence is a lazy iterator borrowing the source text; calling the
//! accessor again restarts the scan.

/// Opening marker for paragraph tags
const PARAGRAPH_TAG: &str = "<p";

/// Opening marker for heading tags
const HEADING_TAG: &str = "<h";

/// Attribute token preceding a link target
const HREF: &str = "href";

/// Decode the supported HTML entities and trim surrounding whitespace
fn clean_text(text: &str) -> String {
    text.replace("&#x27;", "'")
        .replace("&amp;", "&")
        .replace("&quot;", "\"")
        .trim()
        .to_string()
}

/// Scanner over the raw HTML of a single page
#[derive(Debug, Clone, Copy)]
pub struct LexicalExtractor<'a> {
    html: &'a str,
}

impl<'a> LexicalExtractor<'a> {
    /// Create an extractor over `html`
    pub fn new(html: &'a str) -> Self {
        Self { html }
    }

    /// Text content of every tag starting with `<p`
    pub fn paragraphs(&self) -> TagContents<'a> {
        TagContents::new(self.html, PARAGRAPH_TAG)
    }

    /// Text content of every tag starting with `<h`
    pub fn headings(&self) -> TagContents<'a> {
        TagContents::new(self.html, HEADING_TAG)
    }

    /// Absolute link targets found after `href` tokens
    pub fn links(&self) -> Links<'a> {
        Links {
            html: self.html,
            pos: 0,
        }
    }

    /// Run all three scans and collect the results
    pub fn extract(&self) -> ExtractedContent {
        ExtractedContent {
            paragraphs: self.paragraphs().collect(),
            headings: self.headings().collect(),
            links: self.links().map(str::to_string).collect(),
        }
    }
}

/// Collected output of a full extraction pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedContent {
    /// Cleaned paragraph texts in document order
    pub paragraphs: Vec<String>,

    /// Cleaned heading texts in document order
    pub headings: Vec<String>,

    /// Absolute link targets in document order
    pub links: Vec<String>,
}

/// Iterator over the cleaned contents of tags with a given prefix
#[derive(Debug, Clone)]
pub struct TagContents<'a> {
    html: &'a str,
    tag: &'static str,
    pos: usize,
}

impl<'a> TagContents<'a> {
    fn new(html: &'a str, tag: &'static str) -> Self {
        Self { html, tag, pos: 0 }
    }
}

impl Iterator for TagContents<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        // All markers and terminators are ASCII, so every position stored in
        // `pos` lies on a char boundary.
        while self.pos < self.html.len() {
            let start = self.pos + self.html[self.pos..].find(self.tag)?;

            let Some(tag_close) = self.html[start..].find('>').map(|i| start + i) else {
                self.pos = start + 1;
                continue;
            };
            let content_start = tag_close + 1;
            let Some(content_end) = self.html[content_start..].find('<').map(|i| content_start + i)
            else {
                self.pos = start + 1;
                continue;
            };

            // Resume past the terminating '<'.
            self.pos = content_end + 1;

            let text = clean_text(&self.html[content_start..content_end]);
            if !text.is_empty() {
                return Some(text);
            }
        }
        None
    }
}

/// Iterator over quoted `href` targets that start with `http`
#[derive(Debug, Clone)]
pub struct Links<'a> {
    html: &'a str,
    pos: usize,
}

impl<'a> Iterator for Links<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while self.pos < self.html.len() {
            let start = self.pos + self.html[self.pos..].find(HREF)?;
            self.pos = start + 1;

            let Some(open_quote) = self.html[start..].find('"').map(|i| start + i) else {
                continue;
            };
            let Some(close_quote) = self.html[open_quote + 1..]
                .find('"')
                .map(|i| open_quote + 1 + i)
            else {
                continue;
            };

            let link = &self.html[open_quote + 1..close_quote];
            if link.starts_with("http") {
                return Some(link);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_paragraphs() {
        let html = r#"<html><body><p class="lead">First paragraph.</p><div>skip</div><p>Second</p></body></html>"#;
        let paragraphs: Vec<String> = LexicalExtractor::new(html).paragraphs().collect();
        assert_eq!(paragraphs, vec!["First paragraph.", "Second"]);
    }

    #[test]
    fn test_unclosed_paragraph_yields_nothing() {
        let extractor = LexicalExtractor::new("<p>Unclosed paragraph");
        assert_eq!(extractor.paragraphs().count(), 0);
    }

    #[test]
    fn test_unterminated_opening_tag_yields_nothing() {
        let extractor = LexicalExtractor::new("text <p class=\"x\" and no end");
        assert_eq!(extractor.paragraphs().count(), 0);
    }

    #[test]
    fn test_entities_are_decoded_and_trimmed() {
        let html = "<p>  Tom&#x27;s &amp; Jerry&#x27;s &quot;show&quot;  </p>";
        let paragraphs: Vec<String> = LexicalExtractor::new(html).paragraphs().collect();
        assert_eq!(paragraphs, vec![r#"Tom's & Jerry's "show""#]);
    }

    #[test]
    fn test_entity_decoding_order() {
        // `&amp;` is decoded before `&quot;`, so a double-encoded quote decodes fully.
        let paragraphs: Vec<String> = LexicalExtractor::new("<p>&amp;quot;</p>").paragraphs().collect();
        assert_eq!(paragraphs, vec!["\""]);
    }

    #[test]
    fn test_empty_content_is_discarded() {
        let html = "<p>   </p><p></p><p>kept</p>";
        let paragraphs: Vec<String> = LexicalExtractor::new(html).paragraphs().collect();
        assert_eq!(paragraphs, vec!["kept"]);
    }

    #[test]
    fn test_content_stops_at_next_tag() {
        let html = "<p>Hello <b>world</b></p>";
        let paragraphs: Vec<String> = LexicalExtractor::new(html).paragraphs().collect();
        assert_eq!(paragraphs, vec!["Hello"]);
    }

    #[test]
    fn test_lenient_tag_matching() {
        let html = "<head><title>T</title></head><h1>Title</h1><header>Top</header><pre>code</pre>";
        let extractor = LexicalExtractor::new(html);

        let headings: Vec<String> = extractor.headings().collect();
        assert_eq!(headings, vec!["Title", "Top"]);

        let paragraphs: Vec<String> = extractor.paragraphs().collect();
        assert_eq!(paragraphs, vec!["code"]);
    }

    #[test]
    fn test_adjacent_tag_after_content_is_skipped() {
        // The scan resumes one past the terminating '<', so a tag that
        // directly terminates the previous content is not matched.
        let html = "<p>one<p>two</p>";
        let paragraphs: Vec<String> = LexicalExtractor::new(html).paragraphs().collect();
        assert_eq!(paragraphs, vec!["one"]);
    }

    #[test]
    fn test_extract_links() {
        let html = r##"<a href="https://example.com/a">A</a>
            <a href="/relative">R</a>
            <a href="#top">T</a>
            <link rel="stylesheet" href="http://cdn.example.com/style.css">"##;
        let links: Vec<&str> = LexicalExtractor::new(html).links().collect();
        assert_eq!(
            links,
            vec!["https://example.com/a", "http://cdn.example.com/style.css"]
        );
    }

    #[test]
    fn test_link_without_closing_quote_is_skipped() {
        let links: Vec<&str> = LexicalExtractor::new(r#"<a href="https://example.com"#).links().collect();
        assert!(links.is_empty());
    }

    #[test]
    fn test_sequences_are_restartable() {
        let html = "<p>a</p><p>b</p>";
        let extractor = LexicalExtractor::new(html);
        let mut first = extractor.paragraphs();
        assert_eq!(first.next().as_deref(), Some("a"));
        assert_eq!(extractor.paragraphs().count(), 2);
    }

    #[test]
    fn test_non_ascii_content() {
        let html = "<p>Café naïve – résumé</p><a href=\"https://例え.jp/\">x</a>";
        let extracted = LexicalExtractor::new(html).extract();
        assert_eq!(extracted.paragraphs, vec!["Café naïve – résumé"]);
        assert_eq!(extracted.links, vec!["https://例え.jp/"]);
        assert!(extracted.headings.is_empty());
    }
}
