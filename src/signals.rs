//! HTML signal extraction.
//!
//! Pulls the structural fragments an SEO audit cares about (title, meta
//! tags, headings, images, canonical link, Open Graph/Twitter tags, schema
//! markup presence) out of a parsed document.
//!
//! Every extractor returns an empty/default value rather than erroring when
//! the expected tag is absent, so the pipeline degrades gracefully on
//! malformed or partial HTML.

use std::collections::HashMap;

use dom_query::{Document, Selection};

use crate::patterns::{MODERN_IMAGE_FORMAT, WHITESPACE_NORMALIZE};

/// Signals derived from a single `<img>` tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSignal {
    /// Image source (`src`, falling back to `data-src`).
    pub src: String,
    /// Alt text, if the attribute is present.
    pub alt: Option<String>,
    /// Whether a `width` attribute is declared.
    pub has_width: bool,
    /// Whether a `height` attribute is declared.
    pub has_height: bool,
    /// Whether the image is lazy-loaded (`loading="lazy"` or a
    /// `data-src`/`data-lazy` attribute).
    pub is_lazy: bool,
    /// Whether the src or `type` attribute references a modern format
    /// (WebP, AVIF, JPEG XL).
    pub is_optimized: bool,
}

/// All structural signals extracted from one page.
///
/// Bundled once per analysis run and consumed read-only by the check
/// engine.
#[derive(Debug, Clone, Default)]
pub struct PageSignals {
    /// `<title>` text, if present and non-empty.
    pub title: Option<String>,
    /// Meta tags keyed by lower-cased `name`/`property` attribute.
    pub meta: HashMap<String, String>,
    /// Open Graph properties (`og:*`).
    pub og: HashMap<String, String>,
    /// Canonical URL from `<link rel="canonical">`.
    pub canonical: Option<String>,
    /// Heading texts per level, index 0 = h1 .. index 5 = h6.
    pub headings: [Vec<String>; 6],
    /// Every `<img>` tag's derived signals.
    pub images: Vec<ImageSignal>,
    /// Whether Schema.org structured data is present.
    pub has_schema: bool,
    /// Whether any Twitter Card meta tag is present.
    pub has_twitter_card: bool,
    /// Whether a viewport meta tag is present.
    pub has_viewport: bool,
    /// Tag-stripped body text, whitespace-normalized.
    pub body_text: String,
    /// Whitespace-split word count of `body_text`.
    pub word_count: usize,
}

impl PageSignals {
    /// Extract all signals from a parsed document.
    #[must_use]
    pub fn from_document(doc: &Document) -> Self {
        let meta = extract_meta_tags(doc);
        let body_text = extract_body_text(doc);
        let word_count = body_text.split_whitespace().count();

        Self {
            title: extract_title(doc),
            og: extract_open_graph(doc),
            canonical: extract_canonical(doc),
            headings: extract_headings(doc),
            images: extract_images(doc),
            has_schema: has_schema_markup(doc),
            has_twitter_card: has_twitter_card(doc),
            has_viewport: meta.contains_key("viewport"),
            meta,
            body_text,
            word_count,
        }
    }

    /// Meta description content, if present.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.meta.get("description").map(String::as_str)
    }
}

/// Extract the inner HTML of the `<head>` section.
///
/// Returns an empty string when the document has no head content.
#[must_use]
pub fn extract_head_content(doc: &Document) -> String {
    let head = doc.select("head");
    if head.is_empty() {
        return String::new();
    }
    head.inner_html().to_string()
}

/// Extract the `<title>` text.
///
/// Returns `None` when the element is absent or empty after trimming.
#[must_use]
pub fn extract_title(doc: &Document) -> Option<String> {
    let title = doc.select("title");
    if title.is_empty() {
        return None;
    }
    let text = normalize_fragment(&title.text());
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Extract all meta tags keyed by lower-cased `name` or `property`.
///
/// The first occurrence of a key wins; tags without content are skipped.
#[must_use]
pub fn extract_meta_tags(doc: &Document) -> HashMap<String, String> {
    let mut tags = HashMap::new();

    for node in doc.select("meta").nodes() {
        let meta = Selection::from(*node);

        let key = meta
            .attr("name")
            .or_else(|| meta.attr("property"))
            .map(|s| s.to_lowercase())
            .unwrap_or_default();
        let content = meta.attr("content").map(|s| s.to_string()).unwrap_or_default();

        if key.is_empty() || content.is_empty() {
            continue;
        }

        tags.entry(key).or_insert(content);
    }

    tags
}

/// Extract Open Graph properties (`og:*`) keyed by full property name.
///
/// Attribute order inside the tag is irrelevant to the parser, so both
/// `property`-first and `content`-first markup are handled; `name="og:*"`
/// variants are accepted too.
#[must_use]
pub fn extract_open_graph(doc: &Document) -> HashMap<String, String> {
    let mut tags = HashMap::new();

    for node in doc.select("meta[property^='og:'], meta[name^='og:']").nodes() {
        let meta = Selection::from(*node);

        let property = meta
            .attr("property")
            .or_else(|| meta.attr("name"))
            .map(|s| s.to_lowercase())
            .unwrap_or_default();
        let content = meta.attr("content").map(|s| s.to_string()).unwrap_or_default();

        if property.is_empty() || content.is_empty() {
            continue;
        }

        tags.entry(property).or_insert(content);
    }

    tags
}

/// Extract heading texts per level (index 0 = h1 .. index 5 = h6).
///
/// Nested tags are stripped; empty headings are dropped.
#[must_use]
pub fn extract_headings(doc: &Document) -> [Vec<String>; 6] {
    let mut headings: [Vec<String>; 6] = Default::default();

    for (level, slot) in headings.iter_mut().enumerate() {
        let selector = format!("h{}", level + 1);
        for node in doc.select(&selector).nodes() {
            let heading = Selection::from(*node);
            let text = normalize_fragment(&heading.text());
            if !text.is_empty() {
                slot.push(text);
            }
        }
    }

    headings
}

/// Derive signals for every `<img>` tag in the document.
#[must_use]
pub fn extract_images(doc: &Document) -> Vec<ImageSignal> {
    let mut images = Vec::new();

    for node in doc.select("img").nodes() {
        let img = Selection::from(*node);

        let src = img
            .attr("src")
            .or_else(|| img.attr("data-src"))
            .map(|s| s.to_string())
            .unwrap_or_default();

        let is_lazy = img
            .attr("loading")
            .is_some_and(|l| l.trim().eq_ignore_ascii_case("lazy"))
            || img.has_attr("data-src")
            || img.has_attr("data-lazy");

        let type_attr = img.attr("type").map(|s| s.to_string()).unwrap_or_default();
        let is_optimized =
            MODERN_IMAGE_FORMAT.is_match(&src) || MODERN_IMAGE_FORMAT.is_match(&type_attr);

        images.push(ImageSignal {
            alt: img.attr("alt").map(|s| s.to_string()),
            has_width: img.has_attr("width"),
            has_height: img.has_attr("height"),
            is_lazy,
            is_optimized,
            src,
        });
    }

    images
}

/// Extract the canonical URL from `<link rel="canonical">`.
#[must_use]
pub fn extract_canonical(doc: &Document) -> Option<String> {
    let node = *doc.select("link[rel='canonical']").nodes().first()?;
    let link = Selection::from(node);
    let href = link.attr("href").map(|s| s.trim().to_string())?;
    if href.is_empty() {
        None
    } else {
        Some(href)
    }
}

/// Whether the document carries Schema.org structured data.
///
/// True for any `application/ld+json` script or `itemscope`/`itemtype`
/// microdata attribute referencing schema.org.
#[must_use]
pub fn has_schema_markup(doc: &Document) -> bool {
    if !doc.select("script[type='application/ld+json']").is_empty() {
        return true;
    }
    if !doc.select("[itemscope]").is_empty() {
        return true;
    }
    doc.select("[itemtype*='schema.org']").length() > 0
}

/// Whether any Twitter Card meta tag is present.
#[must_use]
pub fn has_twitter_card(doc: &Document) -> bool {
    !doc
        .select("meta[name^='twitter:'], meta[property^='twitter:']")
        .is_empty()
}

/// Extract the tag-stripped body text, whitespace-normalized.
#[must_use]
pub fn extract_body_text(doc: &Document) -> String {
    normalize_fragment(&doc.select("body").text())
}

/// Collapse whitespace and trim a text fragment.
fn normalize_fragment(text: &str) -> String {
    WHITESPACE_NORMALIZE.replace_all(text.trim(), " ").to_string()
}
