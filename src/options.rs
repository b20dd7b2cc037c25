//! Configuration options for page audits.
//!
//! The `AuditOptions` struct controls fetch behavior, keyword matching, and
//! the scoring weight table. All fields are public for easy configuration;
//! use `Default::default()` for standard settings.

use std::time::Duration;

/// Point weights for each scored rule.
///
/// Keyword-bearing rules are weighted roughly 1.5-2x their structural
/// counterparts: keyword alignment dominates structural completeness.
/// Represented as an explicit configuration struct so tests can substitute
/// alternate weightings.
#[derive(Debug, Clone)]
pub struct ScoreWeights {
    /// URL path length within limits.
    pub url_length: u32,
    /// URL slug readability (lowercase, hyphen-separated).
    pub url_readability: u32,
    /// Target keyword present in the URL slug.
    pub keyword_in_url: u32,
    /// `<title>` element present.
    pub title_tag: u32,
    /// Title length within the 30-60 character window.
    pub title_length: u32,
    /// Target keyword present in the title.
    pub keyword_in_title: u32,
    /// Keyword positioned in the front half of the title.
    pub keyword_position: u32,
    /// Meta description present.
    pub meta_description: u32,
    /// Meta description length within the 120-160 character window.
    pub meta_description_length: u32,
    /// Target keyword present in the meta description.
    pub keyword_in_description: u32,
    /// Exactly one H1 heading.
    pub h1_presence: u32,
    /// Target keyword present in an H1.
    pub keyword_in_h1: u32,
    /// Heading levels form a plausible hierarchy.
    pub heading_hierarchy: u32,
    /// H2 subheadings present.
    pub subheading_usage: u32,
    /// Target keyword present in an H2/H3.
    pub keyword_in_subheadings: u32,
    /// All images carry alt text.
    pub image_alt_coverage: u32,
    /// Target keyword present in an image alt attribute.
    pub keyword_in_alt: u32,
    /// Images declare width and height.
    pub image_dimensions: u32,
    /// Below-the-fold images are lazy-loaded.
    pub image_lazy_loading: u32,
    /// Modern image formats (WebP/AVIF/JXL) in use.
    pub image_modern_formats: u32,
    /// Canonical link declared.
    pub canonical_link: u32,
    /// Schema.org structured data present.
    pub schema_markup: u32,
    /// Core Open Graph tags present.
    pub open_graph: u32,
    /// Twitter Card tags present (informational when absent).
    pub twitter_card: u32,
    /// Viewport meta tag present.
    pub viewport_meta: u32,
    /// Word count meets the content minimum.
    pub word_count: u32,
    /// Keyword density in the optimal band.
    pub keyword_density: u32,
    /// Keyword appears within the first 100 words.
    pub keyword_early: u32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            url_length: 5,
            url_readability: 4,
            keyword_in_url: 8,
            title_tag: 6,
            title_length: 5,
            keyword_in_title: 10,
            keyword_position: 4,
            meta_description: 6,
            meta_description_length: 5,
            keyword_in_description: 8,
            h1_presence: 7,
            keyword_in_h1: 9,
            heading_hierarchy: 5,
            subheading_usage: 4,
            keyword_in_subheadings: 6,
            image_alt_coverage: 7,
            keyword_in_alt: 6,
            image_dimensions: 4,
            image_lazy_loading: 3,
            image_modern_formats: 3,
            canonical_link: 6,
            schema_markup: 5,
            open_graph: 5,
            twitter_card: 3,
            viewport_meta: 4,
            word_count: 6,
            keyword_density: 10,
            keyword_early: 6,
        }
    }
}

/// Configuration options for a page audit.
///
/// # Example
///
/// ```rust
/// use pageaudit::AuditOptions;
///
/// // Use defaults
/// let options = AuditOptions::default();
///
/// // Customize specific fields
/// let options = AuditOptions {
///     max_variation_tokens: 4,
///     ..AuditOptions::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct AuditOptions {
    /// Timeout for the direct fetch attempt.
    ///
    /// Default: 5 seconds
    pub direct_timeout: Duration,

    /// Timeout for each proxied fetch attempt.
    ///
    /// Default: 10 seconds
    pub proxy_timeout: Duration,

    /// User-Agent header sent with every fetch attempt.
    ///
    /// Default: a browser-like desktop UA string
    pub user_agent: String,

    /// Ordered CORS-proxy URL templates tried after the direct attempt.
    ///
    /// Each template is prefixed to the URL-encoded target URL. Treated as
    /// configuration, not logic: templates can be added, removed, or
    /// reordered freely.
    pub proxy_templates: Vec<String>,

    /// Point weights for the scoring engine.
    pub weights: ScoreWeights,

    /// Domain synonym dictionary used by the density engine.
    ///
    /// Maps a keyword token to related terms that count as synonym matches.
    /// Injectable so deployments can supply domain-specific dictionaries.
    pub synonyms: Vec<(String, Vec<String>)>,

    /// Maximum keyword token count for variation (reordering) matching.
    ///
    /// Keywords with more significant tokens than this skip variation
    /// matching entirely, bounding permutation generation.
    ///
    /// Default: 5
    pub max_variation_tokens: usize,
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self {
            direct_timeout: Duration::from_secs(5),
            proxy_timeout: Duration::from_secs(10),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36"
                .to_string(),
            proxy_templates: vec![
                "https://api.allorigins.win/get?url=".to_string(),
                "https://corsproxy.io/?".to_string(),
                "https://api.codetabs.com/v1/proxy?quest=".to_string(),
            ],
            weights: ScoreWeights::default(),
            synonyms: default_synonyms(),
            max_variation_tokens: 5,
        }
    }
}

/// Built-in SEO-industry synonym dictionary.
fn default_synonyms() -> Vec<(String, Vec<String>)> {
    [
        ("seo", &["search", "ranking", "optimization", "serp"][..]),
        ("marketing", &["promotion", "advertising", "outreach"]),
        ("website", &["site", "webpage", "homepage"]),
        ("content", &["article", "copy", "post"]),
        ("guide", &["tutorial", "walkthrough", "handbook"]),
        ("review", &["comparison", "rating", "verdict"]),
        ("best", &["top", "leading", "greatest"]),
        ("cheap", &["affordable", "budget", "inexpensive"]),
    ]
    .iter()
    .map(|(term, syns)| {
        (
            (*term).to_string(),
            syns.iter().map(|s| (*s).to_string()).collect(),
        )
    })
    .collect()
}
