//! Image rules.
//!
//! A page without any `<img>` tags gets a single informational item and
//! is not penalized for coverage it cannot have.

use crate::options::AuditOptions;
use crate::result::{Category, CheckItem, CheckStatus};
use crate::signals::{ImageSignal, PageSignals};

/// Alt coverage below full but at or above this ratio only warns.
const ALT_WARN_RATIO: f64 = 0.8;
/// Dimension coverage at or above this ratio only warns.
const DIMENSION_WARN_RATIO: f64 = 0.5;

/// Evaluate the images category.
#[must_use]
pub fn check(signals: &PageSignals, keyword: Option<&str>, opts: &AuditOptions) -> Category {
    let images = &signals.images;

    if images.is_empty() {
        let item = CheckItem::new(
            "Images",
            CheckStatus::Info,
            "No images found on the page",
            0,
        );
        return Category {
            title: "Images".to_string(),
            items: vec![item],
        };
    }

    let mut items = vec![alt_coverage_item(images, opts)];

    if let Some(keyword) = keyword {
        let alt_text: Vec<&str> = images
            .iter()
            .filter_map(|img| img.alt.as_deref())
            .collect();
        items.push(super::keyword_presence_item(
            "Keyword in Alt Text",
            &alt_text.join(" "),
            keyword,
            opts.weights.keyword_in_alt,
            "image alt text",
            "Alt text is the only image signal text-based crawlers can read",
        ));
    }

    items.push(dimension_item(images, opts));
    items.push(lazy_loading_item(images, opts));
    items.push(modern_format_item(images, opts));

    Category {
        title: "Images".to_string(),
        items,
    }
}

fn alt_coverage_item(images: &[ImageSignal], opts: &AuditOptions) -> CheckItem {
    let total = images.len();
    let with_alt = images
        .iter()
        .filter(|img| img.alt.as_deref().is_some_and(|alt| !alt.trim().is_empty()))
        .count();
    let ratio = with_alt as f64 / total as f64;

    let (status, message) = if with_alt == total {
        (CheckStatus::Pass, "All images have alt text".to_string())
    } else if ratio >= ALT_WARN_RATIO {
        (
            CheckStatus::Warning,
            format!("{with_alt} of {total} images have alt text"),
        )
    } else {
        (
            CheckStatus::Fail,
            format!("Only {with_alt} of {total} images have alt text"),
        )
    };

    CheckItem::new("Image Alt Text", status, message, opts.weights.image_alt_coverage)
        .with_details(
            format!("{with_alt} of {total} images with alt text"),
            "Descriptive alt text on every image",
            "Alt text serves accessibility and image search alike",
        )
}

fn dimension_item(images: &[ImageSignal], opts: &AuditOptions) -> CheckItem {
    let total = images.len();
    let with_dimensions = images
        .iter()
        .filter(|img| img.has_width && img.has_height)
        .count();
    let ratio = with_dimensions as f64 / total as f64;

    let (status, message) = if with_dimensions == total {
        (
            CheckStatus::Pass,
            "All images declare width and height".to_string(),
        )
    } else if ratio >= DIMENSION_WARN_RATIO {
        (
            CheckStatus::Warning,
            format!("{with_dimensions} of {total} images declare width and height"),
        )
    } else {
        (
            CheckStatus::Fail,
            format!("Only {with_dimensions} of {total} images declare width and height"),
        )
    };

    CheckItem::new("Image Dimensions", status, message, opts.weights.image_dimensions)
        .with_details(
            format!("{with_dimensions} of {total} images with explicit dimensions"),
            "Width and height attributes on every image",
            "Explicit dimensions prevent layout shift while the page loads",
        )
}

fn lazy_loading_item(images: &[ImageSignal], opts: &AuditOptions) -> CheckItem {
    let lazy = images.iter().filter(|img| img.is_lazy).count();
    let (status, message) = if lazy > 0 {
        (
            CheckStatus::Pass,
            format!("{lazy} of {} images are lazy-loaded", images.len()),
        )
    } else {
        (
            CheckStatus::Warning,
            "No images use lazy loading".to_string(),
        )
    };

    CheckItem::new("Lazy Loading", status, message, opts.weights.image_lazy_loading)
        .with_details(
            format!("{lazy} lazy-loaded image(s)"),
            "loading=\"lazy\" on below-the-fold images",
            "Deferred image loading improves initial page speed",
        )
}

fn modern_format_item(images: &[ImageSignal], opts: &AuditOptions) -> CheckItem {
    let optimized = images.iter().filter(|img| img.is_optimized).count();
    let (status, message) = if optimized > 0 {
        (
            CheckStatus::Pass,
            format!("{optimized} of {} images use modern formats", images.len()),
        )
    } else {
        (
            CheckStatus::Warning,
            "No images use modern formats (WebP/AVIF/JXL)".to_string(),
        )
    };

    CheckItem::new("Modern Image Formats", status, message, opts.weights.image_modern_formats)
        .with_details(
            format!("{optimized} modern-format image(s)"),
            "WebP, AVIF, or JPEG XL sources",
            "Modern formats cut image weight substantially at equal quality",
        )
}
