#![allow(clippy::unwrap_used)] // unwrap() is appropriate in tests for clear panic messages

use pageaudit::{analyze_html, AuditOptions, CheckStatus};

fn audit(html: &str) -> pageaudit::AnalysisResult {
    analyze_html(
        html,
        "https://example.com/page",
        Some("pizza recipe"),
        &AuditOptions::default(),
    )
}

fn assert_well_formed(result: &pageaudit::AnalysisResult) {
    assert_eq!(result.categories.len(), 6);
    assert!(result.score <= 90);
    assert!(result.content_fetched);
}

#[test]
fn audit_does_not_panic_on_malformed_html_unclosed_tags() {
    let result = audit("<p>text<div>more");
    assert_well_formed(&result);
}

#[test]
fn audit_does_not_panic_on_malformed_html_invalid_nesting() {
    let result = audit("<p><div></p></div>");
    assert_well_formed(&result);
}

#[test]
fn audit_does_not_panic_on_malformed_html_broken_attributes() {
    let result = audit("<div class=\"test id=broken>");
    assert_well_formed(&result);
}

#[test]
fn audit_does_not_panic_on_incomplete_entities() {
    let result = audit("&amp text &lt;");
    assert_well_formed(&result);
}

#[test]
fn audit_handles_empty_input() {
    let result = audit("");
    assert_well_formed(&result);
    // Nothing to reward on a blank page
    assert!(result.score < 40);
}

#[test]
fn audit_handles_whitespace_only_input() {
    let result = audit("   \n\t  ");
    assert_well_formed(&result);
}

#[test]
fn audit_handles_headless_documents() {
    let result = audit("<body><p>body only, no head element at all</p></body>");
    assert_well_formed(&result);

    let title_meta = &result.categories[1];
    let title = title_meta
        .items
        .iter()
        .find(|i| i.name == "Title Tag")
        .unwrap();
    assert_eq!(title.status, CheckStatus::Fail);
}

#[test]
fn audit_handles_image_free_pages_without_penalty() {
    let result = audit("<body><h1>Pizza recipe</h1><p>short text</p></body>");
    let images = &result.categories[3];
    assert_eq!(images.items.len(), 1);
    assert_eq!(images.items[0].status, CheckStatus::Info);
    assert_eq!(images.items[0].points, 0);
}

#[test]
fn audit_handles_unparseable_urls() {
    let result = analyze_html(
        "<body><h1>hi</h1></body>",
        "not a url at all %%%",
        None,
        &AuditOptions::default(),
    );
    assert_eq!(result.categories.len(), 6);
    assert!(result.score <= 90);
}

#[test]
fn audit_handles_multibyte_content() {
    let html = "<html><head><title>Лучший рецепт пиццы дома</title></head>\
                <body><h1>Рецепт пиццы</h1><p>Тесто, соус и выпечка.</p></body></html>";
    let result = analyze_html(
        html,
        "https://example.com/рецепт",
        Some("рецепт пиццы"),
        &AuditOptions::default(),
    );
    assert_eq!(result.categories.len(), 6);
    assert!(result.score <= 90);
}
