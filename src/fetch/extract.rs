//! Paragraph text extraction

use scraper::{Html, Selector};

/// Flatten the text of every `<p>` element in document order.
///
/// Each paragraph contributes all of its descendant text nodes, untouched;
/// paragraphs are joined with a single space and the result is trimmed.
pub fn extract_paragraph_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let Ok(selector) = Selector::parse("p") else {
        return String::new();
    };

    document
        .select(&selector)
        .map(|p| p.text().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}
