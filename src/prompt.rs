//! Prompt enhancement: decorates a raw prompt with a style descriptor.

use crate::models::Style;

/// Appends the style descriptor (when the style has one) and a fixed
/// quality suffix. Total over all inputs; never deduplicates, even if the
/// prompt already ends with the suffix text.
pub fn enhance(prompt: &str, style: Style) -> String {
    let descriptor = style.descriptor();
    if descriptor.is_empty() {
        format!("{}, high quality", prompt)
    } else {
        format!("{}, {}, high quality", prompt, descriptor)
    }
}

/// String-keyed variant for callers holding an untyped style selection.
/// Unknown keys behave exactly like `none`.
pub fn enhance_by_key(prompt: &str, style_key: &str) -> String {
    enhance(prompt, Style::from_key(style_key))
}
