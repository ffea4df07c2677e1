//! Selector normalization.
//!
//! Text is injected through generated content, so every selector has to
//! target a pseudo-element. `:before` is assumed when a row names none.

/// Pseudo-elements accepted as selector suffixes.
pub const PSEUDO_ELEMENTS: [&str; 2] = [":before", ":after"];

/// Pseudo-element appended to selectors that carry none.
pub const DEFAULT_PSEUDO_ELEMENT: &str = ":before";

/// Returns `true` if `selector` already ends in `:before` or `:after`.
pub fn has_pseudo_element(selector: &str) -> bool {
    PSEUDO_ELEMENTS
        .iter()
        .any(|suffix| selector.ends_with(suffix))
}

/// Returns the canonical form of `selector`.
///
/// ```rust
/// use langcss::selector::normalize_selector;
/// assert_eq!(normalize_selector(".title"), ".title:before");
/// assert_eq!(normalize_selector(".title:after"), ".title:after");
/// ```
pub fn normalize_selector(selector: &str) -> String {
    if has_pseudo_element(selector) {
        selector.to_string()
    } else {
        format!("{}{}", selector, DEFAULT_PSEUDO_ELEMENT)
    }
}
