//! Checking a language against the default language's selectors.

use std::fmt::Display;

use crate::{
    stylesheet::StyleMap,
    types::{DefaultSelectorSet, LanguageFile},
};

/// Selectors of the default language that a language does not translate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletenessReport {
    pub language: LanguageFile,
    /// Missing selectors, in default language order.
    pub missing: Vec<String>,
}

impl CompletenessReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Renders nothing for a complete language, otherwise a header naming the
/// language file followed by one indented line per missing selector.
impl Display for CompletenessReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_complete() {
            return Ok(());
        }
        writeln!(f, "Missing translations in {}:", self.language.source_file_name())?;
        for selector in &self.missing {
            writeln!(f, "  {}", selector)?;
        }
        Ok(())
    }
}

/// Lists every default selector absent from `map`.
pub fn check_completeness(
    language: &LanguageFile,
    map: &StyleMap,
    defaults: &DefaultSelectorSet,
) -> CompletenessReport {
    let missing = defaults
        .iter()
        .filter(|selector| !map.contains(selector))
        .map(str::to_string)
        .collect();
    CompletenessReport {
        language: language.clone(),
        missing,
    }
}
