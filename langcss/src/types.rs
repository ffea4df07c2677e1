//! Core types shared by the parser, the stylesheet builder and the emitter.

use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

use crate::stylesheet::StyleMap;

/// Extension of translation tables in the source directory.
pub const SOURCE_EXTENSION: &str = "csv";

/// Extension of generated stylesheets in the destination directory.
pub const OUTPUT_EXTENSION: &str = "css";

/// One row of a translation table.
///
/// `selector` is already normalized (see [`crate::selector::normalize_selector`])
/// and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRecord {
    /// CSS selector ending in `:before` or `:after`.
    pub selector: String,

    /// Literal text injected as `content`.
    pub word: String,

    /// Raw CSS declarations appended after `content`, possibly empty.
    pub extra_css: String,
}

impl TranslationRecord {
    pub fn new(
        selector: impl Into<String>,
        word: impl Into<String>,
        extra_css: impl Into<String>,
    ) -> Self {
        TranslationRecord {
            selector: selector.into(),
            word: word.into(),
            extra_css: extra_css.into(),
        }
    }

    /// Whether the row carries CSS beyond the `content` declaration.
    pub fn has_extra_css(&self) -> bool {
        !self.extra_css.is_empty()
    }
}

/// A logical language, named after its translation table without extension.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LanguageFile {
    pub name: String,
}

impl LanguageFile {
    pub fn new(name: impl Into<String>) -> Self {
        LanguageFile { name: name.into() }
    }

    /// Builds a language from a `<name>.csv` path. Returns `None` for any other path.
    pub fn from_source_path(path: &Path) -> Option<Self> {
        if path.extension()? != SOURCE_EXTENSION {
            return None;
        }
        let stem = path.file_stem()?.to_str()?;
        if stem.is_empty() {
            return None;
        }
        Some(LanguageFile::new(stem))
    }

    /// File name of the translation table, e.g. `fr.csv`.
    pub fn source_file_name(&self) -> String {
        format!("{}.{}", self.name, SOURCE_EXTENSION)
    }

    pub fn source_path(&self, source_dir: &Path) -> PathBuf {
        source_dir.join(self.source_file_name())
    }

    pub fn output_path(&self, dest_dir: &Path) -> PathBuf {
        dest_dir.join(format!("{}.{}", self.name, OUTPUT_EXTENSION))
    }
}

impl Display for LanguageFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Selectors of the default language, in table order and without duplicates.
///
/// Every other language is checked against this list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DefaultSelectorSet {
    selectors: Vec<String>,
}

impl DefaultSelectorSet {
    pub fn new(selectors: Vec<String>) -> Self {
        DefaultSelectorSet { selectors }
    }

    /// Takes the selectors of the default language's style map.
    pub fn from_style_map(map: &StyleMap) -> Self {
        DefaultSelectorSet {
            selectors: map.selectors().map(str::to_string).collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.selectors.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }
}
