//! Options shared by every language of a run.

/// Read-only run options.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// Leading lines ignored in every translation table.
    pub skip_lines: usize,
    /// Language checked against and emitted unscoped. Empty means none.
    pub default_language: String,
}

impl Config {
    /// Creates default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of leading lines to ignore.
    pub fn with_skip_lines(mut self, skip_lines: usize) -> Self {
        self.skip_lines = skip_lines;
        self
    }

    /// Sets the default language.
    pub fn with_default_language(mut self, default_language: impl Into<String>) -> Self {
        self.default_language = default_language.into();
        self
    }

    /// The default language, if one is configured.
    pub fn default_language(&self) -> Option<&str> {
        if self.default_language.is_empty() {
            None
        } else {
            Some(&self.default_language)
        }
    }

    pub fn is_default_language(&self, language: &str) -> bool {
        self.default_language() == Some(language)
    }
}
