//! Building a language's [`StyleMap`] from its translation records.

use std::collections::HashMap;

use crate::types::TranslationRecord;

/// One generated rule: a normalized selector and its declaration block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    pub selector: String,
    pub declaration: String,
}

/// Selector to declaration block mapping for one language.
///
/// Rules keep the order in which their selector was first seen. Inserting a
/// selector again replaces its declaration in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleMap {
    rules: Vec<StyleRule>,
    index: HashMap<String, usize>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the map from records, later records winning on duplicate selectors.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = TranslationRecord>,
    {
        let mut map = StyleMap::new();
        for record in records {
            map.add_record(&record);
        }
        map
    }

    /// Adds the rule derived from `record`.
    pub fn add_record(&mut self, record: &TranslationRecord) {
        self.insert(record.selector.clone(), declaration_for(record));
    }

    /// Inserts or replaces the declaration for `selector`.
    pub fn insert(&mut self, selector: String, declaration: String) {
        if let Some(&position) = self.index.get(&selector) {
            self.rules[position].declaration = declaration;
            return;
        }
        self.index.insert(selector.clone(), self.rules.len());
        self.rules.push(StyleRule {
            selector,
            declaration,
        });
    }

    pub fn get(&self, selector: &str) -> Option<&str> {
        self.index
            .get(selector)
            .map(|&position| self.rules[position].declaration.as_str())
    }

    pub fn contains(&self, selector: &str) -> bool {
        self.index.contains_key(selector)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StyleRule> {
        self.rules.iter()
    }

    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.selector.as_str())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<TranslationRecord> for StyleMap {
    fn from_iter<T: IntoIterator<Item = TranslationRecord>>(iter: T) -> Self {
        StyleMap::from_records(iter)
    }
}

/// Declaration block for one record: `content:"<word>"`, followed by
/// `;<extra css>` when the row has extra CSS.
pub fn declaration_for(record: &TranslationRecord) -> String {
    let mut declaration = format!("content:\"{}\"", record.word);
    if record.has_extra_css() {
        declaration.push(';');
        declaration.push_str(&record.extra_css);
    }
    declaration
}
