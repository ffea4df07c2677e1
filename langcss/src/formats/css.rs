//! Writing generated stylesheets.
//!
//! Rules are emitted as `<prefix><selector>{<declaration>}` with nothing in
//! between, in style map order.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{error::Error, stylesheet::StyleMap, types::LanguageFile};

/// Prefix scoping a language's rules to `body[lang="<language>"]`.
///
/// The default language is emitted unscoped. An empty `default_language`
/// means there is no default and every language is scoped.
pub fn scope_prefix(language: &LanguageFile, default_language: &str) -> String {
    if !default_language.is_empty() && language.name == default_language {
        String::new()
    } else {
        format!("body[lang=\"{}\"] ", language.name)
    }
}

/// Renders `map` as CSS text with every selector preceded by `prefix`.
pub fn render(map: &StyleMap, prefix: &str) -> String {
    let mut css = String::new();
    for rule in map.iter() {
        css.push_str(prefix);
        css.push_str(&rule.selector);
        css.push('{');
        css.push_str(&rule.declaration);
        css.push('}');
    }
    css
}

/// Write the rendered stylesheet to any writer.
pub fn to_writer<W: Write>(map: &StyleMap, prefix: &str, mut writer: W) -> Result<(), Error> {
    writer.write_all(render(map, prefix).as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Write the rendered stylesheet to `path`, replacing any previous content.
pub fn write_to<P: AsRef<Path>>(map: &StyleMap, prefix: &str, path: P) -> Result<(), Error> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| Error::output_write(path, e))?;
    to_writer(map, prefix, BufWriter::new(file)).map_err(|e| match e {
        Error::Io(source) => Error::output_write(path, source),
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TranslationRecord;
    use proptest::prelude::*;

    fn hi_map() -> StyleMap {
        StyleMap::from_records(vec![TranslationRecord::new("a:before", "Hi", "")])
    }

    #[test]
    fn test_non_default_language_is_scoped() {
        let prefix = scope_prefix(&LanguageFile::new("fr"), "en");
        assert_eq!(
            render(&hi_map(), &prefix),
            "body[lang=\"fr\"] a:before{content:\"Hi\"}"
        );
    }

    #[test]
    fn test_default_language_is_unscoped() {
        let prefix = scope_prefix(&LanguageFile::new("en"), "en");
        assert_eq!(render(&hi_map(), &prefix), "a:before{content:\"Hi\"}");
    }

    #[test]
    fn test_no_default_language_scopes_everything() {
        assert_eq!(
            scope_prefix(&LanguageFile::new("en"), ""),
            "body[lang=\"en\"] "
        );
    }

    #[test]
    fn test_rules_are_concatenated_in_order() {
        let map = StyleMap::from_records(vec![
            TranslationRecord::new("b:before", "B", ""),
            TranslationRecord::new("a:after", "A", "color:red"),
        ]);
        assert_eq!(
            render(&map, ""),
            "b:before{content:\"B\"}a:after{content:\"A\";color:red}"
        );
    }

    #[test]
    fn test_empty_map_renders_nothing() {
        assert_eq!(render(&StyleMap::new(), "body[lang=\"fr\"] "), "");
    }

    #[test]
    fn test_to_writer() {
        let mut out = Vec::new();
        to_writer(&hi_map(), "", &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a:before{content:\"Hi\"}");
    }

    #[test]
    fn test_write_to_replaces_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fr.css");
        std::fs::write(&path, "stale content that is longer than the output").unwrap();
        write_to(&hi_map(), "", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a:before{content:\"Hi\"}");
    }

    #[test]
    fn test_write_to_matches_to_writer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("de.css");
        let map = StyleMap::from_records(vec![
            TranslationRecord::new("a:before", "Hallo", ""),
            TranslationRecord::new("b:after", "Welt", "color:red"),
        ]);
        let mut expected = Vec::new();
        to_writer(&map, "body[lang=\"de\"] ", &mut expected).unwrap();
        write_to(&map, "body[lang=\"de\"] ", &path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), expected);
    }

    #[test]
    fn test_write_to_missing_directory_is_output_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("fr.css");
        let err = write_to(&hi_map(), "", &path).unwrap_err();
        assert!(matches!(err, Error::OutputWrite { .. }));
    }

    proptest! {
        #[test]
        fn prop_every_rule_carries_prefix(
            words in prop::collection::vec("[A-Za-z ]{0,10}", 1..6),
        ) {
            let records = words
                .iter()
                .enumerate()
                .map(|(i, w)| TranslationRecord::new(format!(".k{}:before", i), w.clone(), ""));
            let map = StyleMap::from_records(records);
            let prefix = "body[lang=\"de\"] ";
            let css = render(&map, prefix);
            prop_assert_eq!(css.matches(prefix).count(), map.len());
            prop_assert!(css.starts_with(prefix));
            prop_assert_eq!(css.chars().last(), Some('}'));
        }
    }
}
