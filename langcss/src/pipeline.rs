//! Generating stylesheets for every translation table of a source directory.
//!
//! Each language runs its own chain (parse, build, check, emit). Chains only
//! share the read-only [`Config`] and [`DefaultSelectorSet`], which is loaded
//! before any chain starts, and run in parallel on the rayon pool.

use std::{
    fs,
    path::{Path, PathBuf},
};

use rayon::prelude::*;

use crate::{
    completeness::{CompletenessReport, check_completeness},
    config::Config,
    error::Error,
    formats::{css, csv},
    stylesheet::StyleMap,
    types::{DefaultSelectorSet, LanguageFile},
};

/// Lists the languages of `source_dir`: every regular `*.csv` file, sorted by name.
///
/// This is the only fatal step of a run.
pub fn discover_languages(source_dir: &Path) -> Result<Vec<LanguageFile>, Error> {
    let entries =
        fs::read_dir(source_dir).map_err(|e| Error::directory_listing(source_dir, e))?;

    let mut languages = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| Error::directory_listing(source_dir, e))?
            .path();
        if !path.is_file() {
            continue;
        }
        if let Some(language) = LanguageFile::from_source_path(&path) {
            languages.push(language);
        }
    }
    languages.sort();
    Ok(languages)
}

/// Reads a language's table into its style map. Unreadable tables give an empty map.
pub fn build_style_map(language: &LanguageFile, source_dir: &Path, config: &Config) -> StyleMap {
    let records = csv::read_from_or_empty(language.source_path(source_dir), config.skip_lines);
    StyleMap::from_records(records)
}

/// Loads the default language's selectors, or `None` when no default language is set.
pub fn load_default_selectors(source_dir: &Path, config: &Config) -> Option<DefaultSelectorSet> {
    let default_language = LanguageFile::new(config.default_language()?);
    let map = build_style_map(&default_language, source_dir, config);
    tracing::debug!(
        "loaded {} default selectors from {}",
        map.len(),
        default_language.source_file_name()
    );
    Some(DefaultSelectorSet::from_style_map(&map))
}

/// Result of one language's chain.
#[derive(Debug)]
pub struct LanguageOutcome {
    pub language: LanguageFile,
    pub output_path: PathBuf,
    /// Number of rules in the stylesheet.
    pub rules: usize,
    /// Completeness against the default language, when one was checked.
    pub report: Option<CompletenessReport>,
    /// Set when the stylesheet could not be written.
    pub error: Option<Error>,
}

impl LanguageOutcome {
    pub fn is_written(&self) -> bool {
        self.error.is_none()
    }

    /// Missing selectors, if the language was checked and found incomplete.
    pub fn incomplete_report(&self) -> Option<&CompletenessReport> {
        self.report.as_ref().filter(|report| !report.is_complete())
    }
}

/// Runs the full chain for one language.
///
/// Never fails: a write error is recorded in the outcome.
pub fn generate_language(
    language: &LanguageFile,
    source_dir: &Path,
    dest_dir: &Path,
    config: &Config,
    defaults: Option<&DefaultSelectorSet>,
) -> LanguageOutcome {
    let map = build_style_map(language, source_dir, config);

    let report = defaults
        .filter(|_| !config.is_default_language(&language.name))
        .map(|defaults| check_completeness(language, &map, defaults));

    let output_path = language.output_path(dest_dir);
    let prefix = css::scope_prefix(language, &config.default_language);
    let error = css::write_to(&map, &prefix, &output_path).err();
    tracing::debug!(
        "{}: {} rules -> {}",
        language,
        map.len(),
        output_path.display()
    );

    LanguageOutcome {
        language: language.clone(),
        output_path,
        rules: map.len(),
        report,
        error,
    }
}

/// Outcomes of a run, in language order.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub outcomes: Vec<LanguageOutcome>,
}

impl RunSummary {
    pub fn written(&self) -> impl Iterator<Item = &LanguageOutcome> {
        self.outcomes.iter().filter(|o| o.is_written())
    }

    pub fn failed(&self) -> impl Iterator<Item = &LanguageOutcome> {
        self.outcomes.iter().filter(|o| !o.is_written())
    }

    pub fn incomplete(&self) -> impl Iterator<Item = &CompletenessReport> {
        self.outcomes.iter().filter_map(LanguageOutcome::incomplete_report)
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// Generates `<dest>/<language>.css` for every `<source>/<language>.csv`.
#[derive(Debug, Clone)]
pub struct Generator {
    pub source_dir: PathBuf,
    pub dest_dir: PathBuf,
    pub config: Config,
}

impl Generator {
    pub fn new(
        source_dir: impl Into<PathBuf>,
        dest_dir: impl Into<PathBuf>,
        config: Config,
    ) -> Self {
        Generator {
            source_dir: source_dir.into(),
            dest_dir: dest_dir.into(),
            config,
        }
    }

    /// Runs every language and waits for all of them.
    ///
    /// Fails only if the source directory cannot be listed.
    pub fn run(&self) -> Result<RunSummary, Error> {
        let languages = discover_languages(&self.source_dir)?;
        let defaults = load_default_selectors(&self.source_dir, &self.config);

        if let Err(e) = fs::create_dir_all(&self.dest_dir) {
            tracing::warn!(
                "cannot create destination directory {}: {}",
                self.dest_dir.display(),
                e
            );
        }

        let outcomes = languages
            .par_iter()
            .map(|language| {
                generate_language(
                    language,
                    &self.source_dir,
                    &self.dest_dir,
                    &self.config,
                    defaults.as_ref(),
                )
            })
            .collect();
        Ok(RunSummary { outcomes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn source_with(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        dir
    }

    #[test]
    fn test_discover_only_csv_files() {
        let dir = source_with(&[("fr.csv", ""), ("en.csv", ""), ("notes.txt", "")]);
        fs::create_dir(dir.path().join("nested.csv")).unwrap();
        let languages = discover_languages(dir.path()).unwrap();
        assert_eq!(
            languages,
            vec![LanguageFile::new("en"), LanguageFile::new("fr")]
        );
    }

    #[test]
    fn test_discover_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let err = discover_languages(&dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, Error::DirectoryListing { .. }));
    }

    #[test]
    fn test_no_default_language_loads_nothing() {
        let dir = source_with(&[("en.csv", "a,Hello\n")]);
        assert!(load_default_selectors(dir.path(), &Config::new()).is_none());
    }

    #[test]
    fn test_missing_default_table_gives_empty_set() {
        let dir = source_with(&[("fr.csv", "a,Bonjour\n")]);
        let config = Config::new().with_default_language("en");
        let defaults = load_default_selectors(dir.path(), &config).unwrap();
        assert!(defaults.is_empty());
    }

    #[test]
    fn test_generate_language_reports_missing() {
        let source = source_with(&[("en.csv", "x,Hello\ny,World\n"), ("fr.csv", "x,Bonjour\n")]);
        let dest = TempDir::new().unwrap();
        let config = Config::new().with_default_language("en");
        let defaults = load_default_selectors(source.path(), &config).unwrap();

        let outcome = generate_language(
            &LanguageFile::new("fr"),
            source.path(),
            dest.path(),
            &config,
            Some(&defaults),
        );
        assert!(outcome.is_written());
        assert_eq!(outcome.rules, 1);
        let report = outcome.incomplete_report().unwrap();
        assert_eq!(report.missing, vec!["y:before"]);
        assert_eq!(
            fs::read_to_string(dest.path().join("fr.css")).unwrap(),
            "body[lang=\"fr\"] x:before{content:\"Bonjour\"}"
        );
    }

    #[test]
    fn test_default_language_is_not_checked() {
        let source = source_with(&[("en.csv", "x,Hello\n")]);
        let dest = TempDir::new().unwrap();
        let config = Config::new().with_default_language("en");
        let defaults = load_default_selectors(source.path(), &config).unwrap();

        let outcome = generate_language(
            &LanguageFile::new("en"),
            source.path(),
            dest.path(),
            &config,
            Some(&defaults),
        );
        assert!(outcome.report.is_none());
        assert_eq!(
            fs::read_to_string(dest.path().join("en.css")).unwrap(),
            "x:before{content:\"Hello\"}"
        );
    }

    #[test]
    fn test_write_failure_is_recorded() {
        let source = source_with(&[("fr.csv", "x,Bonjour\n")]);
        let dest = TempDir::new().unwrap();
        let missing_dest = dest.path().join("does").join("not").join("exist");

        let outcome = generate_language(
            &LanguageFile::new("fr"),
            source.path(),
            &missing_dest,
            &Config::new(),
            None,
        );
        assert!(!outcome.is_written());
        assert!(matches!(outcome.error, Some(Error::OutputWrite { .. })));
    }

    #[test]
    fn test_run_creates_destination_and_writes_all() {
        let source = source_with(&[("en.csv", "x,Hello\n"), ("fr.csv", "x,Bonjour\n")]);
        let dest = TempDir::new().unwrap();
        let dest_dir = dest.path().join("docs").join("localize");

        let summary = Generator::new(source.path(), &dest_dir, Config::new())
            .run()
            .unwrap();
        assert_eq!(summary.len(), 2);
        assert_eq!(summary.written().count(), 2);
        assert_eq!(summary.failed().count(), 0);
        assert!(dest_dir.join("en.css").is_file());
        assert!(dest_dir.join("fr.css").is_file());
    }
}
