#![forbid(unsafe_code)]
//! Localized CSS from CSV translation tables.
//!
//! Every `<language>.csv` table maps CSS selectors to translated words. langcss
//! turns each table into `<language>.css`, where every word becomes a
//! generated-content rule (`content:"<word>"`) scoped under
//! `body[lang="<language>"]`.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use langcss::{Config, Generator};
//!
//! let config = Config::new().with_skip_lines(1).with_default_language("en");
//! let summary = Generator::new("localize", "docs/localize", config).run()?;
//! for report in summary.incomplete() {
//!     eprint!("{}", report);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Table format
//!
//! ```text
//! <ignored lines ...>
//! <selector>,<word>[,<extra css>]
//! ```
//!
//! Selectors without a `:before`/`:after` suffix get `:before`. The default
//! language is emitted without the `body[lang=...]` scope and serves as the
//! list of selectors every other language is checked against.

pub mod completeness;
pub mod config;
pub mod error;
pub mod formats;
pub mod pipeline;
pub mod selector;
pub mod stylesheet;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    completeness::{CompletenessReport, check_completeness},
    config::Config,
    error::Error,
    pipeline::{Generator, LanguageOutcome, RunSummary, generate_language},
    selector::normalize_selector,
    stylesheet::{StyleMap, StyleRule},
    types::{DefaultSelectorSet, LanguageFile, TranslationRecord},
};
