//! Progression Library
//!
//! Genre starter-chord suggestions and progression templates, loaded from
//! TOML. A built-in library is compiled into the crate; a user file can
//! replace it.

use crate::progression::{ProgressionCategory, ProgressionTemplate};
use crate::scale::SCALE_LEN;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

const BUILTIN_LIBRARY: &str = include_str!("library.toml");

/// Errors when loading a library
#[derive(Debug, Error)]
pub enum LibraryError {
    /// The library file could not be read.
    #[error("failed to read library file {path}: {source}")]
    FileRead {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The TOML was malformed or named an unknown quality tag.
    #[error("failed to parse library {origin}: {message}")]
    Parse {
        /// File path, or `built-in`.
        origin: String,
        /// Parser message.
        message: String,
    },

    /// `[fallback] category` names no defined category.
    #[error("fallback category `{0}` is not defined")]
    MissingFallback(String),
}

/// Starter chords for one genre.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GenreSuggestion {
    /// Genre key, matched by substring.
    pub name: String,
    /// Chord symbols to offer.
    pub chords: Vec<String>,
}

/// Category shown when a progression query matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Fallback {
    /// Label to show for the fallback listing.
    pub label: String,
    /// Name of the category whose templates are shown.
    pub category: String,
}

/// A category selected by a progression query.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CategoryMatch<'a> {
    /// Label to display.
    pub name: &'a str,
    /// Templates of the category.
    pub templates: &'a [ProgressionTemplate],
}

/// Read-only suggestion and template tables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Library {
    default_chords: Vec<String>,
    fallback: Fallback,
    #[serde(default)]
    genres: Vec<GenreSuggestion>,
    #[serde(default)]
    categories: Vec<ProgressionCategory>,
}

/// Builder for `Library` to choose its source
#[derive(Debug, Default)]
pub struct LibraryBuilder {
    path: Option<PathBuf>,
}

impl LibraryBuilder {
    /// Create a builder that yields the built-in library
    pub fn new() -> Self {
        LibraryBuilder { path: None }
    }

    /// Load from a TOML file instead of the built-in library
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Build the `Library`
    pub fn build(self) -> Result<Library, LibraryError> {
        match self.path {
            Some(path) => Library::load(&path),
            None => Library::builtin(),
        }
    }
}

impl Library {
    /// Return a builder to choose the library source
    pub fn builder() -> LibraryBuilder {
        LibraryBuilder::new()
    }

    /// The library compiled into the crate.
    pub fn builtin() -> Result<Library, LibraryError> {
        debug!("using built-in progression library");
        Self::from_toml(BUILTIN_LIBRARY, "built-in")
    }

    /// Load a library from a TOML file.
    pub fn load(path: &Path) -> Result<Library, LibraryError> {
        let contents = std::fs::read_to_string(path).map_err(|e| LibraryError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        info!(path = %path.display(), "loading progression library");
        Self::from_toml(&contents, &path.display().to_string())
    }

    /// Parse and validate a library document. `origin` names it in errors.
    pub fn from_toml(contents: &str, origin: &str) -> Result<Library, LibraryError> {
        let library: Library = toml::from_str(contents).map_err(|e| LibraryError::Parse {
            origin: origin.to_string(),
            message: e.to_string(),
        })?;
        library.validate()?;
        Ok(library)
    }

    fn validate(&self) -> Result<(), LibraryError> {
        if self.category(&self.fallback.category).is_none() {
            return Err(LibraryError::MissingFallback(self.fallback.category.clone()));
        }
        for category in &self.categories {
            for template in &category.templates {
                for step in &template.steps {
                    let bass_out = step.bass.is_some_and(|b| b >= SCALE_LEN);
                    if step.degree >= SCALE_LEN || bass_out {
                        warn!(
                            category = %category.name,
                            template = %template.name,
                            degree = step.degree,
                            bass = ?step.bass,
                            "step outside the scale will be skipped when rendering"
                        );
                    }
                }
            }
        }
        Ok(())
    }

    /// Genre suggestion table, in file order.
    pub fn genres(&self) -> &[GenreSuggestion] {
        &self.genres
    }

    /// Progression categories, in file order.
    pub fn categories(&self) -> &[ProgressionCategory] {
        &self.categories
    }

    /// Category with exactly this name.
    pub fn category(&self, name: &str) -> Option<&ProgressionCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Starter chords for `genre`.
    ///
    /// Every genre whose name contains the lower-cased query contributes its
    /// chords, in table order. No match yields the default chords.
    pub fn suggestions(&self, genre: &str) -> Vec<&str> {
        let query = genre.to_lowercase();
        let chords: Vec<&str> = self
            .genres
            .iter()
            .filter(|g| g.name.contains(&query))
            .flat_map(|g| g.chords.iter().map(String::as_str))
            .collect();
        if chords.is_empty() {
            debug!(genre, "no genre matched, using default chords");
            self.default_chords.iter().map(String::as_str).collect()
        } else {
            chords
        }
    }

    /// Categories matching `query` by case-insensitive substring; an empty
    /// query selects all. No match yields the fallback category under the
    /// fallback label.
    pub fn progressions(&self, query: &str) -> Vec<CategoryMatch<'_>> {
        let needle = query.to_lowercase();
        let matches: Vec<CategoryMatch<'_>> = self
            .categories
            .iter()
            .filter(|c| query.is_empty() || c.name.to_lowercase().contains(&needle))
            .map(|c| CategoryMatch {
                name: &c.name,
                templates: &c.templates,
            })
            .collect();
        if !matches.is_empty() {
            return matches;
        }

        debug!(query, label = %self.fallback.label, "no category matched, using fallback");
        self.category(&self.fallback.category)
            .map(|c| CategoryMatch {
                name: &self.fallback.label,
                templates: &c.templates,
            })
            .into_iter()
            .collect()
    }
}
