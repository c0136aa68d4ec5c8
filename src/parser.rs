//! Chord Notation Parser
//!
//! Splits a chord symbol such as `F#m7/E` into root, quality text and
//! optional slash bass, and infers the governing mode from the quality.

use crate::mode::{infer_mode, Mode};
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

/// Separator between chord body and slash bass.
pub const BASS_SEPARATOR: char = '/';

lazy_static! {
    static ref ROOT_RE: Regex = Regex::new(r"(?i)^[A-G][#b]?").unwrap();
}

/// A chord symbol broken into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedChord {
    /// Root with a capital letter and `#` or `b`, e.g. `"Bb"`.
    pub root: String,
    /// Text following the root, as written (e.g. `"m7"`).
    pub quality: String,
    /// Mode inferred from `quality`.
    pub mode: Mode,
    /// Slash bass, capitalized; `None` when absent or empty.
    pub bass: Option<String>,
}

/// Errors when parsing chord symbols
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The symbol does not start with a letter A-G.
    #[error("could not recognize a chord root in `{input}`")]
    UnrecognizedRoot {
        /// The symbol as given.
        input: String,
    },
}

/// Parse a chord symbol: `<Root><Accidental?><Quality>(/<Bass>)?`.
pub fn parse_chord(input: &str) -> Result<ParsedChord, ParseError> {
    let input = input.trim();

    let mut parts = input.split(BASS_SEPARATOR);
    let body = parts.next().unwrap_or_default();
    let bass = parts.next().map(capitalize).filter(|b| !b.is_empty());

    let root_match = ROOT_RE
        .find(body)
        .ok_or_else(|| ParseError::UnrecognizedRoot {
            input: input.to_string(),
        })?;
    let root = capitalize(root_match.as_str());
    let quality = body[root_match.end()..].to_string();
    let mode = infer_mode(&quality);

    debug!(input, %root, %quality, %mode, ?bass, "parsed chord symbol");
    Ok(ParsedChord {
        root,
        quality,
        mode,
        bass,
    })
}

/// Upper-case the first character and lower-case the rest.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
