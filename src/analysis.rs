//! Chord Analysis
//!
//! One request end to end: chord symbol to mode, scale and diatonic chart.

use crate::diatonic::DiatonicMap;
use crate::library::CategoryMatch;
use crate::parser::{parse_chord, ParseError, ParsedChord};
use crate::progression::{render_template, RenderedProgression};
use crate::scale::{Scale, ScaleError};
use thiserror::Error;
use tracing::debug;

/// Errors that abort a single analysis
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// The symbol has no recognizable root.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The root could not be laid out as a scale.
    #[error(transparent)]
    Scale(#[from] ScaleError),
}

/// Everything derived from one chord symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    /// The parsed symbol.
    pub chord: ParsedChord,
    /// Scale of the inferred mode over the chord root.
    pub scale: Scale,
    /// Default chords on each degree of `scale`.
    pub diatonic: DiatonicMap,
}

impl Analysis {
    /// Parse `input` and derive its scale and diatonic chart.
    pub fn run(input: &str) -> Result<Analysis, AnalysisError> {
        let chord = parse_chord(input)?;
        let scale = Scale::resolve(&chord.root, chord.mode)?;
        let diatonic = DiatonicMap::build(&scale, chord.mode);
        debug!(root = %chord.root, mode = %chord.mode, %scale, "analysis complete");
        Ok(Analysis {
            chord,
            scale,
            diatonic,
        })
    }

    /// Render every template of `category` against this analysis.
    pub fn render(&self, category: &CategoryMatch<'_>) -> Vec<RenderedProgression> {
        category
            .templates
            .iter()
            .map(|t| render_template(t, &self.scale, &self.diatonic))
            .collect()
    }
}
