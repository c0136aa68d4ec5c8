//! Progression Renderer
//!
//! Instantiates degree-based progression templates against a scale and its
//! diatonic map, producing chains of chord symbols.

use crate::diatonic::DiatonicMap;
use crate::quality::ChordQuality;
use crate::scale::Scale;
use serde::Deserialize;
use std::fmt::Display;

/// Joins the symbols of a rendered chain.
pub const CHAIN_CONNECTOR: &str = " -> ";

/// One chord of a template, expressed in scale degrees.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProgressionStep {
    /// Zero-based scale degree of the chord root.
    pub degree: usize,
    /// Quality to use instead of the degree's diatonic default.
    #[serde(default)]
    pub quality: Option<ChordQuality>,
    /// Zero-based scale degree of a slash bass.
    #[serde(default)]
    pub bass: Option<usize>,
}

impl ProgressionStep {
    /// Step on `degree` with the diatonic quality and no bass.
    pub const fn new(degree: usize) -> Self {
        ProgressionStep {
            degree,
            quality: None,
            bass: None,
        }
    }

    /// Override the quality.
    pub fn quality(mut self, quality: ChordQuality) -> Self {
        self.quality = Some(quality);
        self
    }

    /// Add a slash bass on `degree`.
    pub fn bass(mut self, degree: usize) -> Self {
        self.bass = Some(degree);
        self
    }
}

/// A named sequence of steps.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProgressionTemplate {
    /// Display name, e.g. `"ii - V - I (Extensions)"`.
    pub name: String,
    /// Chords in playing order.
    pub steps: Vec<ProgressionStep>,
}

/// Templates grouped under a genre label.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProgressionCategory {
    /// Genre label, e.g. `"Jazz / R&B"`.
    pub name: String,
    /// Templates in display order.
    pub templates: Vec<ProgressionTemplate>,
}

/// A template turned into concrete chord symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedProgression {
    /// Name of the source template.
    pub name: String,
    /// One symbol per rendered step.
    pub symbols: Vec<String>,
}

impl Display for RenderedProgression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.symbols.join(CHAIN_CONNECTOR))
    }
}

/// Render every step of `template` as `<root><quality>[/<bass>]`.
///
/// Steps whose degree lies outside the scale are skipped; a bass degree
/// outside the scale drops only the slash suffix.
pub fn render_template(
    template: &ProgressionTemplate,
    scale: &Scale,
    diatonic: &DiatonicMap,
) -> RenderedProgression {
    let symbols = template
        .steps
        .iter()
        .filter_map(|step| render_step(step, scale, diatonic))
        .collect();
    RenderedProgression {
        name: template.name.clone(),
        symbols,
    }
}

fn render_step(step: &ProgressionStep, scale: &Scale, diatonic: &DiatonicMap) -> Option<String> {
    let root = scale.degree(step.degree)?;
    let quality = step
        .quality
        .or_else(|| diatonic.get(step.degree).map(|entry| entry.quality))
        .unwrap_or(ChordQuality::DEFAULT);

    Some(match step.bass.and_then(|b| scale.degree(b)) {
        Some(bass) => format!("{root}{quality}/{bass}"),
        None => format!("{root}{quality}"),
    })
}
