//! Diatonic Map
//!
//! Reference chart pairing each scale degree with its default chord quality
//! and spelled chord.

use crate::mode::Mode;
use crate::pitch::Note;
use crate::quality::{spell_chord, ChordQuality};
use crate::scale::{Scale, SCALE_LEN};

use crate::quality::ChordQuality::{
    DominantSeventh as Dom7, HalfDiminished as Half, MajorSeventh as Maj7, MinorSeventh as Min7,
};

/// Default seventh-chord quality per degree, for the modes that have one.
const fn default_qualities(mode: Mode) -> Option<[ChordQuality; SCALE_LEN]> {
    match mode {
        Mode::Ionian => Some([Maj7, Min7, Min7, Maj7, Dom7, Min7, Half]),
        Mode::Aeolian => Some([Min7, Half, Maj7, Min7, Min7, Maj7, Dom7]),
        Mode::Mixolydian => Some([Dom7, Min7, Half, Maj7, Min7, Min7, Maj7]),
        Mode::Dorian => Some([Min7, Min7, Maj7, Dom7, Min7, Half, Maj7]),
        _ => None,
    }
}

/// One row of the chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiatonicEntry {
    /// Zero-based scale degree.
    pub degree: usize,
    /// Scale note at this degree.
    pub note: Note,
    /// Quality used when a progression step gives no override.
    pub quality: ChordQuality,
    /// Chord spelled from `note` and `quality`, in the scale's pool.
    pub chord: Vec<Note>,
}

impl DiatonicEntry {
    /// Note name followed by the quality tag, e.g. `"Dm7"`.
    pub fn symbol(&self) -> String {
        format!("{}{}", self.note, self.quality)
    }
}

/// The seven diatonic entries of one scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiatonicMap {
    entries: Vec<DiatonicEntry>,
}

impl DiatonicMap {
    /// Build the chart for `scale`, using the default quality table of `mode`.
    /// Modes without a table get [`ChordQuality::Generic`] on every degree.
    pub fn build(scale: &Scale, mode: Mode) -> DiatonicMap {
        let qualities = default_qualities(mode).unwrap_or([ChordQuality::Generic; SCALE_LEN]);
        let entries = scale
            .notes()
            .iter()
            .enumerate()
            .map(|(degree, &note)| {
                let quality = qualities.get(degree).copied().unwrap_or(ChordQuality::DEFAULT);
                let chord = spell_chord(note, quality, None);
                DiatonicEntry {
                    degree,
                    note,
                    quality,
                    chord,
                }
            })
            .collect();
        DiatonicMap { entries }
    }

    /// Entries in degree order.
    pub fn entries(&self) -> &[DiatonicEntry] {
        &self.entries
    }

    /// Entry for `degree`, if in range.
    pub fn get(&self, degree: usize) -> Option<&DiatonicEntry> {
        self.entries.get(degree)
    }
}
