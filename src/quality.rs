//! Chord Qualities
//!
//! Named interval patterns and the chord builder that spells them over a
//! root.

use crate::pitch::{resolve_pool, Note};
use serde::Deserialize;
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// Number of chord qualities
const NUM_CHORD_QUALITIES: usize = 16;

/// Supported qualities in the same order as `QUALITY_TAGS` and `QUALITY_INTERVALS`
const CHORD_QUALITIES: [ChordQuality; NUM_CHORD_QUALITIES] = [
    ChordQuality::Major,
    ChordQuality::Minor,
    ChordQuality::Diminished,
    ChordQuality::MajorSeventh,
    ChordQuality::MinorSeventh,
    ChordQuality::DominantSeventh,
    ChordQuality::HalfDiminished,
    ChordQuality::SuspendedSecond,
    ChordQuality::SuspendedFourth,
    ChordQuality::SeventhSuspendedFourth,
    ChordQuality::AddNine,
    ChordQuality::MinorNinth,
    ChordQuality::MajorNinth,
    ChordQuality::Sixth,
    ChordQuality::MinorSixth,
    ChordQuality::Generic,
];

/// Written tags matching `CHORD_QUALITIES` order
const QUALITY_TAGS: [&str; NUM_CHORD_QUALITIES] = [
    "Major", "Minor", "Diminished", "Maj7", "m7", "7", "m7b5", "sus2", "sus4", "7sus4", "add9",
    "m9", "Maj9", "6", "m6", "(Gen)",
];

/// Intervals (in semitones) matching `CHORD_QUALITIES` order.
/// Offsets above 11 are compound intervals.
const QUALITY_INTERVALS: [&[u8]; NUM_CHORD_QUALITIES] = [
    &[0, 4, 7],
    &[0, 3, 7],
    &[0, 3, 6],
    &[0, 4, 7, 11],
    &[0, 3, 7, 10],
    &[0, 4, 7, 10],
    &[0, 3, 6, 10],
    &[0, 2, 7],
    &[0, 5, 7],
    &[0, 5, 7, 10],
    &[0, 4, 7, 14],
    &[0, 3, 7, 10, 14],
    &[0, 4, 7, 11, 14],
    &[0, 4, 7, 9],
    &[0, 3, 7, 9],
    &[0, 4, 7],
];

/// Chord qualities known to the chord builder
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum ChordQuality {
    /// Major triad (e.g., C-E-G)
    Major,
    /// Minor triad (e.g., C-Eb-G)
    Minor,
    /// Diminished triad (e.g., C-Eb-Gb)
    Diminished,
    /// Major seventh (e.g., C-E-G-B)
    MajorSeventh,
    /// Minor seventh (e.g., C-Eb-G-Bb)
    MinorSeventh,
    /// Dominant seventh (e.g., C-E-G-Bb)
    DominantSeventh,
    /// Half-diminished seventh (e.g., C-Eb-Gb-Bb)
    HalfDiminished,
    /// Suspended second (e.g., C-D-G)
    SuspendedSecond,
    /// Suspended fourth (e.g., C-F-G)
    SuspendedFourth,
    /// Dominant seventh with suspended fourth (e.g., C-F-G-Bb)
    SeventhSuspendedFourth,
    /// Major triad with added ninth (e.g., C-E-G-D)
    AddNine,
    /// Minor ninth (e.g., C-Eb-G-Bb-D)
    MinorNinth,
    /// Major ninth (e.g., C-E-G-B-D)
    MajorNinth,
    /// Major sixth (e.g., C-E-G-A)
    Sixth,
    /// Minor sixth (e.g., C-Eb-G-A)
    MinorSixth,
    /// Placeholder for modes without a diatonic quality table; spelled as Major
    Generic,
}

impl ChordQuality {
    /// Quality used for tags the builder does not know.
    pub const DEFAULT: ChordQuality = ChordQuality::Major;

    /// All qualities, in table order.
    pub const ALL: [ChordQuality; NUM_CHORD_QUALITIES] = CHORD_QUALITIES;

    fn index(self) -> usize {
        self as usize
    }

    /// Tag as written in chord symbols and library files, e.g. `"Maj7"`.
    pub const fn tag(self) -> &'static str {
        QUALITY_TAGS[self as usize]
    }

    /// Semitone offsets from the root.
    pub fn intervals(self) -> &'static [u8] {
        QUALITY_INTERVALS[self.index()]
    }

    /// Exact, case-sensitive tag lookup.
    pub fn from_tag(tag: &str) -> Option<ChordQuality> {
        QUALITY_TAGS
            .iter()
            .position(|&t| t == tag)
            .map(|idx| CHORD_QUALITIES[idx])
    }

    /// Tag lookup that degrades to [`ChordQuality::DEFAULT`].
    pub fn from_tag_or_default(tag: &str) -> ChordQuality {
        Self::from_tag(tag).unwrap_or(Self::DEFAULT)
    }
}

impl Display for ChordQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Tag that names no known chord quality.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown chord quality `{0}`")]
pub struct UnknownQuality(pub String);

impl FromStr for ChordQuality {
    type Err = UnknownQuality;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| UnknownQuality(s.to_string()))
    }
}

impl TryFrom<String> for ChordQuality {
    type Error = UnknownQuality;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Errors when building chords
#[derive(Debug, Error)]
pub enum ChordError {
    /// The root is spelled in neither pitch pool.
    #[error("root `{root}` is not a spelled pitch in either pool")]
    UnresolvedRoot {
        /// The root as given.
        root: String,
    },
}

/// Spell a chord over `root`.
///
/// `quality` is a written tag; unknown tags build a Major triad. When `bass`
/// names a pitch in the chord's pool it is moved to the front and removed
/// from the upper voices; any other bass leaves the chord as it is.
pub fn build_chord(root: &str, quality: &str, bass: Option<&str>) -> Result<Vec<Note>, ChordError> {
    let root_note = resolve_pool(root)
        .note()
        .ok_or_else(|| ChordError::UnresolvedRoot {
            root: root.to_string(),
        })?;
    Ok(spell_chord(
        root_note,
        ChordQuality::from_tag_or_default(quality),
        bass,
    ))
}

/// Spell a chord over an already spelled root, staying in the root's pool.
pub fn spell_chord(root: Note, quality: ChordQuality, bass: Option<&str>) -> Vec<Note> {
    let mut notes: Vec<Note> = quality
        .intervals()
        .iter()
        .map(|&off| root.transpose(off))
        .collect();

    if let Some(bass_note) = bass.and_then(|b| root.spelling().note(b)) {
        notes.retain(|&n| n != bass_note);
        notes.insert(0, bass_note);
    }
    notes
}

/// Names of `notes`, in order.
pub fn note_names(notes: &[Note]) -> Vec<&'static str> {
    notes.iter().map(|n| n.name()).collect()
}
