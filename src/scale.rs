//! Scale Resolver
//!
//! Builds the seven-note scale of a mode over a spelled root.

use crate::mode::Mode;
use crate::pitch::{resolve_pool, Note, PoolResolution};
use std::{fmt::Display, ops::Index};
use thiserror::Error;

/// Notes in a diatonic scale
pub const SCALE_LEN: usize = 7;

/// Errors when resolving scales
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScaleError {
    /// The root is spelled in neither pitch pool (e.g. `Cb`).
    #[error("cannot generate a scale for `{root}`: not found in either pitch pool")]
    UnresolvedRoot {
        /// The root as given.
        root: String,
    },
}

/// Seven notes of a mode, degree-indexed from 0, all from one spelling pool.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Scale {
    mode: Mode,
    notes: [Note; SCALE_LEN],
}

impl Scale {
    /// Resolve `root` in the pitch pools and lay out `mode` over it.
    pub fn resolve(root: &str, mode: Mode) -> Result<Scale, ScaleError> {
        let tonic = match resolve_pool(root) {
            PoolResolution::Home(note) | PoolResolution::Alternate(note) => note,
            PoolResolution::Unresolved => {
                return Err(ScaleError::UnresolvedRoot {
                    root: root.to_string(),
                })
            }
        };
        Ok(Scale::from_tonic(tonic, mode))
    }

    /// Lay out `mode` over an already spelled tonic.
    pub fn from_tonic(tonic: Note, mode: Mode) -> Scale {
        let notes = mode.intervals().map(|off| tonic.transpose(off));
        Scale { mode, notes }
    }

    /// The mode this scale was built from.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// First degree.
    pub fn tonic(&self) -> Note {
        self.notes[0]
    }

    /// All seven notes in degree order.
    pub fn notes(&self) -> &[Note; SCALE_LEN] {
        &self.notes
    }

    /// Note at `degree`, or `None` past the seventh degree.
    pub fn degree(&self, degree: usize) -> Option<Note> {
        self.notes.get(degree).copied()
    }

    /// Number of degrees (always seven).
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Always false; present alongside `len`.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Index<usize> for Scale {
    type Output = Note;

    fn index(&self, degree: usize) -> &Note {
        &self.notes[degree]
    }
}

impl Display for Scale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, note) in self.notes.iter().enumerate() {
            if i > 0 {
                f.write_str(" - ")?;
            }
            write!(f, "{note}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::Spelling;
    use pretty_assertions::assert_eq;

    fn names(scale: &Scale) -> Vec<&'static str> {
        scale.notes().iter().map(|n| n.name()).collect()
    }

    #[test]
    fn c_ionian() {
        let scale = Scale::resolve("C", Mode::Ionian).unwrap();
        assert_eq!(names(&scale), vec!["C", "D", "E", "F", "G", "A", "B"]);
        assert_eq!(scale.to_string(), "C - D - E - F - G - A - B");
    }

    #[test]
    fn f_ionian_uses_flats() {
        let scale = Scale::resolve("F", Mode::Ionian).unwrap();
        assert_eq!(names(&scale), vec!["F", "G", "A", "Bb", "C", "D", "E"]);
        assert!(scale.notes().iter().all(|n| n.spelling() == Spelling::Flat));
    }

    #[test]
    fn sharp_minor() {
        let scale = Scale::resolve("F#", Mode::Aeolian).unwrap();
        assert_eq!(names(&scale), vec!["F#", "G#", "A", "B", "C#", "D", "E"]);
    }

    #[test]
    fn flat_locrian() {
        let scale = Scale::resolve("Bb", Mode::Locrian).unwrap();
        assert_eq!(names(&scale), vec!["Bb", "B", "Db", "Eb", "E", "Gb", "Ab"]);
    }

    #[test]
    fn degree_lookup_is_bounded() {
        let scale = Scale::resolve("G", Mode::Mixolydian).unwrap();
        assert_eq!(scale.degree(6).map(Note::name), Some("F"));
        assert_eq!(scale.degree(7), None);
        assert_eq!(scale[4].name(), "D");
        assert_eq!(scale.len(), SCALE_LEN);
    }

    #[test]
    fn unresolved_root() {
        assert_eq!(
            Scale::resolve("Cb", Mode::Ionian),
            Err(ScaleError::UnresolvedRoot { root: "Cb".into() })
        );
        assert!(Scale::resolve("B#", Mode::Dorian).is_err());
    }
}
