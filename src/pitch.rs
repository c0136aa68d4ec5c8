//! Pitch Speller
//!
//! Enharmonic spelling of the twelve pitch classes. Every scale and chord is
//! spelled from a single pool, either all sharps or all flats, chosen from
//! the way its root is written.

use std::fmt::Display;
use tracing::debug;

const SEMITONES: usize = 12;

/// Sharp-preferring names, indexed by pitch class (C = 0).
pub const SHARP_NAMES: [&str; SEMITONES] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat-preferring names, indexed by pitch class (C = 0).
pub const FLAT_NAMES: [&str; SEMITONES] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Keys conventionally written with flats even without an explicit `b`.
const FLAT_KEYS: [&str; 12] = [
    "F", "Bb", "Eb", "Ab", "Db", "Gb", "f", "bb", "eb", "ab", "db", "gb",
];

/// Which of the two name pools a note is spelled from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Spelling {
    /// C, C#, D, D#, ...
    Sharp,
    /// C, Db, D, Eb, ...
    Flat,
}

impl Spelling {
    /// The twelve names of this pool.
    pub const fn names(self) -> &'static [&'static str; SEMITONES] {
        match self {
            Spelling::Sharp => &SHARP_NAMES,
            Spelling::Flat => &FLAT_NAMES,
        }
    }

    /// The other pool.
    pub const fn alternate(self) -> Spelling {
        match self {
            Spelling::Sharp => Spelling::Flat,
            Spelling::Flat => Spelling::Sharp,
        }
    }

    /// Look up `name` in this pool and return it as a note.
    pub fn note(self, name: &str) -> Option<Note> {
        self.names()
            .iter()
            .position(|&n| n == name)
            .map(|idx| Note::new(idx as u8, self))
    }
}

impl Display for Spelling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// A pitch class together with the pool it is spelled from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Note {
    pitch_class: u8,
    spelling: Spelling,
}

impl Note {
    /// Create a note; `pitch_class` wraps modulo 12.
    pub const fn new(pitch_class: u8, spelling: Spelling) -> Self {
        Note {
            pitch_class: pitch_class % SEMITONES as u8,
            spelling,
        }
    }

    /// Semitone value, 0 (C) to 11 (B).
    pub const fn pitch_class(self) -> u8 {
        self.pitch_class
    }

    /// Pool this note is spelled from.
    pub const fn spelling(self) -> Spelling {
        self.spelling
    }

    /// Spelled name, e.g. `"Eb"`.
    pub const fn name(self) -> &'static str {
        self.spelling.names()[self.pitch_class as usize]
    }

    /// Move up by `semitones`, keeping the spelling pool. Compound intervals
    /// (above 11) wrap to their pitch class.
    pub const fn transpose(self, semitones: u8) -> Note {
        let pc = (self.pitch_class as usize + semitones as usize) % SEMITONES;
        Note::new(pc as u8, self.spelling)
    }
}

impl Display for Note {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Pick the home pool for a root as written.
///
/// Priority: an explicit flat accidental, then an explicit sharp, then the
/// conventionally flat keys; everything else is spelled with sharps.
pub fn pool_for(root: &str) -> Spelling {
    let mut chars = root.chars();
    chars.next();
    if chars.next() == Some('b') {
        Spelling::Flat
    } else if root.contains('#') {
        Spelling::Sharp
    } else if FLAT_KEYS.contains(&root) {
        Spelling::Flat
    } else {
        Spelling::Sharp
    }
}

/// Outcome of locating a root in the pitch pools.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PoolResolution {
    /// Found in the pool chosen by [`pool_for`].
    Home(Note),
    /// Missing from the home pool but present in the other one.
    Alternate(Note),
    /// Present in neither pool (e.g. `Cb`, `E#`).
    Unresolved,
}

impl PoolResolution {
    /// The located note, if any.
    pub fn note(self) -> Option<Note> {
        match self {
            PoolResolution::Home(note) | PoolResolution::Alternate(note) => Some(note),
            PoolResolution::Unresolved => None,
        }
    }
}

/// Locate `root` in its home pool, retrying the alternate pool.
pub fn resolve_pool(root: &str) -> PoolResolution {
    let home = pool_for(root);
    if let Some(note) = home.note(root) {
        return PoolResolution::Home(note);
    }
    let resolution = match home.alternate().note(root) {
        Some(note) => PoolResolution::Alternate(note),
        None => PoolResolution::Unresolved,
    };
    debug!(root, %home, ?resolution, "root missing from home pool");
    resolution
}
