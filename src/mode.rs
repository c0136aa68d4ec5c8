//! Modes
//!
//! The seven diatonic modes and the ordered rule set that infers a mode from
//! the quality text of a chord symbol.

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::Display;

/// Number of modes
const NUM_MODES: usize = 7;

/// Modes in declaration order; trigger scanning follows this order.
pub const MODES: [Mode; NUM_MODES] = [
    Mode::Ionian,
    Mode::Dorian,
    Mode::Phrygian,
    Mode::Lydian,
    Mode::Mixolydian,
    Mode::Aeolian,
    Mode::Locrian,
];

/// Trigger patterns matching `MODES` order. Matched against lower-cased text.
const MODE_TRIGGERS: [&str; NUM_MODES] = [
    r"maj|major|M7|add9|(?:^|[^a-z])$",
    r"m6|dor|13",
    r"phryg|b9",
    r"lyd|#11",
    r"7|dom|mix|sus",
    r"m|min|minor",
    r"dim|b5|loc",
];

lazy_static! {
    static ref TRIGGERS: Vec<Regex> = MODE_TRIGGERS
        .iter()
        .map(|pattern| Regex::new(pattern).unwrap())
        .collect();
}

/// A seven-note modal scale pattern.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Major scale (e.g., C D E F G A B)
    Ionian,
    /// Minor with raised 6th (e.g., D E F G A B C)
    Dorian,
    /// Minor with lowered 2nd (e.g., E F G A B C D)
    Phrygian,
    /// Major with raised 4th (e.g., F G A B C D E)
    Lydian,
    /// Major with lowered 7th (e.g., G A B C D E F)
    Mixolydian,
    /// Natural minor (e.g., A B C D E F G)
    Aeolian,
    /// Diminished 5th over the root (e.g., B C D E F G A)
    Locrian,
}

impl Mode {
    /// Ascending semitone offsets of the seven degrees from the root.
    pub const fn intervals(self) -> [u8; 7] {
        match self {
            Mode::Ionian => [0, 2, 4, 5, 7, 9, 11],
            Mode::Dorian => [0, 2, 3, 5, 7, 9, 10],
            Mode::Phrygian => [0, 1, 3, 5, 7, 8, 10],
            Mode::Lydian => [0, 2, 4, 6, 7, 9, 11],
            Mode::Mixolydian => [0, 2, 4, 5, 7, 9, 10],
            Mode::Aeolian => [0, 2, 3, 5, 7, 8, 10],
            Mode::Locrian => [0, 1, 3, 5, 6, 8, 10],
        }
    }

    /// Regular expression used by the last-resort trigger scan.
    pub fn trigger(self) -> &'static Regex {
        &TRIGGERS[self.index()]
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// One entry of the substring rule chain.
#[derive(Copy, Clone)]
pub struct ModeRule {
    /// Short label for logs.
    pub name: &'static str,
    /// Test against the lower-cased quality text.
    pub matches: fn(&str) -> bool,
    /// Mode chosen when `matches` holds.
    pub mode: Mode,
}

impl ModeRule {
    const fn new(name: &'static str, matches: fn(&str) -> bool, mode: Mode) -> Self {
        ModeRule {
            name,
            matches,
            mode,
        }
    }
}

/// Substring rules, first match wins. Checked before the trigger scan so
/// that e.g. a bare "m" is Aeolian and only "m" with "6" is Dorian.
pub const MODE_RULES: [ModeRule; 7] = [
    ModeRule::new("maj7", |q| q.contains("maj7"), Mode::Ionian),
    ModeRule::new("m7b5", |q| q.contains("m7b5"), Mode::Locrian),
    ModeRule::new("m+6", |q| q.contains('m') && q.contains('6'), Mode::Dorian),
    ModeRule::new("m", |q| q.contains('m'), Mode::Aeolian),
    ModeRule::new("7", |q| q.contains('7'), Mode::Mixolydian),
    ModeRule::new("sus", |q| q.contains("sus"), Mode::Mixolydian),
    // "dim" already contains 'm', so the "m" rule wins first.
    ModeRule::new("dim", |q| q.contains("dim"), Mode::Locrian),
];

/// Mode used when neither rules nor triggers match.
pub const DEFAULT_MODE: Mode = Mode::Ionian;

/// Infer a mode from the quality text that follows a chord root.
pub fn infer_mode(quality: &str) -> Mode {
    let quality = quality.to_lowercase();

    if let Some(rule) = MODE_RULES.iter().find(|rule| (rule.matches)(&quality)) {
        tracing::debug!(quality = %quality, rule = rule.name, mode = %rule.mode, "mode rule matched");
        return rule.mode;
    }

    // Dorian's "13" can never fire here: Ionian is scanned first and accepts
    // any text ending in a non-letter.
    match MODES.iter().find(|mode| mode.trigger().is_match(&quality)) {
        Some(&mode) => {
            tracing::debug!(quality = %quality, %mode, "mode trigger matched");
            mode
        }
        None => DEFAULT_MODE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intervals_are_strictly_increasing_from_zero() {
        for mode in MODES {
            let iv = mode.intervals();
            assert_eq!(iv[0], 0, "{mode}");
            assert!(iv.windows(2).all(|w| w[0] < w[1]), "{mode}");
            assert!(iv.iter().all(|&i| i < 12), "{mode}");
        }
    }

    #[test]
    fn substring_rules_in_priority_order() {
        assert_eq!(infer_mode("maj7"), Mode::Ionian);
        assert_eq!(infer_mode("m7b5"), Mode::Locrian);
        assert_eq!(infer_mode("m6"), Mode::Dorian);
        assert_eq!(infer_mode("m9"), Mode::Aeolian);
        assert_eq!(infer_mode("m"), Mode::Aeolian);
        assert_eq!(infer_mode("7"), Mode::Mixolydian);
        assert_eq!(infer_mode("7#9"), Mode::Mixolydian);
        assert_eq!(infer_mode("sus4"), Mode::Mixolydian);
        assert_eq!(infer_mode("Maj7"), Mode::Ionian);
    }

    #[test]
    fn rule_order_is_fixed() {
        let names: Vec<&str> = MODE_RULES.iter().map(|r| r.name).collect();
        assert_eq!(names, ["maj7", "m7b5", "m+6", "m", "7", "sus", "dim"]);
    }

    #[test]
    fn dim_is_caught_by_minor_rule() {
        assert_eq!(infer_mode("dim"), Mode::Aeolian);
    }

    #[test]
    fn trigger_scan_fallbacks() {
        assert_eq!(infer_mode(""), Mode::Ionian);
        assert_eq!(infer_mode("add9"), Mode::Ionian);
        assert_eq!(infer_mode("5"), Mode::Ionian);
        assert_eq!(infer_mode("13"), Mode::Ionian);
        assert_eq!(infer_mode("dor"), Mode::Dorian);
        assert_eq!(infer_mode("phryg"), Mode::Phrygian);
        assert_eq!(infer_mode("lyd"), Mode::Lydian);
        assert_eq!(infer_mode("loc"), Mode::Locrian);
        assert_eq!(infer_mode("xyz"), DEFAULT_MODE);
    }

    #[test]
    fn ionian_end_anchor_rejects_trailing_letter() {
        assert!(Mode::Ionian.trigger().is_match(""));
        assert!(Mode::Ionian.trigger().is_match("6"));
        assert!(!Mode::Ionian.trigger().is_match("lyd"));
    }
}
