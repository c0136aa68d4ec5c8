//! Exhaustive checks over every spelled root and every mode.

use chord_theory::{
    build_chord, note_names, parse_chord, DiatonicMap, Mode, Scale, Spelling, MODES,
};
use lazy_static::lazy_static;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Every root the parser can produce that lies in a pitch pool.
const ROOTS: [&str; 17] = [
    "C", "C#", "Db", "D", "D#", "Eb", "E", "F", "F#", "Gb", "G", "G#", "Ab", "A", "A#", "Bb",
    "B",
];

#[derive(Debug, Clone)]
struct Case {
    root: &'static str,
    mode: Mode,
}

lazy_static! {
    static ref CASES: Vec<Case> = ROOTS
        .iter()
        .flat_map(|&root| MODES.iter().map(move |&mode| Case { root, mode }))
        .collect();
}

fn check_scale(case: &Case) -> Result<(), String> {
    let scale = Scale::resolve(case.root, case.mode)
        .map_err(|e| format!("{} {}: {e}", case.root, case.mode))?;

    if scale.len() != 7 {
        return Err(format!("{} {}: {} notes", case.root, case.mode, scale.len()));
    }
    if scale.tonic().name() != case.root {
        return Err(format!(
            "{} {}: tonic spelled {}",
            case.root,
            case.mode,
            scale.tonic()
        ));
    }
    let distinct: HashSet<u8> = scale.notes().iter().map(|n| n.pitch_class()).collect();
    if distinct.len() != 7 {
        return Err(format!("{} {}: repeated pitch class in {scale}", case.root, case.mode));
    }

    let spelling = scale.tonic().spelling();
    let map = DiatonicMap::build(&scale, case.mode);
    let mixed = scale
        .notes()
        .iter()
        .chain(map.entries().iter().flat_map(|e| e.chord.iter()))
        .any(|n| n.spelling() != spelling);
    if mixed {
        return Err(format!("{} {}: mixed spelling", case.root, case.mode));
    }
    Ok(())
}

#[test]
fn every_root_and_mode_yields_a_consistent_scale() {
    let failures = Arc::new(Mutex::new(Vec::<String>::new()));

    CASES.par_iter().for_each(|case| {
        if let Err(msg) = check_scale(case) {
            failures.lock().unwrap().push(msg);
        }
    });

    let mut failures = Arc::try_unwrap(failures).unwrap().into_inner().unwrap();
    if !failures.is_empty() {
        failures.sort();
        panic!(
            "{} of {} scale checks failed:\n{}",
            failures.len(),
            CASES.len(),
            failures.join("\n")
        );
    }
}

#[test]
fn f_scale_and_chart_use_only_flats() {
    let scale = Scale::resolve("F", Mode::Ionian).unwrap();
    let map = DiatonicMap::build(&scale, Mode::Ionian);
    for note in scale.notes().iter().chain(map.entries().iter().flat_map(|e| e.chord.iter())) {
        assert_eq!(note.spelling(), Spelling::Flat, "{note}");
        assert!(!note.name().contains('#'), "{note}");
    }
}

#[test]
fn parsed_roots_resolve_for_every_letter_and_accidental() {
    for letter in ["A", "B", "C", "D", "E", "F", "G"] {
        for accidental in ["", "#", "b"] {
            let symbol = format!("{letter}{accidental}m7");
            let parsed = parse_chord(&symbol).unwrap();
            let resolves = Scale::resolve(&parsed.root, parsed.mode).is_ok();
            let enharmonic_gap = matches!(parsed.root.as_str(), "Cb" | "Fb" | "E#" | "B#");
            assert_eq!(resolves, !enharmonic_gap, "{symbol}");
        }
    }
}

#[test]
fn documented_chord_spellings() {
    assert_eq!(note_names(&build_chord("C", "Maj7", None).unwrap()), ["C", "E", "G", "B"]);
    assert_eq!(
        note_names(&build_chord("C", "Maj7", Some("E")).unwrap()),
        ["E", "C", "G", "B"]
    );
    assert_eq!(note_names(&build_chord("C", "unknownTag", None).unwrap()), ["C", "E", "G"]);
}
