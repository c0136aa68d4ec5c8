//! End-to-end runs of the interactive session over scripted input.

use chord_theory::{Library, Session};
use pretty_assertions::assert_eq;
use std::io::Cursor;

fn run_script(library: &Library, script: &str) -> String {
    let mut session = Session::new(library, Cursor::new(script.as_bytes().to_vec()), Vec::new());
    session.run().unwrap();
    String::from_utf8(session.into_output()).unwrap()
}

#[test]
fn chord_first_with_progression_filter() {
    let library = Library::builtin().unwrap();
    let out = run_script(&library, "1\nG/B\nworship\nq\n");

    assert!(out.contains("ANALYSIS: G Ionian\n"), "{out}");
    assert!(out.contains("Slash Bass: /B\n"), "{out}");
    assert!(out.contains("SCALE: G - A - B - C - D - E - F#\n"), "{out}");
    assert!(out.contains("[Worship / Ballad]\n"), "{out}");
    assert!(
        out.contains("  GMaj7 -> D7/F# -> Em7 -> CMaj7/G\n"),
        "{out}"
    );
    assert!(!out.contains("[Pop / Rock]"), "{out}");
}

#[test]
fn genre_first_auto_selects_progressions() {
    let library = Library::builtin().unwrap();
    let out = run_script(&library, "2\nska\nBb\nq\n");

    assert!(out.contains("-> Bb, F, Gm, Eb\n"), "{out}");
    assert!(out.contains("[ Auto-Selected Genre: ska ]\n"), "{out}");
    assert!(out.contains("  BbMaj7 -> F7 -> Gm7 -> EbMaj7\n"), "{out}");
    assert!(!out.contains("Enter Genre for Progressions"), "{out}");
}

#[test]
fn unmatched_genre_falls_back_to_standard_pop() {
    let library = Library::builtin().unwrap();
    let out = run_script(&library, "1\nAm\npolka\nq\n");

    assert!(out.contains("ANALYSIS: A Aeolian\n"), "{out}");
    assert!(out.contains("[Standard Pop]\n"), "{out}");
    assert!(out.contains("  Am7 -> Em7/G -> FMaj7 -> Dm7\n"), "{out}");
}

#[test]
fn scale_failure_is_reported() {
    let library = Library::builtin().unwrap();
    let out = run_script(&library, "1\nCb\nq\n");
    assert!(out.contains("(!) cannot generate a scale for `Cb`"), "{out}");
    assert_eq!(out.matches("Select Option:").count(), 2);
}

#[test]
fn user_library_replaces_builtin() {
    let doc = r#"
        default_chords = ["D"]

        [fallback]
        label = "Everything"
        category = "Loops"

        [[genres]]
        name = "drone"
        chords = ["D5"]

        [[categories]]
        name = "Loops"

        [[categories.templates]]
        name = "Pedal"
        steps = [{ degree = 0 }, { degree = 3, bass = 0 }, { degree = 9 }]
    "#;
    let library = Library::from_toml(doc, "inline").unwrap();
    let out = run_script(&library, "2\ndrone\nD\nq\n");

    assert!(out.contains("Available Flavor Profiles: drone\n"), "{out}");
    assert!(out.contains("-> D5\n"), "{out}");
    assert!(out.contains("[Everything]\n"), "{out}");
    assert!(out.contains("  DMaj7 -> GMaj7/D\n"), "{out}");
}
