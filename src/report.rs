//! Text output for analyses, progression listings and genre suggestions.

use crate::analysis::Analysis;
use crate::library::CategoryMatch;
use crate::quality::note_names;
use std::io::{self, Write};

const BANNER_WIDTH: usize = 60;
const RULE_WIDTH: usize = 50;

/// Banner, scale line and the diatonic degree table.
pub fn write_analysis<W: Write>(out: &mut W, analysis: &Analysis) -> io::Result<()> {
    let banner = "*".repeat(BANNER_WIDTH);
    writeln!(out)?;
    writeln!(out, "{banner}")?;
    writeln!(out, "ANALYSIS: {} {}", analysis.chord.root, analysis.chord.mode)?;
    if let Some(bass) = &analysis.chord.bass {
        writeln!(out, "Slash Bass: /{bass}")?;
    }
    writeln!(out, "SCALE: {}", analysis.scale)?;
    writeln!(out, "{banner}")?;

    writeln!(out, "{:<5} {:<20} Notes", "Deg", "Diatonic Context")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for entry in analysis.diatonic.entries() {
        writeln!(
            out,
            "{:<5} {:<20} {}",
            entry.degree + 1,
            entry.symbol(),
            note_names(&entry.chord).join(", ")
        )?;
    }
    Ok(())
}

/// Each matched category with its templates rendered against `analysis`.
pub fn write_progressions<W: Write>(
    out: &mut W,
    analysis: &Analysis,
    categories: &[CategoryMatch<'_>],
) -> io::Result<()> {
    if categories.is_empty() {
        writeln!(
            out,
            "No specific progressions found, but you can build your own using the Diatonic Context above!"
        )?;
        return Ok(());
    }
    for category in categories {
        writeln!(out)?;
        writeln!(out, "[{}]", category.name)?;
        for progression in analysis.render(category) {
            writeln!(out, "> {}", progression.name)?;
            writeln!(out, "  {progression}")?;
        }
    }
    Ok(())
}

/// Starter chords offered for `genre`.
pub fn write_suggestions<W: Write>(out: &mut W, genre: &str, chords: &[&str]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Recommended Starter Chords for '{genre}':")?;
    writeln!(out, "-> {}", chords.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::Library;

    fn text(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn analysis_table() {
        let analysis = Analysis::run("Cmaj7/E").unwrap();
        let out = text(|w| write_analysis(w, &analysis));
        assert!(out.contains("ANALYSIS: C Ionian\n"), "{out}");
        assert!(out.contains("Slash Bass: /E\n"), "{out}");
        assert!(out.contains("SCALE: C - D - E - F - G - A - B\n"), "{out}");
        assert!(out.contains("5     G7                   G, B, D, F\n"), "{out}");
    }

    #[test]
    fn progression_listing() {
        let library = Library::builtin().unwrap();
        let analysis = Analysis::run("C").unwrap();
        let out = text(|w| write_progressions(w, &analysis, &library.progressions("ska")));
        assert_eq!(
            out,
            "\n[Ska / Reggae]\n\
             > Ska Punk (I - V - vi - IV)\n  CMaj7 -> G7 -> Am7 -> FMaj7\n\
             > Two Chord Jam (I - ii)\n  CMaj7 -> Dm7\n"
        );
    }

    #[test]
    fn empty_listing_message() {
        let analysis = Analysis::run("C").unwrap();
        let out = text(|w| write_progressions(w, &analysis, &[]));
        assert!(out.starts_with("No specific progressions found"));
    }

    #[test]
    fn suggestion_line() {
        let out = text(|w| write_suggestions(w, "pop", &["C", "G", "Am", "F"]));
        assert_eq!(out, "\nRecommended Starter Chords for 'pop':\n-> C, G, Am, F\n");
    }
}
