//! Interactive Session
//!
//! Menu-driven loop: pick a chord or a genre, print the analysis and the
//! matching progressions, repeat until `q` or end of input.

use crate::analysis::Analysis;
use crate::library::Library;
use crate::report;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// A read-print loop over any line source and sink.
pub struct Session<'a, R, W> {
    library: &'a Library,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    /// Create a session reading answers from `input` and printing to `output`.
    pub fn new(library: &'a Library, input: R, output: W) -> Self {
        Session {
            library,
            input,
            output,
        }
    }

    /// Consume the session, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user quits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "--- Chord Theory Explorer ---")?;
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "{}", "=".repeat(60))?;
            writeln!(self.output, "Start by:")?;
            writeln!(self.output, "  [1] Inputting a specific CHORD (e.g., Cmaj7, F#m)")?;
            writeln!(self.output, "  [2] Inputting a GENRE to get chord suggestions")?;
            writeln!(self.output, "  [q] Quit")?;

            let Some(choice) = self.prompt("\nSelect Option: ")? else {
                break;
            };
            let keep_going = match choice.to_lowercase().as_str() {
                "q" => false,
                "2" => self.genre_first()?,
                _ => self.chord_first()?,
            };
            if !keep_going {
                break;
            }
        }
        debug!("session ended");
        Ok(())
    }

    /// Returns `false` when input ended mid-request.
    fn chord_first(&mut self) -> io::Result<bool> {
        let Some(chord) = self.prompt("\nEnter Chord (e.g., F, Cmaj7, G/B): ")? else {
            return Ok(false);
        };
        self.analyze(&chord, None)
    }

    fn genre_first(&mut self) -> io::Result<bool> {
        let profiles: Vec<&str> = self.library.genres().iter().map(|g| g.name.as_str()).collect();
        writeln!(self.output)?;
        writeln!(self.output, "Available Flavor Profiles: {}", profiles.join(", "))?;
        let Some(genre) = self.prompt("Enter Genre: ")? else {
            return Ok(false);
        };
        let suggestions = self.library.suggestions(&genre);
        report::write_suggestions(&mut self.output, &genre, &suggestions)?;

        let Some(chord) = self.prompt("\nNow, enter one of these chords (or any other): ")? else {
            return Ok(false);
        };
        self.analyze(&chord, Some(&genre))
    }

    fn analyze(&mut self, chord: &str, genre: Option<&str>) -> io::Result<bool> {
        if chord.is_empty() || chord.eq_ignore_ascii_case("q") {
            return Ok(true);
        }

        let analysis = match Analysis::run(chord) {
            Ok(analysis) => analysis,
            Err(e) => {
                writeln!(self.output, "(!) {e}")?;
                return Ok(true);
            }
        };
        report::write_analysis(&mut self.output, &analysis)?;

        let query = match genre {
            Some(genre) => {
                writeln!(self.output)?;
                writeln!(self.output, "[ Auto-Selected Genre: {genre} ]")?;
                genre.to_string()
            }
            None => {
                writeln!(self.output, "{}", "-".repeat(50))?;
                match self.prompt("Enter Genre for Progressions (Press Enter for All): ")? {
                    Some(query) => query,
                    None => return Ok(false),
                }
            }
        };
        let categories = self.library.progressions(&query);
        report::write_progressions(&mut self.output, &analysis, &categories)?;
        Ok(true)
    }

    /// Print `text`, read one trimmed line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
