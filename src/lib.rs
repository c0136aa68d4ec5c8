//! # chord_theory
//!
//! Chord-symbol analysis: infer a mode from a chord such as `Cmaj7`, `F#m`
//! or `G/B`, spell its scale and diatonic chord chart, and render genre
//! progression templates against that scale.
//!
//! ## Example
//! ```rust
//! use chord_theory::{Analysis, Library};
//!
//! fn run() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1) Analyze a chord symbol
//!     let analysis = Analysis::run("Dm7")?;
//!     println!("{} {}: {}", analysis.chord.root, analysis.chord.mode, analysis.scale);
//!
//!     // 2) Print the diatonic chart
//!     for entry in analysis.diatonic.entries() {
//!         println!("{} {}", entry.degree + 1, entry.symbol());
//!     }
//!
//!     // 3) Render progressions for a genre
//!     let library = Library::builtin()?;
//!     for category in library.progressions("jazz") {
//!         for progression in analysis.render(&category) {
//!             println!("{}: {progression}", progression.name);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! # run().unwrap();
//! ```
//!
//! Spelling is consistent: a scale and every chord in its chart use one
//! pool of names, all sharps or all flats, chosen from the root.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rust_2018_idioms)]
#![deny(clippy::all)]

/// Single-chord analysis pipeline.
pub use analysis::{Analysis, AnalysisError};

/// Diatonic chord chart.
pub use diatonic::{DiatonicEntry, DiatonicMap};

/// Genre suggestions and progression templates.
pub use library::{CategoryMatch, Library, LibraryBuilder, LibraryError};

/// Mode table and mode inference.
pub use mode::{infer_mode, Mode, MODES, MODE_RULES};

/// Chord-symbol parser.
pub use parser::{parse_chord, ParseError, ParsedChord};

/// Enharmonic spelling pools.
pub use pitch::{pool_for, resolve_pool, Note, PoolResolution, Spelling};

/// Progression templates and rendering.
pub use progression::{
    render_template, ProgressionCategory, ProgressionStep, ProgressionTemplate,
    RenderedProgression,
};

/// Chord qualities and the chord builder.
pub use quality::{build_chord, note_names, spell_chord, ChordError, ChordQuality, UnknownQuality};

/// Scale resolution.
pub use scale::{Scale, ScaleError};

/// Interactive read-print loop.
pub use session::Session;

/// Single-chord analysis module.
pub mod analysis;

/// Diatonic chart module.
pub mod diatonic;

/// Library loading module.
pub mod library;

/// Mode module.
pub mod mode;

/// Parser module.
pub mod parser;

/// Pitch spelling module.
pub mod pitch;

/// Progression module.
pub mod progression;

/// Chord quality module.
pub mod quality;

/// Report formatting module.
pub mod report;

/// Scale module.
pub mod scale;

/// Interactive session module.
pub mod session;
