//! chord-theory - chord analysis and progression explorer
//!
//! Subcommands:
//! - `chord-theory analyze <CHORD>` - Scale, diatonic chart and progressions for one chord
//! - `chord-theory suggest <GENRE>` - Starter chords for a genre
//! - `chord-theory interactive` - Menu-driven session (default)

use anyhow::{Context, Result};
use chord_theory::{report, Analysis, Library, Session};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chord-theory")]
#[command(about = "Derive modes, scales and progressions from chord symbols")]
#[command(version)]
struct Cli {
    /// Progression library TOML file, replacing the built-in one
    #[arg(long, global = true, env = "CHORD_THEORY_LIBRARY")]
    library: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a chord symbol (e.g. Cmaj7, F#m, G/B)
    Analyze {
        /// Chord symbol
        chord: String,

        /// Only list progression categories matching this genre
        #[arg(short, long, default_value = "")]
        genre: String,
    },

    /// Suggest starter chords for a genre
    Suggest {
        /// Genre name or part of one (e.g. jazz, lo-fi)
        genre: String,
    },

    /// Run the interactive menu
    Interactive,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut builder = Library::builder();
    if let Some(path) = cli.library {
        builder = builder.path(path);
    }
    let library = builder.build().context("failed to load progression library")?;

    let mut out = io::stdout().lock();
    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Analyze { chord, genre } => {
            let analysis = Analysis::run(&chord)?;
            report::write_analysis(&mut out, &analysis)?;
            report::write_progressions(&mut out, &analysis, &library.progressions(&genre))?;
        }
        Commands::Suggest { genre } => {
            report::write_suggestions(&mut out, &genre, &library.suggestions(&genre))?;
        }
        Commands::Interactive => {
            Session::new(&library, io::stdin().lock(), out).run()?;
        }
    }

    Ok(())
}
