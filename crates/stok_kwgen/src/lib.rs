//! Keyword macro generator.
//!
//! Reads word lists and prints one LaTeX `\newcommand` per word, so that
//! `\kwif` expands to `\texttt{if}` after a `:kw` prefix line. Line
//! normalisation is done with the [`stok`] tokenizer.
//!
//! Logging is off unless `RUST_LOG` is set, e.g. `RUST_LOG=stok_kwgen=debug`.

mod config;
mod error;
mod generator;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::sync::Once;

pub use config::{parse_args, Command, KwgenConfig, DEFAULT_MARKER, DEFAULT_MAX_PREFIX};
pub use error::KwgenError;
pub use generator::{normalize_line, MacroGenerator};

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// Call this once at startup. Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

/// Process every configured file into `out`. Returns the number of macros.
pub fn generate<W: Write>(config: &KwgenConfig, out: &mut W) -> Result<usize, KwgenError> {
    let mut generator = MacroGenerator::new(config);
    for path in &config.files {
        generator.process_file(path, out)?;
    }
    out.flush()?;
    tracing::debug!(
        files = config.files.len(),
        macros = generator.emitted(),
        "generation finished"
    );
    Ok(generator.emitted())
}

/// Run with the configured output: a file if `-o` was given, else stdout.
pub fn run(config: &KwgenConfig) -> Result<usize, KwgenError> {
    match &config.output {
        Some(path) => {
            let file = File::create(path)?;
            generate(config, &mut BufWriter::new(file))
        }
        None => generate(config, &mut BufWriter::new(io::stdout().lock())),
    }
}
