//! Generator configuration and command-line parsing.

use std::path::PathBuf;

use crate::KwgenError;

/// Default byte that introduces a prefix line.
pub const DEFAULT_MARKER: u8 = b':';

/// Default prefix capacity: a 256-byte buffer minus its terminator.
pub const DEFAULT_MAX_PREFIX: usize = 255;

/// Settings for one generator run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KwgenConfig {
    /// Input word lists, processed in order.
    pub files: Vec<PathBuf>,
    /// Lines starting with this byte set the macro prefix.
    pub marker: u8,
    /// Longer prefixes are truncated to this many bytes.
    pub max_prefix: usize,
    /// Write here instead of stdout.
    pub output: Option<PathBuf>,
}

impl Default for KwgenConfig {
    fn default() -> Self {
        KwgenConfig {
            files: Vec::new(),
            marker: DEFAULT_MARKER,
            max_prefix: DEFAULT_MAX_PREFIX,
            output: None,
        }
    }
}

/// What the command line asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Run(KwgenConfig),
    Help,
}

/// Parse arguments (without the program name).
///
/// Options may appear anywhere; everything not starting with `-` is an input
/// file. `-o` takes the following argument as the output path.
pub fn parse_args(args: &[String]) -> Result<Command, KwgenError> {
    let mut config = KwgenConfig::default();
    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        if arg == "-h" || arg == "--help" {
            return Ok(Command::Help);
        } else if arg == "-o" {
            let Some(path) = args.get(i + 1) else {
                return Err(KwgenError::usage("missing path after '-o'"));
            };
            config.output = Some(PathBuf::from(path));
            i += 1;
        } else if let Some(marker) = arg.strip_prefix("--marker=") {
            config.marker = parse_marker(marker)?;
        } else if let Some(max) = arg.strip_prefix("--max-prefix=") {
            config.max_prefix = max
                .parse()
                .map_err(|_| KwgenError::usage(format!("invalid prefix length '{max}'")))?;
        } else if arg.starts_with('-') {
            return Err(KwgenError::usage(format!("unknown option '{arg}'")));
        } else {
            config.files.push(PathBuf::from(arg));
        }
        i += 1;
    }
    Ok(Command::Run(config))
}

/// The marker must be exactly one byte.
fn parse_marker(marker: &str) -> Result<u8, KwgenError> {
    match marker.as_bytes() {
        [byte] => Ok(*byte),
        _ => Err(KwgenError::usage(format!(
            "marker must be a single byte, got '{marker}'"
        ))),
    }
}

#[cfg(test)]
mod tests;
