//! Command line driver.
//!
//! Reads one source file, prints its token stream and, if it parses, the leftmost
//! derivation. Output goes to the supplied writers so the driver can be exercised
//! without spawning a process.

use std::{fs, io::Write, path::PathBuf};

use clap::Parser;

use crate::{
    errors::errors::ErrorKind,
    lexer::{lexer::tokenize, tokens::kinds_line},
    parser::parser::Parser as DerivationParser,
    render_diagnostic,
};

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

pub const EXIT_SUCCESS: u8 = 0;

/// The input was read but rejected by the lexer or the parser.
pub const EXIT_ANALYSIS_FAILED: u8 = 1;

/// The input file does not exist or could not be read as UTF-8 text.
///
/// Exit code 2 is left to clap for usage errors.
pub const EXIT_INPUT_UNAVAILABLE: u8 = 3;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Tokenize and parse a mini program, printing its leftmost derivation
#[derive(Debug, Parser)]
#[command(name = "mini-ll1", author, version)]
pub struct Args {
    /// Source file to analyse
    pub file: PathBuf,

    /// Print the token stream and stop before parsing
    #[arg(long)]
    pub tokens_only: bool,

    /// On a syntax error, also print the derivation steps recorded before it
    #[arg(long)]
    pub partial_trace: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Runs the front end over `args.file`, returning the process exit code.
///
/// Reports go to `out`, diagnostics to `err`.
pub fn run(args: &Args, out: &mut impl Write, err: &mut impl Write) -> std::io::Result<u8> {
    tracing::info!("reading {}", args.file.display());

    let source = match fs::read_to_string(&args.file) {
        Ok(source) => source,
        Err(error) => {
            tracing::warn!("cannot read {}: {}", args.file.display(), error);
            writeln!(err, "Error: cannot read '{}': {}", args.file.display(), error)?;
            return Ok(EXIT_INPUT_UNAVAILABLE);
        }
    };

    let tokens = match tokenize(source.clone()) {
        Ok(tokens) => tokens,
        Err(error) => {
            write!(err, "{}", render_diagnostic(&error, &source, &args.file))?;
            return Ok(EXIT_ANALYSIS_FAILED);
        }
    };

    writeln!(out, "=== Token Stream ===")?;
    writeln!(out, "{}", kinds_line(&tokens))?;

    if args.tokens_only {
        return Ok(EXIT_SUCCESS);
    }

    let mut parser = DerivationParser::new(tokens);
    if let Err(error) = parser.run() {
        write!(err, "{}", render_diagnostic(&error, &source, &args.file))?;

        if args.partial_trace || error.kind() == ErrorKind::Internal {
            writeln!(out)?;
            writeln!(out, "=== Derivation Before Error ===")?;
            write!(out, "{}", parser.derivation())?;
        }

        return Ok(EXIT_ANALYSIS_FAILED);
    }

    writeln!(out)?;
    writeln!(out, "Program parsed successfully.")?;
    writeln!(out)?;
    writeln!(out, "=== Leftmost Derivation ===")?;
    write!(out, "{}", parser.derivation())?;

    Ok(EXIT_SUCCESS)
}
