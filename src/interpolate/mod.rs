//! Placeholder interpolation pipeline
//!
//! Three steps run in strict sequence: the scanner extracts `{{ ... }}`
//! markers into a variable set, the resolver fills each variable from the
//! environment under a primary/alternative prefix scheme, and the
//! substitution engine rewrites the content. The pipeline either completes
//! or fails as a whole; partial interpolation is never produced.

pub mod resolver;
pub mod scanner;
pub mod substitute;

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::env::EnvLookup;
use crate::error::Error;

/// Result of a successful interpolation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The content contained no markers; the caller should leave the
    /// original untouched.
    NoMarkers,
    /// The fully interpolated content, ready to be written back.
    Interpolated(String),
}

/// Run the full pipeline over `content`.
///
/// Scans for markers, short-circuits with [`Outcome::NoMarkers`] when none
/// are found, resolves every variable through `env` (primary prefix first,
/// alternative second), and substitutes the resolved values. Any
/// unresolvable variable fails the whole run before any substitution
/// happens.
pub fn run(
    content: &str,
    env: &dyn EnvLookup,
    primary_prefix: &str,
    alternative_prefix: &str,
) -> Result<Outcome, Error> {
    let mut vars = scanner::scan(content);

    if vars.is_empty() {
        debug!("no markers found, nothing to interpolate");
        return Ok(Outcome::NoMarkers);
    }

    debug!(count = vars.len(), "resolving variables");
    resolver::resolve(&mut vars, env, primary_prefix, alternative_prefix)?;

    Ok(Outcome::Interpolated(substitute::substitute(content, &vars)))
}

/// Interpolate the file at `path` in place.
///
/// Reads the file, runs the pipeline, and writes the result back only when
/// markers were found and every one of them resolved. On the no-marker
/// outcome or on any failure the file is left untouched.
pub fn run_file(
    path: &Path,
    env: &dyn EnvLookup,
    primary_prefix: &str,
    alternative_prefix: &str,
) -> Result<Outcome, Error> {
    let content = fs::read_to_string(path)?;

    match run(&content, env, primary_prefix, alternative_prefix)? {
        Outcome::NoMarkers => Ok(Outcome::NoMarkers),
        Outcome::Interpolated(output) => {
            fs::write(path, &output)?;
            Ok(Outcome::Interpolated(output))
        }
    }
}
