//! The CLI's error type: wraps every fallible stage (I/O, pattern parsing)
//! behind one enum that knows how to tag itself on stderr and pick the
//! right process exit code, following `dandy-cli::automata::Error`'s
//! `thiserror`-wrapping style.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("could not open {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid pattern: {0}")]
    Pattern(#[from] grepox::regex::ParseError),

    /// Reserved for flag/engine combinations this port intentionally
    /// declines to support. Nothing currently constructs this variant,
    /// but it exists so a future flag addition fails loudly with the
    /// `[NYI]` tag rather than silently doing the wrong thing.
    #[error("not yet implemented: {0}")]
    NotYetImplemented(&'static str),
}

impl CliError {
    /// The egrep-compatible exit code for this error: always `2`
    /// (operational error), per spec.
    pub fn exit_code(&self) -> i32 {
        2
    }

    /// The stderr tag this error should be printed with.
    pub fn tag(&self) -> &'static str {
        match self {
            CliError::NotYetImplemented(_) => "[NYI]",
            _ => "[ERREUR]",
        }
    }
}
