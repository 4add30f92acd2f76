//! The resolved search configuration, and the small `Engine` selector
//! enum the CLI dispatches on - not part of the algorithmic core, but
//! required to implement the `-m {kmp,boyer,regex}` flag. `Engine`
//! mirrors the `clap::ValueEnum` derive pattern used by
//! `dandy-cli::automata::AutomataType`.

use crate::cli::Cli;
use clap::ValueEnum;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Engine {
    Kmp,
    Boyer,
    #[default]
    Regex,
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Engine::Kmp => "kmp",
            Engine::Boyer => "boyer",
            Engine::Regex => "regex",
        };
        write!(f, "{name}")
    }
}

/// The fully-resolved configuration for one search invocation, printed
/// verbatim by `--dry-run`.
#[derive(Debug, Clone)]
pub struct Config {
    pub pattern: String,
    pub file: PathBuf,
    pub line_number: bool,
    pub ignore_case: bool,
    pub max_matches: Option<usize>,
    pub encoding: String,
    pub engine: Engine,
    pub dry_run: bool,
}

impl Config {
    pub fn dry_run_requested(&self) -> bool {
        self.dry_run
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            pattern: cli.pattern,
            file: cli.file,
            line_number: cli.line_number,
            ignore_case: cli.ignore_case,
            max_matches: cli.max_matches,
            encoding: cli.encoding,
            engine: cli.engine,
            dry_run: cli.dry_run,
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "pattern:      {}", self.pattern)?;
        writeln!(f, "file:         {}", self.file.display())?;
        writeln!(f, "engine:       {}", self.engine)?;
        writeln!(f, "line_number:  {}", self.line_number)?;
        writeln!(f, "ignore_case:  {}", self.ignore_case)?;
        writeln!(
            f,
            "max_matches:  {}",
            self.max_matches
                .map(|n| n.to_string())
                .unwrap_or_else(|| "none".to_string())
        )?;
        write!(f, "encoding:     {}", self.encoding)
    }
}
