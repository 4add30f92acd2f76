//! Command-line argument definitions (`clap` derive API), mirroring the
//! flags enumerated in the external interface: positional `pattern` and
//! `file`, plus `-n`/`-i`/`--max-matches`/`--encoding`/`-m`/`--dry-run`.

use crate::config::Engine;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "grepox", about = "egrep-style line search (KMP, Boyer-Moore, regex/DFA)")]
pub struct Cli {
    /// The regex or literal pattern to search for.
    pub pattern: String,

    /// Path to search, or `-` to read standard input.
    pub file: PathBuf,

    /// Prefix each output line with its 1-based line number.
    #[arg(short = 'n', long = "line-number")]
    pub line_number: bool,

    /// Lowercase both pattern and line before matching.
    #[arg(short = 'i', long = "ignore-case")]
    pub ignore_case: bool,

    /// Stop after this many matched lines.
    #[arg(long = "max-matches", value_name = "N")]
    pub max_matches: Option<usize>,

    /// Input text encoding. Only `utf-8` (lossy) is supported.
    #[arg(long = "encoding", default_value = "utf-8")]
    pub encoding: String,

    /// Engine used for matching.
    #[arg(short = 'm', long = "mode", value_enum, default_value_t = Engine::Regex)]
    pub engine: Engine,

    /// Print the resolved configuration and exit without searching.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}
