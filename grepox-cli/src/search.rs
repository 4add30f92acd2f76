//! The line-oriented search driver: opens the input, decodes it, and
//! feeds one line at a time to whichever engine was selected, mirroring
//! the synchronous single-engine loop described for the concurrency
//! model (one input source, one engine instance, no parallelism).

use crate::config::{Config, Engine};
use crate::error::CliError;
use grepox::boyer_moore::BoyerMooreMatcher;
use grepox::dfa::Dfa;
use grepox::kmp::KmpMatcher;
use grepox::matcher::Matcher;
use std::fs;
use std::io::Read;

/// The compiled form of whichever engine `-m` selected, built once per
/// invocation and reused across every line (spec.md §4.7's "precompile
/// once, reuse across many inputs").
enum CompiledEngine {
    Kmp(KmpMatcher),
    Boyer(BoyerMooreMatcher),
    Regex(Dfa),
}

impl CompiledEngine {
    fn build(engine: Engine, pattern: &str) -> Result<Self, CliError> {
        Ok(match engine {
            Engine::Kmp => Self::Kmp(KmpMatcher::new(pattern)),
            Engine::Boyer => Self::Boyer(BoyerMooreMatcher::new(pattern)),
            Engine::Regex => {
                let tree = grepox::regex::parse(pattern)?;
                Self::Regex(tree.to_nfa().to_dfa())
            }
        })
    }

    fn search(&self, line: &str) -> grepox::matcher::MatchResult {
        match self {
            CompiledEngine::Kmp(m) => m.search(line),
            CompiledEngine::Boyer(m) => m.search(line),
            CompiledEngine::Regex(m) => m.search(line),
        }
    }
}

/// Reads `config.file` (or stdin, for `-`) to completion and lossily
/// decodes it as UTF-8, replacing malformed sequences with U+FFFD.
fn read_input(config: &Config) -> Result<String, CliError> {
    let bytes = if config.file.as_os_str() == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .map_err(|source| CliError::Io {
                path: config.file.clone(),
                source,
            })?;
        buf
    } else {
        fs::read(&config.file).map_err(|source| CliError::Io {
            path: config.file.clone(),
            source,
        })?
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Runs the search over `config`, writing matching lines to `out`.
/// Returns `true` if at least one line matched (the caller maps this to
/// the egrep-compatible exit code).
pub fn run(config: &Config, out: &mut impl std::io::Write) -> Result<bool, CliError> {
    let text = read_input(config)?;
    tracing::debug!(file = %config.file.display(), bytes = text.len(), "input decoded");

    let pattern = if config.ignore_case {
        config.pattern.to_lowercase()
    } else {
        config.pattern.clone()
    };

    let engine = CompiledEngine::build(config.engine, &pattern)?;
    tracing::debug!(engine = %config.engine, pattern = %pattern, "engine compiled");

    let mut matched_lines = 0usize;
    let mut any_match = false;

    for (idx, raw_line) in text.lines().enumerate() {
        if let Some(max) = config.max_matches {
            if matched_lines >= max {
                break;
            }
        }

        let line = if config.ignore_case {
            raw_line.to_lowercase()
        } else {
            raw_line.to_string()
        };

        let result = engine.search(&line);
        tracing::trace!(line = idx + 1, matches = result.count, "line scanned");

        if result.count > 0 {
            any_match = true;
            matched_lines += 1;
            if config.line_number {
                writeln!(out, "{}:{}", idx + 1, raw_line)
            } else {
                writeln!(out, "{raw_line}")
            }
            .map_err(|source| CliError::Io {
                path: config.file.clone(),
                source,
            })?;
        }
    }

    Ok(any_match)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Engine;

    fn base_config(pattern: &str, file: &str) -> Config {
        Config {
            pattern: pattern.to_string(),
            file: file.into(),
            line_number: false,
            ignore_case: false,
            max_matches: None,
            encoding: "utf-8".to_string(),
            engine: Engine::Regex,
            dry_run: false,
        }
    }

    #[test]
    fn compiled_engine_kmp_matches_literal() {
        let engine = CompiledEngine::build(Engine::Kmp, "abc").unwrap();
        assert_eq!(engine.search("xabcx").count, 1);
    }

    #[test]
    fn compiled_engine_regex_rejects_bad_pattern() {
        assert!(CompiledEngine::build(Engine::Regex, "a(b").is_err());
    }

    #[test]
    fn run_reports_no_match_when_nothing_found() {
        let dir = std::env::temp_dir().join("grepox-test-nomatch.txt");
        std::fs::write(&dir, "hello\nworld\n").unwrap();
        let config = base_config("zzz", dir.to_str().unwrap());
        let mut out = Vec::new();
        let matched = run(&config, &mut out).unwrap();
        assert!(!matched);
        assert!(out.is_empty());
        let _ = std::fs::remove_file(&dir);
    }

    #[test]
    fn run_prefixes_line_numbers_when_requested() {
        let dir = std::env::temp_dir().join("grepox-test-lineno.txt");
        std::fs::write(&dir, "no\nyes abc\nno\n").unwrap();
        let mut config = base_config("abc", dir.to_str().unwrap());
        config.line_number = true;
        let mut out = Vec::new();
        let matched = run(&config, &mut out).unwrap();
        assert!(matched);
        assert_eq!(String::from_utf8(out).unwrap(), "2:yes abc\n");
        let _ = std::fs::remove_file(&dir);
    }

    #[test]
    fn run_stops_after_max_matches() {
        let dir = std::env::temp_dir().join("grepox-test-maxmatches.txt");
        std::fs::write(&dir, "abc\nabc\nabc\n").unwrap();
        let mut config = base_config("abc", dir.to_str().unwrap());
        config.max_matches = Some(2);
        let mut out = Vec::new();
        run(&config, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "abc\nabc\n");
        let _ = std::fs::remove_file(&dir);
    }
}
