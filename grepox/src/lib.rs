//!# grepox
//!
//! `grepox` is a Rust library implementing an egrep-style literal/regex search core: a
//! restricted extended-regular-expression (ERE) parser, a Thompson NFA builder, a
//! subset-construction DFA builder and matcher, and two literal-string scanners
//! (Knuth-Morris-Pratt and Boyer-Moore, bad-character rule only).
//!
//! ## Usage
//!
//! ```rust
//! use grepox::matcher::Matcher;
//! use grepox::regex;
//!
//! let tree = regex::parse("S(a|g|r)+on").unwrap();
//! let nfa = tree.to_nfa();
//! let dfa = nfa.to_dfa();
//! let result = dfa.search("Saon Sgon Sargon Son");
//! assert_eq!(result.positions, vec![0, 5, 10]);
//! assert_eq!(result.count, 3);
//! ```
//!
//! Or using one of the literal scanners directly:
//! ```rust
//! use grepox::matcher::Matcher;
//! use grepox::kmp::KmpMatcher;
//!
//! let m = KmpMatcher::new("abc");
//! let result = m.search("ab_abc_abcabc");
//! assert_eq!(result.positions, vec![3, 7, 10]);
//! ```
//!
//! ## Grammar
//!
//! The accepted regex grammar is a restricted ERE: literal characters, implicit
//! concatenation, `(` `)` for grouping, `|` for alternation and `*`/`+` for Kleene
//! star/plus. There are no escapes, character classes, anchors or counted
//! repetition - see [regex] for the full grammar and error taxonomy.
//!
//! ## Modules
//!
//! * [regex] - the AST (`RegexTree`) and the flat-list PROTECTION-based parser
//! * [nfa] - Thompson's construction: AST -> NFA
//! * [dfa] - subset construction (NFA -> DFA) and the substring-scan matcher
//! * [kmp] - the Knuth-Morris-Pratt literal matcher
//! * [boyer_moore] - the Boyer-Moore (bad-character rule) literal matcher
//! * [matcher] - the shared `Matcher` contract implemented by all three engines

pub mod boyer_moore;
pub mod dfa;
pub mod kmp;
pub mod matcher;
pub mod nfa;
pub mod regex;
