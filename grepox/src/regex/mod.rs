//! # Regular expressions
//! `grepox` implements a restricted extended regular expression (ERE) grammar,
//! parsed into a [RegexTree] and from there compiled into an [Nfa](crate::nfa::Nfa)
//! via Thompson's construction.
//!
//! ## Syntax
//! Patterns are UTF-8 text. Five characters are reserved: `(`, `)`, `|`, `*`
//! and `+`. Every other character (including whitespace and digits) is a
//! literal. Sequencing is implicit concatenation - there is no operator
//! character for it. Parenthesis `(`, `)` is used for grouping, `|` denotes
//! alternation and `*`/`+` are Kleene star/plus (zero-or-more / one-or-more).
//! There are no escapes, character classes, anchors, `.` (any-char) or
//! counted repetition.
//!
//! Precedence, highest to lowest: grouping, postfix (`*`, `+`), concatenation,
//! alternation (`|`).
//!
//! Examples:
//! * `(ab)+` matches `ab`, `abab`, `ababab`, ...
//! * `a*b` matches `b`, `ab`, `aab`, ...
//! * `a|bc` matches `a` or `bc`
//!
//! ```
//! use grepox::regex;
//!
//! let tree = regex::parse("(ab)+").unwrap();
//! let nfa = tree.to_nfa();
//! assert!(nfa.accepts("ab"));
//! assert!(nfa.accepts("ababab"));
//! assert!(!nfa.accepts("a"));
//! ```

pub mod parse;

use crate::nfa::Nfa;
pub use parse::{parse, ParseError};

/// The regular expression abstract syntax tree.
///
/// `Protection` is a transient grouping marker introduced by the parser for
/// parenthesized (and, by extension, already-reduced) subexpressions. It is
/// stripped before the tree is handed out of [parse] - a tree returned by
/// [parse] never contains a `Protection` node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegexTree {
    Literal(char),
    Concat(Box<RegexTree>, Box<RegexTree>),
    Altern(Box<RegexTree>, Box<RegexTree>),
    Star(Box<RegexTree>),
    Plus(Box<RegexTree>),
    Protection(Box<RegexTree>),
}

impl RegexTree {
    /// `true` if this node, or any node below it, is a `Protection` marker.
    /// A tree returned by [parse] always satisfies `!tree.has_protection()`.
    pub fn has_protection(&self) -> bool {
        match self {
            RegexTree::Literal(_) => false,
            RegexTree::Protection(_) => true,
            RegexTree::Concat(l, r) | RegexTree::Altern(l, r) => {
                l.has_protection() || r.has_protection()
            }
            RegexTree::Star(x) | RegexTree::Plus(x) => x.has_protection(),
        }
    }

    /// Recursively strips every `Protection` node from the tree. Idempotent:
    /// calling this on an already-stripped tree returns an equal tree.
    pub fn strip_protection(self) -> RegexTree {
        match self {
            RegexTree::Literal(c) => RegexTree::Literal(c),
            RegexTree::Protection(inner) => inner.strip_protection(),
            RegexTree::Concat(l, r) => RegexTree::Concat(
                Box::new(l.strip_protection()),
                Box::new(r.strip_protection()),
            ),
            RegexTree::Altern(l, r) => RegexTree::Altern(
                Box::new(l.strip_protection()),
                Box::new(r.strip_protection()),
            ),
            RegexTree::Star(x) => RegexTree::Star(Box::new(x.strip_protection())),
            RegexTree::Plus(x) => RegexTree::Plus(Box::new(x.strip_protection())),
        }
    }

    /// Compiles this tree into a NFA via Thompson's construction. Consumes
    /// the tree, mirroring `dandy::regex::Regex::to_nfa`.
    pub fn to_nfa(self) -> Nfa {
        crate::nfa::build::thompson(self)
    }
}
