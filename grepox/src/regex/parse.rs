//! The flat-list, PROTECTION-based regex parser (see the module docs in
//! [super] for the accepted grammar).
//!
//! Rather than a grammar table, the pattern is first tokenized into a flat
//! list of elements (one per character/metacharacter), and then reduced by
//! five passes applied in a fixed order - parens, star, plus, concat,
//! altern - so that postfix binds tighter than concatenation, which binds
//! tighter than alternation. Tokenization itself is done with `nom`
//! combinators, following `dandy`'s `parser::regex` module.

use crate::regex::RegexTree;
use nom::bytes::complete::take;
use nom::character::complete::one_of;
use nom::combinator::{all_consuming, map, verify};
use nom::multi::many0;
use nom::Finish;
use thiserror::Error;

/// Everything that can go wrong while parsing a pattern into a [RegexTree].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("mismatched parenthesis in pattern")]
    MismatchedParen,
    #[error("'{0}' has no preceding element to repeat")]
    DanglingPostfix(char),
    #[error("'|' is missing a left or right operand")]
    DanglingAltern,
    #[error("pattern is empty")]
    EmptyPattern,
    #[error("pattern did not reduce to a single expression ({0} residual trees)")]
    ResidualTrees(usize),
}

/// One element of the flat, pre-reduction token list.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Elem {
    Operand(RegexTree),
    LParen,
    RParen,
    Pipe,
    Star,
    Plus,
}

const RESERVED: [char; 5] = ['(', ')', '|', '*', '+'];

fn is_reserved(c: char) -> bool {
    RESERVED.contains(&c)
}

fn token(input: &str) -> nom::IResult<&str, Elem> {
    nom::branch::alt((
        map(nom::character::complete::char('('), |_| Elem::LParen),
        map(nom::character::complete::char(')'), |_| Elem::RParen),
        map(nom::character::complete::char('|'), |_| Elem::Pipe),
        map(one_of("*+"), |c| if c == '*' { Elem::Star } else { Elem::Plus }),
        literal,
    ))(input)
}

fn literal(input: &str) -> nom::IResult<&str, Elem> {
    map(
        verify(take(1usize), |s: &str| {
            !is_reserved(s.chars().next().expect("take(1) yields one char"))
        }),
        |s: &str| Elem::Operand(RegexTree::Literal(s.chars().next().unwrap())),
    )(input)
}

fn tokenize(input: &str) -> Result<Vec<Elem>, ParseError> {
    all_consuming(many0(token))(input)
        .finish()
        .map(|(_, elems)| elems)
        // The only way `token` can fail on non-empty input of arbitrary
        // characters is if it can't happen - every char is either a
        // metacharacter or a literal - so a parse failure here only occurs
        // on truly malformed UTF-8 slicing, which `&str` already rules out.
        .map_err(|_: nom::error::Error<&str>| ParseError::ResidualTrees(0))
}

/// Parses `pattern` into a [RegexTree]. The returned tree is always free of
/// `Protection` nodes.
///
/// Whitespace is never trimmed: every character other than the five
/// reserved ones is a literal, including spaces and tabs, so `" "` and
/// `" a"` are valid one- and two-element patterns, not malformed input.
pub fn parse(pattern: &str) -> Result<RegexTree, ParseError> {
    if pattern.is_empty() {
        return Err(ParseError::EmptyPattern);
    }
    let elems = tokenize(pattern)?;
    let tree = reduce(elems)?;
    Ok(tree.strip_protection())
}

/// Runs the five reduction passes, in order, over a flat token list and
/// returns the single resulting tree (still possibly containing
/// `Protection` nodes from grouping).
fn reduce(elems: Vec<Elem>) -> Result<RegexTree, ParseError> {
    let elems = reduce_parens(elems)?;
    let elems = reduce_postfix(elems, Elem::Star, RegexTree::Star)?;
    let elems = reduce_postfix(elems, Elem::Plus, RegexTree::Plus)?;
    let elems = reduce_concat(elems);
    let tree = reduce_altern(elems)?;
    Ok(tree)
}

/// Repeatedly finds the leftmost `)`, matches it against the nearest
/// unmatched `(` to its left via a balance scan, and replaces the enclosed
/// slice with a single `Protection` node wrapping its recursive reduction.
fn reduce_parens(mut elems: Vec<Elem>) -> Result<Vec<Elem>, ParseError> {
    loop {
        let Some(close) = elems.iter().position(|e| *e == Elem::RParen) else {
            break;
        };

        let mut balance = 0usize;
        let mut open = None;
        for i in (0..close).rev() {
            match elems[i] {
                Elem::RParen => balance += 1,
                Elem::LParen if balance == 0 => {
                    open = Some(i);
                    break;
                }
                Elem::LParen => balance -= 1,
                _ => {}
            }
        }
        let Some(open) = open else {
            return Err(ParseError::MismatchedParen);
        };

        let content: Vec<Elem> = elems.drain(open + 1..close).collect();
        // Remove the now-adjacent '(' and ')' themselves.
        elems.remove(open); // '('
        elems.remove(open); // ')' (shifted into open's place)

        let inner = reduce(content)?;
        elems.insert(open, Elem::Operand(RegexTree::Protection(Box::new(inner))));
    }
    // Any remaining LParen here is unmatched (no corresponding ')').
    if elems.iter().any(|e| *e == Elem::LParen) {
        return Err(ParseError::MismatchedParen);
    }
    Ok(elems)
}

/// Reduces a unary postfix operator (`*` or `+`) in a single left-to-right
/// pass: each occurrence pops its immediate left neighbor as its operand.
fn reduce_postfix(
    elems: Vec<Elem>,
    op: Elem,
    build: fn(Box<RegexTree>) -> RegexTree,
) -> Result<Vec<Elem>, ParseError> {
    let marker = match op {
        Elem::Star => '*',
        Elem::Plus => '+',
        _ => unreachable!("reduce_postfix is only called with Star/Plus"),
    };
    let mut out: Vec<Elem> = Vec::with_capacity(elems.len());
    for elem in elems {
        if elem == op {
            match out.pop() {
                Some(Elem::Operand(operand)) => {
                    out.push(Elem::Operand(build(Box::new(operand))));
                }
                _ => return Err(ParseError::DanglingPostfix(marker)),
            }
        } else {
            out.push(elem);
        }
    }
    Ok(out)
}

/// Folds adjacent operand pairs (with no `|` between them) into
/// left-associative `Concat` nodes, in a single left-to-right pass.
fn reduce_concat(elems: Vec<Elem>) -> Vec<Elem> {
    let mut out: Vec<Elem> = Vec::with_capacity(elems.len());
    for elem in elems {
        if let Elem::Operand(rhs) = elem {
            if let Some(Elem::Operand(_)) = out.last() {
                let Some(Elem::Operand(lhs)) = out.pop() else {
                    unreachable!()
                };
                out.push(Elem::Operand(RegexTree::Concat(
                    Box::new(lhs),
                    Box::new(rhs),
                )));
                continue;
            }
            out.push(Elem::Operand(rhs));
        } else {
            out.push(elem);
        }
    }
    out
}

/// Folds `operand (| operand)*` into a left-associative `Altern` chain. By
/// this point `elems` should strictly alternate `Operand`/`Pipe` - anything
/// else surviving the earlier passes is a sign the list never collapsed to
/// one expression.
fn reduce_altern(elems: Vec<Elem>) -> Result<RegexTree, ParseError> {
    let mut iter = elems.into_iter();
    let mut acc = match iter.next() {
        Some(Elem::Operand(tree)) => tree,
        Some(Elem::Pipe) => return Err(ParseError::DanglingAltern),
        Some(_) => return Err(ParseError::ResidualTrees(1)),
        None => return Err(ParseError::ResidualTrees(0)),
    };

    loop {
        match iter.next() {
            None => break,
            Some(Elem::Pipe) => match iter.next() {
                Some(Elem::Operand(rhs)) => {
                    acc = RegexTree::Altern(Box::new(acc), Box::new(rhs));
                }
                Some(_) | None => return Err(ParseError::DanglingAltern),
            },
            Some(_) => return Err(ParseError::ResidualTrees(iter.count() + 1)),
        }
    }

    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regex::RegexTree::*;

    #[test]
    fn parses_single_literal() {
        assert_eq!(parse("a").unwrap(), Literal('a'));
    }

    #[test]
    fn parses_concat() {
        assert_eq!(
            parse("ab").unwrap(),
            Concat(Box::new(Literal('a')), Box::new(Literal('b')))
        );
    }

    #[test]
    fn parses_altern() {
        assert_eq!(
            parse("a|b").unwrap(),
            Altern(Box::new(Literal('a')), Box::new(Literal('b')))
        );
    }

    #[test]
    fn parses_star_and_plus() {
        assert_eq!(parse("a*").unwrap(), Star(Box::new(Literal('a'))));
        assert_eq!(parse("a+").unwrap(), Plus(Box::new(Literal('a'))));
    }

    #[test]
    fn parses_grouping() {
        let tree = parse("(ab)+").unwrap();
        assert!(!tree.has_protection());
        assert_eq!(
            tree,
            Plus(Box::new(Concat(Box::new(Literal('a')), Box::new(Literal('b')))))
        );
    }

    #[test]
    fn precedence_postfix_over_concat_over_altern() {
        // a b* | c  ==  (a . (b*)) | c
        let tree = parse("ab*|c").unwrap();
        let expected = Altern(
            Box::new(Concat(
                Box::new(Literal('a')),
                Box::new(Star(Box::new(Literal('b')))),
            )),
            Box::new(Literal('c')),
        );
        assert_eq!(tree, expected);
    }

    #[test]
    fn mismatched_paren_is_an_error() {
        assert_eq!(parse("a(b").unwrap_err(), ParseError::MismatchedParen);
        assert_eq!(parse("a)b").unwrap_err(), ParseError::MismatchedParen);
    }

    #[test]
    fn dangling_postfix_is_an_error() {
        assert_eq!(parse("*a").unwrap_err(), ParseError::DanglingPostfix('*'));
        assert_eq!(parse("+a").unwrap_err(), ParseError::DanglingPostfix('+'));
    }

    #[test]
    fn dangling_altern_is_an_error() {
        assert_eq!(parse("|a").unwrap_err(), ParseError::DanglingAltern);
        assert_eq!(parse("a|").unwrap_err(), ParseError::DanglingAltern);
        assert_eq!(parse("a||b").unwrap_err(), ParseError::DanglingAltern);
    }

    #[test]
    fn empty_pattern_is_an_error() {
        assert_eq!(parse("").unwrap_err(), ParseError::EmptyPattern);
    }

    #[test]
    fn whitespace_and_digits_are_literals() {
        let tree = parse("a 1").unwrap();
        assert_eq!(
            tree,
            Concat(
                Box::new(Concat(Box::new(Literal('a')), Box::new(Literal(' ')))),
                Box::new(Literal('1'))
            )
        );
    }

    #[test]
    fn whitespace_only_pattern_is_a_literal() {
        assert_eq!(parse(" ").unwrap(), Literal(' '));
    }

    #[test]
    fn leading_and_trailing_whitespace_is_preserved_as_literals() {
        let tree = parse(" a ").unwrap();
        assert_eq!(
            tree,
            Concat(
                Box::new(Concat(Box::new(Literal(' ')), Box::new(Literal('a')))),
                Box::new(Literal(' '))
            )
        );
    }

    #[test]
    fn protection_stripping_is_idempotent() {
        let tree = parse("(a|b)*c").unwrap();
        let twice = tree.clone().strip_protection();
        assert_eq!(tree, twice);
    }
}
