//! Boyer-Moore literal-string search, bad-character rule only (no
//! good-suffix rule/table) - the pattern is scanned right-to-left at each
//! alignment, and on a mismatch the alignment is advanced by the largest
//! amount the bad-character table justifies.
//!
//! Like [KmpMatcher](crate::kmp::KmpMatcher), a full match only advances
//! the alignment by one position rather than by the pattern length, so
//! overlapping matches are reported the same way by both engines.

use crate::matcher::{MatchResult, Matcher};
use std::collections::HashMap;

pub struct BoyerMooreMatcher {
    pattern: Vec<char>,
    /// Last index of each character within the pattern.
    last: HashMap<char, usize>,
}

impl BoyerMooreMatcher {
    pub fn new(pattern: &str) -> Self {
        let pattern: Vec<char> = pattern.chars().collect();
        let mut last = HashMap::new();
        for (idx, &c) in pattern.iter().enumerate() {
            last.insert(c, idx);
        }
        Self { pattern, last }
    }

    pub fn pattern_len(&self) -> usize {
        self.pattern.len()
    }
}

impl Matcher for BoyerMooreMatcher {
    fn search(&self, text: &str) -> MatchResult {
        let m = self.pattern.len();
        if m == 0 {
            let chars: Vec<char> = text.chars().collect();
            return MatchResult::new((0..=chars.len()).collect());
        }

        let chars: Vec<char> = text.chars().collect();
        let n = chars.len();
        let mut positions = Vec::new();
        if n < m {
            return MatchResult::new(positions);
        }

        let mut i = 0usize;
        while i <= n - m {
            let mut k = m - 1;
            let mut matched = true;
            loop {
                if chars[i + k] != self.pattern[k] {
                    matched = false;
                    break;
                }
                if k == 0 {
                    break;
                }
                k -= 1;
            }

            if matched {
                positions.push(i);
                i += 1;
                continue;
            }

            let bad_char = chars[i + k];
            // `last[t] = -1` when `t` never occurs in the pattern, so an
            // unseen character always shifts the full `k + 1` rather than
            // being folded into the same case as an in-pattern character.
            let last_idx = self
                .last
                .get(&bad_char)
                .map(|&idx| idx as isize)
                .unwrap_or(-1);
            let shift = std::cmp::max(1, k as isize - last_idx) as usize;
            i += shift;
        }

        MatchResult::new(positions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_single_match() {
        let m = BoyerMooreMatcher::new("abc");
        assert_eq!(m.search("xxabcxx").positions, vec![2]);
    }

    #[test]
    fn finds_no_match() {
        let m = BoyerMooreMatcher::new("abc");
        assert_eq!(m.search("xyz").positions, Vec::<usize>::new());
    }

    #[test]
    fn finds_overlapping_matches() {
        let m = BoyerMooreMatcher::new("aa");
        assert_eq!(m.search("aaa").positions, vec![0, 1]);
    }

    #[test]
    fn finds_adjacent_non_overlapping_matches() {
        let m = BoyerMooreMatcher::new("ab");
        assert_eq!(m.search("abab").positions, vec![0, 2]);
    }

    #[test]
    fn pattern_longer_than_text_has_no_match() {
        let m = BoyerMooreMatcher::new("abcdef");
        assert_eq!(m.search("abc").positions, Vec::<usize>::new());
    }

    #[test]
    fn agrees_with_kmp_on_random_like_inputs() {
        use crate::kmp::KmpMatcher;
        let cases = [
            ("ab", "ababababa"),
            ("aab", "aaabaabaaab"),
            ("xyz", "abcxyzxyzabc"),
            ("a", "aaaaaa"),
        ];
        for (pattern, text) in cases {
            let bm = BoyerMooreMatcher::new(pattern).search(text);
            let kmp = KmpMatcher::new(pattern).search(text);
            assert_eq!(bm.positions, kmp.positions, "pattern={pattern:?} text={text:?}");
        }
    }
}
