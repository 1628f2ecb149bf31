//! Fuzzy string scoring for area names
//!
//! Scores run from 0 to 100. [`weighted_ratio`] picks between a plain edit
//! distance comparison and token/partial comparisons depending on how
//! different the two string lengths are, so that a short area name can
//! still score highly against a long address that contains it.

use crate::types::AreaMatch;
use std::collections::BTreeSet;

/// Weight applied to token based scores
const TOKEN_SCALE: f64 = 0.95;
/// Length ratio below which strings are compared whole
const PARTIAL_LENGTH_RATIO: f64 = 1.5;
/// Length ratio above which partial scores are penalised harder
const LONG_LENGTH_RATIO: f64 = 8.0;

/// Lowercase, replace non-alphanumerics with spaces, trim.
pub fn preprocess(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_alphanumeric() {
            out.extend(c.to_lowercase());
        } else {
            out.push(' ');
        }
    }
    out.trim().to_string()
}

/// Insertions plus deletions needed to turn `a` into `b`
fn indel_distance(a: &[char], b: &[char]) -> usize {
    // Longest common subsequence, one DP row at a time
    let mut row = vec![0usize; b.len() + 1];
    for &ca in a {
        let mut diagonal = 0;
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == cb { diagonal + 1 } else { above.max(row[j]) };
            diagonal = above;
        }
    }
    a.len() + b.len() - 2 * row[b.len()]
}

fn indel_ratio(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 100.0;
    }
    100.0 * (1.0 - indel_distance(a, b) as f64 / total as f64)
}

/// Indel similarity as 0-100: `1 - (insertions + deletions) / (len_a + len_b)`
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    indel_ratio(&a, &b)
}

/// Best alignment of `needle` inside `haystack`, which is at least as long.
///
/// Besides every full-length window this also tries the prefixes and
/// suffixes of `haystack` shorter than `needle`, so a needle hanging off
/// either end still gets credit for the overlap.
fn partial_alignment(needle: &[char], haystack: &[char]) -> f64 {
    let needle_len = needle.len();
    let last_start = haystack.len() - needle_len;

    let prefixes = (1..needle_len).map(move |end| &haystack[..end]);
    let windows = haystack.windows(needle_len);
    let suffixes = (last_start + 1..haystack.len()).map(move |start| &haystack[start..]);

    let mut best = 0.0_f64;
    for candidate in prefixes.chain(windows).chain(suffixes) {
        best = best.max(indel_ratio(needle, candidate));
        if best >= 100.0 {
            break;
        }
    }
    best
}

/// Best [`ratio`] of the shorter string against any alignment in the longer one
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (shorter, longer) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };

    if shorter.is_empty() {
        return if longer.is_empty() { 100.0 } else { 0.0 };
    }

    let best = partial_alignment(shorter, longer);
    if best < 100.0 && shorter.len() == longer.len() {
        return best.max(partial_alignment(longer, shorter));
    }
    best
}

fn sorted_tokens(text: &str) -> String {
    let mut tokens: Vec<&str> = text.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    ratio(&sorted_tokens(a), &sorted_tokens(b))
}

pub fn partial_token_sort_ratio(a: &str, b: &str) -> f64 {
    partial_ratio(&sorted_tokens(a), &sorted_tokens(b))
}

/// Tokens shared by both strings plus each side's leftovers, all sorted
struct TokenSets<'a> {
    common: Vec<&'a str>,
    only_a: Vec<&'a str>,
    only_b: Vec<&'a str>,
}

impl<'a> TokenSets<'a> {
    fn new(a: &'a str, b: &'a str) -> Self {
        let set_a: BTreeSet<&str> = a.split_whitespace().collect();
        let set_b: BTreeSet<&str> = b.split_whitespace().collect();

        Self {
            common: set_a.intersection(&set_b).copied().collect(),
            only_a: set_a.difference(&set_b).copied().collect(),
            only_b: set_b.difference(&set_a).copied().collect(),
        }
    }

    fn either_side_empty(a: &str, b: &str) -> bool {
        a.split_whitespace().next().is_none() || b.split_whitespace().next().is_none()
    }
}

fn join_parts(head: &str, tail: &[&str]) -> String {
    match (head.is_empty(), tail.is_empty()) {
        (_, true) => head.to_string(),
        (true, false) => tail.join(" "),
        (false, false) => format!("{} {}", head, tail.join(" ")),
    }
}

pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    if TokenSets::either_side_empty(a, b) {
        return 0.0;
    }
    let sets = TokenSets::new(a, b);

    // One side's tokens are a subset of the other's
    if !sets.common.is_empty() && (sets.only_a.is_empty() || sets.only_b.is_empty()) {
        return 100.0;
    }

    let common = sets.common.join(" ");
    let combined_a = join_parts(&common, &sets.only_a);
    let combined_b = join_parts(&common, &sets.only_b);

    let mut best = ratio(&combined_a, &combined_b);
    if !common.is_empty() {
        best = best
            .max(ratio(&common, &combined_a))
            .max(ratio(&common, &combined_b));
    }
    best
}

pub fn partial_token_set_ratio(a: &str, b: &str) -> f64 {
    if TokenSets::either_side_empty(a, b) {
        return 0.0;
    }
    let sets = TokenSets::new(a, b);

    if !sets.common.is_empty() {
        return 100.0;
    }

    partial_ratio(&sets.only_a.join(" "), &sets.only_b.join(" "))
}

/// Composite similarity of two raw strings, 0-100.
///
/// Returns 0 when either string has no alphanumeric content.
pub fn weighted_ratio(a: &str, b: &str) -> u8 {
    let a = preprocess(a);
    let b = preprocess(b);
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let len_a = a.chars().count() as f64;
    let len_b = b.chars().count() as f64;
    let len_ratio = len_a.max(len_b) / len_a.min(len_b);

    let base = ratio(&a, &b);

    let score = if len_ratio < PARTIAL_LENGTH_RATIO {
        base
            .max(token_sort_ratio(&a, &b) * TOKEN_SCALE)
            .max(token_set_ratio(&a, &b) * TOKEN_SCALE)
    } else {
        let partial_scale = if len_ratio < LONG_LENGTH_RATIO { 0.9 } else { 0.6 };

        base
            .max(partial_ratio(&a, &b) * partial_scale)
            .max(partial_token_sort_ratio(&a, &b) * TOKEN_SCALE * partial_scale)
            .max(partial_token_set_ratio(&a, &b) * TOKEN_SCALE * partial_scale)
    };

    round_score(score)
}

/// Round half to even, so x.5 lands where Python's `round` puts it
fn round_score(score: f64) -> u8 {
    score.round_ties_even().clamp(0.0, 100.0) as u8
}

/// Best-scoring choice for `query`; the earliest choice wins ties.
pub fn extract_one<S: AsRef<str>>(query: &str, choices: &[S]) -> Option<AreaMatch> {
    let mut best: Option<AreaMatch> = None;

    for choice in choices {
        let score = weighted_ratio(query, choice.as_ref());
        let better = best.as_ref().map_or(true, |current| score > current.score);
        if better {
            best = Some(AreaMatch {
                area: choice.as_ref().to_string(),
                score,
            });
        }
    }

    best
}
