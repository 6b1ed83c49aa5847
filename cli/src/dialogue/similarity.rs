//! # Neurolixir Similarity Scoring
//!
//! File: cli/src/dialogue/similarity.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Scores how close two strings are as a percentage in `[0, 100]`, using the
//! classic "sequence matcher ratio":
//!
//! 1. Find the longest contiguous matching block between the two strings.
//! 2. Recurse on the unmatched text to the left and to the right of it.
//! 3. `ratio = 2 * matched / (len(a) + len(b))`, scaled by 100.
//!
//! Strings are compared per Unicode scalar value, not per byte. Two empty
//! strings score 100.
//!
//! The second string is indexed up front. When it is 200 characters or longer,
//! characters that occur in more than 1% of its positions (plus one) are
//! treated as "popular" and never seed a matching block, exactly as the
//! classic algorithm does. Because of that indexing and the tie-breaking in
//! the longest-block search, the score is not symmetric for every pair:
//! `score("tide", "diet")` is 25 while `score("diet", "tide")` is 50.
//!
use std::collections::HashMap;

/// Second-string length from which popular characters are ignored as block seeds.
const AUTOJUNK_MIN_LEN: usize = 200;

/// Similarity of `a` to `b` as a percentage in `[0, 100]`.
///
/// Pure and deterministic. `score(x, x)` is always `100.0`, including for the
/// empty string.
pub fn score(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 100.0;
    }

    let matched = SequenceMatcher::new(&a, &b).matched_len();
    2.0 * matched as f64 / total as f64 * 100.0
}

/// A block `a[a_start..a_start + len] == b[b_start..b_start + len]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MatchBlock {
    a_start: usize,
    b_start: usize,
    len: usize,
}

struct SequenceMatcher<'a> {
    a: &'a [char],
    b: &'a [char],
    /// Positions of each non-popular character of `b`, ascending.
    b2j: HashMap<char, Vec<usize>>,
}

impl<'a> SequenceMatcher<'a> {
    fn new(a: &'a [char], b: &'a [char]) -> Self {
        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &c) in b.iter().enumerate() {
            b2j.entry(c).or_default().push(j);
        }

        let n = b.len();
        if n >= AUTOJUNK_MIN_LEN {
            let ntest = n / 100 + 1;
            b2j.retain(|_, positions| positions.len() <= ntest);
        }

        Self { a, b, b2j }
    }

    /// Longest matching block inside `a[alo..ahi]` x `b[blo..bhi]`.
    ///
    /// Among equally long blocks the one starting earliest in `a` wins, then
    /// the one starting earliest in `b`. The block is then widened over equal
    /// neighbouring characters, which may include popular ones.
    fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> MatchBlock {
        let (mut besti, mut bestj, mut bestsize) = (alo, blo, 0usize);

        // j2len[j] = length of the match ending at a[i - 1], b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut new_j2len: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let prev = if j > 0 {
                        j2len.get(&(j - 1)).copied().unwrap_or(0)
                    } else {
                        0
                    };
                    let k = prev + 1;
                    new_j2len.insert(j, k);
                    if k > bestsize {
                        besti = i + 1 - k;
                        bestj = j + 1 - k;
                        bestsize = k;
                    }
                }
            }
            j2len = new_j2len;
        }

        while besti > alo && bestj > blo && self.a[besti - 1] == self.b[bestj - 1] {
            besti -= 1;
            bestj -= 1;
            bestsize += 1;
        }
        while besti + bestsize < ahi
            && bestj + bestsize < bhi
            && self.a[besti + bestsize] == self.b[bestj + bestsize]
        {
            bestsize += 1;
        }

        MatchBlock {
            a_start: besti,
            b_start: bestj,
            len: bestsize,
        }
    }

    fn matching_blocks(&self) -> Vec<MatchBlock> {
        let mut queue = vec![(0, self.a.len(), 0, self.b.len())];
        let mut blocks = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let block = self.find_longest_match(alo, ahi, blo, bhi);
            if block.len == 0 {
                continue;
            }
            let (i, j, k) = (block.a_start, block.b_start, block.len);
            blocks.push(block);
            if alo < i && blo < j {
                queue.push((alo, i, blo, j));
            }
            if i + k < ahi && j + k < bhi {
                queue.push((i + k, ahi, j + k, bhi));
            }
        }

        blocks.sort_by_key(|block| (block.a_start, block.b_start));
        blocks
    }

    fn matched_len(&self) -> usize {
        self.matching_blocks().iter().map(|block| block.len).sum()
    }
}
