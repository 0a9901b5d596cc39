//! Lexical similarity between two strings.
//!
//! The score is the Ratcliff/Obershelp "gestalt" ratio: find the longest common
//! run, recurse on the pieces to its left and right, and report
//! `2 * matched / (len(a) + len(b))`. Comparison is on lowercased characters.

/// Similarity of `a` against `b` in `[0.0, 1.0]`.
///
/// Two empty strings score `1.0` (they are identical).
///
/// ```
/// use tourguide::engine::similarity;
///
/// assert_eq!(similarity("Karnak", "KARNAK"), 1.0);
/// assert_eq!(similarity("abc", "xyz"), 0.0);
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matched_chars(&a, &b) as f64 / total as f64
}

/// Total length of the non-overlapping, order-preserving matching blocks.
fn matched_chars(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];
    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, k) = longest_match(a, b, alo, ahi, blo, bhi);
        if k == 0 {
            continue;
        }
        matched += k;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + k < ahi && j + k < bhi {
            pending.push((i + k, ahi, j + k, bhi));
        }
    }
    matched
}

/// Longest common run within `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Ties go to the run starting earliest in `a`, then earliest in `b`.
/// Returns `(start_in_a, start_in_b, length)`.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_k) = (alo, blo, 0);
    // run[j + 1] = length of the common run ending at a[i - 1], b[j]
    let mut run = vec![0usize; b.len() + 1];
    let mut next = vec![0usize; b.len() + 1];
    for i in alo..ahi {
        for j in blo..bhi {
            next[j + 1] = if a[i] == b[j] { run[j] + 1 } else { 0 };
            let k = next[j + 1];
            if k > best_k {
                best_i = i + 1 - k;
                best_j = j + 1 - k;
                best_k = k;
            }
        }
        std::mem::swap(&mut run, &mut next);
    }
    (best_i, best_j, best_k)
}
