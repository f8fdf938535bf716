use itertools::Itertools;

/// Greatest common divisor of `a` and `b` (Euclid). `gcd(0, n) == n`.
pub fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Reduce a list of counts to its simplest integer ratio, joined with ':'.
///
/// Counts are divided by their common GCD and kept in their original order: `[8, 4]` becomes
/// `"2:1"`. An empty list yields an empty string.
pub fn simplify_ratio(counts: &[usize]) -> String {
    let divisor = counts.iter().copied().fold(0, gcd).max(1);
    counts.iter().map(|count| count / divisor).join(":")
}
