//! Average-rank transformation with tie handling.
//!
//! Every rank-based test in this crate (Spearman, Kruskal-Wallis,
//! Mann-Whitney) starts from the same transformation: replace each value by
//! its 1-based rank in the sorted order, giving tied values the average of
//! the ranks they span.

/// Computes 1-based average ranks for a sequence of values.
///
/// Tied values all receive the mean of the rank positions they occupy, so
/// the rank sum is always `n * (n + 1) / 2` regardless of ties.
///
/// # Examples
///
/// ```
/// use soundscape_stats::rank::average_ranks;
///
/// let ranks = average_ranks(&[30.0, 10.0, 20.0]);
/// assert_eq!(ranks, vec![3.0, 1.0, 2.0]);
///
/// // The two tied values share ranks 1 and 2 -> 1.5 each
/// let ranks = average_ranks(&[5.0, 5.0, 9.0]);
/// assert_eq!(ranks, vec![1.5, 1.5, 3.0]);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn average_ranks(values: &[f64]) -> Vec<f64> {
    let mut order = (0..values.len()).collect::<Vec<_>>();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut ranks = vec![0.0; values.len()];
    let mut i = 0;
    while i < order.len() {
        let mut j = i;
        while j + 1 < order.len() && values[order[j + 1]] == values[order[i]] {
            j += 1;
        }
        // positions i..=j hold the same value; ranks are 1-based
        let avg_rank = (i + j + 2) as f64 / 2.0;
        for &idx in &order[i..=j] {
            ranks[idx] = avg_rank;
        }
        i = j + 1;
    }
    ranks
}

/// Computes the tie term `sum(t^3 - t)` over all tie groups.
///
/// This quantity feeds the tie corrections of the Kruskal-Wallis H statistic
/// and the Mann-Whitney normal approximation. It is zero when all values are
/// distinct.
///
/// # Examples
///
/// ```
/// use soundscape_stats::rank::tie_term;
///
/// assert_eq!(tie_term(&[1.0, 2.0, 3.0]), 0.0);
/// // one group of 3 ties: 3^3 - 3 = 24
/// assert_eq!(tie_term(&[7.0, 7.0, 7.0, 1.0]), 24.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn tie_term(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mut term = 0.0;
    let mut i = 0;
    while i < sorted.len() {
        let mut j = i;
        while j + 1 < sorted.len() && sorted[j + 1] == sorted[i] {
            j += 1;
        }
        let t = (j - i + 1) as f64;
        term += t * t * t - t;
        i = j + 1;
    }
    term
}
