//! Kruskal-Wallis H test (rank-based one-way analysis of variance).
//!
//! The omnibus test for whether k independent groups share the same
//! distribution: all observations are pooled and rank-transformed, the H
//! statistic compares per-group mean ranks, and the p-value comes from the
//! chi-square approximation with `k - 1` degrees of freedom. Ties are handled
//! with the standard correction factor.

use crate::{
    distribution::chi_square_sf,
    rank::{average_ranks, tie_term},
};

/// Result of a Kruskal-Wallis test across k groups.
///
/// # Examples
///
/// ```
/// use soundscape_stats::kruskal::KruskalWallisTest;
///
/// let a = [1.0, 2.0, 3.0];
/// let b = [2.0, 3.0, 4.0];
/// let c = [9.0, 10.0, 11.0];
/// let test = KruskalWallisTest::new(&[&a, &b, &c]).unwrap();
/// assert_eq!(test.df, 2);
/// assert!(test.p_value < 0.05);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct KruskalWallisTest {
    /// The tie-corrected H statistic.
    pub h: f64,
    /// Degrees of freedom, `k - 1`.
    pub df: usize,
    /// P-value from the chi-square approximation.
    pub p_value: f64,
    /// Total number of observations across all groups.
    pub n: usize,
}

impl KruskalWallisTest {
    /// Runs the test on the given groups.
    ///
    /// Callers are expected to have dropped empty groups already; an empty
    /// group contributes nothing to the statistic but would inflate the
    /// degrees of freedom.
    ///
    /// # Arguments
    ///
    /// * `groups` - One slice of observations per group
    ///
    /// # Returns
    ///
    /// * `Some(KruskalWallisTest)` - when the statistic is defined
    /// * `None` - with fewer than 2 non-empty groups, or when every pooled
    ///   observation is identical (the tie correction degenerates to zero)
    ///
    /// # Examples
    ///
    /// ```
    /// use soundscape_stats::kruskal::KruskalWallisTest;
    ///
    /// // a single group cannot be compared against anything
    /// let only = [1.0, 2.0, 3.0];
    /// assert!(KruskalWallisTest::new(&[&only]).is_none());
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new(groups: &[&[f64]]) -> Option<Self> {
        let groups = groups
            .iter()
            .copied()
            .filter(|g| !g.is_empty())
            .collect::<Vec<_>>();
        if groups.len() < 2 {
            return None;
        }

        let pooled = groups.iter().flat_map(|g| g.iter().copied()).collect::<Vec<_>>();
        let n = pooled.len();
        let nf = n as f64;

        let correction = 1.0 - tie_term(&pooled) / (nf * nf * nf - nf);
        if correction <= 0.0 {
            // all pooled observations identical
            return None;
        }

        let ranks = average_ranks(&pooled);
        let mut h = 0.0;
        let mut offset = 0;
        for group in &groups {
            let size = group.len() as f64;
            let rank_sum = ranks[offset..offset + group.len()].iter().sum::<f64>();
            h += rank_sum * rank_sum / size;
            offset += group.len();
        }
        h = 12.0 / (nf * (nf + 1.0)) * h - 3.0 * (nf + 1.0);
        h /= correction;

        let df = groups.len() - 1;
        let p_value = chi_square_sf(h, df as f64);

        Some(Self { h, df, p_value, n })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fully_separated_groups() {
        // two groups with no overlap and no ties: H = 6.818, p ~= 0.009
        let low = [1.0, 2.0, 3.0, 4.0, 5.0];
        let high = [6.0, 7.0, 8.0, 9.0, 10.0];
        let test = KruskalWallisTest::new(&[&low, &high]).unwrap();
        assert!((test.h - 6.818_18).abs() < 1e-4);
        assert_eq!(test.df, 1);
        assert!(test.p_value < 0.05);
        assert_eq!(test.n, 10);
    }

    #[test]
    fn test_identical_groups_not_significant() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [1.0, 2.0, 3.0, 4.0];
        let test = KruskalWallisTest::new(&[&a, &b]).unwrap();
        assert!(test.p_value > 0.9);
    }

    #[test]
    fn test_empty_groups_dropped() {
        let a = [1.0, 2.0, 3.0];
        let b: [f64; 0] = [];
        let c = [4.0, 5.0, 6.0];
        let test = KruskalWallisTest::new(&[&a, &b, &c]).unwrap();
        assert_eq!(test.df, 1);
    }

    #[test]
    fn test_single_group_undefined() {
        let a = [1.0, 2.0, 3.0];
        let b: [f64; 0] = [];
        assert!(KruskalWallisTest::new(&[&a, &b]).is_none());
    }

    #[test]
    fn test_all_values_identical_undefined() {
        let a = [5.0, 5.0, 5.0];
        let b = [5.0, 5.0];
        assert!(KruskalWallisTest::new(&[&a, &b]).is_none());
    }
}
