//! Mann-Whitney U test (two-sample rank-sum test).
//!
//! Used as the pairwise post-hoc test after a significant Kruskal-Wallis
//! omnibus result. The reported statistic is U for the first sample; the
//! two-sided p-value uses the normal approximation with tie and continuity
//! corrections, which is the appropriate regime for tied ordinal survey
//! codes.

use crate::{
    distribution::normal_sf,
    rank::{average_ranks, tie_term},
};

/// Result of a two-sided Mann-Whitney U test.
///
/// # Examples
///
/// ```
/// use soundscape_stats::mann_whitney::MannWhitneyTest;
///
/// let x = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let y = [6.0, 7.0, 8.0, 9.0, 10.0];
/// let test = MannWhitneyTest::new(&x, &y).unwrap();
/// assert_eq!(test.u, 0.0);
/// assert!(test.p_value < 0.05);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MannWhitneyTest {
    /// U statistic for the first sample.
    pub u: f64,
    /// Two-sided p-value from the corrected normal approximation.
    pub p_value: f64,
    /// Size of the first sample.
    pub n1: usize,
    /// Size of the second sample.
    pub n2: usize,
}

impl MannWhitneyTest {
    /// Runs the test on two independent samples.
    ///
    /// # Arguments
    ///
    /// * `x` - First sample
    /// * `y` - Second sample
    ///
    /// # Returns
    ///
    /// * `Some(MannWhitneyTest)` - when the approximation is defined
    /// * `None` - when either sample is empty, or all pooled values are
    ///   identical (zero variance)
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new(x: &[f64], y: &[f64]) -> Option<Self> {
        let n1 = x.len();
        let n2 = y.len();
        if n1 == 0 || n2 == 0 {
            return None;
        }

        let pooled = x.iter().chain(y).copied().collect::<Vec<_>>();
        let ranks = average_ranks(&pooled);
        let r1 = ranks[..n1].iter().sum::<f64>();

        let n1f = n1 as f64;
        let n2f = n2 as f64;
        let nf = n1f + n2f;

        let u = r1 - n1f * (n1f + 1.0) / 2.0;
        let mean = n1f * n2f / 2.0;
        let tie_adjust = tie_term(&pooled) / (nf * (nf - 1.0));
        let variance = n1f * n2f / 12.0 * ((nf + 1.0) - tie_adjust);
        if variance <= 0.0 {
            return None;
        }

        let diff = u - mean;
        // continuity correction shrinks the deviation by half a unit
        let corrected = diff.abs() - 0.5;
        let z = corrected.max(0.0) / variance.sqrt();
        let p_value = (2.0 * normal_sf(z)).min(1.0);

        Some(Self { u, p_value, n1, n2 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fully_separated() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [6.0, 7.0, 8.0, 9.0, 10.0];
        let test = MannWhitneyTest::new(&x, &y).unwrap();
        assert_eq!(test.u, 0.0);
        assert!(test.p_value < 0.05);
    }

    #[test]
    fn test_u_complement() {
        // U1 + U2 == n1 * n2
        let x = [3.0, 5.0, 8.0, 9.0];
        let y = [1.0, 2.0, 6.0, 7.0, 10.0];
        let fwd = MannWhitneyTest::new(&x, &y).unwrap();
        let rev = MannWhitneyTest::new(&y, &x).unwrap();
        assert!((fwd.u + rev.u - 20.0).abs() < 1e-12);
        assert!((fwd.p_value - rev.p_value).abs() < 1e-12);
    }

    #[test]
    fn test_identical_samples_not_significant() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let test = MannWhitneyTest::new(&x, &x).unwrap();
        assert!((test.u - 12.5).abs() < 1e-12);
        assert!(test.p_value > 0.9);
    }

    #[test]
    fn test_empty_sample_undefined() {
        assert!(MannWhitneyTest::new(&[], &[1.0, 2.0]).is_none());
    }

    #[test]
    fn test_constant_pool_undefined() {
        assert!(MannWhitneyTest::new(&[2.0, 2.0], &[2.0, 2.0, 2.0]).is_none());
    }
}
