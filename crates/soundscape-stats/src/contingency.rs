//! Contingency tables and the tests of independence computed over them.
//!
//! A [`ContingencyTable`] cross-tabulates two categorical variables with
//! labeled rows and columns in a caller-supplied canonical order. For 2×2
//! tables [`FisherExactTest`] gives the exact two-sided p-value and the
//! sample odds ratio; larger tables fall back to the chi-square test of
//! independence ([`ChiSquareTest`]), which is only an approximation and
//! carries the minimum expected cell count so callers can flag unreliable
//! results.

use crate::distribution::{chi_square_sf, ln_gamma};

/// Relative tolerance when comparing hypergeometric probabilities, so tables
/// equally extreme as the observed one are counted despite rounding.
const P_REL_TOLERANCE: f64 = 1.0 + 1e-7;

/// Cross-tabulation of two categorical variables.
///
/// Rows and columns keep the order they were supplied in; categories that
/// never occur in the observations are dropped at construction, so the table
/// only contains non-empty rows and columns.
///
/// # Examples
///
/// ```
/// use soundscape_stats::contingency::ContingencyTable;
///
/// let observations = [("yes", "good"), ("yes", "good"), ("no", "bad")];
/// let table = ContingencyTable::from_observations(
///     &["no", "maybe", "yes"],
///     &["good", "bad"],
///     observations.iter().copied(),
/// );
/// // "maybe" never occurs and is dropped
/// assert_eq!(table.row_labels(), &["no", "yes"]);
/// assert_eq!(table.total(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ContingencyTable {
    row_labels: Vec<String>,
    col_labels: Vec<String>,
    /// Counts indexed `[row][col]`.
    counts: Vec<Vec<u64>>,
}

impl ContingencyTable {
    /// Builds a table from co-occurrence observations.
    ///
    /// # Arguments
    ///
    /// * `row_order` - Canonical row category order
    /// * `col_order` - Canonical column category order
    /// * `observations` - One `(row category, column category)` pair per record
    ///
    /// Observations whose category is not listed in the corresponding order
    /// are ignored. Rows and columns that end up all-zero are dropped.
    #[must_use]
    pub fn from_observations<'a, I>(row_order: &[&str], col_order: &[&str], observations: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut counts = vec![vec![0_u64; col_order.len()]; row_order.len()];
        for (row, col) in observations {
            let Some(r) = row_order.iter().position(|&label| label == row) else {
                continue;
            };
            let Some(c) = col_order.iter().position(|&label| label == col) else {
                continue;
            };
            counts[r][c] += 1;
        }

        let keep_rows = (0..row_order.len())
            .filter(|&r| counts[r].iter().any(|&count| count > 0))
            .collect::<Vec<_>>();
        let keep_cols = (0..col_order.len())
            .filter(|&c| keep_rows.iter().any(|&r| counts[r][c] > 0))
            .collect::<Vec<_>>();

        Self {
            row_labels: keep_rows.iter().map(|&r| row_order[r].to_owned()).collect(),
            col_labels: keep_cols.iter().map(|&c| col_order[c].to_owned()).collect(),
            counts: keep_rows
                .iter()
                .map(|&r| keep_cols.iter().map(|&c| counts[r][c]).collect())
                .collect(),
        }
    }

    /// Row category labels, in canonical order.
    #[must_use]
    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    /// Column category labels, in canonical order.
    #[must_use]
    pub fn col_labels(&self) -> &[String] {
        &self.col_labels
    }

    /// The count at `[row][col]`.
    #[must_use]
    pub fn count(&self, row: usize, col: usize) -> u64 {
        self.counts[row][col]
    }

    /// All counts, indexed `[row][col]`.
    #[must_use]
    pub fn counts(&self) -> &[Vec<u64>] {
        &self.counts
    }

    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.row_labels.len()
    }

    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.col_labels.len()
    }

    /// Per-row totals.
    #[must_use]
    pub fn row_totals(&self) -> Vec<u64> {
        self.counts.iter().map(|row| row.iter().sum()).collect()
    }

    /// Per-column totals.
    #[must_use]
    pub fn col_totals(&self) -> Vec<u64> {
        (0..self.n_cols())
            .map(|c| self.counts.iter().map(|row| row[c]).sum())
            .collect()
    }

    /// Grand total; equals the effective sample size of the association test.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().flatten().sum()
    }

    /// Whether the table is exactly 2×2 (Fisher's exact test applies).
    #[must_use]
    pub fn is_2x2(&self) -> bool {
        self.n_rows() == 2 && self.n_cols() == 2
    }
}

/// Fisher's exact test on a 2×2 contingency table.
///
/// The two-sided p-value sums the probabilities of all tables (with the same
/// margins) that are no more likely than the observed one, under the
/// hypergeometric null.
#[derive(Debug, Clone, Copy)]
pub struct FisherExactTest {
    /// Sample odds ratio `(a*d) / (b*c)`; infinite when `b*c == 0`.
    pub odds_ratio: f64,
    /// Exact two-sided p-value.
    pub p_value: f64,
}

impl FisherExactTest {
    /// Runs the test.
    ///
    /// # Returns
    ///
    /// * `Some(FisherExactTest)` - for a non-empty 2×2 table
    /// * `None` - for any other shape
    ///
    /// # Examples
    ///
    /// ```
    /// use soundscape_stats::contingency::{ContingencyTable, FisherExactTest};
    ///
    /// let pairs = [("a", "x"), ("a", "x"), ("a", "y"), ("b", "x"), ("b", "y"), ("b", "y")];
    /// let table = ContingencyTable::from_observations(&["a", "b"], &["x", "y"], pairs.iter().copied());
    /// let test = FisherExactTest::new(&table).unwrap();
    /// assert!(test.p_value > 0.05);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new(table: &ContingencyTable) -> Option<Self> {
        if !table.is_2x2() || table.total() == 0 {
            return None;
        }

        let a = table.count(0, 0);
        let b = table.count(0, 1);
        let c = table.count(1, 0);
        let d = table.count(1, 1);

        let cross_ad = (a * d) as f64;
        let cross_bc = (b * c) as f64;
        let odds_ratio = if cross_bc == 0.0 {
            if cross_ad == 0.0 { f64::NAN } else { f64::INFINITY }
        } else {
            cross_ad / cross_bc
        };

        let row1 = a + b;
        let row2 = c + d;
        let col1 = a + c;
        let n = row1 + row2;

        let pmf = |k: u64| -> f64 {
            (ln_choose(row1, k) + ln_choose(row2, col1 - k) - ln_choose(n, col1)).exp()
        };

        let lo = col1.saturating_sub(row2);
        let hi = row1.min(col1);
        let observed = pmf(a);

        let mut p_value = 0.0;
        for k in lo..=hi {
            let p = pmf(k);
            if p <= observed * P_REL_TOLERANCE {
                p_value += p;
            }
        }

        Some(Self {
            odds_ratio,
            p_value: p_value.min(1.0),
        })
    }
}

/// Chi-square test of independence on an r×c contingency table.
///
/// No continuity correction is applied. The approximation is unreliable when
/// expected cell counts are small; `min_expected` lets callers attach the
/// usual "expected count < 5" caution.
#[derive(Debug, Clone, Copy)]
pub struct ChiSquareTest {
    /// The chi-square statistic.
    pub statistic: f64,
    /// Degrees of freedom, `(rows - 1) * (cols - 1)`.
    pub df: usize,
    /// P-value from the chi-square distribution.
    pub p_value: f64,
    /// Smallest expected cell count under independence.
    pub min_expected: f64,
}

impl ChiSquareTest {
    /// Runs the test.
    ///
    /// # Returns
    ///
    /// * `Some(ChiSquareTest)` - for a non-empty table with at least 2 rows
    ///   and 2 columns
    /// * `None` - for degenerate shapes
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new(table: &ContingencyTable) -> Option<Self> {
        if table.n_rows() < 2 || table.n_cols() < 2 || table.total() == 0 {
            return None;
        }

        let row_totals = table.row_totals();
        let col_totals = table.col_totals();
        let n = table.total() as f64;

        let mut statistic = 0.0;
        let mut min_expected = f64::INFINITY;
        for (r, &row_total) in row_totals.iter().enumerate() {
            for (c, &col_total) in col_totals.iter().enumerate() {
                let expected = (row_total as f64) * (col_total as f64) / n;
                min_expected = min_expected.min(expected);
                let observed = table.count(r, c) as f64;
                statistic += (observed - expected).powi(2) / expected;
            }
        }

        let df = (table.n_rows() - 1) * (table.n_cols() - 1);
        let p_value = chi_square_sf(statistic, df as f64);

        Some(Self {
            statistic,
            df,
            p_value,
            min_expected,
        })
    }
}

/// Natural log of the binomial coefficient `C(n, k)`.
#[expect(clippy::cast_precision_loss)]
fn ln_choose(n: u64, k: u64) -> f64 {
    debug_assert!(k <= n);
    ln_gamma(n as f64 + 1.0) - ln_gamma(k as f64 + 1.0) - ln_gamma((n - k) as f64 + 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_2x2(a: u64, b: u64, c: u64, d: u64) -> ContingencyTable {
        let mut observations = Vec::new();
        observations.extend(std::iter::repeat_n(("r1", "c1"), a as usize));
        observations.extend(std::iter::repeat_n(("r1", "c2"), b as usize));
        observations.extend(std::iter::repeat_n(("r2", "c1"), c as usize));
        observations.extend(std::iter::repeat_n(("r2", "c2"), d as usize));
        ContingencyTable::from_observations(&["r1", "r2"], &["c1", "c2"], observations)
    }

    #[test]
    fn test_totals_consistency() {
        let table = table_2x2(3, 1, 4, 2);
        assert_eq!(table.row_totals(), vec![4, 6]);
        assert_eq!(table.col_totals(), vec![7, 3]);
        assert_eq!(table.total(), 10);
        assert_eq!(
            table.row_totals().iter().sum::<u64>(),
            table.col_totals().iter().sum::<u64>(),
        );
    }

    #[test]
    fn test_empty_categories_dropped() {
        let observations = [("a", "x"), ("c", "y")];
        let table = ContingencyTable::from_observations(
            &["a", "b", "c"],
            &["x", "y", "z"],
            observations.iter().copied(),
        );
        assert_eq!(table.row_labels(), &["a", "c"]);
        assert_eq!(table.col_labels(), &["x", "y"]);
    }

    #[test]
    fn test_fisher_perfect_association() {
        let table = table_2x2(5, 0, 0, 5);
        let test = FisherExactTest::new(&table).unwrap();
        // only the observed table and its mirror are as extreme: 2/252
        assert!((test.p_value - 0.007_936_5).abs() < 1e-6);
        assert!(test.p_value < 0.01);
        assert!(test.odds_ratio.is_infinite());
    }

    #[test]
    fn test_fisher_reference_value() {
        // [[3,1],[1,3]]: p = 34/70
        let table = table_2x2(3, 1, 1, 3);
        let test = FisherExactTest::new(&table).unwrap();
        assert!((test.p_value - 34.0 / 70.0).abs() < 1e-10);
        assert!((test.odds_ratio - 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_fisher_rejects_larger_tables() {
        let observations = [("a", "x"), ("b", "y"), ("c", "x")];
        let table = ContingencyTable::from_observations(
            &["a", "b", "c"],
            &["x", "y"],
            observations.iter().copied(),
        );
        assert!(FisherExactTest::new(&table).is_none());
    }

    #[test]
    fn test_chi_square_reference_value() {
        // 2x3 with margins (40, 40) x (30, 20, 30): statistic = 20/3, df = 2
        let mut observations = Vec::new();
        observations.extend(std::iter::repeat_n(("r1", "c1"), 10));
        observations.extend(std::iter::repeat_n(("r1", "c2"), 10));
        observations.extend(std::iter::repeat_n(("r1", "c3"), 20));
        observations.extend(std::iter::repeat_n(("r2", "c1"), 20));
        observations.extend(std::iter::repeat_n(("r2", "c2"), 10));
        observations.extend(std::iter::repeat_n(("r2", "c3"), 10));
        let table =
            ContingencyTable::from_observations(&["r1", "r2"], &["c1", "c2", "c3"], observations);

        let test = ChiSquareTest::new(&table).unwrap();
        assert!((test.statistic - 20.0 / 3.0).abs() < 1e-10);
        assert_eq!(test.df, 2);
        assert!((test.p_value - 0.035_67).abs() < 1e-4);
        assert!((test.min_expected - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_chi_square_independent_not_significant() {
        let table = table_2x2(10, 10, 10, 10);
        let test = ChiSquareTest::new(&table).unwrap();
        assert!((test.statistic).abs() < 1e-12);
        assert!(test.p_value > 0.99);
    }
}
