//! Association analyses between two categorical (ordinal) fields.
//!
//! The contingency table is built over display labels in canonical code
//! order. A 2×2 table gets Fisher's exact test; anything larger falls back
//! to the chi-square test of independence, which is explicitly an
//! approximation — the result carries that flag plus a low-expected-count
//! warning so the report never presents it with exact-test rigor. No
//! effect-size classification is defined for this family.

use soundscape_model::{field::OrdinalField, record::CleanTable};
use soundscape_stats::contingency::{ChiSquareTest, ContingencyTable, FisherExactTest};

use crate::{interpretation::is_significant, selection::ordinal_label_pairs};

/// Expected cell counts below this make the chi-square approximation
/// unreliable.
pub const LOW_EXPECTED_THRESHOLD: f64 = 5.0;

/// One named association test in the battery.
#[derive(Debug, Clone, Copy)]
pub struct AssociationSpec {
    pub key: &'static str,
    pub title: &'static str,
    pub row: OrdinalField,
    pub col: OrdinalField,
}

/// The fixed association battery.
pub const ASSOCIATION_BATTERY: [AssociationSpec; 3] = [
    AssociationSpec {
        key: "fisher_D_community_qol",
        title: "D. Q10 Community Connection × Q11 QoL",
        row: OrdinalField::Community,
        col: OrdinalField::QualityOfLife,
    },
    AssociationSpec {
        key: "fisher_E_age_concentration",
        title: "E. Age Group × Q7 Concentration Impact",
        row: OrdinalField::AgeGroup,
        col: OrdinalField::Concentration,
    },
    AssociationSpec {
        key: "fisher_F_duration_qol",
        title: "F. Residency Duration × Q11 QoL",
        row: OrdinalField::ResidencyDuration,
        col: OrdinalField::QualityOfLife,
    },
];

/// Which test ran and what it found.
#[derive(Debug, Clone, Copy)]
pub enum AssociationOutcome {
    /// Exact test on a 2×2 table.
    Fisher { odds_ratio: f64, p_value: f64 },
    /// Chi-square approximation on a table larger than 2×2. `low_expected`
    /// marks expected cell counts under [`LOW_EXPECTED_THRESHOLD`].
    ChiSquare {
        statistic: f64,
        df: usize,
        p_value: f64,
        low_expected: bool,
    },
    /// The observed categories collapse below a 2×2 table.
    InsufficientData,
}

impl AssociationOutcome {
    #[must_use]
    pub fn p_value(&self) -> Option<f64> {
        match self {
            Self::Fisher { p_value, .. } | Self::ChiSquare { p_value, .. } => Some(*p_value),
            Self::InsufficientData => None,
        }
    }

    #[must_use]
    pub fn significant(&self) -> bool {
        self.p_value().is_some_and(is_significant)
    }
}

/// Result of one association analysis, with the full contingency table a
/// heatmap of it would render.
#[derive(Debug, Clone)]
pub struct AssociationResult {
    pub spec: AssociationSpec,
    pub table: ContingencyTable,
    /// Grand total of the table — records with both fields present.
    pub effective_n: u64,
    pub outcome: AssociationOutcome,
}

/// Runs one association analysis.
#[must_use]
pub fn run(table: &CleanTable, spec: AssociationSpec) -> AssociationResult {
    let pairs = ordinal_label_pairs(table, spec.row, spec.col);
    let row_order = spec.row.code_labels().iter().map(|&(_, l)| l).collect::<Vec<_>>();
    let col_order = spec.col.code_labels().iter().map(|&(_, l)| l).collect::<Vec<_>>();
    let contingency = ContingencyTable::from_observations(&row_order, &col_order, pairs);
    let effective_n = contingency.total();

    let outcome = if contingency.is_2x2() {
        match FisherExactTest::new(&contingency) {
            Some(test) => AssociationOutcome::Fisher {
                odds_ratio: test.odds_ratio,
                p_value: test.p_value,
            },
            None => AssociationOutcome::InsufficientData,
        }
    } else {
        match ChiSquareTest::new(&contingency) {
            Some(test) => AssociationOutcome::ChiSquare {
                statistic: test.statistic,
                df: test.df,
                p_value: test.p_value,
                low_expected: test.min_expected < LOW_EXPECTED_THRESHOLD,
            },
            None => AssociationOutcome::InsufficientData,
        }
    };

    AssociationResult {
        spec,
        table: contingency,
        effective_n,
        outcome,
    }
}

/// Runs the whole battery in its fixed order.
#[must_use]
pub fn run_battery(table: &CleanTable) -> Vec<AssociationResult> {
    ASSOCIATION_BATTERY
        .iter()
        .map(|&spec| run(table, spec))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use soundscape_model::{encoding::EncodingTables, record::Encoder, schema::RawRecord};

    fn raw(community: &str, qol: &str, age: &str, concentration: &str) -> RawRecord {
        RawRecord {
            site: "Waterloo Centre".into(),
            age_group: age.into(),
            residency_duration: "1 - 5 years".into(),
            floor_level: "Low Rise (Floors 1–5)".into(),
            noise_rating: "5".into(),
            noise_sources: String::new(),
            noise_spike: "Yes".into(),
            concentration: concentration.into(),
            air_quality: "5".into(),
            convenience: String::new(),
            community: community.into(),
            quality_of_life: qol.into(),
        }
    }

    fn encode(raws: &[RawRecord]) -> CleanTable {
        Encoder::new(EncodingTables::default()).encode_all(raws)
    }

    #[test]
    fn test_perfect_2x2_association() {
        let mut raws = Vec::new();
        for _ in 0..5 {
            raws.push(raw("No", "Reduces slightly", "18 – 25", "Neutral"));
            raws.push(raw("Yes", "Neutral", "18 – 25", "Neutral"));
        }
        let table = encode(&raws);
        let result = run(&table, ASSOCIATION_BATTERY[0]);
        assert!(result.table.is_2x2());
        assert_eq!(result.effective_n, 10);
        let AssociationOutcome::Fisher { p_value, .. } = result.outcome else {
            panic!("expected Fisher's exact on a 2x2 table");
        };
        assert!(p_value < 0.01);
        assert!(result.outcome.significant());
    }

    #[test]
    fn test_larger_table_uses_chi_square_with_flag() {
        let mut raws = Vec::new();
        for (community, qol) in [
            ("No", "Reduces significantly"),
            ("No", "Reduces slightly"),
            ("Maybe", "Neutral"),
            ("Maybe", "Reduces slightly"),
            ("Yes", "Improves significantly"),
            ("Yes", "Neutral"),
        ] {
            raws.push(raw(community, qol, "18 – 25", "Neutral"));
            raws.push(raw(community, qol, "26 – 40", "Neutral"));
        }
        let table = encode(&raws);
        let result = run(&table, ASSOCIATION_BATTERY[0]);
        assert_eq!(result.table.n_rows(), 3);
        let AssociationOutcome::ChiSquare { low_expected, df, .. } = result.outcome else {
            panic!("expected the chi-square fallback");
        };
        assert_eq!(df, 6);
        assert!(low_expected);
    }

    #[test]
    fn test_table_totals_match_effective_n() {
        let raws = vec![
            raw("No", "Neutral", "18 – 25", "Neutral"),
            raw("Yes", "Reduces slightly", "26 – 40", "Neutral"),
            // missing QoL: excluded from the table
            raw("Yes", "", "26 – 40", "Neutral"),
        ];
        let table = encode(&raws);
        let result = run(&table, ASSOCIATION_BATTERY[0]);
        assert_eq!(result.effective_n, 2);
        let cell_sum = result.table.counts().iter().flatten().sum::<u64>();
        assert_eq!(cell_sum, result.effective_n);
    }

    #[test]
    fn test_degenerate_table_insufficient() {
        // only one community category ever answered
        let raws = vec![
            raw("Yes", "Neutral", "18 – 25", "Neutral"),
            raw("Yes", "Reduces slightly", "18 – 25", "Neutral"),
        ];
        let table = encode(&raws);
        let result = run(&table, ASSOCIATION_BATTERY[0]);
        assert!(matches!(result.outcome, AssociationOutcome::InsufficientData));
    }
}
