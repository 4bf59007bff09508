//! Group-difference analyses: Kruskal-Wallis omnibus plus conditional
//! Mann-Whitney post-hoc pairs.

use soundscape_model::{
    field::{CategoricalField, NumericField},
    record::CleanTable,
};
use soundscape_stats::{kruskal::KruskalWallisTest, mann_whitney::MannWhitneyTest};

use crate::{
    interpretation::{GroupInterpretation, is_significant},
    selection::{GroupObservations, group_observations},
};

/// Minimum observations per side of a post-hoc pair.
pub const MIN_PAIRWISE_GROUP_SIZE: usize = 2;

/// One named group-difference test in the battery.
#[derive(Debug, Clone, Copy)]
pub struct GroupDifferenceSpec {
    pub key: &'static str,
    pub title: &'static str,
    pub grouping: CategoricalField,
    pub outcome: NumericField,
}

/// The fixed group-difference battery.
pub const GROUP_DIFFERENCE_BATTERY: [GroupDifferenceSpec; 3] = [
    GroupDifferenceSpec {
        key: "kw_A_floor_vs_noise",
        title: "A. Floor Level × Q4 Noise Rating",
        grouping: CategoricalField::FloorLevel,
        outcome: NumericField::NoiseRating,
    },
    GroupDifferenceSpec {
        key: "kw_B_site_vs_noise",
        title: "B. Site × Q4 Noise Rating",
        grouping: CategoricalField::Site,
        outcome: NumericField::NoiseRating,
    },
    GroupDifferenceSpec {
        key: "kw_C_site_vs_qol",
        title: "C. Site × Q11 QoL",
        grouping: CategoricalField::Site,
        outcome: NumericField::QualityOfLife,
    },
];

/// Omnibus test outcome.
#[derive(Debug, Clone, Copy)]
pub enum OmnibusOutcome {
    Computed {
        h: f64,
        df: usize,
        p_value: f64,
        interpretation: GroupInterpretation,
    },
    /// Fewer than 2 non-empty groups, or no outcome variation to rank.
    InsufficientData,
}

/// One post-hoc Mann-Whitney comparison between two groups.
#[derive(Debug, Clone, Copy)]
pub struct PairwiseComparison {
    pub group_a: &'static str,
    pub group_b: &'static str,
    pub u: f64,
    pub p_value: f64,
    pub significant: bool,
}

/// Result of one group-difference analysis, with the per-group outcome
/// values a box plot of it would draw.
#[derive(Debug, Clone)]
pub struct GroupDifferenceResult {
    pub spec: GroupDifferenceSpec,
    pub groups: Vec<GroupObservations>,
    /// Total observations across the included groups.
    pub effective_n: usize,
    pub omnibus: OmnibusOutcome,
    /// Pairwise post-hoc comparisons. Populated only when the omnibus test
    /// is significant and more than two groups were compared; p-values are
    /// not corrected for multiple comparisons.
    pub pairwise: Vec<PairwiseComparison>,
}

/// Runs one group-difference analysis.
///
/// Groups follow the grouping field's canonical category order; records
/// missing either field fall out per group, and empty groups are dropped
/// before the test.
#[must_use]
pub fn run(table: &CleanTable, spec: GroupDifferenceSpec) -> GroupDifferenceResult {
    let groups = group_observations(table, spec.grouping, spec.outcome);
    let effective_n = groups.iter().map(|g| g.values.len()).sum();

    let slices = groups.iter().map(|g| g.values.as_slice()).collect::<Vec<_>>();
    let omnibus = match KruskalWallisTest::new(&slices) {
        Some(test) => OmnibusOutcome::Computed {
            h: test.h,
            df: test.df,
            p_value: test.p_value,
            interpretation: GroupInterpretation::new(test.p_value, test.n),
        },
        None => OmnibusOutcome::InsufficientData,
    };

    let pairwise = match omnibus {
        OmnibusOutcome::Computed { p_value, .. }
            if is_significant(p_value) && groups.len() > 2 =>
        {
            pairwise_comparisons(&groups)
        }
        _ => Vec::new(),
    };

    GroupDifferenceResult {
        spec,
        groups,
        effective_n,
        omnibus,
        pairwise,
    }
}

/// All pairwise Mann-Whitney tests between the given groups, in canonical
/// order, skipping pairs where either side has fewer than
/// [`MIN_PAIRWISE_GROUP_SIZE`] observations.
fn pairwise_comparisons(groups: &[GroupObservations]) -> Vec<PairwiseComparison> {
    let mut comparisons = Vec::new();
    for (i, a) in groups.iter().enumerate() {
        for b in &groups[i + 1..] {
            if a.values.len() < MIN_PAIRWISE_GROUP_SIZE || b.values.len() < MIN_PAIRWISE_GROUP_SIZE
            {
                continue;
            }
            if let Some(test) = MannWhitneyTest::new(&a.values, &b.values) {
                comparisons.push(PairwiseComparison {
                    group_a: a.label,
                    group_b: b.label,
                    u: test.u,
                    p_value: test.p_value,
                    significant: is_significant(test.p_value),
                });
            }
        }
    }
    comparisons
}

/// Runs the whole battery in its fixed order.
#[must_use]
pub fn run_battery(table: &CleanTable) -> Vec<GroupDifferenceResult> {
    GROUP_DIFFERENCE_BATTERY
        .iter()
        .map(|&spec| run(table, spec))
        .collect()
}
