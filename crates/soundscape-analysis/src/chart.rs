//! Chart-input data: the exact numbers a renderer would plot.
//!
//! Rendering is outside this crate; the contract toward it is one
//! serializable structure per analysis carrying the plotted inputs —
//! scatter points with site labels, per-group value lists, contingency
//! cells, category counts — keyed by the analysis' stable chart key.

use serde::Serialize;
use soundscape_model::{field::CategoricalField, record::CleanTable};

use crate::{
    association::AssociationResult,
    burden::{BURDEN_FACTORS, BurdenCorrelation, BurdenFactor},
    correlation::{CorrelationOutcome, CorrelationResult, rank_by_magnitude},
    descriptive::DescriptiveReport,
    group_diff::{GroupDifferenceResult, OmnibusOutcome},
    selection::{GroupObservations, PairedObservation},
};

/// Scatter-plot inputs for one correlation analysis.
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationChartData {
    pub key: &'static str,
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub points: Vec<PairedObservation>,
    pub rho: Option<f64>,
    pub p_value: Option<f64>,
    pub effective_n: usize,
}

/// Box-plot inputs for one group-difference analysis.
#[derive(Debug, Clone, Serialize)]
pub struct GroupChartData {
    pub key: &'static str,
    pub title: &'static str,
    pub outcome_label: &'static str,
    pub groups: Vec<GroupObservations>,
    pub h: Option<f64>,
    pub p_value: Option<f64>,
}

/// Heatmap inputs for one association analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AssociationChartData {
    pub key: &'static str,
    pub title: &'static str,
    pub row_labels: Vec<String>,
    pub col_labels: Vec<String>,
    pub cells: Vec<Vec<u64>>,
    pub p_value: Option<f64>,
}

/// Bar/pie inputs for one categorical distribution.
#[derive(Debug, Clone, Serialize)]
pub struct DistributionChartData {
    pub key: &'static str,
    pub title: String,
    pub categories: Vec<&'static str>,
    pub counts: Vec<usize>,
}

/// Horizontal-bar inputs for a rho-magnitude ranking.
#[derive(Debug, Clone, Serialize)]
pub struct RankingChartData {
    pub key: &'static str,
    pub title: &'static str,
    pub entries: Vec<RankedCoefficient>,
}

/// One bar of a ranking chart.
#[derive(Debug, Clone, Serialize)]
pub struct RankedCoefficient {
    pub label: String,
    pub rho: f64,
    pub p_value: f64,
    pub significant: bool,
}

/// Bar-plus-dots inputs for the burden exposure comparison.
#[derive(Debug, Clone, Serialize)]
pub struct BurdenChartData {
    pub key: &'static str,
    pub title: &'static str,
    pub factors: Vec<BurdenFactorValues>,
}

/// One factor's burden scores across all respondents.
#[derive(Debug, Clone, Serialize)]
pub struct BurdenFactorValues {
    pub label: &'static str,
    pub mean: Option<f64>,
    pub values: Vec<f64>,
}

#[must_use]
pub fn correlation_chart(result: &CorrelationResult) -> CorrelationChartData {
    let (rho, p_value) = match result.outcome {
        CorrelationOutcome::Computed { rho, p_value, .. } => (Some(rho), Some(p_value)),
        CorrelationOutcome::InsufficientData => (None, None),
    };
    CorrelationChartData {
        key: result.spec.key,
        title: result.spec.title,
        x_label: result.spec.x.label(),
        y_label: result.spec.y.label(),
        points: result.observations.clone(),
        rho,
        p_value,
        effective_n: result.effective_n,
    }
}

#[must_use]
pub fn group_chart(result: &GroupDifferenceResult) -> GroupChartData {
    let (h, p_value) = match result.omnibus {
        OmnibusOutcome::Computed { h, p_value, .. } => (Some(h), Some(p_value)),
        OmnibusOutcome::InsufficientData => (None, None),
    };
    GroupChartData {
        key: result.spec.key,
        title: result.spec.title,
        outcome_label: result.spec.outcome.label(),
        groups: result.groups.clone(),
        h,
        p_value,
    }
}

#[must_use]
pub fn association_chart(result: &AssociationResult) -> AssociationChartData {
    AssociationChartData {
        key: result.spec.key,
        title: result.spec.title,
        row_labels: result.table.row_labels().to_vec(),
        col_labels: result.table.col_labels().to_vec(),
        cells: result.table.counts().to_vec(),
        p_value: result.outcome.p_value(),
    }
}

/// The rho-magnitude comparison over the whole correlation battery.
#[must_use]
pub fn magnitude_ranking_chart(results: &[CorrelationResult]) -> RankingChartData {
    let entries = rank_by_magnitude(results)
        .into_iter()
        .filter_map(|result| {
            let CorrelationOutcome::Computed { rho, p_value, interpretation } = result.outcome
            else {
                return None;
            };
            Some(RankedCoefficient {
                label: result.spec.title.to_owned(),
                rho,
                p_value,
                significant: interpretation.significant,
            })
        })
        .collect();
    RankingChartData {
        key: "A_rho_magnitude_comparison",
        title: "Correlation Magnitude Comparison",
        entries,
    }
}

/// One distribution chart per descriptive category block, plus the
/// multi-select noise sources and the spike split.
#[must_use]
pub fn distribution_charts(report: &DescriptiveReport) -> Vec<DistributionChartData> {
    let mut charts = report
        .distributions
        .iter()
        .map(|distribution| {
            let (key, title) = distribution_chart_identity(distribution.field);
            DistributionChartData {
                key,
                title: format!("{title} (n = {})", report.total_respondents),
                categories: distribution.counts.iter().map(|&(label, _)| label).collect(),
                counts: distribution.counts.iter().map(|&(_, count)| count).collect(),
            }
        })
        .collect::<Vec<_>>();

    charts.push(DistributionChartData {
        key: "5_noise_sources_Q5",
        title: format!(
            "Main Noise Sources Identified (Q5) (multi-select, n = {})",
            report.total_respondents,
        ),
        categories: report.noise_sources.iter().map(|&(label, _)| label).collect(),
        counts: report.noise_sources.iter().map(|&(_, count)| count).collect(),
    });
    charts.push(DistributionChartData {
        key: "B_noise_spike_Q6",
        title: format!(
            "Does Noise Spike at Specific Times? (n = {})",
            report.total_respondents,
        ),
        categories: vec!["Yes — noise spikes at specific times", "No — constant / baseline"],
        counts: vec![report.spike.yes, report.spike.no],
    });
    charts
}

fn distribution_chart_identity(field: CategoricalField) -> (&'static str, &'static str) {
    match field {
        CategoricalField::AgeGroup => ("1_age_distribution", "Age Group Distribution"),
        CategoricalField::ResidencyDuration => {
            ("2_residency_duration", "Residency Duration of Respondents")
        }
        CategoricalField::FloorLevel => ("3_floor_distribution", "Floor Level Distribution"),
        CategoricalField::Site => ("4_site_distribution", "Site Distribution"),
        CategoricalField::QualityOfLifeRaw => {
            ("6_QoL_Q11", "Overall Quality of Life Perception (Q11)")
        }
    }
}

/// Proof 1 inputs: every respondent's score on every burden factor.
#[must_use]
pub fn burden_comparison_chart(table: &CleanTable) -> BurdenChartData {
    let factors = BURDEN_FACTORS
        .iter()
        .map(|&factor| {
            let values = table
                .iter()
                .filter_map(|record| factor.value(record))
                .collect::<Vec<_>>();
            #[expect(clippy::cast_precision_loss)]
            let mean = (!values.is_empty())
                .then(|| values.iter().sum::<f64>() / values.len() as f64);
            BurdenFactorValues {
                label: factor.title(),
                mean,
                values,
            }
        })
        .collect();
    BurdenChartData {
        key: "proof_1_raw_burden_comparison",
        title: "Average Burden per Factor",
        factors,
    }
}

/// Proof 2 inputs: burden-vs-QoL coefficients, strongest first.
#[must_use]
pub fn burden_ranking_chart(correlations: &[BurdenCorrelation]) -> RankingChartData {
    let mut entries = correlations
        .iter()
        .filter_map(|c| {
            Some(RankedCoefficient {
                label: burden_short_label(c.factor).to_owned(),
                rho: c.rho?,
                p_value: c.p_value?,
                significant: c.significant(),
            })
        })
        .collect::<Vec<_>>();
    entries.sort_by(|a, b| b.rho.total_cmp(&a.rho));
    RankingChartData {
        key: "proof_2_correlation_ranking",
        title: "Which Factor Damages QoL the Most?",
        entries,
    }
}

fn burden_short_label(factor: BurdenFactor) -> &'static str {
    match factor {
        BurdenFactor::Noise => "Noise Burden",
        BurdenFactor::PoorAir => "Air Quality Burden",
        BurdenFactor::LackOfCommunity => "Lack of Community",
    }
}
