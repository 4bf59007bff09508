//! Spearman correlation analyses over the clean table.

use soundscape_model::{field::NumericField, record::CleanTable};
use soundscape_stats::spearman::SpearmanTest;

use crate::{
    interpretation::Interpretation,
    selection::{PairedObservation, paired_observations},
};

/// Minimum pairs below which the coefficient is reported as undefined.
pub const MIN_PAIRS: usize = 3;

/// One named correlation in the battery.
#[derive(Debug, Clone, Copy)]
pub struct CorrelationSpec {
    /// Stable key used for chart-data file names.
    pub key: &'static str,
    /// Narrative title as printed in the report.
    pub title: &'static str,
    pub x: NumericField,
    pub y: NumericField,
}

/// The fixed correlation battery: the causal-chain pairs, the supporting and
/// co-location pairs, and the community pair.
pub const CORRELATION_BATTERY: [CorrelationSpec; 5] = [
    CorrelationSpec {
        key: "spearman_Q4_Q7",
        title: "Chain 1→2: Noise Level vs Concentration Impact",
        x: NumericField::NoiseRating,
        y: NumericField::Concentration,
    },
    CorrelationSpec {
        key: "spearman_Q4_Q11",
        title: "Chain 2→3: Noise Level vs Quality of Life",
        x: NumericField::NoiseRating,
        y: NumericField::QualityOfLife,
    },
    CorrelationSpec {
        key: "spearman_Q8_Q11",
        title: "Supporting: Air Quality vs Quality of Life",
        x: NumericField::AirQuality,
        y: NumericField::QualityOfLife,
    },
    CorrelationSpec {
        key: "spearman_Q4_Q8",
        title: "Co-location: Noise Level vs Air Quality",
        x: NumericField::NoiseRating,
        y: NumericField::AirQuality,
    },
    CorrelationSpec {
        key: "spearman_Q10_Q11",
        title: "Community: Community Connection vs Quality of Life",
        x: NumericField::Community,
        y: NumericField::QualityOfLife,
    },
];

/// Computed coefficient, or the explicit insufficient-data outcome.
#[derive(Debug, Clone, Copy)]
pub enum CorrelationOutcome {
    Computed {
        rho: f64,
        p_value: f64,
        interpretation: Interpretation,
    },
    /// Fewer than [`MIN_PAIRS`] usable pairs, or a constant field left the
    /// coefficient undefined.
    InsufficientData,
}

/// Result of one correlation analysis, carrying the exact observations a
/// scatter plot of it would draw.
#[derive(Debug, Clone)]
pub struct CorrelationResult {
    pub spec: CorrelationSpec,
    pub effective_n: usize,
    pub outcome: CorrelationOutcome,
    pub observations: Vec<PairedObservation>,
}

impl CorrelationResult {
    /// The coefficient, when one was computed.
    #[must_use]
    pub fn rho(&self) -> Option<f64> {
        match self.outcome {
            CorrelationOutcome::Computed { rho, .. } => Some(rho),
            CorrelationOutcome::InsufficientData => None,
        }
    }
}

/// Runs one correlation analysis.
///
/// Records missing either field are excluded; the survivor count is the
/// effective sample size. With fewer than [`MIN_PAIRS`] survivors, or a
/// degenerate (constant) field, the outcome is
/// [`CorrelationOutcome::InsufficientData`] rather than a numeric artifact.
#[must_use]
pub fn run(table: &CleanTable, spec: CorrelationSpec) -> CorrelationResult {
    let observations = paired_observations(table, spec.x, spec.y);
    let effective_n = observations.len();

    let xs = observations.iter().map(|o| o.x).collect::<Vec<_>>();
    let ys = observations.iter().map(|o| o.y).collect::<Vec<_>>();

    let outcome = match SpearmanTest::new(&xs, &ys) {
        Some(test) => CorrelationOutcome::Computed {
            rho: test.rho,
            p_value: test.p_value,
            interpretation: Interpretation::for_correlation(test.rho, test.p_value, effective_n),
        },
        None => CorrelationOutcome::InsufficientData,
    };

    CorrelationResult {
        spec,
        effective_n,
        outcome,
        observations,
    }
}

/// Runs the whole battery in its fixed order.
#[must_use]
pub fn run_battery(table: &CleanTable) -> Vec<CorrelationResult> {
    CORRELATION_BATTERY
        .iter()
        .map(|&spec| run(table, spec))
        .collect()
}

/// Computed results sorted by |rho| descending — the "which factor wins"
/// ranking. Insufficient-data results are left out.
#[must_use]
pub fn rank_by_magnitude(results: &[CorrelationResult]) -> Vec<&CorrelationResult> {
    let mut ranked = results
        .iter()
        .filter(|r| r.rho().is_some())
        .collect::<Vec<_>>();
    ranked.sort_by(|a, b| {
        let ma = a.rho().unwrap_or(0.0).abs();
        let mb = b.rho().unwrap_or(0.0).abs();
        mb.total_cmp(&ma)
    });
    ranked
}
