//! Burden analysis: the three-part argument that noise is the dominant
//! quality-of-life factor.
//!
//! Each candidate factor is rescaled onto a common 0–10 "burden" axis where
//! higher is worse: noise is already oriented that way, air quality and
//! community connection are inverted. The three proofs are then
//!
//! 1. raw exposure — mean burden per factor and the share of respondents
//!    reporting burden at or above 7
//! 2. correlation — which burden tracks quality-of-life damage most
//!    strongly (Spearman against the QoL code, higher = worse)
//! 3. mechanism — noise rating against concentration/rest impact, plus the
//!    respondents who report high rest impact

use soundscape_model::{field::NumericField, record::{CleanRecord, CleanTable}};
use soundscape_stats::spearman::SpearmanTest;

use crate::interpretation::is_significant;

/// Burden at or above this counts as high exposure.
pub const HIGH_BURDEN_THRESHOLD: f64 = 7.0;

/// Concentration impact at or above this counts as high rest impact
/// ("Highly" / "Severely").
pub const SEVERE_CONCENTRATION_CODE: u32 = 5;

/// A candidate quality-of-life factor on the common burden scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurdenFactor {
    Noise,
    PoorAir,
    LackOfCommunity,
}

/// The factors in presentation order.
pub const BURDEN_FACTORS: [BurdenFactor; 3] = [
    BurdenFactor::Noise,
    BurdenFactor::PoorAir,
    BurdenFactor::LackOfCommunity,
];

impl BurdenFactor {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Noise => "Noise (Q4)",
            Self::PoorAir => "Poor Air Quality (inverted Q8)",
            Self::LackOfCommunity => "Lack of Community (inverted Q10)",
        }
    }

    /// The factor's burden score for one record, 0–10, higher = worse.
    ///
    /// - noise: the Q4 rating unchanged
    /// - poor air: `11 - Q8` (Q8 is 1–10, higher = better)
    /// - lack of community: `(2 - Q10) / 2 * 10` (Q10 is 0–2, higher = more
    ///   connected)
    #[must_use]
    pub fn value(self, record: &CleanRecord) -> Option<f64> {
        match self {
            Self::Noise => NumericField::NoiseRating.value(record),
            Self::PoorAir => NumericField::AirQuality.value(record).map(|q8| 11.0 - q8),
            Self::LackOfCommunity => NumericField::Community
                .value(record)
                .map(|q10| (2.0 - q10) / 2.0 * 10.0),
        }
    }
}

/// Proof 1 row: exposure summary for one factor.
#[derive(Debug, Clone, Copy)]
pub struct BurdenSummary {
    pub factor: BurdenFactor,
    /// Mean burden over respondents with the factor present; `None` when
    /// every value is missing.
    pub mean: Option<f64>,
    /// Respondents with burden >= [`HIGH_BURDEN_THRESHOLD`].
    pub high_count: usize,
    /// Respondents contributing to this factor.
    pub n: usize,
}

/// Proof 2 row: Spearman of one burden against the QoL code.
#[derive(Debug, Clone, Copy)]
pub struct BurdenCorrelation {
    pub factor: BurdenFactor,
    pub rho: Option<f64>,
    pub p_value: Option<f64>,
    pub effective_n: usize,
}

impl BurdenCorrelation {
    #[must_use]
    pub fn significant(&self) -> bool {
        self.p_value.is_some_and(is_significant)
    }
}

/// Proof 3 listing row: one respondent reporting high rest impact.
#[derive(Debug, Clone)]
pub struct SevereRestRow {
    pub respondent_id: u32,
    pub site: String,
    pub noise_rating: Option<u32>,
    pub concentration_raw: String,
    pub quality_of_life_raw: String,
}

/// Proof 1: exposure summaries in factor order.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn summaries(table: &CleanTable) -> Vec<BurdenSummary> {
    BURDEN_FACTORS
        .iter()
        .map(|&factor| {
            let values = table
                .iter()
                .filter_map(|record| factor.value(record))
                .collect::<Vec<_>>();
            BurdenSummary {
                factor,
                mean: (!values.is_empty())
                    .then(|| values.iter().sum::<f64>() / values.len() as f64),
                high_count: values
                    .iter()
                    .filter(|&&v| v >= HIGH_BURDEN_THRESHOLD)
                    .count(),
                n: values.len(),
            }
        })
        .collect()
}

/// Proof 2: burden-vs-QoL correlations in factor order.
///
/// QoL is coded 1 = improves … 4 = reduces, so a positive rho reads as "more
/// burden, more QoL damage".
#[must_use]
pub fn qol_correlations(table: &CleanTable) -> Vec<BurdenCorrelation> {
    BURDEN_FACTORS
        .iter()
        .map(|&factor| {
            let pairs = table
                .iter()
                .filter_map(|record| {
                    let burden = factor.value(record)?;
                    let qol = NumericField::QualityOfLife.value(record)?;
                    Some((burden, qol))
                })
                .collect::<Vec<_>>();
            let xs = pairs.iter().map(|&(x, _)| x).collect::<Vec<_>>();
            let ys = pairs.iter().map(|&(_, y)| y).collect::<Vec<_>>();
            match SpearmanTest::new(&xs, &ys) {
                Some(test) => BurdenCorrelation {
                    factor,
                    rho: Some(test.rho),
                    p_value: Some(test.p_value),
                    effective_n: test.n,
                },
                None => BurdenCorrelation {
                    factor,
                    rho: None,
                    p_value: None,
                    effective_n: pairs.len(),
                },
            }
        })
        .collect()
}

/// Correlations sorted by rho descending (undefined ones last) — the
/// ranking chart order.
#[must_use]
pub fn rank_correlations(correlations: &[BurdenCorrelation]) -> Vec<BurdenCorrelation> {
    let mut ranked = correlations.to_vec();
    ranked.sort_by(|a, b| {
        b.rho
            .unwrap_or(f64::NEG_INFINITY)
            .total_cmp(&a.rho.unwrap_or(f64::NEG_INFINITY))
    });
    ranked
}

/// Proof 3 listing: respondents whose concentration impact is at or above
/// [`SEVERE_CONCENTRATION_CODE`], in respondent order.
#[must_use]
pub fn severe_rest_respondents(table: &CleanTable) -> Vec<SevereRestRow> {
    table
        .iter()
        .filter(|record| {
            record
                .concentration
                .is_some_and(|code| code >= SEVERE_CONCENTRATION_CODE)
        })
        .map(|record| SevereRestRow {
            respondent_id: record.respondent_id,
            site: record.site.clone(),
            noise_rating: record.noise_rating,
            concentration_raw: record.concentration_raw.clone(),
            quality_of_life_raw: record.quality_of_life_raw.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use soundscape_model::{encoding::EncodingTables, record::Encoder, schema::RawRecord};

    fn raw(noise: &str, air: &str, community: &str, concentration: &str, qol: &str) -> RawRecord {
        RawRecord {
            site: "Bras Basah Complex".into(),
            age_group: "18 – 25".into(),
            residency_duration: "1 - 5 years".into(),
            floor_level: "Low Rise (Floors 1–5)".into(),
            noise_rating: noise.into(),
            noise_sources: String::new(),
            noise_spike: "Yes".into(),
            concentration: concentration.into(),
            air_quality: air.into(),
            convenience: String::new(),
            community: community.into(),
            quality_of_life: qol.into(),
        }
    }

    fn encode(raws: &[RawRecord]) -> CleanTable {
        Encoder::new(EncodingTables::default()).encode_all(raws)
    }

    #[test]
    fn test_burden_transforms() {
        let table = encode(&[raw("8", "3", "No", "Neutral", "Neutral")]);
        let record = &table.records()[0];
        assert_eq!(BurdenFactor::Noise.value(record), Some(8.0));
        assert_eq!(BurdenFactor::PoorAir.value(record), Some(8.0));
        assert_eq!(BurdenFactor::LackOfCommunity.value(record), Some(10.0));
    }

    #[test]
    fn test_community_midpoint_burden() {
        let table = encode(&[raw("5", "5", "Maybe", "Neutral", "Neutral")]);
        let record = &table.records()[0];
        assert_eq!(BurdenFactor::LackOfCommunity.value(record), Some(5.0));
    }

    #[test]
    fn test_summaries_high_share() {
        let table = encode(&[
            raw("8", "9", "Yes", "Neutral", "Neutral"),
            raw("7", "8", "Yes", "Neutral", "Neutral"),
            raw("4", "7", "Yes", "Neutral", "Neutral"),
        ]);
        let rows = summaries(&table);
        // noise burdens: 8, 7, 4 -> two at or above 7
        assert_eq!(rows[0].factor, BurdenFactor::Noise);
        assert_eq!(rows[0].high_count, 2);
        assert_eq!(rows[0].n, 3);
        // air burdens: 2, 3, 4 -> none high
        assert_eq!(rows[1].high_count, 0);
    }

    #[test]
    fn test_qol_correlation_orientation() {
        // higher noise goes with worse QoL -> positive rho
        let table = encode(&[
            raw("2", "5", "Yes", "Neutral", "Improves significantly"),
            raw("4", "5", "Yes", "Neutral", "Neutral"),
            raw("7", "5", "Yes", "Neutral", "Reduces slightly"),
            raw("9", "5", "Yes", "Neutral", "Reduces significantly"),
        ]);
        let correlations = qol_correlations(&table);
        let noise = &correlations[0];
        assert!(noise.rho.unwrap() > 0.99);
        // air quality constant -> undefined, reported as such
        assert_eq!(correlations[1].rho, None);

        let ranked = rank_correlations(&correlations);
        assert_eq!(ranked[0].factor, BurdenFactor::Noise);
        assert_eq!(ranked[2].rho, None);
    }

    #[test]
    fn test_severe_rest_listing() {
        let table = encode(&[
            raw("9", "5", "Yes", "Severely affects rest quality", "Reduces significantly"),
            raw("5", "5", "Yes", "Neutral", "Neutral"),
            raw("8", "5", "Yes", "Highly distracting", "Reduces slightly"),
        ]);
        let rows = severe_rest_respondents(&table);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].respondent_id, 1);
        assert_eq!(rows[1].concentration_raw, "Highly distracting");
    }
}
