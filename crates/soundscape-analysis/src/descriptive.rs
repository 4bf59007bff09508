//! Descriptive battery: the scene-setting summaries printed before any
//! inferential test.

use soundscape_model::{
    field::{CategoricalField, NumericField},
    record::CleanTable,
};
use soundscape_stats::descriptive::DescriptiveStats;

use crate::noise_sources;

/// Summary of one numeric field; `None` when every value is missing.
#[derive(Debug, Clone)]
pub struct FieldSummary {
    pub field: NumericField,
    pub stats: Option<DescriptiveStats>,
}

/// Respondent counts per category of one categorical field, in canonical
/// order, zeros included.
#[derive(Debug, Clone)]
pub struct CategoryDistribution {
    pub field: CategoricalField,
    pub counts: Vec<(&'static str, usize)>,
}

/// Mean noise rating per site, canonical site order; `None` for a site whose
/// ratings are all missing. Sites with no respondents are omitted.
#[derive(Debug, Clone)]
pub struct SiteNoiseMean {
    pub site: &'static str,
    pub mean: Option<f64>,
    pub n: usize,
}

/// Yes/no split of the spike question (never missing by construction).
#[derive(Debug, Clone, Copy)]
pub struct SpikeCounts {
    pub yes: usize,
    pub no: usize,
}

/// Everything the descriptive report section needs, computed in one pass
/// over the clean table.
#[derive(Debug, Clone)]
pub struct DescriptiveReport {
    pub total_respondents: usize,
    pub site_count: usize,
    pub summaries: Vec<FieldSummary>,
    pub site_noise_means: Vec<SiteNoiseMean>,
    pub distributions: Vec<CategoryDistribution>,
    pub noise_sources: Vec<(&'static str, usize)>,
    pub spike: SpikeCounts,
}

/// Numeric fields summarized in the report, in print order.
pub const SUMMARY_FIELDS: [NumericField; 4] = [
    NumericField::NoiseRating,
    NumericField::AirQuality,
    NumericField::Concentration,
    NumericField::QualityOfLife,
];

/// Categorical distributions shown in the report, in print order.
pub const DISTRIBUTION_FIELDS: [CategoricalField; 5] = [
    CategoricalField::AgeGroup,
    CategoricalField::ResidencyDuration,
    CategoricalField::FloorLevel,
    CategoricalField::Site,
    CategoricalField::QualityOfLifeRaw,
];

/// Builds the descriptive report.
#[must_use]
pub fn build(table: &CleanTable) -> DescriptiveReport {
    let summaries = SUMMARY_FIELDS
        .iter()
        .map(|&field| FieldSummary {
            field,
            stats: DescriptiveStats::new(table.iter().filter_map(|r| field.value(r))),
        })
        .collect();

    let site_noise_means = CategoricalField::Site
        .category_order()
        .iter()
        .filter_map(|&site| {
            let records = table
                .iter()
                .filter(|r| r.site == site)
                .collect::<Vec<_>>();
            if records.is_empty() {
                return None;
            }
            let ratings = records
                .iter()
                .filter_map(|r| NumericField::NoiseRating.value(r))
                .collect::<Vec<_>>();
            #[expect(clippy::cast_precision_loss)]
            let mean = (!ratings.is_empty())
                .then(|| ratings.iter().sum::<f64>() / ratings.len() as f64);
            Some(SiteNoiseMean {
                site,
                mean,
                n: records.len(),
            })
        })
        .collect();

    let distributions = DISTRIBUTION_FIELDS
        .iter()
        .map(|&field| CategoryDistribution {
            field,
            counts: field
                .category_order()
                .iter()
                .map(|&label| {
                    let count = table.iter().filter(|r| field.value(r) == label).count();
                    (label, count)
                })
                .collect(),
        })
        .collect();

    let spike_yes = table.iter().filter(|r| r.noise_spike == 1).count();

    DescriptiveReport {
        total_respondents: table.len(),
        site_count: table.site_count(),
        summaries,
        site_noise_means,
        distributions,
        noise_sources: noise_sources::counts(table),
        spike: SpikeCounts {
            yes: spike_yes,
            no: table.len() - spike_yes,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soundscape_model::{encoding::EncodingTables, record::Encoder, schema::RawRecord};

    fn raw(site: &str, noise: &str, spike: &str, qol: &str) -> RawRecord {
        RawRecord {
            site: site.into(),
            age_group: "18 – 25".into(),
            residency_duration: "1 - 5 years".into(),
            floor_level: "Low Rise (Floors 1–5)".into(),
            noise_rating: noise.into(),
            noise_sources: "Road Traffic / MRT".into(),
            noise_spike: spike.into(),
            concentration: "Neutral".into(),
            air_quality: "6".into(),
            convenience: String::new(),
            community: "Yes".into(),
            quality_of_life: qol.into(),
        }
    }

    #[test]
    fn test_report_counts_and_means() {
        let encoder = Encoder::new(EncodingTables::default());
        let table = encoder.encode_all(&[
            raw("Waterloo Centre", "4", "Yes", "Neutral"),
            raw("Waterloo Centre", "6", "No", "Neutral"),
            raw("Albert Centre", "8", "Yes", "Reduces slightly"),
        ]);
        let report = build(&table);

        assert_eq!(report.total_respondents, 3);
        assert_eq!(report.site_count, 2);
        assert_eq!(report.spike.yes, 2);
        assert_eq!(report.spike.no, 1);

        let noise = &report.summaries[0];
        assert_eq!(noise.stats.unwrap().count, 3);
        assert_eq!(noise.stats.unwrap().mean, 6.0);

        assert_eq!(report.site_noise_means.len(), 2);
        assert_eq!(report.site_noise_means[0].site, "Waterloo Centre");
        assert_eq!(report.site_noise_means[0].mean, Some(5.0));
        assert_eq!(report.site_noise_means[0].n, 2);
    }

    #[test]
    fn test_distribution_includes_zero_categories() {
        let encoder = Encoder::new(EncodingTables::default());
        let table = encoder.encode_all(&[raw("Waterloo Centre", "4", "Yes", "Neutral")]);
        let report = build(&table);

        let qol = report
            .distributions
            .iter()
            .find(|d| d.field == CategoricalField::QualityOfLifeRaw)
            .unwrap();
        assert_eq!(qol.counts.len(), 4);
        assert_eq!(qol.counts[0], ("Improves significantly", 0));
        assert_eq!(qol.counts[1], ("Neutral", 1));
    }

    #[test]
    fn test_all_missing_field_has_no_stats() {
        let encoder = Encoder::new(EncodingTables::default());
        let table = encoder.encode_all(&[
            raw("Waterloo Centre", "", "Yes", "Neutral"),
            raw("Waterloo Centre", "loud", "Yes", "Neutral"),
        ]);
        let report = build(&table);
        assert!(report.summaries[0].stats.is_none());
        // the per-site mean is also undefined, but the site row still shows
        assert_eq!(report.site_noise_means[0].mean, None);
        assert_eq!(report.site_noise_means[0].n, 2);
    }
}
