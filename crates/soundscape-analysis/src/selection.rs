//! Row selection with missing-value exclusion.
//!
//! Every test starts the same way: pick the columns it needs, keep only the
//! records where all of them are present, and report how many survived as
//! the effective sample size. These helpers centralize that so no analysis
//! hand-rolls its own dropna.

use serde::Serialize;
use soundscape_model::{
    field::{CategoricalField, NumericField, OrdinalField},
    record::CleanTable,
};

/// One record's contribution to a paired (correlation) analysis, keeping the
/// site so scatter charts can color by it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairedObservation {
    pub respondent_id: u32,
    pub x: f64,
    pub y: f64,
    pub site: String,
}

/// Selects all records where both numeric fields are present.
#[must_use]
pub fn paired_observations(
    table: &CleanTable,
    x: NumericField,
    y: NumericField,
) -> Vec<PairedObservation> {
    table
        .iter()
        .filter_map(|record| {
            let x = x.value(record)?;
            let y = y.value(record)?;
            Some(PairedObservation {
                respondent_id: record.respondent_id,
                x,
                y,
                site: record.site.clone(),
            })
        })
        .collect()
}

/// Outcome values of one category of a grouping field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupObservations {
    pub label: &'static str,
    pub values: Vec<f64>,
}

/// Builds one group per category of `grouping`, in the field's canonical
/// order, holding the outcome values of records where both fields are
/// usable. Empty groups are dropped.
///
/// Records whose category is not one of the canonical labels are excluded,
/// the same way an unmapped label is missing data anywhere else.
#[must_use]
pub fn group_observations(
    table: &CleanTable,
    grouping: CategoricalField,
    outcome: NumericField,
) -> Vec<GroupObservations> {
    grouping
        .category_order()
        .iter()
        .map(|&label| GroupObservations {
            label,
            values: table
                .iter()
                .filter(|record| grouping.value(record) == label)
                .filter_map(|record| outcome.value(record))
                .collect(),
        })
        .filter(|group| !group.values.is_empty())
        .collect()
}

/// Selects display-label pairs for a contingency analysis: records where
/// both ordinal fields are present, mapped onto their code labels.
#[must_use]
pub fn ordinal_label_pairs(
    table: &CleanTable,
    row: OrdinalField,
    col: OrdinalField,
) -> Vec<(&'static str, &'static str)> {
    table
        .iter()
        .filter_map(|record| {
            let row_code = record_code(record, row)?;
            let col_code = record_code(record, col)?;
            Some((row.label_for(row_code)?, col.label_for(col_code)?))
        })
        .collect()
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn record_code(
    record: &soundscape_model::record::CleanRecord,
    field: OrdinalField,
) -> Option<u32> {
    field.numeric().value(record).map(|v| v as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soundscape_model::{encoding::EncodingTables, record::Encoder, schema::RawRecord};

    fn raw(site: &str, noise: &str, air: &str, qol: &str) -> RawRecord {
        RawRecord {
            site: site.into(),
            age_group: "18 – 25".into(),
            residency_duration: "1 - 5 years".into(),
            floor_level: "Low Rise (Floors 1–5)".into(),
            noise_rating: noise.into(),
            noise_sources: String::new(),
            noise_spike: "Yes".into(),
            concentration: "Neutral".into(),
            air_quality: air.into(),
            convenience: String::new(),
            community: "Yes".into(),
            quality_of_life: qol.into(),
        }
    }

    fn sample_table() -> CleanTable {
        let encoder = Encoder::new(EncodingTables::default());
        encoder.encode_all(&[
            raw("Waterloo Centre", "8", "4", "Reduces slightly"),
            raw("Waterloo Centre", "", "5", "Neutral"),
            raw("Albert Centre", "3", "x", "Improves significantly"),
            raw("Albert Centre", "5", "7", ""),
        ])
    }

    #[test]
    fn test_paired_selection_drops_missing() {
        let table = sample_table();
        let pairs = paired_observations(&table, NumericField::NoiseRating, NumericField::AirQuality);
        // record 2 misses noise, record 3 misses air
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].respondent_id, 1);
        assert_eq!(pairs[1].respondent_id, 4);
    }

    #[test]
    fn test_group_selection_canonical_order() {
        let table = sample_table();
        let groups = group_observations(&table, CategoricalField::Site, NumericField::NoiseRating);
        // only two sites occur; empty sites are dropped, order preserved
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "Waterloo Centre");
        assert_eq!(groups[0].values, vec![8.0]);
        assert_eq!(groups[1].label, "Albert Centre");
        assert_eq!(groups[1].values, vec![3.0, 5.0]);
    }

    #[test]
    fn test_ordinal_pairs_use_display_labels() {
        let table = sample_table();
        let pairs = ordinal_label_pairs(&table, OrdinalField::Community, OrdinalField::QualityOfLife);
        // record 4 has no QoL answer
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0], ("Yes", "Reduces sl."));
        assert_eq!(pairs[2], ("Yes", "Improves sig."));
    }
}
