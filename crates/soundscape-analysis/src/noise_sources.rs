//! Multi-select noise-source classification.
//!
//! The form's noise-sources question is free text holding any combination of
//! checkbox options and write-ins. Classification is keyword presence: each
//! `(keyword, category)` pair is evaluated independently as a
//! case-insensitive substring match, so one answer can count under zero,
//! one, or several categories. This is deliberately not a partition.

use soundscape_model::record::CleanTable;

/// Ordered `(match keyword, display category)` pairs.
pub const NOISE_SOURCE_KEYWORDS: [(&str, &str); 4] = [
    ("road traffic / mrt", "Road Traffic / MRT"),
    ("religious activities", "Religious Activities"),
    ("commercial events", "Commercial Events (Busking, Festivals)"),
    ("construction / renovation", "Construction / Renovation"),
];

/// Categories whose keyword appears anywhere in the answer text.
///
/// # Examples
///
/// ```
/// use soundscape_analysis::noise_sources::classify;
///
/// let matched = classify("Road Traffic / MRT, Religious Activities");
/// assert_eq!(matched, vec!["Road Traffic / MRT", "Religious Activities"]);
///
/// assert!(classify("my neighbour's dog").is_empty());
/// ```
#[must_use]
pub fn classify(answer: &str) -> Vec<&'static str> {
    let folded = answer.to_lowercase();
    NOISE_SOURCE_KEYWORDS
        .iter()
        .filter_map(|&(keyword, category)| folded.contains(keyword).then_some(category))
        .collect()
}

/// Respondent counts per category, in keyword order. A respondent counts
/// once per category they mention, so the counts can sum past the number of
/// respondents.
#[must_use]
pub fn counts(table: &CleanTable) -> Vec<(&'static str, usize)> {
    NOISE_SOURCE_KEYWORDS
        .iter()
        .map(|&(keyword, category)| {
            let count = table
                .iter()
                .filter(|record| record.noise_sources.to_lowercase().contains(keyword))
                .count();
            (category, count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use soundscape_model::{encoding::EncodingTables, record::Encoder, schema::RawRecord};

    fn raw_with_sources(sources: &str) -> RawRecord {
        RawRecord {
            site: "Waterloo Centre".into(),
            age_group: "18 – 25".into(),
            residency_duration: "1 - 5 years".into(),
            floor_level: "Low Rise (Floors 1–5)".into(),
            noise_rating: "5".into(),
            noise_sources: sources.into(),
            noise_spike: "Yes".into(),
            concentration: "Neutral".into(),
            air_quality: "5".into(),
            convenience: String::new(),
            community: "Yes".into(),
            quality_of_life: "Neutral".into(),
        }
    }

    #[test]
    fn test_multi_select_counts_every_match() {
        let matched = classify("road traffic / mrt and Commercial Events near the temple");
        assert_eq!(
            matched,
            vec!["Road Traffic / MRT", "Commercial Events (Busking, Festivals)"],
        );
    }

    #[test]
    fn test_case_insensitive_substring() {
        assert_eq!(classify("RELIGIOUS ACTIVITIES"), vec!["Religious Activities"]);
        // partial words do not match the full keyword
        assert!(classify("religious").is_empty());
    }

    #[test]
    fn test_counts_over_table() {
        let encoder = Encoder::new(EncodingTables::default());
        let table = encoder.encode_all(&[
            raw_with_sources("Road Traffic / MRT, Construction / Renovation"),
            raw_with_sources("Road Traffic / MRT"),
            raw_with_sources("nothing in particular"),
        ]);
        let counted = counts(&table);
        assert_eq!(counted[0], ("Road Traffic / MRT", 2));
        assert_eq!(counted[1], ("Religious Activities", 0));
        assert_eq!(counted[3], ("Construction / Renovation", 1));
    }

    #[test]
    fn test_empty_answer_matches_nothing() {
        assert!(classify("").is_empty());
    }
}
