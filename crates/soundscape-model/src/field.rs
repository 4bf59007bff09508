//! Typed field accessors and canonical category orders.
//!
//! The analysis battery names columns through these enums instead of raw
//! strings, so selection, grouping, and labeling stay consistent across
//! every test and every chart-data export.

use std::fmt;

use crate::record::CleanRecord;

/// Fixed presentation order of the four study sites.
pub const SITE_ORDER: [&str; 4] = [
    "Waterloo Centre",
    "Cheng Yan Court",
    "Albert Centre",
    "Bras Basah Complex",
];

/// Fixed presentation order of the floor ranges.
pub const FLOOR_ORDER: [&str; 3] = [
    "Low Rise (Floors 1–5)",
    "Mid Rise (Floors 6–10)",
    "High Rise (Floors 11+)",
];

/// A numeric (ordinal or direct-scale) column of the clean table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    AgeNumeric,
    ResidencyNumeric,
    FloorNumeric,
    NoiseRating,
    NoiseSpike,
    Concentration,
    AirQuality,
    Community,
    QualityOfLife,
}

impl NumericField {
    /// Clean-table column name.
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Self::AgeNumeric => "age_numeric",
            Self::ResidencyNumeric => "residency_numeric",
            Self::FloorNumeric => "floor_numeric",
            Self::NoiseRating => "Q4_noise_rating",
            Self::NoiseSpike => "Q6_noise_spike",
            Self::Concentration => "Q7_concentration",
            Self::AirQuality => "Q8_air_quality",
            Self::Community => "Q10_community",
            Self::QualityOfLife => "Q11_QoL",
        }
    }

    /// Human-readable axis label, scale endpoints included.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::AgeNumeric => "Age Group (1=18–25 → 4=60+)",
            Self::ResidencyNumeric => "Residency Duration (1=<1yr → 4=>10yrs)",
            Self::FloorNumeric => "Floor Level (1=Low → 3=High)",
            Self::NoiseRating => "Q4 Noise Rating (1=Quiet → 10=Loud)",
            Self::NoiseSpike => "Q6 Noise Spike (0=No, 1=Yes)",
            Self::Concentration => "Q7 Concentration Impact (1=Not at all → 6=Severely affects rest)",
            Self::AirQuality => "Q8 Air Quality (1=Poor → 10=Excellent)",
            Self::Community => "Q10 Community Connection (0=No → 2=Yes)",
            Self::QualityOfLife => "Q11 Quality of Life (1=Improves significantly → 4=Reduces significantly)",
        }
    }

    /// The field's value on one record, as a float for the statistics.
    #[must_use]
    pub fn value(self, record: &CleanRecord) -> Option<f64> {
        let code = match self {
            Self::AgeNumeric => record.age_numeric,
            Self::ResidencyNumeric => record.residency_numeric,
            Self::FloorNumeric => record.floor_numeric,
            Self::NoiseRating => record.noise_rating,
            Self::NoiseSpike => Some(u32::from(record.noise_spike)),
            Self::Concentration => record.concentration,
            Self::AirQuality => record.air_quality,
            Self::Community => record.community,
            Self::QualityOfLife => record.quality_of_life,
        };
        code.map(f64::from)
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// An ordinal column with display labels per code, used by the association
/// tests and their printed contingency tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrdinalField {
    AgeGroup,
    ResidencyDuration,
    Concentration,
    Community,
    QualityOfLife,
}

impl OrdinalField {
    /// The numeric column the codes come from.
    #[must_use]
    pub fn numeric(self) -> NumericField {
        match self {
            Self::AgeGroup => NumericField::AgeNumeric,
            Self::ResidencyDuration => NumericField::ResidencyNumeric,
            Self::Concentration => NumericField::Concentration,
            Self::Community => NumericField::Community,
            Self::QualityOfLife => NumericField::QualityOfLife,
        }
    }

    /// Short display title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::AgeGroup => "Age Group",
            Self::ResidencyDuration => "Residency Duration",
            Self::Concentration => "Q7 Concentration Impact",
            Self::Community => "Q10 Community",
            Self::QualityOfLife => "Q11 QoL",
        }
    }

    /// `(code, display label)` pairs in canonical code order.
    #[must_use]
    pub fn code_labels(self) -> &'static [(u32, &'static str)] {
        match self {
            Self::AgeGroup => &[(1, "18–25"), (2, "26–40"), (3, "41–59"), (4, "60+")],
            Self::ResidencyDuration => {
                &[(1, "<1 yr"), (2, "1–5 yrs"), (3, "5–10 yrs"), (4, ">10 yrs")]
            }
            Self::Concentration => &[
                (1, "Not at all"),
                (2, "Neutral"),
                (3, "Slightly"),
                (4, "Moderately"),
                (5, "Highly"),
                (6, "Severely"),
            ],
            Self::Community => &[(0, "No"), (1, "Maybe/Neutral"), (2, "Yes")],
            Self::QualityOfLife => &[
                (1, "Improves sig."),
                (2, "Neutral"),
                (3, "Reduces sl."),
                (4, "Reduces sig."),
            ],
        }
    }

    /// Display label for one code, if the code is on the documented scale.
    #[must_use]
    pub fn label_for(self, code: u32) -> Option<&'static str> {
        self.code_labels()
            .iter()
            .find_map(|&(c, label)| (c == code).then_some(label))
    }
}

/// A verbatim categorical column: grouping variable for the rank-sum tests
/// and subject of the descriptive distribution counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoricalField {
    Site,
    AgeGroup,
    ResidencyDuration,
    FloorLevel,
    QualityOfLifeRaw,
}

impl CategoricalField {
    /// Short display title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Site => "Site",
            Self::AgeGroup => "Age Group",
            Self::ResidencyDuration => "Residency Duration",
            Self::FloorLevel => "Floor Level",
            Self::QualityOfLifeRaw => "Quality of Life (Q11)",
        }
    }

    /// Canonical category order for grouping and presentation.
    #[must_use]
    pub fn category_order(self) -> &'static [&'static str] {
        match self {
            Self::Site => &SITE_ORDER,
            Self::AgeGroup => &["18 – 25", "26 – 40", "41 – 59", "60+"],
            Self::ResidencyDuration => &[
                "Less than 1 year",
                "1 - 5 years",
                "5 - 10 years",
                "More than 10 years",
            ],
            Self::FloorLevel => &FLOOR_ORDER,
            Self::QualityOfLifeRaw => &[
                "Improves significantly",
                "Neutral",
                "Reduces slightly",
                "Reduces significantly",
            ],
        }
    }

    /// The field's verbatim value on one record.
    #[must_use]
    pub fn value(self, record: &CleanRecord) -> &str {
        match self {
            Self::Site => &record.site,
            Self::AgeGroup => &record.age_group,
            Self::ResidencyDuration => &record.residency_duration,
            Self::FloorLevel => &record.floor_level,
            Self::QualityOfLifeRaw => &record.quality_of_life_raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{encoding::EncodingTables, record::Encoder, schema::RawRecord};

    fn sample_record() -> CleanRecord {
        let encoder = Encoder::new(EncodingTables::default());
        encoder.encode(
            1,
            &RawRecord {
                site: "Cheng Yan Court".into(),
                age_group: "41 – 59".into(),
                residency_duration: "5 - 10 years".into(),
                floor_level: "Mid Rise (Floors 6–10)".into(),
                noise_rating: "6".into(),
                noise_sources: "Commercial Events".into(),
                noise_spike: "No".into(),
                concentration: "Slightly distracting".into(),
                air_quality: "7".into(),
                convenience: String::new(),
                community: "Yes".into(),
                quality_of_life: "Reduces slightly".into(),
            },
        )
    }

    #[test]
    fn test_numeric_field_values() {
        let record = sample_record();
        assert_eq!(NumericField::NoiseRating.value(&record), Some(6.0));
        assert_eq!(NumericField::Concentration.value(&record), Some(3.0));
        assert_eq!(NumericField::NoiseSpike.value(&record), Some(0.0));
        assert_eq!(NumericField::QualityOfLife.value(&record), Some(3.0));
    }

    #[test]
    fn test_ordinal_labels_cover_scales() {
        let record = sample_record();
        let code = record.quality_of_life.unwrap();
        assert_eq!(OrdinalField::QualityOfLife.label_for(code), Some("Reduces sl."));
        assert_eq!(OrdinalField::Community.label_for(1), Some("Maybe/Neutral"));
        assert_eq!(OrdinalField::Community.label_for(9), None);
    }

    #[test]
    fn test_categorical_orders_are_fixed() {
        assert_eq!(CategoricalField::Site.category_order().len(), 4);
        assert_eq!(
            CategoricalField::FloorLevel.category_order()[0],
            "Low Rise (Floors 1–5)",
        );
        let record = sample_record();
        assert_eq!(CategoricalField::Site.value(&record), "Cheng Yan Court");
    }
}
