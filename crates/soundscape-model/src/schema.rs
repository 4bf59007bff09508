//! Raw survey schema: form column headers and the as-submitted record.
//!
//! The Google-Form export names each column with the full question text.
//! That text is configuration, not contract: [`RawColumns`] carries the
//! header-to-field mapping, with the verbatim form headers as defaults, so a
//! re-export with reworded questions only needs a different mapping.

use serde::{Deserialize, Serialize};

/// Header text for each required raw survey column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawColumns {
    pub site: String,
    pub age_group: String,
    pub residency_duration: String,
    pub floor_level: String,
    pub noise_rating: String,
    pub noise_sources: String,
    pub noise_spike: String,
    pub concentration: String,
    pub air_quality: String,
    pub convenience: String,
    pub community: String,
    pub quality_of_life: String,
}

impl Default for RawColumns {
    /// The verbatim headers of the original form export.
    fn default() -> Self {
        Self {
            site: "12. Which site do you live in?".into(),
            age_group: "1. Which age group do you fall into?".into(),
            residency_duration: "2. How long have you lived in this estate?".into(),
            floor_level: "3. Which floor range is your unit located on?".into(),
            noise_rating:
                "4. On a normal day, how would you rate the noise level from 1 to 10?".into(),
            noise_sources: "5. What are the main noise sources you notice most often?".into(),
            noise_spike: "6. Does the noise ever spike during specific hours / events?".into(),
            concentration:
                "7. How does the noise level affect your ability to concentrate (studying, working)?"
                    .into(),
            air_quality: "8. How do you find the quality of air in your living area?".into(),
            convenience:
                "9. Convenience: When there are big festivals or religious practices, events etc, how does it affect your routine?"
                    .into(),
            community:
                "10. Does living so close to these cultural/religious hubs make you feel more connected to the community?"
                    .into(),
            quality_of_life:
                "11. Overall, would you say living here improves or reduces your Quality of Life?"
                    .into(),
        }
    }
}

/// A required survey column was absent from the input header.
///
/// This is the one structural error in the pipeline and it is fatal: without
/// the column there is no per-record recovery.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("required survey column '{name}' is missing from the input header")]
pub struct MissingColumnError {
    /// Header text of the missing column.
    pub name: String,
}

/// Resolved position of every required column within one concrete header row.
///
/// Built once per input file; row extraction after that is infallible.
#[derive(Debug, Clone)]
pub struct ColumnIndex {
    site: usize,
    age_group: usize,
    residency_duration: usize,
    floor_level: usize,
    noise_rating: usize,
    noise_sources: usize,
    noise_spike: usize,
    concentration: usize,
    air_quality: usize,
    convenience: usize,
    community: usize,
    quality_of_life: usize,
}

impl ColumnIndex {
    /// Locates every required column in `header`.
    ///
    /// # Arguments
    ///
    /// * `columns` - The header-to-field mapping
    /// * `header` - The header row of the input file
    ///
    /// # Returns
    ///
    /// The resolved index, or a [`MissingColumnError`] naming the first
    /// required column not found in `header`.
    pub fn resolve(columns: &RawColumns, header: &[&str]) -> Result<Self, MissingColumnError> {
        let position = |name: &str| -> Result<usize, MissingColumnError> {
            header
                .iter()
                .position(|&h| h == name)
                .ok_or_else(|| MissingColumnError { name: name.into() })
        };
        Ok(Self {
            site: position(&columns.site)?,
            age_group: position(&columns.age_group)?,
            residency_duration: position(&columns.residency_duration)?,
            floor_level: position(&columns.floor_level)?,
            noise_rating: position(&columns.noise_rating)?,
            noise_sources: position(&columns.noise_sources)?,
            noise_spike: position(&columns.noise_spike)?,
            concentration: position(&columns.concentration)?,
            air_quality: position(&columns.air_quality)?,
            convenience: position(&columns.convenience)?,
            community: position(&columns.community)?,
            quality_of_life: position(&columns.quality_of_life)?,
        })
    }

    /// Extracts one [`RawRecord`] from a data row.
    ///
    /// Fields are trimmed on the way in. Cells beyond the end of a short row
    /// read as empty, which downstream encoding treats as missing.
    #[must_use]
    pub fn extract(&self, row: &[&str]) -> RawRecord {
        let cell = |idx: usize| row.get(idx).map_or(String::new(), |v| v.trim().to_owned());
        RawRecord {
            site: cell(self.site),
            age_group: cell(self.age_group),
            residency_duration: cell(self.residency_duration),
            floor_level: cell(self.floor_level),
            noise_rating: cell(self.noise_rating),
            noise_sources: cell(self.noise_sources),
            noise_spike: cell(self.noise_spike),
            concentration: cell(self.concentration),
            air_quality: cell(self.air_quality),
            convenience: cell(self.convenience),
            community: cell(self.community),
            quality_of_life: cell(self.quality_of_life),
        }
    }
}

/// One respondent's answers exactly as submitted (whitespace-trimmed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub site: String,
    pub age_group: String,
    pub residency_duration: String,
    pub floor_level: String,
    pub noise_rating: String,
    pub noise_sources: String,
    pub noise_spike: String,
    pub concentration: String,
    pub air_quality: String,
    pub convenience: String,
    pub community: String,
    pub quality_of_life: String,
}
