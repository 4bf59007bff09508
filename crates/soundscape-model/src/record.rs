//! Clean records, the encoder, and the immutable clean table.

use serde::{Deserialize, Serialize};

use crate::{
    encoding::{EncodingTables, encode_scale, encode_spike},
    schema::RawRecord,
};

/// One respondent after encoding: verbatim categorical answers plus the
/// derived ordinal/numeric codes.
///
/// `None` on a numeric field means the raw answer did not resolve — an
/// unmapped label or a non-numeric scale answer. The spike flag is never
/// missing by construction (any answer other than "no" counts as 1).
///
/// Field order matches the clean CSV column order; the serde names are the
/// clean file's column headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanRecord {
    /// 1-based position in the input, unique per run.
    pub respondent_id: u32,
    pub site: String,
    pub age_group: String,
    pub age_numeric: Option<u32>,
    pub residency_duration: String,
    pub residency_numeric: Option<u32>,
    pub floor_level: String,
    pub floor_numeric: Option<u32>,
    #[serde(rename = "Q4_noise_rating")]
    pub noise_rating: Option<u32>,
    #[serde(rename = "Q5_noise_sources")]
    pub noise_sources: String,
    #[serde(rename = "Q6_noise_spike")]
    pub noise_spike: u8,
    #[serde(rename = "Q6_spike_raw")]
    pub spike_raw: String,
    #[serde(rename = "Q7_concentration_raw")]
    pub concentration_raw: String,
    #[serde(rename = "Q7_concentration")]
    pub concentration: Option<u32>,
    #[serde(rename = "Q8_air_quality")]
    pub air_quality: Option<u32>,
    #[serde(rename = "Q9_convenience_raw")]
    pub convenience_raw: String,
    #[serde(rename = "Q10_community_raw")]
    pub community_raw: String,
    #[serde(rename = "Q10_community")]
    pub community: Option<u32>,
    #[serde(rename = "Q11_QoL_raw")]
    pub quality_of_life_raw: String,
    #[serde(rename = "Q11_QoL")]
    pub quality_of_life: Option<u32>,
}

/// Turns raw records into clean records using a fixed set of encoding
/// tables.
///
/// The encoder has no I/O and never fails: every value-level problem ends up
/// as a missing marker on that one field. Structural problems (missing
/// columns) are caught earlier, at header resolution.
#[derive(Debug, Clone)]
pub struct Encoder {
    tables: EncodingTables,
}

impl Encoder {
    #[must_use]
    pub fn new(tables: EncodingTables) -> Self {
        Self { tables }
    }

    /// Encodes one raw record into the clean record with the given id.
    ///
    /// # Examples
    ///
    /// ```
    /// use soundscape_model::{encoding::EncodingTables, record::Encoder, schema::RawRecord};
    ///
    /// let encoder = Encoder::new(EncodingTables::default());
    /// let raw = RawRecord {
    ///     site: "Albert Centre".into(),
    ///     age_group: "60+".into(),
    ///     residency_duration: "More than 10 years".into(),
    ///     floor_level: "High Rise (Floors 11+)".into(),
    ///     noise_rating: "9".into(),
    ///     noise_sources: "Construction / Renovation".into(),
    ///     noise_spike: "No".into(),
    ///     concentration: "Highly distracting".into(),
    ///     air_quality: "poor".into(),
    ///     convenience: "".into(),
    ///     community: "Yes".into(),
    ///     quality_of_life: "Reduces significantly".into(),
    /// };
    /// let record = encoder.encode(7, &raw);
    /// assert_eq!(record.respondent_id, 7);
    /// assert_eq!(record.noise_rating, Some(9));
    /// // non-numeric scale answer -> missing, not an error
    /// assert_eq!(record.air_quality, None);
    /// assert_eq!(record.noise_spike, 0);
    /// ```
    #[must_use]
    pub fn encode(&self, respondent_id: u32, raw: &RawRecord) -> CleanRecord {
        CleanRecord {
            respondent_id,
            site: raw.site.trim().to_owned(),
            age_group: raw.age_group.trim().to_owned(),
            age_numeric: self.tables.age.encode(&raw.age_group),
            residency_duration: raw.residency_duration.trim().to_owned(),
            residency_numeric: self.tables.residency.encode(&raw.residency_duration),
            floor_level: raw.floor_level.trim().to_owned(),
            floor_numeric: self.tables.floor.encode(&raw.floor_level),
            noise_rating: encode_scale(&raw.noise_rating),
            noise_sources: raw.noise_sources.trim().to_owned(),
            noise_spike: encode_spike(&raw.noise_spike),
            spike_raw: raw.noise_spike.trim().to_owned(),
            concentration_raw: raw.concentration.trim().to_owned(),
            concentration: self.tables.concentration.encode(&raw.concentration),
            air_quality: encode_scale(&raw.air_quality),
            convenience_raw: raw.convenience.trim().to_owned(),
            community_raw: raw.community.trim().to_owned(),
            community: self.tables.community.encode(&raw.community),
            quality_of_life_raw: raw.quality_of_life.trim().to_owned(),
            quality_of_life: self.tables.quality_of_life.encode(&raw.quality_of_life),
        }
    }

    /// Encodes all raw records in input order, assigning ids `1..=n`.
    #[must_use]
    pub fn encode_all(&self, raw_records: &[RawRecord]) -> CleanTable {
        let records = raw_records
            .iter()
            .enumerate()
            .map(|(idx, raw)| {
                let id = u32::try_from(idx + 1).expect("respondent count fits in u32");
                self.encode(id, raw)
            })
            .collect();
        CleanTable { records }
    }
}

/// The ordered, read-only table of all clean records for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanTable {
    records: Vec<CleanRecord>,
}

impl CleanTable {
    /// Wraps already-encoded records (e.g. read back from the clean CSV).
    #[must_use]
    pub fn new(records: Vec<CleanRecord>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn records(&self) -> &[CleanRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CleanRecord> {
        self.records.iter()
    }

    /// Number of distinct site labels present.
    #[must_use]
    pub fn site_count(&self) -> usize {
        let mut sites = self
            .records
            .iter()
            .map(|r| r.site.as_str())
            .collect::<Vec<_>>();
        sites.sort_unstable();
        sites.dedup();
        sites.len()
    }
}

impl<'a> IntoIterator for &'a CleanTable {
    type Item = &'a CleanRecord;
    type IntoIter = std::slice::Iter<'a, CleanRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
