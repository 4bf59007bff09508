//! Fixed ordinal encoding tables for the closed question set.
//!
//! Each ordinal question has one lookup table from normalized (trimmed,
//! case-folded) answer text to an integer code. Lookup is exact-match after
//! normalization; anything else — typos, free-text elaborations, blanks —
//! becomes a missing value rather than an error or a default code.
//!
//! Two deliberate quirks of the original study are preserved verbatim:
//!
//! - "maybe" coarsens onto the community midpoint together with "neutral"
//! - the spike question treats "no" as the only negative answer; every other
//!   answer, including a blank, counts as a spike

/// Normalizes raw answer text for table lookup: trim plus case-fold.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Immutable label→code lookup for one ordinal question.
///
/// # Examples
///
/// ```
/// use soundscape_model::encoding::EncodingTable;
///
/// let table = EncodingTable::new([("no", 0), ("yes", 1)]);
/// assert_eq!(table.encode(" YES "), Some(1));
/// assert_eq!(table.encode("unsure"), None);
/// assert_eq!(table.encode(""), None);
/// ```
#[derive(Debug, Clone)]
pub struct EncodingTable {
    entries: Vec<(String, u32)>,
}

impl EncodingTable {
    /// Builds a table from label/code pairs; labels are normalized on entry.
    #[must_use]
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: AsRef<str>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(label, code)| (normalize(label.as_ref()), code))
                .collect(),
        }
    }

    /// Looks up the code for a raw answer.
    ///
    /// Exact match on the normalized text; no partial or fuzzy matching, no
    /// default code. `None` means missing.
    #[must_use]
    pub fn encode(&self, raw: &str) -> Option<u32> {
        let key = normalize(raw);
        self.entries
            .iter()
            .find_map(|(label, code)| (*label == key).then_some(*code))
    }
}

/// The full set of encoding tables, constructed once at startup and passed
/// explicitly into the encoder.
#[derive(Debug, Clone)]
pub struct EncodingTables {
    /// Age group → 1..=4.
    pub age: EncodingTable,
    /// Residency duration → 1..=4.
    pub residency: EncodingTable,
    /// Floor range → 1..=3.
    pub floor: EncodingTable,
    /// Concentration impact (Q7) → 1..=6.
    pub concentration: EncodingTable,
    /// Community connection (Q10) → 0..=2.
    pub community: EncodingTable,
    /// Quality-of-life outcome (Q11) → 1..=4.
    pub quality_of_life: EncodingTable,
}

impl Default for EncodingTables {
    fn default() -> Self {
        Self {
            age: EncodingTable::new([
                ("18 – 25", 1),
                ("26 – 40", 2),
                ("41 – 59", 3),
                ("60+", 4),
            ]),
            residency: EncodingTable::new([
                ("Less than 1 year", 1),
                ("1 - 5 years", 2),
                ("5 - 10 years", 3),
                ("More than 10 years", 4),
            ]),
            floor: EncodingTable::new([
                ("Low Rise (Floors 1–5)", 1),
                ("Mid Rise (Floors 6–10)", 2),
                ("High Rise (Floors 11+)", 3),
            ]),
            concentration: EncodingTable::new([
                ("Not at all", 1),
                ("Neutral", 2),
                ("Slightly distracting", 3),
                ("Moderately distracting", 4),
                ("Highly distracting", 5),
                ("Severely affects rest quality", 6),
            ]),
            community: EncodingTable::new([
                ("No", 0),
                ("Neutral", 1),
                // deliberate coarsening: maybe sits on the midpoint
                ("Maybe", 1),
                ("Yes", 2),
                ("Yes, I feel a strong connection.", 2),
                ("Yes, very strong", 2),
            ]),
            quality_of_life: EncodingTable::new([
                ("Improves significantly", 1),
                ("Neutral", 2),
                ("Reduces slightly", 3),
                ("Reduces significantly", 4),
            ]),
        }
    }
}

/// Encodes a direct 1–10 scale answer (noise rating, air quality).
///
/// The value is used only if the trimmed text consists entirely of ASCII
/// digits; everything else is missing. An out-of-range integer (say, 15) is
/// accepted as-is — the original pipeline never range-checked these and the
/// quirk is preserved.
///
/// # Examples
///
/// ```
/// use soundscape_model::encoding::encode_scale;
///
/// assert_eq!(encode_scale("7"), Some(7));
/// assert_eq!(encode_scale(" 10 "), Some(10));
/// assert_eq!(encode_scale("15"), Some(15));
/// assert_eq!(encode_scale("-3"), None);
/// assert_eq!(encode_scale("seven"), None);
/// assert_eq!(encode_scale(""), None);
/// ```
#[must_use]
pub fn encode_scale(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

/// Encodes the spike question: 0 only for a normalized "no", 1 otherwise.
///
/// The asymmetry is intentional: a blank or free-text answer counts as a
/// spike report.
///
/// # Examples
///
/// ```
/// use soundscape_model::encoding::encode_spike;
///
/// assert_eq!(encode_spike(" No "), 0);
/// assert_eq!(encode_spike("Yes, on weekends"), 1);
/// assert_eq!(encode_spike(""), 1);
/// ```
#[must_use]
pub fn encode_spike(raw: &str) -> u8 {
    u8::from(normalize(raw) != "no")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization_invariance() {
        let tables = EncodingTables::default();
        assert_eq!(
            tables.community.encode(" YES "),
            tables.community.encode("yes"),
        );
        assert_eq!(tables.quality_of_life.encode("NEUTRAL"), Some(2));
    }

    #[test]
    fn test_unknown_label_is_missing() {
        let tables = EncodingTables::default();
        assert_eq!(tables.age.encode("25 – 30"), None);
        assert_eq!(tables.age.encode(""), None);
        assert_eq!(tables.floor.encode("penthouse"), None);
    }

    #[test]
    fn test_maybe_equals_neutral() {
        let tables = EncodingTables::default();
        assert_eq!(
            tables.community.encode("Maybe"),
            tables.community.encode("Neutral"),
        );
        assert_eq!(tables.community.encode("Maybe"), Some(1));
    }

    #[test]
    fn test_community_long_forms() {
        let tables = EncodingTables::default();
        assert_eq!(
            tables.community.encode("Yes, I feel a strong connection."),
            Some(2),
        );
        assert_eq!(tables.community.encode("yes, very strong"), Some(2));
    }

    #[test]
    fn test_concentration_full_scale() {
        let tables = EncodingTables::default();
        assert_eq!(tables.concentration.encode("Not at all"), Some(1));
        assert_eq!(
            tables.concentration.encode("Severely affects rest quality"),
            Some(6),
        );
    }

    #[test]
    fn test_scale_rejects_non_digits() {
        assert_eq!(encode_scale("7.5"), None);
        assert_eq!(encode_scale("+7"), None);
        assert_eq!(encode_scale("7 out of 10"), None);
    }

    #[test]
    fn test_spike_asymmetric_default() {
        assert_eq!(encode_spike("no"), 0);
        assert_eq!(encode_spike("NO"), 0);
        assert_eq!(encode_spike("not really"), 1);
        assert_eq!(encode_spike(""), 1);
    }
}
