//! Survey data model for the Soundscape precinct livability study.
//!
//! This crate owns everything between the raw Google-Form export and the
//! statistics: the column schema, the ordinal encoding tables, the encoder
//! that turns one raw row into one clean record, and the immutable clean
//! table the analyses read from.
//!
//! # Pipeline position
//!
//! 1. **Schema** ([`schema`]): map the verbatim form headers onto semantic
//!    fields; a missing required column is a fatal structural error
//! 2. **Encoding** ([`encoding`]): fixed label→code lookup tables with
//!    trim/case-fold normalization; unrecognized text becomes a missing
//!    value, never an error
//! 3. **Records** ([`record`]): [`record::CleanRecord`] per respondent,
//!    aggregated into an append-once [`record::CleanTable`]
//! 4. **Fields** ([`field`]): typed accessors and canonical category orders
//!    used by the analysis battery
//!
//! # Example
//!
//! ```
//! use soundscape_model::{
//!     encoding::EncodingTables,
//!     record::Encoder,
//!     schema::RawRecord,
//! };
//!
//! let raw = RawRecord {
//!     site: "Waterloo Centre".into(),
//!     age_group: "26 – 40".into(),
//!     residency_duration: "1 - 5 years".into(),
//!     floor_level: "Mid Rise (Floors 6–10)".into(),
//!     noise_rating: "7".into(),
//!     noise_sources: "Road Traffic / MRT, Religious Activities".into(),
//!     noise_spike: "Yes, during festivals".into(),
//!     concentration: "Moderately distracting".into(),
//!     air_quality: "6".into(),
//!     convenience: "Crowded on weekends".into(),
//!     community: "Maybe".into(),
//!     quality_of_life: "Neutral".into(),
//! };
//!
//! let encoder = Encoder::new(EncodingTables::default());
//! let table = encoder.encode_all(&[raw]);
//! let record = &table.records()[0];
//! assert_eq!(record.respondent_id, 1);
//! assert_eq!(record.noise_rating, Some(7));
//! assert_eq!(record.concentration, Some(4));
//! // "Maybe" coarsens to the community midpoint
//! assert_eq!(record.community, Some(1));
//! ```

pub mod encoding;
pub mod field;
pub mod record;
pub mod schema;
