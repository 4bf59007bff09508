//! Analysis battery for the Soundscape survey.
//!
//! This crate turns the clean table into results: it selects the rows each
//! test can use, runs the statistic, classifies the outcome against the
//! study's fixed thresholds, and exposes the exact numeric inputs each chart
//! would plot. It is stateless — every function is a pure read of the table.
//!
//! # The battery
//!
//! - [`descriptive`]: scene-setting summaries (counts, distributions,
//!   per-site means, noise sources, spike split)
//! - [`correlation`]: five fixed Spearman pairs along the noise → rest →
//!   quality-of-life chain, with a magnitude ranking
//! - [`group_diff`]: Kruskal-Wallis across floor levels and sites, with
//!   conditional Mann-Whitney post-hoc pairs
//! - [`association`]: contingency tests (Fisher's exact / chi-square) for
//!   community, age, and residency against their outcomes
//! - [`burden`]: the three-part burden comparison (exposure, correlation
//!   ranking, mechanism)
//!
//! Supporting modules: [`interpretation`] (shared classification policy),
//! [`selection`] (missing-value exclusion), [`noise_sources`] (multi-select
//! keyword classification), [`chart`] (plot-input extraction).
//!
//! # Example
//!
//! ```no_run
//! use soundscape_analysis::{correlation, group_diff};
//! use soundscape_model::record::CleanTable;
//!
//! let table: CleanTable = todo!(); // read from the clean CSV
//!
//! for result in correlation::run_battery(&table) {
//!     match result.outcome {
//!         correlation::CorrelationOutcome::Computed { rho, p_value, interpretation } => {
//!             println!("{}: rho={rho:+.3} p={p_value:.4} ({interpretation})", result.spec.title);
//!         }
//!         correlation::CorrelationOutcome::InsufficientData => {
//!             println!("{}: insufficient data (n={})", result.spec.title, result.effective_n);
//!         }
//!     }
//! }
//!
//! for result in group_diff::run_battery(&table) {
//!     println!("{}: {} groups", result.spec.title, result.groups.len());
//! }
//! ```

pub mod association;
pub mod burden;
pub mod chart;
pub mod correlation;
pub mod descriptive;
pub mod group_diff;
pub mod interpretation;
pub mod noise_sources;
pub mod selection;
