//! Statistical primitives for the Soundscape survey analysis.
//!
//! This crate provides the non-parametric tests and summary statistics the
//! analysis battery is built on:
//!
//! - **Descriptive statistics**: count, mean, sample standard deviation, quartiles
//! - **Ranking**: average ranks with tie handling
//! - **Spearman's rank correlation**: monotonic association with a two-sided p-value
//! - **Kruskal-Wallis**: rank-based analysis of variance across k groups
//! - **Mann-Whitney U**: two-sample rank-sum test for pairwise post-hoc comparisons
//! - **Contingency tests**: Fisher's exact test (2×2) and the chi-square test of
//!   independence (larger tables)
//! - **Distributions**: survival/tail functions used to turn statistics into p-values
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`rank`]: Average-rank transformation and tie terms
//! - [`spearman`]: Spearman's rank correlation coefficient
//! - [`kruskal`]: Kruskal-Wallis H test
//! - [`mann_whitney`]: Mann-Whitney U test
//! - [`contingency`]: Contingency tables, Fisher's exact test, chi-square test
//! - [`distribution`]: Normal, Student-t, and chi-square tail probabilities
//!
//! # Examples
//!
//! ## Rank correlation
//!
//! ```
//! use soundscape_stats::spearman::SpearmanTest;
//!
//! let x = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = [2.0, 4.0, 5.0, 4.0, 8.0];
//! let test = SpearmanTest::new(&x, &y).unwrap();
//! assert!(test.rho > 0.8);
//! ```
//!
//! ## Group comparison
//!
//! ```
//! use soundscape_stats::kruskal::KruskalWallisTest;
//!
//! let low = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let high = [6.0, 7.0, 8.0, 9.0, 10.0];
//! let test = KruskalWallisTest::new(&[&low, &high]).unwrap();
//! assert!(test.p_value < 0.05);
//! ```
//!
//! All computations are `f64`; every test constructor returns `Option` and
//! yields `None` when the input cannot support the statistic (too few
//! observations, zero variance), so callers can report "insufficient data"
//! instead of a numeric artifact.

pub mod contingency;
pub mod descriptive;
pub mod distribution;
pub mod kruskal;
pub mod mann_whitney;
pub mod rank;
pub mod spearman;
