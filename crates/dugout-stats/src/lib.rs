//! Statistical helpers for the draft evaluator.
//!
//! - **Descriptive statistics**: mean, median, variance and standard deviation
//! - **Normal distribution**: the standard normal CDF used to turn a difference of
//!   projected totals into a win probability
//! - **Ranking**: tie-aware ranks of a set of values
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`normal`]: Normal cumulative distribution function
//! - [`ranking`]: Fractional ("average") ranking
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use dugout_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! ```
//!
//! ## Ranking with ties
//!
//! ```
//! use dugout_stats::ranking::rank_values;
//!
//! let ranks = rank_values(&[1.0, 1.0, 1.0, 1.0, 2.0], false);
//! assert_eq!(ranks, [2.5, 2.5, 2.5, 2.5, 5.0]);
//! ```
//!
//! ## Win probability
//!
//! ```
//! use dugout_stats::normal::standard_normal_cdf;
//!
//! assert!((standard_normal_cdf(0.0) - 0.5).abs() < 1e-7);
//! ```

pub mod descriptive;
pub mod normal;
pub mod ranking;
