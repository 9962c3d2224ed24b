//! # gini-impurity
//!
//! `gini-impurity` computes the Gini impurity of a sequence of class labels, the
//! uncertainty measure used to grow decision trees. It also contains a class
//! frequency table, label loading from CSV files and a demonstration of how the
//! range of the impurity grows with the number of classes.
//!
//! ## Getting Started
//!
//! To use `gini-impurity`, add the following to your `Cargo.toml` file:
//!
//! ```toml
//! [dependencies]
//! gini-impurity = "*"
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use gini_impurity::data::labels::ClassFrequencies;
//! use gini_impurity::metrics::impurity::gini_impurity;
//!
//! assert_eq!(gini_impurity(&[0, 0, 0, 0]).unwrap(), 0.0);
//! assert_eq!(gini_impurity(&["yes", "no", "yes", "no"]).unwrap(), 0.5);
//!
//! let freq = ClassFrequencies::from_labels(&[0, 0, 0, 1]).unwrap();
//! assert_eq!(*freq.majority_class(), 0);
//! assert!((freq.gini() - 0.375).abs() < 1e-12);
//!
//! assert!(gini_impurity::<u8>(&[]).is_err());
//! ```

/// Labels, class frequencies and label loading
pub mod data;
/// Error type shared by the crate
pub mod error;
/// Impurity measures
pub mod metrics;
/// Impurity range over a growing number of classes
pub mod range;

pub use error::{ImpurityError, Result};
pub use metrics::impurity::{gini_from_counts, gini_impurity, max_gini, normalized_gini};
