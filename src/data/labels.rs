use crate::error::{ImpurityError, Result};
use crate::metrics::impurity::gini_from_sum_sq;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A discrete class value that can be grouped by equality.
///
/// Integers, strings, `char`, `bool` and enums deriving `Eq + Hash + Clone + Debug`
/// all qualify. Floating point values do not, since they have no total equality.
pub trait Label: Debug + Clone + Eq + Hash {}
impl<T> Label for T where T: Debug + Clone + Eq + Hash {}

/// Occurrence count of every distinct label in a sample set.
#[derive(Clone, Debug)]
pub struct ClassFrequencies<T: Label> {
    counts: HashMap<T, usize>,
    // distinct labels in order of first appearance
    classes: Vec<T>,
    total: usize,
}

impl<T: Label> ClassFrequencies<T> {
    /// Builds the table with a single pass over `labels`.
    ///
    /// # Arguments
    ///
    /// * `labels` - The class label of every sample.
    ///
    /// # Errors
    ///
    /// Returns [`ImpurityError::EmptyLabels`] if `labels` is empty.
    pub fn from_labels(labels: &[T]) -> Result<Self> {
        if labels.is_empty() {
            return Err(ImpurityError::EmptyLabels);
        }

        let mut counts = HashMap::new();
        let mut classes = Vec::new();
        for label in labels {
            match counts.entry(label.clone()) {
                Entry::Occupied(mut entry) => *entry.get_mut() += 1,
                Entry::Vacant(entry) => {
                    classes.push(label.clone());
                    entry.insert(1);
                }
            }
        }

        Ok(Self {
            counts,
            classes,
            total: labels.len(),
        })
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }

    pub fn counts(&self) -> &HashMap<T, usize> {
        &self.counts
    }

    /// Distinct labels in the order they first appeared.
    pub fn classes(&self) -> &[T] {
        &self.classes
    }

    /// Number of samples carrying `label`, zero if it was never seen.
    pub fn count(&self, label: &T) -> usize {
        self.counts.get(label).copied().unwrap_or(0)
    }

    pub fn proportion(&self, label: &T) -> f64 {
        self.count(label) as f64 / self.total as f64
    }

    pub fn proportions(&self) -> HashMap<T, f64> {
        let n = self.total as f64;
        self.counts
            .iter()
            .map(|(label, &count)| (label.clone(), count as f64 / n))
            .collect()
    }

    /// Most frequent label. Ties go to the label that appeared first.
    pub fn majority_class(&self) -> &T {
        let mut best = &self.classes[0];
        let mut best_count = self.count(best);
        for class in &self.classes[1..] {
            let count = self.count(class);
            if count > best_count {
                best = class;
                best_count = count;
            }
        }
        best
    }

    /// Accuracy obtained by predicting the majority class for every sample.
    pub fn majority_accuracy(&self) -> f64 {
        self.proportion(self.majority_class())
    }

    /// Gini impurity of the sample set described by this table.
    ///
    /// # Returns
    ///
    /// `1 − Σ c² / n²`, with `Σ c²` summed as an exact integer so the result
    /// doesn't depend on the iteration order of the table.
    pub fn gini(&self) -> f64 {
        let sum_sq = self
            .counts
            .values()
            .map(|&count| (count as u128) * (count as u128))
            .sum::<u128>();
        gini_from_sum_sq(sum_sq, self.total as u128)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_labels_counts() {
        let freq = ClassFrequencies::from_labels(&[3, 1, 3, 3, 7]).unwrap();
        assert_eq!(freq.total(), 5);
        assert_eq!(freq.num_classes(), 3);
        assert_eq!(freq.count(&3), 3);
        assert_eq!(freq.count(&1), 1);
        assert_eq!(freq.count(&7), 1);
        assert_eq!(freq.count(&42), 0);
        assert_eq!(freq.classes(), &[3, 1, 7]);
    }

    #[test]
    fn test_from_labels_empty() {
        let result = ClassFrequencies::<u8>::from_labels(&[]);
        assert!(matches!(result, Err(ImpurityError::EmptyLabels)));
    }

    #[test]
    fn test_proportions_sum_to_one() {
        let freq = ClassFrequencies::from_labels(&["cat", "dog", "dog", "bird"]).unwrap();
        let total: f64 = freq.proportions().values().sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-12);
        assert_relative_eq!(freq.proportion(&"dog"), 0.5);
        assert_relative_eq!(freq.proportion(&"fish"), 0.0);
    }

    #[test]
    fn test_majority_class() {
        let freq = ClassFrequencies::from_labels(&[0, 1, 1, 2, 1, 0]).unwrap();
        assert_eq!(*freq.majority_class(), 1);
        assert_relative_eq!(freq.majority_accuracy(), 0.5);
    }

    #[test]
    fn test_majority_class_tie_uses_first_seen() {
        let freq = ClassFrequencies::from_labels(&['b', 'a', 'a', 'b']).unwrap();
        assert_eq!(*freq.majority_class(), 'b');

        let freq = ClassFrequencies::from_labels(&['a', 'b', 'b', 'a']).unwrap();
        assert_eq!(*freq.majority_class(), 'a');
    }

    #[test]
    fn test_gini_of_table_independent_of_insertion_order() {
        let forward: Vec<u16> = (0..108).map(|i| [0, 1, 1, 3, 2, 1][i % 6]).collect();
        let backward: Vec<u16> = forward.iter().rev().cloned().collect();
        let expected = ClassFrequencies::from_labels(&forward).unwrap().gini();
        for _ in 0..500 {
            let freq = ClassFrequencies::from_labels(&backward).unwrap();
            assert_eq!(freq.gini().to_bits(), expected.to_bits());
        }
    }

    #[test]
    fn test_gini_of_table() {
        let freq = ClassFrequencies::from_labels(&[0, 0, 0, 1]).unwrap();
        assert_relative_eq!(freq.gini(), 0.375, epsilon = 1e-12);

        let pure = ClassFrequencies::from_labels(&[5, 5, 5]).unwrap();
        assert_eq!(pure.gini(), 0.0);
    }
}
