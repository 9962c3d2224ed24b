use crate::data::labels::{ClassFrequencies, Label};
use crate::error::{ImpurityError, Result};
use nalgebra::{DVector, Scalar};
use num_traits::{ToPrimitive, Unsigned};

/// Computes the **Gini impurity** of a sequence of class labels.
///
/// Gini impurity is the probability that a sample drawn at random would be
/// misclassified if it were labeled at random according to the class
/// distribution of the sequence.
///
/// # Definition
///
/// With `p_i = count(i) / len(y)` for every distinct label `i`, the three
/// formulations below are algebraically identical:
///
/// ```text
/// G = Σ_{i≠j} p_i p_j          (pairwise products)
///   = Σ_i p_i (1 − p_i)        (complement probabilities)
///   = 1 − Σ_i p_i²             (one minus sum of squares)
/// ```
///
/// The last one is what is computed here, as `1 − Σ_i c_i² / n²` with the
/// sum of squared counts kept as an exact integer. The result is therefore
/// bit-for-bit the same for every ordering of the same multiset of labels.
///
/// - `G = 0` exactly when all labels are identical
/// - `G = (k − 1) / k` for `k` classes of equal frequency
/// - `G ≤ 0.5` whenever at most two classes are present
///
/// # Arguments
///
/// * `labels` - The class label of every sample.
///
/// # Returns
///
/// The Gini impurity as a `Result` containing a `f64` in `[0, (k − 1) / k]`.
///
/// # Errors
///
/// Returns [`ImpurityError::EmptyLabels`] if `labels` is empty.
///
/// # Examples
///
/// ```rust
/// use gini_impurity::metrics::impurity::gini_impurity;
///
/// let gini = gini_impurity(&[0, 0, 0, 1]).unwrap();
/// assert_eq!(gini, 0.375);
/// ```
pub fn gini_impurity<T: Label>(labels: &[T]) -> Result<f64> {
    Ok(ClassFrequencies::from_labels(labels)?.gini())
}

/// `1 − sum_sq / n²` for an exact sum of squared counts `sum_sq` over `n` samples.
pub(crate) fn gini_from_sum_sq(sum_sq: u128, n: u128) -> f64 {
    // n² only overflows when n > u64::MAX, which no slice length reaches
    let n_sq = n.saturating_mul(n);
    1.0 - sum_sq as f64 / n_sq as f64
}

/// Computes the Gini impurity from precomputed class counts.
///
/// Classes with a zero count contribute nothing.
///
/// # Arguments
///
/// * `counts` - `counts[k]` is the number of samples of class `k`.
///
/// # Returns
///
/// The Gini impurity as a `Result` containing a `f64`, identical to
/// [`gini_impurity`] on the labels the counts describe.
///
/// # Errors
///
/// Returns [`ImpurityError::EmptyLabels`] if the counts sum to zero and
/// [`ImpurityError::CountOverflow`] if the counts or the sum of their squares
/// don't fit in a `u128`.
pub fn gini_from_counts<C>(counts: &[C]) -> Result<f64>
where
    C: Unsigned + ToPrimitive + Copy,
{
    let mut n: u128 = 0;
    let mut sum_sq: u128 = 0;
    for c in counts {
        let c = c.to_u128().ok_or(ImpurityError::CountOverflow)?;
        n = n.checked_add(c).ok_or(ImpurityError::CountOverflow)?;
        sum_sq = c
            .checked_mul(c)
            .and_then(|c_sq| sum_sq.checked_add(c_sq))
            .ok_or(ImpurityError::CountOverflow)?;
    }

    if n == 0 {
        return Err(ImpurityError::EmptyLabels);
    }
    if n.checked_mul(n).is_none() {
        return Err(ImpurityError::CountOverflow);
    }

    Ok(gini_from_sum_sq(sum_sq, n))
}

/// Upper bound `(k − 1) / k` of the Gini impurity over `k` classes.
///
/// # Arguments
///
/// * `num_classes` - The number of distinct classes `k`.
///
/// # Errors
///
/// Returns [`ImpurityError::InvalidParameter`] if `num_classes` is zero.
pub fn max_gini(num_classes: usize) -> Result<f64> {
    if num_classes == 0 {
        return Err(ImpurityError::InvalidParameter {
            name: "num_classes".into(),
            value: num_classes.to_string(),
        });
    }
    let k = num_classes as f64;
    Ok((k - 1.0) / k)
}

/// Gini impurity divided by its bound for the number of classes present.
///
/// # Arguments
///
/// * `labels` - The class label of every sample.
///
/// # Returns
///
/// A `f64` in `[0, 1]`; a single class gives `0.0` and equally frequent
/// classes give `1.0`.
///
/// # Errors
///
/// Returns [`ImpurityError::EmptyLabels`] if `labels` is empty.
pub fn normalized_gini<T: Label>(labels: &[T]) -> Result<f64> {
    let freq = ClassFrequencies::from_labels(labels)?;
    if freq.num_classes() == 1 {
        return Ok(0.0);
    }
    let bound = max_gini(freq.num_classes())?;
    Ok((freq.gini() / bound).min(1.0))
}

/// Impurity measures over label vectors, for types that want them as methods.
pub trait ImpurityMetrics<T: Label + Scalar> {
    /// Computes the Gini impurity of a label vector. See [`gini_impurity`].
    ///
    /// # Arguments
    ///
    /// * `y` - The class labels.
    fn gini(&self, y: &DVector<T>) -> Result<f64> {
        gini_impurity(y.as_slice())
    }

    /// Computes the normalized Gini impurity of a label vector. See [`normalized_gini`].
    ///
    /// # Arguments
    ///
    /// * `y` - The class labels.
    fn normalized_gini(&self, y: &DVector<T>) -> Result<f64> {
        normalized_gini(y.as_slice())
    }
}
