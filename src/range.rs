//! How the range of the Gini impurity grows with the number of classes.
use crate::error::{ImpurityError, Result};
use crate::metrics::impurity::{gini_impurity, max_gini};
use log::{debug, info};
use rand::seq::SliceRandom;
use rand::{rngs::StdRng, SeedableRng};
use rayon::prelude::*;

#[derive(Clone, Debug)]
pub struct RangeParams {
    pub max_classes: usize,
    pub samples_per_class: usize,
    pub seed: Option<u64>,
}

impl Default for RangeParams {
    fn default() -> Self {
        Self::new()
    }
}

impl RangeParams {
    pub fn new() -> Self {
        Self {
            max_classes: 10,
            samples_per_class: 100,
            seed: None,
        }
    }

    pub fn set_max_classes(&mut self, max_classes: usize) -> Result<()> {
        if max_classes < 1 {
            return Err(ImpurityError::InvalidParameter {
                name: "max_classes".into(),
                value: max_classes.to_string(),
            });
        }
        self.max_classes = max_classes;
        Ok(())
    }

    pub fn set_samples_per_class(&mut self, samples_per_class: usize) -> Result<()> {
        if samples_per_class < 1 {
            return Err(ImpurityError::InvalidParameter {
                name: "samples_per_class".into(),
                value: samples_per_class.to_string(),
            });
        }
        self.samples_per_class = samples_per_class;
        Ok(())
    }

    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.seed = seed;
    }

    pub fn max_classes(&self) -> usize {
        self.max_classes
    }

    pub fn samples_per_class(&self) -> usize {
        self.samples_per_class
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

/// One line of the impurity-vs-classes table.
#[derive(Clone, Debug, PartialEq)]
pub struct RangeRow {
    pub num_classes: usize,
    pub impurity: f64,
    pub bound: f64,
}

/// Labels `0..num_classes`, each repeated `samples_per_class` times, in shuffled order.
pub fn uniform_labels(num_classes: usize, samples_per_class: usize, seed: Option<u64>) -> Vec<usize> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut labels = (0..num_classes)
        .flat_map(|class| std::iter::repeat(class).take(samples_per_class))
        .collect::<Vec<_>>();
    labels.shuffle(&mut rng);
    labels
}

/// Computes the impurity of uniformly distributed labels for every class
/// count from 1 up to `params.max_classes`, alongside its bound `(k − 1) / k`.
///
/// Rows are returned in increasing order of `num_classes`.
///
/// # Errors
///
/// Returns an error if the parameters were constructed with a zero field
/// bypassing the setters.
pub fn impurity_range(params: &RangeParams) -> Result<Vec<RangeRow>> {
    if params.max_classes() < 1 || params.samples_per_class() < 1 {
        return Err(ImpurityError::InvalidParameter {
            name: "range_params".into(),
            value: format!("{:?}", params),
        });
    }
    info!(
        "Computing impurity range for 1..={} classes, {} samples each",
        params.max_classes(),
        params.samples_per_class()
    );

    let rows = (1..=params.max_classes())
        .into_par_iter()
        .map(|num_classes| -> Result<RangeRow> {
            // distinct stream per class count, still reproducible
            let seed = params.seed().map(|seed| seed.wrapping_add(num_classes as u64));
            let labels = uniform_labels(num_classes, params.samples_per_class(), seed);
            let impurity = gini_impurity(&labels)?;
            let bound = max_gini(num_classes)?;
            debug!("k = {}: impurity {:.6}, bound {:.6}", num_classes, impurity, bound);
            Ok(RangeRow {
                num_classes,
                impurity,
                bound,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(rows)
}
