/// Gini impurity and related measures
pub mod impurity;
