/// Reading labels from files
pub mod io;
/// Label bound and class frequency table
pub mod labels;
