//! CSV output with schema unification
//!
//! Events carry heterogeneous field sets, so the header is computed as the
//! union of every key across every record, in first-seen order, and each
//! row leaves blanks for the columns its record lacks.

mod writer;

pub use writer::{column_set, timestamped_filename, CsvWriter};

#[cfg(test)]
mod tests;
