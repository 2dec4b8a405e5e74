//! Per-column lookup sets over a loaded dataset.
//!
//! The index answers one question: does this identifier appear verbatim in
//! its column? Query parameters are checked against it before any resolver
//! runs, so resolvers never see a value that is absent from the dataset.

use crate::catalog::Record;
use crate::error::{CatalogError, Parameter, Result};
use std::collections::BTreeSet;

#[derive(Debug, Default)]
/// Distinct values of each identifier column.
pub struct ColumnIndex {
    platforms: BTreeSet<String>,
    categories: BTreeSet<String>,
    services: BTreeSet<String>,
    solutions: BTreeSet<String>,
}

impl ColumnIndex {
    pub fn build(records: &[Record]) -> Self {
        let mut index = Self::default();
        for record in records {
            index.platforms.insert(record.platform.clone());
            index.categories.insert(record.category.clone());
            index.services.insert(record.service.clone());
            index.solutions.insert(record.solution.clone());
        }
        index
    }

    /// Distinct values of one column, in ordinal order.
    pub fn values(&self, parameter: Parameter) -> impl Iterator<Item = &str> {
        self.column(parameter).iter().map(String::as_str)
    }

    pub fn contains(&self, parameter: Parameter, value: &str) -> bool {
        self.column(parameter).contains(value)
    }

    /// Fail with a validation error naming `parameter` when `value` is unknown.
    pub fn require(&self, parameter: Parameter, value: &str) -> Result<()> {
        if self.contains(parameter, value) {
            return Ok(());
        }
        Err(CatalogError::Validation {
            parameter,
            value: value.to_string(),
        })
    }

    fn column(&self, parameter: Parameter) -> &BTreeSet<String> {
        match parameter {
            Parameter::Platform => &self.platforms,
            Parameter::Category => &self.categories,
            Parameter::Service => &self.services,
            Parameter::Solution => &self.solutions,
        }
    }
}
