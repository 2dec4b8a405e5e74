//! Error taxonomy shared by the loader, the validator and shape selection.
//!
//! Every failure is deterministic for a given dataset and input, so nothing
//! here is retried. An empty result is never an error.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Query parameter that maps onto a dataset column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Parameter {
    Platform,
    Category,
    Service,
    Solution,
}

impl Parameter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Parameter::Platform => "Platform",
            Parameter::Category => "Category",
            Parameter::Service => "Service",
            Parameter::Solution => "Solution",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The dataset could not be opened or one of its rows could not be read.
    #[error("unable to load dataset {}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A provided identifier is not present in its column.
    #[error("{parameter} '{value}' does not exist in the dataset")]
    Validation { parameter: Parameter, value: String },

    /// The provided parameters do not form one of the supported query shapes.
    #[error("invalid parameter combination: {0}")]
    Configuration(String),
}

pub type Result<T, E = CatalogError> = std::result::Result<T, E>;
