//! Query shape selection.
//!
//! Callers supply any mix of identifiers and flags; exactly seven
//! combinations are meaningful. `Query::from_params` maps a combination onto
//! its shape or rejects it as a configuration error, and `Query::validate`
//! checks every identifier against the loaded dataset before resolution.

use crate::catalog::ColumnIndex;
use crate::error::{CatalogError, Parameter, Result};

/// Raw query parameters as collected from the command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    pub platform: Option<String>,
    pub category: Option<String>,
    pub service: Option<String>,
    pub solution: Option<String>,
    /// Resolve the solution's cross-platform equivalents.
    pub equivalent: bool,
    /// Add the description column to solution-level projections.
    pub include_description: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Query {
    PlatformDetail {
        platform: String,
    },
    PlatformCategory {
        platform: String,
        category: String,
    },
    PlatformService {
        platform: String,
        service: String,
        include_description: bool,
    },
    Category {
        category: String,
    },
    Service {
        service: String,
        include_description: bool,
    },
    SolutionDetail {
        solution: String,
    },
    Equivalents {
        solution: String,
        include_description: bool,
    },
}

impl Query {
    pub fn from_params(params: &QueryParams) -> Result<Self> {
        let QueryParams {
            platform,
            category,
            service,
            solution,
            equivalent,
            include_description,
        } = params.clone();

        let query = match (platform, category, service, solution, equivalent) {
            (Some(platform), None, None, None, false) => Query::PlatformDetail { platform },
            (Some(platform), Some(category), None, None, false) => {
                Query::PlatformCategory { platform, category }
            }
            (Some(platform), None, Some(service), None, false) => Query::PlatformService {
                platform,
                service,
                include_description,
            },
            (None, Some(category), None, None, false) => Query::Category { category },
            (None, None, Some(service), None, false) => Query::Service {
                service,
                include_description,
            },
            (None, None, None, Some(solution), false) => Query::SolutionDetail { solution },
            (None, None, None, Some(solution), true) => Query::Equivalents {
                solution,
                include_description,
            },
            (_, _, _, None, true) => {
                return Err(CatalogError::Configuration(
                    "--equivalent requires --solution".to_string(),
                ));
            }
            (None, None, None, None, false) => {
                return Err(CatalogError::Configuration(
                    "one of --platform, --category, --service or --solution is required"
                        .to_string(),
                ));
            }
            _ => {
                return Err(CatalogError::Configuration(
                    "supported combinations are --platform [--category | --service], \
                     --category, --service, --solution [--equivalent]"
                        .to_string(),
                ));
            }
        };

        if include_description && !query.takes_description() {
            return Err(CatalogError::Configuration(format!(
                "--description does not apply to the {} query",
                query.name()
            )));
        }
        Ok(query)
    }

    /// Short name of the shape, used in logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Query::PlatformDetail { .. } => "platform",
            Query::PlatformCategory { .. } => "platform+category",
            Query::PlatformService { .. } => "platform+service",
            Query::Category { .. } => "category",
            Query::Service { .. } => "service",
            Query::SolutionDetail { .. } => "solution",
            Query::Equivalents { .. } => "solution+equivalent",
        }
    }

    fn takes_description(&self) -> bool {
        matches!(
            self,
            Query::PlatformService { .. } | Query::Service { .. } | Query::Equivalents { .. }
        )
    }

    /// Identifier parameters carried by this shape, in declaration order.
    pub fn identifiers(&self) -> Vec<(Parameter, &str)> {
        match self {
            Query::PlatformDetail { platform } => vec![(Parameter::Platform, platform.as_str())],
            Query::PlatformCategory { platform, category } => vec![
                (Parameter::Platform, platform.as_str()),
                (Parameter::Category, category.as_str()),
            ],
            Query::PlatformService {
                platform, service, ..
            } => vec![
                (Parameter::Platform, platform.as_str()),
                (Parameter::Service, service.as_str()),
            ],
            Query::Category { category } => vec![(Parameter::Category, category.as_str())],
            Query::Service { service, .. } => vec![(Parameter::Service, service.as_str())],
            Query::SolutionDetail { solution } | Query::Equivalents { solution, .. } => {
                vec![(Parameter::Solution, solution.as_str())]
            }
        }
    }

    /// Check every identifier against its column; the first unknown one fails.
    pub fn validate(&self, index: &ColumnIndex) -> Result<()> {
        for (parameter, value) in self.identifiers() {
            index.require(parameter, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Record;

    fn params() -> QueryParams {
        QueryParams::default()
    }

    fn some(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    #[test]
    fn selects_each_of_the_seven_shapes() {
        let cases = [
            (
                QueryParams {
                    platform: some("AWS"),
                    ..params()
                },
                "platform",
            ),
            (
                QueryParams {
                    platform: some("AWS"),
                    category: some("Storage"),
                    ..params()
                },
                "platform+category",
            ),
            (
                QueryParams {
                    platform: some("AWS"),
                    service: some("Object Storage"),
                    include_description: true,
                    ..params()
                },
                "platform+service",
            ),
            (
                QueryParams {
                    category: some("Storage"),
                    ..params()
                },
                "category",
            ),
            (
                QueryParams {
                    service: some("Object Storage"),
                    ..params()
                },
                "service",
            ),
            (
                QueryParams {
                    solution: some("Amazon S3"),
                    ..params()
                },
                "solution",
            ),
            (
                QueryParams {
                    solution: some("Amazon S3"),
                    equivalent: true,
                    include_description: true,
                    ..params()
                },
                "solution+equivalent",
            ),
        ];
        for (input, expected) in cases {
            let query = Query::from_params(&input).unwrap();
            assert_eq!(query.name(), expected, "params {input:?}");
        }
    }

    #[test]
    fn rejects_unsupported_combinations() {
        let rejected = [
            params(),
            QueryParams {
                category: some("Storage"),
                service: some("Object Storage"),
                ..params()
            },
            QueryParams {
                platform: some("AWS"),
                solution: some("Amazon S3"),
                ..params()
            },
            QueryParams {
                platform: some("AWS"),
                category: some("Storage"),
                service: some("Object Storage"),
                ..params()
            },
            QueryParams {
                service: some("Object Storage"),
                equivalent: true,
                ..params()
            },
            QueryParams {
                platform: some("AWS"),
                solution: some("Amazon S3"),
                equivalent: true,
                ..params()
            },
        ];
        for input in rejected {
            let err = Query::from_params(&input).unwrap_err();
            assert!(
                matches!(err, CatalogError::Configuration(_)),
                "expected configuration error for {input:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn description_flag_only_applies_to_solution_projections() {
        for input in [
            QueryParams {
                platform: some("AWS"),
                include_description: true,
                ..params()
            },
            QueryParams {
                category: some("Storage"),
                include_description: true,
                ..params()
            },
            QueryParams {
                solution: some("Amazon S3"),
                include_description: true,
                ..params()
            },
        ] {
            assert!(matches!(
                Query::from_params(&input),
                Err(CatalogError::Configuration(_))
            ));
        }
    }

    #[test]
    fn validation_names_the_unknown_parameter() {
        let index = ColumnIndex::build(&[Record {
            platform: "AWS".into(),
            category: "Storage".into(),
            service: "Object Storage".into(),
            solution: "Amazon S3".into(),
            description: String::new(),
        }]);

        let query = Query::PlatformCategory {
            platform: "AWS".into(),
            category: "Compute".into(),
        };
        match query.validate(&index) {
            Err(CatalogError::Validation { parameter, value }) => {
                assert_eq!(parameter, Parameter::Category);
                assert_eq!(value, "Compute");
            }
            other => panic!("expected validation error, got {other:?}"),
        }

        let known = Query::Equivalents {
            solution: "Amazon S3".into(),
            include_description: false,
        };
        assert!(known.validate(&index).is_ok());
    }
}
