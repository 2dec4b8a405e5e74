//! Query resolution over an in-memory record set.
//!
//! `Query` picks one of the seven shapes, `run_query` dispatches it to its
//! resolver, and `resolve` adds the identifier validation that must precede
//! every resolution.

pub mod equivalence;
pub mod resolvers;
pub mod shape;

pub use equivalence::{equivalent_solutions, equivalent_solutions_described};
pub use shape::{Query, QueryParams};

use crate::catalog::{ColumnIndex, Record};
use crate::error::Result;
use crate::output::QueryOutput;
use tracing::debug;

/// Validate `query` against `records`, then resolve it.
pub fn resolve(records: &[Record], query: &Query) -> Result<QueryOutput> {
    query.validate(&ColumnIndex::build(records))?;
    Ok(run_query(records, query))
}

/// Resolve an already validated query.
pub fn run_query(records: &[Record], query: &Query) -> QueryOutput {
    let output = match query {
        Query::PlatformDetail { platform } => {
            QueryOutput::Records(resolvers::platform_detail(records, platform))
        }
        Query::PlatformCategory { platform, category } => QueryOutput::Services(
            resolvers::platform_category_services(records, platform, category),
        ),
        Query::PlatformService {
            platform,
            service,
            include_description: false,
        } => QueryOutput::Solutions(resolvers::platform_service_solutions(
            records, platform, service,
        )),
        Query::PlatformService {
            platform,
            service,
            include_description: true,
        } => QueryOutput::DescribedSolutions(resolvers::platform_service_solutions_described(
            records, platform, service,
        )),
        Query::Category { category } => {
            QueryOutput::PlatformServices(resolvers::category_services(records, category))
        }
        Query::Service {
            service,
            include_description: false,
        } => QueryOutput::PlatformSolutions(resolvers::service_solutions(records, service)),
        Query::Service {
            service,
            include_description: true,
        } => QueryOutput::DescribedPlatformSolutions(resolvers::service_solutions_described(
            records, service,
        )),
        Query::SolutionDetail { solution } => {
            QueryOutput::Records(resolvers::solution_detail(records, solution))
        }
        Query::Equivalents {
            solution,
            include_description: false,
        } => QueryOutput::PlatformSolutions(equivalent_solutions(records, solution)),
        Query::Equivalents {
            solution,
            include_description: true,
        } => QueryOutput::DescribedPlatformSolutions(equivalent_solutions_described(
            records, solution,
        )),
    };
    debug!(shape = query.name(), rows = output.len(), "resolved query");
    output
}
