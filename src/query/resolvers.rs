//! Filter/project/sort resolvers, one per query shape.
//!
//! Resolvers take the already-loaded records and assume their identifiers
//! were validated. Sorting is stable and ordinal, so ties keep source order.

use crate::catalog::Record;
use crate::output::{
    DescribedPlatformSolutionRow, DescribedSolutionRow, PlatformServiceRow, PlatformSolutionRow,
    ServiceRow, SolutionRow,
};

/// Full catalog of one platform, ordered by category.
pub fn platform_detail(records: &[Record], platform: &str) -> Vec<Record> {
    let mut rows: Vec<Record> = records
        .iter()
        .filter(|r| r.platform == platform)
        .cloned()
        .collect();
    rows.sort_by(|a, b| a.category.cmp(&b.category));
    rows
}

/// Services a platform offers in one category. Repeated services are kept.
pub fn platform_category_services(
    records: &[Record],
    platform: &str,
    category: &str,
) -> Vec<ServiceRow> {
    let mut rows: Vec<ServiceRow> = records
        .iter()
        .filter(|r| r.platform == platform && r.category == category)
        .map(|r| ServiceRow {
            service: r.service.clone(),
        })
        .collect();
    rows.sort_by(|a, b| a.service.cmp(&b.service));
    rows
}

pub fn platform_service_solutions(
    records: &[Record],
    platform: &str,
    service: &str,
) -> Vec<SolutionRow> {
    let mut rows: Vec<SolutionRow> = platform_service_matches(records, platform, service)
        .map(|r| SolutionRow {
            solution: r.solution.clone(),
        })
        .collect();
    rows.sort_by(|a, b| a.solution.cmp(&b.solution));
    rows
}

pub fn platform_service_solutions_described(
    records: &[Record],
    platform: &str,
    service: &str,
) -> Vec<DescribedSolutionRow> {
    let mut rows: Vec<DescribedSolutionRow> = platform_service_matches(records, platform, service)
        .map(|r| DescribedSolutionRow {
            solution: r.solution.clone(),
            description: r.description.clone(),
        })
        .collect();
    rows.sort_by(|a, b| a.solution.cmp(&b.solution));
    rows
}

fn platform_service_matches<'a>(
    records: &'a [Record],
    platform: &'a str,
    service: &'a str,
) -> impl Iterator<Item = &'a Record> {
    records
        .iter()
        .filter(move |r| r.platform == platform && r.service == service)
}

/// Every platform's services in one category, ordered by service.
pub fn category_services(records: &[Record], category: &str) -> Vec<PlatformServiceRow> {
    let mut rows: Vec<PlatformServiceRow> = records
        .iter()
        .filter(|r| r.category == category)
        .map(|r| PlatformServiceRow {
            platform: r.platform.clone(),
            service: r.service.clone(),
        })
        .collect();
    rows.sort_by(|a, b| a.service.cmp(&b.service));
    rows
}

/// Solutions implementing a service on any platform, ordered by solution.
pub fn service_solutions(records: &[Record], service: &str) -> Vec<PlatformSolutionRow> {
    let mut rows: Vec<PlatformSolutionRow> = records
        .iter()
        .filter(|r| r.service == service)
        .map(|r| PlatformSolutionRow {
            platform: r.platform.clone(),
            solution: r.solution.clone(),
        })
        .collect();
    rows.sort_by(|a, b| a.solution.cmp(&b.solution));
    rows
}

pub fn service_solutions_described(
    records: &[Record],
    service: &str,
) -> Vec<DescribedPlatformSolutionRow> {
    let mut rows: Vec<DescribedPlatformSolutionRow> = records
        .iter()
        .filter(|r| r.service == service)
        .map(|r| DescribedPlatformSolutionRow {
            platform: r.platform.clone(),
            solution: r.solution.clone(),
            description: r.description.clone(),
        })
        .collect();
    rows.sort_by(|a, b| a.solution.cmp(&b.solution));
    rows
}

/// Every record carrying this solution name, in source order.
pub fn solution_detail(records: &[Record], solution: &str) -> Vec<Record> {
    records
        .iter()
        .filter(|r| r.solution == solution)
        .cloned()
        .collect()
}
