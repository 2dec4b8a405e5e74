//! Cross-platform equivalence.
//!
//! Two solutions are equivalent when they share a service value and live on
//! different platforms. A solution name can occur on more than one platform;
//! each occurrence is an anchor, and no anchor platform is ever reported as
//! an equivalent.

use crate::catalog::Record;
use crate::output::{DescribedPlatformSolutionRow, PlatformSolutionRow};
use crate::query::resolvers::{service_solutions, service_solutions_described, solution_detail};
use std::collections::{BTreeSet, HashSet};
use std::hash::Hash;
use tracing::trace;

/// A projected row that belongs to a platform.
pub trait PlatformScoped {
    fn platform(&self) -> &str;
}

impl PlatformScoped for PlatformSolutionRow {
    fn platform(&self) -> &str {
        &self.platform
    }
}

impl PlatformScoped for DescribedPlatformSolutionRow {
    fn platform(&self) -> &str {
        &self.platform
    }
}

/// Equivalents of `solution`, deduplicated by `(Platform, Solution)`.
pub fn equivalent_solutions(records: &[Record], solution: &str) -> Vec<PlatformSolutionRow> {
    resolve_equivalents(records, solution, service_solutions)
}

/// Equivalents of `solution`, deduplicated by `(Platform, Solution, Description)`.
pub fn equivalent_solutions_described(
    records: &[Record],
    solution: &str,
) -> Vec<DescribedPlatformSolutionRow> {
    resolve_equivalents(records, solution, service_solutions_described)
}

/// Join the solution's anchors to their services and union the results.
///
/// Rows keep the per-service solution order and first-appearance order across
/// anchors; later duplicates of an already emitted row are dropped.
fn resolve_equivalents<T, F>(records: &[Record], solution: &str, by_service: F) -> Vec<T>
where
    T: PlatformScoped + Clone + Eq + Hash,
    F: Fn(&[Record], &str) -> Vec<T>,
{
    let anchors = solution_detail(records, solution);
    let anchor_platforms: BTreeSet<&str> = anchors.iter().map(|a| a.platform.as_str()).collect();

    let mut seen: HashSet<T> = HashSet::new();
    let mut rows = Vec::new();
    for anchor in &anchors {
        trace!(
            platform = %anchor.platform,
            service = %anchor.service,
            "expanding equivalence anchor"
        );
        for row in by_service(records, &anchor.service) {
            if anchor_platforms.contains(row.platform()) {
                continue;
            }
            if seen.insert(row.clone()) {
                rows.push(row);
            }
        }
    }
    rows
}
