//! Query engine over a static catalog of cloud-provider offerings.
//!
//! The dataset is organised as Platform → Category → Service → Solution.
//! Besides filtering by any level of that hierarchy, the engine resolves a
//! solution's equivalents: solutions sharing its service on other platforms.

pub mod catalog;
pub mod error;
pub mod output;
pub mod query;

pub use catalog::{
    ColumnIndex, DEFAULT_DATASET_PATH, Record, load_records, load_records_from_reader,
};
pub use error::{CatalogError, Parameter};
pub use output::{QueryOutput, TableRow};
pub use query::{Query, QueryParams, resolve, run_query};

use std::{
    env, fs,
    path::{Path, PathBuf},
};

pub const ENV_DATA_ROOT: &str = "CLOUDMATCH_ROOT";
pub const ENV_DATASET: &str = "CLOUDMATCH_DATASET";

fn is_data_root(candidate: &Path) -> bool {
    candidate.join(DEFAULT_DATASET_PATH).is_file()
}

fn data_root_from_hint(hint: &str) -> Option<PathBuf> {
    if hint.is_empty() {
        return None;
    }
    let hint_path = PathBuf::from(hint);
    if !is_data_root(&hint_path) {
        return None;
    }
    fs::canonicalize(hint_path).ok()
}

fn search_upwards(start: &Path) -> Option<PathBuf> {
    let mut dir = fs::canonicalize(start).ok()?;
    loop {
        if is_data_root(&dir) {
            return Some(dir);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// Locate the directory holding `data/clouds.csv`.
///
/// Search order: `CLOUDMATCH_ROOT`, the executable's ancestors, the working
/// directory's ancestors, then the build-time hint.
pub fn find_data_root() -> Option<PathBuf> {
    if let Ok(env_root) = env::var(ENV_DATA_ROOT) {
        if let Some(root) = data_root_from_hint(&env_root) {
            return Some(root);
        }
    }

    if let Ok(exe_path) = env::current_exe() {
        if let Some(root) = exe_path.parent().and_then(search_upwards) {
            return Some(root);
        }
    }

    if let Ok(cwd) = env::current_dir() {
        if let Some(root) = search_upwards(&cwd) {
            return Some(root);
        }
    }

    option_env!("CLOUDMATCH_ROOT_HINT").and_then(data_root_from_hint)
}

/// The bundled dataset under the discovered root, or the bare relative path.
pub fn default_dataset_path() -> PathBuf {
    match find_data_root() {
        Some(root) => root.join(DEFAULT_DATASET_PATH),
        None => PathBuf::from(DEFAULT_DATASET_PATH),
    }
}

/// Apply the dataset precedence: explicit path, `CLOUDMATCH_DATASET`, default.
pub fn resolve_dataset_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    match env::var(ENV_DATASET) {
        Ok(value) if !value.is_empty() => PathBuf::from(value),
        _ => default_dataset_path(),
    }
}
