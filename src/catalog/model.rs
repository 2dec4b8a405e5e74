use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// One row of the offerings dataset.
///
/// Fields are opaque, case-sensitive strings. `description` is usually a
/// reference URL and is empty when the source leaves it blank.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Record {
    pub platform: String,
    pub category: String,
    pub service: String,
    pub solution: String,
    #[serde(default)]
    pub description: String,
}

/// Load every record from the CSV file at `path`, in source order.
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let reader = reader_builder()
        .from_path(path)
        .map_err(|source| CatalogError::Load {
            path: path.to_path_buf(),
            source,
        })?;
    let records = collect_records(reader).map_err(|source| CatalogError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), rows = records.len(), "loaded dataset");
    Ok(records)
}

/// Load records from any CSV byte stream; `origin` labels errors.
pub fn load_records_from_reader<R: Read>(input: R, origin: &Path) -> Result<Vec<Record>> {
    collect_records(reader_builder().from_reader(input)).map_err(|source| CatalogError::Load {
        path: origin.to_path_buf(),
        source,
    })
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    // Rows must have exactly as many fields as the header.
    builder.has_headers(true).flexible(false).trim(csv::Trim::None);
    builder
}

fn collect_records<R: Read>(mut reader: csv::Reader<R>) -> csv::Result<Vec<Record>> {
    reader.deserialize().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_order_does_not_matter() {
        let data = "Category,Service,Platform,Solution,Description\n\
                    Storage,Object Storage,AWS,Amazon S3,https://aws.amazon.com/s3/\n";
        let records = load_records_from_reader(data.as_bytes(), Path::new("inline")).unwrap();
        assert_eq!(
            records,
            vec![Record {
                platform: "AWS".into(),
                category: "Storage".into(),
                service: "Object Storage".into(),
                solution: "Amazon S3".into(),
                description: "https://aws.amazon.com/s3/".into(),
            }]
        );
    }

    #[test]
    fn missing_description_column_defaults_to_empty() {
        let data = "Platform,Category,Service,Solution\nAzure,Compute,Virtual Machines,Azure VMs\n";
        let records = load_records_from_reader(data.as_bytes(), Path::new("inline")).unwrap();
        assert_eq!(records[0].description, "");
    }

    #[test]
    fn values_are_not_trimmed() {
        let data = "Platform,Category,Service,Solution,Description\nAWS, Storage ,Object Storage,Amazon S3,\n";
        let records = load_records_from_reader(data.as_bytes(), Path::new("inline")).unwrap();
        assert_eq!(records[0].category, " Storage ");
    }

    #[test]
    fn row_with_extra_field_is_a_load_error() {
        let data = "Platform,Category,Service,Solution,Description\n\
                    Azure,Storage,Object Storage,Blob,https://x/?a=1,b=2\n";
        let err = load_records_from_reader(data.as_bytes(), Path::new("inline")).unwrap_err();
        assert!(matches!(err, CatalogError::Load { .. }), "got {err:?}");
    }

    #[test]
    fn row_with_missing_field_is_a_load_error() {
        let data = "Platform,Category,Service,Solution,Description\n\
                    AWS,Storage,Object Storage,Amazon S3,url\n\
                    Azure,Storage,Object Storage\n";
        let err = load_records_from_reader(data.as_bytes(), Path::new("inline")).unwrap_err();
        assert!(matches!(err, CatalogError::Load { .. }), "got {err:?}");
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let err = load_records(Path::new("/nonexistent/clouds.csv")).unwrap_err();
        assert!(matches!(err, CatalogError::Load { .. }));
    }
}
