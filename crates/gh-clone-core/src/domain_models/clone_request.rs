//! Clone request model

use crate::domain_models::RepositoryRecord;

/// Arguments for one clone invocation, built at the moment the command runs
/// from the current selection and base path. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneRequest {
    pub clone_url: String,
    pub name: String,
    pub destination_root: String,
}

impl CloneRequest {
    pub fn for_repository(record: &RepositoryRecord, destination_root: impl Into<String>) -> Self {
        Self {
            clone_url: record.clone_url.clone(),
            name: record.name.clone(),
            destination_root: destination_root.into(),
        }
    }
}
