use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::utils::checksum::sha256_file;

/// Provenance facts for one source dataset, written as a sidecar JSON
/// next to the raw file and aggregated into the run-level metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProvenanceRecord {
    pub dataset_short_name: String,
    #[serde(rename = "type")]
    pub dataset_type: String,
    pub local_path: String,
    pub source_url: Option<String>,
    pub dataset_doi: Option<String>,
    pub sha256: Option<String>,
    pub citation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citation_guidelines_url: Option<String>,
    pub created_at: String,
}

/// Static description of a known source dataset; becomes a
/// `ProvenanceRecord` once the local file has been checksummed.
#[derive(Debug, Clone)]
pub struct SourceDescriptor {
    pub short_name: &'static str,
    pub dataset_type: &'static str,
    pub file_name: &'static str,
    pub source_url: &'static str,
    pub dataset_doi: Option<&'static str>,
    pub citation_body: &'static str,
    pub citation_guidelines_url: Option<&'static str>,
}

impl SourceDescriptor {
    /// Materialize a provenance record for the local copy of this source.
    /// The citation carries the access date; `created_at` is a full
    /// ISO-8601 UTC timestamp.
    pub fn describe(&self, local_path: &Path) -> Result<ProvenanceRecord> {
        let now = Utc::now();
        let access_date = now.format("%Y-%m-%d");
        let checksum = if local_path.is_file() {
            Some(sha256_file(local_path)?)
        } else {
            None
        };

        Ok(ProvenanceRecord {
            dataset_short_name: self.short_name.to_string(),
            dataset_type: self.dataset_type.to_string(),
            local_path: local_path.display().to_string(),
            source_url: Some(self.source_url.to_string()),
            dataset_doi: self.dataset_doi.map(str::to_string),
            sha256: checksum,
            citation: format!("{} Accessed {}.", self.citation_body, access_date),
            citation_guidelines_url: self.citation_guidelines_url.map(str::to_string),
            created_at: now.to_rfc3339_opts(SecondsFormat::Micros, true),
        })
    }
}
