//! Dataset metadata and the filterable landing page payload.

use serde::{Deserialize, Serialize};

use super::contact::Contact;
use super::version::Download;

/// Metadata of one published dataset edition/version.
///
/// Field order matters: it is the key order of the serialized JSON that
/// templates and downstream clients read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub id: String,
    pub title: String,
    pub url: String,
    pub release_date: String,
    pub next_release: String,
    pub edition: String,
    pub version: String,
    pub contact: Contact,
}

/// A classification axis of a dataset (geography, time, aggregate...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dimension {
    pub code_list_id: String,
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub dimension_type: String,
    /// Option labels in the order the backend returned them.
    pub values: Vec<String>,
}

/// Data payload of the filterable dataset landing page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterableLanding {
    pub dataset: Dataset,
    pub dimensions: Vec<Dimension>,
    pub downloads: Vec<Download>,
    pub is_latest: bool,
    pub latest_version_url: String,
    pub versions_url: String,
    pub has_older_versions: bool,
}
