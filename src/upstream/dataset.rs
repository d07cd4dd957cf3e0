//! Dataset resource returned by the dataset API.

use serde::Deserialize;
use serde_with::{DefaultOnNull, serde_as};

/// A `{ "href": ..., "id": ... }` link object.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LinkObject {
    #[serde_as(as = "DefaultOnNull")]
    pub href: String,
    #[serde_as(as = "DefaultOnNull")]
    pub id: String,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DatasetLinks {
    #[serde_as(as = "DefaultOnNull")]
    pub latest_version: LinkObject,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactDetails {
    #[serde_as(as = "DefaultOnNull")]
    pub name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub telephone: String,
    #[serde_as(as = "DefaultOnNull")]
    pub email: String,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DatasetDetails {
    #[serde_as(as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(as = "DefaultOnNull")]
    pub title: String,
    #[serde_as(as = "DefaultOnNull")]
    pub description: String,
    #[serde_as(as = "DefaultOnNull")]
    pub contacts: Vec<ContactDetails>,
    #[serde_as(as = "DefaultOnNull")]
    pub next_release: String,
    #[serde_as(as = "DefaultOnNull")]
    pub links: DatasetLinks,
}
