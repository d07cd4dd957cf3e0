//! Version resource returned by the dataset API, with its dimensions and
//! downloadable files.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_with::{DefaultOnNull, DisplayFromStr, PickFirst, serde_as};

use super::dataset::LinkObject;

/// Alert type marking a published correction.
pub const CORRECTION_ALERT: &str = "correction";

/// A downloadable file; `size` is in bytes.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DownloadDetails {
    #[serde_as(as = "DefaultOnNull")]
    pub href: String,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub size: Option<u64>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DimensionLinks {
    #[serde_as(as = "DefaultOnNull")]
    pub code_list: LinkObject,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct VersionDimension {
    #[serde_as(as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(as = "DefaultOnNull")]
    pub name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub label: String,
    #[serde_as(as = "DefaultOnNull")]
    pub description: String,
    #[serde(rename = "type")]
    #[serde_as(as = "DefaultOnNull")]
    pub dimension_type: String,
    #[serde_as(as = "DefaultOnNull")]
    pub links: DimensionLinks,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Alert {
    #[serde_as(as = "DefaultOnNull")]
    pub date: String,
    #[serde_as(as = "DefaultOnNull")]
    pub description: String,
    #[serde(rename = "type")]
    #[serde_as(as = "DefaultOnNull")]
    pub alert_type: String,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DimensionOption {
    #[serde_as(as = "DefaultOnNull")]
    pub dimension: String,
    #[serde_as(as = "DefaultOnNull")]
    pub label: String,
    #[serde_as(as = "DefaultOnNull")]
    pub option: String,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct VersionDetails {
    #[serde_as(as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(as = "DefaultOnNull")]
    pub edition: String,
    #[serde_as(as = "DefaultOnNull<PickFirst<(_, DisplayFromStr)>>")]
    pub version: u32,
    #[serde_as(as = "DefaultOnNull")]
    pub release_date: String,
    /// Keyed by format (`csv`, `xls`, ...); iteration order is alphabetical.
    #[serde_as(as = "DefaultOnNull")]
    pub downloads: BTreeMap<String, DownloadDetails>,
    #[serde_as(as = "DefaultOnNull")]
    pub dimensions: Vec<VersionDimension>,
    #[serde_as(as = "DefaultOnNull")]
    pub alerts: Vec<Alert>,
}

impl VersionDetails {
    /// First correction notice attached to this version, if any.
    pub fn correction_notice(&self) -> Option<&str> {
        self.alerts
            .iter()
            .find(|a| a.alert_type == CORRECTION_ALERT)
            .map(|a| a.description.as_str())
    }
}
