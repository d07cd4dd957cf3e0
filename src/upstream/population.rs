//! Population types offered by the custom dataset builder backend.

use serde::Deserialize;
use serde_with::{DefaultOnNull, serde_as};

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PopulationTypeItem {
    #[serde_as(as = "DefaultOnNull")]
    pub name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub label: String,
    #[serde_as(as = "DefaultOnNull")]
    pub description: String,
}
