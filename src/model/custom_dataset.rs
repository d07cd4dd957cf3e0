//! Payload of the "create a custom dataset" page.

use serde::{Deserialize, Serialize};

/// A population a custom dataset can be built from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationType {
    pub name: String,
    pub label: String,
    pub description: String,
}

/// Selectable population types, in the order they are offered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateCustomDataset {
    pub population_types: Vec<PopulationType>,
}
