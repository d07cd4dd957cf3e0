//! Shapes of the backend API responses the mappers read.
//!
//! Deserialization is lenient: a missing key or an explicit `null` becomes
//! the field's default, and numeric fields accept either numbers or numeric
//! strings. Fetching these responses is the caller's job.

pub mod dataset;
pub mod population;
pub mod version;

use serde::Deserialize;
use serde_with::{DefaultOnNull, serde_as};

pub use dataset::{ContactDetails, DatasetDetails, DatasetLinks, LinkObject};
pub use population::PopulationTypeItem;
pub use version::{
    Alert, DimensionLinks, DimensionOption, DownloadDetails, VersionDetails, VersionDimension,
};

/// Paginated list envelope used by the backend list endpoints.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct ItemList<T> {
    #[serde_as(as = "DefaultOnNull")]
    pub items: Vec<T>,
    #[serde_as(as = "DefaultOnNull")]
    pub count: usize,
    #[serde_as(as = "DefaultOnNull")]
    pub total_count: usize,
}

/// Options of one dimension, as listed by the backend.
pub type DimensionOptions = ItemList<DimensionOption>;

impl DimensionOptions {
    /// Name of the dimension these options belong to, taken from the first item.
    pub fn dimension_name(&self) -> Option<&str> {
        self.items
            .first()
            .map(|o| o.dimension.as_str())
            .filter(|name| !name.is_empty())
    }
}
