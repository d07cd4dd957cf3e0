//! Create custom dataset page mapping.

use crate::model::{
    CreateCustomDataset, CreateCustomDatasetPage, Page, PageModel, PopulationType,
};
use crate::upstream::PopulationTypeItem;

/// Builds the create custom dataset page.
///
/// Population types keep the backend order; entries without a name cannot be
/// selected and are dropped.
pub fn map_create_custom_dataset(
    page: Page,
    population_types: Vec<PopulationTypeItem>,
) -> CreateCustomDatasetPage {
    let offered = population_types.len();

    let population_types: Vec<PopulationType> = population_types
        .into_iter()
        .filter(|p| !p.name.trim().is_empty())
        .map(|p| PopulationType {
            name: p.name,
            label: p.label,
            description: p.description,
        })
        .collect();

    if population_types.len() < offered {
        tracing::debug!(
            skipped = offered - population_types.len(),
            "Dropped population types without a name"
        );
    }

    PageModel::new(page, CreateCustomDataset { population_types })
}
