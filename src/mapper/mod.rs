//! Mapping from backend API responses to page models.
//!
//! Mappers are pure and synchronous: callers fetch the [`crate::upstream`]
//! records, build a base [`crate::model::Page`], and get back a page ready
//! for rendering.

pub mod custom_dataset;
pub mod dataset;
pub mod feedback;
pub mod format;
pub mod versions;

pub use custom_dataset::map_create_custom_dataset;
pub use dataset::{map_contact, map_dataset, map_dimensions, map_downloads, map_filterable_landing};
pub use feedback::{map_feedback, submit_feedback};
pub use format::{format_release_date, human_size, version_url, versions_url};
pub use versions::map_versions_list;
