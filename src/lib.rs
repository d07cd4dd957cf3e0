//! # Dataset Pages
//!
//! Page view-models for the dataset front-end: the JSON payloads a
//! controller hands to its renderer for dataset landing pages, version
//! lists, the custom dataset builder and the feedback form.
//!
//! ## Architecture
//!
//! - **Model Layer** ([`model`]) - Passive page records with fixed JSON keys
//! - **Upstream Layer** ([`upstream`]) - Shapes of the backend API responses
//! - **Mapping Layer** ([`mapper`]) - Pure functions populating pages from upstream records
//! - **Response Layer** ([`response`]) - Hands a page to axum or to a JSON renderer
//!
//! Every page is a [`model::PageModel`]: the shared [`model::Page`] fields
//! flattened beside a page-specific `data` payload.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! let config = dataset_pages::config::load_from_env()?;
//! let page = Page::new(&config, VERSIONS_LIST_TYPE, "/datasets/cpih01/editions/time-series/versions");
//! let versions = map_versions_list(page, &dataset, versions, &config.feedback_url)?;
//! println!("{}", versions.to_json_pretty()?);
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod config;
pub mod error;
pub mod mapper;
pub mod model;
pub mod response;
pub mod upstream;

pub use error::ModelError;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::ModelError;
    pub use crate::mapper::{
        map_create_custom_dataset, map_feedback, map_filterable_landing, map_versions_list,
        submit_feedback,
    };
    pub use crate::model::page::{
        CREATE_CUSTOM_DATASET_TYPE, FEEDBACK_TYPE, FILTERABLE_LANDING_TYPE, VERSIONS_LIST_TYPE,
    };
    pub use crate::model::{
        CreateCustomDatasetPage, FeedbackForm, FeedbackPage, FilterableLandingPage, Page,
        PageModel, TaxonomyNode, VersionsListPage,
    };
}
