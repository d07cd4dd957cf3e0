//! Shared base page and the generic page container.
//!
//! Every rendered page is a [`PageModel`]: the common [`Page`] fields
//! flattened at the top level, plus a page-specific payload under `data`.
//!
//! ```json
//! {
//!   "type": "dataset_versions",
//!   "uri": "/datasets/cpih01/editions/time-series/versions",
//!   "language": "en",
//!   "site_domain": "example.gov.uk",
//!   "metadata": { "title": "...", "description": "", "keywords": [] },
//!   "breadcrumb": [],
//!   "search_disabled": false,
//!   "data": { "versions": [], "latest_version_url": "", "feedback_url": "" }
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::custom_dataset::CreateCustomDataset;
use super::dataset::FilterableLanding;
use super::feedback::Feedback;
use super::taxonomy::TaxonomyNode;
use super::version::VersionsList;
use crate::config::Config;

/// Page type of the filterable dataset landing page.
pub const FILTERABLE_LANDING_TYPE: &str = "dataset_landing_page";
/// Page type of the versions list page.
pub const VERSIONS_LIST_TYPE: &str = "dataset_versions";
/// Page type of the create custom dataset page.
pub const CREATE_CUSTOM_DATASET_TYPE: &str = "create_custom_dataset";
/// Page type of the feedback page.
pub const FEEDBACK_TYPE: &str = "feedback";

/// Head metadata of a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
}

/// Fields common to every rendered page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Page {
    #[serde(rename = "type")]
    pub page_type: String,
    pub uri: String,
    pub language: String,
    pub site_domain: String,
    pub metadata: Metadata,
    pub breadcrumb: Vec<TaxonomyNode>,
    pub search_disabled: bool,
}

impl Page {
    /// Creates a base page seeded with the configured language and site domain.
    pub fn new(config: &Config, page_type: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            page_type: page_type.into(),
            uri: uri.into(),
            language: config.default_language.clone(),
            site_domain: config.site_domain.clone(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.metadata.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.metadata.description = description.into();
        self
    }

    pub fn with_breadcrumb(mut self, breadcrumb: Vec<TaxonomyNode>) -> Self {
        self.breadcrumb = breadcrumb;
        self
    }

    /// Switches the page language if `config` supports it.
    ///
    /// Unsupported languages leave the configured default in place.
    pub fn with_language(mut self, config: &Config, language: &str) -> Self {
        if config.supports_language(language) {
            self.language = language.to_string();
        } else {
            tracing::debug!(
                language,
                default = %config.default_language,
                "Unsupported language requested, keeping default"
            );
        }
        self
    }

    pub fn with_search_disabled(mut self, disabled: bool) -> Self {
        self.search_disabled = disabled;
        self
    }
}

/// A rendered page: shared base fields plus a typed payload.
///
/// The base is flattened, so its keys sit next to `data` in the JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageModel<D> {
    #[serde(flatten)]
    pub page: Page,
    #[serde(default)]
    pub data: D,
}

impl<D> PageModel<D> {
    pub fn new(page: Page, data: D) -> Self {
        Self { page, data }
    }
}

pub type FilterableLandingPage = PageModel<FilterableLanding>;
pub type VersionsListPage = PageModel<VersionsList>;
pub type CreateCustomDatasetPage = PageModel<CreateCustomDataset>;
pub type FeedbackPage = PageModel<Feedback>;
