//! Page view-models handed to the rendering layer.
//!
//! All records are passive, request-scoped values. Keys are fixed: they are
//! the contract with templates and downstream JSON clients. Absent values
//! serialize as `""` or `[]`, never as a missing key.

pub mod contact;
pub mod custom_dataset;
pub mod dataset;
pub mod feedback;
pub mod page;
pub mod taxonomy;
pub mod version;

pub use contact::Contact;
pub use custom_dataset::{CreateCustomDataset, PopulationType};
pub use dataset::{Dataset, Dimension, FilterableLanding};
pub use feedback::{Feedback, FeedbackForm, FieldError};
pub use page::{
    CreateCustomDatasetPage, FeedbackPage, FilterableLandingPage, Metadata, Page, PageModel,
    VersionsListPage,
};
pub use taxonomy::{NodeDescription, TaxonomyNode};
pub use version::{Download, SupplementaryFile, Version, VersionsList};
