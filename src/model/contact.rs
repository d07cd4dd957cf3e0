//! Contact details shown alongside a dataset or one of its versions.

use serde::{Deserialize, Serialize};

/// Named contact for a dataset.
///
/// Owned by exactly one [`Dataset`](super::dataset::Dataset) or
/// [`Version`](super::version::Version); never shared between them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub name: String,
    pub telephone: String,
    pub email: String,
}

impl Contact {
    /// Returns true when no contact detail is filled in.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.telephone.is_empty() && self.email.is_empty()
    }
}
