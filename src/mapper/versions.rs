//! Versions list mapping.

use std::cmp::Reverse;

use crate::error::ModelError;
use crate::mapper::dataset::{map_contact, map_downloads};
use crate::mapper::format::{format_release_date, version_url};
use crate::model::{Page, PageModel, Version, VersionsList, VersionsListPage};
use crate::upstream::{DatasetDetails, VersionDetails};

/// Builds the versions page of one dataset edition.
///
/// Versions are ordered newest first by version number; only the first one
/// is flagged `is_latest` and its URL becomes `latest_version_url`. Pass an
/// empty `feedback_url` to leave the feedback link out.
///
/// # Errors
///
/// Returns [`ModelError::InvalidPathSegment`] if a version URL cannot be built.
pub fn map_versions_list(
    page: Page,
    dataset: &DatasetDetails,
    mut versions: Vec<VersionDetails>,
    feedback_url: &str,
) -> Result<VersionsListPage, ModelError> {
    versions.sort_by_key(|v| Reverse(v.version));

    let contact = map_contact(dataset);
    let next_release = format_release_date(&dataset.next_release);

    let versions = versions
        .iter()
        .enumerate()
        .map(|(index, v)| {
            let number = v.version.to_string();
            let release_date = format_release_date(&v.release_date);
            let (downloads, supplementary_files) = map_downloads(v);

            Ok(Version {
                title: dataset.title.clone(),
                description: dataset.description.clone(),
                url: version_url(&dataset.id, &v.edition, &number)?,
                update_date: release_date.clone(),
                release_date,
                next_release: next_release.clone(),
                edition: v.edition.clone(),
                version: number,
                is_latest: index == 0,
                downloads,
                contact: contact.clone(),
                supplementary_files,
                correction_notice: v.correction_notice().unwrap_or_default().to_string(),
            })
        })
        .collect::<Result<Vec<_>, ModelError>>()?;

    let latest_version_url = versions
        .first()
        .map(|v| v.url.clone())
        .unwrap_or_default();

    tracing::debug!(
        dataset = %dataset.id,
        versions = versions.len(),
        "Mapped versions list"
    );

    Ok(PageModel::new(
        page,
        VersionsList {
            versions,
            latest_version_url,
            feedback_url: feedback_url.to_string(),
        },
    ))
}
