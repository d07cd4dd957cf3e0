//! Dataset, dimension and download mapping for the filterable landing page.

use crate::error::ModelError;
use crate::mapper::format::{format_release_date, human_size, version_url, versions_url};
use crate::model::{
    Contact, Dataset, Dimension, Download, FilterableLanding, FilterableLandingPage, Page,
    PageModel, SupplementaryFile,
};
use crate::upstream::{DatasetDetails, DimensionOptions, DownloadDetails, VersionDetails};

/// Download formats published as metadata rather than data, with their titles.
const METADATA_FORMATS: [(&str, &str); 2] =
    [("csvw", "Metadata (CSV-W)"), ("txt", "Metadata (text)")];

/// Maps the first upstream contact, or an empty one.
pub fn map_contact(dataset: &DatasetDetails) -> Contact {
    dataset
        .contacts
        .first()
        .map(|c| Contact {
            name: c.name.clone(),
            telephone: c.telephone.clone(),
            email: c.email.clone(),
        })
        .unwrap_or_default()
}

fn formatted_size(details: &DownloadDetails) -> String {
    details.size.map(human_size).unwrap_or_default()
}

/// Splits a version's files into data downloads and metadata files.
///
/// Both lists follow the alphabetical order of the format keys. Formats with
/// no link are skipped.
pub fn map_downloads(version: &VersionDetails) -> (Vec<Download>, Vec<SupplementaryFile>) {
    let mut downloads = Vec::new();
    let mut supplementary = Vec::new();

    for (format, details) in version.downloads.iter().filter(|(_, d)| !d.href.is_empty()) {
        let metadata_title = METADATA_FORMATS
            .iter()
            .find(|(f, _)| f.eq_ignore_ascii_case(format))
            .map(|(_, title)| *title);

        match metadata_title {
            Some(title) => supplementary.push(SupplementaryFile {
                title: title.to_string(),
                extension: format.to_ascii_uppercase(),
                size: formatted_size(details),
                uri: details.href.clone(),
            }),
            None => downloads.push(Download {
                extension: format.to_ascii_uppercase(),
                size: formatted_size(details),
                uri: details.href.clone(),
            }),
        }
    }

    (downloads, supplementary)
}

/// Maps dataset and version metadata into a [`Dataset`].
///
/// # Errors
///
/// Returns [`ModelError::InvalidPathSegment`] if the dataset id or edition
/// cannot be used in the version URL.
pub fn map_dataset(
    dataset: &DatasetDetails,
    version: &VersionDetails,
) -> Result<Dataset, ModelError> {
    let version_number = version.version.to_string();

    Ok(Dataset {
        id: dataset.id.clone(),
        title: dataset.title.clone(),
        url: version_url(&dataset.id, &version.edition, &version_number)?,
        release_date: format_release_date(&version.release_date),
        next_release: format_release_date(&dataset.next_release),
        edition: version.edition.clone(),
        version: version_number,
        contact: map_contact(dataset),
    })
}

/// Maps the dimensions of a version, attaching option labels from `options`.
///
/// Options are matched to a dimension by name; dimensions without options
/// get an empty value list. Display names prefer the label.
pub fn map_dimensions(version: &VersionDetails, options: &[DimensionOptions]) -> Vec<Dimension> {
    version
        .dimensions
        .iter()
        .map(|dim| {
            let values = options
                .iter()
                .find(|o| o.dimension_name() == Some(dim.name.as_str()))
                .map(|o| {
                    o.items
                        .iter()
                        .map(|item| {
                            if item.label.is_empty() {
                                item.option.clone()
                            } else {
                                item.label.clone()
                            }
                        })
                        .collect()
                })
                .unwrap_or_default();

            Dimension {
                code_list_id: dim.links.code_list.id.clone(),
                id: dim.id.clone(),
                name: if dim.label.is_empty() {
                    dim.name.clone()
                } else {
                    dim.label.clone()
                },
                dimension_type: dim.dimension_type.clone(),
                values,
            }
        })
        .collect()
}

/// Builds the filterable landing page for one version of a dataset.
///
/// `total_versions` is the number of versions in the edition; more than one
/// means older versions can be listed.
pub fn map_filterable_landing(
    page: Page,
    dataset: &DatasetDetails,
    version: &VersionDetails,
    options: &[DimensionOptions],
    total_versions: usize,
) -> Result<FilterableLandingPage, ModelError> {
    let mapped = map_dataset(dataset, version)?;

    let latest_id = dataset.links.latest_version.id.as_str();
    let is_latest = latest_id.is_empty() || latest_id == mapped.version;
    let latest_version_url = if is_latest {
        mapped.url.clone()
    } else {
        version_url(&dataset.id, &version.edition, latest_id)?
    };

    let (downloads, _) = map_downloads(version);
    let dimensions = map_dimensions(version, options);

    tracing::debug!(
        dataset = %dataset.id,
        edition = %version.edition,
        version = version.version,
        dimensions = dimensions.len(),
        is_latest,
        "Mapped filterable landing page"
    );

    Ok(PageModel::new(
        page,
        FilterableLanding {
            versions_url: versions_url(&dataset.id, &version.edition)?,
            dataset: mapped,
            dimensions,
            downloads,
            is_latest,
            latest_version_url,
            has_older_versions: total_versions > 1,
        },
    ))
}
