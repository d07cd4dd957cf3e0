//! Dataset versions, their downloadable files and the versions list payload.

use serde::{Deserialize, Serialize};

use super::contact::Contact;

/// A downloadable file of a version (CSV, XLSX, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Download {
    pub extension: String,
    pub size: String,
    pub uri: String,
}

/// An additional file published next to a version (methodology notes, QMI).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupplementaryFile {
    pub title: String,
    pub extension: String,
    pub size: String,
    pub uri: String,
}

/// One published edition/version of a dataset.
///
/// `supplementaryFiles`, `updateDate` and `correctionNotice` keep the camelCase
/// keys consumers already read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Version {
    pub title: String,
    pub description: String,
    pub url: String,
    pub release_date: String,
    pub next_release: String,
    pub edition: String,
    pub version: String,
    pub is_latest: bool,
    pub downloads: Vec<Download>,
    pub contact: Contact,
    #[serde(rename = "supplementaryFiles")]
    pub supplementary_files: Vec<SupplementaryFile>,
    #[serde(rename = "updateDate")]
    pub update_date: String,
    #[serde(rename = "correctionNotice")]
    pub correction_notice: String,
}

/// Data payload of the versions page: every version, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionsList {
    pub versions: Vec<Version>,
    pub latest_version_url: String,
    /// Empty when no feedback link is configured.
    pub feedback_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_camel_case_keys() {
        let version = Version {
            update_date: "14 February 2024".to_string(),
            correction_notice: "Figures for January corrected".to_string(),
            ..Default::default()
        };

        let value = serde_json::to_value(&version).unwrap();
        assert_eq!(value["updateDate"], "14 February 2024");
        assert_eq!(value["correctionNotice"], "Figures for January corrected");
        assert_eq!(value["supplementaryFiles"], serde_json::json!([]));
        assert!(value.get("update_date").is_none());
    }

    #[test]
    fn test_version_embeds_contact() {
        let value = serde_json::to_value(Version::default()).unwrap();
        assert_eq!(
            value["contact"],
            serde_json::json!({"name": "", "telephone": "", "email": ""})
        );
    }

    #[test]
    fn test_versions_list_round_trip() {
        let list = VersionsList {
            versions: vec![Version {
                version: "2".to_string(),
                is_latest: true,
                downloads: vec![Download {
                    extension: "CSV".to_string(),
                    size: "438.3 kB".to_string(),
                    uri: "https://download.example.com/cpih01-v2.csv".to_string(),
                }],
                ..Default::default()
            }],
            latest_version_url: "/datasets/cpih01/editions/time-series/versions/2".to_string(),
            feedback_url: String::new(),
        };

        let json = serde_json::to_string(&list).unwrap();
        let back: VersionsList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
    }
}
