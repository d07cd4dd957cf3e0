#![allow(dead_code)]

use dataset_pages::config::Config;
use dataset_pages::upstream::{
    DatasetDetails, DimensionOptions, ItemList, PopulationTypeItem, VersionDetails,
};

pub const DATASET_JSON: &str = r#"{
    "id": "cpih01",
    "title": "Consumer Prices Index including owner occupiers' housing costs (CPIH)",
    "description": "Monthly measure of inflation",
    "next_release": "2024-03-20",
    "contacts": [
        { "name": "Consumer Price Inflation team", "telephone": "+44 1633 456900", "email": "cpi@example.gov.uk" }
    ],
    "links": {
        "latest_version": { "href": "http://localhost:22000/datasets/cpih01/editions/time-series/versions/3", "id": "3" }
    }
}"#;

pub const VERSIONS_JSON: &str = r#"{
    "items": [
        {
            "id": "a1b2", "edition": "time-series", "version": 1,
            "release_date": "2024-01-17T07:00:00.000Z",
            "downloads": { "csv": { "href": "https://download.example.com/cpih01-v1.csv", "size": "430211" } },
            "alerts": null
        },
        {
            "id": "c3d4", "edition": "time-series", "version": 3,
            "release_date": "2024-03-20T07:00:00.000Z",
            "downloads": {
                "csv": { "href": "https://download.example.com/cpih01-v3.csv", "size": "438290" },
                "xls": { "href": "https://download.example.com/cpih01-v3.xlsx", "size": 24576 },
                "csvw": { "href": "https://download.example.com/cpih01-v3.csv-metadata.json", "size": "2048" }
            },
            "dimensions": [
                { "id": "mmm-yy", "name": "time", "label": "Time", "type": "time",
                  "links": { "code_list": { "id": "mmm-yy", "href": "http://localhost:22400/code-lists/mmm-yy" } } },
                { "id": "cpih1dim1aggid", "name": "aggregate", "label": "Aggregate", "type": "hierarchy",
                  "links": { "code_list": { "id": "cpih1dim1aggid" } } }
            ]
        },
        {
            "id": "e5f6", "edition": "time-series", "version": "2",
            "release_date": "2024-02-14T07:00:00.000Z",
            "downloads": null,
            "alerts": [ { "date": "2024-02-20T09:30:00Z", "description": "Food weights corrected", "type": "correction" } ]
        }
    ],
    "count": 3,
    "total_count": 3
}"#;

pub const AGGREGATE_OPTIONS_JSON: &str = r#"{
    "items": [
        { "dimension": "aggregate", "label": "Overall Index", "option": "cpih1dim1A0" },
        { "dimension": "aggregate", "label": "01 Food and non-alcoholic beverages", "option": "cpih1dim1G10100" }
    ],
    "count": 2,
    "total_count": 2
}"#;

pub const POPULATION_TYPES_JSON: &str = r#"{
    "items": [
        { "name": "UR", "label": "All usual residents", "description": "People who usually live in England and Wales" },
        { "name": "HH", "label": "All households", "description": null },
        { "name": "", "label": "Unnamed" }
    ],
    "count": 3,
    "total_count": 3
}"#;

pub fn test_config() -> Config {
    Config {
        site_domain: "www.example.gov.uk".to_string(),
        feedback_url: "/feedback".to_string(),
        ..Config::default()
    }
}

pub fn dataset() -> DatasetDetails {
    serde_json::from_str(DATASET_JSON).unwrap()
}

pub fn versions() -> Vec<VersionDetails> {
    serde_json::from_str::<ItemList<VersionDetails>>(VERSIONS_JSON)
        .unwrap()
        .items
}

pub fn latest_version() -> VersionDetails {
    versions().into_iter().find(|v| v.version == 3).unwrap()
}

pub fn aggregate_options() -> DimensionOptions {
    serde_json::from_str(AGGREGATE_OPTIONS_JSON).unwrap()
}

pub fn population_types() -> Vec<PopulationTypeItem> {
    serde_json::from_str::<ItemList<PopulationTypeItem>>(POPULATION_TYPES_JSON)
        .unwrap()
        .items
}
