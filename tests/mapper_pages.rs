mod common;

use dataset_pages::mapper::{
    map_create_custom_dataset, map_feedback, map_filterable_landing, map_versions_list,
};
use dataset_pages::model::page::{
    CREATE_CUSTOM_DATASET_TYPE, FEEDBACK_TYPE, FILTERABLE_LANDING_TYPE, VERSIONS_LIST_TYPE,
};
use dataset_pages::model::{FeedbackForm, Page};

#[test]
fn test_versions_page_from_upstream() {
    let config = common::test_config();
    let page = Page::new(&config, VERSIONS_LIST_TYPE, "/datasets/cpih01/versions");

    let model = map_versions_list(
        page,
        &common::dataset(),
        common::versions(),
        &config.feedback_url,
    )
    .unwrap();

    let value = serde_json::to_value(&model).unwrap();
    let versions = value["data"]["versions"].as_array().unwrap();

    assert_eq!(versions.len(), 3);
    assert_eq!(versions[0]["version"], "3");
    assert_eq!(versions[0]["is_latest"], true);
    assert_eq!(versions[1]["is_latest"], false);
    assert_eq!(versions[0]["release_date"], "20 March 2024");
    assert_eq!(versions[0]["updateDate"], "20 March 2024");
    assert_eq!(versions[0]["next_release"], "20 March 2024");
    assert_eq!(versions[0]["downloads"][0]["extension"], "CSV");
    assert_eq!(versions[0]["downloads"][0]["size"], "438.3 kB");
    assert_eq!(versions[0]["downloads"][1]["extension"], "XLS");
    assert_eq!(versions[0]["supplementaryFiles"][0]["title"], "Metadata (CSV-W)");
    assert_eq!(versions[1]["correctionNotice"], "Food weights corrected");
    assert_eq!(versions[2]["downloads"][0]["size"], "430.2 kB");
    assert_eq!(
        versions[2]["contact"]["email"],
        "cpi@example.gov.uk"
    );

    assert_eq!(
        value["data"]["latest_version_url"],
        "/datasets/cpih01/editions/time-series/versions/3"
    );
    assert_eq!(value["data"]["feedback_url"], "/feedback");
    assert_eq!(value["site_domain"], "www.example.gov.uk");
}

#[test]
fn test_landing_page_from_upstream() {
    let config = common::test_config();
    let page = Page::new(&config, FILTERABLE_LANDING_TYPE, "/datasets/cpih01");

    let model = map_filterable_landing(
        page,
        &common::dataset(),
        &common::latest_version(),
        &[common::aggregate_options()],
        3,
    )
    .unwrap();

    let data = &model.data;
    assert!(data.is_latest);
    assert!(data.has_older_versions);
    assert_eq!(data.dataset.id, "cpih01");
    assert_eq!(data.dataset.version, "3");
    assert_eq!(data.dataset.edition, "time-series");
    assert_eq!(data.dataset.contact.name, "Consumer Price Inflation team");

    assert_eq!(data.dimensions.len(), 2);
    assert_eq!(data.dimensions[0].name, "Time");
    assert!(data.dimensions[0].values.is_empty());
    assert_eq!(data.dimensions[1].code_list_id, "cpih1dim1aggid");
    assert_eq!(
        data.dimensions[1].values,
        vec!["Overall Index", "01 Food and non-alcoholic beverages"]
    );

    // metadata files are not offered as data downloads
    assert_eq!(data.downloads.len(), 2);
}

#[test]
fn test_custom_dataset_page_from_upstream() {
    let config = common::test_config();
    let page = Page::new(&config, CREATE_CUSTOM_DATASET_TYPE, "/datasets/create");

    let model = map_create_custom_dataset(page, common::population_types());
    let value = serde_json::to_value(&model).unwrap();

    assert_eq!(value["type"], "create_custom_dataset");
    assert_eq!(
        value["data"]["population_types"],
        serde_json::json!([
            {"name": "UR", "label": "All usual residents", "description": "People who usually live in England and Wales"},
            {"name": "HH", "label": "All households", "description": ""}
        ])
    );
}

#[test]
fn test_feedback_page_with_errors() {
    let config = common::test_config();
    let page = Page::new(&config, FEEDBACK_TYPE, "/feedback");

    let form: FeedbackForm = serde_json::from_str(
        r#"{"radio":"specific_page","feedback":"","email":"nobody","url":"https://www.example.gov.uk/datasets/cpih01"}"#,
    )
    .unwrap();

    let model = map_feedback(page, form);
    let fields: Vec<&str> = model.data.errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["email", "feedback"]);
    assert_eq!(model.data.email, "nobody");
}
