//! Hand-off of page models to whatever serves or renders them.
//!
//! A [`PageModel`] can be returned straight from an axum handler, or turned
//! into a [`serde_json::Value`] for renderers that want a JSON tree.

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;

use crate::error::ModelError;
use crate::model::PageModel;

impl<D: Serialize> IntoResponse for PageModel<D> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

impl<D: Serialize> PageModel<D> {
    /// Serializes the page into a JSON tree.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Serialization`] if the payload cannot be
    /// represented as JSON.
    pub fn to_json(&self) -> Result<Value, ModelError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Serializes the page into an indented JSON string.
    pub fn to_json_pretty(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CreateCustomDataset, Page, PopulationType};
    use axum::http::StatusCode;

    fn page() -> PageModel<CreateCustomDataset> {
        PageModel::new(
            Page::default(),
            CreateCustomDataset {
                population_types: vec![PopulationType {
                    name: "HH".to_string(),
                    label: "All households".to_string(),
                    description: String::new(),
                }],
            },
        )
    }

    #[test]
    fn test_to_json_has_data_key() {
        let value = page().to_json().unwrap();
        assert_eq!(value["data"]["population_types"][0]["name"], "HH");
        assert_eq!(value["type"], "");
    }

    #[test]
    fn test_into_response_is_ok() {
        let response = page().into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
