//! Feedback form submission and the feedback page payload.
//!
//! [`FeedbackForm`] is what the browser posts; it is validated with
//! `validator` before being copied into the [`Feedback`] page data, together
//! with any [`FieldError`]s to show next to the form.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use url::Url;
use validator::{Validate, ValidateEmail, ValidationError, ValidationErrors};

/// Radio value for feedback about the whole website.
pub const WHOLE_SITE: &str = "whole_site";
/// Radio value for feedback about one page; requires `url`.
pub const SPECIFIC_PAGE: &str = "specific_page";

/// Maximum accepted length of the free-text feedback.
pub const MAX_FEEDBACK_LENGTH: u64 = 2000;

/// Raw feedback submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_page_url", skip_on_field_errors = false))]
pub struct FeedbackForm {
    #[validate(custom(function = "validate_radio"))]
    pub radio: String,

    pub purpose: String,

    #[validate(custom(function = "validate_not_blank"))]
    #[validate(length(max = 2000, message = "Feedback must be 2000 characters or fewer"))]
    pub feedback: String,

    pub name: String,

    #[validate(custom(function = "validate_optional_email"))]
    pub email: String,

    pub error_type: String,

    /// Page the feedback refers to (the referring URL).
    pub url: String,
}

/// A validation message attached to one form field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    /// Flattens `validator` errors into field/message pairs, sorted by field.
    ///
    /// Struct-level errors are reported under their error code, which names
    /// the field they concern.
    pub fn from_validation(errors: &ValidationErrors) -> Vec<FieldError> {
        let mut items: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| {
                    let field = if field == "__all__" {
                        err.code.to_string()
                    } else {
                        field.to_string()
                    };
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string());
                    FieldError { field, message }
                })
            })
            .collect();

        items.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
        items
    }
}

/// Data payload of the feedback page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Feedback {
    pub radio: String,
    pub purpose: String,
    pub feedback: String,
    pub name: String,
    pub email: String,
    pub error_type: String,
    pub url: String,
    pub errors: Vec<FieldError>,
}

impl From<FeedbackForm> for Feedback {
    fn from(form: FeedbackForm) -> Self {
        Self {
            radio: form.radio,
            purpose: form.purpose,
            feedback: form.feedback,
            name: form.name,
            email: form.email,
            error_type: form.error_type,
            url: form.url,
            errors: Vec::new(),
        }
    }
}

fn error_with_message(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

fn validate_radio(radio: &str) -> Result<(), ValidationError> {
    match radio {
        WHOLE_SITE | SPECIFIC_PAGE => Ok(()),
        _ => Err(error_with_message(
            "radio",
            "Choose whether your feedback is about the whole site or a specific page",
        )),
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error_with_message("required", "Enter your feedback"));
    }
    Ok(())
}

fn validate_optional_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() || email.validate_email() {
        Ok(())
    } else {
        Err(error_with_message(
            "email",
            "Enter an email address in the correct format, like name@example.com",
        ))
    }
}

fn validate_page_url(form: &FeedbackForm) -> Result<(), ValidationError> {
    if form.radio != SPECIFIC_PAGE {
        return Ok(());
    }

    match Url::parse(form.url.trim()) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        _ => Err(error_with_message(
            "url",
            "Enter the full address of the page, like https://www.example.com/page",
        )),
    }
}
