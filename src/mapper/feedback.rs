//! Feedback page mapping and submission checks.

use validator::Validate;

use crate::error::ModelError;
use crate::model::{Feedback, FeedbackForm, FeedbackPage, FieldError, Page, PageModel};

/// Builds the feedback page for a submitted form.
///
/// The form is always echoed back; when it fails validation the page also
/// carries the field errors, sorted by field name.
pub fn map_feedback(page: Page, form: FeedbackForm) -> FeedbackPage {
    let errors = match form.validate() {
        Ok(()) => Vec::new(),
        Err(e) => FieldError::from_validation(&e),
    };

    if !errors.is_empty() {
        tracing::debug!(errors = errors.len(), "Feedback form failed validation");
    }

    let mut data = Feedback::from(form);
    data.errors = errors;
    PageModel::new(page, data)
}

/// Accepts a feedback submission, rejecting it if it is invalid.
///
/// # Errors
///
/// Returns [`ModelError::Validation`] with every failing field.
pub fn submit_feedback(form: FeedbackForm) -> Result<Feedback, ModelError> {
    form.validate()?;
    Ok(Feedback::from(form))
}
