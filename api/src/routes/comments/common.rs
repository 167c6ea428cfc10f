use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::error::FieldError;
use crate::sanitize::scalar_text;

/// Body of `POST /api/comments`, after operator keys have been stripped.
///
/// Any `user`, `name` or `avatar` keys a client sends are ignored; those
/// values always come from the authenticated user.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[serde(default, deserialize_with = "scalar_text")]
    #[validate(length(min = 1, message = "Please enter a comment"))]
    pub content: String,

    #[serde(default, deserialize_with = "scalar_text")]
    #[validate(length(min = 1, message = "Please enter a post"))]
    pub post: String,
}

impl CreateCommentRequest {
    const FIELDS: [&'static str; 2] = ["content", "post"];

    /// Validates the payload, reporting every failing field in declaration order.
    pub fn check(&self) -> Result<(), Vec<FieldError>> {
        self.validate().map_err(|errors| self.field_errors(&errors))
    }

    /// Numeric id of the referenced post, or `None` if it can't be one.
    pub fn post_id(&self) -> Option<i64> {
        self.post.trim().parse().ok()
    }

    fn value_of(&self, field: &str) -> &str {
        match field {
            "content" => &self.content,
            _ => &self.post,
        }
    }

    fn field_errors(&self, errors: &ValidationErrors) -> Vec<FieldError> {
        let by_field = errors.field_errors();

        Self::FIELDS
            .iter()
            .filter_map(|&field| {
                let first = by_field.get(field)?.first()?;
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid {field}"));
                Some(FieldError::body(field, self.value_of(field), msg))
            })
            .collect()
    }
}
