//! Request body extractor that checks shape before the service sees it.
//!
//! # Design
//! `TodoBody` reads the body as loose JSON, checks each known field's type and
//! reports every mismatch at once, joined with `" | "`. Only a body that passes
//! is deserialized into `TodoInput`. Business rules (e.g. empty text) are left
//! to the service, so a shape error and a validation error are distinct
//! `ApiError` variants even though both answer 422.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde_json::{Map, Value};
use todo_core::TodoInput;

use crate::error::ApiError;

/// A todo body whose fields have the expected JSON types.
#[derive(Debug, Clone)]
pub struct TodoBody(pub TodoInput);

impl<S> FromRequest<S> for TodoBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state).await?;
        parse_todo_body(value).map(TodoBody)
    }
}

/// Check field types in `value` and convert it to a `TodoInput`.
pub fn parse_todo_body(value: Value) -> Result<TodoInput, ApiError> {
    let Value::Object(fields) = value else {
        return Err(ApiError::InvalidBody(
            "request body must be a JSON object".to_string(),
        ));
    };

    let errors = shape_errors(&fields);
    if !errors.is_empty() {
        tracing::debug!(?errors, "rejecting malformed todo body");
        return Err(ApiError::InvalidBody(errors.join(" | ")));
    }

    serde_json::from_value(Value::Object(fields)).map_err(|e| ApiError::InvalidBody(e.to_string()))
}

fn shape_errors(fields: &Map<String, Value>) -> Vec<String> {
    let mut errors = Vec::new();
    for name in ["id", "text"] {
        match fields.get(name) {
            None | Some(Value::Null) | Some(Value::String(_)) => {}
            Some(_) => errors.push(format!("{name} must be a string")),
        }
    }
    match fields.get("done") {
        None | Some(Value::Null) | Some(Value::Bool(_)) => {}
        Some(_) => errors.push("done must be a boolean".to_string()),
    }
    errors
}
