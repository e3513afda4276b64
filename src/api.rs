//! Backend API Bindings
//!
//! JSON-over-POST wrappers for the todo backend endpoints.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::config::{self, ApiConfig};
use crate::error::ApiError;
use crate::models::{Ack, Priority, Subtask, TodoId, TodoRecord};

// ========================
// Argument Structs
// ========================

/// Body of `/details`, `/complete` and `/delete`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TodoIdArgs {
    pub todoid: TodoId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateSubtaskArgs {
    pub todoid: TodoId,
    pub subtask_index: usize,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateTaskArgs {
    pub todo_id: TodoId,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    /// `YYYY-MM-DD` or empty
    pub due_date: String,
    pub subtasks: Vec<Subtask>,
}

// ========================
// Client
// ========================

#[derive(Debug, Clone, Default)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub async fn details(&self, args: &TodoIdArgs) -> Result<TodoRecord, ApiError> {
        self.post_json(config::DETAILS_PATH, args).await
    }

    pub async fn complete(&self, args: &TodoIdArgs) -> Result<(), ApiError> {
        self.post_json::<_, Ack>(config::COMPLETE_PATH, args).await?.into_result()
    }

    pub async fn delete(&self, args: &TodoIdArgs) -> Result<(), ApiError> {
        self.post_json::<_, Ack>(config::DELETE_PATH, args).await?.into_result()
    }

    pub async fn update_subtask(&self, args: &UpdateSubtaskArgs) -> Result<(), ApiError> {
        self.post_json::<_, Ack>(config::UPDATE_SUBTASK_PATH, args).await?.into_result()
    }

    pub async fn update_task(&self, args: &UpdateTaskArgs) -> Result<(), ApiError> {
        self.post_json::<_, Ack>(config::UPDATE_TASK_PATH, args).await?.into_result()
    }

    /// POST `args` as JSON and decode the body, whatever the HTTP status
    async fn post_json<A, R>(&self, path: &str, args: &A) -> Result<R, ApiError>
    where
        A: Serialize,
        R: DeserializeOwned,
    {
        let body = serde_json::to_string(args)
            .map_err(|e| ApiError::transport(format!("failed to serialize request: {}", e)))?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_body(&JsValue::from_str(&body));

        let url = self.config.url(path);
        let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;

        let window = web_sys::window().ok_or_else(|| ApiError::transport("no window"))?;
        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?
            .dyn_into()
            .map_err(js_error)?;

        let text = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?
            .as_string()
            .ok_or_else(|| ApiError::transport("response body is not text"))?;

        decode_body(&text)
    }
}

fn decode_body<R: DeserializeOwned>(text: &str) -> Result<R, ApiError> {
    serde_json::from_str(text)
        .map_err(|e| ApiError::transport(format!("failed to parse JSON: {}", e)))
}

fn js_error(value: JsValue) -> ApiError {
    ApiError::Transport(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_update_task_body_shape() {
        let args = UpdateTaskArgs {
            todo_id: TodoId::Int(3),
            title: "Title".into(),
            description: "Body".into(),
            priority: Priority::Medium,
            due_date: "2026-10-17".into(),
            subtasks: vec![Subtask::pending("one")],
        };
        let json: serde_json::Value = serde_json::to_value(&args).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "todo_id": 3,
                "title": "Title",
                "description": "Body",
                "priority": "medium",
                "due_date": "2026-10-17",
                "subtasks": [{"text": "one", "completed": false}]
            })
        );
    }

    #[test]
    fn test_subtask_body_shape() {
        let args = UpdateSubtaskArgs { todoid: TodoId::Int(9), subtask_index: 2, completed: true };
        assert_eq!(
            serde_json::to_string(&args).unwrap(),
            r#"{"todoid":9,"subtask_index":2,"completed":true}"#
        );
    }

    #[test]
    fn test_html_error_page_is_transport_error() {
        let result: Result<TodoRecord, ApiError> = decode_body("<!doctype html><title>404 Not Found</title>");
        assert!(matches!(result, Err(ApiError::Transport(_))));
    }

    #[test]
    fn test_rejected_body_decodes_as_ack() {
        let ack: Ack = decode_body(r#"{"success": false, "error": "Invalid subtask index"}"#).unwrap();
        assert_eq!(ack.into_result(), Err(ApiError::Rejected("Invalid subtask index".into())));
    }
}
