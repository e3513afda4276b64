//! API Configuration
//!
//! Endpoint locations. The base URL defaults to same-origin and can be
//! overridden at build time with `TODO_API_BASE`.

pub const DETAILS_PATH: &str = "/details";
pub const COMPLETE_PATH: &str = "/complete";
pub const DELETE_PATH: &str = "/delete";
pub const UPDATE_SUBTASK_PATH: &str = "/update-subtask";
pub const UPDATE_TASK_PATH: &str = "/update-task";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into().trim_end_matches('/').to_string() }
    }

    /// Config baked in at compile time
    pub fn from_build_env() -> Self {
        Self::new(option_env!("TODO_API_BASE").unwrap_or(""))
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_origin_by_default() {
        assert_eq!(ApiConfig::default().url(DETAILS_PATH), "/details");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = ApiConfig::new("http://localhost:5000/");
        assert_eq!(config.url(UPDATE_TASK_PATH), "http://localhost:5000/update-task");
    }
}
