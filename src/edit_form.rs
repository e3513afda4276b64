//! Inline Edit Form Model
//!
//! Initial values for the edit form and conversion of the submitted
//! fields into an `/update-task` body.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::api::UpdateTaskArgs;
use crate::models::{Priority, Subtask, TodoId, TodoRecord};

/// Display formats the backend uses for date labels, tried in order
const DATE_LABEL_FORMATS: &[&str] = &["%d %B %Y", "%Y-%m-%d", "%d %b %Y", "%B %d, %Y"];

static MARKUP_RE: OnceLock<Regex> = OnceLock::new();

fn markup_re() -> &'static Regex {
    MARKUP_RE.get_or_init(|| Regex::new(r"</?[^>]+(>|$)").expect("valid markup pattern"))
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditForm {
    pub todo_id: TodoId,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    /// `YYYY-MM-DD` or empty
    pub due_date: String,
    /// One subtask per line
    pub subtasks: String,
}

impl EditForm {
    /// Form for `todo_id` prefilled from the last rendered record
    pub fn from_record(todo_id: TodoId, record: &TodoRecord) -> Self {
        Self {
            todo_id,
            title: record.title.clone(),
            description: strip_markup(&record.description),
            priority: Priority::parse(&record.priority).unwrap_or_default(),
            due_date: record
                .complete_time
                .as_deref()
                .and_then(parse_date_label)
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            subtasks: record
                .subtasks
                .iter()
                .map(|s| s.text.trim())
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    pub fn blank(todo_id: TodoId) -> Self {
        Self {
            todo_id,
            title: String::new(),
            description: String::new(),
            priority: Priority::default(),
            due_date: String::new(),
            subtasks: String::new(),
        }
    }

    pub fn to_args(&self) -> UpdateTaskArgs {
        UpdateTaskArgs {
            todo_id: self.todo_id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            priority: self.priority,
            due_date: self.due_date.clone(),
            subtasks: parse_subtask_lines(&self.subtasks),
        }
    }
}

/// Remove anything tag-shaped, including an unterminated trailing tag
pub fn strip_markup(html: &str) -> String {
    markup_re().replace_all(html, "").into_owned()
}

/// Parse a due-date display label; `None` for "-", empty or unparsable input
pub fn parse_date_label(label: &str) -> Option<NaiveDate> {
    let label = label.trim();
    if label.is_empty() || label == crate::detail::MISSING_LABEL {
        return None;
    }
    DATE_LABEL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(label, fmt).ok())
}

/// Split the subtasks textbox into pending subtasks, dropping blank lines
pub fn parse_subtask_lines(text: &str) -> Vec<Subtask> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Subtask::pending)
        .collect()
}
