//! Detail View Model
//!
//! What the pane shows for one task, derived from a `TodoRecord`.
//! Two equal `DetailView`s render identical markup.

use crate::models::{Priority, TodoId, TodoRecord};

/// Placeholder for absent date labels
pub const MISSING_LABEL: &str = "-";

/// Priority badge colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Danger,
    Warning,
    Success,
}

impl Badge {
    /// high → danger, medium → warning, anything else → success
    pub fn for_priority(label: &str) -> Self {
        match Priority::parse(label) {
            Some(Priority::High) => Badge::Danger,
            Some(Priority::Medium) => Badge::Warning,
            _ => Badge::Success,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Badge::Danger => "badge fs-6 bg-danger",
            Badge::Warning => "badge fs-6 bg-warning",
            Badge::Success => "badge fs-6 bg-success",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubtaskRow {
    pub text: String,
    pub completed: bool,
}

impl SubtaskRow {
    pub fn label_class(&self) -> &'static str {
        if self.completed {
            "form-check-label text-decoration-line-through text-muted"
        } else {
            "form-check-label"
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    /// Id the action buttons act on
    pub todo_id: TodoId,
    pub title: String,
    pub priority_text: String,
    pub badge: Badge,
    pub status: &'static str,
    pub due_date: String,
    pub created: String,
    /// Trusted raw markup, inserted unescaped
    pub description_html: String,
    pub subtasks: Vec<SubtaskRow>,
}

impl DetailView {
    pub fn from_record(record: &TodoRecord) -> Self {
        Self {
            todo_id: record.id.clone(),
            title: record.title.clone(),
            priority_text: format!("{} Priority", record.priority),
            badge: Badge::for_priority(&record.priority),
            status: status_label(record.completed),
            due_date: label_or_missing(record.complete_time.as_deref()),
            created: label_or_missing(record.created_at.as_deref()),
            description_html: format!(r#"<p class="mb-0">{}</p>"#, record.description),
            subtasks: record
                .subtasks
                .iter()
                .map(|s| SubtaskRow { text: s.text.clone(), completed: s.completed })
                .collect(),
        }
    }
}

pub fn status_label(completed: bool) -> &'static str {
    if completed { "Completed" } else { "Pending" }
}

fn label_or_missing(label: Option<&str>) -> String {
    match label {
        Some(l) if !l.is_empty() => l.to_string(),
        _ => MISSING_LABEL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Subtask;
    use pretty_assertions::assert_eq;

    fn record(priority: &str, completed: bool) -> TodoRecord {
        TodoRecord {
            id: TodoId::Int(1),
            title: "Pay rent".into(),
            description: "Transfer <em>before</em> the 1st".into(),
            priority: priority.into(),
            completed,
            complete_time: None,
            created_at: Some("01 October 2026".into()),
            subtasks: vec![Subtask::pending("log in"), Subtask { text: "send".into(), completed: true }],
        }
    }

    #[test]
    fn test_status_follows_completed_flag() {
        assert_eq!(DetailView::from_record(&record("low", true)).status, "Completed");
        assert_eq!(DetailView::from_record(&record("low", false)).status, "Pending");
    }

    #[test]
    fn test_high_priority_is_danger_in_any_case() {
        for label in ["High", "high", "HIGH"] {
            let view = DetailView::from_record(&record(label, false));
            assert_eq!(view.badge, Badge::Danger);
            assert_eq!(view.badge.class(), "badge fs-6 bg-danger");
        }
    }

    #[test]
    fn test_other_priorities() {
        assert_eq!(Badge::for_priority("Medium"), Badge::Warning);
        assert_eq!(Badge::for_priority("low"), Badge::Success);
        assert_eq!(Badge::for_priority("someday"), Badge::Success);
        assert_eq!(Badge::for_priority(""), Badge::Success);
    }

    #[test]
    fn test_priority_text_keeps_server_label() {
        let view = DetailView::from_record(&record("HIGH", false));
        assert_eq!(view.priority_text, "HIGH Priority");
    }

    #[test]
    fn test_missing_dates_render_dash() {
        let view = DetailView::from_record(&record("low", false));
        assert_eq!(view.due_date, "-");
        assert_eq!(view.created, "01 October 2026");
    }

    #[test]
    fn test_description_is_not_escaped() {
        let view = DetailView::from_record(&record("low", false));
        assert_eq!(view.description_html, r#"<p class="mb-0">Transfer <em>before</em> the 1st</p>"#);
    }

    #[test]
    fn test_subtask_rows_keep_order_and_strike_completed() {
        let view = DetailView::from_record(&record("low", false));
        assert_eq!(view.subtasks.len(), 2);
        assert_eq!(view.subtasks[0].label_class(), "form-check-label");
        assert_eq!(
            view.subtasks[1].label_class(),
            "form-check-label text-decoration-line-through text-muted"
        );
    }
}
