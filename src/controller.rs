//! Detail Panel Controller
//!
//! State machine behind the detail pane: selection, render, mutations and
//! inline edit. Every network operation is split into a synchronous step
//! that returns the request body and a `finish_*` step that applies the
//! response, so nothing here awaits or touches the browser directly.
//! Dialogs, collaborator DOM edits and reloads go through [`Host`].

use std::mem;

use crate::api::{TodoIdArgs, UpdateSubtaskArgs, UpdateTaskArgs};
use crate::detail::DetailView;
use crate::edit_form::EditForm;
use crate::error::ApiError;
use crate::models::{TodoId, TodoRecord};

/// Side effects the controller needs from its environment
pub trait Host {
    /// Blocking yes/no prompt
    fn confirm(&self, message: &str) -> bool;
    /// Blocking notice
    fn alert(&self, message: &str);
    /// Diagnostic channel
    fn log_error(&self, context: &str, error: &ApiError);
    /// Drop the collaborator-owned list entry
    fn remove_list_item(&self, id: &TodoId);
    /// Full page reload
    fn reload(&self);
}

/// Which top-level container is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Empty,
    Detail,
}

/// What the detail container holds
#[derive(Debug, Clone, PartialEq)]
pub enum PaneContent {
    Blank,
    Detail(DetailView),
    Edit(EditForm),
}

/// Complete and delete share one flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Complete,
    Delete,
}

impl Mutation {
    fn confirm_message(self) -> &'static str {
        match self {
            Mutation::Complete => "Are you sure you want to mark this task as complete?",
            Mutation::Delete => "Are you sure you want to delete this task?",
        }
    }

    fn rejected_prefix(self) -> &'static str {
        match self {
            Mutation::Complete => "Failed to update task: ",
            Mutation::Delete => "Failed to delete task: ",
        }
    }

    fn transport_message(self) -> &'static str {
        match self {
            Mutation::Complete => "Something went wrong while updating task.",
            Mutation::Delete => "Something went wrong while deleting.",
        }
    }

    fn log_context(self) -> &'static str {
        match self {
            Mutation::Complete => "Error updating task",
            Mutation::Delete => "Error deleting task",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailPanel {
    items: Vec<TodoId>,
    active: Option<TodoId>,
    visibility: Visibility,
    content: PaneContent,
    record: Option<TodoRecord>,
    /// Content to restore on edit-cancel. Only `enter_edit`/`exit_edit` write it.
    stashed: Option<PaneContent>,
}

impl DetailPanel {
    /// Controller over the list entries currently in the document
    pub fn new(items: Vec<TodoId>) -> Self {
        Self {
            items,
            active: None,
            visibility: Visibility::Empty,
            content: PaneContent::Blank,
            record: None,
            stashed: None,
        }
    }

    #[cfg(test)]
    pub fn items(&self) -> &[TodoId] {
        &self.items
    }

    pub fn active(&self) -> Option<&TodoId> {
        self.active.as_ref()
    }

    #[cfg(test)]
    pub fn is_active(&self, id: &TodoId) -> bool {
        self.active.as_ref() == Some(id)
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn content(&self) -> &PaneContent {
        &self.content
    }

    #[cfg(test)]
    pub fn record(&self) -> Option<&TodoRecord> {
        self.record.as_ref()
    }

    #[cfg(test)]
    pub fn has_stash(&self) -> bool {
        self.stashed.is_some()
    }

    // ========================
    // Selection & Render
    // ========================

    /// Mark `id` active and show the detail container.
    /// Returns the `/details` body, or `None` when `id` is not in the list.
    pub fn select(&mut self, id: TodoId) -> Option<TodoIdArgs> {
        if !self.items.contains(&id) {
            return None;
        }
        self.active = Some(id.clone());
        self.visibility = Visibility::Detail;
        Some(TodoIdArgs { todoid: id })
    }

    /// Apply a `/details` response. Responses are applied in arrival order.
    pub fn finish_select(&mut self, result: Result<TodoRecord, ApiError>, host: &impl Host) {
        match result {
            Ok(record) => self.render(record),
            Err(e) => host.log_error("Error fetching todo details", &e),
        }
    }

    /// Rebuild the whole pane from `record` and retain it for editing
    pub fn render(&mut self, record: TodoRecord) {
        self.content = PaneContent::Detail(DetailView::from_record(&record));
        self.record = Some(record);
    }

    // ========================
    // Complete / Delete
    // ========================

    /// Ask for confirmation; returns the request body if the user agreed
    pub fn begin_mutation(&self, kind: Mutation, id: TodoId, host: &impl Host) -> Option<TodoIdArgs> {
        if host.confirm(kind.confirm_message()) {
            Some(TodoIdArgs { todoid: id })
        } else {
            None
        }
    }

    pub fn finish_mutation(
        &mut self,
        kind: Mutation,
        id: &TodoId,
        result: Result<(), ApiError>,
        host: &impl Host,
    ) {
        match result {
            Ok(()) => {
                self.items.retain(|item| item != id);
                if self.active.as_ref() == Some(id) {
                    self.active = None;
                }
                host.remove_list_item(id);
                self.visibility = Visibility::Empty;
            }
            Err(ApiError::Rejected(message)) => {
                host.alert(&format!("{}{}", kind.rejected_prefix(), message));
            }
            Err(e) => {
                host.log_error(kind.log_context(), &e);
                host.alert(kind.transport_message());
            }
        }
    }

    // ========================
    // Subtasks
    // ========================

    /// Strike (or unstrike) the row immediately and return the request body.
    /// The change is never reverted, even if the backend refuses it.
    pub fn toggle_subtask(&mut self, id: TodoId, index: usize, checked: bool) -> UpdateSubtaskArgs {
        if let PaneContent::Detail(view) = &mut self.content {
            if view.todo_id == id {
                if let Some(row) = view.subtasks.get_mut(index) {
                    row.completed = checked;
                }
            }
        }
        if let Some(record) = self.record.as_mut().filter(|r| r.id == id) {
            if let Some(subtask) = record.subtasks.get_mut(index) {
                subtask.completed = checked;
            }
        }
        UpdateSubtaskArgs { todoid: id, subtask_index: index, completed: checked }
    }

    pub fn finish_toggle_subtask(&self, result: Result<(), ApiError>, host: &impl Host) {
        match result {
            Ok(()) => {}
            Err(ApiError::Rejected(message)) => {
                host.alert(&format!("Failed to update subtask: {}", message));
            }
            Err(e) => {
                host.log_error("Error updating subtask", &e);
                host.alert("Something went wrong while updating subtask.");
            }
        }
    }

    // ========================
    // Inline Edit
    // ========================

    /// Swap the pane for an edit form of the active task.
    /// Returns false (after alerting) when nothing is active.
    ///
    /// Entering twice without an exit stashes the first form over the
    /// original content, which is then unrecoverable.
    pub fn enter_edit(&mut self, host: &impl Host) -> bool {
        let Some(active) = self.active.clone() else {
            host.alert("Please select a task to edit");
            return false;
        };
        // A stale record (failed or late fetch) must not prefill another task
        let form = match self.record.as_ref().filter(|r| r.id == active) {
            Some(record) => EditForm::from_record(active, record),
            None => EditForm::blank(active),
        };
        self.stashed = Some(mem::replace(&mut self.content, PaneContent::Edit(form)));
        true
    }

    /// Restore the stashed content; no-op without a stash
    pub fn exit_edit(&mut self) {
        if let Some(previous) = self.stashed.take() {
            self.content = previous;
        }
    }

    /// Keep the submitted values in the pane and return the `/update-task` body
    pub fn begin_submit(&mut self, form: EditForm) -> UpdateTaskArgs {
        let args = form.to_args();
        self.content = PaneContent::Edit(form);
        args
    }

    /// Reload on success; otherwise alert and leave the form open
    pub fn finish_submit(&self, result: Result<(), ApiError>, host: &impl Host) {
        match result {
            Ok(()) => {
                host.alert("Task updated successfully!");
                host.reload();
            }
            Err(ApiError::Rejected(message)) => {
                host.alert(&format!("Error: {}", message));
            }
            Err(e) => {
                host.log_error("Error", &e);
                host.alert("Failed to update task");
            }
        }
    }
}
