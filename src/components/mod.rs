//! UI Components
//!
//! Leptos views for the detail pane.

mod detail_pane;
mod task_detail;
mod subtask_list;
mod action_bar;
mod edit_form_view;

pub use detail_pane::DetailPane;
pub use task_detail::TaskDetail;
pub use subtask_list::SubtaskList;
pub use action_bar::ActionBar;
pub use edit_form_view::EditFormView;
