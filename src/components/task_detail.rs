//! Task Detail Component
//!
//! Rendered fields of one task. Element ids are part of the page's DOM contract.

use leptos::prelude::*;

use crate::components::{ActionBar, SubtaskList};
use crate::detail::DetailView;

#[component]
pub fn TaskDetail(detail: DetailView) -> impl IntoView {
    let DetailView {
        todo_id,
        title,
        priority_text,
        badge,
        status,
        due_date,
        created,
        description_html,
        subtasks,
    } = detail;

    view! {
        <div class="todo-detail-card">
            <div class="d-flex justify-content-between align-items-start mb-3">
                <h4 id="todoTitle" class="mb-0">{title}</h4>
                <span id="todoPriority" class={badge.class()}>{priority_text}</span>
            </div>

            <dl class="row mb-3">
                <dt class="col-sm-4">"Status"</dt>
                <dd class="col-sm-8" id="todoStatus">{status}</dd>
                <dt class="col-sm-4">"Due Date"</dt>
                <dd class="col-sm-8" id="todoDueDate">{due_date}</dd>
                <dt class="col-sm-4">"Created"</dt>
                <dd class="col-sm-8" id="todoCreated">{created}</dd>
            </dl>

            <h6>"Description"</h6>
            // Trusted backend markup, inserted as-is
            <div id="todoDescription" inner_html=description_html></div>

            <h6 class="mt-3">"Subtasks"</h6>
            <SubtaskList todo_id=todo_id.clone() rows=subtasks />

            <ActionBar todo_id=todo_id />
        </div>
    }
}
