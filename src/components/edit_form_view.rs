//! Edit Form Component
//!
//! Inline edit form. Field values live in local signals until submit.

use leptos::prelude::*;

use crate::context::use_panel;
use crate::edit_form::EditForm;
use crate::models::Priority;

#[component]
pub fn EditFormView(form: EditForm) -> impl IntoView {
    let ctx = use_panel();
    let EditForm { todo_id, title, description, priority, due_date, subtasks } = form;

    let (title, set_title) = signal(title);
    let (description, set_description) = signal(description);
    let (priority, set_priority) = signal(priority);
    let (due_date, set_due_date) = signal(due_date);
    let (subtasks, set_subtasks) = signal(subtasks);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit_edit(EditForm {
            todo_id: todo_id.clone(),
            title: title.get_untracked(),
            description: description.get_untracked(),
            priority: priority.get_untracked(),
            due_date: due_date.get_untracked(),
            subtasks: subtasks.get_untracked(),
        });
    };

    let initial_priority = priority.get_untracked();

    view! {
        <h5>"Edit Task"</h5>
        <form id="quickEditForm" on:submit=on_submit>
            <div class="mb-3">
                <label class="form-label" for="editTitle">"Title"</label>
                <input
                    type="text"
                    class="form-control"
                    id="editTitle"
                    required=true
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
            </div>
            <div class="mb-3">
                <label class="form-label" for="editDescription">"Description"</label>
                <textarea
                    class="form-control"
                    id="editDescription"
                    rows="3"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
            </div>
            <div class="mb-3">
                <label class="form-label" for="editPriority">"Priority"</label>
                <select
                    class="form-select"
                    id="editPriority"
                    on:change=move |ev| {
                        set_priority.set(Priority::parse(&event_target_value(&ev)).unwrap_or_default());
                    }
                >
                    {Priority::ALL.iter().map(|p| {
                        let p = *p;
                        view! {
                            <option value={p.as_str()} selected={p == initial_priority}>{p.label()}</option>
                        }
                    }).collect_view()}
                </select>
            </div>
            <div class="mb-3">
                <label class="form-label" for="taskDueDate">"Due Date"</label>
                <input
                    type="date"
                    class="form-control"
                    id="taskDueDate"
                    prop:value=move || due_date.get()
                    on:input=move |ev| set_due_date.set(event_target_value(&ev))
                />
            </div>
            <div class="mb-3">
                <label class="form-label" for="editSubtasks">"Subtasks (one per line)"</label>
                <textarea
                    class="form-control"
                    id="editSubtasks"
                    rows="3"
                    prop:value=move || subtasks.get()
                    on:input=move |ev| set_subtasks.set(event_target_value(&ev))
                ></textarea>
            </div>
            <div class="d-flex gap-2">
                <button type="submit" class="btn btn-primary">"Update"</button>
                <button type="button" class="btn btn-secondary" on:click=move |_| ctx.exit_edit()>
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
