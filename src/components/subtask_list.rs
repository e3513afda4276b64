//! Subtask List Component
//!
//! One checkbox row per subtask, addressed by position.

use leptos::prelude::*;

use crate::context::use_panel;
use crate::detail::SubtaskRow;
use crate::models::TodoId;

#[component]
pub fn SubtaskList(todo_id: TodoId, rows: Vec<SubtaskRow>) -> impl IntoView {
    let ctx = use_panel();

    view! {
        <div id="todoSubtasks">
            {rows.into_iter().enumerate().map(|(index, row)| {
                let todo_id = todo_id.clone();
                let input_id = format!("subtask{}", index);
                let label_class = row.label_class();
                view! {
                    <div class="form-check mb-2">
                        <input
                            class="form-check-input"
                            type="checkbox"
                            id={input_id.clone()}
                            prop:checked=row.completed
                            on:change=move |ev| {
                                ctx.toggle_subtask(todo_id.clone(), index, event_target_checked(&ev));
                            }
                        />
                        <label class=label_class for=input_id>{row.text}</label>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
