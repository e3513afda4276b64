//! Action Bar Component
//!
//! Edit / complete / delete buttons, bound to the rendered record's id.

use leptos::prelude::*;

use crate::context::use_panel;
use crate::models::TodoId;

#[component]
pub fn ActionBar(todo_id: TodoId) -> impl IntoView {
    let ctx = use_panel();
    let complete_id = todo_id.clone();
    let delete_id = todo_id;

    view! {
        <div id="todoActions" class="d-flex gap-2 mt-4">
            <button id="editButton" class="btn btn-outline-primary" on:click=move |_| ctx.enter_edit()>
                "Edit"
            </button>
            <button id="completeButton" class="btn btn-success" on:click=move |_| ctx.complete(complete_id.clone())>
                "Mark Complete"
            </button>
            <button id="deleteButton" class="btn btn-danger" on:click=move |_| ctx.delete(delete_id.clone())>
                "Delete"
            </button>
        </div>
    }
}
