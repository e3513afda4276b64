//! Detail Pane Component
//!
//! Switches between the blank pane, the rendered task and the edit form.

use leptos::prelude::*;

use crate::components::{EditFormView, TaskDetail};
use crate::context::use_panel;
use crate::controller::PaneContent;

#[component]
pub fn DetailPane() -> impl IntoView {
    let ctx = use_panel();

    // Typing in the edit form stays local, so this only fires on controller changes
    let content = Memo::new(move |_| ctx.panel.with(|p| p.content().clone()));

    view! {
        {move || match content.get() {
            PaneContent::Blank => view! { <div class="detail-blank"></div> }.into_any(),
            PaneContent::Detail(detail) => view! { <TaskDetail detail=detail /> }.into_any(),
            PaneContent::Edit(form) => view! { <EditFormView form=form /> }.into_any(),
        }}
    }
}
