//! Panel Context
//!
//! The controller signal plus the async glue that runs each operation:
//! a synchronous step on the controller, the request, then the `finish_*`
//! step once the response arrives.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::controller::{DetailPanel, Mutation};
use crate::edit_form::EditForm;
use crate::host::BrowserHost;
use crate::models::TodoId;

/// Shared handle provided via context
#[derive(Clone, Copy)]
pub struct PanelContext {
    /// Controller state - every pane view reads from here
    pub panel: RwSignal<DetailPanel>,
    client: StoredValue<ApiClient>,
    host: BrowserHost,
}

impl PanelContext {
    pub fn new(panel: RwSignal<DetailPanel>, client: ApiClient) -> Self {
        Self {
            panel,
            client: StoredValue::new(client),
            host: BrowserHost,
        }
    }

    /// Select a list entry and load its details
    pub fn select(&self, id: TodoId) {
        let Some(args) = self.panel.try_update(|p| p.select(id.clone())).flatten() else {
            web_sys::console::log_1(&format!("[DETAIL] Ignoring unknown task {}", id).into());
            return;
        };
        web_sys::console::log_1(&format!("[DETAIL] Loading task {}", args.todoid).into());
        let ctx = *self;
        spawn_local(async move {
            let result = ctx.client.get_value().details(&args).await;
            ctx.panel.update(|p| p.finish_select(result, &ctx.host));
        });
    }

    pub fn complete(&self, id: TodoId) {
        self.mutate(Mutation::Complete, id);
    }

    pub fn delete(&self, id: TodoId) {
        self.mutate(Mutation::Delete, id);
    }

    fn mutate(&self, kind: Mutation, id: TodoId) {
        let host = self.host;
        let Some(args) = self.panel.with_untracked(|p| p.begin_mutation(kind, id, &host)) else {
            return;
        };
        let ctx = *self;
        spawn_local(async move {
            let client = ctx.client.get_value();
            let result = match kind {
                Mutation::Complete => client.complete(&args).await,
                Mutation::Delete => client.delete(&args).await,
            };
            ctx.panel.update(|p| p.finish_mutation(kind, &args.todoid, result, &ctx.host));
        });
    }

    pub fn toggle_subtask(&self, id: TodoId, index: usize, checked: bool) {
        let Some(args) = self.panel.try_update(|p| p.toggle_subtask(id, index, checked)) else {
            return;
        };
        let ctx = *self;
        spawn_local(async move {
            let result = ctx.client.get_value().update_subtask(&args).await;
            ctx.panel.with_untracked(|p| p.finish_toggle_subtask(result, &ctx.host));
        });
    }

    pub fn enter_edit(&self) {
        let host = self.host;
        self.panel.update(|p| {
            p.enter_edit(&host);
        });
    }

    pub fn exit_edit(&self) {
        self.panel.update(|p| p.exit_edit());
    }

    pub fn submit_edit(&self, form: EditForm) {
        let Some(args) = self.panel.try_update(|p| p.begin_submit(form)) else {
            return;
        };
        web_sys::console::log_1(&format!("[DETAIL] Updating task {}", args.todo_id).into());
        let ctx = *self;
        spawn_local(async move {
            let result = ctx.client.get_value().update_task(&args).await;
            ctx.panel.with_untracked(|p| p.finish_submit(result, &ctx.host));
        });
    }
}

/// Get the panel context provided by the mount point
pub fn use_panel() -> PanelContext {
    expect_context::<PanelContext>()
}
