//! Todo Detail Frontend App
//!
//! Attaches to the server-rendered page: reads the task list, mounts the
//! detail pane into `#todoDetail` and keeps the list markup in step with
//! the controller.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::components::DetailPane;
use crate::config::ApiConfig;
use crate::context::PanelContext;
use crate::controller::DetailPanel;
use crate::dom;

pub fn mount() {
    let items = dom::scan_list_items();
    web_sys::console::log_1(&format!("[APP] Found {} list items", items.len()).into());

    let Some(container) = dom::detail_container() else {
        web_sys::console::error_1(&format!("[APP] #{} not found, detail pane disabled", dom::DETAIL_CONTAINER_ID).into());
        return;
    };
    // Pane content is ours from here on
    container.set_inner_html("");

    let panel = RwSignal::new(DetailPanel::new(items));
    let ctx = PanelContext::new(panel, ApiClient::new(ApiConfig::from_build_env()));

    let handle = leptos::mount::mount_to(container, move || {
        provide_context(ctx);

        // Mirror active item and container visibility onto collaborator markup
        Effect::new(move |_| {
            panel.with(|p| {
                dom::sync_active(p.active());
                dom::show_pane(p.visibility());
            });
        });

        view! { <DetailPane /> }
    });
    handle.forget();

    dom::bind_list_clicks(move |id| ctx.select(id));
}
