//! Collaborator DOM
//!
//! The task list and the two top-level containers are rendered by the
//! server page, not by this crate. These helpers read and patch that markup:
//! `.todo-item[data-todo-id]` entries with a `.todo-title` child, and the
//! `#emptyState` / `#todoDetail` containers.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::controller::Visibility;
use crate::models::TodoId;

pub const LIST_ITEM_SELECTOR: &str = ".todo-item";
pub const ID_ATTR: &str = "data-todo-id";
pub const EMPTY_STATE_ID: &str = "emptyState";
pub const DETAIL_CONTAINER_ID: &str = "todoDetail";

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// All list entries in document order
fn list_elements() -> Vec<Element> {
    let Some(doc) = document() else { return Vec::new() };
    let Ok(nodes) = doc.query_selector_all(LIST_ITEM_SELECTOR) else { return Vec::new() };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn element_id(el: &Element) -> Option<TodoId> {
    el.get_attribute(ID_ATTR).map(|raw| TodoId::from_attr(&raw))
}

/// Ids of the list entries present at startup
pub fn scan_list_items() -> Vec<TodoId> {
    list_elements().iter().filter_map(element_id).collect()
}

/// Call `on_select` with the entry's id whenever a list entry is clicked
pub fn bind_list_clicks<F>(on_select: F)
where
    F: Fn(TodoId) + Clone + 'static,
{
    for el in list_elements() {
        let Some(id) = element_id(&el) else { continue };
        let on_select = on_select.clone();
        let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
            on_select(id.clone());
        });
        let _ = el.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }
}

/// Mirror the active id onto the list: `active` on the entry, `active-title` on its title
pub fn sync_active(active: Option<&TodoId>) {
    for el in list_elements() {
        let is_active = element_id(&el).as_ref() == active && active.is_some();
        let _ = el.class_list().toggle_with_force("active", is_active);
        if let Ok(Some(title)) = el.query_selector(".todo-title") {
            let _ = title.class_list().toggle_with_force("active-title", is_active);
        }
    }
}

pub fn remove_list_item(id: &TodoId) {
    if let Some(el) = list_elements().into_iter().find(|el| element_id(el).as_ref() == Some(id)) {
        el.remove();
    }
}

fn html_element_by_id(id: &str) -> Option<HtmlElement> {
    document()
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Container the pane component is mounted into
pub fn detail_container() -> Option<HtmlElement> {
    html_element_by_id(DETAIL_CONTAINER_ID)
}

/// Show exactly one of the empty-state and detail containers
pub fn show_pane(visibility: Visibility) {
    let (empty, detail) = match visibility {
        Visibility::Empty => ("block", "none"),
        Visibility::Detail => ("none", "block"),
    };
    if let Some(el) = html_element_by_id(EMPTY_STATE_ID) {
        let _ = el.style().set_property("display", empty);
    }
    if let Some(el) = html_element_by_id(DETAIL_CONTAINER_ID) {
        let _ = el.style().set_property("display", detail);
    }
}
