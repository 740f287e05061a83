#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod components;
pub mod dom;
pub mod storage;
pub mod style;
pub mod theme;
pub mod time;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // Stylesheet and saved theme go in before the first paint of the widgets.
    style::inject_bw_style();
    theme::restore_saved_bw();
    let Some((comments_host, toolbar_host)) = create_mount_hosts() else {
        return;
    };
    yew::Renderer::<components::comments::CommentsPanel>::with_root(comments_host).render();
    yew::Renderer::<components::toolbar::Toolbar>::with_root(toolbar_host).render();
    api::install_page_api();
}

/// Create the two mount points in `<body>`: the comments panel host inserted
/// immediately before a newly created toolbar host, so the panel never sits
/// under the floating toolbar.
#[cfg(target_arch = "wasm32")]
fn create_mount_hosts() -> Option<(web_sys::Element, web_sys::Element)> {
    let doc = dom::document()?;
    let body = doc.body()?;
    let toolbar_host = doc.create_element("div").ok()?;
    toolbar_host.set_id("blog-toolbar-host");
    let comments_host = doc.create_element("div").ok()?;
    comments_host.set_id("blog-comments-host");
    body.append_child(&toolbar_host).ok()?;
    body.insert_before(&comments_host, Some(toolbar_host.as_ref()))
        .ok()?;
    Some((comments_host, toolbar_host))
}
