use blogkit_core::back_to_top_visible;
use yew::prelude::*;

use super::BACK_TO_TOP_ID;
use super::interactions::{
    back_to_top_handler, toggle_theme_handler, use_global_shortcuts, use_scroll_observer,
};
use crate::theme;

const BTN_BASE_CLASSES: &str = "w-11 h-11 rounded-lg border flex items-center justify-center \
     bg-white text-black border-gray-200 shadow-sm hover:-translate-y-1 transition-transform";

#[derive(Properties, PartialEq, Clone, Default)]
pub struct ToolbarProps {
    /// Theme state at first render; defaults to the live root marker class.
    #[prop_or_default]
    pub initial_bw: Option<bool>,
    /// Scroll offset at first render; defaults to the live viewport position.
    #[prop_or_default]
    pub initial_scroll_y: Option<f64>,
}

/// The floating toolbar: theme toggle and back-to-top.
///
/// Renders once with the restored state; afterwards the theme module and the
/// scroll observer keep the button attributes current through the DOM, the
/// same path the page API uses.
#[function_component(Toolbar)]
pub fn toolbar(p: &ToolbarProps) -> Html {
    let bw = p.initial_bw.unwrap_or_else(theme::is_bw);
    let scroll_y = p.initial_scroll_y.unwrap_or_else(crate::dom::scroll_y);

    use_global_shortcuts();
    use_scroll_observer();

    let on_toggle = toggle_theme_handler();
    let on_top = back_to_top_handler();

    let toggle_state = if bw {
        theme::BTN_ON_CLASS
    } else {
        theme::BTN_OFF_CLASS
    };
    let top_hidden = (!back_to_top_visible(scroll_y)).then_some("hidden");

    html! {
      <div class="fixed right-4 bottom-4 flex flex-col gap-2 z-[99999] select-none" aria-hidden="false">
        <button
            type="button"
            id={theme::TOGGLE_BTN_ID}
            title="Toggle theme (press \"b\")"
            aria-pressed={if bw { "true" } else { "false" }}
            class={classes!(BTN_BASE_CLASSES, toggle_state)}
            onclick={on_toggle}
        >
          <span aria-hidden="true">{ "B/W" }</span>
          <span class="sr-only">{ "Toggle theme (light / dark)" }</span>
        </button>
        <button
            type="button"
            id={BACK_TO_TOP_ID}
            title="Back to top (press \"t\")"
            class={classes!(BTN_BASE_CLASSES, top_hidden)}
            onclick={on_top}
        >
          <span aria-hidden="true">{ "↑" }</span>
          <span class="sr-only">{ "Back to top" }</span>
        </button>
      </div>
    }
}
