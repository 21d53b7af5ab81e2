use super::super::Model;
use yew::prelude::*;

/// Inline `display` style for a panel that is either shown or hidden.
pub fn display(visible: bool, shown: &str) -> String {
    format!("display: {};", if visible { shown } else { "none" })
}

pub fn render_error_message(model: &Model) -> Html {
    let state = &model.state;

    html! {
        <div id="error" class="error-message" style={display(state.error_visible(), "block")}>
            <i class="fa-solid fa-circle-exclamation"></i>
            <p id="errorText" title={state.last_error().map(|e| e.to_string())}>{ state.error_text().unwrap_or_default() }</p>
        </div>
    }
}
