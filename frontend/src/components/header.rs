use super::super::Model;
use crate::state::BackendStatus;
use yew::prelude::*;

pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-weight-scale"></i>{" Obesity Level Prediction"}</h1>
            <p class="subtitle">{"Enter your details to estimate your obesity category"}</p>
        </header>
    }
}

pub fn render_footer(model: &Model) -> Html {
    let status_class = match model.backend {
        BackendStatus::Ready => "status-ready",
        BackendStatus::Checking => "status-checking",
        _ => "status-degraded",
    };

    html! {
        <footer class="app-footer">
            <p class={classes!("service-status", status_class)}>{ model.backend.describe() }</p>
            <p>{ format!("Backend: {}", model.client.settings().api_url) }</p>
        </footer>
    }
}
