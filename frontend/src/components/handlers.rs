use super::super::{Model, Msg};
use shared::{Field, HealthStatus, PredictionResponse, SubmitError};
use crate::state::BackendStatus;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

pub fn handle_submit(model: &mut Model, ctx: &Context<Model>, event: SubmitEvent) -> bool {
    event.prevent_default();

    // The button is disabled while busy, but a keyboard submit can still land here.
    if !model.state.begin_submission() {
        log::warn!("Submission already in flight, ignoring submit");
        return false;
    }

    let values = model.refs.read();
    let client = Rc::clone(&model.client);
    let link = ctx.link().clone();

    spawn_local(async move {
        let outcome = client.submit(&values).await;
        link.send_message(Msg::SubmissionCompleted(outcome));
    });

    true
}

pub fn handle_submission_completed(
    model: &mut Model,
    outcome: Result<PredictionResponse, SubmitError>,
) -> bool {
    model.state.complete(outcome);
    true
}

pub fn handle_field_invalid(model: &mut Model, field: Field, event: Event) -> bool {
    event.prevent_default();
    model.state.mark_invalid(field);
    true
}

pub fn handle_field_input(model: &mut Model, field: Field) -> bool {
    model.state.clear_invalid(field);
    true
}

pub fn probe_backend(model: &Model, ctx: &Context<Model>) {
    let client = Rc::clone(&model.client);
    let link = ctx.link().clone();

    spawn_local(async move {
        let probe = client.health().await;
        link.send_message(Msg::BackendChecked(probe));
    });
}

pub fn handle_backend_checked(model: &mut Model, probe: Result<HealthStatus, SubmitError>) -> bool {
    model.backend = BackendStatus::from_probe(probe);
    true
}

pub fn scroll_result_into_view(model: &Model) {
    if let Some(result) = model.refs.result.cast::<Element>() {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Nearest);
        result.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
