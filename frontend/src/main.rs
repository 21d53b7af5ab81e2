mod api;
mod components;
mod config;
mod state;

use api::{GlooTransport, PredictionClient};
use components::form::FormRefs;
use components::handlers;
use config::Settings;
use shared::{Field, HealthStatus, PredictionResponse, SubmitError};
use state::{BackendStatus, FormState};
use std::rc::Rc;
use yew::prelude::*;

// Yew msg components
pub(crate) enum Msg {
    // Submission
    Submit(SubmitEvent),
    SubmissionCompleted(Result<PredictionResponse, SubmitError>),

    // Input feedback
    FieldInvalid(Field, Event),
    FieldInput(Field),

    // Service status
    BackendChecked(Result<HealthStatus, SubmitError>),
}

#[derive(Properties, PartialEq)]
pub(crate) struct ModelProps {
    settings: Settings,
}

// Main component
pub(crate) struct Model {
    client: Rc<PredictionClient<GlooTransport>>,
    refs: FormRefs,
    state: FormState,
    backend: BackendStatus,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ModelProps;

    fn create(ctx: &Context<Self>) -> Self {
        let settings = ctx.props().settings.clone();
        log::info!("Using prediction service at {}", settings.api_url);

        let model = Self {
            client: Rc::new(PredictionClient::new(settings, GlooTransport)),
            refs: FormRefs::new(),
            state: FormState::default(),
            backend: BackendStatus::Checking,
        };
        handlers::probe_backend(&model, ctx);
        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Submit(event) => handlers::handle_submit(self, ctx, event),
            Msg::SubmissionCompleted(outcome) => handlers::handle_submission_completed(self, outcome),

            Msg::FieldInvalid(field, event) => handlers::handle_field_invalid(self, field, event),
            Msg::FieldInput(field) => handlers::handle_field_input(self, field),

            Msg::BackendChecked(probe) => handlers::handle_backend_checked(self, probe),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { components::header::render_header() }

                <main class="main-content">
                { components::form::render_form(self, ctx) }
                { components::results::render_result(self) }
                { components::utils::render_error_message(self) }
                </main>

                { components::header::render_footer(self) }
            </div>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if self.state.take_scroll_request() {
            handlers::scroll_result_into_view(self);
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::with_props(ModelProps {
        settings: Settings::from_build_env(),
    })
    .render();
}
