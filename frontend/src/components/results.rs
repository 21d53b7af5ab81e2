use super::super::Model;
use super::utils::display;
use yew::prelude::*;

pub fn render_result(model: &Model) -> Html {
    let state = &model.state;
    let (prediction, confidence) = state
        .result()
        .map(|r| {
            (
                r.prediction_text.clone(),
                r.confidence_text.clone().unwrap_or_default(),
            )
        })
        .unwrap_or_default();

    html! {
        <div
            id="result"
            class="results-container"
            ref={model.refs.result.clone()}
            style={display(state.result_visible(), "block")}
        >
            <div class="result-header">
                <h2><i class="fa-solid fa-heart-pulse"></i>{" Prediction"}</h2>
                <p id="predictionText" class="prediction-text">{ prediction }</p>
            </div>
            <div
                id="confidenceDiv"
                class="confidence-meter"
                style={display(state.confidence_visible(), "block")}
            >
                <div class="meter-label">{"Confidence:"}</div>
                <div id="confidenceText" class="meter-value">{ confidence }</div>
            </div>
        </div>
    }
}
