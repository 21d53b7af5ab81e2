use super::super::{Model, Msg};
use super::utils::display;
use shared::{AlcoholIntake, Field, FormValues, Gender, HighCaloricFood, SelectOption};
use std::collections::HashMap;
use strum::IntoEnumIterator;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Node handles the submit handler reads from and scrolls to.
pub struct FormRefs {
    fields: HashMap<Field, NodeRef>,
    pub result: NodeRef,
}

impl FormRefs {
    pub fn new() -> Self {
        Self {
            fields: Field::iter().map(|field| (field, NodeRef::default())).collect(),
            result: NodeRef::default(),
        }
    }

    pub fn field(&self, field: Field) -> NodeRef {
        self.fields.get(&field).cloned().unwrap_or_default()
    }

    /// Snapshot of every control's current value.
    pub fn read(&self) -> FormValues {
        let mut values = FormValues::new();
        for field in Field::iter() {
            values.set(field, read_value(&self.field(field)));
        }
        values
    }
}

impl Default for FormRefs {
    fn default() -> Self {
        Self::new()
    }
}

fn read_value(node: &NodeRef) -> String {
    if let Some(input) = node.cast::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = node.cast::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

// Native constraints on the numeric inputs: min, max, step.
fn number_bounds(field: Field) -> (&'static str, &'static str, &'static str) {
    match field {
        Field::Weight => ("20", "300", "0.1"),
        Field::Height => ("1.0", "2.5", "0.01"),
        Field::Age => ("10", "100", "1"),
        Field::MainMeals => ("1", "4", "1"),
        Field::VegetableIntake => ("1", "3", "1"),
        Field::Gender | Field::HighCaloricFood | Field::AlcoholIntake => ("", "", "any"),
    }
}

fn render_options<T: SelectOption + IntoEnumIterator>() -> Html {
    T::iter()
        .map(|option| {
            html! { <option value={option.as_ref().to_string()}>{ option.label() }</option> }
        })
        .collect::<Html>()
}

fn render_control(model: &Model, ctx: &Context<Model>, field: Field) -> Html {
    let link = ctx.link();
    let oninvalid = link.callback(move |e: Event| Msg::FieldInvalid(field, e));
    let oninput = link.callback(move |_: InputEvent| Msg::FieldInput(field));
    let style = model
        .state
        .border_color(field)
        .map(|color| format!("border-color: {};", color));

    if field.is_select() {
        let options = match field {
            Field::Gender => render_options::<Gender>(),
            Field::HighCaloricFood => render_options::<HighCaloricFood>(),
            Field::AlcoholIntake => render_options::<AlcoholIntake>(),
            _ => html! {},
        };
        html! {
            <select
                id={field.element_id()}
                name={field.element_id()}
                ref={model.refs.field(field)}
                required=true
                {style}
                {oninvalid}
                {oninput}
            >
                <option value="" disabled=true selected=true>{"Select..."}</option>
                { options }
            </select>
        }
    } else {
        let (min, max, step) = number_bounds(field);
        html! {
            <input
                type="number"
                id={field.element_id()}
                name={field.element_id()}
                ref={model.refs.field(field)}
                required=true
                {min}
                {max}
                {step}
                {style}
                {oninvalid}
                {oninput}
            />
        }
    }
}

pub fn render_form(model: &Model, ctx: &Context<Model>) -> Html {
    let busy = model.state.is_busy();

    html! {
        <form id="obesityForm" class="prediction-form" onsubmit={ctx.link().callback(Msg::Submit)}>
            <div class="form-grid">
                { for Field::iter().map(|field| html! {
                    <div class="form-group" key={field.element_id()}>
                        <label for={field.element_id()}>{ field.label() }</label>
                        { render_control(model, ctx, field) }
                    </div>
                })}
            </div>
            <button
                type="submit"
                id="submitBtn"
                class="analyze-btn"
                disabled={model.state.submit_disabled()}
            >
                <span id="btnText" style={display(!busy, "inline")}>
                    <i class="fa-solid fa-magnifying-glass"></i>{" Predict"}
                </span>
                <div id="loader" class="loader" style={display(model.state.loader_visible(), "block")}>
                    <i class="fa-solid fa-spinner fa-spin"></i>
                </div>
            </button>
        </form>
    }
}
