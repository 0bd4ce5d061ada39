use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::Translator;
use crate::lead::catalog::{BUDGET_RANGES, PRODUCT_TYPES};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub label: Option<String>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    pub value: String,
    #[prop_or_default]
    pub placeholder: String,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub disabled: bool,
    pub on_input: Callback<String>,
    #[prop_or_default]
    pub on_blur: Callback<()>,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            on_input.emit(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let onblur = props.on_blur.reform(|_: FocusEvent| ());

    html! {
        <div class={classes!("form-field", props.error.is_some().then(|| "has-error"))}>
            if let Some(label) = &props.label {
                <label for={props.id.clone()}>{label}</label>
            }
            <input
                id={props.id.clone()}
                name={props.id.clone()}
                type={props.input_type.clone()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                disabled={props.disabled}
                {oninput}
                {onblur}
            />
            if let Some(error) = &props.error {
                <p class="field-error">{error}</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextAreaFieldProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub label: Option<String>,
    pub value: String,
    #[prop_or_default]
    pub placeholder: String,
    #[prop_or(4)]
    pub rows: u32,
    #[prop_or_default]
    pub disabled: bool,
    pub on_input: Callback<String>,
}

#[function_component(TextAreaField)]
pub fn text_area_field(props: &TextAreaFieldProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            on_input.emit(e.target_unchecked_into::<HtmlTextAreaElement>().value());
        })
    };

    html! {
        <div class="form-field">
            if let Some(label) = &props.label {
                <label for={props.id.clone()}>{label}</label>
            }
            <textarea
                id={props.id.clone()}
                name={props.id.clone()}
                rows={props.rows.to_string()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                disabled={props.disabled}
                {oninput}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub label: Option<String>,
    pub value: String,
    pub placeholder: String,
    /// `(value, label)` pairs.
    pub options: Vec<(&'static str, String)>,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub disabled: bool,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub on_blur: Callback<()>,
}

#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            on_change.emit(e.target_unchecked_into::<HtmlSelectElement>().value());
        })
    };
    let onblur = props.on_blur.reform(|_: FocusEvent| ());

    html! {
        <div class={classes!("form-field", props.error.is_some().then(|| "has-error"))}>
            if let Some(label) = &props.label {
                <label for={props.id.clone()}>{label}</label>
            }
            <select
                id={props.id.clone()}
                name={props.id.clone()}
                disabled={props.disabled}
                {onchange}
                {onblur}
            >
                <option value="" selected={props.value.is_empty()}>{&props.placeholder}</option>
                { for props.options.iter().map(|(value, label)| html! {
                    <option value={*value} selected={props.value == *value}>{label}</option>
                }) }
            </select>
            if let Some(error) = &props.error {
                <p class="field-error">{error}</p>
            }
        </div>
    }
}

pub fn product_type_options(tr: &Translator) -> Vec<(&'static str, String)> {
    PRODUCT_TYPES
        .iter()
        .map(|p| (p.value, tr.t(&p.label_key())))
        .collect()
}

pub fn budget_range_options(tr: &Translator) -> Vec<(&'static str, String)> {
    BUDGET_RANGES
        .iter()
        .map(|b| (b.value, tr.t(&b.label_key())))
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct ConsentCheckboxProps {
    pub id: AttrValue,
    pub checked: bool,
    pub text: String,
    pub link_text: String,
    pub link_to: Route,
    #[prop_or_default]
    pub disabled: bool,
    pub on_toggle: Callback<bool>,
}

/// Checkbox with a link to the matching legal page.
#[function_component(ConsentCheckbox)]
pub fn consent_checkbox(props: &ConsentCheckboxProps) -> Html {
    let onchange = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: Event| {
            on_toggle.emit(e.target_unchecked_into::<HtmlInputElement>().checked());
        })
    };

    html! {
        <div class="consent-row">
            <input
                type="checkbox"
                id={props.id.clone()}
                checked={props.checked}
                disabled={props.disabled}
                {onchange}
            />
            <label for={props.id.clone()}>
                {&props.text}{" "}
                <Link<Route> to={props.link_to.clone()} classes="consent-link">{&props.link_text}</Link<Route>>
            </label>
        </div>
    }
}
