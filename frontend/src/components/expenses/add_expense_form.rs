use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::state::submission::InputNotice;

const DEFAULT_PLACEHOLDER: &str = "Coffee 3.50 and a bus ticket for 2 euro...";

#[derive(Properties, PartialEq)]
pub struct AddExpenseFormProps {
    pub input: String,
    pub submitting: bool,
    pub notice: Option<InputNotice>,
    pub on_input: Callback<String>,
    /// Emits the text as typed
    pub on_submit: Callback<String>,
}

#[function_component(AddExpenseForm)]
pub fn add_expense_form(props: &AddExpenseFormProps) -> Html {
    let on_input = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(input.value());
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        let text = props.input.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(text.clone());
        })
    };

    let (placeholder, tone_class) = match props.notice {
        Some(notice) => (notice.placeholder, Some(notice.tone.css_class())),
        None => (DEFAULT_PLACEHOLDER, None),
    };

    html! {
        <section class="add-expense-section">
            <h2>{"Add Expenses"}</h2>
            <form class="add-expense-form" onsubmit={on_submit}>
                <input
                    type="text"
                    id="expense-input"
                    class={classes!("expense-input", tone_class)}
                    placeholder={placeholder}
                    value={props.input.clone()}
                    oninput={on_input}
                    disabled={props.submitting}
                />
                <button type="submit" class="btn btn-primary" disabled={props.submitting}>
                    {if props.submitting { "Adding..." } else { "Add" }}
                </button>
            </form>
        </section>
    }
}
