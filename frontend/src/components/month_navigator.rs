use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MonthNavigatorProps {
    pub label: String,
    /// False on the current month; the future is not navigable
    pub can_go_next: bool,
    /// Emits -1 or +1
    pub on_change: Callback<i32>,
}

#[function_component(MonthNavigator)]
pub fn month_navigator(props: &MonthNavigatorProps) -> Html {
    let on_prev = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(-1))
    };
    let on_next = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(1))
    };

    html! {
        <div class="month-navigator">
            <button class="month-nav-btn" onclick={on_prev} title="Previous month">
                <i class="fa fa-chevron-left"></i>
            </button>
            <h3 class="month-label">{&props.label}</h3>
            <button
                class="month-nav-btn"
                onclick={on_next}
                disabled={!props.can_go_next}
                title="Next month"
            >
                <i class="fa fa-chevron-right"></i>
            </button>
        </div>
    }
}
