use yew::prelude::*;

use crate::components::month_navigator::MonthNavigator;
use crate::state::monthly_view::ExpenseListView;

#[derive(Properties, PartialEq)]
pub struct ExpenseListProps {
    pub list: ExpenseListView,
    pub month_label: String,
    pub is_current_month: bool,
    pub loading: bool,
    pub on_change_month: Callback<i32>,
    pub on_delete: Callback<i64>,
}

#[function_component(ExpenseList)]
pub fn expense_list(props: &ExpenseListProps) -> Html {
    html! {
        <section class="expenses-section">
            <h2>{"Expenses"}</h2>
            <MonthNavigator
                label={props.month_label.clone()}
                can_go_next={!props.is_current_month}
                on_change={props.on_change_month.clone()}
            />

            {if props.loading {
                html! { <div class="loading">{"Loading expenses..."}</div> }
            } else {
                match &props.list {
                    ExpenseListView::Empty { message } => html! {
                        <div class="expenses-empty">{message}</div>
                    },
                    ExpenseListView::Items(lines) => html! {
                        <ul class="expense-list">
                            {for lines.iter().map(|line| {
                                let on_delete = {
                                    let on_delete = props.on_delete.clone();
                                    let id = line.id;
                                    Callback::from(move |_: MouseEvent| on_delete.emit(id))
                                };
                                html! {
                                    <li class="expense-item" key={line.id.to_string()}>
                                        <i class={classes!("fa", line.icon, "expense-icon")}></i>
                                        <div class="expense-details">
                                            <span class="expense-name">{&line.name}</span>
                                            <span class="expense-category">{&line.category}</span>
                                        </div>
                                        <span class="expense-date">{&line.date}</span>
                                        <span class="expense-amount">{&line.amount}</span>
                                        <button class="delete-btn" onclick={on_delete} title="Delete expense">
                                            <i class="fa fa-trash"></i>
                                        </button>
                                    </li>
                                }
                            })}
                        </ul>
                    },
                }
            }}
        </section>
    }
}
