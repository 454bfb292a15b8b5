use yew::prelude::*;

mod components;
mod hooks;
mod services;
mod state;

use components::expenses::add_expense_form::AddExpenseForm;
use components::expenses::expense_list::ExpenseList;
use components::header::Header;
use components::stats::stats_panel::StatsPanel;
use hooks::use_finance::use_finance;
use services::{logging, ApiClient, AppConfig};

#[derive(Properties, PartialEq)]
struct AppProps {
    config: AppConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let api_client = use_memo(props.config.api_base_url.clone(), |base_url| {
        ApiClient::with_base_url(base_url.clone())
    });
    let finance = use_finance(&api_client, &props.config);
    let state = finance.state;
    let actions = finance.actions;

    html! {
        <>
            <Header on_logout={actions.logout.clone()} />
            <main class="main">
                <div class="container">
                    <AddExpenseForm
                        input={state.input.clone()}
                        submitting={state.submitting}
                        notice={state.notice}
                        on_input={actions.on_input.clone()}
                        on_submit={actions.submit.clone()}
                    />
                    <div class="dashboard">
                        <ExpenseList
                            list={state.list.clone()}
                            month_label={state.list_month_label.clone()}
                            is_current_month={state.list_is_current}
                            loading={state.loading}
                            on_change_month={actions.change_month.clone()}
                            on_delete={actions.delete_expense.clone()}
                        />
                        <StatsPanel
                            stats={state.stats.clone()}
                            month_label={state.stats_month_label.clone()}
                            is_current_month={state.stats_is_current}
                            on_change_month={actions.change_stats_month.clone()}
                        />
                    </div>
                </div>
            </main>
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::from_build_env();
    logging::init(config.log_level);
    log::info!("Starting expense tracker (API at '{}')", config.api_base_url);
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
