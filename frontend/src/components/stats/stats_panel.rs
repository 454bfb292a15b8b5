use yew::prelude::*;

use super::category_bars::CategoryBars;
use super::category_chart::CategoryChart;
use crate::components::month_navigator::MonthNavigator;
use crate::state::monthly_view::{FetchPhase, StatsContent, StatsView};

#[derive(Properties, PartialEq)]
pub struct StatsPanelProps {
    pub stats: StatsView,
    pub month_label: String,
    pub is_current_month: bool,
    pub on_change_month: Callback<i32>,
}

#[function_component(StatsPanel)]
pub fn stats_panel(props: &StatsPanelProps) -> Html {
    html! {
        <section class="stats-section">
            <h2>{"Spending by Category"}</h2>
            <MonthNavigator
                label={props.month_label.clone()}
                can_go_next={!props.is_current_month}
                on_change={props.on_change_month.clone()}
            />

            {match props.stats.phase {
                FetchPhase::Fetching => html! { <div class="loading">{"Loading statistics..."}</div> },
                FetchPhase::Failed => html! {
                    <div class="form-message error">{"Could not load statistics for this month."}</div>
                },
                FetchPhase::Idle | FetchPhase::Rendered => html! {},
            }}

            {match &props.stats.content {
                StatsContent::Pending => html! {},
                StatsContent::Empty { message } => html! {
                    <div class="stats-empty">
                        <i class="fa fa-pie-chart stats-empty-icon"></i>
                        <p>{message}</p>
                    </div>
                },
                StatsContent::Chart(breakdown) => html! {
                    <div class="stats-content">
                        <CategoryChart breakdown={breakdown.clone()} />
                        <CategoryBars bars={breakdown.bars.clone()} />
                    </div>
                },
            }}
        </section>
    }
}
