use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::date_utils::today;
use crate::services::{ApiClient, AppConfig, ExpenseService};
use crate::state::monthly_view::{ExpenseListView, StatsView};
use crate::state::submission::InputNotice;
use crate::state::FinanceController;

#[derive(Clone, PartialEq)]
pub struct FinanceState {
    pub list: ExpenseListView,
    pub list_month_label: String,
    pub list_is_current: bool,
    pub stats: StatsView,
    pub stats_month_label: String,
    pub stats_is_current: bool,
    pub loading: bool,
    pub input: String,
    pub submitting: bool,
    pub notice: Option<InputNotice>,
}

pub struct UseFinanceResult {
    pub state: FinanceState,
    pub actions: UseFinanceActions,
}

#[derive(Clone, PartialEq)]
pub struct UseFinanceActions {
    pub change_month: Callback<i32>,
    pub change_stats_month: Callback<i32>,
    pub delete_expense: Callback<i64>,
    pub on_input: Callback<String>,
    pub submit: Callback<String>,
    pub logout: Callback<()>,
}

#[hook]
pub fn use_finance(api_client: &ApiClient, config: &AppConfig) -> UseFinanceResult {
    let controller = {
        let api_client = api_client.clone();
        use_memo((), move |_| {
            let service: Rc<dyn ExpenseService> = Rc::new(api_client);
            FinanceController::new(service, today())
        })
    };
    let redraw = use_force_update();
    let loading = use_state(|| true);
    let input = use_state(String::new);
    let submitting = use_state(|| false);
    let notice = use_state(|| None::<InputNotice>);
    // Newer notices outlive the timers of older ones
    let notice_generation = use_mut_ref(|| 0u64);

    // Initial load: the list and the stats month independently
    {
        let controller = controller.clone();
        let redraw = redraw.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            let list_controller = controller.clone();
            let list_redraw = redraw.clone();
            spawn_local(async move {
                let _ = list_controller.refresh().await;
                loading.set(false);
                list_redraw.force_update();
            });
            spawn_local(async move {
                let _ = controller.load_stats().await;
                redraw.force_update();
            });
            || ()
        });
    }

    let change_month = {
        let controller = controller.clone();
        let redraw = redraw.clone();
        use_callback((), move |delta: i32, _| {
            controller.change_month(delta, today());
            redraw.force_update();
        })
    };

    let change_stats_month = {
        let controller = controller.clone();
        let redraw = redraw.clone();
        use_callback((), move |delta: i32, _| {
            let ticket = controller.move_stats_month(delta, today());
            redraw.force_update();

            let controller = controller.clone();
            let redraw = redraw.clone();
            spawn_local(async move {
                let _ = controller.fetch_stats(ticket).await;
                redraw.force_update();
            });
        })
    };

    let delete_expense = {
        let controller = controller.clone();
        let redraw = redraw.clone();
        use_callback((), move |id: i64, _| {
            let controller = controller.clone();
            let redraw = redraw.clone();
            spawn_local(async move {
                let _ = controller.delete(id).await;
                redraw.force_update();
            });
        })
    };

    let on_input = {
        let input = input.clone();
        use_callback((), move |value: String, _| input.set(value))
    };

    let submit = {
        let controller = controller.clone();
        let redraw = redraw.clone();
        let input = input.clone();
        let submitting = submitting.clone();
        let notice = notice.clone();
        let notice_generation = notice_generation.clone();
        let refresh_delay_ms = config.refresh_delay_ms;
        let notice_duration_ms = config.notice_duration_ms;

        use_callback((), move |text: String, _| {
            let controller = controller.clone();
            let redraw = redraw.clone();
            let input = input.clone();
            let submitting = submitting.clone();
            let notice = notice.clone();
            let notice_generation = notice_generation.clone();

            spawn_local(async move {
                submitting.set(true);
                let outcome = controller.submit(&text).await;
                submitting.set(false);

                if outcome.clears_input() {
                    input.set(String::new());
                }
                let generation = {
                    let mut current = notice_generation.borrow_mut();
                    *current += 1;
                    *current
                };
                notice.set(Some(outcome.notice()));

                if outcome.should_refresh() {
                    let controller = controller.clone();
                    spawn_local(async move {
                        gloo::timers::future::TimeoutFuture::new(refresh_delay_ms).await;
                        let _ = controller.refresh_all().await;
                        redraw.force_update();
                    });
                }

                gloo::timers::future::TimeoutFuture::new(notice_duration_ms).await;
                if *notice_generation.borrow() == generation {
                    notice.set(None);
                }
            });
        })
    };

    let logout = {
        let controller = controller.clone();
        let redraw = redraw.clone();
        let input = input.clone();
        let notice = notice.clone();
        use_callback((), move |_, _| {
            let controller = controller.clone();
            let redraw = redraw.clone();
            let input = input.clone();
            let notice = notice.clone();
            spawn_local(async move {
                controller.logout(today()).await;
                input.set(String::new());
                notice.set(None);
                redraw.force_update();
            });
        })
    };

    let list_month = controller.list_month();
    let stats_month = controller.stats_month();
    let now = today();

    let state = FinanceState {
        list: controller.expense_list(),
        list_month_label: list_month.label(),
        list_is_current: list_month.is_current(now),
        stats: controller.stats_view(),
        stats_month_label: stats_month.label(),
        stats_is_current: stats_month.is_current(now),
        loading: *loading,
        input: (*input).clone(),
        submitting: *submitting,
        notice: *notice,
    };

    let actions = UseFinanceActions {
        change_month,
        change_stats_month,
        delete_expense,
        on_input,
        submit,
        logout,
    };

    UseFinanceResult { state, actions }
}
