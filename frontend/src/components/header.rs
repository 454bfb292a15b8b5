use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub on_logout: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };

    html! {
        <header class="header">
            <div class="container">
                <h1>{"Expense Tracker"}</h1>
                <div class="header-right">
                    <button class="btn logout-btn" onclick={on_logout}>
                        <i class="fa fa-sign-out"></i>
                        {"Log out"}
                    </button>
                </div>
            </div>
        </header>
    }
}
