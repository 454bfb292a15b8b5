use yew::prelude::*;

use crate::state::breakdown::CategoryBar;

#[derive(Properties, PartialEq)]
pub struct CategoryBarsProps {
    pub bars: Vec<CategoryBar>,
}

#[function_component(CategoryBars)]
pub fn category_bars(props: &CategoryBarsProps) -> Html {
    html! {
        <ul class="category-bars">
            {for props.bars.iter().map(|bar| {
                let fill = format!("width: {}%; background-color: {};", bar.percent, bar.color.hex());
                html! {
                    <li class="category-bar" key={bar.category.clone()}>
                        <div class="category-bar-header">
                            <span class="category-bar-name">
                                <i class={classes!("fa", bar.icon)}></i>
                                {&bar.category}
                            </span>
                            <span class="category-bar-total">{&bar.formatted_total}</span>
                            <span class="category-bar-percent">{format!("{}%", bar.percent)}</span>
                        </div>
                        <div class="category-bar-track">
                            <div class="category-bar-fill" style={fill}></div>
                        </div>
                    </li>
                }
            })}
        </ul>
    }
}
