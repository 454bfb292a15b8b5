use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use super::donut_geometry::{segment_starts, DonutLayout, LabelSide};
use crate::state::breakdown::{CategoryBreakdown, Rgb};

const CANVAS_WIDTH: u32 = 520;
const CANVAS_HEIGHT: u32 = 340;
const LABEL_COLOR: RGBColor = RGBColor(68, 68, 68);

#[derive(Properties, PartialEq)]
pub struct CategoryChartProps {
    pub breakdown: CategoryBreakdown,
}

pub struct CategoryChart {
    canvas_ref: NodeRef,
}

impl Component for CategoryChart {
    type Message = ();
    type Properties = CategoryChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().breakdown != old_props.breakdown {
            self.draw_chart(&ctx.props().breakdown);
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        self.draw_chart(&ctx.props().breakdown);
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="category-chart">
                <canvas
                    ref={self.canvas_ref.clone()}
                    class="category-chart-canvas"
                    width={CANVAS_WIDTH.to_string()}
                    height={CANVAS_HEIGHT.to_string()}
                ></canvas>
            </div>
        }
    }
}

impl CategoryChart {
    fn draw_chart(&self, breakdown: &CategoryBreakdown) {
        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };
        canvas.set_width(CANVAS_WIDTH);
        canvas.set_height(CANVAS_HEIGHT);

        let backend = match CanvasBackend::with_canvas_object(canvas) {
            Some(backend) => backend,
            None => return,
        };
        let root = backend.into_drawing_area();
        if root.fill(&WHITE).is_err() {
            return;
        }

        let layout = DonutLayout::fit(CANVAS_WIDTH, CANVAS_HEIGHT);
        let shares: Vec<f64> = breakdown.segments.iter().map(|segment| segment.share).collect();
        let starts = segment_starts(&shares);

        for (segment, start) in breakdown.segments.iter().zip(&starts) {
            let outline = layout.ring_segment(*start, segment.share);
            if root
                .draw(&Polygon::new(outline, to_color(segment.color).filled()))
                .is_err()
            {
                log::warn!("Failed to draw segment for {}", segment.category);
                continue;
            }

            let Some(label) = &segment.label else {
                continue;
            };
            let placement = layout.label_placement(*start, segment.share);
            if root
                .draw(&PathElement::new(
                    placement.callout.to_vec(),
                    LABEL_COLOR.stroke_width(1),
                ))
                .is_err()
            {
                log::warn!("Failed to draw callout for {}", segment.category);
            }

            let anchor = match placement.side {
                LabelSide::Right => Pos::new(HPos::Left, VPos::Center),
                LabelSide::Left => Pos::new(HPos::Right, VPos::Center),
            };
            let style = ("sans-serif", 14).into_font().color(&LABEL_COLOR).pos(anchor);
            if root
                .draw(&Text::new(label.clone(), placement.text_at, style))
                .is_err()
            {
                log::warn!("Failed to draw label for {}", segment.category);
            }
        }

        if let Err(e) = root.present() {
            log::warn!("Failed to present category chart: {:?}", e);
        }
    }
}

fn to_color(rgb: Rgb) -> RGBColor {
    RGBColor(rgb.0, rgb.1, rgb.2)
}


#[cfg(test)]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_chart_creation_in_wasm() {
        let chart = CategoryChart {
            canvas_ref: NodeRef::default(),
        };
        let breakdown = CategoryBreakdown::from_totals(&[
            shared::CategoryTotal {
                category: "Food".to_string(),
                total: 60.0,
            },
            shared::CategoryTotal {
                category: "Transport".to_string(),
                total: 40.0,
            },
        ])
        .unwrap();
        chart.draw_chart(&breakdown);
    }
}
