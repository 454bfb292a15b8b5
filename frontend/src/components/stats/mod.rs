pub mod category_bars;
pub mod category_chart;
pub mod donut_geometry;
pub mod stats_panel;
