//! Cancer statistics bar chart.

use super::axis::{AxisBottom, AxisLeft};
use dioxus::prelude::*;
use haq_chart::bar::{
    BarChartView, GRADIENT_ID, HEIGHT, MARGIN, PLOT_HEIGHT, PLOT_WIDTH, TITLE, WIDTH,
};
use haq_chart::color::BAR_GRADIENT;
use haq_db::models::IndicatorValue;

#[derive(Props, Clone, PartialEq)]
pub struct BarChartProps {
    pub values: Vec<IndicatorValue>,
}

/// Vertical bars with a top-to-bottom gradient fill and rotated labels.
#[component]
pub fn BarChart(props: BarChartProps) -> Element {
    let data: Vec<(&str, f64)> = props
        .values
        .iter()
        .map(|v| (v.label.as_str(), v.value))
        .collect();
    let view = BarChartView::new(&data);
    let plot_transform = MARGIN.translate();
    let title_x = PLOT_WIDTH / 2.0;
    let fill = format!("url(#{})", GRADIENT_ID);
    let (top_color, bottom_color) = BAR_GRADIENT;

    rsx! {
        svg {
            width: "{WIDTH}",
            height: "{HEIGHT}",
            g {
                transform: "{plot_transform}",
                text {
                    x: "{title_x}",
                    y: "-70",
                    text_anchor: "middle",
                    font_size: "20px",
                    fill: "white",
                    {TITLE}
                }
                defs {
                    linearGradient {
                        id: GRADIENT_ID,
                        "gradientUnits": "userSpaceOnUse",
                        x1: "0%",
                        y1: "0%",
                        x2: "0%",
                        y2: "100%",
                        stop { "offset": "0%", "stop-color": top_color }
                        stop { "offset": "100%", "stop-color": bottom_color }
                    }
                }
                AxisBottom {
                    ticks: view.x_ticks.clone(),
                    range: [0.0, PLOT_WIDTH],
                    y: PLOT_HEIGHT,
                    label_transform: "translate(-10,0)rotate(-45)".to_string(),
                }
                AxisLeft {
                    ticks: view.y_ticks.clone(),
                    range: [PLOT_HEIGHT, 0.0],
                }
                for bar in view.bars.iter() {
                    rect {
                        class: "bar",
                        x: "{bar.x}",
                        y: "{bar.y}",
                        width: "{bar.width}",
                        height: "{bar.height}",
                        fill: "{fill}",
                    }
                }
            }
        }
    }
}
