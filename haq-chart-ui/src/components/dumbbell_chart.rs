//! Disease impact dumbbell chart.

use super::axis::{AxisBottom, AxisLeft};
use dioxus::prelude::*;
use haq_chart::bar::Margin;
use haq_chart::color::{DUMBBELL_BASELINE, DUMBBELL_LATEST};
use haq_chart::dumbbell::{
    DumbbellView, DOT_RADIUS, HEIGHT, LINE_WIDTH, MARGIN, PLACEHOLDER, PLOT_HEIGHT, PLOT_WIDTH,
    TITLE, WIDTH,
};
use haq_db::models::IndicatorComparison;

#[derive(Props, Clone, PartialEq)]
pub struct DumbbellChartProps {
    pub comparisons: Vec<IndicatorComparison>,
}

/// One grey segment per indicator from its baseline dot to its latest dot.
/// Shows a placeholder when there is nothing to compare.
#[component]
pub fn DumbbellChart(props: DumbbellChartProps) -> Element {
    let data: Vec<(&str, f64, f64)> = props
        .comparisons
        .iter()
        .map(|c| (c.indicator_name.as_str(), c.start_value, c.end_value))
        .collect();

    let Some(view) = DumbbellView::new(&data) else {
        return rsx! {
            svg {
                width: "{WIDTH}",
                height: "{HEIGHT}",
                text {
                    x: "50%",
                    y: "50%",
                    text_anchor: "middle",
                    fill: "white",
                    {PLACEHOLDER}
                }
            }
        };
    };

    let Margin { left, top, .. } = MARGIN;
    let title_x = PLOT_WIDTH / 2.0;

    rsx! {
        svg {
            width: "{WIDTH}",
            height: "{HEIGHT}",
            g {
                transform: "translate({left},{top})",
                text {
                    x: "{title_x}",
                    y: "-30",
                    text_anchor: "middle",
                    font_size: "20px",
                    fill: "white",
                    {TITLE}
                }
                AxisBottom {
                    ticks: view.x_ticks.clone(),
                    range: [0.0, PLOT_WIDTH],
                    y: PLOT_HEIGHT,
                    label_transform: "translate(0,0)rotate(-45)".to_string(),
                    label_font_size: "10.5px".to_string(),
                }
                AxisLeft {
                    ticks: view.y_ticks.clone(),
                    range: [PLOT_HEIGHT, 0.0],
                    label_font_size: "11px".to_string(),
                }
                for row in view.rows.iter() {
                    g {
                        class: "dumbbell",
                        line {
                            class: "line",
                            x1: "{row.cx}",
                            x2: "{row.cx}",
                            y1: "{row.start_y}",
                            y2: "{row.end_y}",
                            stroke: "grey",
                            stroke_width: "{LINE_WIDTH}",
                        }
                        circle {
                            class: "circle1990",
                            cx: "{row.cx}",
                            cy: "{row.start_y}",
                            r: "{DOT_RADIUS}",
                            fill: DUMBBELL_BASELINE,
                        }
                        circle {
                            class: "circle2019",
                            cx: "{row.cx}",
                            cy: "{row.end_y}",
                            r: "{DOT_RADIUS}",
                            fill: DUMBBELL_LATEST,
                        }
                    }
                }
            }
        }
    }
}
