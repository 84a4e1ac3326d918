//! Life-stage pie chart with legend and hover tooltip.

use super::tooltip::{Tooltip, TooltipState};
use dioxus::prelude::*;
use haq_chart::pie::{PieChartView, CENTER, HEIGHT, LEGEND_OFFSET, TITLE, TITLE_Y, WIDTH};
use haq_core::AgeType;
use haq_db::models::AgeTypeTotal;

/// Pie tooltips sit just above the pointer.
const TOOLTIP_LIFT: (f64, f64) = (0.0, -28.0);

#[derive(Props, Clone, PartialEq)]
pub struct PieChartProps {
    pub country: String,
    pub totals: Vec<AgeTypeTotal>,
}

#[component]
pub fn PieChart(props: PieChartProps) -> Element {
    let mut tooltip = use_signal(TooltipState::default);

    let totals: Vec<(AgeType, f64)> = props
        .totals
        .iter()
        .map(|t| (t.age_type, t.value))
        .collect();
    let view = PieChartView::new(&totals);
    let (cx, cy) = CENTER;
    let (lx, ly) = LEGEND_OFFSET;

    rsx! {
        svg {
            width: "{WIDTH}",
            height: "{HEIGHT}",
            g {
                transform: "translate({cx},{cy})",
                text {
                    x: "0",
                    y: "{TITLE_Y}",
                    text_anchor: "middle",
                    font_size: "20px",
                    fill: "white",
                    {TITLE}
                }
                for slice in view.slices.iter().cloned() {
                    path {
                        class: "pie-slice",
                        d: "{slice.path}",
                        fill: slice.color,
                        stroke: "black",
                        opacity: "0.7",
                        onmousemove: {
                            let country = props.country.clone();
                            let slice = slice.clone();
                            move |evt: Event<MouseData>| {
                                let client = evt.client_coordinates();
                                let lines = PieChartView::tooltip_lines(&slice, &country).to_vec();
                                tooltip.set(TooltipState::at_offset(client.x, client.y, TOOLTIP_LIFT, lines));
                            }
                        },
                        onmouseleave: move |_| {
                            let hidden = tooltip.read().hidden();
                            tooltip.set(hidden);
                        },
                    }
                }
                g {
                    class: "legend",
                    transform: "translate({lx},{ly})",
                    for item in view.legend.iter() {
                        g {
                            transform: "translate({item.x},0)",
                            rect { x: "8", y: "17", width: "10", height: "10", fill: item.color }
                            text {
                                x: "25",
                                y: "22",
                                "dy": ".35em",
                                font_size: "12px",
                                fill: "white",
                                "{item.label}"
                            }
                        }
                    }
                }
            }
        }
        Tooltip { state: tooltip() }
    }
}
