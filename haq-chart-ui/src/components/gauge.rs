//! Semicircular HAQ Index gauge.

use dioxus::prelude::*;
use haq_chart::gauge::{GaugeView, CENTER, NEEDLE_TIP, VIEW_BOX};

#[derive(Props, Clone, PartialEq)]
pub struct GaugeProps {
    /// DOM id of the gauge container
    pub id: String,
    /// Year the value belongs to, shown as a caption
    pub year: String,
    pub value: f64,
}

/// Arc, needle and value text for one year's HAQ Index.
#[component]
pub fn Gauge(props: GaugeProps) -> Element {
    let view = GaugeView::new(props.value);
    let needle_transform = view.needle_transform();
    let (tip_x, tip_y) = NEEDLE_TIP;

    rsx! {
        div {
            id: "{props.id}",
            class: "gauge",
            svg {
                view_box: VIEW_BOX,
                width: "100%",
                path {
                    class: "indicator-arc",
                    d: "{view.arc_path}",
                    fill: "none",
                    stroke: view.color.css(),
                    stroke_width: "10",
                }
                line {
                    class: "indicator-needle",
                    x1: "{CENTER}",
                    y1: "{CENTER}",
                    x2: "{tip_x}",
                    y2: "{tip_y}",
                    stroke: "white",
                    stroke_width: "2",
                    transform: "{needle_transform}",
                }
                text {
                    class: "indicator-text",
                    x: "{CENTER}",
                    y: "75",
                    text_anchor: "middle",
                    fill: "white",
                    font_size: "12",
                    "{view.label}"
                }
            }
            div { class: "gauge-caption", "HAQ Index {props.year}" }
        }
    }
}
