//! SVG axes drawn from precomputed ticks.
//!
//! Geometry matches d3's `axisLeft`/`axisBottom`: 6px tick marks, labels
//! 9px from the domain line, and a domain path with outer ticks.

use dioxus::prelude::*;
use haq_chart::AxisTick;

const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;

#[derive(Props, Clone, PartialEq)]
pub struct AxisLeftProps {
    pub ticks: Vec<AxisTick>,
    /// Pixel extent of the axis, top to bottom.
    pub range: [f64; 2],
    #[props(default = "10".to_string())]
    pub label_font_size: String,
}

/// Vertical value axis at x = 0.
#[component]
pub fn AxisLeft(props: AxisLeftProps) -> Element {
    let [r0, r1] = props.range;
    let domain = format!("M{},{}H0.5V{}H{}", -TICK_SIZE, r0, r1, -TICK_SIZE);
    let tick_x2 = -TICK_SIZE;
    let label_x = -(TICK_SIZE + TICK_PADDING);

    rsx! {
        g {
            class: "axis axis-left",
            fill: "none",
            font_size: "10",
            text_anchor: "end",
            path { class: "domain", stroke: "currentColor", d: "{domain}" }
            for tick in props.ticks.iter() {
                g {
                    class: "tick",
                    transform: "translate(0,{tick.position})",
                    line { stroke: "currentColor", x2: "{tick_x2}" }
                    text {
                        fill: "white",
                        x: "{label_x}",
                        "dy": "0.32em",
                        font_size: "{props.label_font_size}",
                        "{tick.label}"
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct AxisBottomProps {
    pub ticks: Vec<AxisTick>,
    /// Pixel extent of the axis, left to right.
    pub range: [f64; 2],
    /// Vertical offset of the axis line.
    pub y: f64,
    /// Optional `transform` applied to each label (e.g. rotation).
    #[props(default = String::new())]
    pub label_transform: String,
    #[props(default = "12px".to_string())]
    pub label_font_size: String,
}

/// Horizontal category axis. Rotated labels are anchored at their end.
#[component]
pub fn AxisBottom(props: AxisBottomProps) -> Element {
    let [r0, r1] = props.range;
    let domain = format!("M{},{}V0H{}V{}", r0, TICK_SIZE, r1, TICK_SIZE);
    let label_y = TICK_SIZE + TICK_PADDING;
    let anchor = if props.label_transform.is_empty() { "middle" } else { "end" };

    rsx! {
        g {
            class: "axis axis-bottom",
            transform: "translate(0,{props.y})",
            fill: "none",
            font_size: "10",
            path { class: "domain", stroke: "currentColor", d: "{domain}" }
            for tick in props.ticks.iter() {
                g {
                    class: "tick",
                    transform: "translate({tick.position},0)",
                    line { stroke: "currentColor", y2: "{TICK_SIZE}" }
                    text {
                        fill: "white",
                        y: "{label_y}",
                        "dy": "0.71em",
                        transform: "{props.label_transform}",
                        text_anchor: "{anchor}",
                        font_size: "{props.label_font_size}",
                        "{tick.label}"
                    }
                }
            }
        }
    }
}
