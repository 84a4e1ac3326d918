//! Chart container component.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id of the container
    pub id: String,
    /// Extra class names, appended to `chart-container`
    #[props(default = String::new())]
    pub class: String,
    /// Optional minimum height in pixels
    #[props(default = 0)]
    pub min_height: u32,
    pub children: Element,
}

/// A positioned box holding one chart or control group.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let class = if props.class.is_empty() {
        "chart-container".to_string()
    } else {
        format!("chart-container {}", props.class)
    };
    let style = if props.min_height > 0 {
        format!("min-height: {}px; position: relative;", props.min_height)
    } else {
        "position: relative;".to_string()
    };

    rsx! {
        div {
            id: "{props.id}",
            class: "{class}",
            style: "{style}",
            {props.children}
        }
    }
}
