//! Hover tooltip owned by a single chart.

use dioxus::prelude::*;

/// Pixel offset of the tooltip from the pointer.
pub const TOOLTIP_OFFSET: f64 = 10.0;

/// Where and what a chart's tooltip shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TooltipState {
    pub visible: bool,
    pub x: f64,
    pub y: f64,
    pub lines: Vec<String>,
}

impl TooltipState {
    /// Show `lines` next to a pointer at client coordinates `(x, y)`.
    pub fn at(x: f64, y: f64, lines: Vec<String>) -> Self {
        Self::at_offset(x, y, (TOOLTIP_OFFSET, TOOLTIP_OFFSET), lines)
    }

    pub fn at_offset(x: f64, y: f64, offset: (f64, f64), lines: Vec<String>) -> Self {
        Self {
            visible: true,
            x: x + offset.0,
            y: y + offset.1,
            lines,
        }
    }

    /// Keep the content, fade out.
    pub fn hidden(&self) -> Self {
        Self {
            visible: false,
            ..self.clone()
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct TooltipProps {
    pub state: TooltipState,
}

/// Fixed-position tooltip; opacity transitions are left to CSS.
#[component]
pub fn Tooltip(props: TooltipProps) -> Element {
    let opacity = if props.state.visible { 0.9 } else { 0.0 };
    let style = format!(
        "position: fixed; left: {}px; top: {}px; opacity: {}; pointer-events: none;",
        props.state.x, props.state.y, opacity
    );

    rsx! {
        div {
            class: "tooltip",
            style: "{style}",
            for (i, line) in props.state.lines.iter().enumerate() {
                if i > 0 {
                    br {}
                }
                "{line}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tooltip_is_offset_from_pointer() {
        let t = TooltipState::at(100.0, 50.0, vec!["India".into()]);
        assert!(t.visible);
        assert_eq!((t.x, t.y), (110.0, 60.0));
    }

    #[test]
    fn custom_offset_can_lift_tooltip() {
        let t = TooltipState::at_offset(100.0, 50.0, (0.0, -28.0), Vec::new());
        assert_eq!((t.x, t.y), (100.0, 22.0));
    }

    #[test]
    fn hiding_keeps_position_and_text() {
        let t = TooltipState::at(0.0, 0.0, vec!["Chad".into()]).hidden();
        assert!(!t.visible);
        assert_eq!(t.lines, vec!["Chad".to_string()]);
        assert_eq!(t.x, 10.0);
    }
}
