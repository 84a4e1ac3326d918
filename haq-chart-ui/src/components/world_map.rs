//! Choropleth world map with pan/zoom, hover names and click selection.
//!
//! All country paths live in one group whose `transform` is the current
//! [`ZoomTransform`]. Pointer positions arrive in client pixels and are
//! converted to viewBox units before they touch the transform.

use super::tooltip::{Tooltip, TooltipState};
use crate::controller::region_fills;
use crate::js_bridge::element_rect;
use crate::state::AppState;
use dioxus::html::geometry::WheelDelta;
use dioxus::html::input_data::MouseButton;
use dioxus::prelude::*;
use haq_chart::path::{MAP_HEIGHT, MAP_WIDTH};
use haq_chart::zoom::{wheel_factor, DeltaMode, BUTTON_ZOOM_IN, BUTTON_ZOOM_OUT, DRAG_THRESHOLD};
use haq_chart::{ZoomTransform, NEUTRAL_FILL};

/// DOM id of the map `<svg>`, used to measure it.
const MAP_SVG_ID: &str = "world-map";
const VIEW_CENTER: [f64; 2] = [MAP_WIDTH / 2.0, MAP_HEIGHT / 2.0];

/// Where a press started and the transform at that moment.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragStart {
    client: (f64, f64),
    transform: ZoomTransform,
}

fn wheel_delta_y(delta: WheelDelta) -> (f64, DeltaMode) {
    match delta {
        WheelDelta::Pixels(d) => (d.y, DeltaMode::Pixel),
        WheelDelta::Lines(d) => (d.y, DeltaMode::Line),
        WheelDelta::Pages(d) => (d.y, DeltaMode::Page),
    }
}

/// viewBox units per client pixel, horizontally and vertically.
fn view_units_per_pixel(rect_width: f64, rect_height: f64) -> (f64, f64) {
    let sx = if rect_width > 0.0 { MAP_WIDTH / rect_width } else { 1.0 };
    let sy = if rect_height > 0.0 { MAP_HEIGHT / rect_height } else { 1.0 };
    (sx, sy)
}

/// Client coordinates to viewBox coordinates for an element at `rect`
/// (`[left, top, width, height]`).
fn client_to_view(client: (f64, f64), rect: [f64; 4]) -> [f64; 2] {
    let [left, top, width, height] = rect;
    let (sx, sy) = view_units_per_pixel(width, height);
    [(client.0 - left) * sx, (client.1 - top) * sy]
}

/// Button zoom: scale about the middle of the viewport.
fn zoom_about_center(mut transform: Signal<ZoomTransform>, factor: f64) {
    let next = transform.read().scale_by(factor, VIEW_CENTER);
    transform.set(next);
}

fn map_rect() -> Option<[f64; 4]> {
    element_rect(MAP_SVG_ID).map(|r| [r.left(), r.top(), r.width(), r.height()])
}

#[component]
pub fn WorldMap() -> Element {
    let mut state = use_context::<AppState>();
    let mut transform = use_signal(ZoomTransform::default);
    let mut drag = use_signal(|| None::<DragStart>);
    let mut did_drag = use_signal(|| false);
    let mut tooltip = use_signal(TooltipState::default);

    // Recolor only when the year (or the loaded data) changes.
    let fills = use_memo(move || {
        let year = (state.selected_year)();
        let shapes = state.shapes.read().clone();
        let scale = *state.color_scale.read();
        let neutral = || vec![NEUTRAL_FILL.to_string(); shapes.len()];
        match &*state.db.read() {
            Some(db) => region_fills(db, &year, scale.as_ref(), &shapes).unwrap_or_else(|e| {
                log::error!("Failed to build HAQ lookup for {}: {}", year, e);
                neutral()
            }),
            None => neutral(),
        }
    });

    let shapes = state.shapes.read().clone();
    let fills = fills.read().clone();
    let group_transform = transform.read().to_svg_transform();
    let controls_x = MAP_WIDTH - 60.0;

    rsx! {
        svg {
            id: MAP_SVG_ID,
            class: "world-map",
            view_box: "0 0 {MAP_WIDTH} {MAP_HEIGHT}",
            width: "100%",

            onwheel: move |evt: Event<WheelData>| {
                evt.prevent_default();
                let Some(rect) = map_rect() else { return };
                let (delta_y, mode) = wheel_delta_y(evt.data().delta());
                let client = evt.data().client_coordinates();
                let anchor = client_to_view((client.x, client.y), rect);
                let next = transform.read().scale_by(wheel_factor(delta_y, mode), anchor);
                transform.set(next);
            },

            onmousedown: move |evt: Event<MouseData>| {
                if evt.trigger_button() != Some(MouseButton::Primary) {
                    return;
                }
                let client = evt.client_coordinates();
                drag.set(Some(DragStart {
                    client: (client.x, client.y),
                    transform: *transform.read(),
                }));
                did_drag.set(false);
            },

            onmousemove: move |evt: Event<MouseData>| {
                let Some(start) = *drag.read() else { return };
                let client = evt.client_coordinates();
                let dx = client.x - start.client.0;
                let dy = client.y - start.client.1;
                if !did_drag() && (dx.abs() > DRAG_THRESHOLD || dy.abs() > DRAG_THRESHOLD) {
                    did_drag.set(true);
                }
                if did_drag() {
                    let (sx, sy) = map_rect()
                        .map(|[_, _, w, h]| view_units_per_pixel(w, h))
                        .unwrap_or((1.0, 1.0));
                    transform.set(start.transform.translate_by(dx * sx, dy * sy));
                }
            },

            onmouseup: move |_| drag.set(None),
            onmouseleave: move |_| drag.set(None),

            ondoubleclick: move |evt: Event<MouseData>| {
                evt.prevent_default();
                let Some(rect) = map_rect() else { return };
                let client = evt.client_coordinates();
                let anchor = client_to_view((client.x, client.y), rect);
                let next = transform.read().scale_by(BUTTON_ZOOM_IN, anchor);
                transform.set(next);
            },

            g {
                class: "countries",
                transform: "{group_transform}",
                for (shape, fill) in shapes.iter().zip(fills.iter()) {
                    path {
                        class: "country",
                        d: "{shape.path}",
                        fill: "{fill}",
                        onclick: {
                            let name = shape.name.clone();
                            move |_| {
                                // the click that ends a drag is not a selection
                                if !did_drag() {
                                    state.select_country(&name);
                                }
                            }
                        },
                        onmousemove: {
                            let name = shape.name.clone();
                            move |evt: Event<MouseData>| {
                                let client = evt.client_coordinates();
                                tooltip.set(TooltipState::at(client.x, client.y, vec![name.clone()]));
                            }
                        },
                        onmouseleave: move |_| {
                            let hidden = tooltip.read().hidden();
                            tooltip.set(hidden);
                        },
                    }
                }
            }

            g {
                class: "zoom-controls",
                transform: "translate({controls_x}, 10)",
                rect {
                    class: "zoom-in",
                    width: "40",
                    height: "40",
                    x: "0",
                    y: "0",
                    onclick: move |_| zoom_about_center(transform, BUTTON_ZOOM_IN),
                }
                text {
                    x: "20",
                    y: "20",
                    text_anchor: "middle",
                    "dominant-baseline": "middle",
                    font_size: "30px",
                    fill: "white",
                    onclick: move |_| zoom_about_center(transform, BUTTON_ZOOM_IN),
                    "+"
                }
                rect {
                    class: "zoom-out",
                    width: "40",
                    height: "40",
                    x: "0",
                    y: "50",
                    onclick: move |_| zoom_about_center(transform, BUTTON_ZOOM_OUT),
                }
                text {
                    x: "20",
                    y: "70",
                    text_anchor: "middle",
                    "dominant-baseline": "middle",
                    font_size: "30px",
                    "pointer-events": "none",
                    fill: "white",
                    "-"
                }
            }
        }
        Tooltip { state: tooltip() }
    }
}
