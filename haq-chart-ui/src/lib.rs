//! Dioxus components and state for the HAQ dashboard.
//!
//! This crate provides:
//! - `js_bridge`: concurrent fetch of the data files through `web_sys`/`js_sys`
//! - `state`: reactive `AppState` with Dioxus Signals
//! - `controller`: load preparation and the selection actions that drive redraws
//! - `components`: the map, gauges, charts and supporting RSX components

pub mod components;
pub mod controller;
pub mod js_bridge;
pub mod state;
