//! Loading indicator shown while the data files are fetched.

use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #ccc;",
            "Loading dataset and world map..."
        }
    }
}
