use dioxus::prelude::*;

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div { class: "cargando", "Cargando panel de control..." }
    }
}
