use dioxus::prelude::*;

#[component]
pub fn WelcomeMessage(username: String) -> Element {
    rsx! {
        div { class: "welcome-message",
            "Bienvenido, "
            strong { "{username}" }
        }
    }
}
