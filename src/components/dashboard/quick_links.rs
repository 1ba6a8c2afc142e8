use dioxus::prelude::*;

use crate::navigation::quick_links;
use crate::types::Session;

#[component]
pub fn QuickLinks(session: Session) -> Element {
    let sections = quick_links(&session);

    rsx! {
        div { class: "quick-links",
            h2 { "Accesos Rápidos" }

            for section in sections {
                div { class: "link-item", key: "{section.title}",
                    div { class: "link-title", "{section.title}" }
                    div { class: "link-actions",
                        for link in section.links {
                            Link { key: "{link.to}", to: link.to, "{link.label}" }
                        }
                    }
                }
            }
        }
    }
}
