use dioxus::prelude::*;

use crate::stats::Stats;

#[component]
pub fn StatList(stats: Stats) -> Element {
    rsx! {
        div { class: "stat-list",
            for tile in stats.tiles() {
                div { class: "stat-item", key: "{tile.title}",
                    div { class: "stat-title", "{tile.title}" }
                    div { class: "stat-value", "{tile.value}" }
                }
            }
        }
    }
}
