//! Landing page - entry point to the dashboard.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{NavHeader, NavLocation};
use crate::context::use_campaign_state;

#[component]
pub fn Landing() -> Element {
    let navigator = use_navigator();
    let state = use_campaign_state();

    let cta = if state.read().has_active_campaign() {
        "Back to your campaign"
    } else {
        "Open dashboard"
    };

    rsx! {
        NavHeader { current: NavLocation::Home }

        main { class: "landing",
            header { class: "landing-header",
                h1 { class: "page-title", "LeadPulse" }
                p { class: "tagline",
                    "Generate leads, launch campaigns and watch every send land."
                }

                button {
                    class: "btn-primary btn-large",
                    onclick: move |_| {
                        navigator.push(Route::Dashboard {});
                    },
                    "{cta}"
                }
            }
        }
    }
}
