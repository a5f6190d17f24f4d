//! Campaign Modal Component
//!
//! Detailed view of the tracked campaign. Mounted whenever a campaign exists
//! and shown only while the modal flag is set, whatever the status.

use dioxus::prelude::*;
use leadpulse_core::display::{self, format_elapsed, status_headline, DisplayAction};
use leadpulse_ui::{status_tone, CloseButton, ProgressBar, StatusBadge};

use crate::context::{use_campaign_controller, use_campaign_state};

#[component]
pub fn CampaignModal() -> Element {
    let controller = use_campaign_controller();
    let state = use_campaign_state();

    let Some(view) = display::select(&state.read()).modal else {
        return rsx! {};
    };
    let campaign = view.campaign;

    let close = move |_| DisplayAction::CloseModal.apply(&controller);

    let overlay_class = if view.open {
        "modal-overlay"
    } else {
        "modal-overlay hidden"
    };
    let hidden = !view.open;
    let remaining = campaign.total_leads.saturating_sub(campaign.processed());
    let elapsed = campaign.duration.map(format_elapsed);

    rsx! {
        div {
            class: "{overlay_class}",
            "aria-hidden": "{hidden}",

            div {
                class: "campaign-modal",
                onclick: move |e| e.stop_propagation(),

                header { class: "modal-header",
                    div {
                        h2 { class: "modal-title", "{campaign.campaign_name}" }
                        p { class: "modal-description", {status_headline(campaign.status)} }
                    }
                    StatusBadge { status: campaign.status }
                    CloseButton { onclick: close }
                }

                ProgressBar {
                    percent: campaign.progress,
                    tone: status_tone(campaign.status),
                }

                div { class: "stat-grid",
                    div { class: "stat",
                        span { class: "stat-value success", "{campaign.success_count}" }
                        span { class: "stat-label", "sent" }
                    }
                    div { class: "stat",
                        span { class: "stat-value danger", "{campaign.failed_count}" }
                        span { class: "stat-label", "failed" }
                    }
                    div { class: "stat",
                        span { class: "stat-value", "{remaining}" }
                        span { class: "stat-label", "remaining" }
                    }
                    div { class: "stat",
                        span { class: "stat-value", "{campaign.total_leads}" }
                        span { class: "stat-label", "total leads" }
                    }
                }

                if let Some(lead) = campaign.current_lead.as_ref() {
                    div { class: "current-lead",
                        span { class: "current-lead-label", "Now sending to" }
                        span { class: "current-lead-name", "{lead.name}" }
                        span { class: "current-lead-phone", "{lead.phone}" }
                    }
                }

                if let Some(elapsed) = elapsed {
                    p { class: "modal-footnote", "Finished in {elapsed}" }
                }
            }
        }
    }
}
