//! Dashboard page - launch a campaign and follow its progress.

use dioxus::prelude::*;
use leadpulse_core::display::{format_elapsed, progress_label, status_headline};
use leadpulse_ui::{status_tone, ProgressBar};

use crate::components::{CampaignLauncher, NavHeader, NavLocation};
use crate::context::{use_campaign_controller, use_campaign_state};

#[component]
pub fn Dashboard() -> Element {
    let controller = use_campaign_controller();
    let state = use_campaign_state();

    let campaign = state.read().active.clone();

    rsx! {
        NavHeader { current: NavLocation::Dashboard }

        main { class: "dashboard",
            CampaignLauncher {}

            section { class: "card summary",
                h2 { class: "section-header", "Current campaign" }

                {match campaign {
                    Some(campaign) => {
                        let headline = status_headline(campaign.status);
                        let label = progress_label(campaign.progress);
                        let started = campaign.start_time.format("%Y-%m-%d %H:%M:%S").to_string();
                        let elapsed = campaign.duration.map(format_elapsed);
                        rsx! {
                            p { class: "summary-name", "{campaign.campaign_name}" }
                            p { class: "summary-status", "{headline} · {label}" }
                            ProgressBar { percent: campaign.progress, tone: status_tone(campaign.status) }
                            dl { class: "summary-details",
                                dt { "Campaign ID" }
                                dd { "{campaign.campaign_id}" }
                                dt { "Started" }
                                dd { "{started} UTC" }
                                dt { "Processed" }
                                dd { "{campaign.processed()} of {campaign.total_leads}" }
                                if let Some(elapsed) = elapsed {
                                    dt { "Duration" }
                                    dd { "{elapsed}" }
                                }
                            }
                            button {
                                class: "btn-ghost",
                                r#type: "button",
                                onclick: move |_| controller.open_modal(),
                                "Show details"
                            }
                        }
                    }
                    None => rsx! {
                        p { class: "empty-state", "No campaign is running." }
                    },
                }}
            }
        }
    }
}
