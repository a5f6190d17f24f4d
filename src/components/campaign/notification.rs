//! Floating Campaign Notification
//!
//! Minimized bottom-corner indicator shown while a campaign is sending and
//! the modal is closed. Dismissing it discards the campaign entirely.

use dioxus::prelude::*;
use leadpulse_core::display::{self, progress_label, DisplayAction};
use leadpulse_ui::{Button, ButtonVariant, CloseButton, ProgressBar};

use crate::context::{use_campaign_controller, use_campaign_state, use_simulation};

#[component]
pub fn CampaignNotification() -> Element {
    let controller = use_campaign_controller();
    let state = use_campaign_state();
    let mut simulation = use_simulation();

    let Some(view) = display::select(&state.read()).notification else {
        return rsx! {};
    };
    let campaign = view.campaign;

    let open_controller = controller.clone();
    let open_full_view = move |_| DisplayAction::OpenFullView.apply(&open_controller);

    let dismiss = move |_| {
        simulation.write().pause();
        DisplayAction::DismissNotification.apply(&controller);
    };

    let label = progress_label(campaign.progress);

    rsx! {
        aside { class: "campaign-notification", role: "status",
            div { class: "notification-header",
                span { class: "pulse-dot" }
                span { class: "notification-title", "{campaign.campaign_name}" }
                CloseButton { onclick: dismiss }
            }

            ProgressBar { percent: campaign.progress, show_label: false }

            div { class: "notification-footer",
                span { class: "notification-meta",
                    "{label} · {campaign.success_count} sent · {campaign.failed_count} failed"
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: open_full_view,
                    "Open"
                }
            }
        }
    }
}
