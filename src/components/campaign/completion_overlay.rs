//! Completion Overlay
//!
//! Full-screen summary raised when a campaign completes or fails.

use dioxus::prelude::*;
use leadpulse_core::display::{self, format_elapsed, success_rate, DisplayAction};
use leadpulse_ui::{Button, ButtonVariant};

use crate::context::{use_campaign_controller, use_campaign_state};

#[component]
pub fn CompletionOverlay() -> Element {
    let controller = use_campaign_controller();
    let state = use_campaign_state();

    let Some(view) = display::select(&state.read()).overlay else {
        return rsx! {};
    };

    let details_controller = controller.clone();
    let view_details = move |_| {
        details_controller.close_completion_notification();
        details_controller.open_modal();
    };
    let dismiss = move |_| DisplayAction::DismissOverlay.apply(&controller);

    let succeeded = view.succeeded();
    let headline = view.headline();
    let campaign = view.campaign;
    let elapsed = campaign.duration.map(format_elapsed).unwrap_or_default();
    let rate = success_rate(&campaign)
        .map(|r| format!("{}%", r))
        .unwrap_or_else(|| "-".to_string());

    rsx! {
        div { class: "completion-overlay",
            div { class: if succeeded { "completion-card success" } else { "completion-card failed" },
                div { class: "completion-icon",
                    if succeeded { "✓" } else { "✕" }
                }
                h2 { class: "completion-title", "{headline}" }
                p { class: "completion-subtitle", "{campaign.campaign_name}" }

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
                        span { class: "stat-value", "{rate}" }
                        span { class: "stat-label", "success rate" }
                    }
                    div { class: "stat",
                        span { class: "stat-value", "{elapsed}" }
                        span { class: "stat-label", "duration" }
                    }
                }

                div { class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: view_details,
                        "View details"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: dismiss,
                        "Done"
                    }
                }
            }
        }
    }
}
