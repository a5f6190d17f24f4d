//! Campaign status badge
//!
//! | Status | Label | Dot |
//! |--------|-------|-----|
//! | Sending | "sending" | pulsing |
//! | Completed | "completed" | solid green |
//! | Failed | "failed" | solid red |

use dioxus::prelude::*;
use leadpulse_core::CampaignStatus;

use super::ProgressTone;

pub fn status_class(status: CampaignStatus) -> &'static str {
    match status {
        CampaignStatus::Sending => "status-badge sending",
        CampaignStatus::Completed => "status-badge completed",
        CampaignStatus::Failed => "status-badge failed",
    }
}

/// Progress bar tone matching a status
pub fn status_tone(status: CampaignStatus) -> ProgressTone {
    match status {
        CampaignStatus::Sending => ProgressTone::Active,
        CampaignStatus::Completed => ProgressTone::Success,
        CampaignStatus::Failed => ProgressTone::Danger,
    }
}

#[component]
pub fn StatusBadge(status: CampaignStatus) -> Element {
    rsx! {
        span { class: status_class(status),
            span { class: "status-dot" }
            "{status}"
        }
    }
}
