//! Campaign progress displays.
//!
//! The three views read the same controller state and decide independently
//! (through `leadpulse_core::display::select`) whether to render. None of
//! them touch the persisted cache; every action goes back to the controller.

mod completion_overlay;
mod launcher;
mod modal;
mod notification;

pub use completion_overlay::CompletionOverlay;
pub use launcher::CampaignLauncher;
pub use modal::CampaignModal;
pub use notification::CampaignNotification;

use dioxus::prelude::*;

/// Mounts every campaign display. Place once, outside the router.
#[component]
pub fn CampaignHost() -> Element {
    rsx! {
        CampaignModal {}
        CampaignNotification {}
        CompletionOverlay {}
    }
}
