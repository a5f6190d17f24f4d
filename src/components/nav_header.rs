//! Navigation Header Component
//!
//! App title, nav links and a compact indicator for the tracked campaign.

use dioxus::prelude::*;
use leadpulse_core::display::progress_label;
use leadpulse_ui::StatusBadge;

use crate::app::Route;
use crate::context::{use_campaign_controller, use_campaign_state};

/// Navigation location within the application
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Home,
    Dashboard,
}

impl NavLocation {
    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Home => "Home",
            NavLocation::Dashboard => "Dashboard",
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            NavLocation::Home => Route::Landing {},
            NavLocation::Dashboard => Route::Dashboard {},
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Current location in the app
    pub current: NavLocation,
}

#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let controller = use_campaign_controller();
    let state = use_campaign_state();

    let locations = [NavLocation::Home, NavLocation::Dashboard];
    let campaign = state.read().active.clone();

    rsx! {
        header { class: "nav-header",
            span { class: "app-title", "LeadPulse" }

            nav { class: "nav-links",
                for location in locations {
                    Link {
                        key: "{location.display_name()}",
                        class: if location == props.current { "nav-link active" } else { "nav-link" },
                        to: location.route(),
                        "{location.display_name()}"
                    }
                }
            }

            if let Some(campaign) = campaign {
                button {
                    class: "nav-campaign",
                    r#type: "button",
                    title: "Show campaign details",
                    onclick: move |_| controller.open_modal(),
                    StatusBadge { status: campaign.status }
                    span { class: "nav-campaign-progress", {progress_label(campaign.progress)} }
                }
            }
        }
    }
}
