//! Display selection for the campaign progress views.
//!
//! Three views render the same snapshot:
//!
//! | Variant | Renders when |
//! |---------|--------------|
//! | Modal | a campaign exists (visually open only when `is_modal_open`) |
//! | Notification | modal closed and status is `sending` |
//! | Completion overlay | completion notification raised and status is terminal |
//!
//! The notification and the overlay can never render together since their
//! status conditions are disjoint. The overlay may sit on top of an open
//! modal; both show the same read-only summary.
//!
//! Everything here is a pure function of [`CampaignState`]. User actions are
//! expressed as [`DisplayAction`] and routed back to the controller.

use std::time::Duration;

use crate::controller::CampaignController;
use crate::events::CampaignState;
use crate::types::{CampaignSnapshot, CampaignStatus};

/// The three mutually exclusive renderings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayVariant {
    Modal,
    Notification,
    CompletionOverlay,
}

/// Detailed view, usable in any status
#[derive(Debug, Clone, PartialEq)]
pub struct ModalView {
    /// Whether the modal is visually open
    pub open: bool,
    pub campaign: CampaignSnapshot,
}

/// Minimized bottom-corner indicator for a sending campaign
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationView {
    pub campaign: CampaignSnapshot,
}

/// Full-screen summary of a finished campaign
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionOverlayView {
    pub campaign: CampaignSnapshot,
}

impl CompletionOverlayView {
    pub fn succeeded(&self) -> bool {
        self.campaign.status == CampaignStatus::Completed
    }

    pub fn headline(&self) -> &'static str {
        status_headline(self.campaign.status)
    }
}

/// Which views render for a given state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayPlan {
    pub modal: Option<ModalView>,
    pub notification: Option<NotificationView>,
    pub overlay: Option<CompletionOverlayView>,
}

impl DisplayPlan {
    /// Variants producing visible output, in render order.
    ///
    /// A closed modal is mounted but hidden, so it is not listed.
    pub fn visible_variants(&self) -> Vec<DisplayVariant> {
        let mut variants = Vec::new();
        if self.modal.as_ref().is_some_and(|m| m.open) {
            variants.push(DisplayVariant::Modal);
        }
        if self.notification.is_some() {
            variants.push(DisplayVariant::Notification);
        }
        if self.overlay.is_some() {
            variants.push(DisplayVariant::CompletionOverlay);
        }
        variants
    }

    pub fn is_empty(&self) -> bool {
        self.modal.is_none() && self.notification.is_none() && self.overlay.is_none()
    }
}

/// Decide which views render.
pub fn select(state: &CampaignState) -> DisplayPlan {
    let Some(campaign) = state.active.as_ref() else {
        return DisplayPlan::default();
    };

    let notification = (!state.is_modal_open && campaign.status == CampaignStatus::Sending)
        .then(|| NotificationView {
            campaign: campaign.clone(),
        });

    let overlay = (state.show_completion_notification && campaign.status.is_terminal()).then(
        || CompletionOverlayView {
            campaign: campaign.clone(),
        },
    );

    DisplayPlan {
        modal: Some(ModalView {
            open: state.is_modal_open,
            campaign: campaign.clone(),
        }),
        notification,
        overlay,
    }
}

/// User actions exposed by the views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayAction {
    /// Notification: open the detailed modal
    OpenFullView,
    /// Modal: close
    CloseModal,
    /// Notification: discard the campaign entirely, not just the indicator
    DismissNotification,
    /// Overlay: hide the summary and discard the campaign
    DismissOverlay,
}

impl DisplayAction {
    pub fn apply(self, controller: &CampaignController) {
        match self {
            DisplayAction::OpenFullView => controller.open_modal(),
            DisplayAction::CloseModal => controller.close_modal(),
            DisplayAction::DismissNotification | DisplayAction::DismissOverlay => {
                controller.clear_active_campaign()
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Formatting helpers
// ═══════════════════════════════════════════════════════════════════════════

pub fn progress_label(progress: u32) -> String {
    format!("{}%", progress.min(100))
}

/// `45s`, `1m 05s`, `2h 03m`
pub fn format_elapsed(duration: Duration) -> String {
    let secs = duration.as_secs();
    match secs {
        0..=59 => format!("{}s", secs),
        60..=3599 => format!("{}m {:02}s", secs / 60, secs % 60),
        _ => format!("{}h {:02}m", secs / 3600, (secs % 3600) / 60),
    }
}

/// Share of processed leads that succeeded, as a whole percent.
///
/// `None` before anything was processed.
pub fn success_rate(campaign: &CampaignSnapshot) -> Option<u32> {
    let processed = campaign.processed();
    if processed == 0 {
        return None;
    }
    Some(((campaign.success_count as f64 / processed as f64) * 100.0).round() as u32)
}

pub fn status_headline(status: CampaignStatus) -> &'static str {
    match status {
        CampaignStatus::Sending => "Sending campaign",
        CampaignStatus::Completed => "Campaign completed",
        CampaignStatus::Failed => "Campaign failed",
    }
}
