//! Controller state view and change notifications
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  CampaignState: what every display reads                        │
//! │  ├── active: Option<CampaignSnapshot>                           │
//! │  ├── is_modal_open                                              │
//! │  └── show_completion_notification                               │
//! │                                                                 │
//! │  CampaignEvent: published after each controller mutation        │
//! │  ├── Started / Updated / Finished / Cleared                     │
//! │  └── ModalToggled / CompletionNotificationClosed                │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use crate::types::{CampaignId, CampaignSnapshot, CampaignStatus};

/// Everything the controller owns, as one cloneable value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CampaignState {
    /// The tracked campaign, if any
    pub active: Option<CampaignSnapshot>,
    /// Whether the detailed modal is open
    pub is_modal_open: bool,
    /// Whether the full-screen completion overlay should show
    pub show_completion_notification: bool,
}

impl CampaignState {
    pub fn status(&self) -> Option<CampaignStatus> {
        self.active.as_ref().map(|c| c.status)
    }

    pub fn has_active_campaign(&self) -> bool {
        self.active.is_some()
    }
}

/// Events emitted by the controller
#[derive(Debug, Clone, PartialEq)]
pub enum CampaignEvent {
    /// A new campaign was installed
    Started { campaign_id: CampaignId },
    /// Progress fields changed while sending
    Updated {
        campaign_id: CampaignId,
        progress: u32,
    },
    /// Campaign reached a terminal status
    Finished {
        campaign_id: CampaignId,
        status: CampaignStatus,
    },
    /// Snapshot discarded
    Cleared { campaign_id: Option<CampaignId> },
    /// Modal opened or closed
    ModalToggled { open: bool },
    /// Completion overlay hidden without clearing
    CompletionNotificationClosed,
}

impl CampaignEvent {
    /// Get the campaign ID associated with this event, if any
    pub fn campaign_id(&self) -> Option<&CampaignId> {
        match self {
            CampaignEvent::Started { campaign_id } => Some(campaign_id),
            CampaignEvent::Updated { campaign_id, .. } => Some(campaign_id),
            CampaignEvent::Finished { campaign_id, .. } => Some(campaign_id),
            CampaignEvent::Cleared { campaign_id } => campaign_id.as_ref(),
            CampaignEvent::ModalToggled { .. } => None,
            CampaignEvent::CompletionNotificationClosed => None,
        }
    }
}
