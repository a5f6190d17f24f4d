//! UI Components for LeadPulse.

mod campaign;
mod nav_header;

pub use campaign::{
    CampaignHost, CampaignLauncher, CampaignModal, CampaignNotification, CompletionOverlay,
};
pub use nav_header::{NavHeader, NavLocation};
