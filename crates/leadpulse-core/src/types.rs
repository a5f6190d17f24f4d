//! Core types for LeadPulse

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique identifier for one campaign run.
///
/// Opaque to the rest of the system. Freshly generated ids are ULIDs so they
/// sort by creation time, but any non-empty string supplied by a caller is
/// accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CampaignId(String);

impl CampaignId {
    /// Create a new time-ordered CampaignId
    pub fn new() -> Self {
        Self(Ulid::new().to_string())
    }

    /// Wrap an existing identifier
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CampaignId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CampaignId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Send status of a campaign.
///
/// `Sending` is the only state that accepts progress updates. `Completed`
/// and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Sending,
    Completed,
    Failed,
}

impl CampaignStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, CampaignStatus::Completed | CampaignStatus::Failed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Sending => "sending",
            CampaignStatus::Completed => "completed",
            CampaignStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CampaignStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sending" => Ok(CampaignStatus::Sending),
            "completed" => Ok(CampaignStatus::Completed),
            "failed" => Ok(CampaignStatus::Failed),
            other => Err(format!("unknown campaign status '{}'", other)),
        }
    }
}

/// The lead currently being processed by a sending campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentLead {
    pub name: String,
    pub phone: String,
}

impl CurrentLead {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }
}

/// Parameters for starting a campaign.
///
/// Counts, progress and the start time are owned by the controller and
/// always start from zero / now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignDraft {
    /// Explicit id, or `None` to generate one
    pub campaign_id: Option<CampaignId>,
    /// Display label (must be non-empty)
    pub campaign_name: String,
    /// Number of leads in the run (must be positive)
    pub total_leads: u32,
}

impl CampaignDraft {
    pub fn new(campaign_name: impl Into<String>, total_leads: u32) -> Self {
        Self {
            campaign_id: None,
            campaign_name: campaign_name.into(),
            total_leads,
        }
    }

    pub fn with_id(mut self, campaign_id: CampaignId) -> Self {
        self.campaign_id = Some(campaign_id);
        self
    }
}

/// Partial update merged into the active snapshot.
///
/// `status`, `total_leads` and `start_time` are deliberately absent: status
/// only changes through `finish_campaign`, the other two are fixed for the
/// lifetime of a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignPatch {
    pub campaign_name: Option<String>,
    pub progress: Option<u32>,
    pub success_count: Option<u32>,
    pub failed_count: Option<u32>,
    /// `Some(None)` clears the current lead
    pub current_lead: Option<Option<CurrentLead>>,
}

impl CampaignPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn progress(mut self, progress: u32) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn success_count(mut self, count: u32) -> Self {
        self.success_count = Some(count);
        self
    }

    pub fn failed_count(mut self, count: u32) -> Self {
        self.failed_count = Some(count);
        self
    }

    pub fn current_lead(mut self, lead: Option<CurrentLead>) -> Self {
        self.current_lead = Some(lead);
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// The single record describing an in-flight or just-finished campaign.
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignSnapshot {
    pub campaign_id: CampaignId,
    pub campaign_name: String,
    pub status: CampaignStatus,
    /// Whole percent, always within `0..=100`
    pub progress: u32,
    pub success_count: u32,
    pub failed_count: u32,
    /// Fixed at creation, always positive
    pub total_leads: u32,
    pub current_lead: Option<CurrentLead>,
    pub start_time: DateTime<Utc>,
    /// Stamped once when the campaign reaches a terminal state
    pub duration: Option<Duration>,
}

impl CampaignSnapshot {
    /// Build a fresh `sending` snapshot from a draft.
    pub(crate) fn from_draft(draft: CampaignDraft, start_time: DateTime<Utc>) -> Self {
        Self {
            campaign_id: draft.campaign_id.unwrap_or_default(),
            campaign_name: draft.campaign_name,
            status: CampaignStatus::Sending,
            progress: 0,
            success_count: 0,
            failed_count: 0,
            total_leads: draft.total_leads,
            current_lead: None,
            start_time,
            duration: None,
        }
    }

    /// Merge a patch and re-establish the snapshot invariants.
    pub(crate) fn apply(&mut self, patch: CampaignPatch) {
        if let Some(name) = patch.campaign_name.filter(|n| !n.trim().is_empty()) {
            self.campaign_name = name;
        }
        if let Some(progress) = patch.progress {
            self.progress = progress;
        }
        if let Some(success) = patch.success_count {
            self.success_count = success;
        }
        if let Some(failed) = patch.failed_count {
            self.failed_count = failed;
        }
        if let Some(lead) = patch.current_lead {
            self.current_lead = lead;
        }
        self.normalize();
    }

    /// Clamp progress and counts back into range.
    ///
    /// Successes take precedence: when the counts overflow `total_leads`
    /// the failed count is trimmed first.
    pub(crate) fn normalize(&mut self) {
        self.progress = self.progress.min(100);
        self.success_count = self.success_count.min(self.total_leads);
        self.failed_count = self
            .failed_count
            .min(self.total_leads - self.success_count);
        if self.progress == 100 || self.status.is_terminal() {
            self.current_lead = None;
        }
    }

    /// Leads handled so far (successful plus failed)
    pub fn processed(&self) -> u32 {
        self.success_count + self.failed_count
    }

    pub fn is_sending(&self) -> bool {
        self.status == CampaignStatus::Sending
    }

    /// Check the invariants every observable snapshot must satisfy.
    pub fn is_consistent(&self) -> bool {
        self.progress <= 100
            && self.total_leads > 0
            && self.processed() <= self.total_leads
            && (self.progress < 100 || self.current_lead.is_none())
            && (self.status == CampaignStatus::Sending || self.current_lead.is_none())
    }
}
