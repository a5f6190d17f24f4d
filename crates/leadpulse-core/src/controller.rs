//! Campaign controller: the single owner of the tracked campaign.
//!
//! Every write to the snapshot, the two visibility flags and the persisted
//! cache goes through [`CampaignController`]. Displays only read
//! [`CampaignState`] and call back into the controller.
//!
//! Only one campaign is tracked at a time. The controller is cheap to clone;
//! clones share the same state, cache and event channel.

use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::error::{CampaignError, CampaignResult};
use crate::events::{CampaignEvent, CampaignState};
use crate::storage::{PersistedCampaign, Storage};
use crate::types::{CampaignDraft, CampaignPatch, CampaignSnapshot, CampaignStatus};

/// Default capacity for the event broadcast channel
const EVENT_CHANNEL_CAPACITY: usize = 256;

#[derive(Clone)]
pub struct CampaignController {
    state: Arc<RwLock<CampaignState>>,
    /// Persisted cache; `None` keeps the controller purely in memory
    storage: Option<Storage>,
    event_tx: broadcast::Sender<CampaignEvent>,
}

impl CampaignController {
    /// Controller without a persisted cache
    pub fn in_memory() -> Self {
        Self::build(None, CampaignState::default())
    }

    /// Controller that mirrors every mutation into `storage`.
    ///
    /// Starts empty; use [`CampaignController::restore`] to pick up a cached
    /// campaign.
    pub fn with_storage(storage: Storage) -> Self {
        Self::build(Some(storage), CampaignState::default())
    }

    /// Controller rebuilt from whatever campaign `storage` has cached.
    ///
    /// Only a `sending` record is reinstated. Terminal or unreadable
    /// records are dropped from the cache.
    pub fn restore(storage: Storage) -> CampaignResult<Self> {
        let record = match storage.load_active_campaign() {
            Ok(record) => record,
            Err(CampaignError::Serialization(e)) => {
                warn!(error = %e, "Discarding unreadable cached campaign");
                storage.delete_active_campaign()?;
                None
            }
            Err(e) => return Err(e),
        };

        let active = match record.map(PersistedCampaign::into_snapshot) {
            Some(Ok(snapshot)) if snapshot.is_sending() => {
                info!(
                    campaign_id = %snapshot.campaign_id,
                    progress = snapshot.progress,
                    "Restored active campaign from cache"
                );
                Some(snapshot)
            }
            Some(Ok(snapshot)) => {
                debug!(campaign_id = %snapshot.campaign_id, status = %snapshot.status, "Dropping finished cached campaign");
                storage.delete_active_campaign()?;
                None
            }
            Some(Err(e)) => {
                warn!(error = %e, "Discarding invalid cached campaign");
                storage.delete_active_campaign()?;
                None
            }
            None => None,
        };

        Ok(Self::build(
            Some(storage),
            CampaignState {
                active,
                ..CampaignState::default()
            },
        ))
    }

    fn build(storage: Option<Storage>, state: CampaignState) -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            state: Arc::new(RwLock::new(state)),
            storage,
            event_tx,
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Queries
    // ═══════════════════════════════════════════════════════════════════════

    /// Current state, cloned
    pub fn state(&self) -> CampaignState {
        self.state.read().clone()
    }

    /// The tracked campaign, if any
    pub fn active_campaign(&self) -> Option<CampaignSnapshot> {
        self.state.read().active.clone()
    }

    pub fn storage(&self) -> Option<&Storage> {
        self.storage.as_ref()
    }

    /// Subscribe to controller events
    pub fn subscribe(&self) -> broadcast::Receiver<CampaignEvent> {
        self.event_tx.subscribe()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Lifecycle
    // ═══════════════════════════════════════════════════════════════════════

    /// Install a new campaign with zero progress.
    ///
    /// Fails with [`CampaignError::AlreadyActive`] while another campaign is
    /// still sending. A finished campaign is replaced.
    pub fn start_campaign(&self, draft: CampaignDraft) -> CampaignResult<CampaignSnapshot> {
        if draft.campaign_name.trim().is_empty() {
            return Err(CampaignError::InvalidSnapshot(
                "campaign name must not be empty".to_string(),
            ));
        }
        if draft.total_leads == 0 {
            return Err(CampaignError::InvalidSnapshot(
                "campaign must have at least one lead".to_string(),
            ));
        }

        let snapshot = {
            let mut state = self.state.write();
            if let Some(current) = state.active.as_ref().filter(|c| c.is_sending()) {
                return Err(CampaignError::AlreadyActive(current.campaign_id.clone()));
            }

            let snapshot = CampaignSnapshot::from_draft(draft, Utc::now());
            state.active = Some(snapshot.clone());
            state.show_completion_notification = false;
            self.persist(&snapshot);
            snapshot
        };

        info!(
            campaign_id = %snapshot.campaign_id,
            name = %snapshot.campaign_name,
            total_leads = snapshot.total_leads,
            "Campaign started"
        );
        self.emit(CampaignEvent::Started {
            campaign_id: snapshot.campaign_id.clone(),
        });
        Ok(snapshot)
    }

    /// Merge `patch` into the sending campaign.
    ///
    /// Silent no-op when nothing is tracked or the campaign already finished.
    /// Returns the updated snapshot when the patch was applied.
    pub fn update_campaign(&self, patch: CampaignPatch) -> Option<CampaignSnapshot> {
        let snapshot = {
            let mut state = self.state.write();
            let Some(current) = state.active.as_mut() else {
                debug!("update_campaign ignored: no active campaign");
                return None;
            };
            if !current.is_sending() {
                debug!(campaign_id = %current.campaign_id, status = %current.status, "update_campaign ignored: campaign finished");
                return None;
            }

            current.apply(patch);
            let snapshot = current.clone();
            self.persist(&snapshot);
            snapshot
        };

        debug!(
            campaign_id = %snapshot.campaign_id,
            progress = snapshot.progress,
            success = snapshot.success_count,
            failed = snapshot.failed_count,
            "Campaign updated"
        );
        self.emit(CampaignEvent::Updated {
            campaign_id: snapshot.campaign_id.clone(),
            progress: snapshot.progress,
        });
        Some(snapshot)
    }

    /// Move the sending campaign to a terminal status.
    ///
    /// Stamps the elapsed duration and raises the completion notification.
    /// The snapshot stays queryable until [`clear_active_campaign`]; the
    /// cached copy is removed now.
    ///
    /// [`clear_active_campaign`]: CampaignController::clear_active_campaign
    pub fn finish_campaign(
        &self,
        final_status: CampaignStatus,
    ) -> CampaignResult<Option<CampaignSnapshot>> {
        if !final_status.is_terminal() {
            return Err(CampaignError::InvalidTransition(final_status));
        }

        let snapshot = {
            let mut state = self.state.write();
            let Some(current) = state.active.as_mut() else {
                debug!("finish_campaign ignored: no active campaign");
                return Ok(None);
            };
            if !current.is_sending() {
                debug!(campaign_id = %current.campaign_id, "finish_campaign ignored: already finished");
                return Ok(None);
            }

            let elapsed = Utc::now() - current.start_time;
            current.status = final_status;
            current.duration = Some(elapsed.to_std().unwrap_or_default());
            current.normalize();
            let snapshot = current.clone();
            state.show_completion_notification = true;
            self.forget();
            snapshot
        };

        info!(
            campaign_id = %snapshot.campaign_id,
            status = %snapshot.status,
            success = snapshot.success_count,
            failed = snapshot.failed_count,
            "Campaign finished"
        );
        self.emit(CampaignEvent::Finished {
            campaign_id: snapshot.campaign_id.clone(),
            status: snapshot.status,
        });
        Ok(Some(snapshot))
    }

    /// Discard the campaign and its cached copy and hide every display.
    pub fn clear_active_campaign(&self) {
        let campaign_id = {
            let mut state = self.state.write();
            let previous = state.active.take();
            state.is_modal_open = false;
            state.show_completion_notification = false;
            self.forget();
            previous.map(|c| c.campaign_id)
        };

        info!(campaign_id = ?campaign_id.as_ref().map(|id| id.as_str()), "Campaign cleared");
        self.emit(CampaignEvent::Cleared { campaign_id });
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Visibility
    // ═══════════════════════════════════════════════════════════════════════

    pub fn open_modal(&self) {
        self.set_modal(true);
    }

    pub fn close_modal(&self) {
        self.set_modal(false);
    }

    fn set_modal(&self, open: bool) {
        self.state.write().is_modal_open = open;
        self.emit(CampaignEvent::ModalToggled { open });
    }

    /// Hide the completion overlay but keep the snapshot.
    pub fn close_completion_notification(&self) {
        self.state.write().show_completion_notification = false;
        self.emit(CampaignEvent::CompletionNotificationClosed);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Cache
    // ═══════════════════════════════════════════════════════════════════════

    // Both helpers run under the state write lock so cache writes follow the
    // same order as state changes. Failures never fail the mutation.

    fn persist(&self, snapshot: &CampaignSnapshot) {
        let Some(storage) = &self.storage else {
            return;
        };
        let record = PersistedCampaign::from_snapshot(snapshot, Utc::now());
        if let Err(e) = storage.save_active_campaign(&record) {
            warn!(error = %e, campaign_id = %snapshot.campaign_id, "Failed to cache campaign");
        }
    }

    fn forget(&self) {
        let Some(storage) = &self.storage else {
            return;
        };
        if let Err(e) = storage.delete_active_campaign() {
            warn!(error = %e, "Failed to remove cached campaign");
        }
    }

    fn emit(&self, event: CampaignEvent) {
        // No subscribers is fine
        let _ = self.event_tx.send(event);
    }
}

impl Default for CampaignController {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl std::fmt::Debug for CampaignController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CampaignController")
            .field("state", &*self.state.read())
            .field("persisted", &self.storage.is_some())
            .finish()
    }
}
