//! Campaign context provider for LeadPulse.
//!
//! Provides the campaign controller, a reactive mirror of its state and the
//! running simulation to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let controller = use_campaign_controller();
//! let state = use_campaign_state();
//!
//! if state.read().has_active_campaign() {
//!     controller.open_modal();
//! }
//! ```

use std::path::PathBuf;

use dioxus::prelude::*;
use leadpulse_core::{
    CampaignController, CampaignState, SimulationHandle, Simulator, SimulatorConfig, Storage,
};

/// Get the data directory for the application.
/// Uses the global data dir set from command line args.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Open the persisted controller, restoring any in-flight campaign.
///
/// Falls back to an in-memory controller when the cache cannot be opened so
/// the dashboard still works without persistence.
pub fn open_controller() -> CampaignController {
    let data_dir = get_data_dir();
    match Storage::open_dir(&data_dir).and_then(CampaignController::restore) {
        Ok(controller) => controller,
        Err(e) => {
            tracing::error!("Failed to open campaign cache in {:?}: {}", data_dir, e);
            CampaignController::in_memory()
        }
    }
}

/// Hook to access the campaign controller from context.
///
/// All mutations go through the returned controller. Clones share state.
pub fn use_campaign_controller() -> CampaignController {
    use_context::<CampaignController>()
}

/// Hook to read the controller state.
///
/// The signal is refreshed after every controller event, so components
/// reading it re-render on each mutation.
pub fn use_campaign_state() -> Signal<CampaignState> {
    use_context::<Signal<CampaignState>>()
}

/// Hook to access the simulation driving the active campaign.
pub fn use_simulation() -> Signal<SimulationSlot> {
    use_context::<Signal<SimulationSlot>>()
}

/// Holds at most one running simulation.
#[derive(Default)]
pub struct SimulationSlot {
    handle: Option<SimulationHandle>,
}

impl SimulationSlot {
    /// Start driving the controller, replacing any previous run.
    pub fn start(&mut self, controller: CampaignController, config: SimulatorConfig) {
        self.pause();
        tracing::info!(?config, "Starting campaign simulation");
        self.handle = Some(Simulator::new(config).spawn(controller));
    }

    /// Stop ticking. The campaign keeps its current progress.
    pub fn pause(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.cancel();
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}
