//! LeadPulse Core Library
//!
//! Tracks the progress of a single in-flight lead campaign and mirrors it to a
//! local cache so an interrupted view can be rebuilt.
//!
//! ## Overview
//!
//! - **Controller**: sole owner of the campaign snapshot and the modal /
//!   completion visibility flags. Every mutation goes through it.
//! - **Storage**: redb-backed key/value cache holding the `activeCampaign`
//!   record.
//! - **Display**: pure selection of which view (modal, floating
//!   notification, completion overlay) renders for the current state.
//! - **Simulator**: timer-driven stand-in for a real send pipeline.
//!
//! ## Quick Start
//!
//! ```ignore
//! use leadpulse_core::{CampaignController, CampaignDraft, Simulator, SimulatorConfig, Storage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let storage = Storage::new("~/.leadpulse/data/leadpulse.redb")?;
//!     let controller = CampaignController::restore(storage)?;
//!
//!     controller.start_campaign(CampaignDraft::new("Spring Promo", 20))?;
//!     let handle = Simulator::new(SimulatorConfig::default()).spawn(controller.clone());
//!     handle.join().await;
//!
//!     let campaign = controller.active_campaign().unwrap();
//!     println!("{}: {}%", campaign.status, campaign.progress);
//!     Ok(())
//! }
//! ```

pub mod controller;
pub mod display;
pub mod error;
pub mod events;
pub mod simulator;
pub mod storage;
pub mod types;

// Re-exports
pub use controller::CampaignController;
pub use display::{DisplayAction, DisplayPlan, DisplayVariant};
pub use error::{CampaignError, CampaignResult};
pub use events::{CampaignEvent, CampaignState};
pub use simulator::{
    FailureRoll, RandomFailures, SimulationEnd, SimulationHandle, Simulator, SimulatorConfig,
    TickOutcome,
};
pub use storage::{PersistedCampaign, Storage, ACTIVE_CAMPAIGN_KEY, DB_FILE_NAME};
pub use types::*;
