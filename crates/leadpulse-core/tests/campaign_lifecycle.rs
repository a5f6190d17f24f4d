//! End-to-end campaign lifecycle tests
//!
//! Drive a persisted controller through start, simulated progress, finish and
//! dismissal, checking the cache and the selected displays along the way.

use std::time::Duration;

use leadpulse_core::display::{self, DisplayAction, DisplayVariant};
use leadpulse_core::{
    CampaignController, CampaignDraft, CampaignEvent, CampaignPatch, CampaignStatus,
    SimulationEnd, Simulator, SimulatorConfig, Storage, TickOutcome, ACTIVE_CAMPAIGN_KEY,
};
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

fn persisted_controller() -> (CampaignController, Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let storage = Storage::new(temp_dir.path().join("leadpulse.redb")).unwrap();
    let controller = CampaignController::restore(storage.clone()).unwrap();
    (controller, storage, temp_dir)
}

fn no_failures(_: f64) -> bool {
    false
}

// ============================================================================
// Lifecycle
// ============================================================================

#[test]
fn test_cache_tracks_every_mutation() {
    let (controller, storage, _temp) = persisted_controller();
    let snap = controller
        .start_campaign(CampaignDraft::new("Cache check", 20))
        .unwrap();

    let mut sim = Simulator::with_failures(SimulatorConfig::default(), no_failures);
    for expected in [5, 10, 15] {
        assert_eq!(
            sim.tick(&controller),
            TickOutcome::Advanced { progress: expected }
        );
        let record = storage.load_active_campaign().unwrap().unwrap();
        assert_eq!(record.campaign_id, snap.campaign_id.to_string());
        assert_eq!(record.progress, expected);
        assert_eq!(record.status, CampaignStatus::Sending);
    }
}

#[test]
fn test_finish_removes_cache_but_keeps_summary() {
    let (controller, storage, _temp) = persisted_controller();
    controller
        .start_campaign(CampaignDraft::new("Summary", 20))
        .unwrap();

    let mut sim = Simulator::with_failures(SimulatorConfig::default(), no_failures);
    for _ in 0..20 {
        sim.tick(&controller);
    }

    assert!(storage.load_active_campaign().unwrap().is_none());
    let plan = display::select(&controller.state());
    let overlay = plan.overlay.expect("overlay after completion");
    assert!(overlay.succeeded());
    assert_eq!(overlay.campaign.success_count, 20);
    assert!(overlay.campaign.duration.is_some());
}

#[test]
fn test_failed_campaign_hides_notification() {
    let (controller, _storage, _temp) = persisted_controller();
    controller
        .start_campaign(CampaignDraft::new("Doomed", 10))
        .unwrap();
    controller.update_campaign(CampaignPatch::new().progress(30).failed_count(3));
    controller.finish_campaign(CampaignStatus::Failed).unwrap();

    let state = controller.state();
    assert!(!state.is_modal_open);
    assert!(state.active.is_some());
    assert!(display::select(&state).notification.is_none());
}

#[test]
fn test_clear_empties_cache_immediately() {
    let (controller, storage, _temp) = persisted_controller();
    controller
        .start_campaign(CampaignDraft::new("Clear me", 10))
        .unwrap();
    assert!(storage.get_item(ACTIVE_CAMPAIGN_KEY).unwrap().is_some());

    controller.clear_active_campaign();
    assert!(storage.get_item(ACTIVE_CAMPAIGN_KEY).unwrap().is_none());
}

#[test]
fn test_dismissing_notification_discards_campaign() {
    let (controller, storage, _temp) = persisted_controller();
    controller
        .start_campaign(CampaignDraft::new("Dismiss", 10))
        .unwrap();
    controller.update_campaign(CampaignPatch::new().progress(45));

    let plan = display::select(&controller.state());
    assert_eq!(plan.visible_variants(), vec![DisplayVariant::Notification]);

    DisplayAction::DismissNotification.apply(&controller);

    assert!(controller.active_campaign().is_none());
    assert!(storage.load_active_campaign().unwrap().is_none());
    assert!(display::select(&controller.state()).is_empty());
}

#[test]
fn test_dismissing_overlay_returns_to_idle() {
    let (controller, _storage, _temp) = persisted_controller();
    controller
        .start_campaign(CampaignDraft::new("Done", 1))
        .unwrap();
    controller.finish_campaign(CampaignStatus::Completed).unwrap();

    DisplayAction::DismissOverlay.apply(&controller);
    assert!(controller.active_campaign().is_none());

    // A new campaign can start right away
    controller
        .start_campaign(CampaignDraft::new("Next", 3))
        .unwrap();
}

#[test]
fn test_restart_resumes_in_progress_campaign() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("leadpulse.redb");

    let campaign_id = {
        let controller = CampaignController::restore(Storage::new(&db_path).unwrap()).unwrap();
        let snap = controller
            .start_campaign(CampaignDraft::new("Resume", 10))
            .unwrap();
        let mut sim = Simulator::with_failures(SimulatorConfig::default(), no_failures);
        for _ in 0..4 {
            sim.tick(&controller);
        }
        snap.campaign_id
    };

    let controller = CampaignController::restore(Storage::new(&db_path).unwrap()).unwrap();
    let snap = controller.active_campaign().unwrap();
    assert_eq!(snap.campaign_id, campaign_id);
    assert_eq!(snap.progress, 40);
    assert_eq!(snap.current_lead.unwrap().name, "Lead 4");

    // A fresh simulator picks up where the old one stopped
    let mut sim = Simulator::with_failures(SimulatorConfig::default(), no_failures);
    assert_eq!(sim.tick(&controller), TickOutcome::Advanced { progress: 50 });
    assert_eq!(
        controller.active_campaign().unwrap().current_lead.unwrap().name,
        "Lead 5"
    );
}

#[test]
fn test_restored_small_campaign_finishes_on_schedule() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("leadpulse.redb");

    {
        let controller = CampaignController::restore(Storage::new(&db_path).unwrap()).unwrap();
        controller
            .start_campaign(CampaignDraft::new("Trio", 3))
            .unwrap();
        let mut sim = Simulator::with_failures(SimulatorConfig::default(), no_failures);
        assert_eq!(sim.tick(&controller), TickOutcome::Advanced { progress: 33 });
    }

    let controller = CampaignController::restore(Storage::new(&db_path).unwrap()).unwrap();
    let mut sim = Simulator::with_failures(SimulatorConfig::default(), no_failures);
    assert_eq!(sim.tick(&controller), TickOutcome::Advanced { progress: 67 });
    assert_eq!(sim.tick(&controller), TickOutcome::Finished);

    let snap = controller.active_campaign().unwrap();
    assert_eq!(snap.status, CampaignStatus::Completed);
    assert_eq!(snap.success_count, 3);
    assert!(snap.current_lead.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_spawned_simulation_publishes_one_finish() {
    let (controller, _storage, _temp) = persisted_controller();
    let mut events = controller.subscribe();
    controller
        .start_campaign(CampaignDraft::new("Async", 20))
        .unwrap();

    let handle = Simulator::with_failures(
        SimulatorConfig::default().with_tick_interval(Duration::from_millis(250)),
        no_failures,
    )
    .spawn(controller.clone());
    assert_eq!(handle.join().await, SimulationEnd::Finished);

    let mut updates = 0;
    let mut finished = 0;
    while let Ok(event) = events.try_recv() {
        match event {
            CampaignEvent::Updated { .. } => updates += 1,
            CampaignEvent::Finished { .. } => finished += 1,
            _ => {}
        }
    }
    assert_eq!(updates, 20);
    assert_eq!(finished, 1);
}
