//! Synthetic campaign driver.
//!
//! Stands in for a real send pipeline by advancing the active campaign on a
//! fixed timer. It only talks to the controller's public operations, so a
//! real event source can replace it without touching anything else.
//!
//! ## Per tick
//!
//! - nothing tracked, or campaign finished: inert
//! - progress already at 100: finish as `completed` and stop
//! - otherwise: progress grows by `100 / total_leads`, one more success,
//!   and with probability `failure_probability` one more failure. The
//!   current lead becomes the next placeholder. The tick that reaches 100
//!   clears the lead and finishes the campaign.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::controller::CampaignController;
use crate::types::{CampaignId, CampaignPatch, CampaignStatus, CurrentLead};

/// Default time between ticks
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Default per-tick probability of an extra failure
pub const DEFAULT_FAILURE_PROBABILITY: f64 = 0.1;

/// Simulator settings
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatorConfig {
    pub tick_interval: Duration,
    /// Clamped to `0.0..=1.0` when rolled
    pub failure_probability: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
            failure_probability: DEFAULT_FAILURE_PROBABILITY,
        }
    }
}

impl SimulatorConfig {
    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    pub fn with_failure_probability(mut self, probability: f64) -> Self {
        self.failure_probability = probability;
        self
    }
}

/// Source of the per-tick failure decision
pub trait FailureRoll {
    /// Return `true` to record a failure this tick
    fn roll(&mut self, probability: f64) -> bool;
}

impl<F> FailureRoll for F
where
    F: FnMut(f64) -> bool,
{
    fn roll(&mut self, probability: f64) -> bool {
        self(probability)
    }
}

/// Failure rolls backed by `rand`
pub struct RandomFailures {
    rng: StdRng,
}

impl RandomFailures {
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible rolls for demos
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl FailureRoll for RandomFailures {
    fn roll(&mut self, probability: f64) -> bool {
        let p = if probability.is_finite() {
            probability.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.rng.random_bool(p)
    }
}

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing to drive
    Idle,
    /// Campaign moved forward
    Advanced { progress: u32 },
    /// Campaign reached 100% and was finished
    Finished,
}

/// Why a simulation run stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationEnd {
    Finished,
    Cancelled,
}

/// Per-campaign progress the controller does not store
#[derive(Debug, Clone)]
struct Tracked {
    campaign_id: CampaignId,
    /// Unrounded progress, so small increments are not lost to rounding
    exact_progress: f64,
    /// Sequence number of the last synthesized lead
    lead_seq: u32,
}

pub struct Simulator<F = RandomFailures> {
    config: SimulatorConfig,
    failures: F,
    tracked: Option<Tracked>,
}

impl Simulator<RandomFailures> {
    pub fn new(config: SimulatorConfig) -> Self {
        Self::with_failures(config, RandomFailures::from_os_rng())
    }

    pub fn seeded(config: SimulatorConfig, seed: u64) -> Self {
        Self::with_failures(config, RandomFailures::seeded(seed))
    }
}

impl<F: FailureRoll> Simulator<F> {
    pub fn with_failures(config: SimulatorConfig, failures: F) -> Self {
        Self {
            config,
            failures,
            tracked: None,
        }
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Advance the active campaign by one step.
    pub fn tick(&mut self, controller: &CampaignController) -> TickOutcome {
        let Some(campaign) = controller.active_campaign() else {
            self.tracked = None;
            return TickOutcome::Idle;
        };
        if !campaign.is_sending() {
            return TickOutcome::Idle;
        }
        if campaign.progress >= 100 {
            return self.finish(controller);
        }

        // Resync when the campaign changed under us (new start or restore).
        // Every tick adds exactly one success, so the success count is the
        // unrounded position.
        let tracked = match self.tracked.take() {
            Some(t) if t.campaign_id == campaign.campaign_id => t,
            _ => Tracked {
                campaign_id: campaign.campaign_id.clone(),
                exact_progress: (campaign.success_count as f64 * 100.0
                    / campaign.total_leads as f64)
                    .max(campaign.progress as f64),
                lead_seq: campaign.success_count,
            },
        };

        let increment = 100.0 / campaign.total_leads as f64;
        let exact_progress = (tracked.exact_progress + increment).min(100.0);
        let reached_end = exact_progress >= 100.0 - 1e-9;
        let progress = if reached_end {
            100
        } else {
            (exact_progress.round() as u32).min(99)
        };

        let lead_seq = tracked.lead_seq + 1;
        let mut patch = CampaignPatch::new()
            .progress(progress)
            .success_count((campaign.success_count + 1).min(campaign.total_leads));
        if self.failures.roll(self.config.failure_probability) {
            patch = patch.failed_count(campaign.failed_count + 1);
        }
        patch = patch.current_lead((!reached_end).then(|| placeholder_lead(lead_seq)));

        self.tracked = Some(Tracked {
            campaign_id: campaign.campaign_id.clone(),
            exact_progress,
            lead_seq,
        });

        controller.update_campaign(patch);
        debug!(campaign_id = %campaign.campaign_id, progress, "Simulator tick");

        if reached_end {
            self.finish(controller)
        } else {
            TickOutcome::Advanced { progress }
        }
    }

    fn finish(&mut self, controller: &CampaignController) -> TickOutcome {
        self.tracked = None;
        if let Err(e) = controller.finish_campaign(CampaignStatus::Completed) {
            warn!(error = %e, "Simulator failed to finish campaign");
        }
        TickOutcome::Finished
    }

    /// Tick on the configured interval until the campaign finishes or
    /// `cancel` fires.
    ///
    /// The first tick happens one interval after the call. Ticks stay inert
    /// while no campaign is tracked.
    pub async fn run(
        mut self,
        controller: CampaignController,
        cancel: CancellationToken,
    ) -> SimulationEnd {
        let period = self.config.tick_interval.max(Duration::from_millis(1));
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(?period, "Simulator running");
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    info!("Simulator cancelled");
                    return SimulationEnd::Cancelled;
                }
                _ = interval.tick() => {
                    if self.tick(&controller) == TickOutcome::Finished {
                        info!("Simulator finished campaign");
                        return SimulationEnd::Finished;
                    }
                }
            }
        }
    }
}

impl<F> Simulator<F>
where
    F: FailureRoll + Send + 'static,
{
    /// Run on a background task.
    pub fn spawn(self, controller: CampaignController) -> SimulationHandle {
        let cancel = CancellationToken::new();
        let task = tokio::spawn(self.run(controller, cancel.clone()));
        SimulationHandle { cancel, task }
    }
}

/// Handle to a spawned simulation
pub struct SimulationHandle {
    cancel: CancellationToken,
    task: JoinHandle<SimulationEnd>,
}

impl SimulationHandle {
    /// Stop ticking. The campaign keeps its current state.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the run to stop
    pub async fn join(mut self) -> SimulationEnd {
        match (&mut self.task).await {
            Ok(end) => end,
            Err(e) => {
                warn!(error = %e, "Simulation task aborted");
                SimulationEnd::Cancelled
            }
        }
    }
}

impl Drop for SimulationHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

fn placeholder_lead(seq: u32) -> CurrentLead {
    CurrentLead::new(format!("Lead {}", seq), format!("+1 555 {:04}", seq % 10_000))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::CampaignEvent;
    use crate::types::CampaignDraft;

    fn never_fail(_: f64) -> bool {
        false
    }

    fn always_fail(_: f64) -> bool {
        true
    }

    #[test]
    fn test_tick_without_campaign_is_idle() {
        let controller = CampaignController::in_memory();
        let mut sim = Simulator::with_failures(SimulatorConfig::default(), never_fail);
        assert_eq!(sim.tick(&controller), TickOutcome::Idle);
        assert!(controller.active_campaign().is_none());
    }

    #[test]
    fn test_twenty_ticks_complete_twenty_leads_once() {
        let controller = CampaignController::in_memory();
        let mut events = controller.subscribe();
        controller
            .start_campaign(CampaignDraft::new("Promo", 20))
            .unwrap();

        let mut sim = Simulator::with_failures(SimulatorConfig::default(), never_fail);
        let mut outcomes = Vec::new();
        for _ in 0..20 {
            outcomes.push(sim.tick(&controller));
        }

        assert_eq!(outcomes[0], TickOutcome::Advanced { progress: 5 });
        assert_eq!(outcomes[18], TickOutcome::Advanced { progress: 95 });
        assert_eq!(outcomes[19], TickOutcome::Finished);

        let snap = controller.active_campaign().unwrap();
        assert_eq!(snap.progress, 100);
        assert_eq!(snap.success_count, 20);
        assert_eq!(snap.failed_count, 0);
        assert_eq!(snap.status, CampaignStatus::Completed);
        assert!(snap.current_lead.is_none());

        // Further ticks stay inert
        assert_eq!(sim.tick(&controller), TickOutcome::Idle);

        let mut finished = 0;
        while let Ok(event) = events.try_recv() {
            if matches!(event, CampaignEvent::Finished { status: CampaignStatus::Completed, .. }) {
                finished += 1;
            }
        }
        assert_eq!(finished, 1);
    }

    #[test]
    fn test_tick_synthesizes_sequential_leads() {
        let controller = CampaignController::in_memory();
        controller
            .start_campaign(CampaignDraft::new("Promo", 4))
            .unwrap();
        let mut sim = Simulator::with_failures(SimulatorConfig::default(), never_fail);

        sim.tick(&controller);
        assert_eq!(
            controller.active_campaign().unwrap().current_lead,
            Some(CurrentLead::new("Lead 1", "+1 555 0001"))
        );
        sim.tick(&controller);
        assert_eq!(
            controller.active_campaign().unwrap().current_lead.unwrap().name,
            "Lead 2"
        );
    }

    #[test]
    fn test_failures_never_break_invariants() {
        let controller = CampaignController::in_memory();
        controller
            .start_campaign(CampaignDraft::new("Promo", 10))
            .unwrap();
        let mut sim = Simulator::with_failures(SimulatorConfig::default(), always_fail);

        for _ in 0..3 {
            sim.tick(&controller);
        }
        let snap = controller.active_campaign().unwrap();
        assert_eq!(snap.success_count, 3);
        assert_eq!(snap.failed_count, 3);

        while sim.tick(&controller) != TickOutcome::Finished {
            assert!(controller.active_campaign().unwrap().is_consistent());
        }
        let snap = controller.active_campaign().unwrap();
        assert!(snap.is_consistent());
        assert_eq!(snap.success_count, 10);
    }

    #[test]
    fn test_fractional_increments_accumulate() {
        let controller = CampaignController::in_memory();
        controller
            .start_campaign(CampaignDraft::new("Big list", 300))
            .unwrap();
        let mut sim = Simulator::with_failures(SimulatorConfig::default(), never_fail);

        for _ in 0..3 {
            sim.tick(&controller);
        }
        assert_eq!(controller.active_campaign().unwrap().progress, 1);

        let mut ticks = 3;
        while sim.tick(&controller) != TickOutcome::Finished {
            ticks += 1;
        }
        // The 300th tick finishes
        assert_eq!(ticks + 1, 300);
    }

    #[test]
    fn test_tick_resyncs_with_externally_advanced_campaign() {
        let controller = CampaignController::in_memory();
        controller
            .start_campaign(CampaignDraft::new("Promo", 20))
            .unwrap();
        controller.update_campaign(CampaignPatch::new().progress(50).success_count(10));

        let mut sim = Simulator::with_failures(SimulatorConfig::default(), never_fail);
        assert_eq!(sim.tick(&controller), TickOutcome::Advanced { progress: 55 });
        assert_eq!(
            controller.active_campaign().unwrap().current_lead.unwrap().name,
            "Lead 11"
        );
    }

    #[test]
    fn test_resumed_campaign_keeps_fractional_progress() {
        let controller = CampaignController::in_memory();
        controller
            .start_campaign(CampaignDraft::new("Promo", 3))
            .unwrap();

        let mut first = Simulator::with_failures(SimulatorConfig::default(), never_fail);
        assert_eq!(first.tick(&controller), TickOutcome::Advanced { progress: 33 });

        // A fresh simulator has to pick the campaign up from the snapshot alone
        let mut resumed = Simulator::with_failures(SimulatorConfig::default(), never_fail);
        assert_eq!(resumed.tick(&controller), TickOutcome::Advanced { progress: 67 });
        assert_eq!(resumed.tick(&controller), TickOutcome::Finished);

        let snap = controller.active_campaign().unwrap();
        assert_eq!(snap.status, CampaignStatus::Completed);
        assert_eq!(snap.success_count, 3);
        assert_eq!(snap.progress, 100);
    }

    #[test]
    fn test_resumed_campaign_keeps_lead_sequence_with_failures() {
        let controller = CampaignController::in_memory();
        controller
            .start_campaign(CampaignDraft::new("Promo", 10))
            .unwrap();

        let mut first = Simulator::with_failures(SimulatorConfig::default(), always_fail);
        for _ in 0..3 {
            first.tick(&controller);
        }
        let snap = controller.active_campaign().unwrap();
        assert_eq!(snap.current_lead.unwrap().name, "Lead 3");
        assert_eq!(snap.failed_count, 3);

        let mut resumed = Simulator::with_failures(SimulatorConfig::default(), always_fail);
        resumed.tick(&controller);
        assert_eq!(
            controller.active_campaign().unwrap().current_lead.unwrap().name,
            "Lead 4"
        );
    }

    #[test]
    fn test_full_progress_finishes_on_next_tick() {
        let controller = CampaignController::in_memory();
        controller
            .start_campaign(CampaignDraft::new("Promo", 20))
            .unwrap();
        controller.update_campaign(CampaignPatch::new().progress(100));

        let mut sim = Simulator::with_failures(SimulatorConfig::default(), never_fail);
        assert_eq!(sim.tick(&controller), TickOutcome::Finished);
        assert_eq!(
            controller.active_campaign().unwrap().status,
            CampaignStatus::Completed
        );
    }

    #[test]
    fn test_seeded_rolls_are_reproducible() {
        let mut a = RandomFailures::seeded(7);
        let mut b = RandomFailures::seeded(7);
        let rolls_a: Vec<bool> = (0..32).map(|_| a.roll(0.5)).collect();
        let rolls_b: Vec<bool> = (0..32).map(|_| b.roll(0.5)).collect();
        assert_eq!(rolls_a, rolls_b);
    }

    #[test]
    fn test_random_failures_respect_bounds() {
        let mut rolls = RandomFailures::seeded(1);
        assert!((0..100).all(|_| !rolls.roll(0.0)));
        assert!((0..100).all(|_| rolls.roll(1.0)));
        assert!((0..100).all(|_| !rolls.roll(f64::NAN)));
        assert!((0..100).all(|_| rolls.roll(7.5)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_finishes_campaign() {
        let controller = CampaignController::in_memory();
        controller
            .start_campaign(CampaignDraft::new("Promo", 5))
            .unwrap();

        let started = Instant::now();
        let handle =
            Simulator::with_failures(SimulatorConfig::default(), never_fail).spawn(controller.clone());
        assert_eq!(handle.join().await, SimulationEnd::Finished);

        assert_eq!(started.elapsed(), Duration::from_secs(5));
        let snap = controller.active_campaign().unwrap();
        assert_eq!(snap.status, CampaignStatus::Completed);
        assert!(controller.state().show_completion_notification);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_stops_on_cancel() {
        let controller = CampaignController::in_memory();
        controller
            .start_campaign(CampaignDraft::new("Promo", 20))
            .unwrap();

        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(3500)).await;
            trigger.cancel();
        });

        let sim = Simulator::with_failures(SimulatorConfig::default(), never_fail);
        assert_eq!(
            sim.run(controller.clone(), cancel).await,
            SimulationEnd::Cancelled
        );

        let snap = controller.active_campaign().unwrap();
        assert_eq!(snap.progress, 15);
        assert_eq!(snap.status, CampaignStatus::Sending);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_waits_for_campaign() {
        let controller = CampaignController::in_memory();
        let handle = Simulator::with_failures(
            SimulatorConfig::default().with_tick_interval(Duration::from_millis(100)),
            never_fail,
        )
        .spawn(controller.clone());

        tokio::time::sleep(Duration::from_millis(450)).await;
        assert!(!handle.is_finished());

        controller
            .start_campaign(CampaignDraft::new("Late start", 2))
            .unwrap();
        assert_eq!(handle.join().await, SimulationEnd::Finished);
        assert_eq!(controller.active_campaign().unwrap().progress, 100);
    }
}
