use dioxus::prelude::*;
use leadpulse_core::{CampaignController, CampaignState};
use tokio::sync::broadcast::error::RecvError;

use crate::components::CampaignHost;
use crate::context::{open_controller, SimulationSlot};
use crate::pages::{Dashboard, Landing};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page
/// - `/dashboard` - Campaign launcher and live summary
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/dashboard")]
    Dashboard {},
}

/// Root application component.
///
/// Provides global styles, campaign context and routing. The campaign
/// displays sit outside the router so they survive navigation.
#[component]
pub fn App() -> Element {
    let controller: CampaignController = use_hook(open_controller);
    let state: Signal<CampaignState> = use_signal(|| controller.state());
    let mut simulation: Signal<SimulationSlot> = use_signal(SimulationSlot::default);

    use_context_provider(|| controller.clone());
    use_context_provider(|| state);
    use_context_provider(|| simulation);

    // Mirror controller events into the state signal
    let listener = controller.clone();
    use_hook(move || {
        spawn(async move {
            let mut state = state;
            let mut events = listener.subscribe();
            state.set(listener.state());
            loop {
                match events.recv().await {
                    Ok(_) | Err(RecvError::Lagged(_)) => state.set(listener.state()),
                    Err(RecvError::Closed) => break,
                }
            }
        });
    });

    // A campaign restored from the cache resumes sending once mounted
    let resumed = controller.clone();
    use_hook(move || {
        spawn(async move {
            if needs_resume(&resumed) {
                tracing::info!("Resuming restored campaign");
                simulation
                    .write()
                    .start(resumed, crate::get_simulator_config());
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
        CampaignHost {}
    }
}

/// Whether the controller holds a campaign that should keep sending.
fn needs_resume(controller: &CampaignController) -> bool {
    controller
        .active_campaign()
        .is_some_and(|campaign| campaign.is_sending())
}
