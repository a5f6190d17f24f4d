//! Campaign Launcher
//!
//! Dashboard form that starts a campaign and controls its simulated send.

use dioxus::prelude::*;
use leadpulse_core::{CampaignDraft, CampaignStatus};
use leadpulse_ui::{Button, ButtonVariant};

use crate::context::{use_campaign_controller, use_campaign_state, use_simulation};

/// Validate the launcher inputs.
pub fn parse_draft(name: &str, total_leads: &str) -> Result<CampaignDraft, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Please enter a campaign name".to_string());
    }
    match total_leads.trim().parse::<u32>() {
        Ok(0) => Err("A campaign needs at least one lead".to_string()),
        Ok(total) => Ok(CampaignDraft::new(name, total)),
        Err(_) => Err(format!("'{}' is not a lead count", total_leads.trim())),
    }
}

#[component]
pub fn CampaignLauncher() -> Element {
    let controller = use_campaign_controller();
    let state = use_campaign_state();
    let mut simulation = use_simulation();

    let mut name = use_signal(|| String::from("Spring promo"));
    let mut total_leads = use_signal(|| String::from("20"));
    let mut error = use_signal(|| Option::<String>::None);

    let sending = state
        .read()
        .active
        .as_ref()
        .is_some_and(|c| c.status == CampaignStatus::Sending);
    let running = simulation.read().is_running();

    let start_controller = controller.clone();
    let start = move |_| {
        let draft = match parse_draft(&name(), &total_leads()) {
            Ok(draft) => draft,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };
        match start_controller.start_campaign(draft) {
            Ok(_) => {
                error.set(None);
                start_controller.open_modal();
                simulation
                    .write()
                    .start(start_controller.clone(), crate::get_simulator_config());
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    let resume_controller = controller.clone();
    let toggle = move |_| {
        if simulation.read().is_running() {
            simulation.write().pause();
        } else {
            simulation
                .write()
                .start(resume_controller.clone(), crate::get_simulator_config());
        }
    };

    let abort = move |_| {
        simulation.write().pause();
        if let Err(e) = controller.finish_campaign(CampaignStatus::Failed) {
            tracing::warn!("Failed to abort campaign: {}", e);
        }
    };

    rsx! {
        section { class: "card launcher",
            h2 { class: "section-header", "Launch a campaign" }

            label { class: "field",
                span { class: "field-label", "Campaign name" }
                input {
                    class: "text-input",
                    r#type: "text",
                    value: "{name}",
                    oninput: move |e| name.set(e.value()),
                    disabled: sending,
                }
            }

            label { class: "field",
                span { class: "field-label", "Leads" }
                input {
                    class: "text-input",
                    r#type: "number",
                    min: "1",
                    value: "{total_leads}",
                    oninput: move |e| total_leads.set(e.value()),
                    disabled: sending,
                }
            }

            if let Some(err) = error() {
                p { class: "error-text", "⚠ {err}" }
            }

            div { class: "modal-actions",
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: sending,
                    onclick: start,
                    "Start sending"
                }
                if sending {
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: toggle,
                        if running { "Pause" } else { "Resume" }
                    }
                    Button {
                        variant: ButtonVariant::Danger,
                        onclick: abort,
                        "Abort"
                    }
                }
            }
        }
    }
}
