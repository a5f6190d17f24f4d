//! LeadPulse CLI
//!
//! Thin wrapper around leadpulse-core for driving a campaign from the
//! terminal. Every invocation restores the cached campaign from the data
//! directory, applies one operation and exits.
//!
//! ## Usage
//!
//! ```bash
//! # Show the active campaign
//! leadpulse status
//!
//! # Start a campaign
//! leadpulse start --name "Spring Promo" --leads 20
//!
//! # Report progress
//! leadpulse update --progress 45 --success 8 --failed 1
//!
//! # Finish it
//! leadpulse finish completed
//!
//! # Discard it
//! leadpulse clear
//!
//! # Run a synthetic campaign to completion
//! leadpulse simulate --name "Demo" --leads 20 --interval-ms 200
//! ```

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use leadpulse_core::display::{format_elapsed, progress_label, status_headline, success_rate};
use leadpulse_core::{
    CampaignController, CampaignDraft, CampaignEvent, CampaignId, CampaignPatch, CampaignSnapshot,
    CampaignStatus, SimulationEnd, Simulator, SimulatorConfig, Storage,
};
use tokio::sync::broadcast::error::RecvError;

/// LeadPulse - campaign progress from the terminal
#[derive(Parser)]
#[command(name = "leadpulse")]
#[command(version = "0.1.0")]
#[command(about = "LeadPulse - track lead campaign progress")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Data directory (default: ~/.leadpulse/data)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the active campaign
    Status,

    /// Start a new campaign
    Start {
        /// Campaign name
        #[arg(short, long)]
        name: String,
        /// Number of leads in the campaign
        #[arg(short, long)]
        leads: u32,
        /// Campaign ID (generated when omitted)
        #[arg(long)]
        id: Option<String>,
    },

    /// Report progress for the active campaign
    Update {
        /// Progress percent (0-100)
        #[arg(short, long)]
        progress: Option<u32>,
        /// Total successful sends so far
        #[arg(short, long)]
        success: Option<u32>,
        /// Total failed sends so far
        #[arg(short, long)]
        failed: Option<u32>,
    },

    /// Finish the active campaign
    Finish {
        /// Final status: completed or failed
        status: String,
    },

    /// Discard the active campaign and its cached copy
    Clear,

    /// Start a campaign and drive it with the simulator until it finishes
    Simulate {
        /// Campaign name
        #[arg(short, long)]
        name: String,
        /// Number of leads in the campaign
        #[arg(short, long)]
        leads: u32,
        /// Milliseconds between ticks
        #[arg(long, default_value_t = 1000)]
        interval_ms: u64,
        /// Per-tick probability of a failed lead
        #[arg(long, default_value_t = 0.1)]
        failure_probability: f64,
        /// Seed for reproducible failure rolls
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Get the default data directory (~/.leadpulse/data)
fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".leadpulse")
        .join("data")
}

/// Parse a terminal status from the command line
fn parse_final_status(s: &str) -> Result<CampaignStatus> {
    let status: CampaignStatus = s.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    if !status.is_terminal() {
        anyhow::bail!(
            "Invalid final status '{}'. Must be one of: completed, failed",
            s
        );
    }
    Ok(status)
}

fn print_campaign(campaign: &CampaignSnapshot) {
    println!("Campaign: {}", campaign.campaign_name);
    println!("  ID: {}", campaign.campaign_id);
    println!("  Status: {}", campaign.status);
    println!("  Progress: {}", progress_label(campaign.progress));
    println!(
        "  Leads: {} total, {} sent, {} failed",
        campaign.total_leads, campaign.success_count, campaign.failed_count
    );
    if let Some(rate) = success_rate(campaign) {
        println!("  Success rate: {}%", rate);
    }
    if let Some(lead) = &campaign.current_lead {
        println!("  Current lead: {} ({})", lead.name, lead.phone);
    }
    println!(
        "  Started: {}",
        campaign.start_time.format("%Y-%m-%d %H:%M:%S UTC")
    );
    if let Some(duration) = campaign.duration {
        println!("  Duration: {}", format_elapsed(duration));
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
    let storage = Storage::open_dir(&data_dir)?;
    let controller = CampaignController::restore(storage)?;

    match cli.command {
        Commands::Status => match controller.active_campaign() {
            Some(campaign) => print_campaign(&campaign),
            None => println!("No active campaign."),
        },

        Commands::Start { name, leads, id } => {
            let mut draft = CampaignDraft::new(name, leads);
            if let Some(id) = id {
                draft = draft.with_id(CampaignId::from_string(id));
            }
            let campaign = controller.start_campaign(draft)?;
            println!("✓ Started campaign '{}'", campaign.campaign_name);
            println!("  ID: {}", campaign.campaign_id);
            println!("  Leads: {}", campaign.total_leads);
        }

        Commands::Update {
            progress,
            success,
            failed,
        } => {
            let mut patch = CampaignPatch::new();
            if let Some(progress) = progress {
                patch = patch.progress(progress);
            }
            if let Some(success) = success {
                patch = patch.success_count(success);
            }
            if let Some(failed) = failed {
                patch = patch.failed_count(failed);
            }
            if patch.is_empty() {
                anyhow::bail!("Nothing to update. Pass --progress, --success or --failed");
            }

            match controller.update_campaign(patch) {
                Some(campaign) => {
                    println!("✓ Updated campaign '{}'", campaign.campaign_name);
                    println!("  Progress: {}", progress_label(campaign.progress));
                    println!(
                        "  Sent: {}, failed: {}",
                        campaign.success_count, campaign.failed_count
                    );
                }
                None => println!("No active campaign to update."),
            }
        }

        Commands::Finish { status } => {
            let status = parse_final_status(&status)?;
            match controller.finish_campaign(status)? {
                Some(campaign) => {
                    println!("✓ {}", status_headline(campaign.status));
                    println!();
                    print_campaign(&campaign);
                }
                None => println!("No sending campaign to finish."),
            }
        }

        Commands::Clear => {
            let had_campaign = controller.active_campaign().is_some();
            controller.clear_active_campaign();
            if had_campaign {
                println!("✓ Campaign cleared");
            } else {
                println!("No active campaign.");
            }
        }

        Commands::Simulate {
            name,
            leads,
            interval_ms,
            failure_probability,
            seed,
        } => {
            let config = SimulatorConfig::default()
                .with_tick_interval(Duration::from_millis(interval_ms))
                .with_failure_probability(failure_probability);
            let simulator = match seed {
                Some(seed) => Simulator::seeded(config, seed),
                None => Simulator::new(config),
            };

            let mut events = controller.subscribe();
            let campaign = controller.start_campaign(CampaignDraft::new(name, leads))?;
            println!(
                "✓ Started campaign '{}' ({} leads)",
                campaign.campaign_name, campaign.total_leads
            );
            println!("Press Ctrl+C to stop");
            println!();

            let handle = simulator.spawn(controller.clone());
            loop {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {
                        handle.cancel();
                        break;
                    }
                    event = events.recv() => match event {
                        Ok(CampaignEvent::Updated { progress, .. }) => {
                            println!("  {}", progress_label(progress));
                        }
                        Ok(CampaignEvent::Finished { .. }) | Err(RecvError::Closed) => break,
                        Ok(_) => {}
                        Err(RecvError::Lagged(n)) => {
                            tracing::debug!("Skipped {} campaign events", n);
                        }
                    }
                }
            }

            match handle.join().await {
                SimulationEnd::Finished => {
                    if let Some(campaign) = controller.active_campaign() {
                        println!();
                        println!("✓ {}", status_headline(campaign.status));
                        println!();
                        print_campaign(&campaign);
                    }
                }
                SimulationEnd::Cancelled => {
                    println!();
                    println!("Simulation stopped. Progress is kept in the cache.");
                }
            }
        }
    }

    Ok(())
}
