#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use leadpulse_core::SimulatorConfig;

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Simulator settings, set from command line
static SIMULATOR_CONFIG: OnceLock<SimulatorConfig> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("leadpulse")
    })
}

/// Get the simulator settings (set from command line or default)
pub fn get_simulator_config() -> SimulatorConfig {
    SIMULATOR_CONFIG.get().cloned().unwrap_or_default()
}

/// LeadPulse - Campaign Dashboard
#[derive(Parser, Debug)]
#[command(name = "leadpulse-desktop")]
#[command(about = "LeadPulse - lead campaign progress dashboard")]
struct Args {
    /// Data directory for the campaign cache
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Profile name (creates data dir: leadpulse-<name>)
    #[arg(short, long)]
    name: Option<String>,

    /// Milliseconds between simulated send ticks
    #[arg(long, default_value_t = 1000)]
    tick_ms: u64,

    /// Per-tick probability of a simulated failed lead
    #[arg(long, default_value_t = 0.1)]
    failure_probability: f64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let (data_dir, display_name) = if let Some(dir) = args.data_dir {
        let label = dir
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("custom")
            .to_string();
        (dir, label)
    } else if let Some(ref name) = args.name {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(format!("leadpulse-{}", name));
        (base, name.clone())
    } else {
        (get_data_dir(), String::new())
    };

    let _ = DATA_DIR.set(data_dir.clone());
    let _ = SIMULATOR_CONFIG.set(
        SimulatorConfig::default()
            .with_tick_interval(Duration::from_millis(args.tick_ms))
            .with_failure_probability(args.failure_probability),
    );

    let title = if !display_name.is_empty() {
        format!("LeadPulse - {}", display_name)
    } else {
        "LeadPulse".to_string()
    };

    tracing::info!("Starting '{}' with data dir: {:?}", display_name, data_dir);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 800.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
