//! FloodGuard: host simulator entry point
//!
//! Hexagonal layout, fixed-length control loop.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  SimulatedUnderpass   LogEventSink   JsonConfigFile ThreadPacer│
//! │  (Sensor+Actuator)    (EventSink)    (ConfigPort)   (Pacer)    │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              AppService (cycle driver)                 │    │
//! │  │  DecisionEngine (pure) · ActuatorState threading       │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use floodguard::adapters::config_file::JsonConfigFile;
use floodguard::adapters::hardware::SimulatedUnderpass;
use floodguard::adapters::log_sink::LogEventSink;
use floodguard::adapters::time::ThreadPacer;
use floodguard::app::ports::ConfigPort;
use floodguard::app::service::AppService;
use floodguard::config::{SystemConfig, load_validated};

/// Flood guard control loop for a single underpass (simulated site)
#[derive(Parser, Debug)]
#[command(name = "floodguard", version, about, long_about = None)]
struct Args {
    /// JSON configuration file (defaults are used if it does not exist)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of control cycles to run (overrides config)
    #[arg(long)]
    cycles: Option<u32>,

    /// Milliseconds between cycles (overrides config)
    #[arg(long)]
    interval_ms: Option<u32>,

    /// RNG seed for a reproducible run (overrides config)
    #[arg(long)]
    seed: Option<u64>,

    /// Site name shown in the log (overrides config)
    #[arg(long)]
    site: Option<String>,

    /// Write the effective configuration to the --config path and exit
    #[arg(long, default_value_t = false)]
    write_config: bool,

    /// Enable verbose logging
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn load_config(args: &Args) -> Result<SystemConfig> {
    let mut config = match &args.config {
        Some(path) => load_validated(&JsonConfigFile::new(path))
            .with_context(|| format!("loading {}", path.display()))?,
        None => SystemConfig::default(),
    };

    if let Some(cycles) = args.cycles {
        config.cycle_count = cycles;
    }
    if let Some(ms) = args.interval_ms {
        config.cycle_interval_ms = ms;
    }
    if let Some(seed) = args.seed {
        config.simulation.seed = Some(seed);
    }
    if let Some(site) = &args.site {
        config.site_name.clone_from(site);
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();

    // ── 1. Logging ────────────────────────────────────────────
    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .init();

    info!("FloodGuard v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration ──────────────────────────────────────
    let config = load_config(&args)?;
    if args.write_config {
        let Some(path) = &args.config else {
            anyhow::bail!("--write-config needs --config <PATH>");
        };
        JsonConfigFile::new(path).save(&config)?;
        info!("Configuration written to {}", path.display());
        return Ok(());
    }
    if config.simulation.seed.is_none() {
        warn!("No seed given; this run is not reproducible");
    }
    info!(
        "Thresholds: alert={:.1} cm lockdown={:.1} cm normalization={:.1} cm predictive={:.1} cm/min",
        config.thresholds.alert_level,
        config.thresholds.lockdown_level,
        config.thresholds.normalization_level,
        config.thresholds.predictive_rise_rate,
    );

    // ── 3. Adapters ───────────────────────────────────────────
    let mut hw = SimulatedUnderpass::from_config(&config.simulation);
    let mut sink = LogEventSink::new();
    let mut pacer = ThreadPacer::new();

    // ── 4. Control loop ───────────────────────────────────────
    let mut app = AppService::new(&config);
    app.start(&mut hw, &mut sink);
    app.run(
        config.cycle_count,
        config.cycle_interval(),
        &mut hw,
        &mut sink,
        &mut pacer,
    );

    info!(
        "Summary: {} barrier closures, {} pump starts, {}s elapsed",
        hw.barrier_closures(),
        hw.pump_starts(),
        pacer.uptime_secs()
    );
    Ok(())
}
