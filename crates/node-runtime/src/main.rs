//! # Dead-Drop Node Runtime
//!
//! Entry point wiring the message registry and the batch reducer.
//!
//! ## Startup Sequence
//!
//! 1. Initialize logging (`RUST_LOG`, default `info`)
//! 2. Load configuration (defaults + `DD_*` environment overrides)
//! 3. Initialize subsystems
//! 4. Bootstrap the admin identity (configured, or generated for this run)
//! 5. Run the demo session

use anyhow::{Context, Result};
use rand::RngCore;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use node_runtime::{load_config, run_demo, SubsystemContainer};
use shared_types::CallerId;

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .with_thread_ids(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("===========================================");
    info!("  Dead-Drop Node Runtime v{}", env!("CARGO_PKG_VERSION"));
    info!("===========================================");

    let config = load_config();
    if let Err(e) = config.validate_for_production() {
        warn!(error = %e, "Configuration not production ready");
    }

    let admin = match config.security.admin_id {
        Some(admin) => admin,
        None => {
            let mut bytes = [0u8; 32];
            rand::thread_rng().fill_bytes(&mut bytes);
            info!(admin = %hex::encode(bytes), "Generated ephemeral admin identity");
            CallerId(bytes)
        }
    };

    let container = SubsystemContainer::new(config);
    container
        .bootstrap_admin(&admin)
        .context("bootstrapping admin")?;

    let report = run_demo(&container, &admin).context("running demo session")?;
    info!(
        address_count = report.address_count,
        messages_received = report.messages_received,
        message_number = report.message_number,
        actions = report.actions,
        "Node finished"
    );

    Ok(())
}
