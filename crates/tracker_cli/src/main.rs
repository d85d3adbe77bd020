//! CLI probe for `tracker_core`.
//!
//! # Responsibility
//! - Verify core crate linkage without the outer CRUD layer.
//! - Load an installation document, validate it through the core model and
//!   print the normalized document.

mod settings;

use anyhow::Context;
use log::info;
use settings::CliConfig;
use tracker_core::Installation;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::load().context("failed to load configuration")?;
    if let Some(log_dir) = config.log_dir.as_deref() {
        tracker_core::init_logging(config.log_level(), log_dir)
            .context("failed to initialize logging")?;
    }

    println!("tracker_core version={}", tracker_core::core_version());

    let Some(path) = std::env::args().nth(1) else {
        return Ok(());
    };
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read installation document `{path}`"))?;
    let installation: Installation = serde_json::from_str(&raw)
        .with_context(|| format!("invalid installation document `{path}`"))?;

    info!(
        "event=cli_load module=cli status=ok days={} columns={}",
        installation.days_between_start_and_end(),
        installation.fields_for_tracking().len()
    );
    println!("{}", serde_json::to_string_pretty(&installation)?);
    Ok(())
}
