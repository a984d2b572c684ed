//! Utility command handlers.

use std::path::Path;

use super::{CommandResult, Context};
use anyhow::bail;
use hidusage::catalog::catalog_registry;
use hidusage::config::Config;
use hidusage_source::{HidDiscovery, PageFilter};
use tracing::info;

/// List HID interfaces accepted by the filter
pub fn list(ctx: &Context, filter: Option<&str>) -> CommandResult {
    let filter = match filter {
        Some(f) => f.parse::<PageFilter>()?,
        None => ctx.filter,
    };
    let discovery = HidDiscovery::new()?;
    let devices = discovery.list_devices(filter);

    if ctx.json {
        let infos: Vec<_> = devices.iter().map(|d| &d.info).collect();
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    if devices.is_empty() {
        println!("No HID devices found ({filter:?})");
        return Ok(());
    }
    println!("HID devices ({filter:?}):");
    for device in &devices {
        let info = &device.info;
        let page_name = catalog_registry().catalog_for(info.usage_page).name().to_string();
        println!(
            "  VID={:04x} PID={:04x} page={:04x} ({}) usage={:04x} if={} {} {} path={}",
            info.vid,
            info.pid,
            info.usage_page,
            page_name,
            info.usage,
            device.interface_number,
            info.manufacturer.as_deref().unwrap_or("-"),
            info.product_name.as_deref().unwrap_or("-"),
            info.device_path,
        );
    }
    Ok(())
}

/// Print the effective config, or write it to `path` with `init`
pub fn config(path: &Path, config: &Config, init: bool, force: bool) -> CommandResult {
    if init {
        if path.exists() && !force {
            bail!("{} already exists (use --force to overwrite)", path.display());
        }
        config.save(path)?;
        info!("Wrote config to {}", path.display());
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let origin = if path.exists() { "" } else { " (not found, using defaults)" };
    println!("# {}{}", path.display(), origin);
    print!("{}", config.to_toml()?);
    if config.device.is_empty() {
        println!("# no device selected: the first device matching page_filter is opened");
    }
    Ok(())
}
