//! Command handlers for the CLI application.
//!
//! This module organizes command handlers by category:
//! - `catalog`: Reference table commands (catalog)
//! - `query`: Device commands (tree, values, lookup, set, snapshot, demo)
//! - `utility`: Utility commands (list, config)

pub mod catalog;
pub mod query;
pub mod utility;

use std::path::PathBuf;

use anyhow::{anyhow, Context as _};
use hidusage::config::Config;
use hidusage::demo::demo_ups;
use hidusage_source::{CapabilitySet, CapabilitySource, HidDiscovery, PageFilter, SourceError};
use tracing::{info, warn};

/// Result type for command handlers
pub type CommandResult = anyhow::Result<()>;

/// Device selection merged from the command line and the config file
pub struct Context {
    pub demo: bool,
    pub json: bool,
    pub capabilities: Option<PathBuf>,
    pub vid_pid: Option<(u16, u16)>,
    pub path: Option<String>,
    pub filter: PageFilter,
}

impl Context {
    pub fn new(cli: &crate::cli::Cli, config: &Config) -> anyhow::Result<Self> {
        let vid_pid = cli
            .device
            .or(config.device.vid.zip(config.device.pid));
        Ok(Self {
            demo: cli.demo,
            json: cli.json,
            capabilities: cli.capabilities.clone().or_else(|| config.capabilities.clone()),
            vid_pid,
            path: cli.path.clone().or_else(|| config.device.path.clone()),
            filter: config.page_filter()?,
        })
    }

    /// Open the selected capability source
    pub fn open_source(&self) -> anyhow::Result<Box<dyn CapabilitySource>> {
        if self.demo {
            info!("Using demo UPS");
            return Ok(Box::new(demo_ups()));
        }

        let caps_path = self.capabilities.as_ref().ok_or_else(|| {
            anyhow!("no capability snapshot: pass --caps FILE, set `capabilities` in the config, or use --demo")
        })?;
        let capabilities = CapabilitySet::load(caps_path)
            .with_context(|| format!("loading capability snapshot {}", caps_path.display()))?;
        info!(
            "Loaded {} capabilities from {}",
            capabilities.len(),
            caps_path.display()
        );

        let discovery = HidDiscovery::new()?;
        let device = match (&self.path, self.vid_pid) {
            (Some(path), _) => discovery.find_path(path),
            (None, Some((vid, pid))) => discovery.find(vid, pid, self.filter),
            (None, None) => discovery.list_devices(self.filter).into_iter().next(),
        }
        .ok_or_else(|| SourceError::DeviceNotFound(self.describe_selection()))?;

        let mut source = discovery.open_source(&device, capabilities)?;
        if let Err(e) = source.refresh_strings() {
            warn!("Could not read device strings: {}", e);
        }
        Ok(Box::new(source))
    }

    fn describe_selection(&self) -> String {
        match (&self.path, self.vid_pid) {
            (Some(path), _) => path.clone(),
            (None, Some((vid, pid))) => format!("{vid:04X}:{pid:04X}"),
            (None, None) => format!("any device matching {:?}", self.filter),
        }
    }
}

/// Print a device header line
pub fn print_device(source: &dyn CapabilitySource) {
    let info = source.device_info();
    println!(
        "Device: VID={:04X} PID={:04X} {} {} ({})",
        info.vid,
        info.pid,
        info.manufacturer.as_deref().unwrap_or("Unknown"),
        info.product_name.as_deref().unwrap_or("Unknown"),
        info.device_path
    );
}
