// CLI definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hidusage")]
#[command(author, version, about = "HID usage classification for power devices, batteries and keyboards")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file path (default: ~/.config/hidusage/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Capability snapshot (JSON) describing the device's report fields
    #[arg(long = "caps", global = true, value_name = "FILE")]
    pub capabilities: Option<PathBuf>,

    /// Device to open, as VID:PID in hex (e.g. 0463:ffff)
    #[arg(long, global = true, value_parser = parse_vid_pid)]
    pub device: Option<(u16, u16)>,

    /// hidapi device path (e.g. /dev/hidraw3)
    #[arg(long, global = true)]
    pub path: Option<String>,

    /// Use the built-in demo UPS instead of a real device
    #[arg(long, global = true)]
    pub demo: bool,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List HID interfaces
    #[command(visible_alias = "ls")]
    List {
        /// Page filter: power, all, or a usage page number
        #[arg(long)]
        filter: Option<String>,
    },

    /// Print the reference table of a usage page
    #[command(visible_alias = "cat")]
    Catalog {
        /// Usage page (e.g. 0x84)
        #[arg(value_parser = parse_u16)]
        page: u16,

        /// Include reserved entries
        #[arg(short, long)]
        all: bool,
    },

    /// Build and print the usage collection tree
    Tree,

    /// Read current values
    #[command(visible_aliases = ["vals", "v"])]
    Values {
        /// Read every leaf, not only dynamic values and flags
        #[arg(short, long)]
        all: bool,

        /// With --all, include leaves of unclassified collections
        #[arg(long)]
        unlinked: bool,
    },

    /// Look up a single usage
    Lookup {
        /// Usage ID (e.g. 0x5A)
        #[arg(value_parser = parse_u16)]
        usage: u16,

        /// Restrict to a link collection (0 = any)
        #[arg(long, value_parser = parse_u16, default_value = "0")]
        collection: u16,

        /// Do not read the current value
        #[arg(long)]
        no_read: bool,
    },

    /// Write a feature value
    Set {
        /// Usage ID (e.g. 0x5A)
        #[arg(value_parser = parse_u16)]
        usage: u16,

        /// Value to write
        #[arg(allow_negative_numbers = true)]
        value: i32,

        /// Restrict to a link collection (0 = any)
        #[arg(long, value_parser = parse_u16, default_value = "0")]
        collection: u16,
    },

    /// Print the capability snapshot of the selected device
    Snapshot,

    /// Walk through the demo UPS: tree, values, lookups
    Demo,

    /// Show the effective config, or write it out
    Config {
        /// Write the effective config to the config file
        #[arg(long)]
        init: bool,

        /// With --init, overwrite an existing file
        #[arg(long, requires = "init")]
        force: bool,
    },
}

/// Parse a number given in hex (`0x5A`) or decimal (`90`)
pub fn parse_u16(s: &str) -> Result<u16, String> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid number {s:?}: {e}"))
}

/// Parse `VID:PID`, both hex
pub fn parse_vid_pid(s: &str) -> Result<(u16, u16), String> {
    let (vid, pid) = s
        .split_once(':')
        .ok_or_else(|| format!("expected VID:PID, got {s:?}"))?;
    let hex = |v: &str| {
        u16::from_str_radix(v.trim().trim_start_matches("0x"), 16)
            .map_err(|e| format!("invalid id {v:?}: {e}"))
    };
    Ok((hex(vid)?, hex(pid)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn numbers() {
        assert_eq!(parse_u16("0x5A"), Ok(0x5A));
        assert_eq!(parse_u16("90"), Ok(90));
        assert!(parse_u16("zz").is_err());
        assert_eq!(parse_vid_pid("0463:ffff"), Ok((0x0463, 0xFFFF)));
        assert!(parse_vid_pid("0463").is_err());
    }

    #[test]
    fn set_accepts_negative() {
        let cli = Cli::try_parse_from(["hidusage", "--demo", "set", "0x5A", "-3"]).unwrap();
        assert!(cli.demo);
        assert!(matches!(cli.command, Commands::Set { usage: 0x5A, value: -3, collection: 0 }));
    }

    #[test]
    fn config_force_needs_init() {
        assert!(Cli::try_parse_from(["hidusage", "config", "--force"]).is_err());
        let cli = Cli::try_parse_from(["hidusage", "config", "--init", "--force"]).unwrap();
        assert!(matches!(cli.command, Commands::Config { init: true, force: true }));
    }
}
