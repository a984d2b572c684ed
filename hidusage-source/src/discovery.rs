//! Device discovery for HID power, battery and keyboard interfaces

use hidapi::HidApi;
use tracing::{debug, info};

use crate::error::SourceError;
use crate::hid_source::HidSource;
use crate::strings::trim_device_string;
use crate::types::{CapabilitySet, DiscoveredDevice, SourceDeviceInfo};

/// Power Device usage page
const USAGE_PAGE_POWER: u16 = 0x84;
/// Battery System usage page
const USAGE_PAGE_BATTERY: u16 = 0x85;

/// Which top-level interfaces discovery reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageFilter {
    /// Power Device and Battery System interfaces (UPS, battery packs)
    #[default]
    Power,
    /// A single top-level usage page
    Page(u16),
    /// Every HID interface
    All,
}

impl PageFilter {
    pub fn matches(&self, usage_page: u16) -> bool {
        match self {
            PageFilter::Power => {
                usage_page == USAGE_PAGE_POWER || usage_page == USAGE_PAGE_BATTERY
            }
            PageFilter::Page(page) => usage_page == *page,
            PageFilter::All => true,
        }
    }
}

impl std::str::FromStr for PageFilter {
    type Err = SourceError;

    /// `power`, `all`, or a page number (`0x84`, `132`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "power" | "ups" => return Ok(PageFilter::Power),
            "all" => return Ok(PageFilter::All),
            _ => {}
        }
        let page = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex) => u16::from_str_radix(hex, 16),
            None => s.parse(),
        };
        page.map(PageFilter::Page)
            .map_err(|_| SourceError::Unsupported(format!("page filter {s:?}")))
    }
}

/// HID device discovery through hidapi
pub struct HidDiscovery {
    api: HidApi,
}

impl HidDiscovery {
    /// Initialize hidapi and enumerate devices
    pub fn new() -> Result<Self, SourceError> {
        Ok(Self {
            api: HidApi::new()?,
        })
    }

    /// List interfaces accepted by `filter`
    pub fn list_devices(&self, filter: PageFilter) -> Vec<DiscoveredDevice> {
        let mut devices = Vec::new();

        for device_info in self.api.device_list() {
            if !filter.matches(device_info.usage_page()) {
                continue;
            }

            let path = device_info.path().to_string_lossy().to_string();
            let text = |s: Option<&str>| s.map(trim_device_string).filter(|s| !s.is_empty());

            debug!(
                "Found device: VID={:04X} PID={:04X} page={:04X} usage={:04X} path={}",
                device_info.vendor_id(),
                device_info.product_id(),
                device_info.usage_page(),
                device_info.usage(),
                path
            );

            devices.push(DiscoveredDevice {
                info: SourceDeviceInfo {
                    vid: device_info.vendor_id(),
                    pid: device_info.product_id(),
                    usage_page: device_info.usage_page(),
                    usage: device_info.usage(),
                    device_path: path,
                    manufacturer: text(device_info.manufacturer_string()),
                    product_name: text(device_info.product_string()),
                    serial: text(device_info.serial_number()),
                },
                interface_number: device_info.interface_number(),
            });
        }

        info!("Found {} devices", devices.len());
        devices
    }

    /// Find a device by VID/PID (first matching interface)
    pub fn find(&self, vid: u16, pid: u16, filter: PageFilter) -> Option<DiscoveredDevice> {
        self.list_devices(filter)
            .into_iter()
            .find(|d| d.info.vid == vid && d.info.pid == pid)
    }

    /// Find a device by its hidapi path
    pub fn find_path(&self, path: &str) -> Option<DiscoveredDevice> {
        self.list_devices(PageFilter::All)
            .into_iter()
            .find(|d| d.info.device_path == path)
    }

    /// Open a capability source for a discovered device
    pub fn open_source(
        self,
        device: &DiscoveredDevice,
        capabilities: CapabilitySet,
    ) -> Result<HidSource, SourceError> {
        HidSource::new(self.api, device, capabilities)
    }
}
