//! Device binding metadata
//!
//! Identifiers the platform and MDIO buses use to bind this driver, and the
//! platform-side probe entry point.

use crate::error::{ConfigError, ConfigResult, Result};
use crate::hal::companion::CompanionRegisters;
use crate::hal::nvmem::CalibrationStorage;
use crate::phy::ac200::AC200_EPHY_DRIVER_INFO;
use crate::phy::generic::{DeviceId, PhyDriverInfo};

use super::config::EphyConfig;
use super::device::{Ac200EphyDevice, PhyRegistry};

/// Device tree compatible string of the EPHY node
pub const COMPATIBLE: &str = "x-powers,ac200-ephy";

/// Platform driver name
pub const DRIVER_NAME: &str = "ac200-ephy";

/// Compatible strings this driver binds to
pub const OF_MATCH_TABLE: &[&str] = &[COMPATIBLE];

/// PHY identifiers this driver binds to on the MDIO bus
pub const MDIO_DEVICE_TABLE: &[DeviceId] = &[AC200_EPHY_DRIVER_INFO.device_id];

/// Check a device node's compatible string
pub fn match_compatible(compatible: &str) -> ConfigResult<()> {
    if OF_MATCH_TABLE.contains(&compatible) {
        Ok(())
    } else {
        Err(ConfigError::UnknownCompatible)
    }
}

/// Find the driver for a PHY identifier read from the bus
pub fn match_phy_id(phy_id: u32) -> Option<&'static PhyDriverInfo> {
    MDIO_DEVICE_TABLE
        .iter()
        .any(|id| id.matches(phy_id))
        .then_some(&AC200_EPHY_DRIVER_INFO)
}

/// Platform probe
///
/// Matches the node's compatible string, then attaches the device.
pub fn probe<'a, C, S, R>(
    compatible: &str,
    companion: &'a C,
    storage: &mut S,
    registry: &mut R,
    config: &EphyConfig,
) -> Result<Ac200EphyDevice<'a, C>>
where
    C: CompanionRegisters,
    S: CalibrationStorage,
    R: PhyRegistry,
{
    match_compatible(compatible)?;

    #[cfg(feature = "defmt")]
    defmt::debug!("{}: probing {}", DRIVER_NAME, compatible);

    Ac200EphyDevice::attach(companion, storage, registry, config)
}
