//! Generic PHY Driver Trait
//!
//! This module defines the hook set a PHY driver hands to the generic PHY
//! subsystem: soft reset, post-reset configuration, suspend and resume.
//! Every hook has a default implementation built on the IEEE 802.3
//! Clause 22 registers, so a driver only overrides what its silicon needs.

use embedded_hal::delay::DelayNs;

use crate::error::{ConfigError, Result};
use crate::hal::mdio::{MdioBus, read_phy_id};
use crate::internal::constants::SOFT_RESET_TIMEOUT_MS;

// =============================================================================
// Device Identification
// =============================================================================

/// PHY identifier and the mask of bits that must match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceId {
    /// Identifier value (`PHYIDR1 << 16 | PHYIDR2`)
    pub id: u32,
    /// Bits of the identifier that are compared
    pub mask: u32,
}

impl DeviceId {
    /// Create a device id with an explicit mask
    pub const fn new(id: u32, mask: u32) -> Self {
        Self { id, mask }
    }

    /// Check whether an identifier read from the bus belongs to this driver
    pub const fn matches(&self, phy_id: u32) -> bool {
        (phy_id & self.mask) == (self.id & self.mask)
    }
}

/// Static description of a PHY driver, as registered with the subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhyDriverInfo {
    /// Human readable PHY name
    pub name: &'static str,
    /// Identifier this driver binds to
    pub device_id: DeviceId,
}

// =============================================================================
// PHY Driver Trait
// =============================================================================

/// Hooks a PHY driver exposes to the generic PHY subsystem
///
/// The subsystem calls [`soft_reset`](Self::soft_reset) and then
/// [`config_init`](Self::config_init) whenever it (re)initializes the
/// hardware, and [`suspend`](Self::suspend)/[`resume`](Self::resume) around
/// power transitions. The subsystem never reenters a hook.
///
/// # Example Implementation
///
/// ```ignore
/// struct MyPhy {
///     addr: u8,
/// }
///
/// impl PhyDriver for MyPhy {
///     const INFO: PhyDriverInfo = PhyDriverInfo {
///         name: "My PHY",
///         device_id: DeviceId::new(0x0012_3450, 0xffff_fff0),
///     };
///
///     fn address(&self) -> u8 { self.addr }
///
///     fn config_init<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
///         mdio.write(self.addr, 0x1b, 0x0001)
///     }
/// }
/// ```
pub trait PhyDriver {
    /// Driver descriptor
    const INFO: PhyDriverInfo;

    /// Get the PHY address (0-31)
    fn address(&self) -> u8;

    /// Soft reset budget in milliseconds
    fn reset_timeout_ms(&self) -> u32 {
        SOFT_RESET_TIMEOUT_MS
    }

    /// Perform a soft reset
    ///
    /// Writes BMCR.RESET and waits for it to self-clear.
    fn soft_reset<M: MdioBus, D: DelayNs>(&mut self, mdio: &mut M, delay: &mut D) -> Result<()> {
        ieee802_3::soft_reset(mdio, self.address(), delay, self.reset_timeout_ms())
    }

    /// Post-reset configuration
    ///
    /// Runs after every soft reset, before the link is considered usable.
    fn config_init<M: MdioBus>(&mut self, _mdio: &mut M) -> Result<()> {
        Ok(())
    }

    /// Enter low power mode
    fn suspend<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        ieee802_3::suspend(mdio, self.address())
    }

    /// Leave low power mode
    fn resume<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        ieee802_3::resume(mdio, self.address())
    }
}

/// Bring a bound PHY into a usable state
///
/// This is the subsystem side of the hook contract: the identifier is
/// checked first, and a mismatch returns [`ConfigError::IdMismatch`]
/// before any register is written. Then the soft reset hook runs, followed
/// by `config_init`.
pub fn init_hw<P, M, D>(phy: &mut P, mdio: &mut M, delay: &mut D) -> Result<()>
where
    P: PhyDriver,
    M: MdioBus,
    D: DelayNs,
{
    let id = read_phy_id(mdio, phy.address())?;
    if !P::INFO.device_id.matches(id) {
        #[cfg(feature = "defmt")]
        defmt::warn!(
            "{}: PHY id {:#010x} does not match {:#010x}",
            P::INFO.name,
            id,
            P::INFO.device_id.id
        );
        return Err(ConfigError::IdMismatch.into());
    }

    phy.soft_reset(mdio, delay)?;
    phy.config_init(mdio)
}

// =============================================================================
// Default Implementations
// =============================================================================

/// Helper functions using standard IEEE 802.3 registers
pub mod ieee802_3 {
    use super::*;
    use crate::error::IoError;
    use crate::internal::constants::RESET_POLL_INTERVAL_US;
    use crate::internal::phy_regs::standard::{bmcr, phy_reg};

    /// Perform soft reset via BMCR
    ///
    /// Clears power-down, sets reset, then polls until the bit self-clears
    /// or `timeout_ms` elapses.
    pub fn soft_reset<M: MdioBus, D: DelayNs>(
        mdio: &mut M,
        phy_addr: u8,
        delay: &mut D,
        timeout_ms: u32,
    ) -> Result<()> {
        let bmcr_val = mdio.read(phy_addr, phy_reg::BMCR)?;
        mdio.write(
            phy_addr,
            phy_reg::BMCR,
            (bmcr_val & !bmcr::POWER_DOWN) | bmcr::RESET,
        )?;

        let max_polls = (timeout_ms.saturating_mul(1000) / RESET_POLL_INTERVAL_US).max(1);
        for _ in 0..max_polls {
            let bmcr_val = mdio.read(phy_addr, phy_reg::BMCR)?;
            if (bmcr_val & bmcr::RESET) == 0 {
                return Ok(());
            }
            delay.delay_us(RESET_POLL_INTERVAL_US);
        }

        Err(IoError::Timeout.into())
    }

    /// Set BMCR.POWER_DOWN
    pub fn suspend<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<()> {
        let bmcr_val = mdio.read(phy_addr, phy_reg::BMCR)?;
        mdio.write(phy_addr, phy_reg::BMCR, bmcr_val | bmcr::POWER_DOWN)
    }

    /// Clear BMCR.POWER_DOWN
    pub fn resume<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<()> {
        let bmcr_val = mdio.read(phy_addr, phy_reg::BMCR)?;
        mdio.write(phy_addr, phy_reg::BMCR, bmcr_val & !bmcr::POWER_DOWN)
    }

    /// Check BMCR.POWER_DOWN
    pub fn is_powered_down<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<bool> {
        let bmcr_val = mdio.read(phy_addr, phy_reg::BMCR)?;
        Ok((bmcr_val & bmcr::POWER_DOWN) != 0)
    }
}
