//! Configuration types for the AC200 EPHY driver

use crate::error::{ConfigError, ConfigResult};
use crate::internal::constants::{DEFAULT_PHY_ADDR, MAX_PHY_ADDR, SOFT_RESET_TIMEOUT_MS};

/// PHY interface type
///
/// Supplied by the board's link configuration; fixed for the lifetime of an
/// attached device. Only RMII changes the companion's electrical setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhyInterface {
    /// Media Independent Interface
    Mii,
    /// Reduced Media Independent Interface
    #[default]
    Rmii,
    /// Gigabit Media Independent Interface
    Gmii,
    /// Reduced Gigabit Media Independent Interface
    Rgmii,
    /// On-package connection with no external interface
    Internal,
}

/// AC200 EPHY driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EphyConfig {
    /// MAC to PHY interface mode
    pub interface: PhyInterface,
    /// MDIO address, also programmed into `EPHY_CTL`
    pub phy_addr: u8,
    /// Apply the page 0 register 0x13 bit 12 fix-up in `config_init`
    pub apply_revision_fixup: bool,
    /// Soft reset timeout in milliseconds
    pub reset_timeout_ms: u32,
}

impl Default for EphyConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl EphyConfig {
    /// Create a new configuration with defaults
    #[must_use]
    pub const fn new() -> Self {
        Self {
            interface: PhyInterface::Rmii,
            phy_addr: DEFAULT_PHY_ADDR,
            apply_revision_fixup: true,
            reset_timeout_ms: SOFT_RESET_TIMEOUT_MS,
        }
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    /// Set the PHY interface type
    #[must_use]
    pub const fn with_interface(mut self, interface: PhyInterface) -> Self {
        self.interface = interface;
        self
    }

    /// Set the MDIO address
    #[must_use]
    pub const fn with_phy_addr(mut self, addr: u8) -> Self {
        self.phy_addr = addr;
        self
    }

    /// Enable or disable the revision fix-up
    #[must_use]
    pub const fn with_revision_fixup(mut self, enabled: bool) -> Self {
        self.apply_revision_fixup = enabled;
        self
    }

    /// Set the soft reset timeout
    #[must_use]
    pub const fn with_reset_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.reset_timeout_ms = timeout_ms;
        self
    }

    /// Check the configuration before any register is touched
    pub const fn validate(&self) -> ConfigResult<()> {
        if self.phy_addr > MAX_PHY_ADDR {
            return Err(ConfigError::InvalidPhyAddress);
        }
        Ok(())
    }
}

/// Device lifecycle state
///
/// Attach walks forward through every state up to `Registered`; the link
/// subsystem's first successful `init_hw` moves to `Running`. Detach
/// returns to `Unattached` from any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LifecycleState {
    /// Nothing applied
    #[default]
    Unattached,
    /// Reset released, clocks and IO enabled on the companion
    PoweredUp,
    /// Calibration trim loaded
    Calibrated,
    /// EPHY_CTL written and driver registered
    Registered,
    /// Hardware initialized by the link subsystem
    Running,
}

// =============================================================================
// Unit Tests
// =============================================================================
