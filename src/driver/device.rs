//! AC200 EPHY device lifecycle
//!
//! [`Ac200EphyDevice`] owns the bring-up of the EPHY on the companion side
//! and the registration of the transceiver driver with the generic PHY
//! subsystem.
//!
//! # Lifecycle
//!
//! ```text
//! Unattached -> PoweredUp -> Calibrated -> Registered -> Running
//!      ^                                                    |
//!      +-------------------- detach -----------------------+
//! ```
//!
//! Attach is all-or-nothing from the caller's point of view: the first
//! failure is returned and no device exists afterwards. Companion writes
//! that already landed are not rolled back.
//!
//! # Example
//!
//! ```ignore
//! let config = EphyConfig::new().with_interface(PhyInterface::Rmii);
//! let mut ephy = Ac200EphyDevice::attach(&companion, &mut sid, &mut phys, &config)?;
//!
//! // Later, from the link subsystem
//! ephy.init_hw(&mut mdio, &mut delay)?;
//!
//! // On unbind
//! let report = ephy.detach(&mut phys);
//! ```

use embedded_hal::delay::DelayNs;

use crate::error::{ConfigError, ConfigResult, IoError, IoResult, Result};
use crate::hal::companion::CompanionRegisters;
use crate::hal::mdio::MdioBus;
use crate::hal::nvmem::CalibrationStorage;
use crate::internal::companion_regs::{EPHY_CTL, SYS_EPHY_CTL0, SYS_EPHY_CTL1, ctl0, ctl1, ephy_ctl};
use crate::phy::ac200::{AC200_EPHY_DRIVER_INFO, Ac200Ephy};
use crate::phy::generic::{self, PhyDriver, PhyDriverInfo};

use super::calibration::{CalibrationTrim, load_calibration};
use super::config::{EphyConfig, LifecycleState, PhyInterface};

// =============================================================================
// PHY Registry
// =============================================================================

/// The generic PHY subsystem's driver registry
///
/// Registration makes the driver eligible for binding to a transceiver
/// whose identifier matches [`PhyDriverInfo::device_id`].
pub trait PhyRegistry {
    /// Register a PHY driver
    fn register(&mut self, info: &PhyDriverInfo) -> ConfigResult<()>;

    /// Remove a previously registered driver
    fn unregister(&mut self, info: &PhyDriverInfo);
}

impl<R: PhyRegistry + ?Sized> PhyRegistry for &mut R {
    fn register(&mut self, info: &PhyDriverInfo) -> ConfigResult<()> {
        (**self).register(info)
    }

    fn unregister(&mut self, info: &PhyDriverInfo) {
        (**self).unregister(info);
    }
}

// =============================================================================
// Teardown Report
// =============================================================================

/// Outcome of [`Ac200EphyDevice::detach`]
///
/// Teardown never fails; companion write failures are counted here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TeardownReport {
    /// Number of companion writes that failed
    pub failed_writes: u8,
    /// Most recent failure, if any
    pub last_error: Option<IoError>,
}

impl TeardownReport {
    /// All teardown writes succeeded
    pub const fn is_clean(&self) -> bool {
        self.failed_writes == 0
    }

    fn record(&mut self, result: IoResult<()>) {
        if let Err(e) = result {
            self.failed_writes += 1;
            self.last_error = Some(e);
        }
    }
}

// =============================================================================
// AC200 EPHY Device
// =============================================================================

/// An attached AC200 EPHY
///
/// Created by [`attach`](Self::attach), consumed by [`detach`](Self::detach).
/// Borrows the companion for its whole lifetime; the companion must outlive
/// the device.
#[derive(Debug)]
pub struct Ac200EphyDevice<'a, C: CompanionRegisters> {
    companion: &'a C,
    phy: Ac200Ephy<'a, C>,
    calibration: Option<CalibrationTrim>,
    state: LifecycleState,
}

impl<'a, C: CompanionRegisters> Ac200EphyDevice<'a, C> {
    /// Power up, calibrate and register the EPHY
    ///
    /// Steps, each aborting on failure:
    /// 1. `SYS_EPHY_CTL0`: release reset, ungate the system clock
    /// 2. `SYS_EPHY_CTL1`: enable MII and LED IO
    /// 3. Read the calibration cell
    /// 4. `EPHY_CTL`: LED polarity, clock select, PHY address, trim
    /// 5. Register the transceiver driver
    ///
    /// # Errors
    ///
    /// - `ConfigError::InvalidPhyAddress` before any register is touched
    /// - `IoError::CompanionBus` from steps 1, 2 and 4
    /// - `CalibrationError::*` from step 3, with no `EPHY_CTL` write
    /// - `ConfigError::RegistrationFailed` from step 5
    pub fn attach<S, R>(
        companion: &'a C,
        storage: &mut S,
        registry: &mut R,
        config: &EphyConfig,
    ) -> Result<Self>
    where
        S: CalibrationStorage,
        R: PhyRegistry,
    {
        config.validate()?;

        let mut device = Self {
            companion,
            phy: Ac200Ephy::new(companion, config),
            calibration: None,
            state: LifecycleState::Unattached,
        };

        device.power_up()?;

        let trim = load_calibration(storage)?;
        device.calibration = Some(trim);
        device.state = LifecycleState::Calibrated;

        device.configure(config.phy_addr, trim)?;
        device.register(registry)?;

        #[cfg(feature = "defmt")]
        defmt::info!(
            "{}: attached at address {}, trim {=u16}",
            AC200_EPHY_DRIVER_INFO.name,
            config.phy_addr,
            trim.value()
        );

        Ok(device)
    }

    /// Release reset, ungate the clock, enable the IO lines
    fn power_up(&mut self) -> Result<()> {
        self.companion
            .write(SYS_EPHY_CTL0, ctl0::RESET_INVALID | ctl0::SYSCLK_GATING)?;
        self.companion.write(
            SYS_EPHY_CTL1,
            ctl1::MII_IO_EN | ctl1::LNK_LED_IO_EN | ctl1::SPD_LED_IO_EN | ctl1::DPX_LED_IO_EN,
        )?;

        #[cfg(feature = "defmt")]
        defmt::debug!("EPHY powered up");

        self.state = LifecycleState::PoweredUp;
        Ok(())
    }

    /// Program `EPHY_CTL`
    ///
    /// `XMII_SEL` is left clear; `config_init` sets it from the interface.
    fn configure(&mut self, phy_addr: u8, trim: CalibrationTrim) -> Result<()> {
        let value = ephy_ctl_value(phy_addr, trim);
        self.companion.write(EPHY_CTL, value)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("EPHY_CTL = {:#06x}", value);

        Ok(())
    }

    fn register<R: PhyRegistry>(&mut self, registry: &mut R) -> Result<()> {
        registry.register(&AC200_EPHY_DRIVER_INFO).map_err(|_e| {
            #[cfg(feature = "defmt")]
            defmt::error!("Unable to register phy: {}", _e);
            ConfigError::RegistrationFailed
        })?;

        self.state = LifecycleState::Registered;
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Current lifecycle state
    #[inline(always)]
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Calibration trim applied at attach
    #[inline(always)]
    pub fn calibration(&self) -> Option<CalibrationTrim> {
        self.calibration
    }

    /// Interface mode fixed at attach
    #[inline(always)]
    pub fn interface(&self) -> PhyInterface {
        self.phy.interface()
    }

    /// The registered transceiver driver
    pub fn phy(&self) -> &Ac200Ephy<'a, C> {
        &self.phy
    }

    /// The registered transceiver driver, for direct hook dispatch
    pub fn phy_mut(&mut self) -> &mut Ac200Ephy<'a, C> {
        &mut self.phy
    }

    // =========================================================================
    // Link Subsystem Entry Points
    // =========================================================================

    /// Initialize the transceiver
    ///
    /// Verifies the PHY identifier, soft resets, then runs `config_init`.
    /// May be called again after a previous success; every soft reset must
    /// be followed by `config_init`.
    pub fn init_hw<M: MdioBus, D: DelayNs>(&mut self, mdio: &mut M, delay: &mut D) -> Result<()> {
        if self.state < LifecycleState::Registered {
            return Err(IoError::InvalidState.into());
        }

        generic::init_hw(&mut self.phy, mdio, delay)?;

        self.state = LifecycleState::Running;
        Ok(())
    }

    /// Put the transceiver into BMCR power-down
    pub fn suspend<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        if self.state != LifecycleState::Running {
            return Err(IoError::InvalidState.into());
        }
        self.phy.suspend(mdio)
    }

    /// Take the transceiver out of BMCR power-down
    pub fn resume<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        if self.state != LifecycleState::Running {
            return Err(IoError::InvalidState.into());
        }
        self.phy.resume(mdio)
    }

    // =========================================================================
    // Teardown
    // =========================================================================

    /// Unregister the driver and power the EPHY down
    ///
    /// Each companion write is attempted even if an earlier one failed.
    /// Failures are logged and counted, never returned.
    pub fn detach<R: PhyRegistry>(self, registry: &mut R) -> TeardownReport {
        registry.unregister(&AC200_EPHY_DRIVER_INFO);

        let mut report = TeardownReport::default();
        for (reg, value) in [
            (EPHY_CTL, ephy_ctl::SHUTDOWN),
            (SYS_EPHY_CTL1, 0),
            (SYS_EPHY_CTL0, 0),
        ] {
            let result = self.companion.write(reg, value);

            #[cfg(feature = "defmt")]
            if let Err(e) = result {
                defmt::warn!("EPHY teardown write {:#06x} failed: {}", reg, e);
            }

            report.record(result);
        }

        #[cfg(feature = "defmt")]
        defmt::info!(
            "{}: detached ({} failed writes)",
            AC200_EPHY_DRIVER_INFO.name,
            report.failed_writes
        );

        report
    }
}

/// `EPHY_CTL` value written at attach
pub const fn ephy_ctl_value(phy_addr: u8, trim: CalibrationTrim) -> u16 {
    ephy_ctl::LED_POL | ephy_ctl::CLK_SEL | ephy_ctl::addr(phy_addr) | trim.ephy_ctl_field()
}

// =============================================================================
// Unit Tests
// =============================================================================
