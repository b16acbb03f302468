//! MDIO (Management Data Input/Output) HAL
//!
//! The transceiver side of the driver only ever talks to the EPHY through
//! the [`MdioBus`] trait. The board support crate implements it over
//! whatever MAC or bit-banged SMI controller sits between the SoC and the
//! AC200.
//!
//! Besides the raw bus trait this module provides the IEEE 802.3 Clause 22
//! helpers that are not PHY specific: identifier readout and the indirect
//! MMD access sequence through registers 13/14.

use crate::error::Result;
use crate::internal::phy_regs::standard::{mmd_ctrl, phy_reg};

pub use crate::internal::constants::{MAX_PHY_ADDR, MAX_REG_ADDR};

// =============================================================================
// MDIO Bus Trait
// =============================================================================

/// Trait for MDIO bus operations
///
/// This trait can be implemented by different backends, allowing
/// the PHY driver to work with various MDIO implementations.
///
/// Every call is one blocking bus transaction. Implementations report
/// transport failures as [`IoError::PhyBus`](crate::IoError::PhyBus) and
/// must not retry on the driver's behalf.
pub trait MdioBus {
    /// Read a PHY register
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16>;

    /// Write a PHY register
    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()>;
}

impl<M: MdioBus + ?Sized> MdioBus for &mut M {
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16> {
        (**self).read(phy_addr, reg_addr)
    }

    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()> {
        (**self).write(phy_addr, reg_addr, value)
    }
}

// =============================================================================
// Clause 22 Helpers
// =============================================================================

/// Read the PHY identifier
///
/// Returns a 32-bit value: `(PHYIDR1 << 16) | PHYIDR2`
pub fn read_phy_id<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<u32> {
    let id1 = mdio.read(phy_addr, phy_reg::PHYIDR1)? as u32;
    let id2 = mdio.read(phy_addr, phy_reg::PHYIDR2)? as u32;
    Ok((id1 << 16) | id2)
}

/// Point the MMD data register at `devad.reg`
///
/// Three writes: device address in address mode, register address, then
/// device address in data mode. The final write latches the address; the
/// next MMD_DATA access hits the selected register.
fn mmd_select<M: MdioBus>(mdio: &mut M, phy_addr: u8, devad: u8, reg: u16) -> Result<()> {
    let devad = devad as u16 & mmd_ctrl::DEVAD_MASK;
    mdio.write(phy_addr, phy_reg::MMD_CTRL, mmd_ctrl::FUNC_ADDRESS | devad)?;
    mdio.write(phy_addr, phy_reg::MMD_DATA, reg)?;
    mdio.write(phy_addr, phy_reg::MMD_CTRL, mmd_ctrl::FUNC_DATA | devad)
}

/// Read an MMD register through the Clause 22 indirect access pair
pub fn mmd_read<M: MdioBus>(mdio: &mut M, phy_addr: u8, devad: u8, reg: u16) -> Result<u16> {
    mmd_select(mdio, phy_addr, devad, reg)?;
    mdio.read(phy_addr, phy_reg::MMD_DATA)
}

/// Write an MMD register through the Clause 22 indirect access pair
///
/// The address is re-latched before the data write even if the previous
/// access targeted the same register; the latch does not survive a data
/// access on this class of PHY.
pub fn mmd_write<M: MdioBus>(
    mdio: &mut M,
    phy_addr: u8,
    devad: u8,
    reg: u16,
    value: u16,
) -> Result<()> {
    mmd_select(mdio, phy_addr, devad, reg)?;
    mdio.write(phy_addr, phy_reg::MMD_DATA, value)
}

// =============================================================================
// Unit Tests
// =============================================================================
