//! AC200 companion device register access
//!
//! The AC200 exposes power, clock and IO enables for the EPHY through its
//! own register file. That register file is shared with the sibling codec,
//! RTC and pinctrl drivers, so this driver receives it as a borrowed
//! capability rather than owning it.
//!
//! Register addresses used by this crate are re-exported in [`reg`].

use crate::error::IoResult;

/// Companion register addresses owned by the EPHY driver
pub mod reg {
    pub use crate::internal::companion_regs::{EPHY_CTL, SYS_EPHY_CTL0, SYS_EPHY_CTL1};
}

/// EPHY_CTL field encoders and bits
pub mod ephy_ctl {
    pub use crate::internal::companion_regs::ephy_ctl::{
        CLK_SEL, LED_POL, SHUTDOWN, XMII_SEL, addr, calib,
    };
}

/// Register access to the companion device
///
/// Each call must be a single atomic access at the companion's register
/// layer. Callers get no atomicity across calls.
///
/// Methods take `&self` because the same handle is shared between every
/// driver bound to the companion; implementations provide their own
/// interior mutability (see `SharedCompanion` behind the
/// `critical-section` feature).
pub trait CompanionRegisters {
    /// Overwrite a companion register
    fn write(&self, reg: u16, value: u16) -> IoResult<()>;

    /// Replace the bits selected by `mask` with the same bits of `value`
    fn modify(&self, reg: u16, mask: u16, value: u16) -> IoResult<()>;
}

impl<C: CompanionRegisters + ?Sized> CompanionRegisters for &C {
    fn write(&self, reg: u16, value: u16) -> IoResult<()> {
        (**self).write(reg, value)
    }

    fn modify(&self, reg: u16, mask: u16, value: u16) -> IoResult<()> {
        (**self).modify(reg, mask, value)
    }
}

/// Raw, exclusively borrowed access to a companion register file
///
/// This is the shape a bus-level AC200 implementation naturally has
/// (`&mut self`, plain read and write). Wrap it in `SharedCompanion` to
/// obtain a [`CompanionRegisters`] handle.
pub trait CompanionBus {
    /// Read a companion register
    fn read(&mut self, reg: u16) -> IoResult<u16>;

    /// Write a companion register
    fn write(&mut self, reg: u16, value: u16) -> IoResult<()>;
}

/// Compute the value a masked modify writes back
#[inline(always)]
pub const fn apply_mask(current: u16, mask: u16, value: u16) -> u16 {
    (current & !mask) | (value & mask)
}
