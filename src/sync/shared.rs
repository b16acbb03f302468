//! ISR-safe companion register wrapper using critical sections.
//!
//! Provides [`SharedCompanion`], which turns an exclusively borrowed
//! [`CompanionBus`] into a [`CompanionRegisters`] handle that sibling
//! drivers of the same AC200 can share.

use super::primitives::CriticalSectionCell;
use crate::error::IoResult;
use crate::hal::companion::{CompanionBus, CompanionRegisters, apply_mask};

/// ISR-safe companion wrapper using critical sections.
///
/// Every [`write`](CompanionRegisters::write) and
/// [`modify`](CompanionRegisters::modify) runs inside one
/// `critical_section::with()`, so a modify's read and write cannot be split
/// by another driver. No lock is held between calls.
///
/// # Example
///
/// ```ignore
/// static AC200: SharedCompanion<Ac200I2c> = SharedCompanion::new(Ac200I2c::new());
///
/// let ephy = Ac200EphyDevice::attach(&AC200, &mut sid, &mut phys, &config)?;
/// AC200.with(|bus| codec_init(bus));
/// ```
pub struct SharedCompanion<B> {
    inner: CriticalSectionCell<B>,
}

impl<B: CompanionBus> SharedCompanion<B> {
    /// Create a new shared companion (const, suitable for static initialization).
    pub const fn new(bus: B) -> Self {
        Self {
            inner: CriticalSectionCell::new(bus),
        }
    }

    /// Execute a closure with exclusive access to the raw bus.
    ///
    /// Interrupts are disabled for the duration of the closure.
    #[inline]
    pub fn with<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut B) -> R,
    {
        self.inner.with(f)
    }

    /// Try to execute a closure, returning `None` if already borrowed.
    #[inline]
    pub fn try_with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut B) -> R,
    {
        self.inner.try_with(f)
    }

    /// Release the raw bus.
    pub fn into_inner(self) -> B {
        self.inner.into_inner()
    }
}

impl<B: CompanionBus> CompanionRegisters for SharedCompanion<B> {
    fn write(&self, reg: u16, value: u16) -> IoResult<()> {
        self.inner.with(|bus| bus.write(reg, value))
    }

    fn modify(&self, reg: u16, mask: u16, value: u16) -> IoResult<()> {
        self.inner.with(|bus| {
            let current = bus.read(reg)?;
            bus.write(reg, apply_mask(current, mask, value))
        })
    }
}
