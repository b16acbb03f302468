//! Testing utilities and mock implementations
//!
//! This module provides mock implementations for testing the EPHY driver
//! on the host without hardware access.
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(dead_code)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use core::cell::RefCell;
use std::collections::HashMap;
use std::string::String;
use std::vec::Vec;

use crate::driver::device::PhyRegistry;
use crate::error::{ConfigError, ConfigResult, IoError, IoResult, Result};
use crate::hal::companion::{CompanionBus, CompanionRegisters, apply_mask};
use crate::hal::mdio::MdioBus;
use crate::hal::nvmem::{CalibrationStorage, CellError};
use crate::internal::phy_regs::ac200::{PAGE_SELECT, PAGE_SHIFT};
use crate::internal::phy_regs::standard::{bmcr, mmd_ctrl, phy_reg};
use crate::phy::generic::PhyDriverInfo;

/// First register whose meaning depends on the selected page
const FIRST_PAGED_REG: u8 = 0x10;

// =============================================================================
// Mock MDIO Bus
// =============================================================================

/// Indirect MMD access state of one PHY
#[derive(Debug, Default, Clone, Copy)]
struct MmdLatch {
    devad: u8,
    reg: u16,
    data_mode: bool,
}

/// Mock MDIO bus for testing PHY drivers without hardware
///
/// Models the parts of the EPHY register space the driver relies on:
/// - registers 0x10-0x1e are banked by the page selected through 0x1f
/// - registers 13/14 implement Clause 22 indirect MMD access
/// - BMCR.RESET self-clears unless [`set_reset_stuck`](Self::set_reset_stuck)
///
/// Only successful writes are logged.
///
/// # Example
///
/// ```ignore
/// let mut mdio = MockMdioBus::new();
/// mdio.set_phy_id(1, 0x0044_1400);
/// mdio.set_paged_register(1, 1, 0x17, 0x0008);
///
/// phy.config_init(&mut mdio).unwrap();
/// assert_eq!(mdio.current_page(1), 0);
/// ```
#[derive(Debug, Default)]
pub struct MockMdioBus {
    /// Register values: (phy_addr, page, reg_addr) -> value
    registers: RefCell<HashMap<(u8, u8, u8), u16>>,
    /// Selected page per PHY
    pages: RefCell<HashMap<u8, u8>>,
    /// MMD register values: (phy_addr, devad, reg) -> value
    mmd: RefCell<HashMap<(u8, u8, u16), u16>>,
    /// MMD address latch per PHY
    mmd_latch: RefCell<HashMap<u8, MmdLatch>>,
    /// Record of writes: (phy_addr, reg_addr, value)
    write_log: RefCell<Vec<(u8, u8, u16)>>,
    /// Accesses attempted so far
    accesses: RefCell<usize>,
    /// Access count after which every access fails
    fail_at: RefCell<Option<usize>>,
    /// Whether BMCR.RESET sticks
    reset_stuck: RefCell<bool>,
}

impl MockMdioBus {
    /// Create a new mock MDIO bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a page 0 register value
    pub fn set_register(&self, phy_addr: u8, reg_addr: u8, value: u16) {
        self.set_paged_register(phy_addr, 0, reg_addr, value);
    }

    /// Get the current value of a page 0 register (for test verification)
    pub fn get_register(&self, phy_addr: u8, reg_addr: u8) -> Option<u16> {
        self.get_paged_register(phy_addr, 0, reg_addr)
    }

    /// Set a register value on a specific page
    pub fn set_paged_register(&self, phy_addr: u8, page: u8, reg_addr: u8, value: u16) {
        self.registers
            .borrow_mut()
            .insert((phy_addr, page, reg_addr), value);
    }

    /// Get a register value on a specific page
    pub fn get_paged_register(&self, phy_addr: u8, page: u8, reg_addr: u8) -> Option<u16> {
        self.registers
            .borrow()
            .get(&(phy_addr, page, reg_addr))
            .copied()
    }

    /// Set an MMD register value
    pub fn set_mmd_register(&self, phy_addr: u8, devad: u8, reg: u16, value: u16) {
        self.mmd.borrow_mut().insert((phy_addr, devad, reg), value);
    }

    /// Get an MMD register value
    pub fn get_mmd_register(&self, phy_addr: u8, devad: u8, reg: u16) -> Option<u16> {
        self.mmd.borrow().get(&(phy_addr, devad, reg)).copied()
    }

    /// Set both identifier registers
    pub fn set_phy_id(&self, phy_addr: u8, id: u32) {
        self.set_register(phy_addr, phy_reg::PHYIDR1, (id >> 16) as u16);
        self.set_register(phy_addr, phy_reg::PHYIDR2, id as u16);
    }

    /// Page currently selected on a PHY
    pub fn current_page(&self, phy_addr: u8) -> u8 {
        self.pages.borrow().get(&phy_addr).copied().unwrap_or(0)
    }

    /// Get all writes that have been made
    pub fn get_writes(&self) -> Vec<(u8, u8, u16)> {
        self.write_log.borrow().clone()
    }

    /// Clear the write log
    pub fn clear_writes(&self) {
        self.write_log.borrow_mut().clear();
    }

    /// Let `n` more accesses succeed, then fail every access
    pub fn fail_after(&self, n: usize) {
        let accesses = *self.accesses.borrow();
        *self.fail_at.borrow_mut() = Some(accesses + n);
    }

    /// Keep BMCR.RESET set after it is written
    pub fn set_reset_stuck(&self, stuck: bool) {
        *self.reset_stuck.borrow_mut() = stuck;
    }

    fn check_access(&self) -> Result<()> {
        let mut accesses = self.accesses.borrow_mut();
        let failing = matches!(*self.fail_at.borrow(), Some(limit) if *accesses >= limit);
        *accesses += 1;
        if failing {
            Err(IoError::PhyBus.into())
        } else {
            Ok(())
        }
    }

    fn page_for(&self, phy_addr: u8, reg_addr: u8) -> u8 {
        if reg_addr >= FIRST_PAGED_REG && reg_addr != PAGE_SELECT {
            self.current_page(phy_addr)
        } else {
            0
        }
    }

    fn latch(&self, phy_addr: u8) -> MmdLatch {
        self.mmd_latch
            .borrow()
            .get(&phy_addr)
            .copied()
            .unwrap_or_default()
    }
}

impl MdioBus for MockMdioBus {
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16> {
        self.check_access()?;

        if reg_addr == PAGE_SELECT {
            return Ok((self.current_page(phy_addr) as u16) << PAGE_SHIFT);
        }

        if reg_addr == phy_reg::MMD_DATA {
            let latch = self.latch(phy_addr);
            if latch.data_mode {
                return Ok(self
                    .get_mmd_register(phy_addr, latch.devad, latch.reg)
                    .unwrap_or(0));
            }
        }

        // Return from register map (default 0 if not set)
        let page = self.page_for(phy_addr, reg_addr);
        Ok(self
            .get_paged_register(phy_addr, page, reg_addr)
            .unwrap_or(0))
    }

    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()> {
        self.check_access()?;

        // Log the write
        self.write_log
            .borrow_mut()
            .push((phy_addr, reg_addr, value));

        match reg_addr {
            PAGE_SELECT => {
                self.pages
                    .borrow_mut()
                    .insert(phy_addr, (value >> PAGE_SHIFT) as u8);
            }
            phy_reg::MMD_CTRL => {
                let mut latch = self.latch(phy_addr);
                latch.devad = (value & mmd_ctrl::DEVAD_MASK) as u8;
                latch.data_mode = (value & mmd_ctrl::FUNC_MASK) != mmd_ctrl::FUNC_ADDRESS;
                self.mmd_latch.borrow_mut().insert(phy_addr, latch);
            }
            phy_reg::MMD_DATA => {
                let mut latch = self.latch(phy_addr);
                if latch.data_mode {
                    self.set_mmd_register(phy_addr, latch.devad, latch.reg, value);
                } else {
                    latch.reg = value;
                    self.mmd_latch.borrow_mut().insert(phy_addr, latch);
                }
            }
            phy_reg::BMCR => {
                let value = if *self.reset_stuck.borrow() {
                    value
                } else {
                    value & !bmcr::RESET
                };
                self.set_register(phy_addr, reg_addr, value);
            }
            _ => {
                let page = self.page_for(phy_addr, reg_addr);
                self.set_paged_register(phy_addr, page, reg_addr, value);
            }
        }

        Ok(())
    }
}

// =============================================================================
// Mock Companion
// =============================================================================

/// Mock companion register file behind a shared handle
///
/// Successful writes and modifies are logged separately; a failed access
/// leaves no trace except the returned error.
#[derive(Debug, Default)]
pub struct MockCompanion {
    registers: RefCell<HashMap<u16, u16>>,
    /// (reg, value)
    write_log: RefCell<Vec<(u16, u16)>>,
    /// (reg, mask, value)
    modify_log: RefCell<Vec<(u16, u16, u16)>>,
    accesses: RefCell<usize>,
    fail_at: RefCell<Option<usize>>,
}

impl MockCompanion {
    /// Create a new mock companion
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a register value
    pub fn set_register(&self, reg: u16, value: u16) {
        self.registers.borrow_mut().insert(reg, value);
    }

    /// Get the current value of a register
    pub fn get_register(&self, reg: u16) -> Option<u16> {
        self.registers.borrow().get(&reg).copied()
    }

    /// Get all successful writes
    pub fn get_writes(&self) -> Vec<(u16, u16)> {
        self.write_log.borrow().clone()
    }

    /// Get all successful modifies
    pub fn get_modifies(&self) -> Vec<(u16, u16, u16)> {
        self.modify_log.borrow().clone()
    }

    /// Clear the write and modify logs
    pub fn clear_writes(&self) {
        self.write_log.borrow_mut().clear();
        self.modify_log.borrow_mut().clear();
    }

    /// Fail the `n`th access from now (1-based), and only that one
    pub fn fail_on_access(&self, n: usize) {
        let accesses = *self.accesses.borrow();
        *self.fail_at.borrow_mut() = Some(accesses + n);
    }

    fn check_access(&self) -> IoResult<()> {
        let mut accesses = self.accesses.borrow_mut();
        *accesses += 1;
        if *self.fail_at.borrow() == Some(*accesses) {
            Err(IoError::CompanionBus)
        } else {
            Ok(())
        }
    }
}

impl CompanionRegisters for MockCompanion {
    fn write(&self, reg: u16, value: u16) -> IoResult<()> {
        self.check_access()?;
        self.write_log.borrow_mut().push((reg, value));
        self.set_register(reg, value);
        Ok(())
    }

    fn modify(&self, reg: u16, mask: u16, value: u16) -> IoResult<()> {
        self.check_access()?;
        self.modify_log.borrow_mut().push((reg, mask, value));
        let current = self.get_register(reg).unwrap_or(0);
        self.set_register(reg, apply_mask(current, mask, value));
        Ok(())
    }
}

/// Mock raw companion bus
#[derive(Debug, Default)]
pub struct MockCompanionBus {
    registers: HashMap<u16, u16>,
    write_log: Vec<(u16, u16)>,
    reads: usize,
    failing: bool,
}

impl MockCompanionBus {
    /// Create a new mock bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a register value
    pub fn set_register(&mut self, reg: u16, value: u16) {
        self.registers.insert(reg, value);
    }

    /// Get the current value of a register
    pub fn get_register(&self, reg: u16) -> Option<u16> {
        self.registers.get(&reg).copied()
    }

    /// Get all successful writes
    pub fn get_writes(&self) -> Vec<(u16, u16)> {
        self.write_log.clone()
    }

    /// Number of successful reads
    pub fn reads(&self) -> usize {
        self.reads
    }

    /// Make every access fail
    pub fn set_failing(&mut self, failing: bool) {
        self.failing = failing;
    }
}

impl CompanionBus for MockCompanionBus {
    fn read(&mut self, reg: u16) -> IoResult<u16> {
        if self.failing {
            return Err(IoError::CompanionBus);
        }
        self.reads += 1;
        Ok(self.get_register(reg).unwrap_or(0))
    }

    fn write(&mut self, reg: u16, value: u16) -> IoResult<()> {
        if self.failing {
            return Err(IoError::CompanionBus);
        }
        self.write_log.push((reg, value));
        self.registers.insert(reg, value);
        Ok(())
    }
}

// =============================================================================
// Mock Calibration Storage
// =============================================================================

/// Mock named-cell storage
#[derive(Debug, Default)]
pub struct MockStorage {
    cells: HashMap<String, Vec<u8>>,
    read_error: Option<CellError>,
    read_log: Vec<String>,
}

impl MockStorage {
    /// Create an empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage holding one cell
    pub fn with_cell(name: &str, bytes: &[u8]) -> Self {
        let mut storage = Self::new();
        storage.cells.insert(String::from(name), bytes.to_vec());
        storage
    }

    /// Make every read fail with `error`
    pub fn set_read_error(&mut self, error: CellError) {
        self.read_error = Some(error);
    }

    /// Names of the cells read so far
    pub fn reads(&self) -> Vec<String> {
        self.read_log.clone()
    }
}

impl CalibrationStorage for MockStorage {
    fn read_cell(&mut self, name: &str, buf: &mut [u8]) -> core::result::Result<usize, CellError> {
        self.read_log.push(String::from(name));

        if let Some(error) = self.read_error {
            return Err(error);
        }

        let cell = self.cells.get(name).ok_or(CellError::NotFound)?;
        let n = cell.len().min(buf.len());
        buf[..n].copy_from_slice(&cell[..n]);
        Ok(cell.len())
    }
}

// =============================================================================
// Mock PHY Registry
// =============================================================================

/// Mock generic PHY driver registry
#[derive(Debug, Default)]
pub struct MockRegistry {
    registered: Vec<&'static str>,
    unregistered: Vec<&'static str>,
    reject: bool,
}

impl MockRegistry {
    /// Create a registry that accepts every driver
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every registration
    pub fn reject(&mut self) {
        self.reject = true;
    }

    /// Names of registered drivers
    pub fn registered(&self) -> Vec<&'static str> {
        self.registered.clone()
    }

    /// Names of unregistered drivers
    pub fn unregistered(&self) -> Vec<&'static str> {
        self.unregistered.clone()
    }
}

impl PhyRegistry for MockRegistry {
    fn register(&mut self, info: &PhyDriverInfo) -> ConfigResult<()> {
        if self.reject {
            return Err(ConfigError::RegistrationFailed);
        }
        self.registered.push(info.name);
        Ok(())
    }

    fn unregister(&mut self, info: &PhyDriverInfo) {
        self.unregistered.push(info.name);
    }
}

// =============================================================================
// Mock Delay
// =============================================================================

/// Mock delay for testing without actual timing
///
/// Records delays for verification without actually waiting.
#[derive(Debug, Default)]
pub struct MockDelay {
    /// Total nanoseconds delayed
    total_ns: RefCell<u64>,
}

impl MockDelay {
    /// Create a new mock delay
    pub fn new() -> Self {
        Self::default()
    }

    /// Get total nanoseconds that were "delayed"
    pub fn total_ns(&self) -> u64 {
        *self.total_ns.borrow()
    }

    /// Get total milliseconds that were "delayed"
    pub fn total_ms(&self) -> u64 {
        self.total_ns() / 1_000_000
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        *self.total_ns.borrow_mut() += ns as u64;
    }
}

// =============================================================================
// Test Assertions
// =============================================================================

/// Assert that a register was written with a specific value
#[macro_export]
macro_rules! assert_reg_written {
    ($mdio:expr, $phy:expr, $reg:expr, $value:expr) => {
        let writes = $mdio.get_writes();
        assert!(
            writes
                .iter()
                .any(|w| w.0 == $phy && w.1 == $reg && w.2 == $value),
            "Expected write to PHY {} reg {} with value 0x{:04X}, but got: {:?}",
            $phy,
            $reg,
            $value,
            writes
        );
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::delay::DelayNs;
    use std::vec;

    #[test]
    fn mock_mdio_read_write() {
        let mut mdio = MockMdioBus::new();

        // Initially reads 0
        assert_eq!(mdio.read(0, 1).unwrap(), 0);

        mdio.set_register(0, 1, 0x1234);
        assert_eq!(mdio.read(0, 1).unwrap(), 0x1234);

        mdio.write(0, 1, 0x5678).unwrap();
        assert_eq!(mdio.read(0, 1).unwrap(), 0x5678);

        assert_eq!(mdio.get_writes(), vec![(0, 1, 0x5678)]);
    }

    #[test]
    fn mock_mdio_banks_high_registers_by_page() {
        let mut mdio = MockMdioBus::new();

        mdio.write(1, 0x1f, 0x0600).unwrap();
        mdio.write(1, 0x13, 0xf000).unwrap();
        mdio.write(1, 0x1f, 0x0000).unwrap();
        mdio.write(1, 0x13, 0x1000).unwrap();

        assert_eq!(mdio.get_paged_register(1, 6, 0x13), Some(0xf000));
        assert_eq!(mdio.get_paged_register(1, 0, 0x13), Some(0x1000));
        assert_eq!(mdio.read(1, 0x1f).unwrap(), 0x0000);
    }

    #[test]
    fn mock_mdio_low_registers_ignore_page() {
        let mut mdio = MockMdioBus::new();
        mdio.set_register(1, phy_reg::PHYIDR1, 0x0044);

        mdio.write(1, 0x1f, 0x0200).unwrap();

        assert_eq!(mdio.read(1, phy_reg::PHYIDR1).unwrap(), 0x0044);
    }

    #[test]
    fn mock_mdio_reset_self_clears() {
        let mut mdio = MockMdioBus::new();
        mdio.write(0, phy_reg::BMCR, bmcr::RESET | bmcr::AN_ENABLE).unwrap();
        assert_eq!(mdio.read(0, phy_reg::BMCR).unwrap(), bmcr::AN_ENABLE);

        mdio.set_reset_stuck(true);
        mdio.write(0, phy_reg::BMCR, bmcr::RESET).unwrap();
        assert_eq!(mdio.read(0, phy_reg::BMCR).unwrap(), bmcr::RESET);
    }

    #[test]
    fn mock_mdio_fail_after() {
        let mut mdio = MockMdioBus::new();
        mdio.fail_after(1);

        assert!(mdio.write(0, 0, 0).is_ok());
        assert_eq!(mdio.read(0, 0), Err(IoError::PhyBus.into()));
        assert_eq!(mdio.get_writes().len(), 1);
    }

    #[test]
    fn mock_companion_fails_only_selected_access() {
        let companion = MockCompanion::new();
        companion.fail_on_access(2);

        assert!(companion.write(0x0016, 3).is_ok());
        assert_eq!(companion.write(0x0018, 0xf), Err(IoError::CompanionBus));
        assert!(companion.modify(0x6000, 0x0800, 0x0800).is_ok());

        assert_eq!(companion.get_writes(), vec![(0x0016, 3)]);
        assert_eq!(companion.get_register(0x6000), Some(0x0800));
    }

    #[test]
    fn mock_storage_reports_full_length() {
        let mut storage = MockStorage::with_cell("ephy_calib", &[1, 2, 3, 4]);
        let mut buf = [0u8; 2];

        assert_eq!(storage.read_cell("ephy_calib", &mut buf), Ok(4));
        assert_eq!(buf, [1, 2]);
        assert_eq!(storage.read_cell("missing", &mut buf), Err(CellError::NotFound));
    }

    #[test]
    fn mock_delay_tracking() {
        let mut delay = MockDelay::new();

        delay.delay_ns(1000);
        delay.delay_ns(2000);
        assert_eq!(delay.total_ns(), 3000);
        assert_eq!(delay.total_ms(), 0);

        delay.delay_us(12_000);
        assert_eq!(delay.total_ms(), 12);
    }
}
