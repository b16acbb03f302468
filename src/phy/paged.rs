//! Paged register access
//!
//! The AC200 EPHY extends the 32-register Clause 22 space with numbered
//! pages. Register 0x1f is the page selector on every page; everything else
//! in 0x10-0x1e resolves against whichever page was selected last.
//!
//! # Page discipline
//!
//! [`PagedRegs`] does not remember the selected page. Every caller must
//! select the page it needs immediately before touching a page-local
//! register, and every public sequence in this crate leaves [`Page::HOME`]
//! selected when it returns, because the generic PHY code addresses the
//! IEEE registers without selecting a page first.
//!
//! ```ignore
//! let mut regs = PagedRegs::new(&mut mdio, 1);
//! regs.select_page(Page::new(6))?;
//! regs.write(0x14, 0x708f)?;
//! regs.restore_home()?;
//! ```

use crate::error::{ConfigError, Result};
use crate::hal::mdio::{MAX_REG_ADDR, MdioBus};
use crate::internal::phy_regs::ac200::{PAGE_SELECT, PAGE_SHIFT, page};

/// A page number of the EPHY register space
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Page(u8);

impl Page {
    /// The default page, holding the IEEE registers
    pub const HOME: Self = Self(page::HOME);

    /// Create a page number
    pub const fn new(number: u8) -> Self {
        Self(number)
    }

    /// The page number
    pub const fn number(self) -> u8 {
        self.0
    }

    /// The value written to the page select register for this page
    pub const fn select_value(self) -> u16 {
        (self.0 as u16) << PAGE_SHIFT
    }

    /// Decode a page select register value
    pub const fn from_select_value(value: u16) -> Self {
        Self((value >> PAGE_SHIFT) as u8)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::HOME
    }
}

/// Stateless accessor over one PHY's paged register space
///
/// Holds the bus and the PHY address for the duration of a sequence.
/// Failures propagate unchanged from the bus; nothing is retried.
///
/// Register numbers above 31 and the page select register itself are
/// rejected with [`ConfigError::InvalidRegister`] before the bus is touched;
/// pages change only through [`select_page`](Self::select_page).
#[derive(Debug)]
pub struct PagedRegs<'m, M: MdioBus> {
    mdio: &'m mut M,
    addr: u8,
}

impl<'m, M: MdioBus> PagedRegs<'m, M> {
    /// Wrap a bus for the PHY at `addr`
    pub fn new(mdio: &'m mut M, addr: u8) -> Self {
        Self { mdio, addr }
    }

    /// PHY address this accessor targets
    pub fn address(&self) -> u8 {
        self.addr
    }

    /// Select `page` for the following accesses
    pub fn select_page(&mut self, page: Page) -> Result<()> {
        self.mdio.write(self.addr, PAGE_SELECT, page.select_value())
    }

    /// Select [`Page::HOME`]
    pub fn restore_home(&mut self) -> Result<()> {
        self.select_page(Page::HOME)
    }

    /// Read the page select register
    pub fn current_page(&mut self) -> Result<Page> {
        Ok(Page::from_select_value(self.mdio.read(self.addr, PAGE_SELECT)?))
    }

    /// Read `reg` on the currently selected page
    pub fn read(&mut self, reg: u8) -> Result<u16> {
        check_reg(reg)?;
        self.mdio.read(self.addr, reg)
    }

    /// Write `reg` on the currently selected page
    pub fn write(&mut self, reg: u8, value: u16) -> Result<()> {
        check_reg(reg)?;
        self.mdio.write(self.addr, reg, value)
    }

    /// Read-modify-write `reg` on the currently selected page
    ///
    /// Clears `clear`, then sets `set`. Returns the value written.
    pub fn modify(&mut self, reg: u8, clear: u16, set: u16) -> Result<u16> {
        let value = (self.read(reg)? & !clear) | set;
        self.write(reg, value)?;
        Ok(value)
    }

    /// Read `reg` on `page`, then return to [`Page::HOME`]
    pub fn read_paged(&mut self, page: Page, reg: u8) -> Result<u16> {
        self.select_page(page)?;
        let value = self.read(reg)?;
        self.restore_home()?;
        Ok(value)
    }

    /// Write `reg` on `page`, then return to [`Page::HOME`]
    pub fn write_paged(&mut self, page: Page, reg: u8, value: u16) -> Result<()> {
        self.select_page(page)?;
        self.write(reg, value)?;
        self.restore_home()
    }

    /// Borrow the underlying bus for accesses that bypass paging
    pub fn bus(&mut self) -> &mut M {
        self.mdio
    }
}

fn check_reg(reg: u8) -> Result<()> {
    if reg > MAX_REG_ADDR || reg == PAGE_SELECT {
        return Err(ConfigError::InvalidRegister.into());
    }
    Ok(())
}
