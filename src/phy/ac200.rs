//! AC200 EPHY Driver
//!
//! Driver for the 10/100 Ethernet PHY embedded in the X-Powers AC200
//! companion chip (paired with the Allwinner H6).
//!
//! The PHY sits behind the AC200: its power, clock, LED IO and electrical
//! configuration are controlled through companion registers, while the
//! transceiver itself is reached over MDIO. Vendor registers are banked
//! into pages selected through register 0x1f (see [`paged`](super::paged)).
//!
//! # Bring-up order
//!
//! [`Ac200Ephy::config_init`] must run after every soft reset. The step
//! order below is fixed; moving a step changes which page is selected when
//! a write lands.
//!
//! 1. Page 1: disable auto power saving
//! 2. Page 2: clear the AFE TRX trim
//! 3. Page 6: AFE TX, RX and bias tuning
//! 4. Page 8: AFE TRX trim
//! 5. Disable intelligent IEEE power saving, then 802.3az EEE
//! 6. Back to page 0
//! 7. Companion `EPHY_CTL.XMII_SEL` follows the interface mode
//! 8. Page 0 revision fix-up (optional, on by default)
//!
//! # Example
//!
//! ```ignore
//! use ac200_ephy::phy::{Ac200Ephy, PhyDriver};
//!
//! let mut phy = Ac200Ephy::new(&companion, &EphyConfig::new());
//! phy.soft_reset(&mut mdio, &mut delay)?;
//! phy.config_init(&mut mdio)?;
//! ```

use crate::driver::config::{EphyConfig, PhyInterface};
use crate::error::Result;
use crate::hal::companion::CompanionRegisters;
use crate::hal::mdio::{MdioBus, mmd_read, mmd_write, read_phy_id};
use crate::internal::companion_regs::{EPHY_CTL, ephy_ctl};
use crate::internal::phy_regs::ac200::{page, page0, page1, page2, page6, page8, phy_id};
use crate::internal::phy_regs::standard::{eee_adv, mmd, mmd_an};

use super::generic::{DeviceId, PhyDriver, PhyDriverInfo};
use super::paged::{Page, PagedRegs};

// =============================================================================
// AC200 EPHY Constants
// =============================================================================

/// AC200 EPHY identifier
pub const AC200_EPHY_ID: u32 = phy_id::ID;
/// PHY ID mask (ignores revision bits)
pub const AC200_EPHY_ID_MASK: u32 = phy_id::MASK;

/// Name reported to the generic PHY subsystem
pub const AC200_EPHY_NAME: &str = "AC200 EPHY";

/// Descriptor registered with the generic PHY subsystem
pub const AC200_EPHY_DRIVER_INFO: PhyDriverInfo = PhyDriverInfo {
    name: AC200_EPHY_NAME,
    device_id: DeviceId::new(AC200_EPHY_ID, AC200_EPHY_ID_MASK),
};

const PAGE_POWER: Page = Page::new(page::POWER);
const PAGE_AFE_TRX: Page = Page::new(page::AFE_TRX);
const PAGE_AFE_TUNE: Page = Page::new(page::AFE_TUNE);
const PAGE_AFE_TRIM: Page = Page::new(page::AFE_TRIM);

// =============================================================================
// Feature-Disable Sequences
// =============================================================================

/// Disable the vendor "intelligent IEEE" energy detect power saving
///
/// Page 1 register 0x17 bit 3 is cleared. Leaves page 0 selected.
pub fn disable_intelligent_ieee<M: MdioBus>(regs: &mut PagedRegs<'_, M>) -> Result<()> {
    regs.select_page(PAGE_POWER)?;
    regs.modify(page1::IEEE_CTRL, page1::IEEE_EN, 0)?;
    regs.restore_home()
}

/// Disable 802.3az Energy Efficient Ethernet
///
/// Clears the 100BASE-TX EEE advertisement (MMD 7.60 bit 1) through the
/// indirect access pair, then clears page 2 register 0x18. Leaves page 2
/// selected; the caller returns to page 0.
pub fn disable_802_3az_ieee<M: MdioBus>(regs: &mut PagedRegs<'_, M>) -> Result<()> {
    let addr = regs.address();
    let adv = mmd_read(regs.bus(), addr, mmd::AN, mmd_an::EEE_ADV)?;
    mmd_write(
        regs.bus(),
        addr,
        mmd::AN,
        mmd_an::EEE_ADV,
        adv & !eee_adv::ADV_100TX,
    )?;

    regs.select_page(PAGE_AFE_TRX)?;
    regs.write(page2::AFE_TRX, 0x0000)
}

/// Analog front end tuning, steps 1-4 of the bring-up order
///
/// Leaves page 8 selected.
fn tune_afe<M: MdioBus>(regs: &mut PagedRegs<'_, M>) -> Result<()> {
    regs.select_page(PAGE_POWER)?;
    regs.write(page1::APS_CTRL, page1::APS_DISABLE)?;

    regs.select_page(PAGE_AFE_TRX)?;
    regs.write(page2::AFE_TRX, 0x0000)?;

    regs.select_page(PAGE_AFE_TUNE)?;
    regs.write(page6::AFE_TX, page6::AFE_TX_VALUE)?;
    regs.write(page6::AFE_RX, page6::AFE_RX_VALUE)?;
    regs.write(page6::AFE_BIAS, page6::AFE_BIAS_VALUE)?;

    regs.select_page(PAGE_AFE_TRIM)?;
    regs.write(page8::AFE_TRIM, page8::AFE_TRIM_VALUE)
}

/// XMII_SEL value for an interface mode
pub const fn xmii_select(interface: PhyInterface) -> u16 {
    match interface {
        PhyInterface::Rmii => ephy_ctl::XMII_SEL,
        _ => 0,
    }
}

// =============================================================================
// AC200 EPHY Driver
// =============================================================================

/// AC200 EPHY driver
///
/// Holds the borrowed companion handle (needed by `config_init` for the
/// XMII select bit) and the attach-time configuration.
#[derive(Debug)]
pub struct Ac200Ephy<'a, C: CompanionRegisters> {
    companion: &'a C,
    addr: u8,
    interface: PhyInterface,
    apply_revision_fixup: bool,
    reset_timeout_ms: u32,
}

impl<'a, C: CompanionRegisters> Ac200Ephy<'a, C> {
    /// Create a driver bound to `companion`
    pub fn new(companion: &'a C, config: &EphyConfig) -> Self {
        Self {
            companion,
            addr: config.phy_addr,
            interface: config.interface,
            apply_revision_fixup: config.apply_revision_fixup,
            reset_timeout_ms: config.reset_timeout_ms,
        }
    }

    /// Interface mode fixed at attach
    pub fn interface(&self) -> PhyInterface {
        self.interface
    }

    /// Verify this is an AC200 EPHY by reading the PHY ID
    pub fn verify_id<M: MdioBus>(&self, mdio: &mut M) -> Result<bool> {
        let id = read_phy_id(mdio, self.addr)?;
        Ok(AC200_EPHY_DRIVER_INFO.device_id.matches(id))
    }

    /// Get the revision number from PHY ID
    pub fn revision<M: MdioBus>(&self, mdio: &mut M) -> Result<u8> {
        let id = read_phy_id(mdio, self.addr)?;
        Ok((id & 0x0F) as u8)
    }

    /// Select RMII or MII electrical conventions on the companion
    ///
    /// Only `EPHY_CTL.XMII_SEL` is modified.
    fn apply_interface(&self) -> Result<()> {
        self.companion
            .modify(EPHY_CTL, ephy_ctl::XMII_SEL, xmii_select(self.interface))?;
        Ok(())
    }

    /// Page 0 register 0x13 bit 12
    ///
    /// Known to be required on the H6 pairing; applied to every revision
    /// unless disabled in [`EphyConfig`].
    fn revision_fixup<M: MdioBus>(&self, regs: &mut PagedRegs<'_, M>) -> Result<()> {
        regs.modify(page0::FIXUP, 0, page0::FIXUP_BIT)?;
        Ok(())
    }
}

impl<C: CompanionRegisters> PhyDriver for Ac200Ephy<'_, C> {
    const INFO: PhyDriverInfo = AC200_EPHY_DRIVER_INFO;

    fn address(&self) -> u8 {
        self.addr
    }

    fn reset_timeout_ms(&self) -> u32 {
        self.reset_timeout_ms
    }

    fn config_init<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        let mut regs = PagedRegs::new(mdio, self.addr);

        tune_afe(&mut regs)?;
        disable_intelligent_ieee(&mut regs)?;
        disable_802_3az_ieee(&mut regs)?;
        regs.restore_home()?;

        self.apply_interface()?;

        if self.apply_revision_fixup {
            self.revision_fixup(&mut regs)?;
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("{}: configured for {}", AC200_EPHY_NAME, self.interface);

        Ok(())
    }
}
