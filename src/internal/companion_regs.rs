//! AC200 Companion Register Definitions
//!
//! The three companion registers this driver owns. Every other register in
//! the AC200 register file belongs to sibling drivers and is never touched.
//!
//! | Address | Name | Description |
//! |---------|------|-------------|
//! | 0x0016 | SYS_EPHY_CTL0 | EPHY reset and system clock gate |
//! | 0x0018 | SYS_EPHY_CTL1 | EPHY MII and LED IO enables |
//! | 0x6000 | EPHY_CTL | EPHY electrical configuration |

#![allow(dead_code)]

/// System EPHY control 0 register
pub const SYS_EPHY_CTL0: u16 = 0x0016;
/// System EPHY control 1 register
pub const SYS_EPHY_CTL1: u16 = 0x0018;
/// EPHY control register
pub const EPHY_CTL: u16 = 0x6000;

/// SYS_EPHY_CTL0 bits
pub mod ctl0 {
    /// Release the EPHY from reset
    pub const RESET_INVALID: u16 = 1 << 0;
    /// Ungate the EPHY system clock
    pub const SYSCLK_GATING: u16 = 1 << 1;
}

/// SYS_EPHY_CTL1 bits
pub mod ctl1 {
    /// Enable the MII IO path
    pub const MII_IO_EN: u16 = 1 << 0;
    /// Enable the link LED IO
    pub const LNK_LED_IO_EN: u16 = 1 << 1;
    /// Enable the speed LED IO
    pub const SPD_LED_IO_EN: u16 = 1 << 2;
    /// Enable the duplex LED IO
    pub const DPX_LED_IO_EN: u16 = 1 << 3;
}

/// EPHY_CTL bits and fields
pub mod ephy_ctl {
    /// Power the EPHY down
    pub const SHUTDOWN: u16 = 1 << 0;
    /// Invert LED polarity
    pub const LED_POL: u16 = 1 << 1;
    /// Clock source select
    pub const CLK_SEL: u16 = 1 << 2;
    /// MDIO address field shift (bits 8:4)
    pub const ADDR_SHIFT: u16 = 4;
    /// MDIO address field mask (unshifted)
    pub const ADDR_MASK: u16 = 0x1f;
    /// Select RMII electrical conventions
    pub const XMII_SEL: u16 = 1 << 11;
    /// Calibration field shift (bits 15:12)
    pub const CALIB_SHIFT: u16 = 12;
    /// Calibration field mask (unshifted)
    pub const CALIB_MASK: u16 = 0xf;

    /// Encode a PHY address into the address field
    #[inline(always)]
    pub const fn addr(addr: u8) -> u16 {
        ((addr as u16) & ADDR_MASK) << ADDR_SHIFT
    }

    /// Encode a calibration trim into the calibration field
    #[inline(always)]
    pub const fn calib(trim: u16) -> u16 {
        (trim & CALIB_MASK) << CALIB_SHIFT
    }
}
