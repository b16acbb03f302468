//! AC200 EPHY Vendor Register Definitions
//!
//! The AC200 EPHY banks its vendor registers into pages. Register 0x1f
//! selects the active page; page N is written as `N << 8`. Registers
//! 0x10-0x1e below are only meaningful with their page selected.
//!
//! # References
//!
//! - Allwinner H6 BSP `ac200` EPHY initialisation values

#![allow(dead_code)]

/// PHY identifier constants
pub mod phy_id {
    /// AC200 EPHY identifier (PHYIDR1:PHYIDR2)
    pub const ID: u32 = 0x0044_1400;
    /// PHY ID mask (ignores revision bits and the top nibble)
    pub const MASK: u32 = 0x0fff_fff0;
}

/// Page select register (present on every page)
pub const PAGE_SELECT: u8 = 0x1f;

/// Bit position of the page number inside [`PAGE_SELECT`]
pub const PAGE_SHIFT: u16 = 8;

/// Page numbers used by the bring-up sequence
pub mod page {
    /// Home page; IEEE registers live here
    pub const HOME: u8 = 0;
    /// Power saving controls
    pub const POWER: u8 = 1;
    /// Analog front end TRX trim
    pub const AFE_TRX: u8 = 2;
    /// Analog front end TX/RX tuning
    pub const AFE_TUNE: u8 = 6;
    /// Analog front end trim, bank 8
    pub const AFE_TRIM: u8 = 8;
}

/// Page 0 vendor registers
pub mod page0 {
    /// Revision fix-up register
    pub const FIXUP: u8 = 0x13;
    /// Bit set by the revision fix-up
    pub const FIXUP_BIT: u16 = 1 << 12;
}

/// Page 1 registers
pub mod page1 {
    /// Auto power saving control
    pub const APS_CTRL: u8 = 0x12;
    /// Value disabling auto power saving
    pub const APS_DISABLE: u16 = 0x4824;
    /// Intelligent energy detect control
    pub const IEEE_CTRL: u8 = 0x17;
    /// Intelligent IEEE power saving enable
    pub const IEEE_EN: u16 = 1 << 3;
}

/// Page 2 registers
pub mod page2 {
    /// AFE TRX optimization register
    pub const AFE_TRX: u8 = 0x18;
}

/// Page 6 registers
pub mod page6 {
    /// AFE RX optimization register
    pub const AFE_RX: u8 = 0x13;
    /// AFE TX optimization register
    pub const AFE_TX: u8 = 0x14;
    /// AFE TX/RX bias register
    pub const AFE_BIAS: u8 = 0x15;
    /// RX optimization value
    pub const AFE_RX_VALUE: u16 = 0xf000;
    /// TX optimization value
    pub const AFE_TX_VALUE: u16 = 0x708f;
    /// Bias value
    pub const AFE_BIAS_VALUE: u16 = 0x1530;
}

/// Page 8 registers
pub mod page8 {
    /// AFE TRX trim register
    pub const AFE_TRIM: u8 = 0x18;
    /// TRX trim value
    pub const AFE_TRIM_VALUE: u16 = 0x00bc;
}
