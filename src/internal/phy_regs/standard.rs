//! IEEE 802.3 PHY Register Definitions
//!
//! Standard Clause 22 register addresses and the bits the generic PHY hooks
//! touch, plus the Clause 45-over-Clause 22 indirect access pair (MMD).
//!
//! # Standard Registers
//!
//! | Register | Name | Description |
//! |----------|------|-------------|
//! | 0 | BMCR | Basic Mode Control |
//! | 1 | BMSR | Basic Mode Status |
//! | 2 | PHYIDR1 | PHY Identifier 1 |
//! | 3 | PHYIDR2 | PHY Identifier 2 |
//! | 13 | MMD_CTRL | MMD Access Control |
//! | 14 | MMD_DATA | MMD Access Address/Data |

// Complete register definitions, not every bit is used by the driver
#![allow(dead_code)]

// =============================================================================
// Standard PHY Register Addresses
// =============================================================================

/// Standard PHY register addresses (IEEE 802.3 Clause 22)
pub mod phy_reg {
    /// Basic Mode Control Register
    pub const BMCR: u8 = 0;
    /// Basic Mode Status Register
    pub const BMSR: u8 = 1;
    /// PHY Identifier 1
    pub const PHYIDR1: u8 = 2;
    /// PHY Identifier 2
    pub const PHYIDR2: u8 = 3;
    /// MMD Access Control Register
    pub const MMD_CTRL: u8 = 13;
    /// MMD Access Address/Data Register
    pub const MMD_DATA: u8 = 14;
}

// =============================================================================
// BMCR - Basic Mode Control Register (Register 0)
// =============================================================================

/// BMCR (Basic Mode Control Register) bits
pub mod bmcr {
    /// Soft reset - self-clearing
    pub const RESET: u16 = 1 << 15;
    /// Loopback mode
    pub const LOOPBACK: u16 = 1 << 14;
    /// Speed select (100 Mbps if set, 10 Mbps if clear)
    pub const SPEED_100: u16 = 1 << 13;
    /// Auto-negotiation enable
    pub const AN_ENABLE: u16 = 1 << 12;
    /// Power down
    pub const POWER_DOWN: u16 = 1 << 11;
    /// Isolate PHY from RMII/MII
    pub const ISOLATE: u16 = 1 << 10;
    /// Restart auto-negotiation - self-clearing
    pub const AN_RESTART: u16 = 1 << 9;
    /// Duplex mode (full duplex if set)
    pub const DUPLEX_FULL: u16 = 1 << 8;
}

// =============================================================================
// MMD_CTRL - MMD Access Control Register (Register 13)
// =============================================================================

/// MMD_CTRL bits
///
/// Bits 15:14 select the function of the following MMD_DATA access,
/// bits 4:0 carry the MMD device address.
pub mod mmd_ctrl {
    /// MMD_DATA holds the register address
    pub const FUNC_ADDRESS: u16 = 0 << 14;
    /// MMD_DATA holds data, no post increment
    pub const FUNC_DATA: u16 = 1 << 14;
    /// MMD_DATA holds data, post increment on read and write
    pub const FUNC_DATA_POST_INC: u16 = 2 << 14;
    /// MMD_DATA holds data, post increment on write only
    pub const FUNC_DATA_POST_INC_WRITE: u16 = 3 << 14;
    /// Function field mask
    pub const FUNC_MASK: u16 = 3 << 14;
    /// Device address mask
    pub const DEVAD_MASK: u16 = 0x001F;
}

/// MMD device addresses
pub mod mmd {
    /// Auto-negotiation MMD
    pub const AN: u8 = 7;
}

/// Auto-negotiation MMD (device 7) registers
pub mod mmd_an {
    /// EEE advertisement register (7.60)
    pub const EEE_ADV: u16 = 0x3c;
}

/// EEE advertisement register (7.60) bits
pub mod eee_adv {
    /// 100BASE-TX EEE advertised
    pub const ADV_100TX: u16 = 1 << 1;
}
