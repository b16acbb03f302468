//! Internal constants
//!
//! Timing budgets and fixed names shared across modules.

/// Calibration cell name in non-volatile storage
pub const CALIBRATION_CELL: &str = "ephy_calib";

/// Required calibration payload length in bytes
pub const CALIBRATION_LEN: usize = 2;

/// Offset added to the raw calibration cell value
pub const CALIBRATION_OFFSET: u16 = 3;

/// Default MDIO address of the EPHY, also programmed into EPHY_CTL
pub const DEFAULT_PHY_ADDR: u8 = 1;

/// Maximum valid PHY address (5-bit field)
pub const MAX_PHY_ADDR: u8 = 31;

/// Maximum valid register address (5-bit field)
pub const MAX_REG_ADDR: u8 = 31;

/// Soft reset poll interval in microseconds
pub const RESET_POLL_INTERVAL_US: u32 = 12_000;

/// Soft reset timeout in milliseconds
pub const SOFT_RESET_TIMEOUT_MS: u32 = 600;
