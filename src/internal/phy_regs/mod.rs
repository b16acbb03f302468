//! PHY Register Definitions
//!
//! Register definitions for the transceiver side, accessed via MDIO.
//! These are distinct from the companion device registers in
//! [`companion_regs`](super::companion_regs).
//!
//! # Module Organization
//!
//! - [`standard`] - IEEE 802.3 Clause 22 registers and the MMD access pair
//! - [`ac200`] - AC200 EPHY paged vendor registers

pub mod ac200;
pub mod standard;
