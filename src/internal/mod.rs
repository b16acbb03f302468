//! Internal Implementation Details
//!
//! This module contains implementation details that are not part of the public API.
//! Types in this module may change without notice between minor versions.
//!
//! # Contents
//!
//! - [`constants`]: Timing budgets and fixed names
//! - [`companion_regs`]: AC200 companion register addresses and bits
//! - [`phy_regs`]: IEEE 802.3 and AC200 EPHY paged register definitions
//!
//! # Stability
//!
//! **WARNING:** This module is `pub(crate)` only. Do not depend on any types
//! or functions in this module from external code.

pub(crate) mod companion_regs;
pub(crate) mod constants;
pub(crate) mod phy_regs;
